use crate::pattern::errors::PatternError;

const PREFIX: &str = "s/";
const SEPARATOR: char = '/';

/// A parsed `s/<search>/<replacement>/` expression.
///
/// The search half is kept verbatim for regex compilation. The replacement
/// half has every `\.` unescaped to `.`, since it is a replacement template
/// and not a regex, but users habitually escape dots in both halves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub search: String,
    pub replacement: String,
}

impl Substitution {
    /// Parse a substitution string.
    ///
    /// Only the first two `/`-separated segments are used. Anything after the
    /// second separator (normally the empty terminator) is discarded, so a
    /// replacement can never introduce a path separator.
    pub fn parse(input: &str) -> Result<Self, PatternError> {
        let body = input
            .strip_prefix(PREFIX)
            .ok_or(PatternError::MissingPrefix)?;

        let mut segments = body.split(SEPARATOR);
        let search = segments.next().unwrap_or_default();
        let replacement = segments.next().ok_or(PatternError::MissingSeparator)?;

        let discarded: Vec<&str> = segments.filter(|s| !s.is_empty()).collect();
        if !discarded.is_empty() {
            log::warn!(
                "ignoring trailing pattern segments after replacement: {}",
                discarded.join("/")
            );
        }

        Ok(Self {
            search: search.to_string(),
            replacement: replacement.replace("\\.", "."),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_basic() {
        let sub = Substitution::parse("s/old/new/").unwrap();
        assert_eq!(sub.search, "old");
        assert_eq!(sub.replacement, "new");
    }

    #[test]
    fn test_parse_without_terminator() {
        let sub = Substitution::parse("s/old/new").unwrap();
        assert_eq!(sub.search, "old");
        assert_eq!(sub.replacement, "new");
    }

    #[test]
    fn test_parse_empty_replacement() {
        let sub = Substitution::parse("s/_draft//").unwrap();
        assert_eq!(sub.search, "_draft");
        assert_eq!(sub.replacement, "");
    }

    #[test]
    fn test_replacement_dots_unescaped() {
        let sub = Substitution::parse(r"s/\.jpeg$/\.jpg/").unwrap();
        assert_eq!(sub.search, r"\.jpeg$");
        assert_eq!(sub.replacement, ".jpg");
    }

    #[test]
    fn test_replacement_keeps_group_references() {
        let sub = Substitution::parse(r"s/(\w+)-(\d+)/$2-$1/").unwrap();
        assert_eq!(sub.search, r"(\w+)-(\d+)");
        assert_eq!(sub.replacement, "$2-$1");
    }

    #[test]
    fn test_trailing_segments_discarded() {
        let sub = Substitution::parse("s/a/b/c/").unwrap();
        assert_eq!(sub.search, "a");
        assert_eq!(sub.replacement, "b");
    }

    #[test]
    fn test_missing_prefix() {
        let result = Substitution::parse("rename/foo/bar");
        assert!(matches!(result, Err(PatternError::MissingPrefix)));
    }

    #[test]
    fn test_missing_second_separator() {
        assert!(matches!(
            Substitution::parse("s/a"),
            Err(PatternError::MissingSeparator)
        ));
        assert!(matches!(
            Substitution::parse("s/"),
            Err(PatternError::MissingSeparator)
        ));
    }

    proptest! {
        #[test]
        fn prop_parse_splits_search_and_replacement(
            search in r"[a-zA-Z0-9_.\\()$*+-]{0,12}",
            replacement in r"[a-zA-Z0-9_.\\$-]{0,12}",
        ) {
            let input = format!("s/{search}/{replacement}/");
            let sub = Substitution::parse(&input).unwrap();
            prop_assert_eq!(sub.search, search);
            prop_assert_eq!(sub.replacement, replacement.replace("\\.", "."));
        }

        #[test]
        fn prop_missing_prefix_rejected(input in "[^s].*") {
            prop_assert!(matches!(
                Substitution::parse(&input),
                Err(PatternError::MissingPrefix)
            ));
        }
    }
}
