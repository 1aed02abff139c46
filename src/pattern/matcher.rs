use crate::pattern::errors::PatternError;
use regex::Regex;
use std::borrow::Cow;

const IGNORE_CASE_FLAG: &str = "(?i)";

/// Compiled search expression, reused for every file in a run.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    /// Compile `search`, prepending the inline case-insensitive flag when
    /// `ignore_case` is set.
    pub fn compile(search: &str, ignore_case: bool) -> Result<Self, PatternError> {
        let expression = if ignore_case {
            format!("{IGNORE_CASE_FLAG}{search}")
        } else {
            search.to_string()
        };

        let regex = Regex::new(&expression).map_err(|source| PatternError::InvalidRegex {
            expression: search.to_string(),
            source,
        })?;

        Ok(Self { regex })
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// Replace every match in `name` with `template`.
    ///
    /// `$1`, `${name}` and friends expand to capture groups; `$$` is a literal
    /// dollar sign. Returns `Cow::Borrowed` when nothing matched.
    pub fn apply<'n>(&self, name: &'n str, template: &str) -> Cow<'n, str> {
        self.regex.replace_all(name, template)
    }
}
