//! Regex Rename: batch file renaming with sed-style substitutions
//!
//! Renames files by applying an `s/<search>/<replacement>/` regular
//! expression substitution to their base names.
//!
//! # Pipeline
//!
//! A run is one linear pass:
//!
//! 1. [`validate_args`] splits the pattern from the file/glob arguments
//! 2. [`Substitution::parse`] splits the pattern into search and replacement
//! 3. [`Matcher::compile`] builds the regex (optionally case-insensitive)
//! 4. [`Renamer::process_files`] expands globs, descends into directories
//!    and renames
//!
//! Failures in steps 1-3, or a malformed glob, abort the run. Anything that
//! goes wrong with an individual path is handed to a [`Reporter`] and the
//! run carries on.
//!
//! # Example
//!
//! ```no_run
//! use regex_rename::{run, ConsoleReporter, RenameOptions};
//!
//! let args = vec!["s/_old/_new/".to_string(), "*.txt".to_string()];
//! let options = RenameOptions {
//!     dry_run: true,
//!     ..Default::default()
//! };
//!
//! match run(&args, &options, &mut ConsoleReporter) {
//!     Ok(summary) => println!("{summary}"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

pub mod error;
pub mod options;
pub mod pattern;
pub mod rename;

// Re-exports
pub use error::{Error, Result};
pub use options::{validate_args, RenameOptions};
pub use pattern::{Matcher, PatternError, Substitution};
pub use rename::{
    ConsoleReporter, RenameError, RenameOutcome, Renamer, Reporter, RunSummary,
};

/// Run the whole pipeline over positional `args` (pattern first, then
/// file/glob arguments).
pub fn run(
    args: &[String],
    options: &RenameOptions,
    reporter: &mut dyn Reporter,
) -> Result<RunSummary> {
    let (pattern, files) = validate_args(args)?;
    let substitution = Substitution::parse(pattern)?;
    let matcher = Matcher::compile(&substitution.search, options.ignore_case)?;

    let renamer = Renamer::new(matcher, substitution.replacement, *options);
    Ok(renamer.process_files(files, reporter)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Silent;

    impl Reporter for Silent {
        fn change(&mut self, _from: &Path, _to: &Path) {}
        fn skip(&mut self, _path: &Path, _error: &RenameError) {}
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_run_renames_matching_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("report_old.txt"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        let glob = dir.path().join("*.txt");

        let summary = run(
            &args(&["s/old/new/", glob.to_str().unwrap()]),
            &RenameOptions::default(),
            &mut Silent,
        )
        .unwrap();

        assert_eq!(summary.renamed, 1);
        assert_eq!(summary.unchanged, 1);
        assert!(dir.path().join("report_new.txt").exists());
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn test_run_ignore_case() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("old_file.txt"), "").unwrap();
        let file = dir.path().join("old_file.txt");
        let options = RenameOptions {
            ignore_case: true,
            ..Default::default()
        };

        run(
            &args(&["s/OLD/new/", file.to_str().unwrap()]),
            &options,
            &mut Silent,
        )
        .unwrap();

        assert!(dir.path().join("new_file.txt").exists());
    }

    #[test]
    fn test_run_fatal_errors() {
        let bad_prefix = run(&args(&["rename/foo/bar", "x"]), &RenameOptions::default(), &mut Silent);
        assert!(matches!(
            bad_prefix,
            Err(Error::Pattern(PatternError::MissingPrefix))
        ));

        let bad_regex = run(&args(&["s/(/x/", "x"]), &RenameOptions::default(), &mut Silent);
        assert!(matches!(
            bad_regex,
            Err(Error::Pattern(PatternError::InvalidRegex { .. }))
        ));

        let bad_glob = run(&args(&["s/a/b/", "[z"]), &RenameOptions::default(), &mut Silent);
        assert!(matches!(bad_glob, Err(Error::Rename(RenameError::Glob { .. }))));

        let no_files = run(&args(&["s/a/b/"]), &RenameOptions::default(), &mut Silent);
        assert!(matches!(no_files, Err(Error::Argument(_))));
    }
}
