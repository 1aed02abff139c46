use crate::error::Error;

/// Flags controlling a rename run. Fixed once parsed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenameOptions {
    /// Print what would be renamed without touching the filesystem.
    pub dry_run: bool,
    /// Descend into directories given on the command line.
    pub recursive: bool,
    /// Match the search expression case-insensitively.
    pub ignore_case: bool,
    /// Print every rename that is performed.
    pub show_changes: bool,
}

impl RenameOptions {
    /// Whether `<from> -> <to>` lines should be reported.
    pub fn reports_changes(&self) -> bool {
        self.show_changes || self.dry_run
    }
}

/// Split positional arguments into the substitution pattern and the
/// file/glob arguments, preserving their order.
pub fn validate_args(args: &[String]) -> Result<(&str, &[String]), Error> {
    match args {
        [] => Err(Error::Argument("pattern argument is required".to_string())),
        [_] => Err(Error::Argument(
            "at least one file argument is required".to_string(),
        )),
        [pattern, files @ ..] => Ok((pattern.as_str(), files)),
    }
}
