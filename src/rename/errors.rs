use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenameError {
    #[error("error processing glob pattern {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("cannot access {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("file name is not valid UTF-8: {path}")]
    InvalidFileName { path: PathBuf },

    #[error("substitution produced an empty file name")]
    EmptyName,

    #[error("target file already exists: {target}")]
    TargetExists { target: PathBuf },

    #[error("failed to rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenameError {
    /// Whether this error aborts the whole run rather than a single path.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RenameError::Glob { .. })
    }
}
