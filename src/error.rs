use crate::pattern::PatternError;
use crate::rename::RenameError;
use thiserror::Error;

/// Errors that abort a whole run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Argument(String),

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Rename(#[from] RenameError),
}

pub type Result<T> = std::result::Result<T, Error>;
