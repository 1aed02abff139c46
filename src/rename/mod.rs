//! Glob expansion, directory descent and the rename itself.

pub mod errors;
pub mod executor;
pub mod report;

pub use errors::RenameError;
pub use executor::{RenameOutcome, Renamer};
pub use report::{ConsoleReporter, Reporter, RunSummary};
