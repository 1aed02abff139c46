use crate::rename::errors::RenameError;
use colored::Colorize;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

/// Receives per-path events as the executor walks its inputs.
pub trait Reporter {
    /// A rename that is about to be performed, or previewed in a dry run.
    fn change(&mut self, from: &Path, to: &Path);

    /// A path that was skipped because of a recoverable error.
    fn skip(&mut self, path: &Path, error: &RenameError);
}

/// Writes `<from> -> <to>` lines to stdout and warnings to stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn change(&mut self, from: &Path, to: &Path) {
        let mut stdout = io::stdout().lock();
        // Write errors on a closed stdout are ignored.
        let _ = writeln!(stdout, "{} -> {}", from.display(), to.display());
    }

    fn skip(&mut self, path: &Path, error: &RenameError) {
        eprintln!(
            "{}",
            format!("Warning: skipping {}: {}", path.display(), error).yellow()
        );
    }
}

/// Tally of what happened to each visited file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub renamed: usize,
    pub previewed: usize,
    pub unchanged: usize,
    pub skipped: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} renamed, {} previewed, {} unchanged, {} skipped",
            self.renamed, self.previewed, self.unchanged, self.skipped
        )
    }
}
