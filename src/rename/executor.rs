use crate::options::RenameOptions;
use crate::pattern::Matcher;
use crate::rename::errors::RenameError;
use crate::rename::report::{Reporter, RunSummary};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What happened to a single regular file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "RenameOutcome should be checked for renamed/unchanged"]
pub enum RenameOutcome {
    /// File was moved to its new name
    Renamed { from: PathBuf, to: PathBuf },
    /// Dry run: file would have been moved
    Previewed { from: PathBuf, to: PathBuf },
    /// Substitution left the name as it was
    Unchanged,
}

/// Applies a compiled substitution to files, globs and (optionally)
/// directory trees.
///
/// Errors on individual paths are handed to the [`Reporter`] and never stop
/// the run; only an invalid glob pattern is returned to the caller.
#[derive(Debug, Clone)]
pub struct Renamer {
    matcher: Matcher,
    replacement: String,
    options: RenameOptions,
}

impl Renamer {
    pub fn new(matcher: Matcher, replacement: impl Into<String>, options: RenameOptions) -> Self {
        Self {
            matcher,
            replacement: replacement.into(),
            options,
        }
    }

    /// Expand each glob argument in order and process every path it matches.
    ///
    /// A glob that matches nothing contributes no work. A malformed glob
    /// aborts the run; arguments before it have already been processed.
    pub fn process_files<R>(
        &self,
        globs: &[String],
        reporter: &mut R,
    ) -> Result<RunSummary, RenameError>
    where
        R: Reporter + ?Sized,
    {
        let mut summary = RunSummary::default();

        for pattern in globs {
            let matches: Vec<_> = glob::glob(pattern)
                .map_err(|source| RenameError::Glob {
                    pattern: pattern.clone(),
                    source,
                })?
                .collect();

            log::debug!("glob '{}' matched {} paths", pattern, matches.len());

            for entry in matches {
                match entry {
                    Ok(path) => self.visit(&path, reporter, &mut summary),
                    Err(err) => {
                        let path = err.path().to_path_buf();
                        let error = RenameError::Stat {
                            path: path.clone(),
                            source: err.into_error(),
                        };
                        summary.skipped += 1;
                        reporter.skip(&path, &error);
                    }
                }
            }
        }

        Ok(summary)
    }

    /// Process one path, reporting (not returning) any failure.
    fn visit<R>(&self, path: &Path, reporter: &mut R, summary: &mut RunSummary)
    where
        R: Reporter + ?Sized,
    {
        if let Err(error) = self.process_path(path, reporter, summary) {
            summary.skipped += 1;
            reporter.skip(path, &error);
        }
    }

    fn process_path<R>(
        &self,
        path: &Path,
        reporter: &mut R,
        summary: &mut RunSummary,
    ) -> Result<(), RenameError>
    where
        R: Reporter + ?Sized,
    {
        let metadata = fs::metadata(path).map_err(|source| RenameError::Stat {
            path: path.to_path_buf(),
            source,
        })?;

        if metadata.is_dir() {
            if !self.options.recursive {
                log::debug!("not descending into {} (recursion disabled)", path.display());
                return Ok(());
            }
            return self.process_directory(path, reporter, summary);
        }

        match self.rename_file(path, reporter)? {
            RenameOutcome::Renamed { .. } => summary.renamed += 1,
            RenameOutcome::Previewed { .. } => summary.previewed += 1,
            RenameOutcome::Unchanged => summary.unchanged += 1,
        }
        Ok(())
    }

    /// Visit the immediate entries of `dir`; deeper levels are reached
    /// through [`Self::process_path`].
    fn process_directory<R>(
        &self,
        dir: &Path,
        reporter: &mut R,
        summary: &mut RunSummary,
    ) -> Result<(), RenameError>
    where
        R: Reporter + ?Sized,
    {
        // Listing is completed before any rename so entries renamed in this
        // directory are not visited twice.
        let entries = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| entry.map(walkdir::DirEntry::into_path))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| RenameError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })?;

        log::debug!("descending into {} ({} entries)", dir.display(), entries.len());

        for entry in entries {
            self.visit(&entry, reporter, summary);
        }
        Ok(())
    }

    /// Apply the substitution to the base name of a single file.
    ///
    /// The destination stays in the same directory. An occupied destination
    /// leaves the source untouched.
    pub fn rename_file<R>(&self, path: &Path, reporter: &mut R) -> Result<RenameOutcome, RenameError>
    where
        R: Reporter + ?Sized,
    {
        let old_name = path
            .file_name()
            .and_then(OsStr::to_str)
            .ok_or_else(|| RenameError::InvalidFileName {
                path: path.to_path_buf(),
            })?;

        if !self.matcher.is_match(old_name) {
            log::debug!("{} does not match", path.display());
            return Ok(RenameOutcome::Unchanged);
        }

        let new_name = self.matcher.apply(old_name, &self.replacement);
        if new_name == old_name {
            log::debug!("{} unchanged", path.display());
            return Ok(RenameOutcome::Unchanged);
        }
        if new_name.is_empty() {
            return Err(RenameError::EmptyName);
        }

        let target = path.with_file_name(&*new_name);

        if fs::symlink_metadata(&target).is_ok() {
            return Err(RenameError::TargetExists { target });
        }

        if self.options.reports_changes() {
            reporter.change(path, &target);
        }

        if self.options.dry_run {
            return Ok(RenameOutcome::Previewed {
                from: path.to_path_buf(),
                to: target,
            });
        }

        fs::rename(path, &target).map_err(|source| RenameError::Rename {
            from: path.to_path_buf(),
            to: target.clone(),
            source,
        })?;

        Ok(RenameOutcome::Renamed {
            from: path.to_path_buf(),
            to: target,
        })
    }
}
