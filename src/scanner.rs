//! Directory traversal and size aggregation.
//!
//! The scanner walks a tree with `walkdir`, which keeps an explicit stack of
//! open directories instead of recursing, so arbitrarily deep trees are fine.
//! Symbolic links are never followed. Entries that fail along the way are
//! counted and skipped; only a root that cannot be reached aborts the scan.

use std::{fs, io, path::Path, time::Duration};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::ScanOptions,
    error::ScanError,
    model::{ExtensionFilter, ExtensionKey, ScanResult, SizeDistribution},
};

/// How many files are counted between two spinner refreshes.
const PROGRESS_INTERVAL: u64 = 1_000;

/// Running counters of a single walk.
#[derive(Default)]
struct WalkStats {
    bytes: u64,
    files: u64,
    skipped: u64,
    /// Only filled in verbose mode
    errors: Vec<String>,
}

/// Directory scanner computing total and per-extension sizes.
///
/// A `Scanner` holds only configuration; every call to [`Scanner::scan`] or
/// [`Scanner::scan_filtered`] owns its own accumulators, so one scanner can
/// be reused for any number of roots.
#[derive(Debug)]
pub struct Scanner {
    /// Configuration options for scanning behavior
    scan_options: ScanOptions,

    /// When `true`, suppresses progress spinner output (used by `--json` mode).
    quiet: bool,
}

impl Scanner {
    /// Create a new scanner with the specified options.
    ///
    /// # Examples
    ///
    /// ```
    /// # use folder_size::{config::ScanOptions, scanner::Scanner};
    /// let scanner = Scanner::new(ScanOptions::default()).with_quiet(true);
    /// ```
    #[must_use]
    pub const fn new(scan_options: ScanOptions) -> Self {
        Self {
            scan_options,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses progress spinner).
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Scan a tree and break its size down by extension.
    ///
    /// Every regular file below `root` is counted once. A file whose size
    /// cannot be read is left out of both the total and the distribution.
    /// If `root` is itself a regular file, the result describes that file.
    ///
    /// # Errors
    ///
    /// - [`ScanError::RootNotFound`] if `root` does not exist
    /// - [`ScanError::RootUnreadable`] if `root` exists but cannot be listed
    ///
    /// An existing but empty directory is not an error; it yields a zero
    /// result.
    pub fn scan(&self, root: &Path) -> Result<ScanResult, ScanError> {
        let mut distribution = SizeDistribution::default();

        let stats = self.walk(
            root,
            |_| true,
            |entry, size| distribution.add(ExtensionKey::from_file_name(entry.file_name()), size),
        )?;

        Ok(ScanResult {
            total_bytes: stats.bytes,
            distribution,
            file_count: stats.files,
            skipped: stats.skipped,
        })
    }

    /// Total size of the files whose names end with one of `filter`'s suffixes.
    ///
    /// Matching is case-insensitive. No distribution is built. An empty
    /// filter matches nothing and yields `0`.
    ///
    /// # Errors
    ///
    /// Same as [`Scanner::scan`].
    pub fn scan_filtered(&self, root: &Path, filter: &ExtensionFilter) -> Result<u64, ScanError> {
        let stats = self.walk(root, |entry| filter.matches(entry.file_name()), |_, _| {})?;

        Ok(stats.bytes)
    }

    /// Walk `root`, reading the size of every regular file `accept` lets through.
    fn walk<A, F>(&self, root: &Path, accept: A, mut on_file: F) -> Result<WalkStats, ScanError>
    where
        A: Fn(&DirEntry) -> bool,
        F: FnMut(&DirEntry, u64),
    {
        Self::check_root(root)?;

        let verbose = self.scan_options.verbose;
        let progress = self.progress_bar();
        let mut stats = WalkStats::default();

        let walker = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !self.is_skipped_dir(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    progress.finish_and_clear();
                    let source = err
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::other("filesystem loop at root"));
                    return Err(ScanError::from_root(root.to_path_buf(), source));
                }
                Err(err) => {
                    stats.skipped += 1;
                    if verbose {
                        stats.errors.push(format!("Skipped: {err}"));
                    }
                    continue;
                }
            };

            if !entry.file_type().is_file() || !accept(&entry) {
                continue;
            }

            match entry.metadata() {
                Ok(metadata) => {
                    let size = metadata.len();
                    stats.bytes += size;
                    stats.files += 1;
                    on_file(&entry, size);

                    if stats.files % PROGRESS_INTERVAL == 0 {
                        progress.set_message(format!("Scanning... {} files", stats.files));
                    }
                }
                Err(err) => {
                    stats.skipped += 1;
                    if verbose {
                        stats
                            .errors
                            .push(format!("Skipped {}: {err}", entry.path().display()));
                    }
                }
            }
        }

        progress.finish_with_message(format!("✅ Scanned {} files", stats.files));

        for error in &stats.errors {
            eprintln!("{}", error.red());
        }

        Ok(stats)
    }

    /// Make sure the root exists and, when it is a directory, can be listed.
    fn check_root(root: &Path) -> Result<(), ScanError> {
        let metadata =
            fs::metadata(root).map_err(|e| ScanError::from_root(root.to_path_buf(), e))?;

        if metadata.is_dir() {
            fs::read_dir(root).map_err(|e| ScanError::from_root(root.to_path_buf(), e))?;
        }

        Ok(())
    }

    /// Whether `entry` is a directory below the root named in the skip list.
    fn is_skipped_dir(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && self
                .scan_options
                .skip
                .iter()
                .any(|skip| entry.file_name() == skip.as_os_str())
    }

    fn progress_bar(&self) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Scanning...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}
