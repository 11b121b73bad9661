//! Error types surfaced by the library.
//!
//! Per-entry failures during a walk never show up here: they are counted and
//! skipped by the scanner. Only failures that make a whole scan meaningless
//! (the root cannot be reached) or reject user input (an unknown unit) are
//! represented as errors.

use std::{io, path::PathBuf};

use thiserror::Error;

/// A scan that could not produce a result at all.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The root path does not exist.
    #[error("path does not exist: {}", path.display())]
    RootNotFound {
        /// The root that was requested
        path: PathBuf,
    },

    /// The root exists but cannot be inspected or listed.
    #[error("cannot read {}: {source}", path.display())]
    RootUnreadable {
        /// The root that was requested
        path: PathBuf,

        /// The underlying OS error
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Classify an I/O error raised while opening the root.
    pub(crate) fn from_root(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::RootNotFound { path }
        } else {
            Self::RootUnreadable { path, source }
        }
    }

    /// The root path the failed scan was started from.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::RootNotFound { path } | Self::RootUnreadable { path, .. } => path,
        }
    }
}

/// Rejected unit symbol.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    /// The string is not one of the supported unit symbols.
    #[error("unsupported unit: {0} (supported: B, KB, MB, GB, TB)")]
    Unknown(String),
}
