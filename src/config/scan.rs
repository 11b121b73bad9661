//! Scanning configuration for directory traversal.
//!
//! This module defines the options that control how directories are walked
//! and what is reported about entries that could not be read.

use std::path::PathBuf;

/// Configuration for directory scanning behavior.
#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    /// Whether to print every entry that was skipped because of an access error
    pub verbose: bool,

    /// Directory names that are not descended into
    pub skip: Vec<PathBuf>,
}
