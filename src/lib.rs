//! # folder-size
//!
//! Library behind the `folder-size` CLI: walk a directory tree, add up the
//! size of every file, and break the total down by file extension.
//!
//! ## Modules
//!
//! - [`scanner`] - Tree traversal and size aggregation
//! - [`model`] - Extension keys, filters, distributions and scan results
//! - [`utils`] - Size units, conversion and formatting
//! - [`report`] - Ordered per-extension breakdown
//! - [`output`] - JSON documents for `--json`
//! - [`config`] - Scan options and the persistent config file
//! - [`error`] - Errors returned by scans and unit parsing

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod report;
pub mod scanner;
pub mod utils;

pub use config::ScanOptions;
pub use error::{ScanError, UnitError};
pub use scanner::Scanner;
