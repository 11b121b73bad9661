//! Data types produced by a scan.
//!
//! ## Main Parts
//!
//! - [`ExtensionKey`] - The lowercase suffix a file is grouped under
//! - [`ExtensionFilter`] - Suffix matcher for filtered scans
//! - [`SizeDistribution`] - Bytes accumulated per extension
//! - [`ScanResult`] - Total, distribution and counters of one scan

pub mod extension;
pub mod result;

pub use extension::{ExtensionFilter, ExtensionKey};
pub use result::{ScanResult, SizeDistribution};
