//! Configuration types for scanning and the persistent config file.
//!
//! - [`ScanOptions`] controls how the scanner walks a tree
//! - [`FileConfig`] holds the values read from `config.toml`

pub mod file;
pub mod scan;

pub use file::FileConfig;
pub use scan::ScanOptions;
