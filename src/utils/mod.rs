//! Utility functions and helpers.
//!
//! This module contains the unit conversion and size formatting helpers used
//! by the scanner output and the distribution report.

pub mod size;

pub use size::{SizeUnit, UNIT_TABLE, convert, format_auto, format_in};
