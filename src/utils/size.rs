//! Size units and byte-count formatting.
//!
//! All sizes are carried as `u64` bytes. Floating point only appears at the
//! display boundary, when a byte count is converted into one of the binary
//! units below.

use std::{fmt, str::FromStr};

use clap::ValueEnum;
use serde::Serialize;

use crate::error::UnitError;

/// Display unit for byte counts.
///
/// Every unit is a power of 1024 and carries the short label users expect
/// from a disk tool (`KB` rather than `KiB`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, ValueEnum, Serialize)]
pub enum SizeUnit {
    /// Plain bytes
    #[value(name = "B")]
    #[serde(rename = "B")]
    Byte,

    /// 1024 bytes
    #[value(name = "KB")]
    #[serde(rename = "KB")]
    Kilobyte,

    /// 1024² bytes
    #[default]
    #[value(name = "MB")]
    #[serde(rename = "MB")]
    Megabyte,

    /// 1024³ bytes
    #[value(name = "GB")]
    #[serde(rename = "GB")]
    Gigabyte,

    /// 1024⁴ bytes
    #[value(name = "TB")]
    #[serde(rename = "TB")]
    Terabyte,
}

/// Every unit paired with its multiplier, smallest first.
pub const UNIT_TABLE: [(SizeUnit, u64); 5] = [
    (SizeUnit::Byte, 1),
    (SizeUnit::Kilobyte, 1 << 10),
    (SizeUnit::Megabyte, 1 << 20),
    (SizeUnit::Gigabyte, 1 << 30),
    (SizeUnit::Terabyte, 1 << 40),
];

impl SizeUnit {
    /// Number of bytes in one of this unit.
    #[must_use]
    pub const fn multiplier(self) -> u64 {
        UNIT_TABLE[self as usize].1
    }

    /// Short label (`"B"`, `"KB"`, ...).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Byte => "B",
            Self::Kilobyte => "KB",
            Self::Megabyte => "MB",
            Self::Gigabyte => "GB",
            Self::Terabyte => "TB",
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl FromStr for SizeUnit {
    type Err = UnitError;

    /// Parse a unit symbol, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();

        UNIT_TABLE
            .iter()
            .map(|(unit, _)| *unit)
            .find(|unit| unit.symbol().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnitError::Unknown(s.to_string()))
    }
}

/// Convert a byte count into `unit`, rounded to two decimal places.
///
/// # Examples
///
/// ```
/// # use folder_size::utils::{SizeUnit, convert};
/// assert_eq!(convert(1536, SizeUnit::Kilobyte), 1.5);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn convert(bytes: u64, unit: SizeUnit) -> f64 {
    let value = bytes as f64 / unit.multiplier() as f64;
    (value * 100.0).round() / 100.0
}

/// Format a byte count in a fixed unit, e.g. `"12.50 MB"`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_in(bytes: u64, unit: SizeUnit) -> String {
    format!("{:.2} {unit}", bytes as f64 / unit.multiplier() as f64)
}

/// Format a byte count in the largest unit that fits.
///
/// Units are tried from `TB` down to `KB`; the first whose multiplier is not
/// larger than `bytes` wins, so exactly 1024 bytes is `"1.00 KB"`. Anything
/// smaller than a kilobyte is shown as whole bytes.
///
/// # Examples
///
/// ```
/// # use folder_size::utils::format_auto;
/// assert_eq!(format_auto(1024), "1.00 KB");
/// assert_eq!(format_auto(500), "500 B");
/// ```
#[must_use]
pub fn format_auto(bytes: u64) -> String {
    UNIT_TABLE
        .iter()
        .rev()
        .filter(|(unit, _)| *unit != SizeUnit::Byte)
        .find(|(_, multiplier)| bytes >= *multiplier)
        .map_or_else(|| format!("{bytes} B"), |(unit, _)| format_in(bytes, *unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_unit_table_is_ordered() {
        for pair in UNIT_TABLE.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert_eq!(pair[1].1, pair[0].1 * 1024);
        }
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(SizeUnit::Byte.multiplier(), 1);
        assert_eq!(SizeUnit::Kilobyte.multiplier(), 1_024);
        assert_eq!(SizeUnit::Megabyte.multiplier(), 1_048_576);
        assert_eq!(SizeUnit::Gigabyte.multiplier(), 1_073_741_824);
        assert_eq!(SizeUnit::Terabyte.multiplier(), 1_099_511_627_776);
    }

    #[test]
    fn test_default_unit_is_mb() {
        assert_eq!(SizeUnit::default(), SizeUnit::Megabyte);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("B".parse::<SizeUnit>(), Ok(SizeUnit::Byte));
        assert_eq!("kb".parse::<SizeUnit>(), Ok(SizeUnit::Kilobyte));
        assert_eq!("Mb".parse::<SizeUnit>(), Ok(SizeUnit::Megabyte));
        assert_eq!(" GB ".parse::<SizeUnit>(), Ok(SizeUnit::Gigabyte));
        assert_eq!("tb".parse::<SizeUnit>(), Ok(SizeUnit::Terabyte));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!(
            "PB".parse::<SizeUnit>(),
            Err(UnitError::Unknown("PB".to_string()))
        );
        assert!("".parse::<SizeUnit>().is_err());
        assert!("KiB".parse::<SizeUnit>().is_err());
        assert!("auto".parse::<SizeUnit>().is_err());
    }

    #[test]
    fn test_display_matches_symbol() {
        for (unit, _) in UNIT_TABLE {
            assert_eq!(unit.to_string(), unit.symbol());
        }
    }

    #[test]
    fn test_convert_exact_multiples() {
        assert_close(convert(0, SizeUnit::Megabyte), 0.0);
        assert_close(convert(1536, SizeUnit::Kilobyte), 1.5);
        assert_close(convert(3 * 1_048_576, SizeUnit::Megabyte), 3.0);
        assert_close(convert(1_099_511_627_776, SizeUnit::Terabyte), 1.0);
        assert_close(convert(42, SizeUnit::Byte), 42.0);
    }

    #[test]
    fn test_convert_rounds_to_two_decimals() {
        // 5_000_000 / 1_048_576 = 4.768...
        assert_close(convert(5_000_000, SizeUnit::Megabyte), 4.77);
        // 1 / 1024 rounds down to zero
        assert_close(convert(1, SizeUnit::Kilobyte), 0.0);
        // 1_000 / 1024 = 0.9765...
        assert_close(convert(1_000, SizeUnit::Kilobyte), 0.98);
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn test_convert_inverts_multiplier() {
        for (unit, multiplier) in UNIT_TABLE {
            for n in [1u64, 7, 250, 1023] {
                let converted = convert(n * multiplier, unit);
                let restored = converted * multiplier as f64;
                let original = (n * multiplier) as f64;
                assert!((restored - original).abs() <= multiplier as f64 * 0.005);
            }
        }
    }

    #[test]
    fn test_format_auto_bytes() {
        assert_eq!(format_auto(0), "0 B");
        assert_eq!(format_auto(500), "500 B");
        assert_eq!(format_auto(1023), "1023 B");
    }

    #[test]
    fn test_format_auto_exact_boundaries() {
        assert_eq!(format_auto(1024), "1.00 KB");
        assert_eq!(format_auto(1_048_576), "1.00 MB");
        assert_eq!(format_auto(1_073_741_824), "1.00 GB");
        assert_eq!(format_auto(1_099_511_627_776), "1.00 TB");
    }

    #[test]
    fn test_format_auto_fractional() {
        assert_eq!(format_auto(1536), "1.50 KB");
        assert_eq!(format_auto(1_048_575), "1024.00 KB");
        assert_eq!(format_auto(2 * 1_099_511_627_776 * 1024), "2048.00 TB");
    }

    #[test]
    fn test_format_in_fixed_unit() {
        assert_eq!(format_in(0, SizeUnit::Megabyte), "0.00 MB");
        assert_eq!(format_in(500, SizeUnit::Byte), "500.00 B");
        assert_eq!(format_in(1_572_864, SizeUnit::Megabyte), "1.50 MB");
        assert_eq!(format_in(512, SizeUnit::Kilobyte), "0.50 KB");
    }
}
