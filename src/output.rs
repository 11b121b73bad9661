//! Structured JSON output for scripting and piping.
//!
//! When the `--json` flag is passed, these structures are serialized to
//! stdout as a single JSON object, replacing all human-readable output.

use std::path::Path;

use serde::Serialize;

use crate::{
    model::{ExtensionFilter, ScanResult},
    report::DistributionRow,
    utils::{SizeUnit, convert, format_auto},
};

/// Top-level JSON output for a full scan.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// Absolute path of the analyzed folder.
    pub path: String,

    /// Unit used for every converted size in this document.
    pub unit: SizeUnit,

    /// Total size in bytes.
    pub total_bytes: u64,

    /// Total size in `unit`, rounded to two decimals.
    pub total_size: f64,

    /// Total size in the best-fitting unit (e.g. `"1.50 GB"`).
    pub total_size_auto: String,

    /// Number of files that were counted.
    pub file_count: u64,

    /// Number of entries that could not be read.
    pub skipped: u64,

    /// Per-extension breakdown, largest first.
    pub distribution: Vec<JsonDistributionEntry>,
}

/// One extension in the JSON breakdown.
#[derive(Serialize, Debug)]
pub struct JsonDistributionEntry {
    /// The extension (`".rs"`) or `"(no extension)"`.
    pub extension: String,

    /// Size in bytes.
    pub bytes: u64,

    /// Size in the document unit.
    pub size: f64,

    /// Share of the total in percent.
    pub percentage: f64,
}

/// JSON output for a scan restricted to some extensions.
#[derive(Serialize, Debug)]
pub struct JsonFilteredOutput {
    /// Absolute path of the analyzed folder.
    pub path: String,

    /// Unit used for `total_size`.
    pub unit: SizeUnit,

    /// Normalized suffixes that were matched.
    pub extensions: Vec<String>,

    /// Total size of the matching files in bytes.
    pub total_bytes: u64,

    /// Total size in `unit`, rounded to two decimals.
    pub total_size: f64,

    /// Total size in the best-fitting unit.
    pub total_size_auto: String,
}

impl JsonOutput {
    /// Build the document for a full scan.
    #[must_use]
    pub fn from_scan(path: &Path, unit: SizeUnit, result: &ScanResult, rows: &[DistributionRow]) -> Self {
        Self {
            path: path.display().to_string(),
            unit,
            total_bytes: result.total_bytes,
            total_size: convert(result.total_bytes, unit),
            total_size_auto: format_auto(result.total_bytes),
            file_count: result.file_count,
            skipped: result.skipped,
            distribution: rows.iter().map(JsonDistributionEntry::from_row).collect(),
        }
    }
}

impl JsonDistributionEntry {
    /// Convert a report row into its JSON form.
    #[must_use]
    pub fn from_row(row: &DistributionRow) -> Self {
        Self {
            extension: row.extension.to_string(),
            bytes: row.bytes,
            size: row.size,
            percentage: row.percentage,
        }
    }
}

impl JsonFilteredOutput {
    /// Build the document for a filtered scan.
    #[must_use]
    pub fn from_total(path: &Path, unit: SizeUnit, filter: &ExtensionFilter, total_bytes: u64) -> Self {
        Self {
            path: path.display().to_string(),
            unit,
            extensions: filter.suffixes().to_vec(),
            total_bytes,
            total_size: convert(total_bytes, unit),
            total_size_auto: format_auto(total_bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{ExtensionKey, SizeDistribution},
        report::format_distribution,
    };
    use serde_json::Value;

    fn sample_result() -> ScanResult {
        let distribution: SizeDistribution = vec![
            (ExtensionKey::Named(".rs".to_string()), 3072),
            (ExtensionKey::NoExtension, 1024),
        ]
        .into_iter()
        .collect();

        ScanResult {
            total_bytes: 4096,
            distribution,
            file_count: 3,
            skipped: 1,
        }
    }

    #[test]
    fn test_full_scan_document() {
        let result = sample_result();
        let rows = format_distribution(&result.distribution, SizeUnit::Kilobyte);
        let output = JsonOutput::from_scan(Path::new("/data"), SizeUnit::Kilobyte, &result, &rows);

        let json: Value = serde_json::to_value(&output).unwrap();

        assert_eq!(json["path"], "/data");
        assert_eq!(json["unit"], "KB");
        assert_eq!(json["total_bytes"], 4096);
        assert_eq!(json["total_size"], 4.0);
        assert_eq!(json["total_size_auto"], "4.00 KB");
        assert_eq!(json["file_count"], 3);
        assert_eq!(json["skipped"], 1);

        let distribution = json["distribution"].as_array().unwrap();
        assert_eq!(distribution.len(), 2);
        assert_eq!(distribution[0]["extension"], ".rs");
        assert_eq!(distribution[0]["percentage"], 75.0);
        assert_eq!(distribution[1]["extension"], "(no extension)");
        assert_eq!(distribution[1]["size"], 1.0);
    }

    #[test]
    fn test_filtered_document() {
        let filter = ExtensionFilter::new(["py", ".PYW"]);
        let output = JsonFilteredOutput::from_total(Path::new("/src"), SizeUnit::Byte, &filter, 130);

        let json: Value = serde_json::to_value(&output).unwrap();

        assert_eq!(json["unit"], "B");
        assert_eq!(json["extensions"], serde_json::json!([".py", ".pyw"]));
        assert_eq!(json["total_bytes"], 130);
        assert_eq!(json["total_size_auto"], "130 B");
    }
}
