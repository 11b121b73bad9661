//! Per-extension breakdown report.
//!
//! Turns a [`SizeDistribution`] into rows ordered from the largest extension
//! to the smallest, each with its size in the display unit and its share of
//! the total.

use colored::Colorize;

use crate::{
    model::{ExtensionKey, SizeDistribution},
    utils::{SizeUnit, convert},
};

/// One line of the distribution report.
#[derive(Clone, PartialEq, Debug)]
pub struct DistributionRow {
    /// Extension the row describes
    pub extension: ExtensionKey,

    /// Raw byte count
    pub bytes: u64,

    /// Size in the report unit, rounded to two decimals
    pub size: f64,

    /// Share of the distribution total in percent, rounded to two decimals
    pub percentage: f64,
}

/// Build the report rows for `distribution`, largest first.
///
/// Rows with equal sizes are ordered by extension so the output is stable.
/// An empty distribution produces an empty report. When every file is empty
/// (total of zero bytes) each row reports `0.00%`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_distribution(distribution: &SizeDistribution, unit: SizeUnit) -> Vec<DistributionRow> {
    let total = distribution.total();

    let mut rows: Vec<DistributionRow> = distribution
        .iter()
        .map(|(extension, &bytes)| {
            let percentage = if total == 0 {
                0.0
            } else {
                let share = bytes as f64 / total as f64 * 100.0;
                (share * 100.0).round() / 100.0
            };

            DistributionRow {
                extension: extension.clone(),
                bytes,
                size: convert(bytes, unit),
                percentage,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.bytes
            .cmp(&a.bytes)
            .then_with(|| a.extension.cmp(&b.extension))
    });

    rows
}

/// Render report rows as aligned table lines.
///
/// ```text
///             .rs:    12.50 MB (83.33%)
///             .md:     2.50 MB (16.67%)
/// ```
#[must_use]
pub fn render_distribution(rows: &[DistributionRow], unit: SizeUnit) -> Vec<String> {
    rows.iter()
        .map(|row| {
            format!(
                "{:>15}: {:8.2} {unit} ({:5.2}%)",
                row.extension, row.size, row.percentage
            )
        })
        .collect()
}

/// Print the report under a section header.
pub fn print_distribution(rows: &[DistributionRow], unit: SizeUnit) {
    println!("\n{}", "File Type Distribution:".bold());
    println!("{}", "-".repeat(40));

    for line in render_distribution(rows, unit) {
        println!("{line}");
    }
}
