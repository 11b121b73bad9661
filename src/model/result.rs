//! Scan results and the per-extension size distribution.

use std::collections::{HashMap, hash_map};

use super::ExtensionKey;

/// Accumulated bytes per extension.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SizeDistribution(HashMap<ExtensionKey, u64>);

impl SizeDistribution {
    /// Add `bytes` to the running total of `key`.
    pub fn add(&mut self, key: ExtensionKey, bytes: u64) {
        *self.0.entry(key).or_insert(0) += bytes;
    }

    /// Bytes accumulated for `key`, if any file of that kind was seen.
    #[must_use]
    pub fn get(&self, key: &ExtensionKey) -> Option<u64> {
        self.0.get(key).copied()
    }

    /// Sum of all entries.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Number of distinct extensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no file was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(extension, bytes)` pairs in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, ExtensionKey, u64> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a SizeDistribution {
    type Item = (&'a ExtensionKey, &'a u64);
    type IntoIter = hash_map::Iter<'a, ExtensionKey, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(ExtensionKey, u64)> for SizeDistribution {
    fn from_iter<T: IntoIterator<Item = (ExtensionKey, u64)>>(iter: T) -> Self {
        let mut distribution = Self::default();
        for (key, bytes) in iter {
            distribution.add(key, bytes);
        }
        distribution
    }
}

/// Outcome of a full (unfiltered) scan.
///
/// `distribution.total()` always equals `total_bytes`: a file either counts
/// toward both or toward neither.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ScanResult {
    /// Sum of the sizes of every file that could be read
    pub total_bytes: u64,

    /// Bytes per extension
    pub distribution: SizeDistribution,

    /// Number of files whose size was read
    pub file_count: u64,

    /// Entries that failed (unreadable directories, vanished files) and were left out
    pub skipped: u64,
}

impl ScanResult {
    /// `true` when the scan found no readable files.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.file_count == 0
    }
}
