use std::collections::HashMap;

use crate::model::StatEntry;
use crate::util::qualifier;

use super::Entries;

/// Accumulates [`StatEntry`] values keyed by file extension qualifier
#[derive(Debug, Default)]
pub struct ExtensionStatsAggregator {
    threshold: u64,
    exts: HashMap<String, StatEntry>,
}

impl ExtensionStatsAggregator {
    pub fn new(threshold: u64) -> Self {
        Self {
            threshold,
            exts: HashMap::new(),
        }
    }

    /// Record one blob of `size` bytes found at `path`.
    ///
    /// Paths without an extension are ignored.
    pub fn observe(&mut self, path: &str, size: i64) {
        let Some(qualifier) = qualifier(path) else {
            return;
        };

        let entry = self
            .exts
            .entry(qualifier)
            .or_insert_with_key(|q| StatEntry::new(q.as_str()));

        entry.total += 1;
        entry.bytes_total += size;

        // Negative sizes are never above a threshold.
        if i128::from(size) > i128::from(self.threshold) {
            entry.total_above += 1;
            entry.bytes_above += size;
        }
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    pub fn get(&self, qualifier: &str) -> Option<&StatEntry> {
        self.exts.get(qualifier)
    }

    pub fn len(&self) -> usize {
        self.exts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exts.is_empty()
    }

    /// Hand the accumulated mapping over for sorting and reporting
    pub fn into_entries(self) -> Entries {
        Entries::from_map(self.exts)
    }
}
