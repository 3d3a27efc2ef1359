use std::collections::HashMap;

use crate::model::StatEntry;

/// An ordered sequence of [`StatEntry`] values ready for reporting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entries(Vec<StatEntry>);

impl Entries {
    /// Extract the values of a qualifier mapping.
    ///
    /// Entries come out ordered by qualifier so that later sorting is
    /// reproducible regardless of hash order.
    pub fn from_map(exts: HashMap<String, StatEntry>) -> Self {
        let mut entries: Vec<StatEntry> = exts.into_values().collect();
        entries.sort_by(|a, b| a.qualifier.cmp(&b.qualifier));
        Self(entries)
    }

    /// Order entries by bytes above the threshold, largest first.
    ///
    /// The sort is stable: entries with equal `bytes_above` keep their
    /// relative order.
    pub fn sort_by_bytes_above_desc(mut self) -> Self {
        self.0.sort_by(|a, b| b.bytes_above.cmp(&a.bytes_above));
        self
    }

    /// Keep the first `n` entries. `n` is clamped to `[0, len]`.
    pub fn truncate(mut self, n: i64) -> Self {
        let n = n.clamp(0, self.0.len() as i64) as usize;
        self.0.truncate(n);
        self
    }

    pub fn as_slice(&self) -> &[StatEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<StatEntry>> for Entries {
    fn from(entries: Vec<StatEntry>) -> Self {
        Self(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(qualifier: &str, bytes_above: i64) -> StatEntry {
        StatEntry {
            qualifier: qualifier.to_string(),
            total: 1,
            bytes_total: bytes_above,
            total_above: 1,
            bytes_above,
        }
    }

    fn five_entries() -> Entries {
        Entries::from(vec![
            entry("*.a", 5),
            entry("*.b", 4),
            entry("*.c", 3),
            entry("*.d", 2),
            entry("*.e", 1),
        ])
    }

    fn bytes(entries: &Entries) -> Vec<i64> {
        entries.as_slice().iter().map(|e| e.bytes_above).collect()
    }

    #[test]
    fn test_sort_descending() {
        let entries = Entries::from(vec![entry("*.x", 10), entry("*.y", 50), entry("*.z", 30)])
            .sort_by_bytes_above_desc();
        assert_eq!(bytes(&entries), vec![50, 30, 10]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let entries = Entries::from(vec![entry("*.b", 7), entry("*.a", 7), entry("*.c", 9)])
            .sort_by_bytes_above_desc();
        let order: Vec<_> = entries.as_slice().iter().map(|e| e.qualifier.as_str()).collect();
        assert_eq!(order, vec!["*.c", "*.b", "*.a"]);
    }

    #[test]
    fn test_from_map_orders_by_qualifier() {
        let mut map = HashMap::new();
        for q in ["*.zip", "*.bin", "*.png"] {
            map.insert(q.to_string(), entry(q, 1));
        }
        let entries = Entries::from_map(map);
        let order: Vec<_> = entries.as_slice().iter().map(|e| e.qualifier.as_str()).collect();
        assert_eq!(order, vec!["*.bin", "*.png", "*.zip"]);
    }

    #[test]
    fn test_truncate_larger_than_len_keeps_all() {
        let entries = five_entries().truncate(10);
        assert_eq!(entries, five_entries());
    }

    #[test]
    fn test_truncate_prefix() {
        let entries = five_entries().truncate(2);
        assert_eq!(bytes(&entries), vec![5, 4]);
    }

    #[test]
    fn test_truncate_zero_and_negative() {
        assert!(five_entries().truncate(0).is_empty());
        assert!(five_entries().truncate(-3).is_empty());
    }
}
