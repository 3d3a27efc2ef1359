/// Statistics aggregated for a single file extension qualifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatEntry {
    /// Extension with its marker, e.g. `*.png`
    pub qualifier: String,
    /// Number of blobs seen with this qualifier
    pub total: i64,
    /// Sum of the sizes of those blobs
    pub bytes_total: i64,
    /// Number of blobs strictly larger than the threshold
    pub total_above: i64,
    /// Sum of the sizes of only the blobs above the threshold
    pub bytes_above: i64,
}

impl StatEntry {
    pub fn new(qualifier: impl Into<String>) -> Self {
        Self {
            qualifier: qualifier.into(),
            ..Default::default()
        }
    }

    /// Share of blobs above the threshold, as a percentage
    pub fn percent_above(&self) -> f64 {
        100.0 * (self.total_above as f64 / self.total as f64)
    }
}
