//! Per-extension statistics
//!
//! - **aggregator**: folds `(path, size)` observations into a mapping keyed by qualifier
//! - **entries**: turns that mapping into a sorted, truncated sequence for reporting

mod aggregator;
mod entries;

pub use aggregator::ExtensionStatsAggregator;
pub use entries::Entries;
