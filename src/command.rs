//! The `migrate-info` pipeline: walk history, aggregate, report.

use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::model::Blob;
use crate::report::ReportFormatter;
use crate::repository::{BlobSource, HistoryWalker, PathFilter, RefSelection, reporter};
use crate::stats::{Entries, ExtensionStatsAggregator};

/// Resolved options for one run
#[derive(Debug, Clone)]
pub struct MigrateInfoOptions {
    pub repo_path: PathBuf,
    /// Blobs strictly larger than this many bytes count as "above"
    pub above: u64,
    /// Maximum number of rows; clamped to `[0, rows]`
    pub top: i64,
    pub refs: RefSelection,
    pub filter: PathFilter,
    pub quiet: bool,
}

impl Default for MigrateInfoOptions {
    fn default() -> Self {
        Self {
            repo_path: PathBuf::from("."),
            above: 0,
            top: 5,
            refs: RefSelection::default(),
            filter: PathFilter::default(),
            quiet: false,
        }
    }
}

pub struct MigrateInfo {
    options: MigrateInfoOptions,
}

impl MigrateInfo {
    pub fn new(options: MigrateInfoOptions) -> Self {
        Self { options }
    }

    /// Walk the configured repository and write the report to `out`
    pub fn run<W: Write>(&self, out: &mut W) -> Result<usize> {
        let walker = HistoryWalker::new(&self.options.repo_path)
            .with_refs(self.options.refs.clone())
            .with_filter(self.options.filter.clone())
            .with_progress(reporter(self.options.quiet));
        self.run_with_source(&walker, out)
    }

    /// Same as [`run`](Self::run) but reading blobs from any source
    pub fn run_with_source<W: Write>(&self, source: &impl BlobSource, out: &mut W) -> Result<usize> {
        let entries = self.collect(source)?;
        ReportFormatter::new(self.options.above).write_to(out, entries.as_slice())
    }

    /// Aggregate, sort and truncate without rendering
    pub fn collect(&self, source: &impl BlobSource) -> Result<Entries> {
        let mut aggregator = ExtensionStatsAggregator::new(self.options.above);

        let stats = source.for_each_blob(&mut |path: &str, blob: Blob| -> Result<Blob> {
            aggregator.observe(path, blob.size);
            Ok(blob)
        })?;
        info!(
            commits = stats.commits,
            blobs = stats.blobs,
            extensions = aggregator.len(),
            "Aggregated blob statistics"
        );

        Ok(aggregator
            .into_entries()
            .sort_by_bytes_above_desc()
            .truncate(self.options.top))
    }
}
