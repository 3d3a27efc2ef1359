use anyhow::{Context, Result};
use std::io::Write;

use crate::model::StatEntry;
use crate::util::{format_bytes, ljust, rjust};

/// Renders sorted entries as a tab-separated, column-aligned table
/// headed by the threshold they were counted against.
#[derive(Debug, Clone, Copy)]
pub struct ReportFormatter {
    threshold: u64,
}

impl ReportFormatter {
    pub fn new(threshold: u64) -> Self {
        Self { threshold }
    }

    pub fn header(&self) -> String {
        format!("Files above {}:", format_bytes(self.threshold))
    }

    /// Render the full report, including the trailing newline.
    pub fn render(&self, entries: &[StatEntry]) -> String {
        let extensions = ljust(
            &entries
                .iter()
                .map(|e| e.qualifier.as_str())
                .collect::<Vec<_>>(),
        );
        let files = rjust(&entries.iter().map(files_column).collect::<Vec<_>>());
        let percentages = rjust(&entries.iter().map(percentage_column).collect::<Vec<_>>());

        let mut lines = Vec::with_capacity(entries.len() + 1);
        lines.push(self.header());
        for ((extension, file_count), percentage) in
            extensions.iter().zip(&files).zip(&percentages)
        {
            lines.push([extension.as_str(), file_count.as_str(), percentage.as_str()].join("\t"));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Write the report to `to` in a single write, returning the number of
    /// bytes written.
    pub fn write_to<W: Write>(&self, to: &mut W, entries: &[StatEntry]) -> Result<usize> {
        let report = self.render(entries);
        to.write_all(report.as_bytes())
            .and_then(|_| to.flush())
            .context("Failed writing migration info report")?;
        Ok(report.len())
    }
}

fn files_column(entry: &StatEntry) -> String {
    format!(
        "{}, {}/{} files(s)",
        format_bytes(entry.bytes_above.max(0) as u64),
        entry.total_above,
        entry.total
    )
}

fn percentage_column(entry: &StatEntry) -> String {
    format!("{:.0}%", entry.percent_above())
}
