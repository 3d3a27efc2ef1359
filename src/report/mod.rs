//! Plain-text rendering of per-extension statistics

mod formatter;

pub use formatter::ReportFormatter;
