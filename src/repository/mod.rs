mod filter;
mod progress;
mod refs;
mod visitor;
mod walker;

pub use filter::PathFilter;
pub use progress::{reporter, IndicatifProgress, NoopProgress, ProgressHandle, ProgressReporter};
pub use refs::{RefSelection, ResolvedRefs};
pub use visitor::{BlobSource, BlobVisitor, WalkStats};
pub use walker::HistoryWalker;
