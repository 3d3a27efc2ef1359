mod blob;
mod entry;

pub use blob::Blob;
pub use entry::StatEntry;
