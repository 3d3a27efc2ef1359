//! Callback seam between a history traversal and whatever consumes its blobs

use anyhow::Result;

use crate::model::Blob;

/// Receives every `(path, blob)` pair reached by a traversal.
///
/// Visitors return the blob they were handed; a read-only visitor returns it
/// unchanged. Returning an error stops the traversal.
pub trait BlobVisitor {
    fn visit(&mut self, path: &str, blob: Blob) -> Result<Blob>;
}

impl<F> BlobVisitor for F
where
    F: FnMut(&str, Blob) -> Result<Blob>,
{
    fn visit(&mut self, path: &str, blob: Blob) -> Result<Blob> {
        self(path, blob)
    }
}

/// Counters describing a finished traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub commits: usize,
    pub trees: usize,
    pub blobs: usize,
}

/// Anything that can stream blobs into a [`BlobVisitor`]
pub trait BlobSource {
    fn for_each_blob(&self, visitor: &mut dyn BlobVisitor) -> Result<WalkStats>;
}
