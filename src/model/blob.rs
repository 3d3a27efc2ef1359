use gix::ObjectId;

/// A blob reached during history traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blob {
    pub oid: ObjectId,
    /// Logical (uncompressed) size in bytes
    pub size: i64,
}

impl Blob {
    pub fn new(oid: ObjectId, size: i64) -> Self {
        Self { oid, size }
    }
}
