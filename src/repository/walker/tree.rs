//! Tree walking context
//!
//! Holds the per-walk state needed to visit each `(path, blob)` pair once.

use anyhow::{Context, Result};
use gix::bstr::{BString, ByteSlice};
use gix::prelude::FindExt;
use gix::ObjectId;
use rustc_hash::FxHashSet;

use crate::model::Blob;
use crate::repository::filter::PathFilter;
use crate::repository::visitor::BlobVisitor;

/// Buffer pool for reusing decode buffers across recursion
#[derive(Default)]
struct BufferPool {
    buffers: Vec<Vec<u8>>,
}

impl BufferPool {
    fn take(&mut self) -> Vec<u8> {
        self.buffers
            .pop()
            .unwrap_or_else(|| Vec::with_capacity(8 * 1024))
    }

    fn give(&mut self, mut buf: Vec<u8>) {
        buf.clear();
        self.buffers.push(buf);
    }
}

pub struct TreeWalkCtx<'a> {
    repo: &'a gix::Repository,
    filter: &'a PathFilter,
    visitor: &'a mut dyn BlobVisitor,
    buf_pool: BufferPool,

    // A tree reached again at the same path has nothing new below it.
    seen_trees: FxHashSet<(ObjectId, BString)>,
    seen_path_blobs: FxHashSet<(BString, ObjectId)>,
    blobs_visited: usize,
}

impl<'a> TreeWalkCtx<'a> {
    pub fn new(
        repo: &'a gix::Repository,
        filter: &'a PathFilter,
        visitor: &'a mut dyn BlobVisitor,
    ) -> Self {
        Self {
            repo,
            filter,
            visitor,
            buf_pool: BufferPool::default(),
            seen_trees: FxHashSet::default(),
            seen_path_blobs: FxHashSet::default(),
            blobs_visited: 0,
        }
    }

    /// Walk the root tree of one commit
    pub fn walk_commit(&mut self, tree: ObjectId) -> Result<()> {
        let mut path = Vec::with_capacity(256);
        self.walk_tree(tree, &mut path)
    }

    fn walk_tree(&mut self, tree_oid: ObjectId, path: &mut Vec<u8>) -> Result<()> {
        if !self
            .seen_trees
            .insert((tree_oid, BString::from(path.as_slice())))
        {
            return Ok(());
        }

        let mut buf = self.buf_pool.take();
        let result = self.walk_entries(tree_oid, &mut buf, path);
        self.buf_pool.give(buf);
        result
    }

    fn walk_entries(
        &mut self,
        tree_oid: ObjectId,
        buf: &mut Vec<u8>,
        path: &mut Vec<u8>,
    ) -> Result<()> {
        let tree = self
            .repo
            .objects
            .find_tree(&tree_oid, buf)
            .with_context(|| format!("Failed to read tree {}", tree_oid))?;

        let base_len = path.len();
        for entry in tree.entries.iter() {
            if !path.is_empty() {
                path.push(b'/');
            }
            path.extend_from_slice(entry.filename.as_ref());

            let oid = entry.oid.to_owned();
            let result = if entry.mode.is_blob() {
                self.visit_blob(oid, path)
            } else if entry.mode.is_tree() {
                self.walk_tree(oid, path)
            } else {
                Ok(())
            };

            path.truncate(base_len);
            result?;
        }
        Ok(())
    }

    fn visit_blob(&mut self, oid: ObjectId, path: &[u8]) -> Result<()> {
        if !self.seen_path_blobs.insert((BString::from(path), oid)) {
            return Ok(());
        }

        let path = path.to_str_lossy();
        if !self.filter.matches(&path) {
            return Ok(());
        }

        let header = self
            .repo
            .find_header(oid)
            .with_context(|| format!("Failed to read blob {} at {}", oid, path))?;
        let blob = Blob::new(oid, header.size() as i64);

        self.visitor.visit(&path, blob)?;
        self.blobs_visited += 1;
        Ok(())
    }

    /// Number of distinct (tree, path) pairs walked
    pub fn trees_visited(&self) -> usize {
        self.seen_trees.len()
    }

    /// Number of blobs handed to the visitor
    pub fn blobs_visited(&self) -> usize {
        self.blobs_visited
    }
}
