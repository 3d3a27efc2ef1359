//! Read-only git history walker
//!
//! Streams every blob reachable from the selected refs into a [`BlobVisitor`].
//!
//! - **tree**: recursive tree walking with `(tree, path)` and `(path, blob)` dedup
//! - this module: opening the repository, resolving refs, ordering commits

mod tree;

use anyhow::{Context, Result};
use gix::ObjectId;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

use super::filter::PathFilter;
use super::progress::{reporter, ProgressReporter};
use super::refs::{RefSelection, ResolvedRefs};
use super::visitor::{BlobSource, BlobVisitor, WalkStats};
use tree::TreeWalkCtx;

/// Git history walker feeding blobs to a visitor
pub struct HistoryWalker {
    repo_path: PathBuf,
    refs: RefSelection,
    filter: PathFilter,
    progress: Box<dyn ProgressReporter>,
}

impl HistoryWalker {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
            refs: RefSelection::default(),
            filter: PathFilter::default(),
            progress: reporter(false),
        }
    }

    /// Create a walker that draws no progress bar (used by tests)
    pub fn quiet(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            progress: reporter(true),
            ..Self::new(repo_path)
        }
    }

    pub fn with_refs(mut self, refs: RefSelection) -> Self {
        self.refs = refs;
        self
    }

    pub fn with_filter(mut self, filter: PathFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_progress(mut self, progress: Box<dyn ProgressReporter>) -> Self {
        self.progress = progress;
        self
    }

    /// Walk history, visiting each `(path, blob)` pair once
    pub fn walk(&self, visitor: &mut dyn BlobVisitor) -> Result<WalkStats> {
        let started = Instant::now();

        info!(path = %self.repo_path.display(), "Opening repository");
        let repo = gix::open(&self.repo_path).with_context(|| {
            format!("Failed to open git repository at {}", self.repo_path.display())
        })?;

        let resolved = self.refs.resolve(&repo)?;
        let commits = collect_commits(&repo, &resolved)?;
        info!(commits = commits.len(), "Collected commits");

        let mut ctx = TreeWalkCtx::new(&repo, &self.filter, visitor);
        let pb = self.progress.start("Examining commits", commits.len() as u64);
        let result = commits.iter().try_for_each(|oid| {
            pb.inc(1);
            let tree = repo
                .find_commit(*oid)
                .with_context(|| format!("Failed to read commit {}", oid))?
                .tree_id()
                .with_context(|| format!("Commit {} has no tree", oid))?
                .detach();
            ctx.walk_commit(tree)
        });
        pb.finish();
        result?;

        let stats = WalkStats {
            commits: commits.len(),
            trees: ctx.trees_visited(),
            blobs: ctx.blobs_visited(),
        };
        debug!(?stats, elapsed = ?started.elapsed(), "Walk finished");
        Ok(stats)
    }
}

impl BlobSource for HistoryWalker {
    fn for_each_blob(&self, visitor: &mut dyn BlobVisitor) -> Result<WalkStats> {
        self.walk(visitor)
    }
}

/// Commits reachable from the tips and not hidden, oldest first
fn collect_commits(repo: &gix::Repository, refs: &ResolvedRefs) -> Result<Vec<ObjectId>> {
    if refs.tips.is_empty() {
        return Ok(Vec::new());
    }

    let mut commits = Vec::new();
    for info in repo.rev_walk(refs.tips.iter().copied()).all()? {
        let id = info?.id;
        if !refs.hidden.contains(&id) {
            commits.push(id);
        }
    }
    commits.reverse();
    Ok(commits)
}
