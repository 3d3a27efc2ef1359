//! Which part of history to traverse

use anyhow::{anyhow, bail, Context, Result};
use gix::ObjectId;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Refs selecting the commits to examine.
///
/// With no include refs and no `everything`, the current branch is examined
/// and commits already on remote-tracking branches are skipped, unless
/// exclude refs were given explicitly.
#[derive(Debug, Clone, Default)]
pub struct RefSelection {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub everything: bool,
}

/// Tip commits to walk from, and commits to leave out
#[derive(Debug, Default)]
pub struct ResolvedRefs {
    pub tips: Vec<ObjectId>,
    pub hidden: FxHashSet<ObjectId>,
}

impl RefSelection {
    pub fn everything() -> Self {
        Self {
            everything: true,
            ..Default::default()
        }
    }

    pub fn resolve(&self, repo: &gix::Repository) -> Result<ResolvedRefs> {
        if self.everything && (!self.include.is_empty() || !self.exclude.is_empty()) {
            bail!("Cannot use --everything with --include-ref or --exclude-ref");
        }

        let (tips, exclude_tips) = if self.everything {
            (all_ref_tips(repo)?, Vec::new())
        } else if self.include.is_empty() {
            let head = repo.head_commit().context("Failed to get HEAD commit")?;
            let exclude = if self.exclude.is_empty() {
                remote_tips(repo)?
            } else {
                resolve_all(repo, &self.exclude)?
            };
            (vec![head.id], exclude)
        } else {
            (resolve_all(repo, &self.include)?, resolve_all(repo, &self.exclude)?)
        };

        let hidden = reachable(repo, &exclude_tips)?;
        debug!(tips = tips.len(), hidden = hidden.len(), "Resolved refs");
        Ok(ResolvedRefs { tips, hidden })
    }
}

fn resolve_all(repo: &gix::Repository, names: &[String]) -> Result<Vec<ObjectId>> {
    names.iter().map(|name| resolve_commit(repo, name)).collect()
}

fn resolve_commit(repo: &gix::Repository, name: &str) -> Result<ObjectId> {
    let id = repo
        .rev_parse_single(name)
        .with_context(|| format!("Unknown ref: {}", name))?;
    let commit = id
        .object()?
        .peel_to_kind(gix::object::Kind::Commit)
        .with_context(|| format!("{} does not point to a commit", name))?;
    Ok(commit.id)
}

/// Tips of every ref that peels to a commit. Others (e.g. tags on blobs) are skipped.
fn all_ref_tips(repo: &gix::Repository) -> Result<Vec<ObjectId>> {
    let platform = repo.references()?;
    let mut tips = Vec::new();
    for reference in platform.all()? {
        let reference = reference
            .map_err(|e| anyhow!(e))
            .context("Failed to read reference")?;
        if let Some(oid) = peel_ref(reference) {
            tips.push(oid);
        }
    }
    dedup(&mut tips);
    Ok(tips)
}

fn remote_tips(repo: &gix::Repository) -> Result<Vec<ObjectId>> {
    let platform = repo.references()?;
    let mut tips = Vec::new();
    for reference in platform.remote_branches()? {
        let reference = reference
            .map_err(|e| anyhow!(e))
            .context("Failed to read remote-tracking reference")?;
        if let Some(oid) = peel_ref(reference) {
            tips.push(oid);
        }
    }
    dedup(&mut tips);
    Ok(tips)
}

fn peel_ref(reference: gix::Reference<'_>) -> Option<ObjectId> {
    let name = reference.name().as_bstr().to_string();
    let peeled = reference
        .into_fully_peeled_id()
        .ok()
        .and_then(|id| id.object().ok())
        .and_then(|obj| obj.peel_to_kind(gix::object::Kind::Commit).ok());
    match peeled {
        Some(commit) => Some(commit.id),
        None => {
            debug!(reference = %name, "Skipping ref that does not point to a commit");
            None
        }
    }
}

fn dedup(tips: &mut Vec<ObjectId>) {
    let mut seen = FxHashSet::default();
    tips.retain(|oid| seen.insert(*oid));
}

/// Every commit reachable from `tips`
fn reachable(repo: &gix::Repository, tips: &[ObjectId]) -> Result<FxHashSet<ObjectId>> {
    let mut commits = FxHashSet::default();
    if tips.is_empty() {
        return Ok(commits);
    }
    for info in repo.rev_walk(tips.iter().copied()).all()? {
        commits.insert(info?.id);
    }
    Ok(commits)
}
