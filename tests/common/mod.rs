// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use git2::{Oid, Repository, Signature};
use migrate_info::model::Blob;
use migrate_info::repository::HistoryWalker;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary git repository
pub fn create_test_repo() -> (TempDir, PathBuf, Repository) {
    let dir = TempDir::new().unwrap();
    let repo_path = dir.path().to_path_buf();
    let repo = Repository::init(&repo_path).unwrap();

    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test User").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();

    (dir, repo_path, repo)
}

/// Write files, stage them and commit on HEAD
pub fn add_commit(repo: &Repository, files: &[(&str, &[u8])], message: &str) -> Oid {
    commit_to_ref(repo, "HEAD", files, message)
}

/// Write files, stage them and commit onto `refname`, parented on HEAD.
///
/// HEAD itself is left alone unless `refname` is "HEAD".
pub fn commit_to_ref(
    repo: &Repository,
    refname: &str,
    files: &[(&str, &[u8])],
    message: &str,
) -> Oid {
    let sig = Signature::now("Test User", "test@example.com").unwrap();
    let mut index = repo.index().unwrap();

    for (path, content) in files {
        let full_path = repo.workdir().unwrap().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full_path, content).unwrap();
        index.add_path(Path::new(path)).unwrap();
    }

    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some(refname), &sig, &sig, message, &tree, &parents)
        .unwrap()
}

/// Commit an empty tree with no parents onto `refname`
pub fn orphan_commit(repo: &Repository, refname: &str, message: &str) -> Oid {
    let sig = Signature::now("Test User", "test@example.com").unwrap();
    let tree_id = repo.treebuilder(None).unwrap().write().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    repo.commit(Some(refname), &sig, &sig, message, &tree, &[])
        .unwrap()
}

/// Remove a file from the repository and create a commit
pub fn remove_file_commit(repo: &Repository, path: &str, message: &str) -> Oid {
    let sig = Signature::now("Test User", "test@example.com").unwrap();

    let full_path = repo.workdir().unwrap().join(path);
    if full_path.exists() {
        std::fs::remove_file(&full_path).unwrap();
    }

    let mut index = repo.index().unwrap();
    index.remove_path(Path::new(path)).unwrap();
    index.write().unwrap();

    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parent = repo.head().unwrap().peel_to_commit().unwrap();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[&parent])
        .unwrap()
}

/// Walk history and return every visited (path, size), sorted by path
pub fn visited(walker: &HistoryWalker) -> Vec<(String, i64)> {
    let mut seen = Vec::new();
    walker
        .walk(&mut |path: &str, blob: Blob| -> anyhow::Result<Blob> {
            seen.push((path.to_string(), blob.size));
            Ok(blob)
        })
        .unwrap();
    seen.sort();
    seen
}
