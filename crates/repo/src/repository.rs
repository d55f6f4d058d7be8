//! Repository facade: on-disk artifacts plus the in-memory commit index
//!
//! Opening a repository replays its surviving artifacts into a fresh
//! index, oldest first. Committing writes artifacts before touching the
//! index, so a crash between the two leaves nothing worse than an
//! artifact the next replay picks up. Rollback deletes the artifact tail
//! and rebuilds the index from what survived.

use std::path::Path;

use anyhow::{bail, Context, Result};
use history::{CommitIndex, CommitRecord, NodeRef};

use crate::diff::DiffSummary;
use crate::store::CommitStore;

/// A repository folder and the index rebuilt from it.
#[derive(Debug)]
pub struct Repository {
    store: CommitStore,
    index: CommitIndex,
}

impl Repository {
    /// Open an existing repository folder, replaying its artifacts.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let store = CommitStore::open(root)?;
        let index = replay(&store)?;
        Ok(Self { store, index })
    }

    /// Create the repository folder if needed, then open it.
    pub fn init(root: impl AsRef<Path>) -> Result<Self> {
        let store = CommitStore::init(root)?;
        let index = replay(&store)?;
        Ok(Self { store, index })
    }

    pub fn store(&self) -> &CommitStore {
        &self.store
    }

    pub fn index(&self) -> &CommitIndex {
        &self.index
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Latest commit number, if any.
    pub fn head(&self) -> Option<u64> {
        self.index.head_version()
    }

    /// Commit `content` with `message`, returning the new commit number.
    ///
    /// The diff summary is computed against the previous commit's
    /// content; the first commit gets an empty summary.
    pub fn commit(&mut self, content: &str, message: &str) -> Result<u64> {
        if message.trim().is_empty() {
            bail!("commit message must not be empty");
        }

        let n = self.index.next_version();
        let diff_text = match self.head() {
            Some(prev) => {
                let prev_content = self
                    .store
                    .read_content(prev)
                    .with_context(|| format!("failed to read previous commit {}", prev))?;
                DiffSummary::compute(&prev_content, content).to_string()
            }
            None => String::new(),
        };

        self.store.write(n, content, &diff_text, message)?;

        let record = CommitRecord::new(CommitStore::content_file_name(n), diff_text, message);
        self.index.insert(n, record)?;

        tracing::debug!(commit = n, "recorded commit");
        Ok(n)
    }

    /// Permanently discard every commit newer than `keep`, on disk and
    /// in memory, then rebuild the index from the survivors.
    pub fn rollback(&mut self, keep: u64) -> Result<()> {
        if self.index.get_latest(keep).is_none() {
            bail!("unknown commit {}", keep);
        }

        let doomed: Vec<u64> = self
            .store
            .scan()?
            .into_iter()
            .filter(|&n| n > keep)
            .collect();
        for n in &doomed {
            self.store.remove(*n)?;
        }

        self.index = replay(&self.store)?;
        tracing::info!(keep, removed = doomed.len(), "rolled back");
        Ok(())
    }

    /// Stored content of commit `n`.
    pub fn read_content(&self, n: u64) -> Result<String> {
        self.store.read_content(n)
    }

    /// Commit `n` at the latest version.
    pub fn get(&self, n: u64) -> Option<NodeRef> {
        self.index.get_latest(n)
    }

    /// Commit `n` as the index stood at `version`.
    pub fn get_at(&self, n: u64, version: u64) -> Option<NodeRef> {
        self.index.get(n, version)
    }

    /// Newest commit older than `n`, read at `version`.
    pub fn predecessor(&self, n: u64, version: u64) -> Option<NodeRef> {
        self.index.predecessor(n, version)
    }

    /// Oldest commit newer than `n`, read at `version`.
    pub fn successor(&self, n: u64, version: u64) -> Option<NodeRef> {
        self.index.successor(n, version)
    }

    /// Every commit at the latest version, oldest first.
    pub fn timeline(&self) -> Vec<NodeRef> {
        self.index.timeline_latest()
    }
}

/// Rebuild a fresh index from the artifacts in `store`, oldest first.
///
/// Unreadable sidecar files degrade to empty fields rather than aborting
/// the replay; a commit is only as good as what survived on disk.
fn replay(store: &CommitStore) -> Result<CommitIndex> {
    let mut index = CommitIndex::new();
    for n in store.scan()? {
        let diff_summary = store.read_diff(n)?;
        let message = store.read_message(n)?;
        let record = CommitRecord::new(CommitStore::content_file_name(n), diff_summary, message);
        index
            .insert(n, record)
            .with_context(|| format!("failed to replay commit {}", n))?;
    }
    tracing::debug!(commits = index.len(), "replayed repository");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_commit_assigns_sequential_numbers() -> Result<()> {
        let temp = TempDir::new()?;
        let mut repo = Repository::init(temp.path())?;

        assert_eq!(repo.commit("one\n", "first")?, 1);
        assert_eq!(repo.commit("two\n", "second")?, 2);
        assert_eq!(repo.head(), Some(2));
        assert_eq!(repo.len(), 2);
        Ok(())
    }

    #[test]
    fn test_rejects_empty_message() -> Result<()> {
        let temp = TempDir::new()?;
        let mut repo = Repository::init(temp.path())?;

        assert!(repo.commit("content", "").is_err());
        assert!(repo.commit("content", "   ").is_err());
        assert!(repo.is_empty());
        Ok(())
    }

    #[test]
    fn test_first_commit_has_empty_diff() -> Result<()> {
        let temp = TempDir::new()?;
        let mut repo = Repository::init(temp.path())?;

        repo.commit("a\nb\n", "first")?;
        let node = repo.get(1).unwrap();
        assert_eq!(node.record().diff_summary, "");

        repo.commit("a\nc\nd\n", "second")?;
        let node = repo.get(2).unwrap();
        assert_eq!(node.record().diff_summary, "Added: 2, Removed: 1");
        Ok(())
    }

    #[test]
    fn test_reopen_replays_identical_state() -> Result<()> {
        let temp = TempDir::new()?;
        {
            let mut repo = Repository::init(temp.path())?;
            repo.commit("one\n", "first")?;
            repo.commit("two\n", "second")?;
            repo.commit("three\n", "third")?;
        }

        let repo = Repository::open(temp.path())?;
        assert_eq!(repo.head(), Some(3));
        let messages: Vec<String> = repo
            .timeline()
            .iter()
            .map(|n| n.record().message.clone())
            .collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
        assert_eq!(repo.read_content(2)?, "two\n");
        Ok(())
    }
}
