//! The versioned commit index owned by the replay driver
//!
//! Wraps the tree behind an explicit state object holding a root handle
//! per committed version plus the next version number, instead of the
//! ambient globals a plugin would keep. The index is rebuilt from
//! on-disk artifacts on startup; nothing here touches the filesystem.

use anyhow::{bail, Result};

use crate::node::NodeRef;
use crate::record::CommitRecord;
use crate::tree;

/// In-memory index over every commit ever made, answering lookups,
/// predecessor/successor walks, and timeline listings at any version
/// that was ever committed.
///
/// Each insertion yields a root handle for its version; the handles
/// alias heavily-shared physical nodes. A query at version `v` descends
/// from the newest root at or below `v`, reading every field through
/// the version-gated accessors.
///
/// Versions double as search keys: commit `n` is inserted at version
/// `n`. Versions must arrive strictly increasing, starting at 1; the
/// replay driver is responsible for feeding artifacts in that order.
#[derive(Debug)]
pub struct CommitIndex {
    /// Root handle for every committed version, in version order.
    roots: Vec<(u64, NodeRef)>,
    next_version: u64,
}

impl CommitIndex {
    pub fn new() -> Self {
        Self {
            roots: Vec::new(),
            next_version: 1,
        }
    }

    /// Number of commits in the index.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Version the next commit will receive.
    pub fn next_version(&self) -> u64 {
        self.next_version
    }

    /// Latest committed version, if any commit exists.
    pub fn head_version(&self) -> Option<u64> {
        self.roots.last().map(|(v, _)| *v)
    }

    /// Root handle for the tree as it stood at `version`: the root of
    /// the newest commit at or below `version`.
    pub fn root_at(&self, version: u64) -> Option<NodeRef> {
        let idx = self.roots.partition_point(|(v, _)| *v <= version);
        (idx > 0).then(|| self.roots[idx - 1].1.clone())
    }

    /// Record commit `commit` in the index.
    ///
    /// Fails fast on a contract violation (version 0, or a version at or
    /// below one already committed) without touching the tree.
    pub fn insert(&mut self, commit: u64, record: CommitRecord) -> Result<()> {
        if commit == 0 {
            bail!("commit versions start at 1");
        }
        if commit < self.next_version {
            bail!(
                "commit versions must be strictly increasing: got {} after {}",
                commit,
                self.next_version - 1
            );
        }
        let prev_root = self.roots.last().map(|(_, root)| root);
        let root = tree::insert(prev_root, commit, commit, record);
        self.roots.push((commit, root));
        self.next_version = commit + 1;
        Ok(())
    }

    /// Commit `commit` as the index stood at `version`, or `None` if it
    /// was not visible then.
    pub fn get(&self, commit: u64, version: u64) -> Option<NodeRef> {
        tree::find(self.root_at(version).as_ref(), commit, version)
    }

    /// Commit `commit` at the latest version.
    pub fn get_latest(&self, commit: u64) -> Option<NodeRef> {
        self.get(commit, self.head_version()?)
    }

    /// Largest commit strictly below `commit` at `version`.
    pub fn predecessor(&self, commit: u64, version: u64) -> Option<NodeRef> {
        tree::predecessor(self.root_at(version).as_ref(), commit, version)
    }

    /// Smallest commit strictly above `commit` at `version`.
    pub fn successor(&self, commit: u64, version: u64) -> Option<NodeRef> {
        tree::successor(self.root_at(version).as_ref(), commit, version)
    }

    /// All commits visible at `version`, in increasing commit order.
    pub fn timeline(&self, version: u64) -> Vec<NodeRef> {
        let mut out = Vec::new();
        tree::in_order(self.root_at(version).as_ref(), version, &mut out);
        out
    }

    /// Timeline at the latest version (empty for a fresh index).
    pub fn timeline_latest(&self) -> Vec<NodeRef> {
        match self.head_version() {
            Some(head) => self.timeline(head),
            None => Vec::new(),
        }
    }
}

impl Default for CommitIndex {
    fn default() -> Self {
        Self::new()
    }
}
