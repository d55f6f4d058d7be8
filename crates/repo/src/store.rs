//! On-disk commit artifacts
//!
//! A repository is a flat folder; commit `n` is three sibling files:
//! `commit_<n>.txt` (full content), `commit_<n>.diff` (diff summary
//! text) and `commit_<n>.msg` (commit message). The folder is the only
//! durable state — the index is rebuilt from it on every startup.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const CONTENT_EXT: &str = "txt";
const DIFF_EXT: &str = "diff";
const MESSAGE_EXT: &str = "msg";

/// Handle on a repository folder full of commit artifacts.
#[derive(Debug)]
pub struct CommitStore {
    root: PathBuf,
}

impl CommitStore {
    /// Open an existing repository folder.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            anyhow::bail!("not a repository folder: {}", root.display());
        }
        Ok(Self { root })
    }

    /// Create the repository folder if needed and open it.
    pub fn init(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)
            .with_context(|| format!("failed to create repository folder {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Artifact file name for commit `n`, e.g. `commit_7.txt`.
    pub fn content_file_name(n: u64) -> String {
        format!("commit_{}.{}", n, CONTENT_EXT)
    }

    fn artifact_path(&self, n: u64, ext: &str) -> PathBuf {
        self.root.join(format!("commit_{}.{}", n, ext))
    }

    /// Write the three artifacts for commit `n`.
    pub fn write(&self, n: u64, content: &str, diff_summary: &str, message: &str) -> Result<()> {
        let content_path = self.artifact_path(n, CONTENT_EXT);
        fs::write(&content_path, content)
            .with_context(|| format!("failed to write {}", content_path.display()))?;

        let diff_path = self.artifact_path(n, DIFF_EXT);
        fs::write(&diff_path, diff_summary)
            .with_context(|| format!("failed to write {}", diff_path.display()))?;

        let message_path = self.artifact_path(n, MESSAGE_EXT);
        fs::write(&message_path, message)
            .with_context(|| format!("failed to write {}", message_path.display()))?;

        Ok(())
    }

    /// Full content of commit `n`.
    pub fn read_content(&self, n: u64) -> Result<String> {
        let path = self.artifact_path(n, CONTENT_EXT);
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))
    }

    /// Diff summary of commit `n`; a missing sidecar reads as empty.
    pub fn read_diff(&self, n: u64) -> Result<String> {
        self.read_optional(self.artifact_path(n, DIFF_EXT))
    }

    /// Message of commit `n`; a missing sidecar reads as empty.
    pub fn read_message(&self, n: u64) -> Result<String> {
        self.read_optional(self.artifact_path(n, MESSAGE_EXT))
    }

    fn read_optional(&self, path: PathBuf) -> Result<String> {
        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
        }
    }

    /// Remove every artifact of commit `n`. Already-missing files are
    /// not an error.
    pub fn remove(&self, n: u64) -> Result<()> {
        for ext in [CONTENT_EXT, DIFF_EXT, MESSAGE_EXT] {
            let path = self.artifact_path(n, ext);
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(e).with_context(|| format!("failed to remove {}", path.display()))
                }
            }
        }
        Ok(())
    }

    /// Commit numbers present in the folder, sorted ascending.
    ///
    /// Only `commit_<n>.txt` names count; sidecars and unrelated files
    /// are ignored.
    pub fn scan(&self) -> Result<Vec<u64>> {
        let mut commits = Vec::new();
        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("failed to scan {}", self.root.display()))?;

        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name();
            if let Some(n) = parse_commit_file_name(&name.to_string_lossy()) {
                commits.push(n);
            }
        }

        commits.sort_unstable();
        Ok(commits)
    }
}

/// Parse `commit_<n>.txt` into `n`; anything else is `None`.
fn parse_commit_file_name(name: &str) -> Option<u64> {
    name.strip_prefix("commit_")?
        .strip_suffix(".txt")?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_commit_file_name() {
        assert_eq!(parse_commit_file_name("commit_1.txt"), Some(1));
        assert_eq!(parse_commit_file_name("commit_42.txt"), Some(42));
        assert_eq!(parse_commit_file_name("commit_42.diff"), None);
        assert_eq!(parse_commit_file_name("commit_.txt"), None);
        assert_eq!(parse_commit_file_name("commit_x.txt"), None);
        assert_eq!(parse_commit_file_name("notes.txt"), None);
    }

    #[test]
    fn test_open_requires_existing_folder() {
        let temp = TempDir::new().unwrap();
        assert!(CommitStore::open(temp.path().join("missing")).is_err());
        assert!(CommitStore::open(temp.path()).is_ok());
    }

    #[test]
    fn test_write_read_round_trip() -> Result<()> {
        let temp = TempDir::new()?;
        let store = CommitStore::init(temp.path().join("repo"))?;

        store.write(1, "hello\n", "Added: 1, Removed: 0", "first commit")?;

        assert_eq!(store.read_content(1)?, "hello\n");
        assert_eq!(store.read_diff(1)?, "Added: 1, Removed: 0");
        assert_eq!(store.read_message(1)?, "first commit");
        Ok(())
    }

    #[test]
    fn test_missing_sidecars_read_as_empty() -> Result<()> {
        let temp = TempDir::new()?;
        let store = CommitStore::init(temp.path())?;

        fs::write(temp.path().join("commit_3.txt"), "content")?;

        assert_eq!(store.read_diff(3)?, "");
        assert_eq!(store.read_message(3)?, "");
        assert!(store.read_content(99).is_err());
        Ok(())
    }

    #[test]
    fn test_scan_sorts_and_filters() -> Result<()> {
        let temp = TempDir::new()?;
        let store = CommitStore::init(temp.path())?;

        store.write(10, "c", "", "m")?;
        store.write(2, "a", "", "m")?;
        store.write(7, "b", "", "m")?;
        fs::write(temp.path().join("README.txt"), "not a commit")?;
        fs::write(temp.path().join("commit_9.msg"), "orphan sidecar")?;

        assert_eq!(store.scan()?, vec![2, 7, 10]);
        Ok(())
    }

    #[test]
    fn test_remove_deletes_all_artifacts() -> Result<()> {
        let temp = TempDir::new()?;
        let store = CommitStore::init(temp.path())?;

        store.write(4, "content", "diff", "msg")?;
        store.remove(4)?;

        assert!(store.scan()?.is_empty());
        assert_eq!(store.read_diff(4)?, "");
        // Removing again is a no-op.
        store.remove(4)?;
        Ok(())
    }
}
