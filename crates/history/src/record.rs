//! Commit metadata carried by every tree node

/// What a commit stores besides its number: the artifact file name, a
/// line-level diff summary against the previous commit, and the message
/// the user supplied.
///
/// The index never interprets these fields; it only hands them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// On-disk artifact name, e.g. `commit_7.txt`
    pub file_name: String,
    /// Diff summary text, e.g. `Added: 3, Removed: 1` (empty for the
    /// first commit)
    pub diff_summary: String,
    /// Commit message
    pub message: String,
}

impl CommitRecord {
    pub fn new(
        file_name: impl Into<String>,
        diff_summary: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            diff_summary: diff_summary.into(),
            message: message.into(),
        }
    }
}
