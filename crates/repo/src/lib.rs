//! Repository layer for mvc
//!
//! This crate owns everything around the in-memory commit index:
//! - On-disk commit artifacts (`commit_<n>.txt` / `.diff` / `.msg`)
//! - Startup replay that rebuilds the index from the folder
//! - Commit creation with line-level diff summaries
//! - Destructive rollback followed by a full rebuild

pub mod diff;
pub mod repository;
pub mod store;

// Re-exports
pub use diff::DiffSummary;
pub use repository::Repository;
pub use store::CommitStore;

/// Result type for repository operations
pub type Result<T> = anyhow::Result<T>;
