//! Partially persistent AVL commit index
//!
//! This crate provides the in-memory heart of mvc:
//! - Fat tree nodes with a bounded modification log (Driscoll-style
//!   partial persistence)
//! - Version-gated field accessors
//! - AVL insertion and rebalancing expressed over effective values
//! - Search, predecessor, successor, and timeline queries at any
//!   version ever committed
//!
//! Insertions only ever move forward; old versions stay queryable
//! without copying the structure. The index is rebuilt from on-disk
//! commit artifacts each run, so nothing here is persisted directly.

pub mod index;
pub mod node;
pub mod record;
mod tree;

// Re-exports
pub use index::CommitIndex;
pub use node::{height_at, CommitNode, NodeRef, MOD_CAPACITY};
pub use record::CommitRecord;

/// Result type for history operations
pub type Result<T> = anyhow::Result<T>;
