//! AVL insertion and version-parameterized queries over fat nodes
//!
//! Every read goes through the version-gated accessors, so the same
//! physical nodes serve as the tree for many versions at once. Inserting
//! at version `v` copies each node on the descent path at its effective
//! state, links the updated child back in, and rebalances with single
//! rotations; all changes are stamped with `v`.

use std::rc::Rc;

use crate::node::{self, height_at, CommitNode, NodeRef};
use crate::record::CommitRecord;

/// Recompute a node's height from its effective children and record it.
fn refresh_height(node: &NodeRef, version: u64) -> NodeRef {
    let height = 1 + height_at(node.left_at(version).as_ref(), version)
        .max(height_at(node.right_at(version).as_ref(), version));
    node::set_height(node, version, height)
}

fn balance_factor(node: &NodeRef, version: u64) -> i64 {
    i64::from(height_at(node.left_at(version).as_ref(), version))
        - i64::from(height_at(node.right_at(version).as_ref(), version))
}

/// Right rotation around `y`. The effective left child becomes the new
/// subtree root; it is copied first so the pivot lands in a fresh log.
/// Old nodes are left as they were.
fn rotate_right(y: &NodeRef, version: u64) -> NodeRef {
    let pivot = y.left_at(version).expect("right rotation requires a left child");
    let x = node::snapshot(&pivot, version);
    let carried = x.right_at(version);

    let y = node::set_left(y, carried, version);
    let y = refresh_height(&y, version);

    let x = node::set_right(&x, Some(y), version);
    refresh_height(&x, version)
}

/// Left rotation around `x`, mirror of [`rotate_right`].
fn rotate_left(x: &NodeRef, version: u64) -> NodeRef {
    let pivot = x.right_at(version).expect("left rotation requires a right child");
    let y = node::snapshot(&pivot, version);
    let carried = y.left_at(version);

    let x = node::set_right(x, carried, version);
    let x = refresh_height(&x, version);

    let y = node::set_left(&y, Some(x), version);
    refresh_height(&y, version)
}

/// Insert `(commit, record)` at `version` and return the root to use for
/// that version onward. Ties descend right, so equal keys keep their
/// in-order position.
pub(crate) fn insert(
    root: Option<&NodeRef>,
    version: u64,
    commit: u64,
    record: CommitRecord,
) -> NodeRef {
    let Some(root) = root else {
        return CommitNode::leaf(commit, record);
    };

    // Copy the path node at its effective state before touching it.
    let current = node::snapshot(root, version);
    let descend_left = commit < current.commit();
    let current = if descend_left {
        let child = insert(current.left_at(version).as_ref(), version, commit, record);
        node::set_left(&current, Some(child), version)
    } else {
        let child = insert(current.right_at(version).as_ref(), version, commit, record);
        node::set_right(&current, Some(child), version)
    };
    let current = refresh_height(&current, version);

    let balance = balance_factor(&current, version);

    if balance > 1 {
        let left = current
            .left_at(version)
            .expect("positive balance requires a left child");
        if commit < left.commit() {
            return rotate_right(&current, version);
        }
        let rotated = rotate_left(&left, version);
        let current = node::set_left(&current, Some(rotated), version);
        return rotate_right(&current, version);
    }
    if balance < -1 {
        let right = current
            .right_at(version)
            .expect("negative balance requires a right child");
        if commit >= right.commit() {
            return rotate_left(&current, version);
        }
        let rotated = rotate_right(&right, version);
        let current = node::set_right(&current, Some(rotated), version);
        return rotate_left(&current, version);
    }
    current
}

/// Binary search for `commit` in the tree as it stood at `version`.
pub(crate) fn find(node: Option<&NodeRef>, commit: u64, version: u64) -> Option<NodeRef> {
    let node = node?;
    if commit == node.commit() {
        Some(Rc::clone(node))
    } else if commit < node.commit() {
        find(node.left_at(version).as_ref(), commit, version)
    } else {
        find(node.right_at(version).as_ref(), commit, version)
    }
}

/// Largest commit strictly less than `commit` at `version`.
pub(crate) fn predecessor(root: Option<&NodeRef>, commit: u64, version: u64) -> Option<NodeRef> {
    let mut best = None;
    let mut current = root.cloned();
    while let Some(node) = current {
        if commit > node.commit() {
            current = node.right_at(version);
            best = Some(node);
        } else {
            current = node.left_at(version);
        }
    }
    best
}

/// Smallest commit strictly greater than `commit` at `version`.
pub(crate) fn successor(root: Option<&NodeRef>, commit: u64, version: u64) -> Option<NodeRef> {
    let mut best = None;
    let mut current = root.cloned();
    while let Some(node) = current {
        if commit < node.commit() {
            current = node.left_at(version);
            best = Some(node);
        } else {
            current = node.right_at(version);
        }
    }
    best
}

/// In-order walk of the tree as of `version`.
pub(crate) fn in_order(node: Option<&NodeRef>, version: u64, out: &mut Vec<NodeRef>) {
    if let Some(node) = node {
        in_order(node.left_at(version).as_ref(), version, out);
        out.push(Rc::clone(node));
        in_order(node.right_at(version).as_ref(), version, out);
    }
}
