//! Tree structure management operations.
//!
//! This module contains the whole-tree queries: size, leaf count, height, and
//! structural equality between trees of any two policies.

use crate::compact_arena::ArenaStats;
use crate::types::Tree;

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<T, P> Tree<T, P> {
    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of leaf nodes in the tree.
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Number of levels: 0 for an empty tree, 1 for a lone root.
    pub fn height(&self) -> usize {
        let mut iter = self.pre_order();
        let mut height = 0;
        while iter.next().is_some() {
            height = height.max(iter.depth() + 1);
        }
        height
    }

    /// Get statistics for the node arena.
    pub fn arena_stats(&self) -> ArenaStats {
        self.nodes.stats()
    }
}

/// Two trees are equal when their pre-order value sequences are equal,
/// length included. Shape is not compared separately.
impl<T: PartialEq, P, Q> PartialEq<Tree<T, Q>> for Tree<T, P> {
    fn eq(&self, other: &Tree<T, Q>) -> bool {
        self.len() == other.len() && self.values().eq(other.values())
    }
}
