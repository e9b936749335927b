//! Core types and data structures for the tree container.
//!
//! This module contains the handle type, the node record and the generic
//! `Tree` itself, together with the aliases for its two disciplines.

use std::fmt;

use crate::compact_arena::CompactArena;
use crate::policy::{InsertionOrder, NaturalOrder, PathOrder};

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Opaque handle to a node of one specific tree instance.
///
/// A handle stays valid until its node, or one of its ancestors, is erased or
/// replaced. Using it afterwards, or against another tree, yields
/// [`TreeError::InvalidHandle`](crate::TreeError::InvalidHandle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) owner: u32,
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}@{}", self.index, self.generation, self.owner)
    }
}

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Storage unit: a value, its owned children and a non-owning parent link.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    /// Back-reference used for ascent only; never followed on destruction.
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// Generic hierarchical container.
///
/// The policy `P` decides where a new child goes among its siblings and
/// whether it may go there at all; every traversal is policy-agnostic.
///
/// # Examples
///
/// ```
/// use gentree::OrderedTree;
///
/// let mut tree = OrderedTree::new("root");
/// let root = tree.root().unwrap();
/// let b = tree.insert(root, "b").unwrap();
/// tree.insert(root, "a").unwrap();
/// tree.insert(b, "b1").unwrap();
///
/// let values: Vec<_> = tree.values().copied().collect();
/// assert_eq!(values, ["root", "b", "b1", "a"]);
/// ```
///
/// # Performance Characteristics
///
/// - **Insert (ordered)**: O(1) amortized
/// - **Insert (unique)**: O(log fanout) search plus O(fanout) shift
/// - **Find (ordered)**: O(n)
/// - **Find (unique)**: O(n) worst case, one binary search per visited level
/// - **Find (path)**: O(depth · log fanout)
/// - **Erase**: O(size of erased subtree + fanout)
#[derive(Debug)]
pub struct Tree<T, P> {
    pub(crate) nodes: CompactArena<Node<T>>,
    pub(crate) root: Option<NodeId>,
    pub(crate) policy: P,
}

/// Tree whose children keep insertion order.
///
/// Use [`Tree`] directly with [`InsertionOrderBy`](crate::InsertionOrderBy)
/// for a custom equality.
pub type OrderedTree<T> = Tree<T, InsertionOrder>;

/// Tree whose children are deduplicated and kept in `Ord` order.
///
/// Use [`Tree`] directly with [`KeyOrder`](crate::KeyOrder) or
/// [`ByKey`](crate::ByKey) for a custom comparator.
pub type UniqueTree<T> = Tree<T, NaturalOrder>;

/// Key-unique tree whose keys nest like paths: every node sorts right before
/// its own descendants, so `find` follows a single branch.
pub type PathTree<T> = Tree<T, PathOrder>;

// ============================================================================
// POLICY RESULT TYPES
// ============================================================================

/// Where a policy wants a new value among a sibling list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Insert before the sibling currently at this index.
    At(usize),
    /// The sibling at this index already holds an equal key.
    Duplicate(usize),
}

/// One step of a policy-driven lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descent {
    /// The sibling at this index is the target.
    Found(usize),
    /// The target can only live under the sibling at this index.
    Into(usize),
    /// The target is not below this level.
    Miss,
    /// The target is not at this level but may be under any sibling.
    Each,
    /// The policy cannot prune; fall back to a pre-order scan.
    Scan,
}
