//! Construction and initialization logic for trees.
//!
//! This module contains the constructors for both disciplines, subtree
//! extraction into a fresh tree, and the root-level resets.

use crate::compact_arena::CompactArena;
use crate::error::{TreeError, TreeResult};
use crate::policy::{ChildPolicy, InsertionOrder, NaturalOrder, PathOrder};
use crate::types::{Node, NodeId, Tree};

/// Result type for initialization operations
pub type InitResult<T> = TreeResult<T>;

/// Default number of node slots reserved up front.
pub const DEFAULT_CAPACITY: usize = 16;

impl<T, P> Tree<T, P> {
    /// Create an empty tree (no root) governed by `policy`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gentree::{InsertionOrder, OrderedTree};
    ///
    /// let tree: OrderedTree<i32> = OrderedTree::with_policy(InsertionOrder);
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.root(), None);
    /// ```
    pub fn with_policy(policy: P) -> Self {
        Self::with_capacity(policy, DEFAULT_CAPACITY)
    }

    /// Create an empty tree with room for `capacity` nodes before reallocating.
    pub fn with_capacity(policy: P, capacity: usize) -> Self {
        Self {
            nodes: CompactArena::with_capacity(capacity),
            root: None,
            policy,
        }
    }

    /// Create a tree holding a single root node.
    ///
    /// # Examples
    ///
    /// ```
    /// use gentree::{KeyOrder, Tree};
    ///
    /// let tree = Tree::with_root(3, KeyOrder::new(|a: &i32, b: &i32| b.cmp(a)));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn with_root(value: T, policy: P) -> Self {
        let mut tree = Self::with_policy(policy);
        tree.set_root(value);
        tree
    }

    /// Discard every node and make `value` the new root.
    ///
    /// All previously issued handles become invalid.
    pub fn set_root(&mut self, value: T) -> NodeId {
        self.nodes.clear();
        let root = self.nodes.allocate(Node::new(value, None));
        self.root = Some(root);
        root
    }

    /// Remove every node, leaving the tree empty.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// The policy this tree was built with.
    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<T> Tree<T, InsertionOrder> {
    /// Create an insertion-ordered tree seeded with a root value.
    pub fn new(root: T) -> Self {
        Self::with_root(root, InsertionOrder)
    }
}

impl<T: Ord> Tree<T, NaturalOrder> {
    /// Create a key-unique tree seeded with a root value.
    pub fn new(root: T) -> Self {
        Self::with_root(root, NaturalOrder)
    }
}

impl<T: Ord> Tree<T, PathOrder> {
    /// Create a key-unique tree for path-like keys seeded with a root value.
    pub fn new(root: T) -> Self {
        Self::with_root(root, PathOrder)
    }
}

impl<T: Clone, P: ChildPolicy<T>> Tree<T, P> {
    /// Copy the subtree rooted at `node` into a new tree with the same policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use gentree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new("/");
    /// let root = tree.root().unwrap();
    /// let usr = tree.insert(root, "usr").unwrap();
    /// tree.insert(usr, "bin").unwrap();
    ///
    /// let sub = OrderedTree::from_subtree(&tree, usr).unwrap();
    /// assert_eq!(sub.values().copied().collect::<Vec<_>>(), ["usr", "bin"]);
    /// ```
    pub fn from_subtree<Q>(source: &Tree<T, Q>, node: NodeId) -> InitResult<Self>
    where
        P: Default,
    {
        Self::from_subtree_with(source, node, P::default())
    }

    /// Copy the subtree rooted at `node` into a new tree governed by `policy`.
    ///
    /// Fails with `DuplicateKey` naming the `source` node whose children
    /// collide, if `policy` is keyed and they do.
    pub fn from_subtree_with<Q>(source: &Tree<T, Q>, node: NodeId, policy: P) -> InitResult<Self> {
        let value = source.node(node)?.value.clone();
        let mut tree = Self::with_root(value, policy);
        let root = tree.root.ok_or(TreeError::EmptyTree)?;
        tree.copy_children(source, node, root)?;
        Ok(tree)
    }
}

impl<T: Clone, P: ChildPolicy<T> + Clone> Clone for Tree<T, P> {
    /// Deep copy with a fresh arena: handles of `self` do not resolve in the clone.
    fn clone(&self) -> Self {
        let mut tree = Self::with_capacity(self.policy.clone(), self.nodes.len());
        if let Some(root) = self.root {
            if let Ok(node) = self.node(root) {
                let new_root = tree.set_root(node.value.clone());
                // Same policy over sibling sets that already satisfy it.
                let copied = tree.copy_children(self, root, new_root);
                debug_assert!(copied.is_ok(), "clone collided: {:?}", copied);
                if let Err(e) = copied {
                    log::warn!("clone of {} stopped early: {}", root, e);
                }
            }
        }
        tree
    }
}

impl<T, P: Default> Default for Tree<T, P> {
    /// An empty tree with the default policy.
    fn default() -> Self {
        Self::with_policy(P::default())
    }
}
