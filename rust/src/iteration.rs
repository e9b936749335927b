//! Iterator implementations for trees.
//!
//! Four traversals share the same navigation over the arena: pre-order,
//! immediate children, leaves, and ancestors (ascent through parent links).
//! Each yields `(NodeId, &T)` pairs and has a values-only adapter.
//!
//! Iterators borrow the tree, so the borrow checker already rules out
//! mutating the tree while one is alive. Handles collected from an iterator
//! follow the usual handle rules.

use std::iter::FusedIterator;
use std::slice;

use crate::compact_arena::CompactArena;
use crate::error::TreeResult;
use crate::macros::value_iterators;
use crate::types::{Node, NodeId, Tree};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Depth-first traversal, parent before children, children in current order.
pub struct PreOrderIterator<'a, T> {
    nodes: &'a CompactArena<Node<T>>,
    pending: Option<NodeId>,
    /// Remaining children at each level of the current path.
    stack: Vec<slice::Iter<'a, NodeId>>,
}

/// The immediate children of one node, in current order.
pub struct ChildIterator<'a, T> {
    nodes: &'a CompactArena<Node<T>>,
    ids: slice::Iter<'a, NodeId>,
}

/// Pre-order traversal restricted to nodes without children.
pub struct LeafIterator<'a, T> {
    inner: PreOrderIterator<'a, T>,
}

/// Parent, grandparent, ... up to and including the root.
pub struct AncestorIterator<'a, T> {
    nodes: &'a CompactArena<Node<T>>,
    next: Option<NodeId>,
}

value_iterators!(PreOrder, Child, Leaf, Ancestor);

// ============================================================================
// TREE ITERATOR METHODS
// ============================================================================

impl<T, P> Tree<T, P> {
    /// Pre-order traversal of the whole tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use gentree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new(1);
    /// let root = tree.root().unwrap();
    /// let two = tree.insert(root, 2).unwrap();
    /// tree.insert(two, 3).unwrap();
    /// tree.insert(root, 4).unwrap();
    ///
    /// let order: Vec<_> = tree.pre_order().map(|(_, v)| *v).collect();
    /// assert_eq!(order, [1, 2, 3, 4]);
    /// ```
    pub fn pre_order(&self) -> PreOrderIterator<'_, T> {
        PreOrderIterator::new(&self.nodes, self.root)
    }

    /// Pre-order traversal of the subtree rooted at `node`.
    pub fn pre_order_from(&self, node: NodeId) -> TreeResult<PreOrderIterator<'_, T>> {
        self.node(node)?;
        Ok(PreOrderIterator::new(&self.nodes, Some(node)))
    }

    /// The immediate children of `node`.
    pub fn children_of(&self, node: NodeId) -> TreeResult<ChildIterator<'_, T>> {
        let ids = self.node(node)?.children.iter();
        Ok(ChildIterator {
            nodes: &self.nodes,
            ids,
        })
    }

    /// All leaves of the tree, in pre-order.
    pub fn leaves(&self) -> LeafIterator<'_, T> {
        LeafIterator {
            inner: self.pre_order(),
        }
    }

    /// The leaves below `node` (or `node` itself if it is a leaf).
    pub fn leaves_from(&self, node: NodeId) -> TreeResult<LeafIterator<'_, T>> {
        Ok(LeafIterator {
            inner: self.pre_order_from(node)?,
        })
    }

    /// The ancestors of `node`, nearest first.
    pub fn ancestors(&self, node: NodeId) -> TreeResult<AncestorIterator<'_, T>> {
        let next = self.node(node)?.parent;
        Ok(AncestorIterator {
            nodes: &self.nodes,
            next,
        })
    }

    /// Values in pre-order.
    pub fn values(&self) -> PreOrderValueIterator<'_, T> {
        self.pre_order().values()
    }

    /// Handles in pre-order.
    pub fn handles(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.pre_order().map(|(id, _)| id)
    }
}

// ============================================================================
// PREORDERITERATOR IMPLEMENTATION
// ============================================================================

impl<'a, T> PreOrderIterator<'a, T> {
    fn new(nodes: &'a CompactArena<Node<T>>, start: Option<NodeId>) -> Self {
        Self {
            nodes,
            pending: start,
            stack: Vec::new(),
        }
    }

    /// Depth of the most recently yielded node relative to the start node.
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }
}

impl<'a, T> Iterator for PreOrderIterator<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = match self.pending.take() {
            Some(id) => id,
            None => loop {
                let top = self.stack.last_mut()?;
                match top.next() {
                    Some(&id) => break id,
                    None => {
                        self.stack.pop();
                    }
                }
            },
        };

        let node = self.nodes.get(id)?;
        self.stack.push(node.children.iter());
        Some((id, &node.value))
    }
}

impl<'a, T> FusedIterator for PreOrderIterator<'a, T> {}

// ============================================================================
// CHILDITERATOR IMPLEMENTATION
// ============================================================================

impl<'a, T> ChildIterator<'a, T> {
    fn resolve(&self, id: NodeId) -> Option<(NodeId, &'a T)> {
        self.nodes.get(id).map(|node| (id, &node.value))
    }
}

impl<'a, T> Iterator for ChildIterator<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = *self.ids.next()?;
        self.resolve(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for ChildIterator<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = *self.ids.next_back()?;
        self.resolve(id)
    }
}

impl<'a, T> ExactSizeIterator for ChildIterator<'a, T> {}

impl<'a, T> FusedIterator for ChildIterator<'a, T> {}

// ============================================================================
// LEAFITERATOR IMPLEMENTATION
// ============================================================================

impl<'a, T> Iterator for LeafIterator<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.inner.nodes;
        self.inner
            .by_ref()
            .find(|(id, _)| nodes.get(*id).is_some_and(Node::is_leaf))
    }
}

impl<'a, T> FusedIterator for LeafIterator<'a, T> {}

// ============================================================================
// ANCESTORITERATOR IMPLEMENTATION
// ============================================================================

impl<'a, T> Iterator for AncestorIterator<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;
        let node = self.nodes.get(id)?;
        self.next = node.parent;
        Some((id, &node.value))
    }
}

impl<'a, T> FusedIterator for AncestorIterator<'a, T> {}
