//! GET operations for trees.
//!
//! This module contains handle-based accessors and the `find` family. `find`
//! is driven by the policy: insertion-ordered trees scan in pre-order, keyed
//! trees binary-search each level they visit, and path-keyed trees follow a
//! single branch down.

use crate::error::{FindResult, TreeError, TreeResult};
use crate::policy::{ChildPolicy, Siblings};
use crate::types::{Descent, NodeId, Tree};

impl<T, P> Tree<T, P> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Handle of the root, or `None` if the tree is empty.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Check if `node` denotes a live node of this tree.
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(node)
    }

    /// Get a reference to the value at `node`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gentree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new(1);
    /// let root = tree.root().unwrap();
    /// assert_eq!(tree.get(root), Some(&1));
    /// tree.erase(root).unwrap();
    /// assert_eq!(tree.get(root), None);
    /// ```
    pub fn get(&self, node: NodeId) -> Option<&T> {
        self.nodes.get(node).map(|n| &n.value)
    }

    /// Get the value at `node`, returning `InvalidHandle` if it is not live.
    pub fn value(&self, node: NodeId) -> TreeResult<&T> {
        self.node(node).map(|n| &n.value)
    }

    /// Parent of `node`; `Ok(None)` for the root.
    pub fn parent(&self, node: NodeId) -> TreeResult<Option<NodeId>> {
        self.node(node).map(|n| n.parent)
    }

    /// Handles of the immediate children of `node`, in current order.
    pub fn children(&self, node: NodeId) -> TreeResult<&[NodeId]> {
        self.node(node).map(|n| n.children.as_slice())
    }

    pub fn child_count(&self, node: NodeId) -> TreeResult<usize> {
        self.node(node).map(|n| n.children.len())
    }

    pub fn is_leaf(&self, node: NodeId) -> TreeResult<bool> {
        self.node(node).map(|n| n.is_leaf())
    }

    /// Number of edges between `node` and the root.
    pub fn depth(&self, node: NodeId) -> TreeResult<usize> {
        Ok(self.ancestors(node)?.count())
    }

    /// Index of `node` among its siblings; `None` for the root or a dead handle.
    pub fn position(&self, node: NodeId) -> Option<usize> {
        self.slot_in_parent(node).ok().flatten().map(|(_, index)| index)
    }

    /// First node in pre-order whose value satisfies `pred`.
    pub fn find_by<F>(&self, mut pred: F) -> Option<NodeId>
    where
        F: FnMut(&T) -> bool,
    {
        self.pre_order().find(|(_, value)| pred(value)).map(|(id, _)| id)
    }
}

impl<T, P: ChildPolicy<T>> Tree<T, P> {
    /// Locate a node whose value matches `target` under the tree's policy.
    ///
    /// Insertion-ordered trees scan the whole tree in pre-order (O(n)). Keyed
    /// trees check the root, then binary-search the children of each node
    /// they visit and move on to the grandchildren only on a miss. Under
    /// [`PathOrder`](crate::PathOrder) a miss descends into the single child
    /// that can hold `target` (O(depth · log fanout)).
    ///
    /// # Examples
    ///
    /// ```
    /// use gentree::UniqueTree;
    ///
    /// let mut tree = UniqueTree::new(0);
    /// let root = tree.root().unwrap();
    /// let ten = tree.insert(root, 10).unwrap();
    /// let five = tree.insert(ten, 5).unwrap();
    ///
    /// assert_eq!(tree.find(&5), Some(five));
    /// assert_eq!(tree.find(&7), None);
    /// ```
    pub fn find(&self, target: &T) -> Option<NodeId> {
        let root = self.root?;
        if self.policy.matches(&self.nodes.get(root)?.value, target) {
            return Some(root);
        }

        // Nodes whose children have not been searched yet.
        let mut pending = vec![root];
        while let Some(current) = pending.pop() {
            let children = self.child_ids(current);
            match self.policy.descend(Siblings::new(&self.nodes, children), target) {
                Descent::Found(index) => return children.get(index).copied(),
                Descent::Into(index) => pending.extend(children.get(index).copied()),
                Descent::Each => pending.extend(children.iter().rev().copied()),
                Descent::Miss => {}
                Descent::Scan => {
                    let hit = self
                        .pre_order_from(current)
                        .ok()?
                        .skip(1)
                        .find(|(_, value)| self.policy.matches(value, target));
                    if let Some((id, _)) = hit {
                        return Some(id);
                    }
                }
            }
        }
        None
    }

    /// Like [`find`](Self::find) but reports a miss as `NotFound`.
    pub fn find_item(&self, target: &T) -> FindResult<NodeId> {
        self.find(target).ok_or(TreeError::NotFound)
    }
}
