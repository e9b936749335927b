//! DELETE operations for trees.
//!
//! Erasing detaches the node from its parent's child list first and then
//! releases the whole subtree from the arena. Every handle into the released
//! subtree goes stale; handles elsewhere are unaffected.

use crate::error::{ModifyResult, TreeError};
use crate::types::{NodeId, Tree};

impl<T, P> Tree<T, P> {
    /// Destroy `node` and its entire subtree, returning the node's value.
    ///
    /// Erasing the root leaves the tree empty until a new root is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use gentree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new("root");
    /// let root = tree.root().unwrap();
    /// let a = tree.insert(root, "a").unwrap();
    /// let a1 = tree.insert(a, "a1").unwrap();
    ///
    /// assert_eq!(tree.erase(a).unwrap(), "a");
    /// assert!(!tree.contains(a1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn erase(&mut self, node: NodeId) -> ModifyResult<T> {
        match self.slot_in_parent(node)? {
            Some((parent, index)) => {
                self.node_mut(parent)?.children.remove(index);
            }
            None => self.root = None,
        }

        let (value, released) = self
            .release_subtree(node)
            .ok_or(TreeError::InvalidHandle(node))?;
        log::debug!("erased {} ({} nodes)", node, released);
        Ok(value)
    }

    /// Destroy every child of `node`, leaving it a leaf.
    ///
    /// Returns the number of nodes released.
    pub fn erase_children(&mut self, node: NodeId) -> ModifyResult<usize> {
        let children = std::mem::take(&mut self.node_mut(node)?.children);
        let released = children
            .into_iter()
            .filter_map(|child| self.release_subtree(child))
            .map(|(_, count)| count)
            .sum();
        log::debug!("erased children of {} ({} nodes)", node, released);
        Ok(released)
    }
}
