//! Node-level helpers and arena navigation.
//!
//! Everything that walks parent/child links goes through these accessors so
//! that a stale or foreign handle surfaces as `InvalidHandle` in one place.

use crate::error::{InternalResult, TreeError};
use crate::types::{Node, NodeId, Tree};

impl<T> Node<T> {
    pub(crate) fn new(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            parent,
            children: Vec::new(),
        }
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T, P> Tree<T, P> {
    // ============================================================================
    // CHECKED NODE ACCESS
    // ============================================================================

    pub(crate) fn node(&self, id: NodeId) -> InternalResult<&Node<T>> {
        self.nodes.get(id).ok_or(TreeError::InvalidHandle(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> InternalResult<&mut Node<T>> {
        self.nodes.get_mut(id).ok_or(TreeError::InvalidHandle(id))
    }

    /// Child list of a node the caller already validated.
    pub(crate) fn child_ids(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// Index of `id` within its parent's children, or `None` for the root.
    pub(crate) fn slot_in_parent(&self, id: NodeId) -> InternalResult<Option<(NodeId, usize)>> {
        let Some(parent) = self.node(id)?.parent else {
            return Ok(None);
        };
        let index = self
            .node(parent)?
            .children
            .iter()
            .position(|&child| child == id)
            .ok_or_else(|| {
                TreeError::corrupted_tree("Parent link", &format!("{} missing from {}", id, parent))
            })?;
        Ok(Some((parent, index)))
    }

    // ============================================================================
    // SUBTREE RELEASE
    // ============================================================================

    /// Free `id` and everything below it. Does not touch the parent's list.
    ///
    /// Returns the freed root value and the number of nodes released.
    pub(crate) fn release_subtree(&mut self, id: NodeId) -> Option<(T, usize)> {
        let node = self.nodes.deallocate(id)?;
        let mut released = 1;
        let mut pending = node.children;
        while let Some(child) = pending.pop() {
            if let Some(freed) = self.nodes.deallocate(child) {
                released += 1;
                pending.extend(freed.children);
            }
        }
        Some((node.value, released))
    }
}
