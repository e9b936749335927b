//! INSERT and REPLACE operations for trees.
//!
//! This module contains child insertion, in-place value replacement and
//! subtree substitution. Each operation validates everything it needs before
//! the first structural write, so a failure leaves the tree untouched.

use crate::error::{ModifyResult, TreeError};
use crate::policy::{ChildPolicy, Siblings};
use crate::types::{Node, NodeId, Placement, Tree};

impl<T, P: ChildPolicy<T>> Tree<T, P> {
    // ============================================================================
    // PUBLIC INSERT OPERATIONS
    // ============================================================================

    /// Insert `value` as a new child of `parent`.
    ///
    /// Ordered trees append; keyed trees insert at the comparator-dictated
    /// position and reject an equal sibling key with `DuplicateKey`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gentree::{TreeError, UniqueTree};
    ///
    /// let mut tree = UniqueTree::new(0);
    /// let root = tree.root().unwrap();
    /// tree.insert(root, 3).unwrap();
    /// tree.insert(root, 1).unwrap();
    ///
    /// assert!(matches!(tree.insert(root, 3), Err(TreeError::DuplicateKey { .. })));
    /// assert_eq!(tree.values().copied().collect::<Vec<_>>(), [0, 1, 3]);
    /// ```
    pub fn insert(&mut self, parent: NodeId, value: T) -> ModifyResult<NodeId> {
        let id = self.attach(parent, value)?;
        log::trace!("inserted {} under {}", id, parent);
        Ok(id)
    }

    /// Overwrite the value at `node`, returning the previous one.
    ///
    /// Children are kept. In a keyed tree the node moves to the slot its new
    /// key dictates among its siblings, and a collision with a sibling is
    /// rejected with `DuplicateKey`.
    pub fn replace_value(&mut self, node: NodeId, value: T) -> ModifyResult<T> {
        let slot = self.slot_in_parent(node)?;
        if let (true, Some((parent, old_index))) = (P::KEYED, slot) {
            let others: Vec<NodeId> = self
                .child_ids(parent)
                .iter()
                .copied()
                .filter(|&sibling| sibling != node)
                .collect();
            let new_index = match self.policy.place(Siblings::new(&self.nodes, &others), &value) {
                Placement::At(index) => index,
                Placement::Duplicate(_) => {
                    log::debug!("replace of {} rejected: duplicate key under {}", node, parent);
                    return Err(TreeError::DuplicateKey { parent });
                }
            };
            if new_index != old_index {
                let children = &mut self.node_mut(parent)?.children;
                children.remove(old_index);
                children.insert(new_index, node);
            }
        }
        Ok(std::mem::replace(&mut self.node_mut(node)?.value, value))
    }

    // ============================================================================
    // HELPERS FOR INSERT OPERATIONS
    // ============================================================================

    /// Place a new node under `parent` through the policy.
    pub(crate) fn attach(&mut self, parent: NodeId, value: T) -> ModifyResult<NodeId> {
        let index = {
            let siblings = self.node(parent)?.children.as_slice();
            match self.policy.place(Siblings::new(&self.nodes, siblings), &value) {
                Placement::At(index) => index,
                Placement::Duplicate(_) => {
                    log::debug!("rejected duplicate key under {}", parent);
                    return Err(TreeError::DuplicateKey { parent });
                }
            }
        };
        let id = self.nodes.allocate(Node::new(value, Some(parent)));
        let children = &mut self.node_mut(parent)?.children;
        let index = index.min(children.len());
        children.insert(index, id);
        Ok(id)
    }
}

impl<T: Clone, P: ChildPolicy<T>> Tree<T, P> {
    // ============================================================================
    // SUBTREE REPLACEMENT
    // ============================================================================

    /// Substitute the subtree at `node` with a copy of `source`'s whole tree.
    ///
    /// Returns the handle of the new subtree root. See
    /// [`replace_with_subtree_at`](Self::replace_with_subtree_at).
    pub fn replace_subtree<Q>(&mut self, node: NodeId, source: &Tree<T, Q>) -> ModifyResult<NodeId> {
        let source_root = source.root.ok_or(TreeError::EmptyTree)?;
        self.replace_with_subtree_at(node, source, source_root)
    }

    /// Substitute the subtree at `node` with a copy of the subtree rooted at
    /// `source_node` in `source`.
    ///
    /// The copy is built detached and checked first; then it takes the old
    /// subtree's slot in the parent's child list in a single step and the old
    /// subtree is released. Ordered trees keep the same index. Keyed trees
    /// place the new root by key (the same index when the key is unchanged)
    /// and fail with `DuplicateKey`, leaving the original in place, when the
    /// new root or any copied level would collide. A root-level collision
    /// names this tree's parent node; a collision inside the copy names the
    /// `source` node whose children collide.
    ///
    /// Replacing the root substitutes the whole tree.
    pub fn replace_with_subtree_at<Q>(
        &mut self,
        node: NodeId,
        source: &Tree<T, Q>,
        source_node: NodeId,
    ) -> ModifyResult<NodeId> {
        let slot = self.slot_in_parent(node)?;
        let value = source.node(source_node)?.value.clone();
        let parent = slot.map(|(parent, _)| parent);

        let detached = self.nodes.allocate(Node::new(value, parent));
        if let Err(e) = self.copy_children(source, source_node, detached) {
            self.release_subtree(detached);
            return Err(e);
        }

        let Some((parent, old_index)) = slot else {
            self.root = Some(detached);
            let released = self.release_subtree(node).map_or(0, |(_, count)| count);
            log::debug!("replaced root {} ({} nodes) with {}", node, released, detached);
            return Ok(detached);
        };

        let new_index = if P::KEYED {
            let others: Vec<NodeId> = self
                .child_ids(parent)
                .iter()
                .copied()
                .filter(|&sibling| sibling != node)
                .collect();
            let placement = self
                .node(detached)
                .map(|new_root| self.policy.place(Siblings::new(&self.nodes, &others), &new_root.value));
            match placement {
                Ok(Placement::At(index)) => index,
                Ok(Placement::Duplicate(_)) => {
                    self.release_subtree(detached);
                    log::debug!("subtree replace at {} rejected: duplicate key under {}", node, parent);
                    return Err(TreeError::DuplicateKey { parent });
                }
                Err(e) => {
                    self.release_subtree(detached);
                    return Err(e);
                }
            }
        } else {
            old_index
        };

        let children = &mut self.node_mut(parent)?.children;
        if new_index == old_index {
            children[old_index] = detached;
        } else {
            children.remove(old_index);
            children.insert(new_index, detached);
        }

        let released = self.release_subtree(node).map_or(0, |(_, count)| count);
        log::debug!(
            "replaced subtree {} ({} nodes) with {} under {}",
            node,
            released,
            detached,
            parent
        );
        Ok(detached)
    }

    /// Copy every descendant of `from` in `source` below `to` in `self`.
    ///
    /// Children are placed through this tree's policy. On error the nodes
    /// copied so far stay attached below `to`; a collision is reported
    /// against the `source` node whose children collide, since the partial
    /// copy is the caller's to discard.
    pub(crate) fn copy_children<Q>(
        &mut self,
        source: &Tree<T, Q>,
        from: NodeId,
        to: NodeId,
    ) -> ModifyResult<usize> {
        let mut copied = 0;
        let mut pending = vec![(from, to)];
        while let Some((src, dst)) = pending.pop() {
            for &child in source.node(src)?.children.iter() {
                let value = source.node(child)?.value.clone();
                let created = self.attach(dst, value).map_err(|e| match e {
                    TreeError::DuplicateKey { .. } => TreeError::DuplicateKey { parent: src },
                    other => other,
                })?;
                copied += 1;
                pending.push((child, created));
            }
        }
        Ok(copied)
    }
}
