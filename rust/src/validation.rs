//! Validation and debugging utilities for trees.
//!
//! This module contains the structural invariant checks used by tests and
//! available to callers who want to assert on a tree after bulk edits.

use crate::error::{TreeError, TreeResult};
use crate::policy::{ChildPolicy, Siblings};
use crate::types::{NodeId, Placement, Tree};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<T, P: ChildPolicy<T>> Tree<T, P> {
    /// Check if the tree maintains its structural invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// - the root has no parent, every other node has exactly one and
    ///   appears exactly once in that parent's child list;
    /// - every allocated node is reachable from the root;
    /// - under a keyed policy, each sibling list is strictly increasing.
    pub fn check_invariants_detailed(&self) -> TreeResult<()> {
        let Some(root) = self.root else {
            if self.nodes.is_empty() {
                return Ok(());
            }
            return Err(TreeError::corrupted_tree(
                "Arena",
                &format!("{} nodes allocated in an empty tree", self.nodes.len()),
            ));
        };

        if self.node(root)?.parent.is_some() {
            return Err(TreeError::corrupted_tree("Root", "root has a parent"));
        }

        let mut reachable = 0;
        let mut pending = vec![root];
        while let Some(id) = pending.pop() {
            reachable += 1;
            let node = self.node(id)?;
            for &child in &node.children {
                if self.node(child)?.parent != Some(id) {
                    return Err(TreeError::corrupted_tree(
                        "Parent link",
                        &format!("{} listed under {} but points elsewhere", child, id),
                    ));
                }
                if reachable + pending.len() > self.nodes.len() {
                    return Err(TreeError::corrupted_tree(
                        "Child list",
                        &format!("{} reached more than once", child),
                    ));
                }
                pending.push(child);
            }
            if P::KEYED {
                self.check_sibling_order(id, &node.children)?;
            }
        }

        if reachable != self.nodes.len() {
            return Err(TreeError::corrupted_tree(
                "Arena",
                &format!("{} reachable vs {} allocated", reachable, self.nodes.len()),
            ));
        }
        Ok(())
    }

    /// Each sibling must land after all of its predecessors without colliding.
    fn check_sibling_order(&self, parent: NodeId, children: &[NodeId]) -> TreeResult<()> {
        for (index, &child) in children.iter().enumerate() {
            let value = &self.node(child)?.value;
            let before = Siblings::new(&self.nodes, &children[..index]);
            if self.policy.place(before, value) != Placement::At(index) {
                return Err(TreeError::corrupted_tree(
                    "Sibling order",
                    &format!("child {} of {} is out of order or duplicated", index, parent),
                ));
            }
        }
        Ok(())
    }
}
