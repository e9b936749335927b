//! SORT operations for sibling ranges.
//!
//! Ordered trees reorder `[from, to)` with a stable sort and leave every other
//! level alone. Keyed trees are always in comparator order, so a sort request
//! is validated and accepted without moving anything.

use std::cmp::Ordering;

use crate::error::{ModifyResult, TreeError};
use crate::policy::ChildPolicy;
use crate::types::{NodeId, Tree};

impl<T, P: ChildPolicy<T>> Tree<T, P> {
    /// Stable-sort the sibling range starting at `from` and ending before
    /// `to` (`None` = through the last sibling).
    ///
    /// Both handles must be children of the same parent, with `to` not before
    /// `from`; otherwise `InvalidRange`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gentree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new(0);
    /// let root = tree.root().unwrap();
    /// let first = tree.insert(root, 9).unwrap();
    /// tree.insert(root, 3).unwrap();
    /// let stop = tree.insert(root, 1).unwrap();
    ///
    /// tree.sort_by(first, Some(stop), |a, b| a.cmp(b)).unwrap();
    /// assert_eq!(tree.values().copied().collect::<Vec<_>>(), [0, 3, 9, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, from: NodeId, to: Option<NodeId>, mut cmp: F) -> ModifyResult<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let Some((parent, start)) = self.slot_in_parent(from)? else {
            // The root is a sibling range of one.
            return match to {
                None => Ok(()),
                Some(to) if to == from => Ok(()),
                Some(_) => Err(TreeError::invalid_range("sort", "the root has no siblings")),
            };
        };

        let end = match to {
            None => self.child_ids(parent).len(),
            Some(to) => match self.slot_in_parent(to)? {
                Some((to_parent, end)) if to_parent == parent => end,
                _ => {
                    return Err(TreeError::invalid_range(
                        "sort",
                        &format!("{} and {} are not siblings", from, to),
                    ))
                }
            },
        };
        if end < start {
            return Err(TreeError::invalid_range(
                "sort",
                &format!("end {} precedes start {}", end, start),
            ));
        }

        if P::KEYED {
            log::trace!("sort under {} skipped: siblings are kept in key order", parent);
            return Ok(());
        }

        let range = &self.child_ids(parent)[start..end];
        let mut entries: Vec<(&T, NodeId)> = range
            .iter()
            .filter_map(|id| self.nodes.get(*id).map(|node| (&node.value, *id)))
            .collect();
        if entries.len() != range.len() {
            return Err(TreeError::corrupted_tree(
                "Child list",
                &format!("freed node among the children of {}", parent),
            ));
        }
        entries.sort_by(|a, b| cmp(a.0, b.0));
        let sorted: Vec<NodeId> = entries.into_iter().map(|(_, id)| id).collect();

        self.node_mut(parent)?.children[start..end].copy_from_slice(&sorted);
        Ok(())
    }

    /// Stable-sort all children of `parent` with `cmp`.
    pub fn sort_children_by<F>(&mut self, parent: NodeId, cmp: F) -> ModifyResult<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self.children(parent)?.first().copied() {
            Some(first) => self.sort_by(first, None, cmp),
            None => Ok(()),
        }
    }

    /// Stable-sort all children of `parent` by `Ord`.
    pub fn sort_children(&mut self, parent: NodeId) -> ModifyResult<()>
    where
        T: Ord,
    {
        self.sort_children_by(parent, T::cmp)
    }
}
