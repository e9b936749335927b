//! Sibling ordering policies.
//!
//! A policy answers two questions for the tree: where a new child goes among
//! its siblings (and whether it may go there at all), and how a lookup should
//! move through one level. Insertion-ordered policies append and scan. Keyed
//! policies keep siblings sorted and unique and binary-search each level;
//! only [`PathOrder`] may also prune the levels below.

use std::cmp::Ordering;
use std::fmt;

use crate::compact_arena::CompactArena;
use crate::types::{Descent, Node, NodeId, Placement};

// ============================================================================
// SIBLING VIEW
// ============================================================================

/// Read-only view of one node's children, in their current order.
pub struct Siblings<'a, T> {
    nodes: &'a CompactArena<Node<T>>,
    ids: &'a [NodeId],
}

impl<'a, T> Siblings<'a, T> {
    pub(crate) fn new(nodes: &'a CompactArena<Node<T>>, ids: &'a [NodeId]) -> Self {
        Self { nodes, ids }
    }

    /// Number of siblings.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if there are no siblings.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Value of the sibling at `index`.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.ids
            .get(index)
            .and_then(|id| self.nodes.get(*id))
            .map(|node| &node.value)
    }

    fn value_of(&self, id: NodeId) -> &'a T {
        // Child lists only ever hold live ids.
        &self
            .nodes
            .get(id)
            .expect("sibling list references a freed node")
            .value
    }

    /// Binary search over the siblings, as [`slice::binary_search_by`].
    pub fn binary_search_by<F>(&self, mut f: F) -> Result<usize, usize>
    where
        F: FnMut(&'a T) -> Ordering,
    {
        self.ids.binary_search_by(|id| f(self.value_of(*id)))
    }

    /// Index of the first sibling for which `pred` is false, as
    /// [`slice::partition_point`].
    pub fn partition_point<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(&'a T) -> bool,
    {
        self.ids.partition_point(|id| pred(self.value_of(*id)))
    }
}

// ============================================================================
// POLICY TRAIT
// ============================================================================

/// Decides sibling placement and lookup strategy for a [`Tree`](crate::Tree).
pub trait ChildPolicy<T> {
    /// Keyed policies keep siblings sorted and unique at all times.
    const KEYED: bool;

    /// Where `value` would go among `siblings`.
    fn place(&self, siblings: Siblings<'_, T>, value: &T) -> Placement;

    /// Caller-defined equality used by `find`.
    fn matches(&self, candidate: &T, target: &T) -> bool;

    /// How a lookup for `target` proceeds through one level.
    fn descend(&self, siblings: Siblings<'_, T>, target: &T) -> Descent {
        let _ = (siblings, target);
        Descent::Scan
    }
}

// ============================================================================
// INSERTION-ORDERED POLICIES
// ============================================================================

/// Children keep insertion order; equality is `PartialEq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertionOrder;

impl<T: PartialEq> ChildPolicy<T> for InsertionOrder {
    const KEYED: bool = false;

    fn place(&self, siblings: Siblings<'_, T>, _value: &T) -> Placement {
        Placement::At(siblings.len())
    }

    fn matches(&self, candidate: &T, target: &T) -> bool {
        candidate == target
    }
}

/// Children keep insertion order; equality is a caller-supplied function.
#[derive(Clone, Copy)]
pub struct InsertionOrderBy<E> {
    eq: E,
}

impl<E> InsertionOrderBy<E> {
    pub fn new(eq: E) -> Self {
        Self { eq }
    }
}

impl<E> fmt::Debug for InsertionOrderBy<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InsertionOrderBy")
    }
}

impl<T, E> ChildPolicy<T> for InsertionOrderBy<E>
where
    E: Fn(&T, &T) -> bool,
{
    const KEYED: bool = false;

    fn place(&self, siblings: Siblings<'_, T>, _value: &T) -> Placement {
        Placement::At(siblings.len())
    }

    fn matches(&self, candidate: &T, target: &T) -> bool {
        (self.eq)(candidate, target)
    }
}

// ============================================================================
// KEYED POLICIES
// ============================================================================

fn keyed_place<T>(
    siblings: Siblings<'_, T>,
    value: &T,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Placement {
    match siblings.binary_search_by(|sibling| cmp(sibling, value)) {
        Ok(index) => Placement::Duplicate(index),
        Err(index) => Placement::At(index),
    }
}

/// Exact match at this level, otherwise every sibling's subtree stays a
/// candidate.
fn keyed_search<T>(
    siblings: Siblings<'_, T>,
    target: &T,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Descent {
    match siblings.binary_search_by(|sibling| cmp(sibling, target)) {
        Ok(index) => Descent::Found(index),
        Err(_) => Descent::Each,
    }
}

/// The greatest sibling not above the target is the only one whose subtree can
/// hold it, provided ancestors sort as prefixes of their descendants.
fn keyed_descend<T>(
    siblings: Siblings<'_, T>,
    target: &T,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Descent {
    let upper = siblings.partition_point(|sibling| cmp(sibling, target) != Ordering::Greater);
    if upper == 0 {
        return Descent::Miss;
    }
    let index = upper - 1;
    match siblings.get(index) {
        Some(sibling) if cmp(sibling, target) == Ordering::Equal => Descent::Found(index),
        Some(_) => Descent::Into(index),
        None => Descent::Miss,
    }
}

/// Unique siblings ordered by `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> ChildPolicy<T> for NaturalOrder {
    const KEYED: bool = true;

    fn place(&self, siblings: Siblings<'_, T>, value: &T) -> Placement {
        keyed_place(siblings, value, T::cmp)
    }

    fn matches(&self, candidate: &T, target: &T) -> bool {
        candidate.cmp(target) == Ordering::Equal
    }

    fn descend(&self, siblings: Siblings<'_, T>, target: &T) -> Descent {
        keyed_search(siblings, target, T::cmp)
    }
}

/// Unique siblings ordered by `Ord`, for keys that nest like paths.
///
/// Every node must sort before all of its descendants, and a subtree must not
/// interleave with its siblings in key order. `FileInfo` and `Vec` prefixes
/// behave this way. Lookups then descend into a single child per level; for
/// keys that do not nest, `find` can miss values that are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathOrder;

impl<T: Ord> ChildPolicy<T> for PathOrder {
    const KEYED: bool = true;

    fn place(&self, siblings: Siblings<'_, T>, value: &T) -> Placement {
        keyed_place(siblings, value, T::cmp)
    }

    fn matches(&self, candidate: &T, target: &T) -> bool {
        candidate.cmp(target) == Ordering::Equal
    }

    fn descend(&self, siblings: Siblings<'_, T>, target: &T) -> Descent {
        keyed_descend(siblings, target, T::cmp)
    }
}

/// Unique siblings ordered by a caller-supplied comparator.
#[derive(Clone, Copy)]
pub struct KeyOrder<F> {
    cmp: F,
}

impl<F> KeyOrder<F> {
    pub fn new(cmp: F) -> Self {
        Self { cmp }
    }
}

impl<F> fmt::Debug for KeyOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyOrder")
    }
}

impl<T, F> ChildPolicy<T> for KeyOrder<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    const KEYED: bool = true;

    fn place(&self, siblings: Siblings<'_, T>, value: &T) -> Placement {
        keyed_place(siblings, value, &self.cmp)
    }

    fn matches(&self, candidate: &T, target: &T) -> bool {
        (self.cmp)(candidate, target) == Ordering::Equal
    }

    fn descend(&self, siblings: Siblings<'_, T>, target: &T) -> Descent {
        keyed_search(siblings, target, &self.cmp)
    }
}

/// Unique siblings ordered by an extracted key.
#[derive(Clone, Copy)]
pub struct ByKey<F> {
    key: F,
}

impl<F> ByKey<F> {
    pub fn new(key: F) -> Self {
        Self { key }
    }
}

impl<F> fmt::Debug for ByKey<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ByKey")
    }
}

impl<T, K, F> ChildPolicy<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    const KEYED: bool = true;

    fn place(&self, siblings: Siblings<'_, T>, value: &T) -> Placement {
        keyed_place(siblings, value, |a, b| (self.key)(a).cmp(&(self.key)(b)))
    }

    fn matches(&self, candidate: &T, target: &T) -> bool {
        (self.key)(candidate) == (self.key)(target)
    }

    fn descend(&self, siblings: Siblings<'_, T>, target: &T) -> Descent {
        keyed_search(siblings, target, |a, b| (self.key)(a).cmp(&(self.key)(b)))
    }
}
