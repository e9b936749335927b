//! Compact arena with generation-checked handles.
//!
//! Slots are reused through a free list. Every slot carries a generation that
//! is bumped when the slot is freed, and every arena carries an owner id taken
//! from a process-wide counter, so a handle that outlived its node or that
//! came from another arena is detected instead of aliasing a live slot.

use std::convert::TryFrom;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::types::NodeId;

static NEXT_OWNER: AtomicU32 = AtomicU32::new(1);

fn next_owner() -> u32 {
    NEXT_OWNER.fetch_add(1, Ordering::Relaxed)
}

/// Statistics for a compact arena
#[derive(Debug, Clone, Copy)]
pub struct ArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
    pub fragmentation: f64,
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    item: Option<T>,
}

/// Arena allocator handing out [`NodeId`]s.
#[derive(Debug)]
pub struct CompactArena<T> {
    owner: u32,
    storage: Vec<Slot<T>>,
    /// Free slot indices for reuse
    free_list: Vec<usize>,
    allocated: usize,
}

impl<T> CompactArena<T> {
    /// Create a new empty compact arena
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new compact arena with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            owner: next_owner(),
            storage: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            allocated: 0,
        }
    }

    /// Allocate a new item in the arena and return its ID
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let index = if let Some(free_index) = self.free_list.pop() {
            self.storage[free_index].item = Some(item);
            free_index
        } else {
            self.storage.push(Slot {
                generation: 0,
                item: Some(item),
            });
            self.storage.len() - 1
        };
        self.allocated += 1;

        NodeId {
            owner: self.owner,
            index: u32::try_from(index).expect("arena index should fit in u32"),
            generation: self.storage[index].generation,
        }
    }

    /// Deallocate an item from the arena and return it.
    ///
    /// The slot's generation moves on, so `id` and every copy of it go stale.
    #[inline]
    pub fn deallocate(&mut self, id: NodeId) -> Option<T> {
        let index = self.slot_index(id)?;
        let slot = &mut self.storage[index];
        let item = slot.item.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(index);
        self.allocated -= 1;
        Some(item)
    }

    /// Get a reference to an item in the arena
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        let index = self.slot_index(id)?;
        self.storage[index].item.as_ref()
    }

    /// Get a mutable reference to an item in the arena
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let index = self.slot_index(id)?;
        self.storage[index].item.as_mut()
    }

    /// Check if an ID is valid and allocated
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    fn slot_index(&self, id: NodeId) -> Option<usize> {
        if id.owner != self.owner {
            return None;
        }
        let index = usize::try_from(id.index).ok()?;
        let slot = self.storage.get(index)?;
        (slot.generation == id.generation && slot.item.is_some()).then_some(index)
    }

    /// Get arena statistics
    pub fn stats(&self) -> ArenaStats {
        let total_capacity = self.storage.capacity();
        let allocated_count = self.allocated;
        let free_count = self.free_list.len();
        let utilization = if total_capacity > 0 {
            allocated_count as f64 / total_capacity as f64
        } else {
            0.0
        };
        let fragmentation = if allocated_count > 0 {
            free_count as f64 / (allocated_count + free_count) as f64
        } else {
            0.0
        };

        ArenaStats {
            total_capacity,
            allocated_count,
            free_count,
            utilization,
            fragmentation,
        }
    }

    /// Get the number of allocated items
    pub fn len(&self) -> usize {
        self.allocated
    }

    /// Check if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.allocated == 0
    }

    /// Clear all items from the arena.
    ///
    /// Generations keep counting, so handles issued before the clear stay stale.
    pub fn clear(&mut self) {
        self.free_list.clear();
        for (index, slot) in self.storage.iter_mut().enumerate() {
            if slot.item.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free_list.push(index);
        }
        // Pop order hands back the lowest index first.
        self.free_list.reverse();
        self.allocated = 0;
    }

    /// Get the number of free slots
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }
}

impl<T> Default for CompactArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_arena_basic_operations() {
        let mut arena = CompactArena::new();

        let id1 = arena.allocate(42);
        let id2 = arena.allocate(84);
        let id3 = arena.allocate(126);

        assert_eq!(arena.get(id1), Some(&42));
        assert_eq!(arena.get(id2), Some(&84));
        assert_eq!(arena.get(id3), Some(&126));
        assert!(arena.contains(id1));

        let stats = arena.stats();
        assert_eq!(stats.allocated_count, 3);
        assert_eq!(stats.free_count, 0);
    }

    #[test]
    fn test_stale_id_after_slot_reuse() {
        let mut arena = CompactArena::new();
        let id1 = arena.allocate(42);
        let id2 = arena.allocate(84);

        assert_eq!(arena.deallocate(id1), Some(42));
        assert!(!arena.contains(id1));
        assert!(arena.contains(id2));

        // Same slot, new generation.
        let id3 = arena.allocate(168);
        assert_eq!(id3.index, id1.index);
        assert_ne!(id3, id1);
        assert_eq!(arena.get(id1), None);
        assert_eq!(arena.get(id3), Some(&168));
        assert_eq!(arena.deallocate(id1), None);

        let stats = arena.stats();
        assert_eq!(stats.allocated_count, 2);
        assert_eq!(stats.free_count, 0);
    }

    #[test]
    fn test_foreign_ids_rejected() {
        let mut a = CompactArena::new();
        let mut b = CompactArena::new();
        let id_a = a.allocate("a");
        let _ = b.allocate("b");
        assert!(b.get(id_a).is_none());
        assert_eq!(a.get(id_a), Some(&"a"));
    }

    #[test]
    fn test_clear_invalidates_everything() {
        let mut arena = CompactArena::new();
        let ids: Vec<_> = (0..4).map(|i| arena.allocate(i)).collect();
        arena.clear();
        assert!(arena.is_empty());
        assert!(ids.iter().all(|id| !arena.contains(*id)));
        let fresh = arena.allocate(9);
        assert_eq!(fresh.index, 0);
        assert_eq!(arena.len(), 1);
    }
}
