//! Indexed binary min-heap
//!
//! An array-backed binary min-heap of `(priority, id)` nodes together with an
//! id-to-slot map. The map is what makes [`IndexedMinHeap::decrease_priority`]
//! and [`IndexedMinHeap::priority_of`] cheap: the node is found in O(1) and only
//! the path from its slot to the root is touched.
//!
//! Identifiers are dense: a heap created with capacity `n` accepts ids
//! `0..n`, so the map is a plain vector rather than a hash map.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity |
//! |---------------------|------------|
//! | `insert`            | O(log n)   |
//! | `peek_min`          | O(1)       |
//! | `extract_min`       | O(log n)   |
//! | `priority_of`       | O(1)       |
//! | `decrease_priority` | O(log n)   |
//! | `change_priority`   | O(log n)   |
//! | `heapify`           | O(n)       |
//! | `build_by_insertion`| O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use indexed_heap_graphs::IndexedHeap;
//! use indexed_heap_graphs::minheap::{HeapNode, IndexedMinHeap};
//!
//! let mut heap = IndexedMinHeap::with_capacity(3).unwrap();
//! heap.insert(5, 0).unwrap();
//! heap.insert(3, 1).unwrap();
//! heap.insert(9, 2).unwrap();
//! heap.decrease_priority(2, 1).unwrap();
//!
//! assert_eq!(heap.extract_min(), Some(HeapNode { priority: 1, id: 2 }));
//! assert_eq!(heap.extract_min(), Some(HeapNode { priority: 3, id: 1 }));
//! assert_eq!(heap.extract_min(), Some(HeapNode { priority: 5, id: 0 }));
//! assert_eq!(heap.extract_min(), None);
//! ```

use std::fmt;

use thiserror::Error;

use crate::error::HeapError;
use crate::traits::IndexedHeap;

/// Priority type stored in heap nodes
pub type Priority = i64;

/// Priority used for nodes that have not been reached yet
pub const INFINITY: Priority = Priority::MAX;

/// A single `(priority, id)` entry of the heap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapNode {
    /// Ordering key; smaller comes out first
    pub priority: Priority,
    /// Identifier, unique among the nodes present in one heap
    pub id: usize,
}

/// How to build a heap from an array of priorities
///
/// Both strategies produce a valid heap holding the same nodes; they differ
/// in cost and may lay out equal priorities differently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BuildStrategy {
    /// Insert the nodes one by one, O(n log n)
    #[default]
    RepeatedInsert,
    /// Fill the array then sift down every internal node, O(n)
    Heapify,
}

impl BuildStrategy {
    /// Builds a heap where node `i` has id `i` and priority `priorities[i]`.
    pub fn build<H: IndexedHeap>(self, priorities: &[Priority]) -> Result<H, HeapError> {
        match self {
            BuildStrategy::RepeatedInsert => H::build_by_insertion(priorities),
            BuildStrategy::Heapify => H::heapify(priorities),
        }
    }
}

/// A violated structural invariant reported by [`IndexedMinHeap::check_invariants`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// More nodes are stored than the heap's capacity allows
    #[error("heap holds {len} nodes but its capacity is {capacity}")]
    OverCapacity {
        /// Number of stored nodes.
        len: usize,
        /// Fixed capacity.
        capacity: usize,
    },
    /// A child has a smaller priority than its parent
    #[error("slot {child} has a smaller priority than its parent slot {parent}")]
    HeapOrder {
        /// Slot of the parent.
        parent: usize,
        /// Slot of the offending child.
        child: usize,
    },
    /// A stored node's id does not map back to its slot
    #[error("node with id {id} sits in slot {slot} but the map says {mapped:?}")]
    IndexMismatch {
        /// Identifier of the node.
        id: usize,
        /// Slot the node actually occupies.
        slot: usize,
        /// Slot recorded in the map.
        mapped: Option<usize>,
    },
    /// The map records a slot for an id that is not stored there
    #[error("map records slot {slot} for id {id}, which is not stored there")]
    StaleIndex {
        /// Identifier with the stale entry.
        id: usize,
        /// Slot recorded in the map.
        slot: usize,
    },
}

/// Binary min-heap with O(1) lookup from id to heap slot
///
/// The heap has a fixed capacity chosen at construction; it never grows.
/// Nodes leave the heap only through [`extract_min`](IndexedHeap::extract_min).
#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    /// Heap-ordered nodes; the root is at slot 0
    nodes: Vec<HeapNode>,
    /// `index_map[id]` is the slot of the node with that id, if present
    index_map: Vec<Option<usize>>,
}

impl IndexedHeap for IndexedMinHeap {
    fn with_capacity(capacity: usize) -> Result<Self, HeapError> {
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(capacity)?;
        let mut index_map = Vec::new();
        index_map.try_reserve_exact(capacity)?;
        index_map.resize(capacity, None);
        Ok(Self { nodes, index_map })
    }

    fn capacity(&self) -> usize {
        self.index_map.len()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn insert(&mut self, priority: Priority, id: usize) -> Result<(), HeapError> {
        let capacity = self.capacity();
        if self.nodes.len() >= capacity {
            return Err(HeapError::CapacityExceeded { capacity });
        }
        if id >= capacity {
            return Err(HeapError::IdOutOfRange { id, capacity });
        }
        if self.position_of(id).is_some() {
            return Err(HeapError::DuplicateId { id });
        }

        let slot = self.nodes.len();
        self.nodes.push(HeapNode { priority, id });
        self.index_map[id] = Some(slot);
        self.sift_up(slot);
        Ok(())
    }

    fn peek_min(&self) -> Option<HeapNode> {
        self.nodes.first().copied()
    }

    fn extract_min(&mut self) -> Option<HeapNode> {
        if self.nodes.is_empty() {
            return None;
        }

        let last = self.nodes.len() - 1;
        self.swap(0, last);
        let min = self.nodes.pop()?;
        self.index_map[min.id] = None;

        if !self.nodes.is_empty() {
            self.sift_down(0);
        }

        Some(min)
    }

    fn priority_of(&self, id: usize) -> Option<Priority> {
        self.position_of(id).map(|slot| self.nodes[slot].priority)
    }

    fn decrease_priority(&mut self, id: usize, new_priority: Priority) -> Result<(), HeapError> {
        let slot = self.position_of(id).ok_or(HeapError::UnknownId { id })?;
        let current = self.nodes[slot].priority;
        if new_priority >= current {
            return Err(HeapError::PriorityNotDecreased {
                id,
                current,
                requested: new_priority,
            });
        }

        self.nodes[slot].priority = new_priority;
        // Only the path towards the root can be out of order now.
        self.sift_up(slot);
        Ok(())
    }

    fn heapify(priorities: &[Priority]) -> Result<Self, HeapError> {
        let mut heap = Self::with_capacity(priorities.len())?;
        heap.nodes.extend(
            priorities
                .iter()
                .enumerate()
                .map(|(id, &priority)| HeapNode { priority, id }),
        );
        for (id, slot) in heap.index_map.iter_mut().enumerate() {
            *slot = Some(id);
        }
        for slot in (0..heap.nodes.len() / 2).rev() {
            heap.sift_down(slot);
        }
        Ok(heap)
    }
}

impl IndexedMinHeap {
    /// Sets the priority of a present node to any value
    ///
    /// Unlike [`decrease_priority`](IndexedHeap::decrease_priority) the new
    /// priority may be larger, in which case the node is sifted down.
    ///
    /// # Errors
    /// Returns [`HeapError::UnknownId`] if `id` is not present.
    pub fn change_priority(&mut self, id: usize, new_priority: Priority) -> Result<(), HeapError> {
        let slot = self.position_of(id).ok_or(HeapError::UnknownId { id })?;
        let old = self.nodes[slot].priority;
        self.nodes[slot].priority = new_priority;

        if new_priority < old {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
        Ok(())
    }

    /// Returns the stored nodes in heap (array) order
    pub fn nodes(&self) -> &[HeapNode] {
        &self.nodes
    }

    /// Verifies the heap order and the id-to-slot bijection
    ///
    /// Returns the first violation found. Intended for tests and debugging;
    /// it walks every slot and every map entry.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let len = self.nodes.len();
        let capacity = self.capacity();
        if len > capacity {
            return Err(InvariantViolation::OverCapacity { len, capacity });
        }

        for child in 1..len {
            let parent = (child - 1) / 2;
            if self.nodes[child].priority < self.nodes[parent].priority {
                return Err(InvariantViolation::HeapOrder { parent, child });
            }
        }

        for (slot, node) in self.nodes.iter().enumerate() {
            let mapped = self.index_map.get(node.id).copied().flatten();
            if mapped != Some(slot) {
                return Err(InvariantViolation::IndexMismatch {
                    id: node.id,
                    slot,
                    mapped,
                });
            }
        }

        for (id, entry) in self.index_map.iter().enumerate() {
            if let Some(slot) = *entry {
                if self.nodes.get(slot).map(|node| node.id) != Some(id) {
                    return Err(InvariantViolation::StaleIndex { id, slot });
                }
            }
        }

        Ok(())
    }

    /// Slot of the node with this id, if it is present
    ///
    /// A map entry that points outside the occupied slots, or at a node with
    /// a different id, counts as absent.
    fn position_of(&self, id: usize) -> Option<usize> {
        let slot = self.index_map.get(id).copied().flatten()?;
        match self.nodes.get(slot) {
            Some(node) if node.id == id => Some(slot),
            _ => None,
        }
    }

    /// Swap two slots and keep the map in step
    fn swap(&mut self, a: usize, b: usize) {
        self.nodes.swap(a, b);
        self.index_map[self.nodes[a].id] = Some(a);
        self.index_map[self.nodes[b].id] = Some(b);
    }

    /// Move the node at `slot` up while it is smaller than its parent
    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.nodes[slot].priority < self.nodes[parent].priority {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    /// Move the node at `slot` down while a child is smaller
    fn sift_down(&mut self, mut slot: usize) {
        let len = self.nodes.len();
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;

            if left < len && self.nodes[left].priority < self.nodes[smallest].priority {
                smallest = left;
            }
            if right < len && self.nodes[right].priority < self.nodes[smallest].priority {
                smallest = right;
            }

            if smallest != slot {
                self.swap(slot, smallest);
                slot = smallest;
            } else {
                break;
            }
        }
    }
}

impl fmt::Display for IndexedMinHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "IndexedMinHeap with size: {}, capacity: {}",
            self.nodes.len(),
            self.capacity()
        )?;
        writeln!(f, "index: priority [id]")?;
        for (slot, node) in self.nodes.iter().enumerate() {
            writeln!(f, "{}: {} [{}]", slot, node.priority, node.id)?;
        }
        Ok(())
    }
}
