//! Common trait for indexed priority queues
//!
//! [`IndexedHeap`] is the seam between the queue and the graph algorithms.
//! Elements are identified by a dense integer id in `0..capacity`, which lets
//! an implementation look up and lower an element's priority without a
//! linear search. The algorithms in [`crate::algorithms`] are generic over
//! this trait.

use crate::error::HeapError;
use crate::minheap::{HeapNode, Priority};

/// A fixed-capacity min-priority queue keyed by dense integer identifiers
///
/// # Example
///
/// ```rust
/// use indexed_heap_graphs::IndexedHeap;
/// use indexed_heap_graphs::minheap::IndexedMinHeap;
///
/// let mut heap = IndexedMinHeap::with_capacity(4).unwrap();
/// heap.insert(10, 0).unwrap();
/// heap.insert(7, 1).unwrap();
/// heap.decrease_priority(0, 3).unwrap();
/// assert_eq!(heap.peek_min().map(|n| n.id), Some(0));
/// assert_eq!(heap.priority_of(1), Some(7));
/// ```
pub trait IndexedHeap: Sized {
    /// Creates an empty queue that can hold ids `0..capacity`
    ///
    /// # Errors
    /// Returns [`HeapError::Allocation`] if storage cannot be reserved.
    fn with_capacity(capacity: usize) -> Result<Self, HeapError>;

    /// Maximum number of nodes, which is also the size of the id space
    fn capacity(&self) -> usize;

    /// Returns the number of nodes currently in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue holds no nodes
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if a node with this id is currently present
    fn contains(&self, id: usize) -> bool {
        self.priority_of(id).is_some()
    }

    /// Inserts a node with the given priority and id
    ///
    /// # Errors
    /// Fails without modifying the queue if it is full, if `id` is outside
    /// `0..capacity`, or if `id` is already present.
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, priority: Priority, id: usize) -> Result<(), HeapError>;

    /// Returns the node with minimum priority without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_min(&self) -> Option<HeapNode>;

    /// Removes and returns the node with minimum priority
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract_min(&mut self) -> Option<HeapNode>;

    /// Returns the current priority of the node with this id
    ///
    /// # Time Complexity
    /// O(1)
    fn priority_of(&self, id: usize) -> Option<Priority>;

    /// Lowers the priority of a present node
    ///
    /// # Errors
    /// - [`HeapError::UnknownId`] if `id` is not present.
    /// - [`HeapError::PriorityNotDecreased`] if `new_priority` is not strictly
    ///   less than the current priority.
    ///
    /// The queue is left untouched on error.
    ///
    /// # Time Complexity
    /// O(log n)
    fn decrease_priority(&mut self, id: usize, new_priority: Priority) -> Result<(), HeapError>;

    /// Builds a queue where node `i` has id `i` and priority `priorities[i]`
    /// by inserting the nodes one at a time.
    ///
    /// # Time Complexity
    /// O(n log n)
    fn build_by_insertion(priorities: &[Priority]) -> Result<Self, HeapError> {
        let mut heap = Self::with_capacity(priorities.len())?;
        for (id, &priority) in priorities.iter().enumerate() {
            heap.insert(priority, id)?;
        }
        Ok(heap)
    }

    /// Builds a queue with the same contents as [`build_by_insertion`](Self::build_by_insertion).
    ///
    /// Implementations that can do better than repeated insertion override
    /// this; the default just inserts.
    fn heapify(priorities: &[Priority]) -> Result<Self, HeapError> {
        Self::build_by_insertion(priorities)
    }
}
