//! Error types for heap and graph operations
//!
//! Recoverable conditions (a full heap, an unknown identifier, a bad start
//! vertex) are ordinary values of these enums. Reading from an empty heap is
//! not an error: `peek_min` and `extract_min` return `None` and callers are
//! expected to check `is_empty` first.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::graph::VertexId;
use crate::minheap::Priority;

/// Error type for indexed heap operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Backing storage for the heap could not be reserved
    #[error("failed to allocate heap storage: {0}")]
    Allocation(#[from] TryReserveError),
    /// The heap already holds `capacity` nodes
    #[error("heap is full (capacity {capacity})")]
    CapacityExceeded {
        /// Fixed capacity of the heap.
        capacity: usize,
    },
    /// The identifier does not fit the heap's identifier space
    #[error("id {id} is outside the identifier range 0..{capacity}")]
    IdOutOfRange {
        /// Rejected identifier.
        id: usize,
        /// Fixed capacity of the heap.
        capacity: usize,
    },
    /// A node with this identifier is already in the heap
    #[error("id {id} is already present in the heap")]
    DuplicateId {
        /// Rejected identifier.
        id: usize,
    },
    /// No node with this identifier is currently in the heap
    #[error("id {id} is not present in the heap")]
    UnknownId {
        /// Identifier that was looked up.
        id: usize,
    },
    /// The new priority is not less than the current priority
    #[error("new priority {requested} for id {id} is not less than current priority {current}")]
    PriorityNotDecreased {
        /// Identifier whose priority was to be lowered.
        id: usize,
        /// Priority currently stored for `id`.
        current: Priority,
        /// Priority that was requested.
        requested: Priority,
    },
}

/// Error type for graph construction and the tree algorithms
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint does not name a vertex of the graph
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending endpoint.
        vertex: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The start vertex handed to an algorithm is not in the graph
    #[error("start vertex {start} is invalid for a graph with {vertex_count} vertices")]
    InvalidStartVertex {
        /// The rejected start vertex.
        start: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The working heap could not be built
    #[error(transparent)]
    Heap(#[from] HeapError),
}
