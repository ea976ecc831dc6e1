//! Indexed Min-Heap and Greedy Graph Algorithms
//!
//! This crate provides a binary min-heap whose nodes are addressed by a dense
//! integer id, and the two classic greedy tree algorithms built on it.
//!
//! # Features
//!
//! - **Indexed Min-Heap**: O(log n) insert, extract-min and decrease-priority;
//!   O(1) priority lookup by id through an id-to-slot map
//! - **Graph**: adjacency lists over vertices `0..n` with non-negative weights
//! - **Prim's algorithm**: minimum spanning tree from a start vertex
//! - **Dijkstra's algorithm**: shortest-path tree from a start vertex, plus
//!   path reconstruction for any target
//!
//! # Example
//!
//! ```rust
//! use indexed_heap_graphs::algorithms::{dijkstra_distance_tree, shortest_paths_from, total_weight};
//! use indexed_heap_graphs::graph::Graph;
//!
//! let mut graph = Graph::new(3);
//! graph.add_undirected_edge(0, 1, 7).unwrap();
//! graph.add_undirected_edge(1, 2, 1).unwrap();
//! graph.add_undirected_edge(0, 2, 3).unwrap();
//!
//! let tree = dijkstra_distance_tree(&graph, 0).unwrap();
//! let paths = shortest_paths_from(&tree, graph.vertex_count(), 0).unwrap();
//! let distances: Vec<_> = paths.iter().map(|p| p.as_deref().map(total_weight)).collect();
//! assert_eq!(distances, vec![Some(0), Some(4), Some(3)]);
//! ```

pub mod algorithms;
pub mod error;
pub mod graph;
pub mod minheap;
mod records;
pub mod traits;

// Re-export the main types for convenience
pub use error::{GraphError, HeapError};
pub use graph::{Edge, Graph};
pub use minheap::{BuildStrategy, HeapNode, IndexedMinHeap};
pub use traits::IndexedHeap;
