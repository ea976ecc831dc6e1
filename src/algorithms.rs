//! Prim's minimum spanning tree and Dijkstra's shortest-path tree
//!
//! Both algorithms are the same greedy loop over an indexed heap:
//!
//! 1. seed the heap with every vertex, the start at priority 0 and the rest at
//!    [`INFINITY`](crate::minheap::INFINITY);
//! 2. extract the minimum vertex `u` and mark it finished;
//! 3. relax each unfinished neighbour `v` by lowering its heap priority;
//! 4. record the edge joining `u` to its predecessor in the tree.
//!
//! They differ only in what a priority means. For Prim it is the weight of
//! the cheapest edge linking `v` to the tree so far, for Dijkstra it is the
//! best known distance from the start.
//!
//! The graph is expected to be connected from the start vertex. Vertices the
//! start cannot reach are simply left out of the tree.
//!
//! # Example
//!
//! ```rust
//! use indexed_heap_graphs::algorithms::{dijkstra_distance_tree, prim_mst, shortest_path, total_weight};
//! use indexed_heap_graphs::graph::Graph;
//!
//! let mut graph = Graph::new(4);
//! for (a, b, w) in [(0, 1, 4), (0, 2, 1), (1, 2, 2), (1, 3, 5), (2, 3, 8)] {
//!     graph.add_undirected_edge(a, b, w).unwrap();
//! }
//!
//! let mst = prim_mst(&graph, 0).unwrap();
//! assert_eq!(mst.len(), 3);
//! assert_eq!(total_weight(&mst), 8);
//!
//! let tree = dijkstra_distance_tree(&graph, 0).unwrap();
//! let path = shortest_path(&tree, 3, 0).unwrap();
//! assert_eq!(path.iter().map(|e| e.to).collect::<Vec<_>>(), vec![2, 1, 3]);
//! assert_eq!(total_weight(&path), 8);
//! ```

use tracing::{debug, instrument, trace, warn};

use crate::error::GraphError;
use crate::graph::{Edge, Graph, VertexId};
use crate::minheap::{BuildStrategy, HeapNode, IndexedMinHeap, Priority};
use crate::records::Records;
use crate::traits::IndexedHeap;

/// What the heap priority of a vertex stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TreeKind {
    /// Cheapest edge to the tree built so far
    MinimumSpanning,
    /// Shortest known distance from the start
    ShortestPath,
}

/// Builder for Prim and Dijkstra runs with configurable options
///
/// # Example
///
/// ```rust
/// use indexed_heap_graphs::algorithms::TreeSearch;
/// use indexed_heap_graphs::graph::Graph;
/// use indexed_heap_graphs::minheap::{BuildStrategy, IndexedMinHeap};
///
/// let mut graph = Graph::new(3);
/// graph.add_undirected_edge(0, 1, 2).unwrap();
/// graph.add_undirected_edge(1, 2, 3).unwrap();
///
/// let tree = TreeSearch::new(&graph, 0)
///     .build_strategy(BuildStrategy::Heapify)
///     .dijkstra::<IndexedMinHeap>()
///     .unwrap();
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TreeSearch<'g> {
    graph: &'g Graph,
    start: VertexId,
    strategy: BuildStrategy,
}

impl<'g> TreeSearch<'g> {
    /// Creates a search over `graph` rooted at `start`.
    pub fn new(graph: &'g Graph, start: VertexId) -> Self {
        TreeSearch {
            graph,
            start,
            strategy: BuildStrategy::default(),
        }
    }

    /// Sets how the initial heap is built.
    pub fn build_strategy(mut self, strategy: BuildStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Runs Prim's algorithm and returns the minimum spanning tree.
    ///
    /// Tree edges are oriented from the newly added vertex towards its
    /// predecessor, `(u -- predecessor(u), w)`.
    ///
    /// # Errors
    /// - [`GraphError::InvalidStartVertex`] if the start is not in the graph.
    /// - [`GraphError::Heap`] if the working heap cannot be built.
    #[instrument(
        name = "graph.prim",
        level = "debug",
        skip(self),
        fields(vertices = self.graph.vertex_count(), start = self.start, strategy = ?self.strategy)
    )]
    pub fn prim<H: IndexedHeap>(&self) -> Result<Vec<Edge>, GraphError> {
        self.grow_tree::<H>(TreeKind::MinimumSpanning)
    }

    /// Runs Dijkstra's algorithm and returns the shortest-path tree.
    ///
    /// Tree edges are oriented away from the start,
    /// `(predecessor(u) -- u, w)`.
    ///
    /// # Errors
    /// - [`GraphError::InvalidStartVertex`] if the start is not in the graph.
    /// - [`GraphError::Heap`] if the working heap cannot be built.
    #[instrument(
        name = "graph.dijkstra",
        level = "debug",
        skip(self),
        fields(vertices = self.graph.vertex_count(), start = self.start, strategy = ?self.strategy)
    )]
    pub fn dijkstra<H: IndexedHeap>(&self) -> Result<Vec<Edge>, GraphError> {
        self.grow_tree::<H>(TreeKind::ShortestPath)
    }

    fn grow_tree<H: IndexedHeap>(&self, kind: TreeKind) -> Result<Vec<Edge>, GraphError> {
        let graph = self.graph;
        let start = self.start;
        let vertex_count = graph.vertex_count();
        if start >= vertex_count {
            warn!(start, vertex_count, "rejecting start vertex outside the graph");
            return Err(GraphError::InvalidStartVertex { start, vertex_count });
        }

        let mut records = Records::<H>::new(vertex_count, start, self.strategy)?;

        while let Some(HeapNode { priority, id: u }) = records.heap.extract_min() {
            records.finished[u] = true;

            // The minimum is unreached, so every vertex still queued is too.
            if !records.is_reached(u, start) {
                debug!(unreached = records.heap.len() + 1, "start vertex does not reach every vertex");
                break;
            }
            trace!(vertex = u, priority, "finalized vertex");
            let distance_u = records.distances[u];

            for edge in graph.edges_from(u) {
                let v = edge.to;
                if records.finished[v] {
                    continue;
                }
                let weight = Priority::from(edge.weight);

                match kind {
                    TreeKind::MinimumSpanning => {
                        let improves = records.heap.priority_of(v).is_some_and(|current| weight < current);
                        if improves {
                            records.heap.decrease_priority(v, weight)?;
                            records.predecessor[v] = Some(u);
                        }
                    }
                    TreeKind::ShortestPath => {
                        let Some(distance_u) = distance_u else {
                            continue;
                        };
                        let candidate = distance_u.saturating_add(weight);
                        if records.distances[v].map_or(true, |distance_v| candidate < distance_v) {
                            records.distances[v] = Some(candidate);
                            records.heap.decrease_priority(v, candidate)?;
                            records.predecessor[v] = Some(u);
                        }
                    }
                }
            }

            if let Some(predecessor) = records.predecessor[u] {
                if let Some(edge) = graph.find_edge(predecessor, u) {
                    records.tree.push(match kind {
                        TreeKind::MinimumSpanning => Edge::new(u, predecessor, edge.weight),
                        TreeKind::ShortestPath => Edge::new(predecessor, u, edge.weight),
                    });
                }
            }
        }

        let tree = records.into_tree();
        debug!(tree_edges = tree.len(), "tree complete");
        Ok(tree)
    }
}

/// Runs Prim's algorithm from `start` using an [`IndexedMinHeap`].
///
/// # Errors
/// Returns [`GraphError::InvalidStartVertex`] if `start` is not a vertex of
/// `graph`.
pub fn prim_mst(graph: &Graph, start: VertexId) -> Result<Vec<Edge>, GraphError> {
    TreeSearch::new(graph, start).prim::<IndexedMinHeap>()
}

/// Runs Dijkstra's algorithm from `start` using an [`IndexedMinHeap`].
///
/// # Errors
/// Returns [`GraphError::InvalidStartVertex`] if `start` is not a vertex of
/// `graph`.
pub fn dijkstra_distance_tree(graph: &Graph, start: VertexId) -> Result<Vec<Edge>, GraphError> {
    TreeSearch::new(graph, start).dijkstra::<IndexedMinHeap>()
}

/// Returns the path from `start` to `target` through a distance tree.
///
/// Walks backwards from `target`, each hop scanning the tree for the edge
/// that enters the current vertex, so a path of `k` hops costs O(k * |tree|).
///
/// Returns `Some(vec![])` when `target == start` and `None` when `target`
/// is not connected to `start` in the tree.
pub fn shortest_path(tree: &[Edge], target: VertexId, start: VertexId) -> Option<Vec<Edge>> {
    let mut path = Vec::new();
    let mut current = target;

    while current != start {
        // A tree path never has more hops than the tree has edges.
        if path.len() >= tree.len() {
            return None;
        }
        let edge = tree.iter().find(|edge| edge.to == current)?;
        path.push(*edge);
        current = edge.from;
    }

    path.reverse();
    Some(path)
}

/// Returns the path from `start` to every vertex `0..vertex_count`.
///
/// Entry `v` is `None` if `v` is unreachable from `start`. This is O(V²) in
/// the worst case because of the linear scan in [`shortest_path`].
///
/// # Errors
/// Returns [`GraphError::InvalidStartVertex`] if `start >= vertex_count`.
pub fn shortest_paths_from(
    tree: &[Edge],
    vertex_count: usize,
    start: VertexId,
) -> Result<Vec<Option<Vec<Edge>>>, GraphError> {
    if start >= vertex_count {
        return Err(GraphError::InvalidStartVertex { start, vertex_count });
    }
    Ok((0..vertex_count)
        .map(|vertex| shortest_path(tree, vertex, start))
        .collect())
}

/// Sum of the weights of `edges`
pub fn total_weight(edges: &[Edge]) -> u64 {
    edges.iter().map(|edge| u64::from(edge.weight)).sum()
}
