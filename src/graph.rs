//! Adjacency-list graph
//!
//! A directed graph over the vertices `0..vertex_count`. Each vertex owns a
//! contiguous list of its outgoing edges. Parallel edges are allowed. An
//! undirected edge is stored as two directed ones, see
//! [`Graph::add_undirected_edge`].
//!
//! Outgoing edges are iterated newest first. The tree algorithms do not rely
//! on that order for correctness.

use std::fmt;

use crate::error::GraphError;

/// Vertex identifier, in `0..vertex_count`
pub type VertexId = usize;

/// Edge weight; unsigned, so weights are never negative
pub type Weight = u32;

/// A weighted directed edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Tail of the edge
    pub from: VertexId,
    /// Head of the edge
    pub to: VertexId,
    /// Weight of the edge
    pub weight: Weight,
}

impl Edge {
    /// Creates an edge `from -> to`.
    pub const fn new(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Self { from, to, weight }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -- {}, {})", self.from, self.to, self.weight)
    }
}

/// A vertex and its outgoing edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: VertexId,
    /// Outgoing edges in insertion order
    adjacency: Vec<Edge>,
}

impl Vertex {
    /// Identifier of this vertex
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Outgoing edges, newest first
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.adjacency.iter().rev()
    }

    /// Number of outgoing edges
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }
}

/// A directed weighted graph with a fixed vertex set
///
/// # Example
///
/// ```rust
/// use indexed_heap_graphs::graph::{Edge, Graph};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 4).unwrap();
/// graph.add_undirected_edge(1, 2, 1).unwrap();
///
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.find_edge(2, 1), Some(&Edge::new(2, 1, 1)));
/// assert!(graph.add_edge(0, 3, 1).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertices: (0..vertex_count)
                .map(|id| Vertex {
                    id,
                    adjacency: Vec::new(),
                })
                .collect(),
            edge_count: 0,
        }
    }

    /// Creates a graph and adds the given directed edges.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for the first edge with an
    /// endpoint outside `0..vertex_count`.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (VertexId, VertexId, Weight)>,
    {
        let mut graph = Self::new(vertex_count);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if `vertex` names a vertex of this graph
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.vertices.len()
    }

    /// Adds the directed edge `from -> to`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if either endpoint is not a
    /// vertex of the graph. The graph is unchanged in that case.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<(), GraphError> {
        self.check_vertex(to)?;
        let vertex = self.vertex_mut(from)?;
        vertex.adjacency.push(Edge::new(from, to, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// Adds `a -> b` and `b -> a` with the same weight.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if either endpoint is not a
    /// vertex of the graph. Neither edge is added in that case.
    pub fn add_undirected_edge(&mut self, a: VertexId, b: VertexId, weight: Weight) -> Result<(), GraphError> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    /// Returns the vertex with this id
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Iterates over all vertices in id order
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Outgoing edges of `id`, newest first; empty for an unknown vertex
    pub fn edges_from(&self, id: VertexId) -> impl Iterator<Item = &Edge> {
        self.vertices
            .get(id)
            .into_iter()
            .flat_map(|vertex| vertex.adjacency.iter().rev())
    }

    /// Returns the lightest edge `from -> to`, if there is one
    ///
    /// With parallel edges this is the one a relaxation step would have used.
    pub fn find_edge(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        self.edges_from(from)
            .filter(|edge| edge.to == to)
            .min_by_key(|edge| edge.weight)
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<(), GraphError> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertices.len(),
            })
        }
    }

    fn vertex_mut(&mut self, vertex: VertexId) -> Result<&mut Vertex, GraphError> {
        let vertex_count = self.vertices.len();
        self.vertices
            .get_mut(vertex)
            .ok_or(GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
            })
    }
}
