//! Per-run working state of the tree algorithms
//!
//! One [`Records`] value is created for each algorithm call and dropped when
//! the call returns, so the heap inside it is never shared between runs.

use crate::error::HeapError;
use crate::graph::{Edge, VertexId};
use crate::minheap::{BuildStrategy, Priority, INFINITY};
use crate::traits::IndexedHeap;

/// Heap plus the per-vertex bookkeeping of one Prim or Dijkstra run
pub(crate) struct Records<H> {
    /// Vertices not yet finalized, keyed by vertex id
    pub(crate) heap: H,
    /// `finished[v]` is true once `v` has left the heap
    pub(crate) finished: Vec<bool>,
    /// Vertex whose relaxation last improved `v`
    pub(crate) predecessor: Vec<Option<VertexId>>,
    /// Best known distance from the start; only maintained by Dijkstra
    pub(crate) distances: Vec<Option<Priority>>,
    /// Tree edges in the order their far endpoint was finalized
    pub(crate) tree: Vec<Edge>,
}

impl<H: IndexedHeap> Records<H> {
    /// Seeds the heap with every vertex: `start` at 0, the rest at [`INFINITY`].
    ///
    /// Precondition: `start < vertex_count`.
    pub(crate) fn new(vertex_count: usize, start: VertexId, strategy: BuildStrategy) -> Result<Self, HeapError> {
        let mut priorities = vec![INFINITY; vertex_count];
        priorities[start] = 0;
        let heap = strategy.build::<H>(&priorities)?;

        let mut distances = vec![None; vertex_count];
        distances[start] = Some(0);

        Ok(Self {
            heap,
            finished: vec![false; vertex_count],
            predecessor: vec![None; vertex_count],
            distances,
            tree: Vec::with_capacity(vertex_count.saturating_sub(1)),
        })
    }

    /// True if `vertex` is the start or has been relaxed at least once
    pub(crate) fn is_reached(&self, vertex: VertexId, start: VertexId) -> bool {
        vertex == start || self.predecessor[vertex].is_some()
    }

    /// Consumes the records, keeping only the tree
    pub(crate) fn into_tree(self) -> Vec<Edge> {
        let mut tree = self.tree;
        tree.shrink_to_fit();
        tree
    }
}
