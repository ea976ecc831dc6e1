//! Shared helpers for the integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use indexed_heap_graphs::graph::{Edge, Graph, VertexId, Weight};
use indexed_heap_graphs::minheap::{HeapNode, Priority};
use indexed_heap_graphs::{HeapError, IndexedHeap};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Small deterministic generator so graph tests are reproducible
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    pub fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }

    pub fn next_below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

/// The undirected example graph 0-1:4, 0-2:1, 1-2:2, 1-3:5, 2-3:8
pub fn sample_graph() -> Graph {
    let mut graph = Graph::new(4);
    for (a, b, w) in [(0, 1, 4), (0, 2, 1), (1, 2, 2), (1, 3, 5), (2, 3, 8)] {
        graph.add_undirected_edge(a, b, w).unwrap();
    }
    graph
}

/// Random connected undirected graph: a random spanning path plus extra edges
pub fn connected_graph(vertex_count: usize, extra_edges: usize, max_weight: Weight, seed: u64) -> Graph {
    let mut rng = Lcg::new(seed);
    let mut graph = Graph::new(vertex_count);
    for v in 1..vertex_count {
        let u = rng.next_below(v as u64) as usize;
        let w = rng.next_below(u64::from(max_weight) + 1) as Weight;
        graph.add_undirected_edge(u, v, w).unwrap();
    }
    if vertex_count > 1 {
        for _ in 0..extra_edges {
            let a = rng.next_below(vertex_count as u64) as usize;
            let b = rng.next_below(vertex_count as u64) as usize;
            let w = rng.next_below(u64::from(max_weight) + 1) as Weight;
            graph.add_undirected_edge(a, b, w).unwrap();
        }
    }
    graph
}

/// All directed edges of a graph
pub fn all_edges(graph: &Graph) -> Vec<Edge> {
    graph.vertices().flat_map(|v| v.edges().copied()).collect()
}

/// Shortest distances by repeated relaxation, independent of any heap
pub fn reference_distances(graph: &Graph, start: VertexId) -> Vec<Option<u64>> {
    let mut distances = vec![None; graph.vertex_count()];
    distances[start] = Some(0u64);
    let edges = all_edges(graph);
    for _ in 0..graph.vertex_count() {
        let mut changed = false;
        for edge in &edges {
            if let Some(d) = distances[edge.from] {
                let candidate = d + u64::from(edge.weight);
                if distances[edge.to].map_or(true, |current| candidate < current) {
                    distances[edge.to] = Some(candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    distances
}

/// Weight of a minimum spanning forest by Kruskal with union-find
pub fn reference_forest_weight(graph: &Graph) -> u64 {
    let mut edges = all_edges(graph);
    edges.sort_unstable_by_key(|e| e.weight);
    let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();

    fn find(parent: &mut [usize], node: usize) -> usize {
        let mut current = node;
        while parent[current] != current {
            parent[current] = parent[parent[current]];
            current = parent[current];
        }
        current
    }

    let mut total = 0;
    for edge in edges {
        let a = find(&mut parent, edge.from);
        let b = find(&mut parent, edge.to);
        if a != b {
            parent[b] = a;
            total += u64::from(edge.weight);
        }
    }
    total
}

/// Checks that `tree` is acyclic and joins exactly the vertices it touches
pub fn is_forest(vertex_count: usize, tree: &[Edge]) -> bool {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    fn find(parent: &mut [usize], node: usize) -> usize {
        let mut current = node;
        while parent[current] != current {
            current = parent[current];
        }
        current
    }
    for edge in tree {
        let a = find(&mut parent, edge.from);
        let b = find(&mut parent, edge.to);
        if a == b {
            return false;
        }
        parent[b] = a;
    }
    true
}

/// Priority queue that finds the minimum by scanning every id
///
/// Deliberately naive; used to cross-check the algorithms against a second
/// [`IndexedHeap`] implementation. Ties go to the smallest id.
pub struct LinearScanQueue {
    priorities: Vec<Option<Priority>>,
    len: usize,
}

impl IndexedHeap for LinearScanQueue {
    fn with_capacity(capacity: usize) -> Result<Self, HeapError> {
        Ok(LinearScanQueue {
            priorities: vec![None; capacity],
            len: 0,
        })
    }

    fn capacity(&self) -> usize {
        self.priorities.len()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn insert(&mut self, priority: Priority, id: usize) -> Result<(), HeapError> {
        let capacity = self.capacity();
        if self.len >= capacity {
            return Err(HeapError::CapacityExceeded { capacity });
        }
        match self.priorities.get_mut(id) {
            None => Err(HeapError::IdOutOfRange { id, capacity }),
            Some(Some(_)) => Err(HeapError::DuplicateId { id }),
            Some(slot) => {
                *slot = Some(priority);
                self.len += 1;
                Ok(())
            }
        }
    }

    fn peek_min(&self) -> Option<HeapNode> {
        self.priorities
            .iter()
            .enumerate()
            .filter_map(|(id, p)| p.map(|priority| HeapNode { priority, id }))
            .min_by_key(|node| (node.priority, node.id))
    }

    fn extract_min(&mut self) -> Option<HeapNode> {
        let min = self.peek_min()?;
        self.priorities[min.id] = None;
        self.len -= 1;
        Some(min)
    }

    fn priority_of(&self, id: usize) -> Option<Priority> {
        self.priorities.get(id).copied().flatten()
    }

    fn decrease_priority(&mut self, id: usize, new_priority: Priority) -> Result<(), HeapError> {
        let slot = self
            .priorities
            .get_mut(id)
            .and_then(Option::as_mut)
            .ok_or(HeapError::UnknownId { id })?;
        if new_priority >= *slot {
            return Err(HeapError::PriorityNotDecreased {
                id,
                current: *slot,
                requested: new_priority,
            });
        }
        *slot = new_priority;
        Ok(())
    }
}

/// Layer that records spans and events so tests can assert on them
#[derive(Clone, Default)]
pub struct RecordingLayer {
    spans: Arc<Mutex<Vec<Record>>>,
    events: Arc<Mutex<Vec<EventRecord>>>,
}

/// A closed span with its fields
#[derive(Debug, Clone)]
pub struct Record {
    pub name: String,
    pub fields: HashMap<String, String>,
}

/// An emitted event with its level and fields
#[derive(Debug, Clone)]
pub struct EventRecord {
    pub level: Level,
    pub fields: HashMap<String, String>,
}

impl RecordingLayer {
    pub fn spans(&self) -> Vec<Record> {
        self.spans.lock().expect("lock poisoned").clone()
    }

    pub fn events(&self) -> Vec<EventRecord> {
        self.events.lock().expect("lock poisoned").clone()
    }
}

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &tracing::span::Attributes<'_>, id: &tracing::span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            let mut record = Record {
                name: attrs.metadata().name().to_owned(),
                fields: HashMap::new(),
            };
            attrs.record(&mut FieldRecorder {
                fields: &mut record.fields,
            });
            span.extensions_mut().insert(record);
        }
    }

    fn on_close(&self, id: tracing::span::Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        let Some(record) = span.extensions_mut().remove::<Record>() else {
            return;
        };
        self.spans.lock().expect("lock poisoned").push(record);
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldRecorder { fields: &mut fields });
        self.events.lock().expect("lock poisoned").push(EventRecord {
            level: *event.metadata().level(),
            fields,
        });
    }
}

struct FieldRecorder<'a> {
    fields: &'a mut HashMap<String, String>,
}

impl Visit for FieldRecorder<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.fields.insert(field.name().to_owned(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields.insert(field.name().to_owned(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields.insert(field.name().to_owned(), value.to_string());
    }
}
