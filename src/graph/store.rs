//! In-memory storage for the projected graph
//!
//! Uses insertion-ordered maps so that iterating vertices or edges
//! reproduces source-file encounter order, while lookups stay O(1):
//! - vertices: VertexKey -> Vertex
//! - edges: EdgeKey -> Edge (endpoint pair, canonicalized when undirected)

use super::attributes::{MetadataBehavior, MetadataMap};
use super::edge::Edge;
use super::types::{Directedness, VertexKey};
use super::vertex::Vertex;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identity of an edge within one graph.
///
/// Directed graphs keep the (source, target) orientation; undirected
/// graphs order the pair so that (a, b) and (b, a) collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeKey(VertexKey, VertexKey);

impl EdgeKey {
    fn new(source: &VertexKey, target: &VertexKey, directedness: Directedness) -> Self {
        if directedness.is_directed() || source <= target {
            EdgeKey(source.clone(), target.clone())
        } else {
            EdgeKey(target.clone(), source.clone())
        }
    }
}

/// The mutable labelled graph produced by projection passes
///
/// Directedness is fixed at construction. Vertices and edges carry
/// per-row metadata lists; edges additionally carry an accumulated
/// numeric weight. Extension is idempotent with respect to structure:
/// inserting an existing edge again accumulates weight and metadata,
/// never duplicates the edge.
#[derive(Debug, Clone)]
pub struct Graph {
    directedness: Directedness,
    vertices: IndexMap<VertexKey, Vertex>,
    edges: IndexMap<EdgeKey, Edge>,
}

impl Graph {
    /// Create an empty graph with the given directedness
    pub fn new(directedness: Directedness) -> Self {
        Graph {
            directedness,
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    /// Create an empty directed graph
    pub fn directed() -> Self {
        Graph::new(Directedness::Directed)
    }

    /// Create an empty undirected graph
    pub fn undirected() -> Self {
        Graph::new(Directedness::Undirected)
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    pub fn is_directed(&self) -> bool {
        self.directedness.is_directed()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_vertex(&self, key: &str) -> bool {
        self.vertices.contains_key(key)
    }

    pub fn vertex(&self, key: &str) -> Option<&Vertex> {
        self.vertices.get(key)
    }

    /// Look up the edge between two endpoints, honoring directedness
    pub fn edge(&self, source: &str, target: &str) -> Option<&Edge> {
        let key = EdgeKey::new(
            &VertexKey::from(source),
            &VertexKey::from(target),
            self.directedness,
        );
        self.edges.get(&key)
    }

    /// Accumulated weight of the edge between two endpoints, if present
    pub fn edge_weight(&self, source: &str, target: &str) -> Option<f64> {
        self.edge(source, target).map(|edge| edge.weight)
    }

    /// Vertices in first-insertion (source file) order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Edges in first-insertion (source file) order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Endpoints adjacent to `key`, in edge insertion order.
    ///
    /// For directed graphs this follows outgoing edges only.
    pub fn neighbors(&self, key: &str) -> Vec<&VertexKey> {
        let mut neighbors = Vec::new();
        for edge in self.edges.values() {
            if edge.source.as_str() == key {
                neighbors.push(&edge.target);
            } else if !self.is_directed() && edge.target.as_str() == key {
                neighbors.push(&edge.source);
            }
        }
        neighbors
    }

    /// Insert or extend the edge (source, target).
    ///
    /// A new edge starts at `weight` with metadata seeded per `behavior`;
    /// an existing edge gains `weight` and merges the fragment. Both
    /// endpoints are materialized as vertices if absent.
    pub fn add_edge(
        &mut self,
        source: VertexKey,
        target: VertexKey,
        weight: f64,
        metadata: Option<MetadataMap>,
        behavior: MetadataBehavior,
    ) {
        self.ensure_vertex(&source);
        self.ensure_vertex(&target);

        let key = EdgeKey::new(&source, &target, self.directedness);
        self.edges
            .entry(key)
            .or_insert_with(|| Edge::new(source, target, 0.0))
            .accumulate(weight, metadata, behavior);
    }

    /// Merge metadata into an existing vertex.
    ///
    /// Vertex passes never introduce vertices: when `key` is absent the
    /// fragment is dropped and `false` is returned.
    pub fn merge_vertex_metadata(
        &mut self,
        key: &VertexKey,
        fragment: MetadataMap,
        behavior: MetadataBehavior,
    ) -> bool {
        match self.vertices.get_mut(key.as_str()) {
            Some(vertex) => {
                vertex.merge_metadata(fragment, behavior);
                true
            }
            None => false,
        }
    }

    fn ensure_vertex(&mut self, key: &VertexKey) {
        if !self.vertices.contains_key(key.as_str()) {
            self.vertices.insert(key.clone(), Vertex::new(key.clone()));
        }
    }
}

// Structural equality: same directedness, same vertex set, same edge set
// (weights and attributes included), independent of insertion order.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.directedness == other.directedness
            && self.vertices == other.vertices
            && self.edges == other.edges
    }
}
