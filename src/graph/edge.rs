//! Edge implementation for the projected graph

use super::attributes::{MetadataBehavior, MetadataMap};
use super::types::VertexKey;
use serde::{Deserialize, Serialize};

/// An edge in the projected graph
///
/// There is at most one edge per endpoint pair: repeated rows for the
/// same pair accumulate into this one edge (weight sums, metadata merges
/// per the active behavior) rather than producing multi-edges. In an
/// undirected graph `source`/`target` record the first-encountered
/// orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Endpoint the first contributing row named as source
    pub source: VertexKey,

    /// Endpoint the first contributing row named as target
    pub target: VertexKey,

    /// Sum of the weights of every contributing row
    pub weight: f64,

    /// Per-row metadata fragments, shaped by the behavior that built them
    pub attributes: Vec<MetadataMap>,
}

impl Edge {
    pub fn new(source: impl Into<VertexKey>, target: impl Into<VertexKey>, weight: f64) -> Self {
        Edge {
            source: source.into(),
            target: target.into(),
            weight,
            attributes: Vec::new(),
        }
    }

    /// Whether any metadata was ever attached
    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Fold one more row into this edge.
    pub(crate) fn accumulate(
        &mut self,
        weight: f64,
        fragment: Option<MetadataMap>,
        behavior: MetadataBehavior,
    ) {
        self.weight += weight;
        if let Some(fragment) = fragment {
            behavior.merge(&mut self.attributes, fragment);
        }
    }
}
