//! Vertex implementation for the projected graph

use super::attributes::{MetadataBehavior, MetadataMap};
use super::types::VertexKey;
use serde::{Deserialize, Serialize};

/// A vertex in the projected graph
///
/// Vertices are created as a side effect of edge insertion (edges imply
/// vertex existence) and accumulate metadata from vertex projection
/// passes. An empty attribute list means no pass ever attached metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Key this vertex was projected from
    pub key: VertexKey,

    /// Per-row metadata fragments, shaped by the behavior that built them
    pub attributes: Vec<MetadataMap>,
}

impl Vertex {
    pub fn new(key: impl Into<VertexKey>) -> Self {
        Vertex {
            key: key.into(),
            attributes: Vec::new(),
        }
    }

    /// Whether any metadata was ever attached
    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    pub(crate) fn merge_metadata(&mut self, fragment: MetadataMap, behavior: MetadataBehavior) {
        behavior.merge(&mut self.attributes, fragment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vertex_has_no_attributes() {
        let vertex = Vertex::new("jon");
        assert_eq!(vertex.key.as_str(), "jon");
        assert!(!vertex.has_attributes());
    }

    #[test]
    fn test_merge_metadata_single() {
        let mut vertex = Vertex::new("jon");
        let mut first = MetadataMap::new();
        first.insert("lastName".to_string(), "larson".to_string());
        let mut second = MetadataMap::new();
        second.insert("lastName".to_string(), "snow".to_string());

        vertex.merge_metadata(first, MetadataBehavior::Single);
        vertex.merge_metadata(second, MetadataBehavior::Single);

        assert_eq!(vertex.attributes.len(), 1);
        assert_eq!(vertex.attributes[0]["lastName"], "snow");
    }

    #[test]
    fn test_vertex_serialization() {
        let mut vertex = Vertex::new("frank");
        let mut fragment = MetadataMap::new();
        fragment.insert("sandwichPreference".to_string(), "buffalo chicken".to_string());
        vertex.merge_metadata(fragment, MetadataBehavior::Collection);

        let json = serde_json::to_string(&vertex).unwrap();
        let restored: Vertex = serde_json::from_str(&json).unwrap();
        assert_eq!(vertex, restored);
    }
}
