//! The projected property graph
//!
//! This module implements the graph that projection passes build:
//! - vertices and edges keyed by source-field strings
//! - accumulated numeric edge weights (multi-edges collapse)
//! - per-row metadata lists governed by a merge behavior
//! - insertion-ordered iteration, structural equality

pub mod attributes;
pub mod edge;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use attributes::{MetadataBehavior, MetadataMap, UnknownMetadataBehavior};
pub use edge::Edge;
pub use store::Graph;
pub use types::{Directedness, VertexKey};
pub use vertex::Vertex;
