//! Tablegraph
//!
//! Projects tabular (delimited-text) records into an in-memory property
//! graph, attaching per-row metadata to vertices and edges under a small
//! set of configurable merge policies. Relational exports — email logs,
//! transaction ledgers, contact lists — become graphs ready for
//! downstream structural or embedding analysis.
//!
//! # Architecture
//!
//! - [`io::CsvDataset`] reads a delimited source under a validated
//!   [`io::Dialect`] and exposes ordered rows plus column names.
//! - [`projection`] maps each row to an edge or vertex element, with
//!   metadata shaped by a [`graph::MetadataBehavior`]
//!   (none / single / collection).
//! - The assembler ([`io::from_edge_dataset`],
//!   [`io::from_vertex_dataset`]) folds elements into a [`graph::Graph`]:
//!   repeated edges accumulate weight and merge metadata; vertex passes
//!   decorate existing vertices only.
//! - The facade ([`io::from_file`]) validates primitive parameters
//!   fail-fast and runs the edge pass, then the optional vertex pass,
//!   against one graph.
//! - [`embed`] defines the interface handed to external embedding
//!   collaborators.
//!
//! # Example Usage
//!
//! ```rust
//! use tablegraph::graph::Directedness;
//! use tablegraph::io::{from_file, EdgeLoadConfig};
//!
//! let edges = "emailFrom,emailTo,volume\n\
//!              jon,john,10\n\
//!              jon,john,2\n\
//!              bill,frank,5\n";
//!
//! let config = EdgeLoadConfig {
//!     weight_index: Some(2),
//!     ..EdgeLoadConfig::new(0, 1)
//! };
//! let graph = from_file(
//!     edges.as_bytes(),
//!     &config,
//!     None::<&[u8]>,
//!     None,
//!     Directedness::Undirected,
//! )
//! .unwrap();
//!
//! // The two jon-john rows collapsed into one edge with summed weight.
//! assert_eq!(graph.edge_count(), 2);
//! assert_eq!(graph.vertex_count(), 4);
//! assert_eq!(graph.edge_weight("jon", "john"), Some(12.0));
//! ```

pub mod embed;
pub mod graph;
pub mod io;
pub mod projection;

pub use graph::{Directedness, Edge, Graph, MetadataBehavior, MetadataMap, Vertex, VertexKey};
pub use io::{
    from_file, CsvDataset, Dialect, EdgeLoadConfig, LoadError, LoadResult, VertexLoadConfig,
};
pub use projection::{EdgeElement, EdgeProjection, VertexElement, VertexProjection};
