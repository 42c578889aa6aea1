//! Graph assembly from delimited-text datasets
//!
//! Two layers live here. The assembler (`from_edge_dataset`,
//! `from_vertex_dataset`) applies an already-validated projection over a
//! dataset against a caller-supplied graph, so edge and vertex passes can
//! compose against the same graph object. The facade (`from_file`) takes
//! primitive parameters, validates every one of them before a single row
//! is read, and runs the passes.

use super::dataset::{CsvDataset, Dialect};
use super::{LoadError, LoadResult};
use crate::graph::{Directedness, Graph, MetadataBehavior};
use crate::projection::{EdgeProjection, VertexProjection};
use std::io::Read;
use tracing::{debug, info};

/// Apply an edge projection over a dataset, mutating `graph` in place.
///
/// Each projected row inserts or extends one edge: weights accumulate and
/// metadata merges under the projection's behavior; endpoints are created
/// as a side effect. A row-level failure aborts the pass with the error;
/// rows already applied remain (there is no partially-applied edge).
pub fn from_edge_dataset<R: Read>(
    dataset: &mut CsvDataset<R>,
    projection: &EdgeProjection,
    graph: &mut Graph,
) -> LoadResult<()> {
    let behavior = projection.behavior();
    let mut rows_applied = 0usize;

    for row in dataset.rows() {
        let element = projection.project(&row?)?;
        graph.add_edge(
            element.source,
            element.target,
            element.weight,
            element.metadata,
            behavior,
        );
        rows_applied += 1;
    }

    info!(
        rows_applied,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "edge pass complete"
    );
    Ok(())
}

/// Apply a vertex projection over a dataset, mutating `graph` in place.
///
/// Vertex passes attach metadata to vertices that already exist
/// (typically from a prior edge pass); they never introduce vertices.
/// Rows keyed to absent vertices are dropped.
pub fn from_vertex_dataset<R: Read>(
    dataset: &mut CsvDataset<R>,
    projection: &VertexProjection,
    graph: &mut Graph,
) -> LoadResult<()> {
    let behavior = projection.behavior();
    let mut rows_applied = 0usize;
    let mut rows_dropped = 0usize;

    for row in dataset.rows() {
        let element = projection.project(&row?)?;
        if graph.merge_vertex_metadata(&element.key, element.metadata, behavior) {
            rows_applied += 1;
        } else {
            debug!(key = %element.key, "vertex not present in graph, row dropped");
            rows_dropped += 1;
        }
    }

    info!(rows_applied, rows_dropped, "vertex pass complete");
    Ok(())
}

/// Parameters for the edge pass of [`from_file`].
///
/// `dialect` and `metadata_behavior` are kept as raw strings and
/// validated by the facade before any row is read.
#[derive(Debug, Clone)]
pub struct EdgeLoadConfig {
    /// Column holding the edge's source key
    pub source_index: usize,
    /// Column holding the edge's target key
    pub target_index: usize,
    /// Column holding the per-row weight; absent means weight 1 per row
    pub weight_index: Option<usize>,
    /// Whether the first row names the columns
    pub has_header: bool,
    /// Dialect name: "excel", "excel-tab", or "unix"
    pub dialect: String,
    /// Explicit column names, overriding the file's header row
    pub use_headers: Option<Vec<String>>,
    /// Behavior name: "none", "single", or "collection"
    pub metadata_behavior: String,
}

impl EdgeLoadConfig {
    /// Config with the common defaults: headered excel source, no weight
    /// column, no metadata
    pub fn new(source_index: usize, target_index: usize) -> Self {
        EdgeLoadConfig {
            source_index,
            target_index,
            weight_index: None,
            has_header: true,
            dialect: "excel".to_string(),
            use_headers: None,
            metadata_behavior: "none".to_string(),
        }
    }
}

/// Parameters for the optional vertex pass of [`from_file`].
#[derive(Debug, Clone)]
pub struct VertexLoadConfig {
    /// Column holding the vertex key
    pub vertex_index: usize,
    /// Whether the first row names the columns
    pub has_header: bool,
    /// Dialect name: "excel", "excel-tab", or "unix"
    pub dialect: String,
    /// Explicit column names, overriding the file's header row
    pub use_headers: Option<Vec<String>>,
    /// Behavior name: "none", "single", or "collection"
    pub metadata_behavior: String,
    /// Raw field values whose metadata keys are omitted per row
    pub ignored_values: Vec<String>,
}

impl VertexLoadConfig {
    /// Config with the common defaults: headered excel source,
    /// last-write-wins metadata, nothing ignored
    pub fn new(vertex_index: usize) -> Self {
        VertexLoadConfig {
            vertex_index,
            has_header: true,
            dialect: "excel".to_string(),
            use_headers: None,
            metadata_behavior: "single".to_string(),
            ignored_values: Vec::new(),
        }
    }
}

fn edge_projection(
    headers: &[String],
    config: &EdgeLoadConfig,
    behavior: MetadataBehavior,
) -> LoadResult<EdgeProjection> {
    match behavior {
        MetadataBehavior::None => EdgeProjection::ignore_metadata(
            headers,
            config.source_index,
            config.target_index,
            config.weight_index,
        ),
        MetadataBehavior::Single => EdgeProjection::with_single_metadata(
            headers,
            config.source_index,
            config.target_index,
            config.weight_index,
        ),
        MetadataBehavior::Collection => EdgeProjection::with_collection_metadata(
            headers,
            config.source_index,
            config.target_index,
            config.weight_index,
        ),
    }
}

fn vertex_projection(
    headers: &[String],
    config: &VertexLoadConfig,
    behavior: MetadataBehavior,
) -> LoadResult<VertexProjection> {
    match behavior {
        MetadataBehavior::None => VertexProjection::ignore_metadata(headers, config.vertex_index),
        MetadataBehavior::Single => VertexProjection::with_single_metadata(
            headers,
            config.vertex_index,
            config.ignored_values.clone(),
        ),
        MetadataBehavior::Collection => VertexProjection::with_collection_metadata(
            headers,
            config.vertex_index,
            config.ignored_values.clone(),
        ),
    }
}

/// Build a graph from an edge source and, optionally, a vertex source.
///
/// Every parameter is validated before a single row is read: behavior and
/// dialect names must be recognized, and a vertex source and vertex
/// configuration must be supplied together or not at all. The edge pass
/// runs first; the vertex pass then attaches metadata to the vertices the
/// edge pass created. Splitting the two passes across separate
/// [`from_edge_dataset`]/[`from_vertex_dataset`] calls against a shared
/// graph yields a structurally equal result.
///
/// The caller owns both readers and closes them after assembly.
pub fn from_file<E: Read, V: Read>(
    edge_source: E,
    edge_config: &EdgeLoadConfig,
    vertex_source: Option<V>,
    vertex_config: Option<&VertexLoadConfig>,
    directedness: Directedness,
) -> LoadResult<Graph> {
    // Fail-fast validation of the whole parameter surface.
    let edge_behavior: MetadataBehavior = edge_config.metadata_behavior.parse()?;
    let edge_dialect: Dialect = edge_config.dialect.parse()?;

    let vertex_pass = match (vertex_source, vertex_config) {
        (Some(source), Some(config)) => {
            let behavior: MetadataBehavior = config.metadata_behavior.parse()?;
            let dialect: Dialect = config.dialect.parse()?;
            Some((source, config, behavior, dialect))
        }
        (Some(_), None) => return Err(LoadError::VertexSourceWithoutConfig),
        (None, Some(_)) => return Err(LoadError::VertexConfigWithoutSource),
        (None, None) => None,
    };

    let mut graph = Graph::new(directedness);

    let mut edge_dataset = CsvDataset::new(
        edge_source,
        edge_config.has_header,
        edge_dialect,
        edge_config.use_headers.clone(),
    )?;
    let projection = edge_projection(edge_dataset.headers(), edge_config, edge_behavior)?;
    from_edge_dataset(&mut edge_dataset, &projection, &mut graph)?;

    if let Some((source, config, behavior, dialect)) = vertex_pass {
        let mut vertex_dataset =
            CsvDataset::new(source, config.has_header, dialect, config.use_headers.clone())?;
        let projection = vertex_projection(vertex_dataset.headers(), config, behavior)?;
        from_vertex_dataset(&mut vertex_dataset, &projection, &mut graph)?;
    }

    Ok(graph)
}
