//! Embedding interface boundary
//!
//! The graphs this crate builds are consumed by embedding collaborators
//! (adjacency/spectral embedding, dimensionality reduction) that live
//! outside the crate. Only their contract is defined here: the embedding
//! container, the collaborator traits, and the configuration errors they
//! raise. No numerics are implemented.

use crate::graph::{Graph, VertexKey};
use ndarray::Array2;
use thiserror::Error;

/// Embedding errors
#[derive(Error, Debug)]
pub enum EmbedError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type EmbedResult<T> = Result<T, EmbedError>;

/// A vertex embedding: one matrix row per vertex, rows following
/// `vertex_order`
#[derive(Debug, Clone)]
pub struct Embedding {
    matrix: Array2<f64>,
    vertex_order: Vec<VertexKey>,
}

impl Embedding {
    /// Pair a matrix with the vertex order its rows follow.
    ///
    /// The row count must equal the vertex count.
    pub fn new(matrix: Array2<f64>, vertex_order: Vec<VertexKey>) -> EmbedResult<Self> {
        if matrix.nrows() != vertex_order.len() {
            return Err(EmbedError::ConfigError(format!(
                "embedding matrix has {} rows for {} vertices",
                matrix.nrows(),
                vertex_order.len()
            )));
        }
        Ok(Embedding {
            matrix,
            vertex_order,
        })
    }

    pub fn matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    pub fn vertex_order(&self) -> &[VertexKey] {
        &self.vertex_order
    }

    /// Number of embedding dimensions (matrix columns)
    pub fn dimensions(&self) -> usize {
        self.matrix.ncols()
    }
}

/// Produces a vertex embedding from a built graph.
///
/// Implementations read the graph's adjacency structure through
/// [`Graph::neighbors`] and [`Graph::edge_weight`]; the returned
/// embedding carries exactly one row per graph vertex.
pub trait GraphEmbedder {
    fn embed(&self, graph: &Graph) -> EmbedResult<Embedding>;
}

/// Reduces an embedding matrix to a fixed number of components.
///
/// The result preserves the input's row count and has exactly
/// `num_components` columns.
pub trait DimensionReducer {
    fn reduce(&self, embedding: &Array2<f64>, num_components: usize) -> EmbedResult<Array2<f64>>;
}

/// Validated arguments for a dimensionality-reduction call
#[derive(Debug, Clone)]
pub struct ReducerConfig {
    pub embedding: Array2<f64>,
    pub num_components: usize,
}

impl ReducerConfig {
    /// Reject unspecified arguments before any numeric work happens.
    pub fn new(
        embedding: Option<Array2<f64>>,
        num_components: Option<usize>,
    ) -> EmbedResult<Self> {
        let embedding = embedding.ok_or_else(|| {
            EmbedError::ConfigError("an embedding matrix must be provided".to_string())
        })?;
        let num_components = num_components.ok_or_else(|| {
            EmbedError::ConfigError("num_components must be provided".to_string())
        })?;
        if num_components == 0 {
            return Err(EmbedError::ConfigError(
                "num_components must be at least 1".to_string(),
            ));
        }
        Ok(ReducerConfig {
            embedding,
            num_components,
        })
    }
}
