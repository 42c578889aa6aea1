//! Delimited-text input: dialects, datasets, and the graph loader

pub mod csv_loader;
pub mod dataset;

// Re-export main types
pub use csv_loader::{
    from_edge_dataset, from_file, from_vertex_dataset, EdgeLoadConfig, VertexLoadConfig,
};
pub use dataset::{CsvDataset, Dialect};

use crate::graph::UnknownMetadataBehavior;
use thiserror::Error;

/// Errors raised while configuring or running a load.
///
/// Everything except `InvalidWeight` and `Csv` is a configuration error,
/// detected before any row is read; those two are row-level failures that
/// abort the pass where they occur.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("unknown dialect '{0}' (expected one of: excel, excel-tab, unix)")]
    UnknownDialect(String),

    #[error(transparent)]
    UnknownMetadataBehavior(#[from] UnknownMetadataBehavior),

    #[error("a vertex source was supplied without a vertex load configuration")]
    VertexSourceWithoutConfig,

    #[error("a vertex load configuration was supplied without a vertex source")]
    VertexConfigWithoutSource,

    #[error("column index {index} is out of range for a schema with {column_count} columns")]
    ColumnOutOfRange { index: usize, column_count: usize },

    #[error("cannot parse weight '{value}' in column {column} as a number")]
    InvalidWeight { value: String, column: usize },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;
