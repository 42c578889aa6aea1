//! Row-to-element projections
//!
//! A projection is a pure mapping from one dataset row to a graph element
//! plus metadata. Column references are resolved against the dataset's
//! header schema when the projection is constructed; a reference that
//! cannot be resolved is a configuration error raised immediately, never
//! deferred to iteration time.

use crate::graph::{MetadataBehavior, MetadataMap, VertexKey};
use crate::io::{LoadError, LoadResult};

/// An edge projected from one row: endpoints, weight, and that row's
/// metadata fragment (absent under the `none` behavior)
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeElement {
    pub source: VertexKey,
    pub target: VertexKey,
    pub weight: f64,
    pub metadata: Option<MetadataMap>,
}

/// A vertex projected from one row: key and metadata fragment
#[derive(Debug, Clone, PartialEq)]
pub struct VertexElement {
    pub key: VertexKey,
    pub metadata: MetadataMap,
}

fn check_index(index: usize, headers: &[String]) -> LoadResult<()> {
    if index >= headers.len() {
        return Err(LoadError::ColumnOutOfRange {
            index,
            column_count: headers.len(),
        });
    }
    Ok(())
}

fn field<'a>(row: &'a [String], index: usize) -> LoadResult<&'a str> {
    row.get(index)
        .map(String::as_str)
        .ok_or(LoadError::ColumnOutOfRange {
            index,
            column_count: row.len(),
        })
}

/// Maps a row to an [`EdgeElement`] under a fixed metadata behavior.
///
/// Metadata is drawn from every schema column except source and target;
/// the weight column, when present, contributes to metadata like any
/// other non-structural column.
#[derive(Debug, Clone)]
pub struct EdgeProjection {
    source_index: usize,
    target_index: usize,
    weight_index: Option<usize>,
    behavior: MetadataBehavior,
    // (column index, column name) pairs contributing metadata
    metadata_columns: Vec<(usize, String)>,
}

impl EdgeProjection {
    /// Projection that attaches no metadata
    pub fn ignore_metadata(
        headers: &[String],
        source_index: usize,
        target_index: usize,
        weight_index: Option<usize>,
    ) -> LoadResult<Self> {
        Self::build(
            headers,
            source_index,
            target_index,
            weight_index,
            MetadataBehavior::None,
        )
    }

    /// Projection where the latest row's metadata wins per edge
    pub fn with_single_metadata(
        headers: &[String],
        source_index: usize,
        target_index: usize,
        weight_index: Option<usize>,
    ) -> LoadResult<Self> {
        Self::build(
            headers,
            source_index,
            target_index,
            weight_index,
            MetadataBehavior::Single,
        )
    }

    /// Projection where every row appends metadata per edge, in file order
    pub fn with_collection_metadata(
        headers: &[String],
        source_index: usize,
        target_index: usize,
        weight_index: Option<usize>,
    ) -> LoadResult<Self> {
        Self::build(
            headers,
            source_index,
            target_index,
            weight_index,
            MetadataBehavior::Collection,
        )
    }

    fn build(
        headers: &[String],
        source_index: usize,
        target_index: usize,
        weight_index: Option<usize>,
        behavior: MetadataBehavior,
    ) -> LoadResult<Self> {
        check_index(source_index, headers)?;
        check_index(target_index, headers)?;
        if let Some(index) = weight_index {
            check_index(index, headers)?;
        }

        let metadata_columns = match behavior {
            MetadataBehavior::None => Vec::new(),
            _ => headers
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != source_index && *i != target_index)
                .map(|(i, name)| (i, name.clone()))
                .collect(),
        };

        Ok(EdgeProjection {
            source_index,
            target_index,
            weight_index,
            behavior,
            metadata_columns,
        })
    }

    pub fn behavior(&self) -> MetadataBehavior {
        self.behavior
    }

    /// Project one row.
    ///
    /// A present weight column must parse as a number; a malformed value
    /// is a row-level error propagated to the caller (never silently
    /// skipped, since dropped weighted rows would corrupt aggregates).
    /// A missing weight column defaults every row's weight to 1.
    pub fn project(&self, row: &[String]) -> LoadResult<EdgeElement> {
        let source = VertexKey::from(field(row, self.source_index)?);
        let target = VertexKey::from(field(row, self.target_index)?);

        let weight = match self.weight_index {
            Some(index) => {
                let raw = field(row, index)?;
                raw.parse::<f64>()
                    .map_err(|_| LoadError::InvalidWeight {
                        value: raw.to_string(),
                        column: index,
                    })?
            }
            None => 1.0,
        };

        let metadata = match self.behavior {
            MetadataBehavior::None => None,
            _ => Some(self.collect_metadata(row)?),
        };

        Ok(EdgeElement {
            source,
            target,
            weight,
            metadata,
        })
    }

    fn collect_metadata(&self, row: &[String]) -> LoadResult<MetadataMap> {
        let mut metadata = MetadataMap::new();
        for (index, name) in &self.metadata_columns {
            metadata.insert(name.clone(), field(row, *index)?.to_string());
        }
        Ok(metadata)
    }
}

/// Maps a row to a [`VertexElement`] under a fixed metadata behavior.
///
/// Metadata is drawn from every schema column except the key column. A
/// field whose raw value exactly matches one of `ignored_values` is
/// omitted from that row's fragment entirely.
#[derive(Debug, Clone)]
pub struct VertexProjection {
    vertex_index: usize,
    behavior: MetadataBehavior,
    metadata_columns: Vec<(usize, String)>,
    ignored_values: Vec<String>,
}

impl VertexProjection {
    /// Projection that attaches no metadata
    pub fn ignore_metadata(headers: &[String], vertex_index: usize) -> LoadResult<Self> {
        Self::build(headers, vertex_index, Vec::new(), MetadataBehavior::None)
    }

    /// Projection where the latest row's metadata wins per vertex
    pub fn with_single_metadata(
        headers: &[String],
        vertex_index: usize,
        ignored_values: Vec<String>,
    ) -> LoadResult<Self> {
        Self::build(headers, vertex_index, ignored_values, MetadataBehavior::Single)
    }

    /// Projection where every row appends metadata per vertex, in file
    /// order
    pub fn with_collection_metadata(
        headers: &[String],
        vertex_index: usize,
        ignored_values: Vec<String>,
    ) -> LoadResult<Self> {
        Self::build(
            headers,
            vertex_index,
            ignored_values,
            MetadataBehavior::Collection,
        )
    }

    fn build(
        headers: &[String],
        vertex_index: usize,
        ignored_values: Vec<String>,
        behavior: MetadataBehavior,
    ) -> LoadResult<Self> {
        check_index(vertex_index, headers)?;

        let metadata_columns = match behavior {
            MetadataBehavior::None => Vec::new(),
            _ => headers
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != vertex_index)
                .map(|(i, name)| (i, name.clone()))
                .collect(),
        };

        Ok(VertexProjection {
            vertex_index,
            behavior,
            metadata_columns,
            ignored_values,
        })
    }

    pub fn behavior(&self) -> MetadataBehavior {
        self.behavior
    }

    /// Project one row.
    pub fn project(&self, row: &[String]) -> LoadResult<VertexElement> {
        let key = VertexKey::from(field(row, self.vertex_index)?);

        let mut metadata = MetadataMap::new();
        for (index, name) in &self.metadata_columns {
            let raw = field(row, *index)?;
            if self.ignored_values.iter().any(|ignored| ignored == raw) {
                continue;
            }
            metadata.insert(name.clone(), raw.to_string());
        }

        Ok(VertexElement { key, metadata })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    const EMAIL_HEADERS: [&str; 5] = ["date", "emailFrom", "emailTo", "subject", "replyCount"];

    #[test]
    fn test_edge_projection_resolves_endpoints_and_weight() {
        let headers = headers(&EMAIL_HEADERS);
        let projection = EdgeProjection::ignore_metadata(&headers, 1, 2, Some(4)).unwrap();

        let element = projection
            .project(&row(&["7/1/2018", "jon", "john", "Graphs are great", "1"]))
            .unwrap();

        assert_eq!(element.source.as_str(), "jon");
        assert_eq!(element.target.as_str(), "john");
        assert_eq!(element.weight, 1.0);
        assert_eq!(element.metadata, None);
    }

    #[test]
    fn test_edge_projection_weight_defaults_to_one() {
        let headers = headers(&["from", "to"]);
        let projection = EdgeProjection::ignore_metadata(&headers, 0, 1, None).unwrap();

        let element = projection.project(&row(&["a", "b"])).unwrap();
        assert_eq!(element.weight, 1.0);
    }

    #[test]
    fn test_edge_metadata_spans_all_but_endpoints() {
        let headers = headers(&EMAIL_HEADERS);
        let projection =
            EdgeProjection::with_collection_metadata(&headers, 1, 2, Some(4)).unwrap();

        let element = projection
            .project(&row(&["7/1/2018", "jon", "john", "Graphs are great", "1"]))
            .unwrap();

        let metadata = element.metadata.unwrap();
        assert_eq!(metadata.len(), 3);
        assert_eq!(metadata["date"], "7/1/2018");
        assert_eq!(metadata["subject"], "Graphs are great");
        // The weight column still contributes to metadata.
        assert_eq!(metadata["replyCount"], "1");
    }

    #[test]
    fn test_edge_projection_rejects_out_of_range_index() {
        let headers = headers(&["from", "to"]);
        let result = EdgeProjection::ignore_metadata(&headers, 0, 5, None);
        assert!(matches!(
            result,
            Err(LoadError::ColumnOutOfRange {
                index: 5,
                column_count: 2
            })
        ));
    }

    #[test]
    fn test_edge_projection_malformed_weight_fails() {
        let headers = headers(&["from", "to", "weight"]);
        let projection = EdgeProjection::ignore_metadata(&headers, 0, 1, Some(2)).unwrap();

        let result = projection.project(&row(&["a", "b", "heavy"]));
        assert!(matches!(
            result,
            Err(LoadError::InvalidWeight { value, column: 2 }) if value == "heavy"
        ));
    }

    #[test]
    fn test_vertex_projection_collects_metadata() {
        let headers = headers(&["name", "lastName", "sandwichPreference"]);
        let projection =
            VertexProjection::with_single_metadata(&headers, 0, Vec::new()).unwrap();

        let element = projection
            .project(&row(&["frank", "redhot", "buffalo chicken"]))
            .unwrap();

        assert_eq!(element.key.as_str(), "frank");
        assert_eq!(element.metadata.len(), 2);
        assert_eq!(element.metadata["lastName"], "redhot");
        assert_eq!(element.metadata["sandwichPreference"], "buffalo chicken");
    }

    #[test]
    fn test_vertex_projection_omits_ignored_values() {
        let headers = headers(&["name", "lastName", "sandwichPreference"]);
        let projection =
            VertexProjection::with_single_metadata(&headers, 0, vec!["NULL".to_string()])
                .unwrap();

        let element = projection
            .project(&row(&["jon", "larson", "NULL"]))
            .unwrap();

        // The ignored field is absent as a key, not present-but-empty.
        assert!(!element.metadata.contains_key("sandwichPreference"));
        assert_eq!(element.metadata.len(), 1);
        assert_eq!(element.metadata["lastName"], "larson");
    }

    #[test]
    fn test_vertex_projection_rejects_out_of_range_index() {
        let headers = headers(&["name"]);
        let result = VertexProjection::with_single_metadata(&headers, 3, Vec::new());
        assert!(matches!(
            result,
            Err(LoadError::ColumnOutOfRange {
                index: 3,
                column_count: 1
            })
        ));
    }
}
