//! Per-row metadata attached to graph elements
//!
//! Every row that projects onto an existing element contributes a metadata
//! fragment; the element's [`MetadataBehavior`] decides what happens to it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Metadata built from one source row, keyed by column name.
///
/// Column order from the source schema is preserved.
pub type MetadataMap = IndexMap<String, String>;

/// Raised when a behavior name is not in the recognized set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown metadata behavior '{0}' (expected one of: none, single, collection)")]
pub struct UnknownMetadataBehavior(pub String);

/// Policy governing how repeated rows contribute metadata to the same
/// graph element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataBehavior {
    /// Attach nothing
    None,
    /// Last write wins: the element keeps exactly the latest row's map
    Single,
    /// Every row appends one map, in encounter order, never overwritten
    Collection,
}

impl MetadataBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataBehavior::None => "none",
            MetadataBehavior::Single => "single",
            MetadataBehavior::Collection => "collection",
        }
    }

    /// Merge one row's metadata fragment into an element's attribute list.
    pub fn merge(&self, attributes: &mut Vec<MetadataMap>, fragment: MetadataMap) {
        match self {
            MetadataBehavior::None => {}
            MetadataBehavior::Single => {
                attributes.clear();
                attributes.push(fragment);
            }
            MetadataBehavior::Collection => attributes.push(fragment),
        }
    }
}

impl fmt::Display for MetadataBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MetadataBehavior {
    type Err = UnknownMetadataBehavior;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(MetadataBehavior::None),
            "single" => Ok(MetadataBehavior::Single),
            "collection" => Ok(MetadataBehavior::Collection),
            other => Err(UnknownMetadataBehavior(other.to_string())),
        }
    }
}
