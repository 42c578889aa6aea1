//! Core type definitions for the projected graph

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Key identifying a vertex, taken verbatim from a source field
/// (e.g. "jon", "widgets, inc.")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexKey(String);

impl VertexKey {
    pub fn new(key: impl Into<String>) -> Self {
        VertexKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VertexKey {
    fn from(s: String) -> Self {
        VertexKey(s)
    }
}

impl From<&str> for VertexKey {
    fn from(s: &str) -> Self {
        VertexKey(s.to_string())
    }
}

// Lets map lookups accept plain &str keys.
impl Borrow<str> for VertexKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Whether a graph distinguishes edge orientation.
///
/// Fixed once at graph construction; no projection pass alters it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Directedness {
    /// (a -> b) and (b -> a) are distinct edges
    Directed,
    /// (a, b) and (b, a) are the same edge
    Undirected,
}

impl Directedness {
    pub fn is_directed(&self) -> bool {
        matches!(self, Directedness::Directed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_key() {
        let key = VertexKey::new("jon");
        assert_eq!(key.as_str(), "jon");
        assert_eq!(format!("{}", key), "jon");

        let key2: VertexKey = "widgets, inc.".into();
        assert_eq!(key2.as_str(), "widgets, inc.");
    }

    #[test]
    fn test_vertex_key_ordering() {
        let a = VertexKey::new("alpha");
        let b = VertexKey::new("beta");
        assert!(a < b);
    }

    #[test]
    fn test_directedness() {
        assert!(Directedness::Directed.is_directed());
        assert!(!Directedness::Undirected.is_directed());
    }
}
