use std::fmt::{Display, Formatter, Result as FormatResult};

use serde::{Deserialize, Serialize};

/// The three primitive map-data types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
    Relation,
}

impl ElementKind {
    /// Singular path segment, e.g. `node/42`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ElementKind::Node => "node",
            ElementKind::Way => "way",
            ElementKind::Relation => "relation",
        }
    }

    /// Plural segment used by multi-fetch, e.g. `nodes?nodes=1,2`.
    pub const fn plural(self) -> &'static str {
        match self {
            ElementKind::Node => "nodes",
            ElementKind::Way => "ways",
            ElementKind::Relation => "relations",
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        formatter.write_str(self.as_str())
    }
}

/// Comma-join ids for multi-fetch and list filters (`1,2,3`).
pub fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
