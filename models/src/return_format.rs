use serde::{Deserialize, Serialize};

const JSON_SUFFIX: &str = ".json";

/// Representation requested from format-aware endpoints.
///
/// The API selects JSON through a `.json` suffix on the resource rather than
/// an `Accept` header, so the choice is a path transform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReturnFormat {
    Json,
    Xml,
}

impl Default for ReturnFormat {
    fn default() -> Self {
        ReturnFormat::Json
    }
}

impl ReturnFormat {
    /// `Json` appends `.json` to `resource`; `Xml` returns it unchanged.
    pub fn apply(self, resource: &str) -> String {
        match self {
            ReturnFormat::Json => format!("{resource}{JSON_SUFFIX}"),
            ReturnFormat::Xml => resource.to_string(),
        }
    }
}
