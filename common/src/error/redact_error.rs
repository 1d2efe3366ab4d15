use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when a secret-holding type is asked to leave the process in a
/// serialised form.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Redaction Error: {type_name} cannot be serialized, read it with {accessor} {location}")]
    Serialization {
        type_name: &'static str,
        accessor: &'static str,
        location: ErrorLocation,
    },
}
