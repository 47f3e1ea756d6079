//! Validation errors for schema types.

use thiserror::Error;

/// Errors raised while validating Nex wire types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A package identifier is not of the form `author.name`.
    #[error("Invalid package ID '{input}': {reason}")]
    InvalidId {
        /// The rejected input, as given.
        input: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A JSON document could not be decoded.
    #[error("Malformed JSON: {0}")]
    Json(String),

    /// A required manifest field is absent or empty.
    #[error("Manifest missing required field '{0}'")]
    MissingField(&'static str),

    /// A manifest field is present but cannot be represented.
    #[error("Invalid manifest field '{field}': {reason}")]
    InvalidField {
        /// Field name as it appears in the manifest.
        field: &'static str,
        /// Human-readable explanation.
        reason: String,
    },
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
