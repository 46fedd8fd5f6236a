use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the store, repositories and session provider.
///
/// Nothing here is fatal: every failure leaves the persisted collections
/// unchanged and the caller can re-attempt the action.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field was missing or empty; the mutation was aborted.
    #[error("validation failed on `{field}`: {message}")]
    Validation { field: String, message: String },

    /// The mutation target does not exist in its collection.
    #[error("{kind} with id `{id}` not found")]
    NotFound { kind: &'static str, id: String },

    /// A persisted snapshot could not be deserialized.
    #[error("stored snapshot under `{key}` is not valid JSON")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A collection could not be serialized for persistence.
    #[error("failed to serialize snapshot for `{key}`")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The underlying key-value medium failed.
    #[error("storage backend error")]
    Backend(#[from] sled::Error),

    /// An attachment file could not be read.
    #[error("failed to read attachment {path:?}")]
    AttachmentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Create a validation error for a named field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a not-found error for a record kind and id
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}
