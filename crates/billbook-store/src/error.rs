//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SessionError (session crate) ← code + message for the UI layer        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UI displays "Could not save data ..."                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed write NEVER leaves the caller guessing: the in-memory state it
//! was about to persist stays untouched, and the error says why.

use thiserror::Error;

/// Persistence operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage medium rejected the write.
    ///
    /// ## When This Occurs
    /// - Quota exceeded
    /// - Storage blocked or read-only
    #[error("Write rejected by storage medium: {0}")]
    WriteRejected(String),

    /// Underlying file I/O failed.
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A document could not be serialized or deserialized.
    #[error("Document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store file exists but is not a JSON object namespace.
    #[error("Store file is corrupt: {reason}")]
    Corrupt { reason: String },

    /// Entity not found in a collection.
    ///
    /// ## When This Occurs
    /// - Deleting a bill id that is not in history
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a WriteRejected error.
    pub fn write_rejected(reason: impl Into<String>) -> Self {
        StoreError::WriteRejected(reason.into())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::not_found("Bill", "abc-123");
        assert_eq!(err.to_string(), "Bill not found: abc-123");

        let err = StoreError::write_rejected("quota exceeded");
        assert_eq!(
            err.to_string(),
            "Write rejected by storage medium: quota exceeded"
        );
    }
}
