//! # Session Error Type
//!
//! Unified error type for session operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in BillBook                               │
//! │                                                                         │
//! │  UI Layer                      Session                                  │
//! │  ────────                      ───────                                  │
//! │                                                                         │
//! │  session.add_item(id, qty)                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Session Operation                                               │  │
//! │  │  Result<T, SessionError>                                         │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store Error? ────── StoreError::WriteRejected ───┐              │  │
//! │  │         │                                         │              │  │
//! │  │         ▼                                         ▼              │  │
//! │  │  Validation Error? ── ValidationError ──────── SessionError ───► │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ErrorStatus { code: "AUTH_REQUIRED", message: "..." }                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! UI layers need a serializable payload, so [`ErrorStatus`] carries a
//! machine-readable `code` alongside the human-readable `message`.

use serde::Serialize;
use thiserror::Error;

use billbook_core::ValidationError;
use billbook_store::StoreError;

/// Error returned from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Input validation failed before any state changed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The persistence layer rejected or failed an operation.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A referenced record does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A gated operation was invoked while the gate is locked.
    #[error("login required to view history and reports")]
    AuthRequired,

    /// An operation that needs a business profile ran before setup.
    #[error("business setup must be completed first")]
    SetupRequired,

    /// Password hashing failed; carries the hasher's message.
    #[error("failed to hash password: {0}")]
    PasswordHash(String),
}

/// Error codes for serialized error payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Record not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Persistence failed
    StorageError,

    /// Gate is locked
    AuthRequired,

    /// Setup has not run yet
    SetupRequired,

    /// Anything else
    Internal,
}

/// Serializable error payload for the UI layer.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Bill not found: 1f3a9c"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorStatus {
    /// Machine-readable code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable message for display
    pub message: String,
}

impl SessionError {
    /// Creates a not-found error.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        SessionError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Maps the error to its wire code.
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::Validation(_) => ErrorCode::ValidationError,
            SessionError::Store(StoreError::NotFound { .. }) => ErrorCode::NotFound,
            SessionError::Store(_) => ErrorCode::StorageError,
            SessionError::NotFound { .. } => ErrorCode::NotFound,
            SessionError::AuthRequired => ErrorCode::AuthRequired,
            SessionError::SetupRequired => ErrorCode::SetupRequired,
            SessionError::PasswordHash(_) => ErrorCode::Internal,
        }
    }

    /// Converts the error to its serializable payload.
    pub fn status(&self) -> ErrorStatus {
        ErrorStatus {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// Result alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
