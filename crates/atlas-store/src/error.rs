//! # Store Error Types
//!
//! Error types for mock backend operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Error Propagation                               │
//! │                                                                     │
//! │  ValidationError (atlas-core)                                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← adds NotFound / conflict kinds          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Caller maps to a user-facing message                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookup misses and malformed input both fail loudly here: an explicit
//! error surface means a real backend can slot in behind the same
//! signatures without changing caller error handling.

use thiserror::Error;

use atlas_core::ValidationError;

/// Mock backend operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found.
    ///
    /// ## When This Occurs
    /// - Closing a session id that does not exist
    /// - Closing a session that is already closed
    /// - Role lookup/update/delete by unknown id
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A drawer session is already open.
    ///
    /// Only raised under `SessionPolicy::SingleDrawer`; the multi-drawer
    /// policy allows concurrent open sessions.
    #[error("a session is already open: {id}")]
    SessionAlreadyOpen { id: String },

    /// Caller input failed validation (wraps atlas-core's error).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

/// Result type for mock backend operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::not_found("Session", "SES-missing");
        assert_eq!(err.to_string(), "Session not found: SES-missing");
    }

    #[test]
    fn test_validation_converts_to_store_error() {
        let err: StoreError = ValidationError::negative("openingCash", -5).into();
        assert!(matches!(err, StoreError::Validation(_)));
    }
}
