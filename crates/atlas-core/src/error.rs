//! # Error Types
//!
//! Domain-specific error types for atlas-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  atlas-core errors (this file)                                      │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  atlas-store errors (separate crate)                                │
//! │  └── StoreError       - NotFound / Conflict / Validation            │
//! │                                                                     │
//! │  Flow: ValidationError → StoreError → caller                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//!
//! The access-resolution side of this crate deliberately has NO error
//! type: classification is total over arbitrary partial input and
//! defaults every absent field (fail-open-to-guest, see [`crate::access`]).

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Malformed input is never accepted silently; the store rejects it
/// with one of these variants before touching any state.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A monetary amount is negative where only zero or positive is valid.
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: String, value: i64 },

    /// A count or quantity that must be strictly positive.
    #[error("{field} must be positive (got {value})")]
    MustBePositive { field: String, value: i64 },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

impl ValidationError {
    /// Creates a Required error for a given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates a NegativeAmount error.
    pub fn negative(field: impl Into<String>, value: i64) -> Self {
        ValidationError::NegativeAmount {
            field: field.into(),
            value,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type CoreResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
