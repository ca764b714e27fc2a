//! # Error Types
//!
//! Validation error types for kagaz-core.
//!
//! ## Why So Narrow?
//! The computation core is made of total functions: unparsable numeric
//! fields coerce to zero (tolerant-input policy for free-text form
//! fields) and an out-of-range words amount returns a sentinel string.
//! The only thing that can actually be *rejected* is malformed
//! configuration or an oversized form, and that is what lands here.
//!
//! ## Error Flow
//! ```text
//! ValidationError (this crate) → ExportError (kagaz-export) → caller
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// Raised at the export boundary before any computation runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Collection size is out of range.
    #[error("{field} must have at most {max} entries")]
    TooMany { field: String, max: usize },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "invoice prefix".to_string(),
        };
        assert_eq!(err.to_string(), "invoice prefix is required");

        let err = ValidationError::TooMany {
            field: "items".to_string(),
            max: 100,
        };
        assert_eq!(err.to_string(), "items must have at most 100 entries");
    }
}
