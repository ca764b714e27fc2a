//! # Validation Module
//!
//! Input validation at the export boundary.
//!
//! Deliberately thin: line-item rate/quantity fields are *not* validated
//! here because tolerant parse-or-zero coercion is their contract. What
//! gets checked is seller configuration (the invoice prefix) and the one
//! structural bound on the form (item count).

use crate::error::{ValidationError, ValidationResult};
use crate::MAX_INVOICE_ITEMS;

/// Validates the configured invoice-number prefix.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 10 characters
/// - Alphanumeric only (it is embedded verbatim in every invoice number)
///
/// ## Example
/// ```rust
/// use kagaz_core::validation::validate_invoice_prefix;
///
/// assert!(validate_invoice_prefix("INV").is_ok());
/// assert!(validate_invoice_prefix("").is_err());
/// assert!(validate_invoice_prefix("INV-").is_err());
/// ```
pub fn validate_invoice_prefix(prefix: &str) -> ValidationResult<()> {
    let prefix = prefix.trim();

    if prefix.is_empty() {
        return Err(ValidationError::Required {
            field: "invoice prefix".to_string(),
        });
    }

    if prefix.len() > 10 {
        return Err(ValidationError::TooLong {
            field: "invoice prefix".to_string(),
            max: 10,
        });
    }

    if !prefix.chars().all(|c| c.is_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "invoice prefix".to_string(),
            reason: "must contain only letters and numbers".to_string(),
        });
    }

    Ok(())
}

/// Validates the number of line items on a form.
///
/// ## Rules
/// - Must not exceed `MAX_INVOICE_ITEMS` (100)
/// - Zero items is allowed: an empty form exports a document with an
///   empty table and zero totals
pub fn validate_item_count(count: usize) -> ValidationResult<()> {
    if count > MAX_INVOICE_ITEMS {
        return Err(ValidationError::TooMany {
            field: "items".to_string(),
            max: MAX_INVOICE_ITEMS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
