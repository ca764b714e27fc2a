//! # Export Error Types
//!
//! One error type for the export layer, wrapping the layers below.
//!
//! The computation itself (totals, words, document assembly) cannot fail;
//! what can go wrong is rejected input at the boundary or a counter-store
//! outage.

use thiserror::Error;

use kagaz_core::ValidationError;

use crate::store::SequenceStoreError;

/// Errors the export service can return.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Configuration or form input was rejected before computation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The sequence counter could not be read or written.
    #[error(transparent)]
    Store(#[from] SequenceStoreError),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
