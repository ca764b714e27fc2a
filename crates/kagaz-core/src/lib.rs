//! # kagaz-core: Pure Business Logic for Kagaz
//!
//! This crate is the **heart** of Kagaz. It contains all invoice
//! computation as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Kagaz Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Invoice Form (browser frontend)                 │   │
//! │  │    Item rows ──► GST toggles ──► Export button                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    kagaz-export (service)                       │   │
//! │  │    peek_invoice_number, export                                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kagaz-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  totals   │  │   words   │  │ numbering │  │ document  │  │   │
//! │  │   │ LineItem  │  │  Crore/   │  │ PREFIX +  │  │ ItemsTable│  │   │
//! │  │   │ 18% GST   │  │  Lakh     │  │ YYYYMMDD  │  │ TotalsBlk │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 Document renderer (external)                    │   │
//! │  │      receives InvoiceDocument as plain structured values        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, InvoiceForm, InvoiceStatus, ...)
//! - [`totals`] - Totals calculator (taxable / GST / grand total)
//! - [`words`] - Amount-in-words formatter (Indian numbering)
//! - [`numbering`] - Invoice number formatting
//! - [`document`] - Render-ready document assembly
//! - [`validation`] - Input validation at the export boundary
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, clock access is FORBIDDEN here
//! 3. **Tolerant Input**: user-typed numeric fields coerce to 0, never error
//! 4. **Total Functions**: no panics anywhere in the declared input domain
//!
//! ## Example Usage
//!
//! ```rust
//! use kagaz_core::totals::compute_totals;
//! use kagaz_core::types::LineItem;
//! use kagaz_core::words::amount_to_words;
//!
//! let items = vec![LineItem {
//!     description: "Consulting".to_string(),
//!     rate: "1000".to_string(),
//!     quantity: "2".to_string(),
//!     gst: true,
//! }];
//!
//! let computed = compute_totals(&items);
//! assert_eq!(computed.totals.grand_total(), 2360.0); // 2000 + 18% GST
//!
//! assert_eq!(
//!     amount_to_words(computed.totals.grand_total().round() as u64),
//!     "Two Thousand Three Hundred and Sixty"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod document;
pub mod error;
pub mod numbering;
pub mod totals;
pub mod types;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kagaz_core::LineItem` instead of
// `use kagaz_core::types::LineItem`

pub use document::{build_document, InvoiceDocument};
pub use error::{ValidationError, ValidationResult};
pub use totals::{compute_totals, InvoiceTotals, LineBreakdown, TotalsComputation};
pub use types::*;
pub use words::amount_to_words;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// GST rate applied to items flagged as taxable.
///
/// ## Why a constant?
/// The system bills a single flat 18% rate; there are no partial or
/// variable rates. Per-item or per-category rates would land here as a
/// lookup if they are ever needed.
pub const GST_RATE: f64 = 0.18;

/// Human-readable GST rate label, used in the items table annotation.
pub const GST_RATE_LABEL: &str = "18%";

/// Largest amount the words formatter will spell out.
///
/// Anything above this returns the [`words::OVERFLOW_WORD`] sentinel
/// instead of failing: the caller decides whether to display or reject.
pub const MAX_WORDS_AMOUNT: u64 = 999_999_999;

/// Maximum line items allowed on a single invoice
///
/// ## Business Reason
/// Prevents runaway forms and keeps the rendered table on one document.
/// Can be made configurable per-seller in future versions.
pub const MAX_INVOICE_ITEMS: usize = 100;
