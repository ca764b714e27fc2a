//! # kagaz-export: Export Orchestration for Kagaz
//!
//! Wires the pure computation core ([`kagaz_core`]) to the persisted
//! per-day sequence counter ([`kagaz_db`]) and produces the render-ready
//! invoice document.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Export Layer                                   │
//! │                                                                         │
//! │  Invoice form (browser) ──► ExportService ──► Document renderer        │
//! │                                   │                                     │
//! │                                   ├── kagaz-core (totals, words,       │
//! │                                   │   numbering, document assembly)    │
//! │                                   │                                     │
//! │                                   └── SequenceStore (injected)         │
//! │                                        ├── SqliteSequenceStore          │
//! │                                        └── InMemorySequenceStore        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kagaz_db::{Database, DbConfig};
//! use kagaz_export::{ExportConfig, ExportService, SqliteSequenceStore};
//!
//! let db = Database::new(DbConfig::new("kagaz.db")).await?;
//! let store = SqliteSequenceStore::new(db.sequences());
//! let service = ExportService::new(store, ExportConfig::from_env())?;
//!
//! let outcome = service.export(&form).await?;
//! // outcome.document  → hand to the PDF renderer
//! // outcome.fresh_form → hand back to the form
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod service;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::ExportConfig;
pub use error::{ExportError, ExportResult};
pub use service::{ExportOutcome, ExportService};
pub use store::{InMemorySequenceStore, SequenceStore, SqliteSequenceStore};
