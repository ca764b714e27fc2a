//! # kagaz-db: Database Layer for Kagaz
//!
//! This crate provides database access for Kagaz. It uses SQLite for
//! local storage with sqlx for async operations.
//!
//! The only thing Kagaz persists is the **per-day invoice sequence
//! counter**. Invoices themselves are computed fresh on every export and
//! never stored.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Kagaz Data Flow                                 │
//! │                                                                         │
//! │  Export service (kagaz-export)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     kagaz-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│ (sequence.rs) │    │  (embedded)  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database (day_sequences table)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kagaz_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/kagaz.db")).await?;
//! let seq = db.sequences().current(today).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};
pub use repository::sequence::SequenceRepository;
