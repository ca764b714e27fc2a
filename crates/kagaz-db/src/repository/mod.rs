//! # Repository Module
//!
//! Database repository implementations for Kagaz.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Export service                                                        │
//! │       │  db.sequences().current(today)                                 │
//! │       ▼                                                                 │
//! │  SequenceRepository                                                    │
//! │  ├── current(&self, date)                                              │
//! │  ├── put(&self, date, next_seq)                                        │
//! │  └── get(&self, date)                                                  │
//! │       │  SQL                                                            │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`sequence::SequenceRepository`] - the per-day invoice sequence counter

pub mod sequence;
