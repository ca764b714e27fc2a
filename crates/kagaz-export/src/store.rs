//! # Sequence Store
//!
//! The injected counter-store interface the export service depends on.
//!
//! ## Why a Trait?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Counter Store Seam                                   │
//! │                                                                         │
//! │  ExportService<S: SequenceStore>                                       │
//! │       │                                                                 │
//! │       ├──► SqliteSequenceStore ──► kagaz-db ──► day_sequences table    │
//! │       │         (production)                                           │
//! │       │                                                                 │
//! │       └──► InMemorySequenceStore                                       │
//! │                 (tests)                                                │
//! │                                                                         │
//! │  The core logic never touches ambient storage directly; whoever        │
//! │  constructs the service decides where the counter lives.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//! - `current(date)`: the sequence the next export on `date` uses;
//!   a date the store has never seen reads as 1.
//! - `put(date, next_seq)`: persist the value the *next* export will use.
//!   The service writes back `current + 1` only after a successful
//!   export, so a failed export never consumes a number.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use kagaz_db::SequenceRepository;

/// Counter-store failures as the export service sees them.
#[derive(Debug, Error)]
pub enum SequenceStoreError {
    /// The backing store could not be read or written.
    #[error("Sequence store unavailable: {0}")]
    Storage(String),
}

/// A durable, date-scoped monotonic counter.
#[async_trait]
pub trait SequenceStore {
    /// Returns the sequence number the next export on `date` should use.
    async fn current(&self, date: NaiveDate) -> Result<u32, SequenceStoreError>;

    /// Persists the sequence number the next export on `date` should use.
    async fn put(&self, date: NaiveDate, next_seq: u32) -> Result<(), SequenceStoreError>;
}

// =============================================================================
// SQLite-backed store
// =============================================================================

/// Production store backed by the `day_sequences` table.
#[derive(Debug, Clone)]
pub struct SqliteSequenceStore {
    repo: SequenceRepository,
}

impl SqliteSequenceStore {
    /// Wraps a [`SequenceRepository`] (obtain one via
    /// `Database::sequences()`).
    pub fn new(repo: SequenceRepository) -> Self {
        SqliteSequenceStore { repo }
    }
}

#[async_trait]
impl SequenceStore for SqliteSequenceStore {
    async fn current(&self, date: NaiveDate) -> Result<u32, SequenceStoreError> {
        self.repo
            .current(date)
            .await
            .map_err(|e| SequenceStoreError::Storage(e.to_string()))
    }

    async fn put(&self, date: NaiveDate, next_seq: u32) -> Result<(), SequenceStoreError> {
        self.repo
            .put(date, next_seq)
            .await
            .map_err(|e| SequenceStoreError::Storage(e.to_string()))
    }
}

// =============================================================================
// In-memory store
// =============================================================================

/// Volatile store for tests and previews. Counters vanish with the
/// process.
#[derive(Debug, Default)]
pub struct InMemorySequenceStore {
    counters: Mutex<HashMap<NaiveDate, u32>>,
}

impl InMemorySequenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SequenceStore for InMemorySequenceStore {
    async fn current(&self, date: NaiveDate) -> Result<u32, SequenceStoreError> {
        let counters = self
            .counters
            .lock()
            .map_err(|e| SequenceStoreError::Storage(e.to_string()))?;
        Ok(counters.get(&date).copied().unwrap_or(1))
    }

    async fn put(&self, date: NaiveDate, next_seq: u32) -> Result<(), SequenceStoreError> {
        let mut counters = self
            .counters
            .lock()
            .map_err(|e| SequenceStoreError::Storage(e.to_string()))?;
        counters.insert(date, next_seq);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_in_memory_defaults_to_one() {
        let store = InMemorySequenceStore::new();
        assert_eq!(store.current(date(2026, 1, 31)).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_in_memory_round_trip() {
        let store = InMemorySequenceStore::new();
        let today = date(2026, 1, 31);

        store.put(today, 5).await.unwrap();
        assert_eq!(store.current(today).await.unwrap(), 5);

        // Other dates are unaffected.
        assert_eq!(store.current(date(2026, 2, 1)).await.unwrap(), 1);
    }
}
