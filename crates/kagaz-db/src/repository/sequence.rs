//! # Sequence Repository
//!
//! Persistence for the per-day invoice sequence counter.
//!
//! ## Counter Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Per-Day Sequence Counter                              │
//! │                                                                         │
//! │  1. FORM LOAD                                                          │
//! │     └── current(today) → 1 when the date has no row yet                │
//! │                          (this IS the midnight reset)                  │
//! │                                                                         │
//! │  2. EXPORT SUCCEEDS                                                    │
//! │     └── put(today, seq + 1) → upsert, caller writes the bump           │
//! │                                                                         │
//! │  3. NEXT DAY                                                           │
//! │     └── current(tomorrow) → 1 again; yesterday's row stays behind      │
//! │         as an audit trail of daily invoice volume                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The repository does not bump the counter itself: the read and the
//! write-back deliberately bracket the export, so a failed export never
//! consumes a number.

use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use kagaz_core::DaySequence;

/// Repository for the per-day sequence counter.
#[derive(Debug, Clone)]
pub struct SequenceRepository {
    pool: SqlitePool,
}

impl SequenceRepository {
    /// Creates a new SequenceRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SequenceRepository { pool }
    }

    /// Returns the sequence number the next export on `date` should use.
    ///
    /// A date with no stored row reads as 1: the counter "resets" at the
    /// day boundary simply because the key changes.
    pub async fn current(&self, date: NaiveDate) -> DbResult<u32> {
        Ok(self.get(date).await?.map(|s| s.next_seq).unwrap_or(1))
    }

    /// Stores the counter value for `date`.
    ///
    /// The caller writes back `value + 1` after a successful export.
    pub async fn put(&self, date: NaiveDate, next_seq: u32) -> DbResult<()> {
        debug!(date = %date, next_seq = next_seq, "Storing day sequence");

        sqlx::query(
            r#"
            INSERT INTO day_sequences (seq_date, next_seq, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(seq_date) DO UPDATE SET
                next_seq = excluded.next_seq,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(date.to_string())
        .bind(next_seq as i64)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Returns the stored counter for `date`, if any.
    ///
    /// Mostly for diagnostics; [`current`](Self::current) is the read the
    /// export path uses.
    pub async fn get(&self, date: NaiveDate) -> DbResult<Option<DaySequence>> {
        let next_seq: Option<i64> =
            sqlx::query_scalar("SELECT next_seq FROM day_sequences WHERE seq_date = ?1")
                .bind(date.to_string())
                .fetch_optional(&self.pool)
                .await?;

        Ok(next_seq.map(|n| DaySequence {
            date,
            next_seq: n.max(1) as u32,
        }))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
