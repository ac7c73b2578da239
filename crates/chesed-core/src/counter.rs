//! The shared "ideas generated" counter.
//!
//! Increments are a single compare-and-swap against the store: the write only
//! lands if the count is still the value the caller last saw. A lost race
//! drops that increment; there is no retry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ChesedResult;
use crate::store::IdeaStore;

/// Counter row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    pub count: i64,
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_opt")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Counter {
    pub fn new(count: i64) -> Self {
        Self {
            count,
            last_updated: None,
        }
    }

    /// The row that follows this one, stamped now.
    pub fn next(&self) -> Self {
        Self {
            count: self.count + 1,
            last_updated: Some(Utc::now()),
        }
    }
}

/// Result of one increment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncrementOutcome {
    /// The store now holds this count
    Applied(i64),
    /// Someone else changed the count first; nothing was written
    Conflict,
}

/// Increment from a count the caller already holds.
pub async fn increment_from(store: &dyn IdeaStore, observed: i64) -> ChesedResult<IncrementOutcome> {
    let next = Counter::new(observed).next();
    if store.update_counter_if(observed, &next).await? {
        tracing::debug!(count = next.count, "Counter incremented");
        Ok(IncrementOutcome::Applied(next.count))
    } else {
        tracing::debug!(observed, "Counter changed underneath us; increment dropped");
        Ok(IncrementOutcome::Conflict)
    }
}

/// Read the counter, then increment from what was read.
pub async fn increment(store: &dyn IdeaStore) -> ChesedResult<IncrementOutcome> {
    let current = store.fetch_counter().await?;
    increment_from(store, current.count).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_next_stamps_time() {
        let next = Counter::new(41).next();
        assert_eq!(next.count, 42);
        assert!(next.last_updated.is_some());
    }

    #[test]
    fn test_missing_timestamp_deserializes() {
        let counter: Counter = serde_json::from_str(r#"{"count": 12}"#).unwrap();
        assert_eq!(counter, Counter::new(12));
    }

    #[tokio::test]
    async fn test_increment_reads_then_writes() {
        let store = MemoryStore::with_counter(9);
        assert_eq!(increment(&store).await.unwrap(), IncrementOutcome::Applied(10));
        assert_eq!(store.fetch_counter().await.unwrap().count, 10);
    }

    #[tokio::test]
    async fn test_stale_observation_is_a_conflict() {
        let store = MemoryStore::with_counter(5);

        assert_eq!(increment_from(&store, 3).await.unwrap(), IncrementOutcome::Conflict);
        assert_eq!(store.fetch_counter().await.unwrap().count, 5);
    }
}
