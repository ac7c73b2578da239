//! Counter conflict tests
//!
//! The counter is a single conditional write; concurrent increments that
//! observed the same value must not both land.

use std::sync::Arc;

use chesed_core::counter::{increment, increment_from};
use chesed_core::{Counter, IdeaStore, IncrementOutcome, MemoryStore};

#[tokio::test]
async fn test_two_increments_from_same_read_land_once() {
    let store = MemoryStore::with_counter(5);

    let observed_a = store.fetch_counter().await.unwrap().count;
    let observed_b = store.fetch_counter().await.unwrap().count;
    assert_eq!((observed_a, observed_b), (5, 5));

    let first = increment_from(&store, observed_a).await.unwrap();
    let second = increment_from(&store, observed_b).await.unwrap();

    assert_eq!(first, IncrementOutcome::Applied(6));
    assert_eq!(second, IncrementOutcome::Conflict);
    assert_eq!(store.fetch_counter().await.unwrap().count, 6);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_increments_never_overcount() {
    let store = Arc::new(MemoryStore::with_counter(5));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move { increment_from(store.as_ref(), 5).await.unwrap() })
        })
        .collect();

    let outcomes = futures::future::join_all(handles).await;
    let applied = outcomes
        .into_iter()
        .map(|r| r.unwrap())
        .filter(|o| matches!(o, IncrementOutcome::Applied(_)))
        .count();

    assert_eq!(applied, 1);
    assert_eq!(store.fetch_counter().await.unwrap().count, 6);
}

#[tokio::test]
async fn test_sequential_increments_accumulate() {
    let store = MemoryStore::new();
    for _ in 0..3 {
        increment(&store).await.unwrap();
    }
    assert_eq!(store.fetch_counter().await.unwrap().count, 3);
}

#[tokio::test]
async fn test_conflict_leaves_timestamp_untouched() {
    let store = MemoryStore::with_counter(2);
    let before = store.fetch_counter().await.unwrap();

    let applied = store.update_counter_if(1, &Counter::new(2).next()).await.unwrap();

    assert!(!applied);
    assert_eq!(store.fetch_counter().await.unwrap(), before);
}
