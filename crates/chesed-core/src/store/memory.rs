//! In-process store with the hosted store's semantics.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use super::{IdeaStore, COMMITMENTS_TABLE};
use crate::commitment::{Commitment, NewCommitment, ReminderContact};
use crate::counter::Counter;
use crate::error::{ChesedError, ChesedResult};
use crate::sheets::IdeaComponents;

#[derive(Debug)]
struct Tables {
    counter: Option<Counter>,
    commitments: BTreeMap<i64, Commitment>,
    next_commitment_id: i64,
    idea_components: Option<IdeaComponents>,
}

/// Store kept entirely in memory.
#[derive(Debug)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Empty store whose counter row starts at zero.
    pub fn new() -> Self {
        Self::with_counter(0)
    }

    /// Empty store whose counter row starts at `count`.
    pub fn with_counter(count: i64) -> Self {
        Self {
            tables: Mutex::new(Tables {
                counter: Some(Counter::new(count)),
                commitments: BTreeMap::new(),
                next_commitment_id: 1,
                idea_components: None,
            }),
        }
    }

    /// Make the next inserted commitment receive `id`.
    pub fn with_next_commitment_id(self, id: i64) -> Self {
        self.tables.lock().next_commitment_id = id;
        self
    }

    /// Number of stored commitments.
    pub fn commitment_count(&self) -> usize {
        self.tables.lock().commitments.len()
    }
}

#[async_trait]
impl IdeaStore for MemoryStore {
    async fn fetch_counter(&self) -> ChesedResult<Counter> {
        Ok(self.tables.lock().counter.clone().unwrap_or_default())
    }

    async fn update_counter_if(&self, expected: i64, next: &Counter) -> ChesedResult<bool> {
        let mut tables = self.tables.lock();
        match tables.counter.as_mut() {
            Some(current) if current.count == expected => {
                *current = next.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn insert_commitment(&self, new: &NewCommitment) -> ChesedResult<Commitment> {
        let mut tables = self.tables.lock();
        let id = tables.next_commitment_id;
        tables.next_commitment_id += 1;

        let commitment = Commitment {
            id,
            action: new.action.clone(),
            recipient: new.recipient.clone(),
            time: new.time.clone(),
            full_text: new.full_text.clone(),
            user_name: new.user_name.clone(),
            user_email: new.user_email.clone(),
            created_at: Some(Utc::now()),
        };
        tables.commitments.insert(id, commitment.clone());
        Ok(commitment)
    }

    async fn attach_reminder(&self, id: i64, contact: &ReminderContact) -> ChesedResult<Commitment> {
        let mut tables = self.tables.lock();
        let commitment = tables
            .commitments
            .get_mut(&id)
            .ok_or_else(|| ChesedError::NotFound(format!("{} id={}", COMMITMENTS_TABLE, id)))?;
        commitment.user_name = Some(contact.name.clone());
        commitment.user_email = Some(contact.email.clone());
        Ok(commitment.clone())
    }

    async fn get_commitment(&self, id: i64) -> ChesedResult<Option<Commitment>> {
        Ok(self.tables.lock().commitments.get(&id).cloned())
    }

    async fn fetch_idea_components(&self) -> ChesedResult<Option<IdeaComponents>> {
        Ok(self.tables.lock().idea_components.clone())
    }

    async fn replace_idea_components(&self, components: &IdeaComponents) -> ChesedResult<()> {
        self.tables.lock().idea_components = Some(components.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idea::Idea;

    #[tokio::test]
    async fn test_counter_conditional_update() {
        let store = MemoryStore::with_counter(5);

        assert!(!store.update_counter_if(4, &Counter::new(5)).await.unwrap());
        assert_eq!(store.fetch_counter().await.unwrap().count, 5);

        assert!(store.update_counter_if(5, &Counter::new(6)).await.unwrap());
        assert_eq!(store.fetch_counter().await.unwrap().count, 6);
    }

    #[tokio::test]
    async fn test_commitment_ids_are_sequential() {
        let store = MemoryStore::new().with_next_commitment_id(10);
        let new = NewCommitment::from_idea(&Idea::new("Visit", "a neighbor", "today"));

        let first = store.insert_commitment(&new).await.unwrap();
        let second = store.insert_commitment(&new).await.unwrap();

        assert_eq!(first.id, 10);
        assert_eq!(second.id, 11);
        assert!(first.created_at.is_some());
        assert_eq!(store.commitment_count(), 2);
    }

    #[tokio::test]
    async fn test_attach_reminder_to_missing_row() {
        let store = MemoryStore::new();
        let contact = ReminderContact::new("Ari", "a@b.com").unwrap();

        let err = store.attach_reminder(99, &contact).await.unwrap_err();
        assert!(matches!(err, ChesedError::NotFound(_)));
    }
}
