//! Hosted data store client.
//!
//! The widget talks to a backend-as-a-service through the [`IdeaStore`]
//! trait. [`RestStore`] speaks the backend's PostgREST surface; [`MemoryStore`]
//! keeps the same semantics in process for offline runs and tests.
//!
//! Tables:
//! - `Counter`: a single row `{count, last_updated}`
//! - `chesed_commitments`: one row per commitment, id generated by the store
//! - `idea_components`: row 1 holds the word lists written by the fetch function

use std::sync::Arc;

use async_trait::async_trait;

use crate::commitment::{Commitment, NewCommitment, ReminderContact};
use crate::counter::Counter;
use crate::error::ChesedResult;
use crate::sheets::IdeaComponents;

mod memory;
mod rest;

pub use memory::MemoryStore;
pub use rest::RestStore;

/// Table holding the shared generation counter.
pub const COUNTER_TABLE: &str = "Counter";
/// Table holding commitments.
pub const COMMITMENTS_TABLE: &str = "chesed_commitments";
/// Table holding the word lists refreshed from the spreadsheet.
pub const IDEA_COMPONENTS_TABLE: &str = "idea_components";
/// The single `idea_components` row that is overwritten on refresh.
pub const IDEA_COMPONENTS_ROW_ID: i64 = 1;

/// Operations the widget needs from the hosted store.
#[async_trait]
pub trait IdeaStore: Send + Sync {
    /// Read the counter row. A missing row reads as zero.
    async fn fetch_counter(&self) -> ChesedResult<Counter>;

    /// Overwrite the counter with `next` only if the stored count is still
    /// `expected`. Returns `false` (and changes nothing) when it is not.
    async fn update_counter_if(&self, expected: i64, next: &Counter) -> ChesedResult<bool>;

    /// Insert a commitment and return the stored row with its generated id.
    async fn insert_commitment(&self, new: &NewCommitment) -> ChesedResult<Commitment>;

    /// Attach reminder contact details to an existing commitment.
    async fn attach_reminder(&self, id: i64, contact: &ReminderContact) -> ChesedResult<Commitment>;

    /// Look up a commitment by id.
    async fn get_commitment(&self, id: i64) -> ChesedResult<Option<Commitment>>;

    /// Read the stored word lists, if the fetch function has written any.
    async fn fetch_idea_components(&self) -> ChesedResult<Option<IdeaComponents>>;

    /// Overwrite the stored word lists (row [`IDEA_COMPONENTS_ROW_ID`]).
    async fn replace_idea_components(&self, components: &IdeaComponents) -> ChesedResult<()>;
}

/// Store handle shared between UI components and background tasks.
pub type SharedStore = Arc<dyn IdeaStore>;
