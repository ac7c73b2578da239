//! The Chesed Machine Core Library
//!
//! Everything behind the idea-generator widget that is not rendering.
//!
//! ## Overview
//!
//! The widget composes a three-part chesed idea ("do what / for whom / when")
//! from word lists published as a spreadsheet, lets the user re-roll any
//! single part, and records the ideas people commit to in a hosted data
//! store. A shared counter tracks how many ideas have been generated.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chesed_core::{IdeaState, MemoryStore, Slot, WordListLoader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let lists = WordListLoader::new(chesed_core::config::DEFAULT_WORD_LIST_URL)
//!         .load()
//!         .await?;
//!
//!     let mut state = IdeaState::default();
//!     state.regenerate_all(&lists, &mut rand::rng());
//!     state.regenerate(Slot::Time, &lists, &mut rand::rng());
//!
//!     println!("{}", state.idea.full_text());
//!     Ok(())
//! }
//! ```

pub mod commitment;
pub mod config;
pub mod counter;
pub mod error;
pub mod idea;
pub mod share;
pub mod sheets;
pub mod storage;
pub mod store;
pub mod timestamp;
pub mod welcome;
pub mod words;

// Re-exports
pub use commitment::{
    Commitment, CommitmentRecorder, NewCommitment, RecorderView, ReminderContact, ReminderWrite,
};
pub use config::{AppConfig, WordSource};
pub use counter::{Counter, IncrementOutcome};
pub use error::{ChesedError, ChesedResult};
pub use idea::{Idea, IdeaState, PendingFlip, Slot, FLIP_DURATION, FLIP_MIDPOINT};
pub use share::SharePlatform;
pub use sheets::{refresh_idea_components, IdeaComponents, SheetsClient, SheetsConfig};
pub use storage::Storage;
pub use store::{IdeaStore, MemoryStore, RestStore, SharedStore};
pub use welcome::WelcomeGate;
pub use words::{load_word_lists, parse_word_lists, WordListLoader, WordLists, PLACEHOLDER};
