//! Commitments: ideas a user has said they will act on.
//!
//! The recorder saves the idea as soon as the commitment dialog opens and
//! treats the optional reminder step as an update of that same row.
//!
//! [`CommitmentRecorder`] never awaits. Each step is split in two: a `begin`
//! half that updates the dialog state and describes the store write, and a
//! settle half that takes the write's outcome. The dialog runs the write in
//! between, so the state can live in a UI signal that is never held across
//! an await.
//!
//! ```ignore
//! let new = recorder.open(idea);
//! let saved = store.insert_commitment(&new).await;
//! recorder.recorded(saved.as_ref().ok());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChesedError, ChesedResult};
use crate::idea::Idea;
use crate::store::IdeaStore;

/// Row written when a commitment is first recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCommitment {
    pub action: String,
    pub recipient: String,
    pub time: String,
    pub full_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

impl NewCommitment {
    pub fn from_idea(idea: &Idea) -> Self {
        Self {
            action: idea.action.clone(),
            recipient: idea.recipient.clone(),
            time: idea.time.clone(),
            full_text: idea.full_text(),
            user_name: None,
            user_email: None,
        }
    }

    pub fn with_contact(mut self, contact: &ReminderContact) -> Self {
        self.user_name = Some(contact.name.clone());
        self.user_email = Some(contact.email.clone());
        self
    }
}

/// Stored commitment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    pub id: i64,
    pub action: String,
    pub recipient: String,
    pub time: String,
    #[serde(default)]
    pub full_text: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Contact details for a reminder email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderContact {
    pub name: String,
    pub email: String,
}

impl ReminderContact {
    /// Both fields are required; surrounding whitespace is dropped.
    pub fn new(name: &str, email: &str) -> ChesedResult<Self> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(ChesedError::InvalidOperation(
                "a reminder needs both a name and an email".to_string(),
            ));
        }
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}

/// The store write a reminder submission turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderWrite {
    /// Update the row created when the dialog opened
    Update { id: i64, contact: ReminderContact },
    /// The eager insert failed; insert a row that already carries the contact
    Insert(NewCommitment),
}

impl ReminderWrite {
    pub async fn execute(&self, store: &dyn IdeaStore) -> ChesedResult<Commitment> {
        match self {
            ReminderWrite::Update { id, contact } => store.attach_reminder(*id, contact).await,
            ReminderWrite::Insert(new) => {
                tracing::warn!("No commitment recorded on open; inserting one with the reminder");
                store.insert_commitment(new).await
            }
        }
    }
}

/// Which pane of the commitment dialog is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecorderView {
    /// Copy / share buttons and the reminder choice
    #[default]
    List,
    /// Name and email inputs
    ReminderForm,
}

/// State behind the commitment dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitmentRecorder {
    pub view: RecorderView,
    pub name: String,
    pub email: String,
    /// A store write is in flight
    pub submitting: bool,
    idea: Idea,
    record_id: Option<i64>,
}

impl CommitmentRecorder {
    /// Id of the row created for this idea, once an insert has succeeded.
    pub fn record_id(&self) -> Option<i64> {
        self.record_id
    }

    pub fn idea(&self) -> &Idea {
        &self.idea
    }

    /// Start over for `idea` and return the row to insert right away.
    ///
    /// The recorder stays busy until [`recorded`](Self::recorded) settles the insert.
    pub fn open(&mut self, idea: Idea) -> NewCommitment {
        *self = Self {
            idea,
            submitting: true,
            ..Self::default()
        };
        NewCommitment::from_idea(&self.idea)
    }

    /// Settle an insert started by [`open`](Self::open) or [`begin_dismiss`](Self::begin_dismiss).
    ///
    /// `None` means the insert failed; a later step inserts again.
    pub fn recorded(&mut self, saved: Option<&Commitment>) {
        self.submitting = false;
        if let Some(saved) = saved {
            self.record_id = Some(saved.id);
        }
    }

    pub fn show_reminder_form(&mut self) {
        self.view = RecorderView::ReminderForm;
    }

    pub fn back(&mut self) {
        self.view = RecorderView::List;
    }

    /// Whether the "remind me" button should be enabled.
    pub fn can_submit_reminder(&self) -> bool {
        !self.submitting && !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    /// Validate the form and describe the write it needs. Marks the recorder busy.
    pub fn begin_reminder(&mut self) -> ChesedResult<ReminderWrite> {
        if self.submitting {
            return Err(ChesedError::InvalidOperation("a save is already in progress".to_string()));
        }
        let contact = ReminderContact::new(&self.name, &self.email)?;
        self.submitting = true;
        Ok(match self.record_id {
            Some(id) => ReminderWrite::Update { id, contact },
            None => ReminderWrite::Insert(NewCommitment::from_idea(&self.idea).with_contact(&contact)),
        })
    }

    /// Clear the busy flag; on success return to the list view.
    pub fn finish_reminder(&mut self, saved: Option<&Commitment>) {
        self.recorded(saved);
        if saved.is_some() {
            self.view = RecorderView::List;
        }
    }

    /// "No reminder needed": drop the form and return the row still to be
    /// inserted, if the eager insert did not land.
    ///
    /// `Some` marks the recorder busy until [`recorded`](Self::recorded).
    pub fn begin_dismiss(&mut self) -> Option<NewCommitment> {
        self.view = RecorderView::List;
        self.name.clear();
        self.email.clear();
        if self.record_id.is_some() {
            return None;
        }
        self.submitting = true;
        Some(NewCommitment::from_idea(&self.idea))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn idea() -> Idea {
        Idea::new("Bring flowers", "to a nursing home", "this Friday")
    }

    #[test]
    fn test_new_commitment_skips_missing_contact() {
        let json = serde_json::to_value(NewCommitment::from_idea(&idea())).unwrap();
        assert_eq!(json["full_text"], "Bring flowers to a nursing home this Friday");
        assert!(json.get("user_name").is_none());
        assert!(json.get("user_email").is_none());
    }

    #[test]
    fn test_reminder_contact_requires_both_fields() {
        assert!(ReminderContact::new("Ari", "  ").is_err());
        assert!(ReminderContact::new("", "a@b.com").is_err());
        let contact = ReminderContact::new(" Ari ", "a@b.com").unwrap();
        assert_eq!(contact.name, "Ari");
    }

    #[test]
    fn test_view_transitions() {
        let mut recorder = CommitmentRecorder::default();
        assert_eq!(recorder.view, RecorderView::List);

        recorder.show_reminder_form();
        assert_eq!(recorder.view, RecorderView::ReminderForm);
        assert!(!recorder.can_submit_reminder());

        recorder.name = "Ari".into();
        recorder.email = "a@b.com".into();
        assert!(recorder.can_submit_reminder());

        recorder.back();
        assert_eq!(recorder.view, RecorderView::List);
    }

    #[test]
    fn test_open_is_busy_until_recorded() {
        let mut recorder = CommitmentRecorder::default();
        recorder.name = "stale".into();

        let new = recorder.open(idea());

        assert_eq!(new.full_text, "Bring flowers to a nursing home this Friday");
        assert!(recorder.submitting);
        assert!(recorder.name.is_empty());
        assert_eq!(recorder.record_id(), None);
    }

    #[tokio::test]
    async fn test_recorded_remembers_the_row() {
        let store = MemoryStore::new();
        let mut recorder = CommitmentRecorder::default();

        let new = recorder.open(idea());
        let saved = store.insert_commitment(&new).await.unwrap();
        recorder.recorded(Some(&saved));

        assert!(!recorder.submitting);
        assert_eq!(recorder.record_id(), Some(saved.id));
    }

    #[test]
    fn test_failed_insert_leaves_no_record() {
        let mut recorder = CommitmentRecorder::default();
        recorder.open(idea());
        recorder.recorded(None);

        assert!(!recorder.submitting);
        assert_eq!(recorder.record_id(), None);
    }

    #[test]
    fn test_reminder_refused_while_busy() {
        let mut recorder = CommitmentRecorder::default();
        recorder.open(idea());
        recorder.name = "Ari".into();
        recorder.email = "a@b.com".into();

        assert!(recorder.begin_reminder().is_err());
    }
}
