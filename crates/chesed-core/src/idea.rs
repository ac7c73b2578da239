//! Idea triples and the per-slot flip state the cards render from.
//!
//! A regeneration happens in three steps so the new value can hide behind
//! the card's rotation:
//!
//! 1. [`IdeaState::begin_flip`] marks the slots animating and picks new values
//! 2. [`IdeaState::apply`] shows them at [`FLIP_MIDPOINT`]
//! 3. [`IdeaState::finish`] clears the animating flags at [`FLIP_DURATION`]
//!
//! If several flips overlap, whichever `apply` runs last wins its slots, and
//! a slot keeps animating until the last of its flips finishes.

use std::fmt;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::words::WordLists;

/// Full length of the card flip animation.
pub const FLIP_DURATION: Duration = Duration::from_millis(800);

/// Point in the flip where the card is edge-on and the text can change.
pub const FLIP_MIDPOINT: Duration = Duration::from_millis(400);

/// One independently regenerable part of an idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// "Do what"
    Action,
    /// "For whom"
    Recipient,
    /// "When"
    Time,
}

impl Slot {
    /// All slots in display order.
    pub const ALL: [Slot; 3] = [Slot::Action, Slot::Recipient, Slot::Time];

    /// Card title for this slot.
    pub fn title(&self) -> &'static str {
        match self {
            Slot::Action => "Do what:",
            Slot::Recipient => "For whom:",
            Slot::Time => "When:",
        }
    }

    fn index(&self) -> usize {
        match self {
            Slot::Action => 0,
            Slot::Recipient => 1,
            Slot::Time => 2,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::Action => "action",
            Slot::Recipient => "recipient",
            Slot::Time => "time",
        };
        f.write_str(name)
    }
}

/// The (action, recipient, time) combination shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub action: String,
    pub recipient: String,
    pub time: String,
}

impl Idea {
    pub fn new(action: impl Into<String>, recipient: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            recipient: recipient.into(),
            time: time.into(),
        }
    }

    pub fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::Action => &self.action,
            Slot::Recipient => &self.recipient,
            Slot::Time => &self.time,
        }
    }

    pub fn set(&mut self, slot: Slot, value: String) {
        match slot {
            Slot::Action => self.action = value,
            Slot::Recipient => self.recipient = value,
            Slot::Time => self.time = value,
        }
    }

    /// The three values joined by single spaces, in slot order.
    pub fn full_text(&self) -> String {
        format!("{} {} {}", self.action, self.recipient, self.time)
    }
}

/// Replacement values waiting for the middle of a flip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFlip {
    values: Vec<(Slot, String)>,
}

impl PendingFlip {
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.values.iter().map(|(slot, _)| *slot)
    }

    pub fn value(&self, slot: Slot) -> Option<&str> {
        self.values
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, v)| v.as_str())
    }
}

/// Currently displayed idea plus the per-slot animating state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaState {
    pub idea: Idea,
    /// Flips in progress per slot
    flipping: [u8; 3],
}

impl IdeaState {
    pub fn is_flipping(&self, slot: Slot) -> bool {
        self.flipping[slot.index()] > 0
    }

    /// Replace one slot immediately. The other two are untouched.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, slot: Slot, lists: &WordLists, rng: &mut R) -> &str {
        let value = lists.pick(slot, rng);
        self.idea.set(slot, value);
        self.idea.get(slot)
    }

    /// Replace all three slots immediately.
    pub fn regenerate_all<R: Rng + ?Sized>(&mut self, lists: &WordLists, rng: &mut R) {
        for slot in Slot::ALL {
            self.regenerate(slot, lists, rng);
        }
    }

    /// Start a flip on `slots`: mark them animating and pick hidden replacements.
    pub fn begin_flip<R: Rng + ?Sized>(&mut self, slots: &[Slot], lists: &WordLists, rng: &mut R) -> PendingFlip {
        let values = slots
            .iter()
            .map(|&slot| {
                let count = &mut self.flipping[slot.index()];
                *count = count.saturating_add(1);
                (slot, lists.pick(slot, rng))
            })
            .collect();
        PendingFlip { values }
    }

    /// Reveal the values picked by [`begin_flip`](Self::begin_flip).
    pub fn apply(&mut self, pending: &PendingFlip) {
        for (slot, value) in &pending.values {
            self.idea.set(*slot, value.clone());
        }
    }

    /// End this flip's animation; a slot stops animating once no flip on it remains.
    pub fn finish(&mut self, pending: &PendingFlip) {
        for slot in pending.slots() {
            let count = &mut self.flipping[slot.index()];
            *count = count.saturating_sub(1);
        }
    }
}
