//! A single card on the table.
//!
//! `Card` pairs immutable identity (`id`, `name`) with presentation state
//! (`is_flipped`, `is_matched`). The state fields are private so the
//! invariant `is_matched ⇒ is_flipped` can only be changed through methods
//! that preserve it.

use serde::{Deserialize, Serialize};

use crate::core::CardUid;

/// A dealt card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardUid,
    name: String,
    is_flipped: bool,
    is_matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardUid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_flipped: false,
            is_matched: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardUid {
        self.id
    }

    /// Face name; the catalog key two cards share.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.is_matched
    }

    /// True if both cards show the same face.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.name == other.name
    }

    pub(crate) fn flip_up(&mut self) {
        self.is_flipped = true;
    }

    /// Turn the card face-down. Matched cards stay face-up.
    pub(crate) fn flip_down(&mut self) {
        if !self.is_matched {
            self.is_flipped = false;
        }
    }

    pub(crate) fn mark_matched(&mut self) {
        self.is_flipped = true;
        self.is_matched = true;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
