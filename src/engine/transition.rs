//! Result of an engine operation.
//!
//! Illegal calls are not errors. They leave state untouched and report
//! `Ignored` with the reason, so stray taps are harmless but still visible
//! to tests.

use serde::{Deserialize, Serialize};

use crate::core::Phase;

/// Outcome of one engine operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// State changed.
    Applied,
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl Transition {
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    #[must_use]
    pub const fn is_ignored(self) -> bool {
        matches!(self, Self::Ignored(_))
    }

    /// The reason, if ignored.
    #[must_use]
    pub const fn reason(self) -> Option<IgnoreReason> {
        match self {
            Self::Applied => None,
            Self::Ignored(reason) => Some(reason),
        }
    }
}

/// Why an operation was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Not valid in the current phase.
    WrongPhase(Phase),
    /// The target card is already face-up.
    CardFaceUp,
    /// The target card is already matched.
    CardMatched,
    /// Two cards are already waiting for resolution.
    SelectionFull,
    /// The flip index is past the end of the deck.
    OutOfBounds,
    /// The identity collaborator reported no authenticated user.
    NotAuthenticated,
    /// A deferred task from an earlier session fired.
    StaleGeneration,
    /// Resolution requested without two selected cards.
    NothingPending,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongPhase(phase) => write!(f, "not allowed while {phase}"),
            Self::CardFaceUp => f.write_str("card already face-up"),
            Self::CardMatched => f.write_str("card already matched"),
            Self::SelectionFull => f.write_str("two cards already pending"),
            Self::OutOfBounds => f.write_str("no card at that index"),
            Self::NotAuthenticated => f.write_str("not authenticated"),
            Self::StaleGeneration => f.write_str("task from a previous session"),
            Self::NothingPending => f.write_str("no pair to resolve"),
        }
    }
}
