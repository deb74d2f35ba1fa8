//! Session state and the read-only snapshots handed to the adapter.
//!
//! ## SessionState
//!
//! The authoritative, engine-owned state of one game session: the deck, the
//! selection buffer, score, match count, remaining time and phase. It is
//! replaced wholesale on every `start_game`.
//!
//! ## Snapshot
//!
//! An immutable copy of the session taken after every applied transition.
//! The deck is an `im::Vector`, so taking a snapshot is O(1).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Deck;

/// Coarse game phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No session running. Initial phase, and the phase after `restart`.
    #[default]
    NotStarted,
    /// Cards are shown face-up for memorizing; flips are rejected.
    Revealing,
    /// Player may flip cards.
    Playing,
    /// Session finished by completion or timeout.
    GameOver,
}

impl Phase {
    /// True while the countdown should be running.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Revealing | Self::Playing)
    }

    /// True where `start_game` is accepted.
    #[must_use]
    pub const fn can_start(self) -> bool {
        matches!(self, Self::NotStarted | Self::GameOver)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::NotStarted => "not started",
            Self::Revealing => "revealing",
            Self::Playing => "playing",
            Self::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// Why a session reached `GameOver`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Every pair was matched.
    Completed,
    /// The countdown ran out first.
    TimedOut,
}

/// Session generation counter.
///
/// Bumped on every `start_game`. Deferred tasks carry the generation they were
/// scheduled in and are dropped if it no longer matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gen {}", self.0)
    }
}

/// Indices of the revealed-but-unresolved cards. Never more than two.
pub type Selection = SmallVec<[usize; 2]>;

/// Engine-owned state of one session.
#[derive(Clone, Debug, Default)]
pub(crate) struct SessionState {
    pub(crate) generation: Generation,
    pub(crate) phase: Phase,
    pub(crate) cards: Deck,
    pub(crate) selection: Selection,
    pub(crate) score: u32,
    pub(crate) matched_count: usize,
    pub(crate) time_remaining: u32,
    pub(crate) outcome: Option<GameOutcome>,
}

impl SessionState {
    /// Fresh session state for a newly dealt deck.
    pub(crate) fn fresh(generation: Generation, cards: Deck, time_limit: u32) -> Self {
        Self {
            generation,
            phase: Phase::Revealing,
            cards,
            selection: Selection::new(),
            score: 0,
            matched_count: 0,
            time_remaining: time_limit,
            outcome: None,
        }
    }

    /// True once every card of a dealt deck is matched.
    pub(crate) fn is_complete(&self) -> bool {
        !self.cards.is_empty() && self.matched_count == self.cards.len()
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            generation: self.generation,
            phase: self.phase,
            cards: self.cards.clone(),
            selection: self.selection.clone(),
            score: self.score,
            matched_count: self.matched_count,
            time_remaining: self.time_remaining,
            outcome: self.outcome,
        }
    }
}

/// Read-only view of a session, delivered to the adapter after every
/// applied transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Session this snapshot belongs to.
    pub generation: Generation,
    pub phase: Phase,
    pub cards: Deck,
    /// Deck indices of the pending, unresolved cards.
    pub selection: Selection,
    pub score: u32,
    pub matched_count: usize,
    /// Seconds left on the countdown.
    pub time_remaining: u32,
    /// Set once the session reaches `GameOver`. Like the score and cards it
    /// survives `restart` and is cleared by the next `start_game`.
    pub outcome: Option<GameOutcome>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_predicates() {
        assert!(Phase::NotStarted.can_start());
        assert!(Phase::GameOver.can_start());
        assert!(!Phase::Revealing.can_start());
        assert!(!Phase::Playing.can_start());

        assert!(Phase::Revealing.is_active());
        assert!(Phase::Playing.is_active());
        assert!(!Phase::GameOver.is_active());
    }

    #[test]
    fn test_phase_default() {
        assert_eq!(Phase::default(), Phase::NotStarted);
        assert_eq!(Phase::GameOver.to_string(), "game over");
    }

    #[test]
    fn test_generation_next() {
        let g = Generation::default();
        assert_eq!(g.next(), Generation(1));
        assert_eq!(g.next().next().to_string(), "gen 2");
    }

    #[test]
    fn test_default_session_snapshot() {
        let session = SessionState::default();
        assert!(!session.is_complete());

        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, Phase::NotStarted);
        assert!(snapshot.cards.is_empty());
        assert_eq!(snapshot.outcome, None);
    }
}
