//! Actions and the engine's action log.
//!
//! An `Action` is anything that can drive a transition: an adapter call
//! (start, flip, restart), a deferred task firing, or a countdown event.
//! The engine records each one together with its result.

use serde::{Deserialize, Serialize};

use super::state::Generation;
use crate::engine::Transition;

/// Something that drives the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Adapter: start a new session.
    StartGame,
    /// Adapter: flip the card at a deck index.
    FlipCard { index: usize },
    /// Adapter: leave `GameOver` for `NotStarted`.
    Restart,
    /// Deferred: the memorize window ended, hide every card.
    HidePreview,
    /// Deferred (or direct): compare the two selected cards.
    ResolveSelection,
    /// Countdown: one interval elapsed.
    Tick,
    /// Countdown: time ran out.
    TimerExpired,
}

impl Action {
    /// True for calls that originate from the presentation adapter.
    #[must_use]
    pub const fn is_adapter_call(self) -> bool {
        matches!(self, Self::StartGame | Self::FlipCard { .. } | Self::Restart)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StartGame => f.write_str("start"),
            Self::FlipCard { index } => write!(f, "flip {index}"),
            Self::Restart => f.write_str("restart"),
            Self::HidePreview => f.write_str("hide preview"),
            Self::ResolveSelection => f.write_str("resolve"),
            Self::Tick => f.write_str("tick"),
            Self::TimerExpired => f.write_str("expire"),
        }
    }
}

/// Log entry for one action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Engine clock (ms) when the action was handled.
    pub at_ms: u64,
    /// Generation the action was attributed to. For deferred tasks this is
    /// the generation they were scheduled in.
    pub generation: Generation,
    pub action: Action,
    pub result: Transition,
}
