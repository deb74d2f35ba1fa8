//! Core engine types: card identity, RNG, configuration, actions, state.
//!
//! These are the building blocks the card model and the state machine are
//! assembled from.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, DEFAULT_CATALOG};
pub use entity::{CardUid, UidAllocator};
pub use error::ConfigError;
pub use rng::{GameRng, GameRngState};
pub use state::{GameOutcome, Generation, Phase, Selection, Snapshot};
pub(crate) use state::SessionState;
