//! # memory-match
//!
//! A timed, single-player memory-matching card game engine.
//!
//! The player flips face-down cards two at a time. Matching faces stay up and
//! score; mismatches turn back over. The session ends when every pair is
//! matched or the countdown runs out.
//!
//! ## Design Principles
//!
//! 1. **Engine owns state**: The deck, selection and counters live inside
//!    `MemoryGame`. Adapters read immutable `Snapshot`s and request
//!    transitions; they never touch cards directly.
//!
//! 2. **Tolerant input**: Illegal calls are no-ops reported as
//!    `Transition::Ignored`, never errors.
//!
//! 3. **Virtual time**: Delays and the countdown run on a clock the host
//!    advances, so every scenario is deterministic under test. Deferred work
//!    is tagged with the session generation and dropped when stale.
//!
//! ## Modules
//!
//! - `core`: Card identity, RNG, configuration, actions, session state
//! - `cards`: Card model, catalog, deck building
//! - `timing`: Countdown, deferred-task scheduler, timing constants
//! - `engine`: The state machine, render callback, real-time driver
//!
//! ## Example
//!
//! ```
//! use memory_match::core::{GameConfig, Phase};
//! use memory_match::engine::MemoryGame;
//! use memory_match::timing::{PREVIEW_DELAY_MS, RESOLVE_DELAY_MS};
//!
//! let mut game = MemoryGame::new(GameConfig::new().with_catalog(["bear", "fox"]).with_seed(7)).unwrap();
//! game.start_game();
//! game.advance(PREVIEW_DELAY_MS);
//!
//! let first = game.cards().position_of("bear", None).unwrap();
//! let second = game.cards().position_of("bear", Some(first)).unwrap();
//! game.flip_card(first);
//! game.flip_card(second);
//! game.advance(RESOLVE_DELAY_MS);
//!
//! assert_eq!(game.score(), 10);
//! assert_eq!(game.phase(), Phase::Playing);
//! ```

pub mod cards;
pub mod core;
pub mod engine;
pub mod timing;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, CardUid, ConfigError, GameConfig, GameOutcome, GameRng, GameRngState,
    Generation, Phase, Snapshot,
};

pub use crate::cards::{build_deck, Card, Catalog, Deck};

pub use crate::engine::{
    Clock, IgnoreReason, ManualClock, MemoryGame, Observer, RealtimeDriver, SystemClock, Transition,
};

pub use crate::timing::{Countdown, CountdownEvent};
