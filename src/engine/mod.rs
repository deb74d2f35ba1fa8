//! The game engine: state machine, transition results, render callback and
//! the real-time driver.
//!
//! The engine is the only thing that mutates game state. The presentation
//! adapter requests transitions (`start_game`, `flip_card`, `restart`) and
//! receives a `Snapshot` through its `Observer` after each applied one.

mod driver;
mod game;
mod observer;
mod transition;

pub use driver::{Clock, ManualClock, RealtimeDriver, SystemClock};
pub use game::{MemoryGame, HISTORY_LIMIT};
pub use observer::Observer;
pub use transition::{IgnoreReason, Transition};
