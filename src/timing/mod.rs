//! Time sources for the engine.
//!
//! The engine runs on a virtual millisecond clock that the host advances.
//! Two kinds of timed behavior exist:
//!
//! - **Countdown**: a repeating one-second tick that decrements the session's
//!   remaining time and signals expiry.
//! - **Deferred tasks**: one-shot callbacks (hide the preview, resolve a
//!   selection) tagged with the session generation they belong to.
//!
//! One "time unit" of game rules is one second.

mod countdown;
mod scheduler;

pub use countdown::{Countdown, CountdownEvent};
pub use scheduler::{Deferred, ScheduledTask, Scheduler};

/// Countdown tick interval.
pub const TICK_INTERVAL_MS: u64 = 1_000;

/// Session length in countdown ticks (seconds).
pub const TIME_LIMIT_SECS: u32 = 60;

/// How long the whole deck stays face-up after `start_game`.
pub const PREVIEW_DELAY_MS: u64 = 3_000;

/// How long a flipped pair stays visible before it is resolved.
pub const RESOLVE_DELAY_MS: u64 = 1_000;

/// Score awarded per matched pair.
pub const MATCH_REWARD: u32 = 10;
