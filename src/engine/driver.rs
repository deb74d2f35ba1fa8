//! Drives the engine's virtual clock from a real clock.
//!
//! The engine never reads wall time. A host loop owns a `RealtimeDriver`,
//! forwards player input to the game, and calls `pump` from its event loop;
//! `pump` advances the engine by however much time the clock says has passed.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use memory_match::core::GameConfig;
//! use memory_match::engine::{MemoryGame, RealtimeDriver};
//!
//! let game = MemoryGame::new(GameConfig::default()).unwrap();
//! let mut driver = RealtimeDriver::system(game);
//! driver.game_mut().start_game();
//!
//! while driver.game().outcome().is_none() {
//!     let wait = driver.game().time_until_next_event().unwrap_or(100).min(100);
//!     std::thread::sleep(Duration::from_millis(wait));
//!     driver.pump();
//! }
//! ```

use std::time::Instant;

use super::game::MemoryGame;

/// Monotonic millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock backed by `Instant`.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Hand-set clock for tests and replays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManualClock {
    now_ms: u64,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }

    pub fn advance(&mut self, elapsed_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }
}

/// Owns a game and feeds it elapsed time from a `Clock`.
#[derive(Debug)]
pub struct RealtimeDriver<C: Clock = SystemClock> {
    game: MemoryGame,
    clock: C,
    last_ms: u64,
}

impl RealtimeDriver<SystemClock> {
    /// Drive `game` from the wall clock, starting now.
    #[must_use]
    pub fn system(game: MemoryGame) -> Self {
        Self::new(game, SystemClock::new())
    }
}

impl<C: Clock> RealtimeDriver<C> {
    #[must_use]
    pub fn new(game: MemoryGame, clock: C) -> Self {
        let last_ms = clock.now_ms();
        Self {
            game,
            clock,
            last_ms,
        }
    }

    #[must_use]
    pub fn game(&self) -> &MemoryGame {
        &self.game
    }

    /// Mutable access for forwarding adapter calls.
    pub fn game_mut(&mut self) -> &mut MemoryGame {
        &mut self.game
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Advance the game by the time elapsed since the last pump.
    ///
    /// Returns the elapsed milliseconds. A clock that moved backwards
    /// counts as no time passing.
    pub fn pump(&mut self) -> u64 {
        let now = self.clock.now_ms();
        let elapsed = now.saturating_sub(self.last_ms);
        self.last_ms = self.last_ms.max(now);
        if elapsed > 0 {
            self.game.advance(elapsed);
        }
        elapsed
    }

    #[must_use]
    pub fn into_game(self) -> MemoryGame {
        self.game
    }
}
