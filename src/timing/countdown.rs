//! Cancellable repeating countdown.
//!
//! `Countdown` fires a tick every `interval_ms`, decrementing a remaining
//! count. The tick that reaches zero is followed by exactly one `Expired`
//! event, after which the countdown stops itself.
//!
//! ```
//! use memory_match::timing::{Countdown, CountdownEvent};
//!
//! let mut countdown = Countdown::new();
//! countdown.start(1000, 2);
//!
//! let mut events = Vec::new();
//! countdown.advance(2500, |event| events.push(event));
//!
//! assert_eq!(
//!     events,
//!     vec![
//!         CountdownEvent::Tick { remaining: 1 },
//!         CountdownEvent::Tick { remaining: 0 },
//!         CountdownEvent::Expired,
//!     ]
//! );
//! assert!(!countdown.is_running());
//! ```

use serde::{Deserialize, Serialize};

/// Event emitted by a running countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownEvent {
    /// One interval elapsed; `remaining` is the count after decrementing.
    Tick { remaining: u32 },
    /// The count reached zero. Emitted once per run.
    Expired,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    interval_ms: u64,
    remaining: u32,
    /// Time accumulated toward the next tick.
    elapsed_ms: u64,
    running: bool,
}

impl Countdown {
    /// A stopped countdown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the countdown, replacing any run already in progress.
    ///
    /// An `initial` of zero is already expired: the countdown stays stopped.
    pub fn start(&mut self, interval_ms: u64, initial: u32) {
        let interval_ms = interval_ms.max(1);
        if self.running {
            log::debug!("Countdown restarted with {} ticks left", self.remaining);
        }
        *self = Self {
            interval_ms,
            remaining: initial,
            elapsed_ms: 0,
            running: initial > 0,
        };
    }

    /// Stop the countdown. Returns whether it was running.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Milliseconds until the next tick, `None` while stopped.
    #[must_use]
    pub fn time_until_tick(&self) -> Option<u64> {
        self.running.then(|| self.interval_ms - self.elapsed_ms)
    }

    /// Let `elapsed_ms` pass, reporting every tick and the expiry in order.
    pub fn advance(&mut self, elapsed_ms: u64, mut on_event: impl FnMut(CountdownEvent)) {
        if !self.running {
            return;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        while self.running && self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            self.remaining = self.remaining.saturating_sub(1);
            on_event(CountdownEvent::Tick {
                remaining: self.remaining,
            });

            if self.remaining == 0 {
                self.running = false;
                self.elapsed_ms = 0;
                on_event(CountdownEvent::Expired);
            }
        }
    }
}
