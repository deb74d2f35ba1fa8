//! Seeded shuffle source.
//!
//! One `GameRng` lives for the whole engine. Every `start_game` takes a fresh
//! per-session stream from it with [`GameRng::fork`], so the deck of session
//! *n* depends only on the seed and *n*, never on how much randomness earlier
//! sessions consumed.
//!
//! ```
//! use memory_match::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut deck_a = [1, 2, 3, 4, 5, 6];
//! let mut deck_b = deck_a;
//! a.fork().shuffle(&mut deck_a);
//! b.fork().shuffle(&mut deck_b);
//!
//! assert_eq!(deck_a, deck_b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Golden-ratio increment spreading session seeds apart.
const SESSION_SEED_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 generator that remembers its seed and how many sessions it has
/// handed out.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    sessions: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            sessions: 0,
        }
    }

    /// Seed from the thread RNG. The drawn seed is kept for `state()`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of session streams handed out so far.
    #[must_use]
    pub fn sessions(&self) -> u64 {
        self.sessions
    }

    /// Stream for the next session.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.sessions += 1;
        Self::new(self.seed.wrapping_add(self.sessions.wrapping_mul(SESSION_SEED_STEP)))
    }

    /// Uniform in-place shuffle; every permutation is equally likely.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    /// Capture enough to rebuild this generator exactly.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            sessions: self.sessions,
        }
    }

    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.inner.set_word_pos(state.word_pos);
        rng.sessions = state.sessions;
        rng
    }
}

/// Saved `GameRng`, independent of how much output was drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 stream position.
    pub word_pos: u128,
    /// Sessions dealt before the capture.
    pub sessions: u64,
}
