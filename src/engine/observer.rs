//! Render callback supplied by the presentation adapter.
//!
//! The engine calls the observer with a fresh `Snapshot` after every applied
//! transition. Any `FnMut(&Snapshot)` closure is an observer; the engine
//! only accepts `Send` ones so it can itself move between threads.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use memory_match::core::{GameConfig, Phase};
//! use memory_match::engine::MemoryGame;
//!
//! let phases = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&phases);
//!
//! let mut game = MemoryGame::new(GameConfig::default().with_seed(1)).unwrap();
//! game.set_observer(move |snapshot: &memory_match::core::Snapshot| {
//!     sink.lock().unwrap().push(snapshot.phase);
//! });
//!
//! game.start_game();
//! assert_eq!(*phases.lock().unwrap(), vec![Phase::Revealing]);
//! ```

use crate::core::Snapshot;

/// Receives a snapshot after every applied transition.
pub trait Observer {
    fn on_transition(&mut self, snapshot: &Snapshot);
}

impl<F> Observer for F
where
    F: FnMut(&Snapshot),
{
    fn on_transition(&mut self, snapshot: &Snapshot) {
        self(snapshot);
    }
}

