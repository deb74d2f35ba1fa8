//! The memory-match state machine.
//!
//! ```text
//! NotStarted ──start_game──▶ Revealing ──(3 s)──▶ Playing ──all matched──▶ GameOver
//!      ▲                         │                   │                        │
//!      │                         └──────timeout──────┴────────timeout────────▶│
//!      └─────────────────────────────────restart─────────────────────────────┘
//! ```
//!
//! `MemoryGame` owns the deck, the selection buffer and the counters. The
//! adapter only reads snapshots and requests transitions. Time is virtual:
//! the host calls [`MemoryGame::advance`] with elapsed milliseconds, which
//! fires countdown ticks and deferred tasks in chronological order. When a
//! deferred task and a tick fall due together, the task runs first.

use im::Vector;

use super::observer::Observer;
use super::transition::{IgnoreReason, Transition};
use crate::cards::{build_deck, Catalog, Deck};
use crate::core::error::Result;
use crate::core::{
    Action, ActionRecord, GameConfig, GameOutcome, GameRng, GameRngState, Generation, Phase,
    SessionState, Snapshot, UidAllocator,
};
use crate::timing::{
    Countdown, CountdownEvent, Deferred, ScheduledTask, Scheduler, MATCH_REWARD, PREVIEW_DELAY_MS,
    RESOLVE_DELAY_MS, TICK_INTERVAL_MS, TIME_LIMIT_SECS,
};

/// Most history entries kept per session.
pub const HISTORY_LIMIT: usize = 1024;

/// Single-player memory-match engine.
///
/// All operations take `&mut self`, so mutations are serialized by
/// construction. The engine is `Send` (observers must be too), so a
/// multi-threaded host can share it behind a `Mutex`.
pub struct MemoryGame {
    catalog: Catalog,
    rng: GameRng,
    uids: UidAllocator,
    session: SessionState,
    countdown: Countdown,
    scheduler: Scheduler,
    history: Vector<ActionRecord>,
    observer: Option<Box<dyn Observer + Send>>,
}

impl MemoryGame {
    /// Build an engine from configuration.
    ///
    /// Fails only if the catalog is invalid.
    pub fn new(config: GameConfig) -> Result<Self> {
        let catalog = Catalog::new(config.catalog)?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => {
                let rng = GameRng::from_entropy();
                log::info!("No seed configured, using {}", rng.seed());
                rng
            }
        };
        Ok(Self::with_catalog(catalog, rng))
    }

    /// Build an engine from an already validated catalog.
    #[must_use]
    pub fn with_catalog(catalog: Catalog, rng: GameRng) -> Self {
        Self {
            catalog,
            rng,
            uids: UidAllocator::new(),
            session: SessionState::default(),
            countdown: Countdown::new(),
            scheduler: Scheduler::new(),
            history: Vector::new(),
            observer: None,
        }
    }

    /// Install the render callback, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl Observer + Send + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Remove the render callback.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.session.score
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.session.matched_count
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.session.time_remaining
    }

    #[must_use]
    pub fn cards(&self) -> &Deck {
        &self.session.cards
    }

    /// Deck indices of the revealed-but-unresolved cards.
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.session.selection
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.session.generation
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.session.outcome
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Engine clock in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.countdown.is_running()
    }

    /// Deferred tasks still queued, including stale ones.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Milliseconds until the next tick or deferred task, `None` if idle.
    #[must_use]
    pub fn time_until_next_event(&self) -> Option<u64> {
        [self.scheduler.time_until_next(), self.countdown.time_until_tick()]
            .into_iter()
            .flatten()
            .min()
    }

    /// Actions handled since the current session started, with their results.
    ///
    /// Cleared on every applied start and capped at [`HISTORY_LIMIT`]
    /// entries; the oldest are dropped first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Read-only copy of the current session.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Capture the shuffle RNG so later sessions can be replayed.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Restore a captured shuffle RNG; the next `start_game` deals the deck
    /// it would have dealt at capture time.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    // === Adapter operations ===

    /// Start a session for an authenticated user.
    pub fn start_game(&mut self) -> Transition {
        self.start_session(true)
    }

    /// Start a session, gated by the identity collaborator's flag.
    ///
    /// Valid from `NotStarted` or `GameOver`. Deals a new deck face-up,
    /// starts the countdown and schedules the end of the memorize window.
    pub fn start_session(&mut self, authenticated: bool) -> Transition {
        let result = self.try_start(authenticated);
        self.finish(Action::StartGame, self.session.generation, result)
    }

    /// Flip the card at `index`.
    ///
    /// Ignored unless playing, the card is face-down and unmatched, and fewer
    /// than two cards are pending. The second flip schedules resolution.
    pub fn flip_card(&mut self, index: usize) -> Transition {
        let result = self.try_flip(index);
        self.finish(Action::FlipCard { index }, self.session.generation, result)
    }

    /// Leave `GameOver` for `NotStarted`. Score and cards stay as they were
    /// until the next `start_game`.
    pub fn restart(&mut self) -> Transition {
        let result = if self.session.phase == Phase::GameOver {
            self.session.phase = Phase::NotStarted;
            log::debug!("Restarted after {}", self.session.generation);
            Transition::Applied
        } else {
            Transition::Ignored(IgnoreReason::WrongPhase(self.session.phase))
        };
        self.finish(Action::Restart, self.session.generation, result)
    }

    /// End the session because time ran out.
    ///
    /// Called by the countdown; hosts driving their own timer may call it
    /// directly. Valid while revealing or playing. Cards and score are kept.
    pub fn on_timer_expire(&mut self) -> Transition {
        let result = if self.session.phase.is_active() {
            self.end_game(GameOutcome::TimedOut);
            Transition::Applied
        } else {
            Transition::Ignored(IgnoreReason::WrongPhase(self.session.phase))
        };
        self.finish(Action::TimerExpired, self.session.generation, result)
    }

    /// Let `elapsed_ms` of time pass, firing due tasks and countdown ticks.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let mut budget = elapsed_ms;
        loop {
            let step = match self.time_until_next_event() {
                Some(step) if step <= budget => step,
                _ => {
                    self.step_clock(budget);
                    return;
                }
            };
            budget -= step;

            self.scheduler.advance_clock(step);
            while let Some(task) = self.scheduler.pop_due() {
                self.run_deferred(task);
            }

            let mut events = smallvec::SmallVec::<[CountdownEvent; 2]>::new();
            self.countdown.advance(step, |event| events.push(event));
            for event in events {
                self.on_countdown(event);
            }
        }
    }

    // === Transitions ===

    fn try_start(&mut self, authenticated: bool) -> Transition {
        if !authenticated {
            return Transition::Ignored(IgnoreReason::NotAuthenticated);
        }
        if !self.session.phase.can_start() {
            return Transition::Ignored(IgnoreReason::WrongPhase(self.session.phase));
        }

        self.countdown.stop();

        let generation = self.session.generation.next();
        let mut session_rng = self.rng.fork();
        let mut cards = build_deck(&self.catalog, &mut session_rng, &mut self.uids);
        log::trace!("Dealt uids up to {}", self.uids.allocated());
        cards.flip_all_up();

        self.session = SessionState::fresh(generation, cards, TIME_LIMIT_SECS);
        self.history.clear();
        self.countdown.start(TICK_INTERVAL_MS, TIME_LIMIT_SECS);
        self.scheduler.schedule(PREVIEW_DELAY_MS, generation, Deferred::HidePreview);

        log::info!(
            "Started {} with {} cards, {}s on the clock",
            generation,
            self.session.cards.len(),
            TIME_LIMIT_SECS
        );
        Transition::Applied
    }

    fn try_flip(&mut self, index: usize) -> Transition {
        let session = &mut self.session;
        if session.phase != Phase::Playing {
            return Transition::Ignored(IgnoreReason::WrongPhase(session.phase));
        }

        let Some(card) = session.cards.get(index) else {
            return Transition::Ignored(IgnoreReason::OutOfBounds);
        };
        if card.is_matched() {
            return Transition::Ignored(IgnoreReason::CardMatched);
        }
        if card.is_flipped() {
            return Transition::Ignored(IgnoreReason::CardFaceUp);
        }
        if session.selection.len() >= 2 {
            return Transition::Ignored(IgnoreReason::SelectionFull);
        }

        if let Some(card) = session.cards.card_mut(index) {
            card.flip_up();
            log::debug!("Flipped {} at {}", card, index);
        }
        session.selection.push(index);

        if session.selection.len() == 2 {
            self.scheduler
                .schedule(RESOLVE_DELAY_MS, session.generation, Deferred::ResolveSelection);
        }
        Transition::Applied
    }

    fn hide_preview(&mut self) -> Transition {
        if self.session.phase != Phase::Revealing {
            return Transition::Ignored(IgnoreReason::WrongPhase(self.session.phase));
        }

        self.session.cards.flip_all_down();
        self.session.phase = Phase::Playing;
        log::debug!("Preview over, {} is playing", self.session.generation);
        Transition::Applied
    }

    fn resolve_selection(&mut self) -> Transition {
        let session = &mut self.session;
        if session.phase != Phase::Playing {
            return Transition::Ignored(IgnoreReason::WrongPhase(session.phase));
        }
        let [first, second] = session.selection[..] else {
            return Transition::Ignored(IgnoreReason::NothingPending);
        };
        session.selection.clear();

        if session.cards[first].pairs_with(&session.cards[second]) {
            for index in [first, second] {
                if let Some(card) = session.cards.card_mut(index) {
                    card.mark_matched();
                }
            }
            session.score += MATCH_REWARD;
            session.matched_count += 2;
            log::debug!(
                "Matched {} ({}/{}), score {}",
                session.cards[first].name(),
                session.matched_count,
                session.cards.len(),
                session.score
            );

            if session.is_complete() {
                self.end_game(GameOutcome::Completed);
            }
        } else {
            for index in [first, second] {
                if let Some(card) = session.cards.card_mut(index) {
                    card.flip_down();
                }
            }
            log::debug!("No match at {} and {}", first, second);
        }
        Transition::Applied
    }

    fn decrement_time(&mut self, remaining: u32) -> Transition {
        if !self.session.phase.is_active() {
            return Transition::Ignored(IgnoreReason::WrongPhase(self.session.phase));
        }
        self.session.time_remaining = remaining;
        log::trace!("{}s left", remaining);
        Transition::Applied
    }

    fn end_game(&mut self, outcome: GameOutcome) {
        self.countdown.stop();
        self.session.phase = Phase::GameOver;
        self.session.outcome = Some(outcome);
        log::info!(
            "{} over ({:?}) with score {} and {}s left",
            self.session.generation,
            outcome,
            self.session.score,
            self.session.time_remaining
        );
    }

    // === Time sources ===

    fn run_deferred(&mut self, task: ScheduledTask) {
        let action = match task.kind {
            Deferred::HidePreview => Action::HidePreview,
            Deferred::ResolveSelection => Action::ResolveSelection,
        };

        let result = if task.generation != self.session.generation {
            log::debug!(
                "Dropping {} from {}, current session is {}",
                action,
                task.generation,
                self.session.generation
            );
            Transition::Ignored(IgnoreReason::StaleGeneration)
        } else {
            match task.kind {
                Deferred::HidePreview => self.hide_preview(),
                Deferred::ResolveSelection => self.resolve_selection(),
            }
        };
        self.finish(action, task.generation, result);
    }

    fn on_countdown(&mut self, event: CountdownEvent) {
        match event {
            CountdownEvent::Tick { remaining } => {
                let result = self.decrement_time(remaining);
                self.finish(Action::Tick, self.session.generation, result);
            }
            CountdownEvent::Expired => {
                self.on_timer_expire();
            }
        }
    }

    fn step_clock(&mut self, elapsed_ms: u64) {
        self.scheduler.advance_clock(elapsed_ms);
        // Callers only step up to the next deadline, so no tick can fire here.
        self.countdown.advance(elapsed_ms, |_| {});
    }

    /// Record the action, then render if state changed.
    fn finish(&mut self, action: Action, generation: Generation, result: Transition) -> Transition {
        if let Transition::Ignored(reason) = result {
            if action.is_adapter_call() {
                log::debug!("Ignored {}: {}", action, reason);
            } else {
                log::trace!("Ignored {}: {}", action, reason);
            }
        }

        if self.history.len() >= HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(ActionRecord {
            at_ms: self.scheduler.now_ms(),
            generation,
            action,
            result,
        });

        if result.is_applied() {
            if let Some(observer) = self.observer.as_mut() {
                observer.on_transition(&self.session.snapshot());
            }
        }
        result
    }
}

impl std::fmt::Debug for MemoryGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryGame")
            .field("phase", &self.session.phase)
            .field("generation", &self.session.generation)
            .field("score", &self.session.score)
            .field("time_remaining", &self.session.time_remaining)
            .field("now_ms", &self.scheduler.now_ms())
            .finish_non_exhaustive()
    }
}
