//! Session: one player's run of consecutive games.
//!
//! The session sits between the outer loop and the engine. It queues the
//! actions collected during a frame, injects descends on the turn timer's
//! cadence, applies everything in order once per frame and replaces the
//! world with a fresh one as soon as it is over.

use std::time::Duration;

use arrayvec::ArrayVec;

use crate::clock::TurnTimer;
use crate::config::SessionConfig;
use crate::core::{Grid, KindPicker, KindSource, Outcome, World};
use crate::types::Action;

/// Maximum actions buffered between two frames; extra input is dropped.
pub const MAX_PENDING_ACTIONS: usize = 32;

/// What happened during one [`Session::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// The turn timer injected a descend this frame.
    pub descended: bool,
    pub pieces_locked: u32,
    pub rows_cleared: u32,
    /// The world ended this frame and was replaced.
    pub restarted: bool,
}

/// Builds the kind source for episode `n` (0 for the first game).
type SourceFactory<S> = Box<dyn FnMut(u32) -> S>;

pub struct Session<S = KindPicker> {
    world: World<S>,
    make_source: SourceFactory<S>,
    pending: ArrayVec<Action, MAX_PENDING_ACTIONS>,
    turn: TurnTimer,
    soft_drop: bool,
    episode: u32,
    best_rows_cleared: u32,
}

impl Session<KindPicker> {
    /// Session with random kinds; a configured seed makes every episode reproducible.
    pub fn new(config: &SessionConfig) -> Self {
        let seed = config.seed;
        Self::with_source_factory(config, move |episode| match seed {
            Some(seed) => KindPicker::seeded(seed.wrapping_add(episode as u64)),
            None => KindPicker::from_entropy(),
        })
    }

    /// Seed of the current world's kind picker.
    pub fn seed(&self) -> u64 {
        self.world.seed()
    }
}

impl<S: KindSource> Session<S> {
    pub fn with_source_factory<F>(config: &SessionConfig, mut make_source: F) -> Self
    where
        F: FnMut(u32) -> S + 'static,
    {
        let world = World::with_source(make_source(0));
        Self {
            world,
            make_source: Box::new(make_source),
            pending: ArrayVec::new(),
            turn: TurnTimer::new(config.standard_turn, config.quick_turn),
            soft_drop: false,
            episode: 0,
            best_rows_cleared: 0,
        }
    }

    /// Queue an action for the next update. Returns false when the queue is full.
    pub fn queue(&mut self, action: Action) -> bool {
        self.pending.try_push(action).is_ok()
    }

    pub fn pending(&self) -> &[Action] {
        &self.pending
    }

    /// Held soft-drop modifier; switches the descend cadence.
    pub fn set_soft_drop(&mut self, held: bool) {
        self.soft_drop = held;
    }

    pub fn soft_drop(&self) -> bool {
        self.soft_drop
    }

    /// Current descend interval
    pub fn turn_duration(&self) -> Duration {
        self.turn.turn(self.soft_drop)
    }

    /// Advance one logical frame of length `dt`.
    ///
    /// Queued actions run first, in the order they were queued, followed by
    /// the descend injected by the turn timer (if due).
    pub fn update(&mut self, dt: Duration) -> FrameReport {
        let mut report = FrameReport::default();

        if self.turn.advance(dt, self.soft_drop) {
            report.descended = true;
            if self.pending.try_push(Action::Descend).is_err() {
                // Gravity must not be lost to a flood of input.
                self.pending.pop();
                self.pending.push(Action::Descend);
            }
        }

        for action in self.pending.drain(..) {
            match self.world.apply_action_if_legal(action) {
                Outcome::Locked { rows_cleared } => {
                    report.pieces_locked += 1;
                    report.rows_cleared += rows_cleared as u32;
                }
                Outcome::ToppedOut { rows_cleared } => {
                    report.pieces_locked += 1;
                    report.rows_cleared += rows_cleared as u32;
                }
                Outcome::Moved | Outcome::Ignored | Outcome::Inactive => {}
            }
        }

        if !self.world.is_active() {
            self.restart();
            report.restarted = true;
        }

        report
    }

    /// Replace the world with a fresh one.
    pub fn restart(&mut self) {
        log::info!(
            "game {} over: {} rows cleared, {} pieces locked",
            self.episode + 1,
            self.world.rows_cleared(),
            self.world.pieces_locked()
        );
        self.best_rows_cleared = self.best_rows_cleared.max(self.world.rows_cleared());
        self.episode += 1;
        self.world = World::with_source((self.make_source)(self.episode));
        self.pending.clear();
    }

    pub fn world(&self) -> &World<S> {
        &self.world
    }

    /// Board to draw this frame: locked cells plus the falling piece.
    pub fn composite_board(&self) -> Grid {
        self.world.composite_board()
    }

    /// Number of the current game, starting at 0.
    pub fn episode(&self) -> u32 {
        self.episode
    }

    /// Most rows cleared in a single finished game during this session.
    pub fn best_rows_cleared(&self) -> u32 {
        self.best_rows_cleared
    }
}
