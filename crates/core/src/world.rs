//! World module - the engine state machine
//!
//! A world owns the locked [`Grid`], the falling [`Piece`] and the game-over
//! flag. Every action is tried speculatively: the candidate piece is computed
//! with [`Piece::apply`], tested against the grid, and either committed or
//! dropped. Only a blocked descend has a side effect: the piece locks, full
//! rows are cleared and the next piece spawns.
//!
//! Once the spawn position is blocked the world is over for good. Starting
//! again means building a new world; that decision belongs to the session.

use crate::grid::Grid;
use crate::pieces::Piece;
use crate::rng::{KindPicker, KindSource};
use crate::types::Action;

/// What a single call to [`World::apply_action_if_legal`] did.
///
/// Purely informational. Illegal moves are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The action was legal and the piece moved or rotated.
    Moved,
    /// The action was illegal and had no effect.
    Ignored,
    /// The piece locked, `rows_cleared` rows were removed and a new piece spawned.
    Locked { rows_cleared: usize },
    /// The piece locked but the next piece could not spawn; the world is over.
    ToppedOut { rows_cleared: usize },
    /// The world was already over; nothing happened.
    Inactive,
}

/// Engine state: locked grid, falling piece and game-over latch
#[derive(Debug, Clone)]
pub struct World<S = KindPicker> {
    grid: Grid,
    active: Piece,
    game_over: bool,
    source: S,
    rows_cleared: u32,
    pieces_locked: u32,
}

impl World<KindPicker> {
    /// Fresh world on an empty grid, seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_source(KindPicker::from_entropy())
    }

    /// Fresh world on an empty grid with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_source(KindPicker::seeded(seed))
    }

    /// Seed of the kind picker driving this world
    pub fn seed(&self) -> u64 {
        self.source.seed()
    }
}

impl Default for World<KindPicker> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: KindSource> World<S> {
    /// Fresh world on an empty grid drawing kinds from `source`.
    pub fn with_source(source: S) -> Self {
        Self::with_grid(Grid::new(), source)
    }

    /// World over a prepared grid; the first piece spawns at the anchor.
    ///
    /// If the spawn cells are already filled the world starts over.
    pub fn with_grid(grid: Grid, mut source: S) -> Self {
        let active = Piece::new(source.next_kind());
        Self::from_parts(grid, active, source)
    }

    /// World with an explicitly placed active piece (tests and replays).
    ///
    /// An active piece that overlaps the grid or leaves it makes the world over.
    pub fn from_parts(grid: Grid, active: Piece, source: S) -> Self {
        let mut world = Self {
            grid,
            active,
            game_over: false,
            source,
            rows_cleared: 0,
            pieces_locked: 0,
        };
        world.game_over = !world.is_legal(&active);
        world
    }

    /// True while the game is running.
    pub fn is_active(&self) -> bool {
        !self.game_over
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    /// Rows removed since the world was created
    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// Pieces locked since the world was created
    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Legal position: every cell inside the grid and not locked.
    pub fn is_legal(&self, piece: &Piece) -> bool {
        piece.cells().iter().all(|&(x, y)| !self.grid.filled(x, y))
    }

    /// Offer one action to the world.
    ///
    /// Legal actions are committed. An illegal descend locks the piece and
    /// advances to the next one; any other illegal action is ignored.
    pub fn apply_action_if_legal(&mut self, action: Action) -> Outcome {
        if self.game_over {
            return Outcome::Inactive;
        }

        let candidate = self.active.apply(action);
        if self.is_legal(&candidate) {
            self.active = candidate;
            return Outcome::Moved;
        }

        match action {
            Action::Descend => self.lock_and_advance(),
            Action::MoveRight | Action::MoveLeft | Action::RotateCw | Action::RotateCcw => {
                Outcome::Ignored
            }
        }
    }

    /// Lock the active piece, clear full rows and spawn the next piece.
    fn lock_and_advance(&mut self) -> Outcome {
        let locked = self.active;
        self.grid.paint(locked.cells(), locked.color());
        self.pieces_locked += 1;

        let cleared = self.grid.clear_full_rows();
        let rows_cleared = cleared.len();
        self.rows_cleared += rows_cleared as u32;

        log::debug!(
            "locked {:?} at ({}, {}) rot {}, cleared rows {:?}",
            locked.kind,
            locked.x,
            locked.y,
            locked.rotation,
            cleared.as_slice()
        );

        self.active = Piece::new(self.source.next_kind());
        if self.is_legal(&self.active) {
            Outcome::Locked { rows_cleared }
        } else {
            self.game_over = true;
            log::debug!("spawn of {:?} blocked, world over", self.active.kind);
            Outcome::ToppedOut { rows_cleared }
        }
    }

    /// The locked grid with the active piece painted on top.
    pub fn composite_board(&self) -> Grid {
        let mut board = self.grid.clone();
        for (x, y) in self.active.cells() {
            // A blocked spawn may poke above the grid; only visible cells are drawn.
            if board.get(x, y).is_some() {
                board.paint_cell(x, y, Some(self.active.color()));
            }
        }
        board
    }
}
