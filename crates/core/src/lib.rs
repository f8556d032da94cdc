//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the game: the locked-cell grid, piece
//! geometry and rotation tables, kind selection, and the world state machine.
//! It has **no dependencies** on terminals, audio, timing or I/O.
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 matrix of locked colors, bounds-aware occupancy and row removal
//! - [`pieces`]: static rotation tables and the pure [`Piece::apply`] transition
//! - [`rng`]: uniform, once-seeded piece kind selection
//! - [`world`]: legality checks, lock-and-advance, game-over latch
//!
//! # Rules
//!
//! - A piece spawns at (5, 0) in rotation 0.
//! - Moves and rotations that would overlap the stack or leave the grid are ignored.
//! - A blocked descend locks the piece, removes every full row and spawns the next piece.
//! - When the new piece cannot be placed the world is over and accepts no further actions.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Outcome, World};
//! use blockfall_types::Action;
//!
//! let mut world = World::with_seed(12345);
//! assert!(world.is_active());
//!
//! world.apply_action_if_legal(Action::MoveLeft);
//! while world.apply_action_if_legal(Action::Descend) == Outcome::Moved {}
//!
//! assert_eq!(world.pieces_locked(), 1);
//! assert_eq!(world.grid().filled_count(), 4);
//! ```

pub mod grid;
pub mod pieces;
pub mod rng;
pub mod world;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use grid::{ClearedRows, Grid, Rows};
pub use pieces::{get_shape, rotation_states, Piece, RotationState, SPAWN_POSITION};
pub use rng::{KindPicker, KindSource, ScriptedKinds};
pub use world::{Outcome, World};
