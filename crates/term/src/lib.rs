//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the composite board is drawn into
//! a framebuffer of styled characters, which is then diffed against the
//! previous frame and flushed to the terminal.
//!
//! - Keep `core` free of any terminal concerns
//! - Board cells are two columns wide so they stay roughly square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{CellSize, GameView, Layout, StatusView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
