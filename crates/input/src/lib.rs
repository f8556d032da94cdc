//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Action`]s and tracks
//! held keys (rotation latch, soft-drop modifier), including terminals that
//! never emit key-release events.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::InputHandler;
pub use map::{map_key, should_quit, Control};
