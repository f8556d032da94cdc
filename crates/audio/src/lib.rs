//! Background music for the game.
//!
//! A [`Playlist`] is read from a directory once at startup; the [`Jukebox`]
//! starts a uniformly chosen track whenever its [`MusicBackend`] goes idle.
//! The engine never depends on this crate.

pub mod backend;
pub mod error;
pub mod jukebox;
pub mod playlist;

pub use backend::{MusicBackend, RodioBackend};
pub use error::AudioError;
pub use jukebox::Jukebox;
pub use playlist::Playlist;
