//! Session glue between the outer loop and the engine.
//!
//! - [`clock`]: fixed-timestep frame accumulator and the descend turn timer
//! - [`config`]: timing and seeding, read from the environment
//! - [`session`]: action queue, auto-descend and restart on game over
//!
//! Nothing here reads the wall clock; callers pass elapsed durations in.

pub mod clock;
pub mod config;
pub mod session;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use clock::{FrameClock, TurnTimer};
pub use config::SessionConfig;
pub use session::{FrameReport, Session, MAX_PENDING_ACTIONS};
