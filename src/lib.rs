//! Blockfall (workspace facade crate).
//!
//! Re-exports the implementation crates under `crates/` as
//! `blockfall::{core,session,input,term,audio,types}` and hosts the pieces
//! only the binary needs: environment configuration and the log file sink.

pub mod config;
pub mod logging;

pub use blockfall_audio as audio;
pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_session as session;
pub use blockfall_term as term;
pub use blockfall_types as types;
