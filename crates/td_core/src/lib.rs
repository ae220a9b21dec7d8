//! TrackDrop core - backend logic for batch audio-track removal.
//!
//! This crate contains all business logic with zero CLI dependencies.
//! It can be used by the command-line tool or embedded elsewhere.

pub mod batch;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod logging;
pub mod probe;
pub mod process;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
