//! Boss rush: a scripted boss encounter for a 2D arcade shooter, built as Bevy plugins.
//!
//! `game` wires the app, `plugins::boss` holds the encounter itself, and the remaining plugins
//! consume what the boss emits. Integration tests in `tests/` import through this crate root.

pub mod common;
pub mod game;
pub mod plugins;
