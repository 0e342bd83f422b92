//! Global state machine.
//!
//! Boss, projectile and particle systems only tick while `InGame`.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}
