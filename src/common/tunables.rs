//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub arena_width: f32,
    pub arena_height: f32,
    /// Simulation ticks per second. Boss timings are authored in frames at this rate.
    pub ticks_per_second: f64,
    /// Fixed seed for boss randomness; `None` seeds from the OS.
    pub boss_seed: Option<u64>,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            arena_width: 800.0,
            arena_height: 600.0,
            ticks_per_second: 60.0,
            boss_seed: None,
        }
    }
}
