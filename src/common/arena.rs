//! Arena geometry.
//!
//! Boss logic is authored in arena space: origin at the top-left corner, +y pointing down,
//! units in pixels, velocities in pixels per tick. Bevy's world space is centered on the
//! arena with +y up. Conversions live here so nothing else has to care.

use bevy::prelude::*;

use super::tunables::Tunables;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_tunables(tunables: &Tunables) -> Self {
        Self::new(tunables.arena_width, tunables.arena_height)
    }

    /// Arena point -> world point.
    #[inline]
    pub fn to_world(self, p: Vec2) -> Vec2 {
        Vec2::new(p.x - self.width * 0.5, self.height * 0.5 - p.y)
    }

    /// Center of an arena-space rectangle, in world space.
    #[inline]
    pub fn rect_center_to_world(self, top_left: Vec2, size: Vec2) -> Vec2 {
        self.to_world(top_left + size * 0.5)
    }

    /// Per-tick arena velocity -> per-second world velocity.
    #[inline]
    pub fn velocity_to_world(self, v: Vec2, ticks_per_second: f32) -> Vec2 {
        Vec2::new(v.x, -v.y) * ticks_per_second
    }

    /// True if a world-space point lies outside the arena by more than `margin`.
    #[inline]
    pub fn world_point_outside(self, p: Vec2, margin: f32) -> bool {
        p.x.abs() > self.width * 0.5 + margin || p.y.abs() > self.height * 0.5 + margin
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::from_tunables(&Tunables::default())
    }
}
