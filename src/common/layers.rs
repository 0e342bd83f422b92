//! Collision layers.
//!
//! Only boss projectiles carry colliders here. `World` and `Player` exist so the filters
//! already point at what a host game would put in the arena.

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    World,
    Player,
    BossBullet,
}
