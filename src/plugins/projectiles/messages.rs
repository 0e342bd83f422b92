//! Buffered spawn requests.
//!
//! Producers (the boss) write intent; the allocator is the single consumer that touches the
//! pool. Positions are world space, velocities world units per second.

use bevy::prelude::*;

/// Projectile flavours the pool knows how to dress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectileKind {
    BossLaser,
    BossSweep,
    BossMissile,
    BossBarrage,
    BossHoming,
    BossPulse,
}

impl ProjectileKind {
    /// Sprite size for this kind.
    pub fn size(self) -> Vec2 {
        match self {
            Self::BossLaser => Vec2::new(8.0, 14.0),
            Self::BossMissile => Vec2::new(6.0, 12.0),
            Self::BossHoming => Vec2::splat(12.0),
            Self::BossSweep | Self::BossBarrage | Self::BossPulse => Vec2::splat(8.0),
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::BossLaser => Color::srgb(1.0, 0.2, 0.3),
            Self::BossSweep => Color::srgb(1.0, 0.55, 0.2),
            Self::BossMissile => Color::srgb(1.0, 0.8, 0.25),
            Self::BossBarrage => Color::srgb(0.95, 0.35, 0.95),
            Self::BossHoming => Color::srgb(0.4, 1.0, 0.45),
            Self::BossPulse => Color::srgb(0.3, 0.9, 1.0),
        }
    }
}

#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnProjectileRequest {
    pub kind: ProjectileKind,
    pub pos: Vec2,
    pub vel: Vec2,
}
