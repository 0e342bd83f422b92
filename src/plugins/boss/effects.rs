//! Outbound seam to the projectile and particle systems.
//!
//! The encounter only issues creation requests. Whatever implements [`BossEffects`] owns the
//! resulting objects; the boss never sees them again.

use bevy::prelude::*;

use crate::plugins::projectiles::messages::ProjectileKind;

/// Sink for everything a boss emits. Coordinates are arena space, velocities pixels per tick.
pub trait BossEffects {
    fn create_projectile(&mut self, pos: Vec2, vel: Vec2, kind: ProjectileKind);
    fn create_particle(&mut self, pos: Vec2, size: f32, color: Color);
}

#[cfg(test)]
pub(crate) use recording::EffectLog;

/// In-memory sink that keeps every request, in order.
#[cfg(test)]
mod recording {
    use bevy::prelude::*;

    use crate::plugins::projectiles::messages::ProjectileKind;

    use super::BossEffects;

    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct ProjectileSpawn {
        pub pos: Vec2,
        pub vel: Vec2,
        pub kind: ProjectileKind,
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct ParticleSpawn {
        pub pos: Vec2,
        pub size: f32,
        pub color: Color,
    }

    #[derive(Debug, Default)]
    pub struct EffectLog {
        pub projectiles: Vec<ProjectileSpawn>,
        pub particles: Vec<ParticleSpawn>,
    }

    impl EffectLog {
        pub fn clear(&mut self) {
            self.projectiles.clear();
            self.particles.clear();
        }

        pub fn count_kind(&self, kind: ProjectileKind) -> usize {
            self.projectiles.iter().filter(|p| p.kind == kind).count()
        }
    }

    impl BossEffects for EffectLog {
        fn create_projectile(&mut self, pos: Vec2, vel: Vec2, kind: ProjectileKind) {
            self.projectiles.push(ProjectileSpawn { pos, vel, kind });
        }

        fn create_particle(&mut self, pos: Vec2, size: f32, color: Color) {
            self.particles.push(ParticleSpawn { pos, size, color });
        }
    }
}
