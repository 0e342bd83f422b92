//! ECS glue around [`BossEncounter`].
//!
//! The encounter itself is plain Rust; these systems feed it messages, hand it a message-backed
//! effects sink, and publish the kill reward.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::common::arena::Arena;
use crate::common::tunables::Tunables;
use crate::plugins::particles::SpawnParticleRequest;
use crate::plugins::projectiles::messages::{ProjectileKind, SpawnProjectileRequest};

use super::effects::BossEffects;
use super::encounter::BossEncounter;
use super::messages::{BossDamaged, BossDefeated, LevelAdvanced};

/// Effects sink that converts arena-space requests into world-space messages.
struct MessageEffects<'a, 'p, 'q> {
    arena: Arena,
    ticks_per_second: f32,
    projectiles: &'a mut MessageWriter<'p, SpawnProjectileRequest>,
    particles: &'a mut MessageWriter<'q, SpawnParticleRequest>,
}

impl BossEffects for MessageEffects<'_, '_, '_> {
    fn create_projectile(&mut self, pos: Vec2, vel: Vec2, kind: ProjectileKind) {
        self.projectiles.write(SpawnProjectileRequest {
            kind,
            pos: self.arena.to_world(pos),
            vel: self.arena.velocity_to_world(vel, self.ticks_per_second),
        });
    }

    fn create_particle(&mut self, pos: Vec2, size: f32, color: Color) {
        self.particles.write(SpawnParticleRequest {
            pos: self.arena.to_world(pos),
            size,
            color,
        });
    }
}

/// Poll the trigger on every level advance and spawn when it fires.
pub fn spawn_boss_on_level_advance(
    mut levels: MessageReader<LevelAdvanced>,
    arena: Res<Arena>,
    mut encounter: ResMut<BossEncounter>,
) {
    for advanced in levels.read() {
        if !encounter.should_trigger(advanced.level) {
            continue;
        }
        if let Err(e) = encounter.spawn(advanced.level, *arena) {
            warn!("boss spawn refused: {e}");
        }
    }
}

/// Damage intake from the collision system.
pub fn apply_boss_damage(mut hits: MessageReader<BossDamaged>, mut encounter: ResMut<BossEncounter>) {
    for hit in hits.read() {
        if !encounter.apply_damage(hit.amount) {
            debug!("boss ignored {} damage (absent or shielded)", hit.amount);
        }
    }
}

/// One encounter tick per fixed step.
pub fn tick_boss_encounter(
    arena: Res<Arena>,
    tunables: Res<Tunables>,
    mut encounter: ResMut<BossEncounter>,
    mut projectiles: MessageWriter<SpawnProjectileRequest>,
    mut particles: MessageWriter<SpawnParticleRequest>,
    mut defeated: MessageWriter<BossDefeated>,
) {
    if !encounter.is_active() {
        return;
    }

    let mut effects = MessageEffects {
        arena: *arena,
        ticks_per_second: tunables.ticks_per_second as f32,
        projectiles: &mut projectiles,
        particles: &mut particles,
    };

    let outcome = encounter.update(*arena, &mut effects);
    if outcome.destroyed {
        defeated.write(BossDefeated {
            score: outcome.score_awarded,
        });
    }
}

/// Leaving the level removes any boss still on screen, without a reward.
pub fn clear_boss_on_exit(mut encounter: ResMut<BossEncounter>) {
    encounter.clear();
}
