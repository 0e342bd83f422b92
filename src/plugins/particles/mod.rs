//! Particles plugin: fire-and-forget visual puffs.
//!
//! Producers write `SpawnParticleRequest`; each request becomes a short-lived sprite that
//! fades and shrinks until its lifetime runs out. Nobody keeps a handle to a particle.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;

/// Seconds a particle stays on screen.
pub const PARTICLE_LIFETIME: f32 = 0.5;

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct SpawnParticleRequest {
    /// World space.
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
}

#[derive(Component, Debug, Clone)]
pub struct Particle {
    pub base_size: f32,
    pub lifetime: Timer,
}

pub fn plugin(app: &mut App) {
    app.add_message::<SpawnParticleRequest>();

    app.add_systems(
        FixedUpdate,
        spawn_particles
            .after(crate::plugins::boss::systems::tick_boss_encounter)
            .run_if(in_state(GameState::InGame)),
    );
    app.add_systems(
        FixedPostUpdate,
        age_particles.run_if(in_state(GameState::InGame)),
    );
}

pub fn spawn_particles(mut commands: Commands, mut reader: MessageReader<SpawnParticleRequest>) {
    for req in reader.read() {
        commands.spawn((
            Name::new("Particle"),
            Particle {
                base_size: req.size,
                lifetime: Timer::from_seconds(PARTICLE_LIFETIME, TimerMode::Once),
            },
            Sprite {
                color: req.color,
                custom_size: Some(Vec2::splat(req.size)),
                ..default()
            },
            Transform::from_translation(req.pos.extend(3.0)),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

/// Fade and shrink, then despawn once the lifetime is spent.
pub fn age_particles(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    mut q: Query<(Entity, &mut Particle, &mut Sprite)>,
) {
    for (e, mut particle, mut sprite) in &mut q {
        particle.lifetime.tick(time.delta());

        if particle.lifetime.is_finished() {
            commands.entity(e).despawn();
            continue;
        }

        let left = 1.0 - particle.lifetime.fraction();
        sprite.custom_size = Some(Vec2::splat(particle.base_size * left));

        let mut c = sprite.color.to_srgba();
        c.alpha = left;
        sprite.color = c.into();
    }
}

#[cfg(test)]
mod tests;
