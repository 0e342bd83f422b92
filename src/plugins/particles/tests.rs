use std::time::Duration;

use bevy::prelude::*;

use crate::common::test_utils::{ensure_messages, run_system_once};

use super::*;

fn fixed_time_with_delta(dt: f32) -> Time<Fixed> {
    let mut t = Time::<Fixed>::default();
    t.advance_by(Duration::from_secs_f32(dt));
    t
}

#[test]
fn each_request_spawns_one_particle() {
    let mut world = World::new();
    ensure_messages::<SpawnParticleRequest>(&mut world);

    world.write_message(SpawnParticleRequest {
        pos: Vec2::new(3.0, 4.0),
        size: 15.0,
        color: Color::srgb(1.0, 1.0, 0.0),
    });
    world.write_message(SpawnParticleRequest {
        pos: Vec2::ZERO,
        size: 3.0,
        color: Color::WHITE,
    });

    run_system_once(&mut world, spawn_particles);

    let mut sizes: Vec<f32> = world
        .query::<&Particle>()
        .iter(&world)
        .map(|p| p.base_size)
        .collect();
    sizes.sort_by(f32::total_cmp);
    assert_eq!(sizes, vec![3.0, 15.0]);
}

#[test]
fn particles_fade_then_despawn() {
    let mut world = World::new();
    let e = world
        .spawn((
            Particle {
                base_size: 10.0,
                lifetime: Timer::from_seconds(PARTICLE_LIFETIME, TimerMode::Once),
            },
            Sprite {
                color: Color::WHITE,
                custom_size: Some(Vec2::splat(10.0)),
                ..default()
            },
        ))
        .id();

    world.insert_resource(fixed_time_with_delta(PARTICLE_LIFETIME * 0.5));
    run_system_once(&mut world, age_particles);

    let sprite = world.get::<Sprite>(e).unwrap();
    let size = sprite.custom_size.unwrap().x;
    assert!((size - 5.0).abs() < 1e-3, "expected half size, got {size}");
    assert!((sprite.color.to_srgba().alpha - 0.5).abs() < 1e-3);

    world.insert_resource(fixed_time_with_delta(PARTICLE_LIFETIME));
    run_system_once(&mut world, age_particles);

    assert!(world.get_entity(e).is_err());
}
