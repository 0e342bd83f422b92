//! Projectiles plugin tests: deterministic, no physics step.
//!
//! Requests are written straight into the message buffer and the consumer systems are run
//! once, so every assertion is about component values the pipeline wrote.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::arena::Arena;
use crate::common::layers::Layer;
use crate::common::test_utils::{ensure_messages, run_system_once};

use super::components::{PooledProjectile, Projectile, ProjectileState};
use super::messages::{ProjectileKind, SpawnProjectileRequest};
use super::{allocator, commit, pool};

fn world_with_pool(capacity: usize) -> World {
    let mut world = World::new();
    world.insert_resource(pool::ProjectilePool::new(capacity));
    ensure_messages::<SpawnProjectileRequest>(&mut world);
    run_system_once(&mut world, pool::init_projectile_pool);
    world
}

fn request(world: &mut World, kind: ProjectileKind, pos: Vec2, vel: Vec2) {
    world.write_message(SpawnProjectileRequest { kind, pos, vel });
}

fn active_entities(world: &mut World) -> Vec<Entity> {
    world
        .query_filtered::<(Entity, &ProjectileState), With<PooledProjectile>>()
        .iter(world)
        .filter(|(_, s)| **s == ProjectileState::Active)
        .map(|(e, _)| e)
        .collect()
}

#[test]
fn init_pool_spawns_capacity_projectiles_inactive() {
    let mut world = world_with_pool(8);

    assert_eq!(world.resource::<pool::ProjectilePool>().free_len(), 8);

    let mut q = world.query::<(
        &PooledProjectile,
        &ProjectileState,
        &Visibility,
        &CollisionLayers,
    )>();

    let mut count = 0;
    for (_p, state, vis, layers) in q.iter(&world) {
        count += 1;
        assert_eq!(*state, ProjectileState::Inactive);
        assert_eq!(*vis, Visibility::Hidden);
        assert!(layers.memberships.has_all(Layer::BossBullet));
        assert!(!layers.filters.has_all(Layer::Player));
        assert!(!layers.filters.has_all(Layer::World));
    }
    assert_eq!(count, 8);
}

#[test]
fn allocator_activates_one_projectile_per_request() {
    let mut world = world_with_pool(4);

    request(
        &mut world,
        ProjectileKind::BossLaser,
        Vec2::new(10.0, 20.0),
        Vec2::new(0.0, -480.0),
    );
    request(
        &mut world,
        ProjectileKind::BossHoming,
        Vec2::new(-5.0, 0.0),
        Vec2::new(0.0, -120.0),
    );

    run_system_once(&mut world, allocator::allocate_projectiles_from_pool);

    assert_eq!(world.resource::<pool::ProjectilePool>().free_len(), 2);

    let active = active_entities(&mut world);
    assert_eq!(active.len(), 2);

    let laser = active
        .iter()
        .copied()
        .find(|e| world.get::<Projectile>(*e).unwrap().kind == ProjectileKind::BossLaser)
        .expect("laser projectile should be active");

    let tf = world.get::<Transform>(laser).unwrap();
    assert_eq!(tf.translation.truncate(), Vec2::new(10.0, 20.0));
    assert_eq!(world.get::<LinearVelocity>(laser).unwrap().0, Vec2::new(0.0, -480.0));
    assert_eq!(*world.get::<Visibility>(laser).unwrap(), Visibility::Visible);

    let sprite = world.get::<Sprite>(laser).unwrap();
    assert_eq!(sprite.custom_size, Some(ProjectileKind::BossLaser.size()));

    let layers = world.get::<CollisionLayers>(laser).unwrap();
    assert!(layers.filters.has_all(Layer::Player));
    assert!(layers.filters.has_all(Layer::World));
}

#[test]
fn allocator_drops_requests_beyond_capacity() {
    let mut world = world_with_pool(2);

    for _ in 0..5 {
        request(&mut world, ProjectileKind::BossPulse, Vec2::ZERO, Vec2::X);
    }

    run_system_once(&mut world, allocator::allocate_projectiles_from_pool);

    assert_eq!(world.resource::<pool::ProjectilePool>().free_len(), 0);
    assert_eq!(active_entities(&mut world).len(), 2);
}

#[test]
fn offscreen_projectiles_are_recycled() {
    let mut world = world_with_pool(2);
    world.insert_resource(Arena::new(800.0, 600.0));

    request(&mut world, ProjectileKind::BossSweep, Vec2::new(0.0, -400.0), Vec2::ZERO);
    request(&mut world, ProjectileKind::BossSweep, Vec2::new(0.0, 0.0), Vec2::ZERO);
    run_system_once(&mut world, allocator::allocate_projectiles_from_pool);

    run_system_once(&mut world, commit::retire_offscreen_projectiles);
    run_system_once(&mut world, commit::return_to_pool_commit);

    let active = active_entities(&mut world);
    assert_eq!(active.len(), 1);
    let tf = world.get::<Transform>(active[0]).unwrap();
    assert_eq!(tf.translation.truncate(), Vec2::ZERO);

    assert_eq!(world.resource::<pool::ProjectilePool>().free_len(), 1);
}

#[test]
fn return_commit_restores_inactive_invariants() {
    let mut world = world_with_pool(1);

    request(&mut world, ProjectileKind::BossMissile, Vec2::ZERO, Vec2::new(30.0, -180.0));
    run_system_once(&mut world, allocator::allocate_projectiles_from_pool);

    let e = active_entities(&mut world)[0];
    *world.get_mut::<ProjectileState>(e).unwrap() = ProjectileState::PendingReturn;

    run_system_once(&mut world, commit::return_to_pool_commit);

    assert_eq!(*world.get::<ProjectileState>(e).unwrap(), ProjectileState::Inactive);
    assert_eq!(*world.get::<Visibility>(e).unwrap(), Visibility::Hidden);
    assert_eq!(world.get::<LinearVelocity>(e).unwrap().0, Vec2::ZERO);

    let layers = world.get::<CollisionLayers>(e).unwrap();
    assert!(!layers.filters.has_all(Layer::Player));

    assert_eq!(world.resource::<pool::ProjectilePool>().free_len(), 1);
}
