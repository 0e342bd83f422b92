use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;

use super::components::{PooledProjectile, Projectile, ProjectileEntity, ProjectileState};
use super::messages::ProjectileKind;

#[derive(Resource, Debug)]
pub struct ProjectilePool {
    free: Vec<ProjectileEntity>,
    pub capacity: usize,
}

impl ProjectilePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            free: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn pop_free(&mut self) -> Option<ProjectileEntity> {
        self.free.pop()
    }

    #[inline]
    pub fn push_free(&mut self, e: ProjectileEntity) {
        self.free.push(e);
    }

    #[inline]
    pub fn free_len(&self) -> usize {
        self.free.len()
    }
}

/// Boss shots hit the player and the arena walls.
#[inline]
pub fn active_projectile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::BossBullet, [Layer::World, Layer::Player])
}

/// "Disabled" without structural changes: empty filters means we collide with nothing.
#[inline]
pub fn inactive_projectile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::BossBullet, [] as [Layer; 0])
}

/// Pre-spawn pooled projectiles (inactive).
///
/// Physics components stay present; inactive projectiles collide with nothing because their
/// filters are empty, so recycling never moves entities between archetypes.
pub fn init_projectile_pool(mut commands: Commands, mut pool: ResMut<ProjectilePool>) {
    pool.free.clear();
    let cap = pool.capacity;
    pool.free.reserve(cap);

    let kind = ProjectileKind::BossBarrage;

    for _ in 0..cap {
        let e = commands
            .spawn((
                Name::new("Projectile(Pooled)"),
                PooledProjectile,
                ProjectileState::Inactive,
                Projectile { kind },
                Sprite {
                    color: kind.color(),
                    custom_size: Some(kind.size()),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, 2.0),
                Visibility::Hidden,
                RigidBody::Kinematic,
                Collider::circle(4.0),
                inactive_projectile_layers(),
                LinearVelocity(Vec2::ZERO),
            ))
            .id();

        pool.free.push(ProjectileEntity(e));
    }
}
