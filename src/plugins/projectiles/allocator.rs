//! Spawn consumer: activate projectiles from the pool.
//!
//! # Fail-fast invariants
//! - The pool free list contains only valid pooled projectile entities.
//! - Therefore, a pooled entity must match the projectile query.
//!
//! If this is violated, we `expect()` and crash loudly.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::components::{PooledProjectile, Projectile, ProjectileEntity, ProjectileState};
use super::messages::SpawnProjectileRequest;
use super::pool::{ProjectilePool, active_projectile_layers};

pub fn allocate_projectiles_from_pool(
    mut pool: ResMut<ProjectilePool>,
    mut reader: MessageReader<SpawnProjectileRequest>,
    mut q: Query<
        (
            &mut ProjectileState,
            &mut Projectile,
            &mut Sprite,
            &mut Transform,
            &mut LinearVelocity,
            &mut Visibility,
            &mut CollisionLayers,
        ),
        With<PooledProjectile>,
    >,
) {
    for req in reader.read() {
        let Some(ProjectileEntity(e)) = pool.pop_free() else {
            // Capacity decision, not a correctness failure.
            debug!("projectile pool exhausted, dropping {:?}", req.kind);
            continue;
        };

        let (mut state, mut projectile, mut sprite, mut tf, mut vel, mut vis, mut layers) = q
            .get_mut(e)
            .expect("ProjectilePool contained an entity missing pooled projectile components");

        *state = ProjectileState::Active;
        projectile.kind = req.kind;
        sprite.color = req.kind.color();
        sprite.custom_size = Some(req.kind.size());
        tf.translation = req.pos.extend(2.0);
        vel.0 = req.vel;
        *vis = Visibility::Visible;
        *layers = active_projectile_layers();
    }
}
