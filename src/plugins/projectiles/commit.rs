//! Return path: retire projectiles and recycle them into the pool.
//!
//! This module is the "owner" of the *Inactive invariants*.
//!
//! Invariant: Inactive projectiles must be:
//! - hidden
//! - velocity = 0
//! - collide with nothing (filters empty)

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::arena::Arena;

use super::components::{PooledProjectile, ProjectileEntity, ProjectileState};
use super::pool::{ProjectilePool, inactive_projectile_layers};

/// How far past the arena edge a projectile may travel before it is retired.
pub const OFFSCREEN_MARGIN: f32 = 32.0;

/// Mark active projectiles that left the arena.
pub fn retire_offscreen_projectiles(
    arena: Res<Arena>,
    mut q: Query<(&Transform, &mut ProjectileState), With<PooledProjectile>>,
) {
    for (tf, mut state) in &mut q {
        if *state != ProjectileState::Active {
            continue;
        }
        if arena.world_point_outside(tf.translation.truncate(), OFFSCREEN_MARGIN) {
            *state = ProjectileState::PendingReturn;
        }
    }
}

pub fn return_to_pool_commit(
    mut pool: ResMut<ProjectilePool>,
    mut q: Query<
        (
            Entity,
            &mut ProjectileState,
            &mut Visibility,
            &mut LinearVelocity,
            &mut CollisionLayers,
        ),
        With<PooledProjectile>,
    >,
) {
    for (e, mut state, mut vis, mut vel, mut layers) in &mut q {
        if *state != ProjectileState::PendingReturn {
            continue;
        }

        *state = ProjectileState::Inactive;
        *vis = Visibility::Hidden;
        vel.0 = Vec2::ZERO;
        *layers = inactive_projectile_layers();

        pool.push_free(ProjectileEntity(e));
    }
}
