//! Projectiles plugin: **message-based producer → consumer** spawning into a pre-spawned pool.
//!
//! # Data flow
//! ```text
//!  FixedUpdate
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) Producer: boss encounter tick                                         │
//!│      - writes: SpawnProjectileRequest { kind, pos, vel }                   │
//!│                                                                            │
//!│  (B) Consumer: allocate_projectiles_from_pool                              │
//!│      - reads: SpawnProjectileRequest messages                              │
//!│      - mutates: ProjectilePool free list                                   │
//!│      - mutates: state, kind, sprite, transform, velocity, visibility,      │
//!│                 collision layers                                           │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!  FixedPostUpdate
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (C) retire_offscreen_projectiles: Active -> PendingReturn past the edge   │
//!│      (a collision system may also write PendingReturn)                     │
//!│                                                                            │
//!│  (D) return_to_pool_commit: PendingReturn -> Inactive, push to free list   │
//!└────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Producers never borrow the pool; they only enqueue intent. The allocator is the single
//! writer that pops from it and the commit step is the single writer that pushes back.
//! An empty pool drops the request: that is a capacity decision, not an error.

pub mod allocator;
pub mod commit;
pub mod components;
pub mod messages;
pub mod pool;

use bevy::prelude::*;

use crate::common::state::GameState;

pub const POOL_CAPACITY: usize = 1024;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(pool::ProjectilePool::new(POOL_CAPACITY))
            .add_systems(Startup, pool::init_projectile_pool);

        app.add_message::<messages::SpawnProjectileRequest>();

        // Allocate after the boss tick so requests are served in the step they were made.
        app.add_systems(
            FixedUpdate,
            allocator::allocate_projectiles_from_pool
                .after(crate::plugins::boss::systems::tick_boss_encounter)
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedPostUpdate,
            (
                commit::retire_offscreen_projectiles,
                commit::return_to_pool_commit,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
    }
}

#[cfg(test)]
mod tests;
