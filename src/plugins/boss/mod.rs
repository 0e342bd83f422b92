//! Boss plugin: one scripted boss per fifth level.
//!
//! ---------------------------
//! HOW THIS IS DESIGNED
//! ---------------------------
//! 1) FACTS live in one resource:
//!    - `BossEncounter` owns the (at most one) `BossInstance`, the deferred-action queue and
//!      the RNG. Nothing else holds boss state.
//!
//! 2) RULES run on the fixed tick:
//!    - `LevelAdvanced` -> trigger check -> spawn
//!    - `BossDamaged`   -> damage intake (shield gate, death transition)
//!    - one `update` per tick: deferred actions, phase machine, movement, attack rotation
//!
//! 3) OUTPUTS are requests, never owned objects:
//!    - `SpawnProjectileRequest` to the projectile pool
//!    - `SpawnParticleRequest` to the particle system
//!    - `BossDefeated` to whoever keeps score
//!
//! 4) PRESENTATION is derived from facts:
//!    - `BossEncounter::render_state` produces a snapshot; `render` draws it.
//!
//! ---------------------------
//! TIME MODEL
//! ---------------------------
//! Everything is counted in ticks at 60 per second. Delayed pattern effects are
//! `(due_tick, boss_id, action)` entries drained at the start of each update, so they run on the
//! same schedule as the rest of the boss and can never touch a boss that has already died or
//! been replaced.

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;

mod deferred;
pub mod effects;
pub mod encounter;
pub mod instance;
pub mod messages;
pub mod patterns;
pub mod presentation;
pub mod render;
pub mod systems;
pub mod tier;

pub use encounter::{BossEncounter, SpawnError, UpdateOutcome};
pub use instance::{BossId, BossInstance, BossPhase, WarningLine};
pub use messages::{BossDamaged, BossDefeated, LevelAdvanced};
pub use patterns::AttackPattern;
pub use tier::{BossTier, ShapeCategory};

/// Register the encounter and its fixed-step systems. Headless-safe.
pub fn plugin(app: &mut App) {
    let seed = app
        .world()
        .get_resource::<Tunables>()
        .and_then(|t| t.boss_seed);
    app.insert_resource(BossEncounter::new(seed));

    app.add_message::<LevelAdvanced>()
        .add_message::<BossDamaged>()
        .add_message::<BossDefeated>();

    // Spawn before damage before tick, so a hit landing on the spawn tick is already counted
    // and a killing blow shows up as Dying in the same step.
    app.add_systems(
        FixedUpdate,
        (
            systems::spawn_boss_on_level_advance,
            systems::apply_boss_damage,
            systems::tick_boss_encounter,
        )
            .chain()
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(OnExit(GameState::InGame), systems::clear_boss_on_exit);
}
