//! The boss encounter: at most one live boss and everything scheduled on its behalf.
//!
//! ```text
//!   spawn ──> Entering ──(y reaches hover line)──> Fighting ──(hp <= 0)──> Dying ──(61 ticks)──> removed
//! ```
//!
//! Each `update` is one fixed tick:
//! 1. advance the tick counter and drain due deferred actions (liveness-guarded)
//! 2. step the current phase
//! 3. on death completion, report the reward and drop the boss plus its backlog

use bevy::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::common::arena::Arena;

use super::deferred::DeferredQueue;
use super::effects::BossEffects;
use super::instance::{BossId, BossInstance, BossPhase, INITIAL_ATTACK_COOLDOWN};
use super::patterns::{self, PatternCtx};
use super::presentation::BossRenderState;
use super::tier::BossTier;

/// A boss shows up on every level divisible by this.
pub const BOSS_LEVEL_INTERVAL: u32 = 5;
/// Entry descent, pixels per tick.
pub const ENTRY_SPEED: f32 = 2.0;
/// Vertical chase speed while fighting (charge dive and return), pixels per tick.
pub const DIVE_SPEED: f32 = 4.0;
pub const WANDER_ARRIVE_DIST: f32 = 5.0;
/// Upper bound (exclusive) of the random frames added to every attack cooldown.
pub const COOLDOWN_JITTER: i32 = 60;
/// Dying lasts until the phase timer passes this.
pub const DEATH_FRAMES: u32 = 60;
pub const EXPLOSION_EVERY: u32 = 10;
pub const EXPLOSION_SIZE: f32 = 15.0;
pub const EXPLOSION_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);
pub const TRAIL_CHANCE: f64 = 0.1;
pub const TRAIL_SIZE: f32 = 3.0;
pub const SCORE_PER_MAX_HP: u32 = 10;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    /// Spawning is refused while a boss is alive; the existing one is left untouched.
    #[error("boss {existing:?} is still active")]
    AlreadyActive { existing: BossId },
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// True exactly once, on the tick the death animation completes.
    pub destroyed: bool,
    pub score_awarded: u32,
}

#[derive(Resource)]
pub struct BossEncounter {
    active: Option<BossInstance>,
    queue: DeferredQueue,
    rng: SmallRng,
    tick: u64,
    next_id: u32,
}

impl Default for BossEncounter {
    fn default() -> Self {
        Self::new(None)
    }
}

impl BossEncounter {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self {
            active: None,
            queue: DeferredQueue::default(),
            rng,
            tick: 0,
            next_id: 1,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Should a boss appear on `level`? Pure; poll once per level advance.
    pub fn should_trigger(&self, level: u32) -> bool {
        level % BOSS_LEVEL_INTERVAL == 0 && self.active.is_none()
    }

    /// Spawn the tier for `level` just above the arena.
    pub fn spawn(&mut self, level: u32, arena: Arena) -> Result<&BossInstance, SpawnError> {
        if let Some(existing) = &self.active {
            warn!(
                "refusing to spawn a level {level} boss while {:?} ({}) is active",
                existing.id, existing.name
            );
            return Err(SpawnError::AlreadyActive { existing: existing.id });
        }

        let tier = BossTier::for_level(level);
        let id = BossId(self.next_id);
        self.next_id += 1;

        let boss = BossInstance::from_template(id, &tier.template(), arena.width);
        info!("level {level}: spawning {} ({id:?}, {} hp)", boss.name, boss.max_hp);

        Ok(&*self.active.insert(boss))
    }

    /// Advance one tick.
    pub fn update(&mut self, arena: Arena, effects: &mut dyn BossEffects) -> UpdateOutcome {
        let Some(boss) = self.active.as_mut() else {
            return UpdateOutcome::default();
        };

        self.tick += 1;
        let now = self.tick;
        let due = self.queue.take_due(now);

        let mut ctx = PatternCtx {
            boss,
            arena,
            now,
            rng: &mut self.rng,
            queue: &mut self.queue,
            effects,
        };

        for scheduled in due {
            // Stale work for a boss that is gone or no longer fighting is dropped.
            if scheduled.boss != ctx.boss.id || !ctx.boss.is_fighting() {
                debug!(
                    "dropping stale {:?} for {:?}",
                    scheduled.action, scheduled.boss
                );
                continue;
            }
            patterns::run_deferred(scheduled.action, &mut ctx);
        }

        let finished = step_phase(&mut ctx);

        let Some((id, score)) = finished else {
            return UpdateOutcome::default();
        };

        info!("{id:?} destroyed, awarding {score}");
        self.active = None;
        self.queue.cancel_boss(id);

        UpdateOutcome {
            destroyed: true,
            score_awarded: score,
        }
    }

    /// Damage from the collision system. Returns false when nothing was applied.
    ///
    /// hp saturates at `i32::MIN`, so a dying boss can keep soaking hits.
    pub fn apply_damage(&mut self, amount: u32) -> bool {
        let Some(boss) = self.active.as_mut() else {
            return false;
        };
        if boss.shield_active {
            return false;
        }

        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        boss.hp = boss.hp.saturating_sub(amount);

        if boss.hp <= 0 && boss.phase != BossPhase::Dying {
            debug!("{:?} hp {} -> dying", boss.id, boss.hp);
            boss.enter_phase(BossPhase::Dying);
        }

        true
    }

    /// Drop the boss without a reward (level end). Its queued actions go with it.
    pub fn clear(&mut self) {
        if let Some(boss) = self.active.take() {
            debug!("clearing {:?} without reward", boss.id);
            self.queue.cancel_boss(boss.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn boss(&self) -> Option<&BossInstance> {
        self.active.as_ref()
    }

    pub fn render_state(&self) -> Option<BossRenderState<'_>> {
        self.active.as_ref().map(BossRenderState::of)
    }

    pub fn pending_actions(&self) -> usize {
        self.queue.len()
    }

    #[cfg(test)]
    pub(crate) fn boss_mut(&mut self) -> Option<&mut BossInstance> {
        self.active.as_mut()
    }

    #[cfg(test)]
    pub(crate) fn queue_mut(&mut self) -> &mut DeferredQueue {
        &mut self.queue
    }
}

/// Step the boss's current phase. Returns `(id, score)` once the death animation is over.
fn step_phase(ctx: &mut PatternCtx<'_>) -> Option<(BossId, u32)> {
    match ctx.boss.phase {
        BossPhase::Entering => {
            let boss = &mut *ctx.boss;
            if boss.pos.y < boss.target_y {
                boss.pos.y = (boss.pos.y + ENTRY_SPEED).min(boss.target_y);
                boss.phase_timer += 1;
            } else {
                debug!("{:?} in position, fighting", boss.id);
                boss.enter_phase(BossPhase::Fighting);
            }
            None
        }
        BossPhase::Fighting => {
            update_movement(ctx);
            update_attacks(ctx);
            update_ambient(ctx);
            ctx.boss.phase_timer += 1;
            None
        }
        BossPhase::Dying => update_dying(ctx),
    }
}

fn update_movement(ctx: &mut PatternCtx<'_>) {
    let boss = &mut *ctx.boss;
    boss.teleport_cooldown = boss.teleport_cooldown.saturating_sub(1);

    let span = ctx.arena.width - boss.size.x;
    let rng = &mut *ctx.rng;
    let target_x = *boss.target_x.get_or_insert_with(|| rng.random::<f32>() * span);

    let dx = target_x - boss.pos.x;
    if dx.abs() > WANDER_ARRIVE_DIST {
        boss.pos.x += dx.signum() * boss.speed;
    } else {
        boss.target_x = Some(rng.random::<f32>() * span);
    }

    let dy = boss.target_y - boss.pos.y;
    if dy.abs() <= DIVE_SPEED {
        boss.pos.y = boss.target_y;
    } else {
        boss.pos.y += dy.signum() * DIVE_SPEED;
    }
}

fn update_attacks(ctx: &mut PatternCtx<'_>) {
    ctx.boss.attack_cooldown -= 1;
    if ctx.boss.attack_cooldown > 0 {
        return;
    }

    let pattern = ctx.boss.next_pattern();
    patterns::execute(pattern, ctx);

    ctx.boss.advance_pattern();
    ctx.boss.attack_cooldown = INITIAL_ATTACK_COOLDOWN + ctx.rng.random_range(0..COOLDOWN_JITTER);
}

fn update_ambient(ctx: &mut PatternCtx<'_>) {
    if ctx.rng.random_bool(TRAIL_CHANCE) {
        let x = ctx.boss.pos.x + ctx.rng.random::<f32>() * ctx.boss.size.x;
        let pos = Vec2::new(x, ctx.boss.bottom());
        ctx.effects.create_particle(pos, TRAIL_SIZE, ctx.boss.color);
    }

    ctx.boss.tick_warning_lines();
}

fn update_dying(ctx: &mut PatternCtx<'_>) -> Option<(BossId, u32)> {
    ctx.boss.phase_timer += 1;

    if ctx.boss.phase_timer % EXPLOSION_EVERY == 0 {
        let offset = Vec2::new(ctx.rng.random::<f32>(), ctx.rng.random::<f32>()) * ctx.boss.size;
        ctx.effects
            .create_particle(ctx.boss.pos + offset, EXPLOSION_SIZE, EXPLOSION_COLOR);
    }

    if ctx.boss.phase_timer > DEATH_FRAMES {
        let score = ctx.boss.max_hp.max(0) as u32 * SCORE_PER_MAX_HP;
        return Some((ctx.boss.id, score));
    }

    None
}
