//! Attack pattern library.
//!
//! Every pattern is fire-and-forget: it emits projectiles through [`BossEffects`], mutates the
//! boss, or queues [`DeferredAction`]s that the encounter drains on a later tick. Positions are
//! read from the boss when an effect actually fires, so a delayed laser tracks the hull.

use bevy::prelude::*;
use rand::Rng;
use rand::rngs::SmallRng;

use crate::common::arena::Arena;
use crate::plugins::projectiles::messages::ProjectileKind;

use super::deferred::{DeferredAction, DeferredQueue};
use super::effects::BossEffects;
use super::instance::{BossInstance, HOVER_Y, WarningLine};

/// Boss timings are authored as frames at this rate.
pub const TICKS_PER_SECOND: u64 = 60;

pub const LASER_WARNING_FRAMES: u32 = 60;
pub const LASER_WARNING_WIDTH: f32 = 8.0;
pub const LASER_DELAY_MS: u64 = 1000;
pub const LASER_COLUMN_LEN: usize = 20;
pub const LASER_COLUMN_SPACING: f32 = 10.0;
pub const LASER_SPEED: f32 = 8.0;

pub const SWEEP_SPEED: f32 = 4.0;

pub const CHARGE_FLOOR_GAP: f32 = 100.0;
pub const CHARGE_DURATION_MS: u64 = 2000;

pub const MISSILE_COUNT: u64 = 5;
pub const MISSILE_STAGGER_MS: u64 = 200;
pub const MISSILE_FALL_SPEED: f32 = 3.0;
pub const MISSILE_DRIFT: f32 = 2.0;

pub const BARRAGE_COUNT: u32 = 12;
pub const BARRAGE_SPEED: f32 = 3.0;

pub const HOMING_SPEED: f32 = 2.0;

pub const SHIELD_DURATION_MS: u64 = 5000;

pub const PULSE_RADII: [u64; 4] = [50, 100, 150, 200];
pub const PULSE_RING_COUNT: u32 = 12;
pub const PULSE_SPEED: f32 = 2.0;

pub const TELEPORT_COOLDOWN: u32 = 300;
pub const TELEPORT_BAND: f32 = 100.0;

pub const ULTIMATE_PULSE_MS: u64 = 1000;
pub const ULTIMATE_BARRAGE_MS: u64 = 2000;

/// Named attack in a tier's rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttackPattern {
    Laser,
    Sweep,
    Charge,
    Missile,
    Barrage,
    Homing,
    Shield,
    Pulse,
    Teleport,
    Ultimate,
}

impl AttackPattern {
    pub fn name(self) -> &'static str {
        match self {
            Self::Laser => "laser",
            Self::Sweep => "sweep",
            Self::Charge => "charge",
            Self::Missile => "missile",
            Self::Barrage => "barrage",
            Self::Homing => "homing",
            Self::Shield => "shield",
            Self::Pulse => "pulse",
            Self::Teleport => "teleport",
            Self::Ultimate => "ultimate",
        }
    }
}

#[inline]
pub fn ms_to_ticks(ms: u64) -> u64 {
    ms * TICKS_PER_SECOND / 1000
}

/// Everything a pattern may touch while it runs.
pub(super) struct PatternCtx<'a> {
    pub boss: &'a mut BossInstance,
    pub arena: Arena,
    pub now: u64,
    pub rng: &'a mut SmallRng,
    pub queue: &'a mut DeferredQueue,
    pub effects: &'a mut dyn BossEffects,
}

impl PatternCtx<'_> {
    /// Run `action` after `ms`; zero-delay actions run right away.
    fn after(&mut self, ms: u64, action: DeferredAction) {
        let ticks = ms_to_ticks(ms);
        if ticks == 0 {
            run_deferred(action, self);
            return;
        }
        self.queue.schedule(self.now + ticks, self.boss.id, action);
    }

    fn fire(&mut self, pos: Vec2, vel: Vec2, kind: ProjectileKind) {
        self.effects.create_projectile(pos, vel, kind);
    }
}

/// Velocity for a shot `degrees` off straight down (positive swings toward +x).
#[inline]
fn downward(degrees: f32, speed: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.sin(), rad.cos()) * speed
}

pub(super) fn execute(pattern: AttackPattern, ctx: &mut PatternCtx<'_>) {
    debug!("boss {:?} runs pattern {}", ctx.boss.id, pattern.name());

    match pattern {
        AttackPattern::Laser => laser(ctx),
        AttackPattern::Sweep => sweep(ctx),
        AttackPattern::Charge => charge(ctx),
        AttackPattern::Missile => missile(ctx),
        AttackPattern::Barrage => barrage(ctx),
        AttackPattern::Homing => homing(ctx),
        AttackPattern::Shield => shield(ctx),
        AttackPattern::Pulse => pulse(ctx),
        AttackPattern::Teleport => teleport(ctx),
        AttackPattern::Ultimate => ultimate(ctx),
    }
}

/// Apply a deferred action. The caller has already checked the boss is still live.
pub(super) fn run_deferred(action: DeferredAction, ctx: &mut PatternCtx<'_>) {
    match action {
        DeferredAction::FireLaserColumn => fire_laser_column(ctx),
        DeferredAction::FireMissile => fire_missile(ctx),
        DeferredAction::FirePulseRing => fire_pulse_ring(ctx),
        DeferredAction::EndCharge => ctx.boss.target_y = HOVER_Y,
        DeferredAction::DropShield => ctx.boss.shield_active = false,
        DeferredAction::RunPattern(pattern) => execute(pattern, ctx),
    }
}

fn laser(ctx: &mut PatternCtx<'_>) {
    let origin = ctx.boss.bottom_center();
    ctx.boss.warning_lines.push(WarningLine {
        x: origin.x,
        y: origin.y,
        width: LASER_WARNING_WIDTH,
        height: ctx.arena.height,
        timer: LASER_WARNING_FRAMES,
    });
    ctx.after(LASER_DELAY_MS, DeferredAction::FireLaserColumn);
}

fn fire_laser_column(ctx: &mut PatternCtx<'_>) {
    let origin = ctx.boss.bottom_center();
    let x = origin.x - LASER_WARNING_WIDTH * 0.5;
    for i in 0..LASER_COLUMN_LEN {
        let y = origin.y + i as f32 * LASER_COLUMN_SPACING;
        ctx.fire(
            Vec2::new(x, y),
            Vec2::new(0.0, LASER_SPEED),
            ProjectileKind::BossLaser,
        );
    }
}

fn sweep(ctx: &mut PatternCtx<'_>) {
    let origin = ctx.boss.bottom_center();
    for step in 0..7 {
        let degrees = -45.0 + 15.0 * step as f32;
        ctx.fire(origin, downward(degrees, SWEEP_SPEED), ProjectileKind::BossSweep);
    }
}

fn charge(ctx: &mut PatternCtx<'_>) {
    ctx.boss.target_y = ctx.arena.height - CHARGE_FLOOR_GAP;
    ctx.after(CHARGE_DURATION_MS, DeferredAction::EndCharge);
}

fn missile(ctx: &mut PatternCtx<'_>) {
    for i in 0..MISSILE_COUNT {
        ctx.after(i * MISSILE_STAGGER_MS, DeferredAction::FireMissile);
    }
}

fn fire_missile(ctx: &mut PatternCtx<'_>) {
    let x = ctx.boss.pos.x + ctx.rng.random::<f32>() * ctx.boss.size.x;
    let y = ctx.boss.bottom();
    let vx = (ctx.rng.random::<f32>() * 2.0 - 1.0) * MISSILE_DRIFT;
    ctx.fire(
        Vec2::new(x, y),
        Vec2::new(vx, MISSILE_FALL_SPEED),
        ProjectileKind::BossMissile,
    );
}

fn barrage(ctx: &mut PatternCtx<'_>) {
    let origin = ctx.boss.bottom_center();
    let step = 360.0 / BARRAGE_COUNT as f32;
    for i in 0..BARRAGE_COUNT {
        ctx.fire(
            origin,
            downward(i as f32 * step, BARRAGE_SPEED),
            ProjectileKind::BossBarrage,
        );
    }
}

fn homing(ctx: &mut PatternCtx<'_>) {
    let origin = ctx.boss.bottom_center();
    ctx.fire(origin, Vec2::new(0.0, HOMING_SPEED), ProjectileKind::BossHoming);
}

fn shield(ctx: &mut PatternCtx<'_>) {
    ctx.boss.shield_active = true;
    ctx.after(SHIELD_DURATION_MS, DeferredAction::DropShield);
}

fn pulse(ctx: &mut PatternCtx<'_>) {
    // Larger rings leave later; the radius only sets the delay.
    for radius in PULSE_RADII {
        ctx.after((radius - PULSE_RADII[0]) * 10, DeferredAction::FirePulseRing);
    }
}

fn fire_pulse_ring(ctx: &mut PatternCtx<'_>) {
    let origin = ctx.boss.center();
    let step = 360.0 / PULSE_RING_COUNT as f32;
    for i in 0..PULSE_RING_COUNT {
        let rad = (i as f32 * step).to_radians();
        ctx.fire(
            origin,
            Vec2::new(rad.cos(), rad.sin()) * PULSE_SPEED,
            ProjectileKind::BossPulse,
        );
    }
}

fn teleport(ctx: &mut PatternCtx<'_>) {
    if ctx.boss.teleport_cooldown > 0 {
        return;
    }

    let x = ctx.rng.random::<f32>() * (ctx.arena.width - ctx.boss.size.x);
    let y = HOVER_Y + ctx.rng.random::<f32>() * TELEPORT_BAND;
    ctx.boss.pos = Vec2::new(x, y);
    // Hover at the new altitude instead of drifting back up.
    ctx.boss.target_y = y;
    ctx.boss.teleport_cooldown = TELEPORT_COOLDOWN;
}

fn ultimate(ctx: &mut PatternCtx<'_>) {
    laser(ctx);
    ctx.after(
        ULTIMATE_PULSE_MS,
        DeferredAction::RunPattern(AttackPattern::Pulse),
    );
    ctx.after(
        ULTIMATE_BARRAGE_MS,
        DeferredAction::RunPattern(AttackPattern::Barrage),
    );
}
