//! The live boss: template identity plus mutable runtime state.

use bevy::prelude::*;

use super::patterns::AttackPattern;
use super::tier::{BossTier, BossTierTemplate};

/// Vertical hover line the boss returns to after entering or charging.
pub const HOVER_Y: f32 = 50.0;

/// Frames before the first attack after spawn.
pub const INITIAL_ATTACK_COOLDOWN: i32 = 120;

/// Generation number of a spawned boss.
///
/// Deferred actions remember the id they were scheduled for; an action whose id no longer
/// matches the active boss is stale and gets dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BossId(pub u32);

/// Lifecycle phase. Transitions only move forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BossPhase {
    Entering,
    Fighting,
    Dying,
}

/// Telegraph strip shown before the laser column fires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WarningLine {
    /// Center x of the strip.
    pub x: f32,
    /// Top edge of the strip.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Frames left before the strip disappears.
    pub timer: u32,
}

#[derive(Debug, Clone)]
pub struct BossInstance {
    pub id: BossId,
    pub tier: BossTier,
    pub name: &'static str,
    pub max_hp: i32,
    pub hp: i32,
    /// Top-left corner in arena space.
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub color: Color,
    pub attack_patterns: &'static [AttackPattern],

    pub target_x: Option<f32>,
    pub target_y: f32,
    pub phase: BossPhase,
    pub phase_timer: u32,
    pub attack_cooldown: i32,
    pub current_pattern: usize,
    pub shield_active: bool,
    pub teleport_cooldown: u32,
    pub warning_lines: Vec<WarningLine>,
}

impl BossInstance {
    /// Place a fresh boss centered horizontally, just above the top edge.
    pub fn from_template(id: BossId, template: &BossTierTemplate, arena_width: f32) -> Self {
        Self {
            id,
            tier: template.tier,
            name: template.name,
            max_hp: template.max_hp,
            hp: template.max_hp,
            pos: Vec2::new(arena_width * 0.5 - template.size.x * 0.5, -template.size.y),
            size: template.size,
            speed: template.speed,
            color: template.color,
            attack_patterns: template.attack_patterns,
            target_x: None,
            target_y: HOVER_Y,
            phase: BossPhase::Entering,
            phase_timer: 0,
            attack_cooldown: INITIAL_ATTACK_COOLDOWN,
            current_pattern: 0,
            shield_active: false,
            teleport_cooldown: 0,
            warning_lines: Vec::new(),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Midpoint of the bottom edge, where most projectiles leave the hull.
    #[inline]
    pub fn bottom_center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x * 0.5, self.pos.y + self.size.y)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn is_fighting(&self) -> bool {
        self.phase == BossPhase::Fighting
    }

    /// Pattern the dispatcher will fire next.
    #[inline]
    pub fn next_pattern(&self) -> AttackPattern {
        self.attack_patterns[self.current_pattern]
    }

    /// Advance the pattern cursor, wrapping at the end of the tier's list.
    #[inline]
    pub fn advance_pattern(&mut self) {
        self.current_pattern = (self.current_pattern + 1) % self.attack_patterns.len();
    }

    /// Switch phase and restart the phase clock.
    pub(super) fn enter_phase(&mut self, phase: BossPhase) {
        self.phase = phase;
        self.phase_timer = 0;
    }

    /// Count every warning line down one frame, dropping expired ones.
    pub(super) fn tick_warning_lines(&mut self) {
        self.warning_lines.retain_mut(|line| {
            line.timer = line.timer.saturating_sub(1);
            line.timer > 0
        });
    }
}
