//! Presentation is derived from facts.
//!
//! The encounter hands the renderer a snapshot; colour and shape decisions live here so the
//! drawing code only has to place primitives.

use bevy::prelude::*;

use super::instance::{BossInstance, BossPhase, WarningLine};
use super::tier::ShapeCategory;

/// Top of the health bar, arena space.
pub const HEALTH_BAR_Y: f32 = 50.0;
pub const HEALTH_BAR_SIZE: Vec2 = Vec2::new(300.0, 20.0);
/// Baseline of the boss name, arena space.
pub const NAME_Y: f32 = 30.0;
pub const SHADOW_OFFSET: Vec2 = Vec2::new(5.0, 5.0);
pub const SHIELD_RING_GAP: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthBarColor {
    Green,
    Yellow,
    Red,
}

impl HealthBarColor {
    /// Green above 60%, yellow above 30%, red otherwise.
    pub fn from_ratio(ratio: f32) -> Self {
        if ratio > 0.6 {
            Self::Green
        } else if ratio > 0.3 {
            Self::Yellow
        } else {
            Self::Red
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::Green => Color::srgb(0.0, 1.0, 0.0),
            Self::Yellow => Color::srgb(1.0, 1.0, 0.0),
            Self::Red => Color::srgb(1.0, 0.0, 0.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HealthBar {
    /// `hp / max_hp`, unclamped. Can go negative on the killing blow.
    pub ratio: f32,
    pub color: HealthBarColor,
    /// Literal `hp/max_hp`.
    pub label: String,
}

impl HealthBar {
    pub fn new(hp: i32, max_hp: i32) -> Self {
        let ratio = if max_hp > 0 { hp as f32 / max_hp as f32 } else { 0.0 };
        Self {
            ratio,
            color: HealthBarColor::from_ratio(ratio),
            label: format!("{hp}/{max_hp}"),
        }
    }

    /// Fill fraction for drawing.
    #[inline]
    pub fn fill(&self) -> f32 {
        self.ratio.clamp(0.0, 1.0)
    }
}

/// Per-frame drawable snapshot of the active boss.
#[derive(Clone, Debug)]
pub struct BossRenderState<'a> {
    pub name: &'static str,
    /// Top-left corner, arena space.
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
    pub shape: ShapeCategory,
    pub phase: BossPhase,
    pub shield_active: bool,
    pub warning_lines: &'a [WarningLine],
    pub health: HealthBar,
}

impl<'a> BossRenderState<'a> {
    pub fn of(boss: &'a BossInstance) -> Self {
        Self {
            name: boss.name,
            pos: boss.pos,
            size: boss.size,
            color: boss.color,
            shape: boss.tier.shape(),
            phase: boss.phase,
            shield_active: boss.shield_active,
            warning_lines: &boss.warning_lines,
            health: HealthBar::new(boss.hp, boss.max_hp),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Shadows are dropped once the hull starts breaking apart.
    #[inline]
    pub fn casts_shadow(&self) -> bool {
        self.phase != BossPhase::Dying
    }

    /// Radius of the shield ring, if one should be drawn.
    pub fn shield_ring_radius(&self) -> Option<f32> {
        self.shield_active
            .then(|| self.size.x * 0.5 + SHIELD_RING_GAP)
    }
}
