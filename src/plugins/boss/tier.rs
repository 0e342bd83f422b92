//! Boss tiers: one immutable template per difficulty step.

use bevy::prelude::*;

use super::patterns::AttackPattern;

/// Difficulty tier. Chosen purely from the level number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BossTier {
    Laser,
    Missile,
    Shield,
    Final,
}

/// Body silhouette the renderer draws for a tier.
///
/// Derived from tier identity so presentation never depends on display-name text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeCategory {
    Triangle,
    Hexagon,
    Circle,
    Fortress,
}

#[derive(Debug, Clone)]
pub struct BossTierTemplate {
    pub tier: BossTier,
    pub name: &'static str,
    pub max_hp: i32,
    pub size: Vec2,
    /// Horizontal wander speed, pixels per tick.
    pub speed: f32,
    pub color: Color,
    pub attack_patterns: &'static [AttackPattern],
}

const LASER_PATTERNS: &[AttackPattern] = &[
    AttackPattern::Laser,
    AttackPattern::Sweep,
    AttackPattern::Charge,
];

const MISSILE_PATTERNS: &[AttackPattern] = &[
    AttackPattern::Missile,
    AttackPattern::Barrage,
    AttackPattern::Homing,
];

const SHIELD_PATTERNS: &[AttackPattern] = &[
    AttackPattern::Shield,
    AttackPattern::Pulse,
    AttackPattern::Teleport,
];

const FINAL_PATTERNS: &[AttackPattern] = &[
    AttackPattern::Laser,
    AttackPattern::Missile,
    AttackPattern::Pulse,
    AttackPattern::Teleport,
    AttackPattern::Ultimate,
];

impl BossTier {
    pub const ALL: [BossTier; 4] = [Self::Laser, Self::Missile, Self::Shield, Self::Final];

    /// Step function of the level: 20+ final, 15+ shield, 10+ missile, otherwise laser.
    pub fn for_level(level: u32) -> Self {
        match level {
            20.. => Self::Final,
            15.. => Self::Shield,
            10.. => Self::Missile,
            _ => Self::Laser,
        }
    }

    pub fn shape(self) -> ShapeCategory {
        match self {
            Self::Laser => ShapeCategory::Triangle,
            Self::Missile => ShapeCategory::Hexagon,
            Self::Shield => ShapeCategory::Circle,
            Self::Final => ShapeCategory::Fortress,
        }
    }

    pub fn template(self) -> BossTierTemplate {
        match self {
            Self::Laser => BossTierTemplate {
                tier: self,
                name: "Laser Dreadnought",
                max_hp: 50,
                size: Vec2::new(120.0, 80.0),
                speed: 1.0,
                color: Color::srgb_u8(0xff, 0x00, 0x66),
                attack_patterns: LASER_PATTERNS,
            },
            Self::Missile => BossTierTemplate {
                tier: self,
                name: "Missile Cruiser",
                max_hp: 40,
                size: Vec2::new(100.0, 90.0),
                speed: 1.5,
                color: Color::srgb_u8(0xff, 0x66, 0x00),
                attack_patterns: MISSILE_PATTERNS,
            },
            Self::Shield => BossTierTemplate {
                tier: self,
                name: "Shield Titan",
                max_hp: 80,
                size: Vec2::new(140.0, 100.0),
                speed: 0.8,
                color: Color::srgb_u8(0x66, 0x00, 0xff),
                attack_patterns: SHIELD_PATTERNS,
            },
            Self::Final => BossTierTemplate {
                tier: self,
                name: "Death Star",
                max_hp: 150,
                size: Vec2::new(200.0, 150.0),
                speed: 0.5,
                color: Color::srgb_u8(0xff, 0x33, 0x33),
                attack_patterns: FINAL_PATTERNS,
            },
        }
    }
}
