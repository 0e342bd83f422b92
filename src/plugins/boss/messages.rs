//! Messages crossing the boss boundary.
//!
//! Inbound: the game loop announces levels, the collision system reports hits.
//! Outbound: the game loop learns about a kill and its reward.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelAdvanced {
    pub level: u32,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BossDamaged {
    pub amount: u32,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BossDefeated {
    pub score: u32,
}
