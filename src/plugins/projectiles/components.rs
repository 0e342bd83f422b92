use bevy::prelude::*;

use super::messages::ProjectileKind;

#[derive(Component)]
pub struct PooledProjectile;

/// Entity known to carry the pooled projectile components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectileEntity(pub Entity);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectileState {
    #[default]
    Inactive,
    Active,
    /// Set by whoever is done with the projectile (bounds check, collision system);
    /// the commit step recycles it.
    PendingReturn,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projectile {
    pub kind: ProjectileKind,
}
