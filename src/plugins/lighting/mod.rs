//! Lighting plugin (Firefly) (render-only).
//!
//! One point light rides on the active boss, tinted with its hull colour. It is spawned with the
//! boss and removed with it.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::arena::Arena;
use crate::common::state::GameState;
use crate::plugins::boss::{BossEncounter, BossId};

const BOSS_LIGHT_RANGE: f32 = 450.0;

#[derive(Component)]
pub struct BossLight {
    pub id: BossId,
}

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(
        Update,
        sync_boss_light.run_if(in_state(GameState::InGame)),
    );
}

fn sync_boss_light(
    mut commands: Commands,
    encounter: Res<BossEncounter>,
    arena: Res<Arena>,
    mut q_light: Query<(Entity, &BossLight, &mut Transform)>,
) {
    let boss = encounter.boss();
    let mut lit = false;

    for (e, light, mut tf) in &mut q_light {
        match boss {
            Some(b) if b.id == light.id => {
                let p = arena.rect_center_to_world(b.pos, b.size);
                tf.translation.x = p.x;
                tf.translation.y = p.y;
                lit = true;
            }
            _ => commands.entity(e).despawn(),
        }
    }

    let Some(boss) = boss else {
        return;
    };
    if lit {
        return;
    }

    let p = arena.rect_center_to_world(boss.pos, boss.size);
    commands.spawn((
        Name::new("BossLight"),
        BossLight { id: boss.id },
        PointLight2d {
            color: boss.color,
            radius: BOSS_LIGHT_RANGE,
            ..default()
        },
        Transform::from_xyz(p.x, p.y, 10.0),
        DespawnOnExit(GameState::InGame),
    ));
}
