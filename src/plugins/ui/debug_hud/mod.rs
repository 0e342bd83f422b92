//! Debug HUD and demo driver.
//!
//! Stands in for the real game loop while there is no level progression:
//! - `N` advances the level (writes `LevelAdvanced`)
//! - `Space` deals a fixed hit to the boss (writes `BossDamaged`)
//! - kill rewards from `BossDefeated` are summed into the running score
//!
//! The input and score systems are headless-safe. The on-screen label is registered separately
//! by `render_plugin`.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::arena::Arena;
use crate::common::state::GameState;
use crate::plugins::boss::{self, BossDamaged, BossDefeated, BossEncounter, LevelAdvanced};

/// Damage dealt by one `Space` press.
pub const DEBUG_HIT: u32 = 10;

#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoProgress {
    pub level: u32,
    pub score: u64,
}

#[derive(Component)]
struct DebugHudText;

pub fn plugin(app: &mut App) {
    app.init_resource::<DemoProgress>();

    app.add_systems(
        Update,
        demo_input.run_if(in_state(GameState::InGame)),
    );
    app.add_systems(
        FixedUpdate,
        tally_score
            .after(boss::systems::tick_boss_encounter)
            .run_if(in_state(GameState::InGame)),
    );
}

/// Render-only half: the text label.
pub fn render_plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud_text)
        .add_systems(
            Update,
            update_hud_text.run_if(in_state(GameState::InGame)),
        );
}

pub fn demo_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut progress: ResMut<DemoProgress>,
    mut levels: MessageWriter<LevelAdvanced>,
    mut hits: MessageWriter<BossDamaged>,
) {
    let Some(keys) = keys else { return; };

    if keys.just_pressed(KeyCode::KeyN) {
        progress.level += 1;
        debug!("debug: advancing to level {}", progress.level);
        levels.write(LevelAdvanced {
            level: progress.level,
        });
    }

    if keys.just_pressed(KeyCode::Space) {
        hits.write(BossDamaged { amount: DEBUG_HIT });
    }
}

pub fn tally_score(mut defeated: MessageReader<BossDefeated>, mut progress: ResMut<DemoProgress>) {
    for kill in defeated.read() {
        progress.score += u64::from(kill.score);
        info!("boss defeated: +{} (total {})", kill.score, progress.score);
    }
}

fn spawn_hud_text(mut commands: Commands, arena: Res<Arena>) {
    let top_left = arena.to_world(Vec2::new(90.0, 20.0));
    commands.spawn((
        Name::new("DebugHud"),
        DebugHudText,
        Text2d::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.8, 0.85)),
        Transform::from_translation(top_left.extend(60.0)),
        DespawnOnExit(GameState::InGame),
    ));
}

fn update_hud_text(
    progress: Res<DemoProgress>,
    encounter: Res<BossEncounter>,
    mut q: Query<&mut Text2d, With<DebugHudText>>,
) {
    let boss = if encounter.is_active() { "boss" } else { "-" };
    let text = format!(
        "level {}  score {}  [{}]",
        progress.level, progress.score, boss
    );

    for mut label in &mut q {
        if label.0 != text {
            label.0 = text.clone();
        }
    }
}

#[cfg(test)]
mod tests;
