//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `bevy_boss_rush::game::configure_headless` to install gameplay plugins.

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

use bevy_boss_rush::common::tunables::Tunables;

pub fn app_headless() -> App {
    app_headless_with(Tunables::default())
}

/// Headless app whose boss randomness is reproducible.
pub fn app_headless_seeded(seed: u64) -> App {
    app_headless_with(Tunables {
        boss_seed: Some(seed),
        ..default()
    })
}

fn app_headless_with(tunables: Tunables) -> App {
    let mut app = App::new();

    // AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    // The core plugin keeps pre-inserted tunables.
    app.insert_resource(tunables);
    bevy_boss_rush::game::configure_headless(&mut app);
    app
}

/// Run one fixed simulation step without waiting on wall-clock time.
#[allow(dead_code)]
pub fn fixed_step(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
}
