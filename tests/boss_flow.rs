//! End-to-end boss flow through the headless app: level message in, projectiles out, reward in
//! the score.

mod common;

use bevy::prelude::*;
use bevy_boss_rush::plugins::boss::{
    BossDamaged, BossEncounter, BossPhase, BossTier, LevelAdvanced,
};
use bevy_boss_rush::plugins::projectiles::components::{PooledProjectile, ProjectileState};
use bevy_boss_rush::plugins::ui::debug_hud::DemoProgress;

fn booted() -> App {
    let mut app = common::app_headless_seeded(42);
    // Startup: projectile pool.
    app.update();
    app
}

fn active_projectiles(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<&ProjectileState, With<PooledProjectile>>()
        .iter(app.world())
        .filter(|s| **s == ProjectileState::Active)
        .count()
}

fn encounter(app: &App) -> &BossEncounter {
    app.world().resource::<BossEncounter>()
}

#[test]
fn only_fifth_levels_bring_a_boss() {
    let mut app = booted();

    app.world_mut().write_message(LevelAdvanced { level: 4 });
    common::fixed_step(&mut app);
    assert!(!encounter(&app).is_active());

    app.world_mut().write_message(LevelAdvanced { level: 5 });
    common::fixed_step(&mut app);

    let boss = encounter(&app).boss().expect("boss on level 5");
    assert_eq!(boss.tier, BossTier::Laser);
    assert_eq!(boss.phase, BossPhase::Entering);
}

#[test]
fn boss_fires_through_the_pool_and_pays_out() {
    let mut app = booted();

    app.world_mut().write_message(LevelAdvanced { level: 5 });
    common::fixed_step(&mut app);

    let mut ticks = 0;
    while active_projectiles(&mut app) == 0 {
        common::fixed_step(&mut app);
        ticks += 1;
        assert!(ticks < 600, "boss never fired");
    }
    assert_eq!(encounter(&app).boss().unwrap().phase, BossPhase::Fighting);

    for _ in 0..5 {
        app.world_mut().write_message(BossDamaged { amount: 10 });
    }
    common::fixed_step(&mut app);
    assert_eq!(encounter(&app).boss().unwrap().phase, BossPhase::Dying);

    for _ in 0..60 {
        common::fixed_step(&mut app);
    }

    assert!(!encounter(&app).is_active());
    assert_eq!(app.world().resource::<DemoProgress>().score, 500);
}
