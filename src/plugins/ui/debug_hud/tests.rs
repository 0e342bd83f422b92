use bevy::prelude::*;

use crate::common::test_utils::{drain_messages, ensure_messages, run_system_once};
use crate::plugins::boss::{BossDamaged, BossDefeated, LevelAdvanced};

use super::{DEBUG_HIT, DemoProgress, demo_input, tally_score};

fn world() -> World {
    let mut world = World::new();
    world.init_resource::<DemoProgress>();
    ensure_messages::<LevelAdvanced>(&mut world);
    ensure_messages::<BossDamaged>(&mut world);
    ensure_messages::<BossDefeated>(&mut world);
    world
}

fn press(world: &mut World, key: KeyCode) {
    let mut input = ButtonInput::<KeyCode>::default();
    input.press(key);
    world.insert_resource(input);
}

#[test]
fn no_keyboard_is_a_no_op() {
    let mut world = world();
    run_system_once(&mut world, demo_input);

    assert_eq!(*world.resource::<DemoProgress>(), DemoProgress::default());
    assert!(drain_messages::<LevelAdvanced>(&mut world).is_empty());
}

#[test]
fn n_advances_the_level() {
    let mut world = world();
    world.resource_mut::<DemoProgress>().level = 4;

    press(&mut world, KeyCode::KeyN);
    run_system_once(&mut world, demo_input);

    assert_eq!(world.resource::<DemoProgress>().level, 5);
    assert_eq!(
        drain_messages::<LevelAdvanced>(&mut world),
        vec![LevelAdvanced { level: 5 }]
    );
    assert!(drain_messages::<BossDamaged>(&mut world).is_empty());
}

#[test]
fn space_hits_the_boss() {
    let mut world = world();

    press(&mut world, KeyCode::Space);
    run_system_once(&mut world, demo_input);

    assert_eq!(
        drain_messages::<BossDamaged>(&mut world),
        vec![BossDamaged { amount: DEBUG_HIT }]
    );
    assert_eq!(world.resource::<DemoProgress>().level, 0);
}

#[test]
fn kills_add_up() {
    let mut world = world();

    world.write_message(BossDefeated { score: 500 });
    world.write_message(BossDefeated { score: 1500 });
    run_system_once(&mut world, tally_score);

    assert_eq!(world.resource::<DemoProgress>().score, 2000);
}
