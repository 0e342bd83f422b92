use bevy::prelude::*;
use crate::plugins::core;
use crate::common::arena::Arena;
use crate::common::tunables::Tunables;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
    assert_eq!(*app.world().resource::<Arena>(), Arena::new(800.0, 600.0));

    let step = app.world().resource::<Time<Fixed>>().timestep();
    assert!((step.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
}

#[test]
fn keeps_preinserted_tunables() {
    let mut app = App::new();
    app.insert_resource(Tunables {
        arena_width: 640.0,
        arena_height: 480.0,
        boss_seed: Some(7),
        ..default()
    });
    core::plugin(&mut app);

    assert_eq!(app.world().resource::<Tunables>().boss_seed, Some(7));
    assert_eq!(*app.world().resource::<Arena>(), Arena::new(640.0, 480.0));
}
