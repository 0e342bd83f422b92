//! Core plugin: shared resources and global settings.
//!
//! Must be registered first: later plugins read `Tunables` while they build.

use crate::common::arena::Arena;
use crate::common::tunables::Tunables;
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    // A caller may pre-insert tunables (fixed seed, other arena size).
    if !app.world().contains_resource::<Tunables>() {
        app.insert_resource(Tunables::default());
    }

    let tunables = app.world().resource::<Tunables>().clone();
    app.insert_resource(Arena::from_tunables(&tunables));
    app.insert_resource(Time::<Fixed>::from_hz(tunables.ticks_per_second));
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));
}

#[cfg(test)]
mod tests;
