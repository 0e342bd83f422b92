//! Test helpers.
//!
//! Systems run through `World::run_system_once` enqueue their `Commands`; we flush after each
//! run so spawns and inserts are visible to assertions.

use bevy::ecs::message::{Message, Messages};
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Make sure the message buffer for `M` exists so readers and writers can be built.
pub fn ensure_messages<M: Message>(world: &mut World) {
    if world.get_resource::<Messages<M>>().is_none() {
        world.init_resource::<Messages<M>>();
    }
}

/// Drain every buffered `M` without going through a reader.
pub fn drain_messages<M: Message>(world: &mut World) -> Vec<M> {
    world.resource_mut::<Messages<M>>().drain().collect()
}
