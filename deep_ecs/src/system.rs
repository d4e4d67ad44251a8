//! Utilities for *systems* in ECS.

use std::time::Duration;

use super::World;

/// Type which represents duration between two updates.
pub type DeltaTime = Duration;

/// Objects of this trait represent *system* of ECS.
///
/// Systems are executed once per update, in the order they were added.
///
pub trait System {
    /// Human readable name of the system, used for diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Handles state of the world for one update of `delta_time` length.
    fn run(&mut self, world: &mut World, delta_time: DeltaTime);
}

impl<F> System for F
where
    F: FnMut(&mut World, DeltaTime),
{
    fn name(&self) -> &str {
        "closure"
    }

    fn run(&mut self, world: &mut World, delta_time: DeltaTime) {
        self(world, delta_time)
    }
}
