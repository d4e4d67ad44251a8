//! Built-in systems of game engine.

use std::collections::HashMap;

use deep_ecs::{DeltaTime, Entity, System, World};

use crate::components::{Acceleration, Collider, Transform, Velocity};
use crate::math::{Rect, Vec2};


/// Applies acceleration of entities to their velocity.
#[derive(Default, Debug)]
pub struct AccelerationSystem;

impl System for AccelerationSystem {
    fn name(&self) -> &str {
        "acceleration"
    }

    fn run(&mut self, world: &mut World, delta_time: DeltaTime) {
        let seconds = delta_time.as_secs_f32();
        let changes: Vec<_> = world
            .iter::<Acceleration>()
            .map(|(entity, acceleration)| (entity, acceleration.0 * seconds))
            .collect();
        for (entity, change) in changes {
            if let Some(velocity) = world.get_mut::<Velocity>(entity) {
                velocity.0 += change;
            }
        }
    }
}

/// Applies velocity of entities to their transform.
///
/// Entities with velocity but without transform get one at the origin
/// as soon as they actually move.
///
#[derive(Default, Debug)]
pub struct VelocitySystem;

impl System for VelocitySystem {
    fn name(&self) -> &str {
        "velocity"
    }

    fn run(&mut self, world: &mut World, delta_time: DeltaTime) {
        let seconds = delta_time.as_secs_f32();
        let moves: Vec<_> = world
            .iter::<Velocity>()
            .map(|(entity, velocity)| (entity, velocity.0 * seconds))
            .collect();
        for (entity, offset) in moves {
            match world.get_mut::<Transform>(entity) {
                Some(transform) => transform.translation += offset,
                None if offset == Vec2::zero() => (),
                None => {
                    let transform = Transform::from_translation(offset);
                    if let Err(error) = world.attach(entity, transform) {
                        log::warn!("cannot move entity: {}", error);
                    }
                }
            }
        }
    }
}

/// Event produced by [`CollisionSystem`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CollisionEvent {
    /// Colliders of two entities overlap during this update.
    Overlap {
        first: Entity,
        second: Entity,
        /// Overlapping area in world space.
        area: Rect,
        /// Vector from the center of the first collider to the center of the second one.
        direction: Vec2,
    },
    /// Colliders of two entities stopped overlapping during this update.
    Separated {
        first: Entity,
        second: Entity,
        direction: Vec2,
    },
}

/// Detects overlapping colliders of entities.
///
/// Overlap event is emitted on every update while colliders overlap,
/// separation event is emitted once when they stop overlapping.
///
#[derive(Default, Debug)]
pub struct CollisionSystem {
    contacts: HashMap<(Entity, Entity), Rect>,
    events: Vec<CollisionEvent>,
}

impl CollisionSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events of the last update.
    pub fn events(&self) -> &[CollisionEvent] {
        &self.events
    }

    /// Returns `true` if the colliders of two entities overlapped during the last update.
    pub fn in_contact(&self, first: Entity, second: Entity) -> bool {
        self.contacts.contains_key(&(first, second)) || self.contacts.contains_key(&(second, first))
    }
}

impl System for CollisionSystem {
    fn name(&self) -> &str {
        "collision"
    }

    fn run(&mut self, world: &mut World, _delta_time: DeltaTime) {
        self.events.clear();
        let has_collider = |entity: Entity| world.attached::<Collider>(entity);
        self.contacts
            .retain(|(first, second), _| has_collider(*first) && has_collider(*second));

        let colliders: Vec<_> = world
            .iter::<Collider>()
            .map(|(entity, collider)| {
                let bounds = collider.world_bounds(world.get::<Transform>(entity));
                (entity, bounds)
            })
            .collect();

        for (index, &(first, first_bounds)) in colliders.iter().enumerate() {
            for &(second, second_bounds) in &colliders[index + 1..] {
                let direction = second_bounds.center() - first_bounds.center();
                let key = if self.contacts.contains_key(&(second, first)) {
                    (second, first)
                } else {
                    (first, second)
                };
                match first_bounds.intersection(&second_bounds) {
                    Some(area) => {
                        if self.contacts.insert(key, area).is_none() {
                            log::debug!("{:?} and {:?} collided", first, second);
                        }
                        self.events.push(CollisionEvent::Overlap {
                            first,
                            second,
                            area,
                            direction,
                        });
                    }
                    None => {
                        if self.contacts.remove(&key).is_some() {
                            log::debug!("{:?} and {:?} separated", first, second);
                            self.events.push(CollisionEvent::Separated {
                                first,
                                second,
                                direction,
                            });
                        }
                    }
                }
            }
        }
    }
}
