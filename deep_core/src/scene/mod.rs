//! Scenes of game engine: entities with their drawables for one update/render cycle.

use std::fmt;

use deep_ecs::{DeltaTime, EcsError, Entity, System, World};

use crate::components::Transform;
use crate::graphics::Drawable;
use crate::math::{Affine2, Vec2};
use crate::systems::{AccelerationSystem, CollisionEvent, CollisionSystem, VelocitySystem};


/// Identifier of a drawable added to a [`Scene`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrawableId(u64);

/// 2D camera of a scene, mapping the world onto panels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct View {
    pub translation: Vec2,
    /// Counterclockwise rotation in degrees.
    pub rotation: f32,
    pub scale: Vec2,
}

impl View {
    pub fn transform(&self) -> Affine2 {
        Affine2::from_trs(self.translation, self.rotation, self.scale)
    }
}

impl Default for View {
    fn default() -> Self {
        Self {
            translation: Vec2::zero(),
            rotation: 0.0,
            scale: Vec2::one(),
        }
    }
}

/// Drawable which is ready to be rendered.
#[derive(Debug, Copy, Clone)]
pub struct RenderItem<'a> {
    pub id: DrawableId,
    /// Entity which owns the drawable, if any.
    pub owner: Option<Entity>,
    pub drawable: &'a Drawable,
    /// Maps geometry of the drawable into the world.
    pub model: Affine2,
}

struct Entry {
    id: DrawableId,
    owner: Option<Entity>,
    drawable: Drawable,
}

/// Set of entities and drawables which are updated and rendered together.
pub struct Scene {
    name: String,
    world: World,
    drawables: Vec<Entry>,
    next_drawable: u64,
    view: View,
    acceleration: AccelerationSystem,
    velocity: VelocitySystem,
    collision: CollisionSystem,
    systems: Vec<Box<dyn System>>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new<T>(name: T) -> Self
    where
        T: ToString,
    {
        Self {
            name: name.to_string(),
            world: World::new(),
            drawables: Vec::new(),
            next_drawable: 0,
            view: View::default(),
            acceleration: AccelerationSystem,
            velocity: VelocitySystem,
            collision: CollisionSystem::new(),
            systems: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entities of the scene with their components.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// Creates new entity placed at the origin.
    pub fn spawn(&mut self) -> Entity {
        let entity = self.world.create();
        self.world
            .attach(entity, Transform::default())
            .expect("entity was just created");
        entity
    }

    /// Destroys the entity with all of its components and drawables.
    ///
    /// # Errors
    ///
    /// An error is returned if the entity is unknown or was already destroyed.
    ///
    pub fn despawn(&mut self, entity: Entity) -> Result<(), EcsError> {
        self.world.destroy(entity)?;
        self.drawables.retain(|entry| entry.owner != Some(entity));
        Ok(())
    }

    /// Attaches the drawable to the entity: it moves with the transform of the entity
    /// and disappears when the entity is destroyed.
    pub fn attach_drawable(&mut self, entity: Entity, drawable: Drawable) -> Result<DrawableId, EcsError> {
        if !self.world.is_alive(entity) {
            return Err(EcsError::InvalidEntity(entity));
        }
        Ok(self.push(Some(entity), drawable))
    }

    /// Adds the drawable owned by the scene itself, placed in world coordinates.
    pub fn add_drawable(&mut self, drawable: Drawable) -> DrawableId {
        self.push(None, drawable)
    }

    pub fn remove_drawable(&mut self, id: DrawableId) -> Option<Drawable> {
        let index = self.drawables.iter().position(|entry| entry.id == id)?;
        Some(self.drawables.remove(index).drawable)
    }

    pub fn drawable(&self, id: DrawableId) -> Option<&Drawable> {
        self.entry(id).map(|entry| &entry.drawable)
    }

    pub fn drawable_mut(&mut self, id: DrawableId) -> Option<&mut Drawable> {
        self.drawables
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.drawable)
    }

    /// Entity which owns the drawable, if any.
    pub fn drawable_owner(&self, id: DrawableId) -> Option<Entity> {
        self.entry(id)?.owner
    }

    /// Count of drawables in the scene, hidden ones included.
    pub fn drawable_count(&self) -> usize {
        self.drawables.len()
    }

    /// Adds the system which will run on every update after the built-in ones.
    pub fn add_system(&mut self, system: Box<dyn System>) {
        log::debug!("system \"{}\" was added to scene \"{}\"", system.name(), self.name);
        self.systems.push(system);
    }

    /// Collision events of the last update.
    pub fn collision_events(&self) -> &[CollisionEvent] {
        self.collision.events()
    }

    /// Advances the scene by `delta_time`.
    ///
    /// Runs acceleration, velocity and collision systems, then all added systems in order.
    /// Drawables of entities destroyed meanwhile are dropped afterwards.
    ///
    pub fn update(&mut self, delta_time: DeltaTime) {
        let world = &mut self.world;
        self.acceleration.run(world, delta_time);
        self.velocity.run(world, delta_time);
        self.collision.run(world, delta_time);
        for system in &mut self.systems {
            system.run(world, delta_time);
        }
        // systems may destroy entities through the world only
        let world = &self.world;
        self.drawables.retain(|entry| match entry.owner {
            Some(owner) => world.is_alive(owner),
            None => true,
        });
    }

    /// Visible drawables of alive entities and of the scene itself, in insertion order.
    pub fn collect_drawables(&self) -> Vec<RenderItem<'_>> {
        self.drawables
            .iter()
            .filter(|entry| entry.drawable.is_visible())
            .filter_map(|entry| {
                let model = match entry.owner {
                    None => Affine2::identity(),
                    Some(owner) if self.world.is_alive(owner) => self
                        .world
                        .get::<Transform>(owner)
                        .map(Transform::affine)
                        .unwrap_or_default(),
                    Some(_) => return None,
                };
                Some(RenderItem {
                    id: entry.id,
                    owner: entry.owner,
                    drawable: &entry.drawable,
                    model,
                })
            })
            .collect()
    }

    fn push(&mut self, owner: Option<Entity>, drawable: Drawable) -> DrawableId {
        let id = DrawableId(self.next_drawable);
        self.next_drawable += 1;
        self.drawables.push(Entry {
            id,
            owner,
            drawable,
        });
        id
    }

    fn entry(&self, id: DrawableId) -> Option<&Entry> {
        self.drawables.iter().find(|entry| entry.id == id)
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("entities", &self.world.len())
            .field("drawables", &self.drawables.len())
            .field("systems", &self.systems.len())
            .finish()
    }
}
