//! Utilities for different types of storages for **components** of ECS.

use std::any::Any;
use std::mem;

use slotmap::{HopSlotMap, SecondaryMap};

use super::{super::Entity, Component, ComponentID, ComponentInfo};

/// Storage for statically typed components of ECS.
pub struct ComponentStorage<T>
where
    T: Component,
{
    /// Components are actually stored here.
    components: HopSlotMap<ComponentID, T>,
    entity_to_component: SecondaryMap<Entity, ComponentID>,
    component_to_entity: SecondaryMap<ComponentID, Entity>,
}

impl<T> ComponentStorage<T>
where
    T: Component,
{
    /// Creates an empty component storage.
    pub fn new() -> Self {
        Self {
            components: HopSlotMap::with_key(),
            entity_to_component: SecondaryMap::new(),
            component_to_entity: SecondaryMap::new(),
        }
    }

    /// Metadata of components stored here.
    pub fn info(&self) -> ComponentInfo {
        ComponentInfo::of::<T>()
    }

    /// Attaches component to the entity.
    /// If component was already attached, it will be replaced by value.
    ///
    /// Returns previously attached component, if any.
    ///
    pub fn attach(&mut self, entity: Entity, component: T) -> Option<T> {
        if let Some(prev) = self.get_mut(entity) {
            return Some(mem::replace(prev, component));
        }
        let id = self.components.insert(component);
        self.component_to_entity.insert(id, entity);
        self.entity_to_component.insert(entity, id);
        None
    }

    /// Detaches component from the entity.
    ///
    /// Returns component that was previously attached to the entity.
    ///
    pub fn detach(&mut self, entity: Entity) -> Option<T> {
        let id = self.entity_to_component.remove(entity)?;
        self.component_to_entity.remove(id);
        self.components.remove(id)
    }

    /// Returns `true` if component was already attached to the entity.
    pub fn attached(&self, entity: Entity) -> bool {
        self.entity_to_component.contains_key(entity)
    }

    /// Retrieves an immutable reference to component attached to the entity.
    pub fn get(&self, entity: Entity) -> Option<&T> {
        let id = *self.entity_to_component.get(entity)?;
        self.components.get(id)
    }

    /// Retrieves a mutable reference to component attached to the entity.
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        let id = *self.entity_to_component.get(entity)?;
        self.components.get_mut(id)
    }

    /// Count of components in this storage.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if there is no components in this storage.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns immutable iterator over all components with their entities.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        let component_to_entity = &self.component_to_entity;
        self.components
            .iter()
            .map(move |(id, component)| (component_to_entity[id], component))
    }

    /// Returns mutable iterator over all components with their entities.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        let component_to_entity = &self.component_to_entity;
        self.components
            .iter_mut()
            .map(move |(id, component)| (component_to_entity[id], component))
    }

    /// Returns iterator over all entities which have component of this type.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entity_to_component.keys()
    }

    /// Returns immutable iterator over all components.
    pub fn components(&self) -> impl Iterator<Item = &T> {
        self.components.values()
    }

    /// Returns mutable iterator over all components.
    pub fn components_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.components.values_mut()
    }
}

impl<T> Default for ComponentStorage<T>
where
    T: Component,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Type-erased view of [`ComponentStorage`].
///
/// Allows to work with storages without knowing component types,
/// for example to detach all components of the destroyed entity.
///
pub trait AnyStorage: Any + Send + Sync {
    /// Metadata of components stored here.
    fn info(&self) -> ComponentInfo;

    /// Returns `true` if component was already attached to the entity.
    fn attached(&self, entity: Entity) -> bool;

    /// Detaches and drops component of the entity.
    /// Returns `true` if there was a component to detach.
    fn detach_any(&mut self, entity: Entity) -> bool;

    /// Count of components in the storage.
    fn len(&self) -> usize;

    /// Returns `true` if there is no components in the storage.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T> AnyStorage for ComponentStorage<T>
where
    T: Component,
{
    fn info(&self) -> ComponentInfo {
        ComponentStorage::info(self)
    }

    fn attached(&self, entity: Entity) -> bool {
        ComponentStorage::attached(self, entity)
    }

    fn detach_any(&mut self, entity: Entity) -> bool {
        self.detach(entity).is_some()
    }

    fn len(&self) -> usize {
        ComponentStorage::len(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
