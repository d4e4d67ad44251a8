//! Utilities for managing component storages.

use std::any::TypeId;
use std::collections::HashMap;

use super::{super::Entity, AnyStorage, Component, ComponentInfo, ComponentStorage};

/// Manager of all components of ECS.
#[derive(Default)]
#[repr(transparent)]
pub struct ComponentManager {
    storages: HashMap<TypeId, Box<dyn AnyStorage>>,
}

impl ComponentManager {
    /// Creates new component manager.
    pub fn new() -> Self {
        Self {
            storages: HashMap::new(),
        }
    }

    /// Registers component kind `T`, creating an empty storage for it.
    ///
    /// Registering the same kind twice is harmless and returns the same metadata.
    ///
    pub fn register<T>(&mut self) -> ComponentInfo
    where
        T: Component,
    {
        self.storage_entry::<T>().info()
    }

    /// Metadata of component kind `T`, if it was registered.
    pub fn info<T>(&self) -> Option<ComponentInfo>
    where
        T: Component,
    {
        self.get_storage::<T>().map(ComponentStorage::info)
    }

    /// Metadata of all registered component kinds.
    pub fn infos(&self) -> impl Iterator<Item = ComponentInfo> + '_ {
        self.storages.values().map(|storage| storage.info())
    }

    /// Inserts component of type `T` and attaches it to the entity.
    /// If component was already attached, it will be replaced by value.
    ///
    /// Returns previously attached component, if any.
    ///
    pub fn insert<T>(&mut self, entity: Entity, component: T) -> Option<T>
    where
        T: Component,
    {
        self.storage_entry().attach(entity, component)
    }

    /// Removes component of type `T` and detaches it from the entity.
    ///
    /// Returns component that was previously attached to the entity.
    ///
    pub fn remove<T>(&mut self, entity: Entity) -> Option<T>
    where
        T: Component,
    {
        let storage = self.get_storage_mut()?;
        storage.detach(entity)
    }

    /// Detaches components of every kind from the entity.
    ///
    /// Returns count of detached components.
    ///
    pub fn remove_all(&mut self, entity: Entity) -> usize {
        self.storages
            .values_mut()
            .map(|storage| storage.detach_any(entity))
            .filter(|&detached| detached)
            .count()
    }

    /// Returns `true` if component of type `T` was already attached to the entity.
    pub fn attached<T>(&self, entity: Entity) -> bool
    where
        T: Component,
    {
        self.get_storage::<T>()
            .map(|storage| storage.attached(entity))
            .unwrap_or(false)
    }

    /// Metadata of every component kind attached to the entity.
    pub fn attached_infos(&self, entity: Entity) -> Vec<ComponentInfo> {
        self.storages
            .values()
            .filter(|storage| storage.attached(entity))
            .map(|storage| storage.info())
            .collect()
    }

    /// Retrieves an immutable reference to component of type `T` attached to the entity.
    pub fn get<T>(&self, entity: Entity) -> Option<&T>
    where
        T: Component,
    {
        let storage = self.get_storage::<T>()?;
        storage.get(entity)
    }

    /// Retrieves a mutable reference to component of type `T` attached to the entity.
    pub fn get_mut<T>(&mut self, entity: Entity) -> Option<&mut T>
    where
        T: Component,
    {
        let storage = self.get_storage_mut::<T>()?;
        storage.get_mut(entity)
    }

    /// Storage of components of type `T`, if any component of this type was registered.
    pub fn get_storage<T>(&self) -> Option<&ComponentStorage<T>>
    where
        T: Component,
    {
        let typeid = TypeId::of::<T>();
        let boxed = self.storages.get(&typeid)?;
        boxed.as_any().downcast_ref()
    }

    /// Mutable storage of components of type `T`, if any component of this type was registered.
    pub fn get_storage_mut<T>(&mut self) -> Option<&mut ComponentStorage<T>>
    where
        T: Component,
    {
        let typeid = TypeId::of::<T>();
        let boxed = self.storages.get_mut(&typeid)?;
        boxed.as_any_mut().downcast_mut()
    }

    /// Storage of components of type `T`, created on first use.
    fn storage_entry<T>(&mut self) -> &mut ComponentStorage<T>
    where
        T: Component,
    {
        let typeid = TypeId::of::<T>();
        let boxed = self.storages.entry(typeid).or_insert_with(|| {
            log::trace!("creating storage for {}", std::any::type_name::<T>());
            Box::new(ComponentStorage::<T>::new()) as Box<dyn AnyStorage>
        });
        boxed
            .as_any_mut()
            .downcast_mut()
            .expect("storage is keyed by the type id of its components")
    }
}
