//! Utilities for storage of ECS.

use super::{
    Component, ComponentInfo, ComponentManager, ComponentStorage, EcsError, Entity, EntityStorage,
    Result,
};

mod tests;

/// Storage for entities and their components: the entity registry of ECS.
///
/// Every operation on a destroyed or unknown entity fails
/// with [`EcsError::InvalidEntity`] and changes nothing.
///
#[derive(Default)]
pub struct World {
    /// Storage for all entities.
    entities: EntityStorage,
    /// Map with typeid of components and their storages.
    component_manager: ComponentManager,
}

impl World {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self {
            entities: EntityStorage::with_key(),
            component_manager: ComponentManager::new(),
        }
    }

    /// Creates new entity without any components.
    pub fn create(&mut self) -> Entity {
        let entity = self.entities.insert(());
        log::trace!("entity {:?} was created", entity);
        entity
    }

    /// Destroys the entity, detaching all of its components.
    ///
    /// # Errors
    ///
    /// An error is returned if the entity is unknown or was already destroyed.
    ///
    pub fn destroy(&mut self, entity: Entity) -> Result<()> {
        self.check(entity)?;
        let detached = self.component_manager.remove_all(entity);
        self.entities.remove(entity);
        log::trace!(
            "entity {:?} was destroyed with {} components",
            entity,
            detached,
        );
        Ok(())
    }

    /// Destroys all entities of this world.
    pub fn clear(&mut self) {
        let entities: Vec<_> = self.entities.keys().collect();
        for entity in entities {
            self.component_manager.remove_all(entity);
        }
        self.entities.clear();
    }

    /// Returns `true` if the entity was created and not destroyed yet.
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.contains_key(entity)
    }

    /// Count of alive entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if there is no alive entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns iterator over all alive entities.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.keys()
    }

    /// Registers component kind `T` and returns its metadata.
    pub fn register<T>(&mut self) -> ComponentInfo
    where
        T: Component,
    {
        self.component_manager.register::<T>()
    }

    /// Metadata of component kind `T`, if it was registered or attached at least once.
    pub fn component_info<T>(&self) -> Option<ComponentInfo>
    where
        T: Component,
    {
        self.component_manager.info::<T>()
    }

    /// Metadata of all component kinds attached to the entity.
    pub fn components_of(&self, entity: Entity) -> Result<Vec<ComponentInfo>> {
        self.check(entity)?;
        Ok(self.component_manager.attached_infos(entity))
    }

    /// Attaches component to the entity.
    /// If component of the same type was already attached, it will be replaced by value.
    ///
    /// Returns previously attached component, if any.
    ///
    pub fn attach<T>(&mut self, entity: Entity, component: T) -> Result<Option<T>>
    where
        T: Component,
    {
        self.check(entity)?;
        Ok(self.component_manager.insert(entity, component))
    }

    /// Detaches component of type `T` from the entity.
    ///
    /// Returns component that was previously attached to the entity.
    ///
    pub fn detach<T>(&mut self, entity: Entity) -> Result<Option<T>>
    where
        T: Component,
    {
        self.check(entity)?;
        Ok(self.component_manager.remove(entity))
    }

    /// Returns `true` if component of type `T` is attached to the entity.
    pub fn attached<T>(&self, entity: Entity) -> bool
    where
        T: Component,
    {
        self.component_manager.attached::<T>(entity)
    }

    /// Retrieves an immutable reference to component of type `T` attached to the entity.
    pub fn get<T>(&self, entity: Entity) -> Option<&T>
    where
        T: Component,
    {
        self.component_manager.get(entity)
    }

    /// Retrieves a mutable reference to component of type `T` attached to the entity.
    pub fn get_mut<T>(&mut self, entity: Entity) -> Option<&mut T>
    where
        T: Component,
    {
        self.component_manager.get_mut(entity)
    }

    /// Storage of components of type `T`, if any.
    pub fn storage<T>(&self) -> Option<&ComponentStorage<T>>
    where
        T: Component,
    {
        self.component_manager.get_storage()
    }

    /// Mutable storage of components of type `T`, if any.
    pub fn storage_mut<T>(&mut self) -> Option<&mut ComponentStorage<T>>
    where
        T: Component,
    {
        self.component_manager.get_storage_mut()
    }

    /// Returns iterator over all components of type `T` with their entities.
    ///
    /// Iterator is empty if no component of this type was attached yet.
    ///
    pub fn iter<T>(&self) -> impl Iterator<Item = (Entity, &T)>
    where
        T: Component,
    {
        self.storage::<T>().into_iter().flat_map(ComponentStorage::iter)
    }

    fn check(&self, entity: Entity) -> Result<()> {
        if self.is_alive(entity) {
            Ok(())
        } else {
            Err(EcsError::InvalidEntity(entity))
        }
    }
}
