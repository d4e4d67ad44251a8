//! Utilities for *components* in ECS.

use std::any::{Any, TypeId};
use std::fmt;
use std::mem;

use slotmap::new_key_type;

pub use manager::*;
pub use storage::*;

mod manager;
mod storage;
mod tests;

/// Objects of this trait represent *component* of ECS.
///
/// Components should be just POD (plain old data).
///
pub trait Component: Any + Send + Sync {}

impl<T> Component for T where T: Any + Send + Sync {}

new_key_type! {
    /// Unique identifier of the *component* of ECS.
    struct ComponentID;
}

/// Metadata describing one kind of components.
///
/// Created once when the kind is registered and never changed afterwards.
///
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ComponentInfo {
    type_id: TypeId,
    name: &'static str,
    size: usize,
}

impl ComponentInfo {
    /// Creates metadata of component type `T`.
    pub fn of<T>() -> Self
    where
        T: Component,
    {
        Self {
            type_id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            size: mem::size_of::<T>(),
        }
    }

    /// Type tag of the component kind.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Fully qualified type name of the component kind.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Size of one component in bytes.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl fmt::Debug for ComponentInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ComponentInfo")
            .field("name", &self.name)
            .field("size", &self.size)
            .finish()
    }
}
