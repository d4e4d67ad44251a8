//! Entity Component System (ECS) utilities for the Deep game engine.

pub use component::{AnyStorage, Component, ComponentInfo, ComponentStorage};
pub use entity::Entity;
pub use error::{EcsError, Result};
pub use system::{DeltaTime, System};
pub use world::World;

use component::ComponentManager;
use entity::EntityStorage;

pub mod component;
mod entity;
mod error;
mod system;
mod world;
