//! API for simple 2D game engine with a software renderer.

pub use app::{Core, SceneId, State};
pub use config::Config;
pub use error::{DError, Result};
pub use scene::{DrawableId, Scene, View};

pub use deep_ecs as ecs;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod graphics;
pub mod input;
pub mod math;
pub mod scene;
pub mod systems;
pub mod window;
