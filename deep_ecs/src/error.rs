//! Error types of ECS.

use thiserror::Error;

use super::Entity;

/// Result of any ECS operation which can fail.
pub type Result<T> = std::result::Result<T, EcsError>;

/// Error that can happen while working with entities and their components.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum EcsError {
    #[error("entity {0:?} is unknown or was already destroyed")]
    InvalidEntity(Entity),
}
