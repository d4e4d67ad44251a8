//! Error types of graphics of game engine.

use thiserror::Error;

use crate::window::PresentError;

use super::Size;

/// Error that can happen while rendering a frame.
///
/// Any such error aborts the rest of the frame.
///
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("draw at ({x}, {y}) is out of bounds of {size} panel")]
    OutOfBounds { x: i32, y: i32, size: Size },

    #[error("failed to present frame: {0}")]
    Present(#[from] PresentError),
}
