//! Software graphics of game engine: drawables, panels and renderer.

pub use self::color::{blend, Color};
pub use self::drawable::{Draw, Drawable, Shape};
pub use self::error::RenderError;
pub use self::panel::{DrawablePanel, Framebuffer, Panel, Size};
pub use self::renderer::{FrameStats, Renderer};

pub mod color;

mod drawable;
mod error;
mod panel;
mod raster;
mod renderer;
mod tests;
