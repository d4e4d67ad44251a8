//! Utilities for window handling of game engine.

use std::fmt;

use crate::config::WindowConfig;
use crate::graphics::{Color, Drawable, DrawablePanel, Framebuffer, Panel, RenderError, Size};
use crate::math::Mat2;

pub use self::present::{Headless, ImageSequence, Present, PresentError};

mod present;
mod tests;

/// Top-level panel which owns the presentation surface.
///
/// The surface is opened when the window is created and closed when it is dropped.
///
pub struct Window {
    title: String,
    surface: DrawablePanel<Framebuffer>,
    presenter: Box<dyn Present>,
    presented: u64,
}

impl Window {
    /// Creates a window and opens its presentation surface.
    pub fn new(config: &WindowConfig, mut presenter: Box<dyn Present>) -> Result<Self, PresentError> {
        presenter.open(&config.title, config.size)?;
        log::info!(
            r#"window "{}" of size {} was opened"#,
            config.title,
            config.size,
        );
        Ok(Self {
            title: config.title.clone(),
            surface: DrawablePanel::new(Framebuffer::new(config.size)),
            presenter,
            presented: 0,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Pixels of the current frame.
    pub fn framebuffer(&self) -> &Framebuffer {
        self.surface.inner()
    }

    pub fn set_basis(&mut self, basis: Mat2) {
        self.surface.set_basis(basis);
    }

    /// Attaches the drawable which is drawn over every frame, after the scene.
    pub fn add_drawable(&mut self, drawable: Drawable) {
        self.surface.add_drawable(drawable);
    }

    pub fn drawables(&self) -> &[Drawable] {
        self.surface.drawables()
    }

    /// Draws attached drawables onto the current frame.
    pub fn render_attached(&mut self) -> Result<usize, RenderError> {
        self.surface.render()
    }

    /// Hands the current frame over to the presentation surface.
    pub fn present(&mut self) -> Result<(), PresentError> {
        self.presenter.present(self.surface.inner().image())?;
        self.presented += 1;
        Ok(())
    }

    /// Count of frames presented by this window.
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl Panel for Window {
    fn size(&self) -> Size {
        self.surface.size()
    }

    fn blit(&mut self, color: Color, position: (i32, i32)) -> Result<(), RenderError> {
        self.surface.blit(color, position)
    }

    fn clear(&mut self, color: Color) {
        self.surface.clear(color)
    }

    fn basis(&self) -> Mat2 {
        self.surface.basis()
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        self.presenter.close();
        log::info!(
            r#"window "{}" was closed after {} frames"#,
            self.title,
            self.presented,
        );
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Window")
            .field("title", &self.title)
            .field("size", &self.surface.size())
            .field("presented", &self.presented)
            .finish()
    }
}
