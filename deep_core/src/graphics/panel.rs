//! Draw targets of game engine.

use std::fmt;

use image::RgbaImage;

use crate::math::{Affine2, Mat2};

use super::color::{self, blend, Color};
use super::{Drawable, RenderError, Renderer};

/// Size of a panel in pixels.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Creates new size of panel.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if the pixel at given position is inside of the panel.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for Size {
    fn from(tuple: (u32, u32)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl From<Size> for (u32, u32) {
    fn from(size: Size) -> Self {
        (size.width, size.height)
    }
}

/// Objects of this trait are surfaces which drawables are drawn onto.
pub trait Panel {
    /// Size of the panel in pixels.
    fn size(&self) -> Size;

    /// Writes the color into the pixel at given position,
    /// blending it with the current content by its alpha.
    ///
    /// # Errors
    ///
    /// An error is returned if the position is outside of the panel.
    ///
    fn blit(&mut self, color: Color, position: (i32, i32)) -> Result<(), RenderError>;

    /// Fills the whole panel with the color.
    fn clear(&mut self, color: Color);

    /// Base vectors of the panel which map world space onto pixels.
    fn basis(&self) -> Mat2 {
        Mat2::identity()
    }
}

/// Panel which stores its pixels in memory.
pub struct Framebuffer {
    image: RgbaImage,
}

impl Framebuffer {
    /// Creates a black framebuffer of given size.
    pub fn new(size: Size) -> Self {
        let image = RgbaImage::from_pixel(size.width, size.height, color::to_rgba(color::black()));
        Self { image }
    }

    /// Color of the pixel, if it is inside of the framebuffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let size = self.size();
        if x >= size.width || y >= size.height {
            return None;
        }
        Some(color::from_rgba(*self.image.get_pixel(x, y)))
    }

    /// Underlying image of the framebuffer.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

impl Panel for Framebuffer {
    fn size(&self) -> Size {
        self.image.dimensions().into()
    }

    fn blit(&mut self, color: Color, position: (i32, i32)) -> Result<(), RenderError> {
        let (x, y) = position;
        let size = self.size();
        if !size.contains(x, y) {
            return Err(RenderError::OutOfBounds { x, y, size });
        }
        let (x, y) = (x as u32, y as u32);
        let destination = color::from_rgba(*self.image.get_pixel(x, y));
        self.image
            .put_pixel(x, y, color::to_rgba(blend(color, destination)));
        Ok(())
    }

    fn clear(&mut self, color: Color) {
        let rgba = color::to_rgba(color);
        for pixel in self.image.pixels_mut() {
            *pixel = rgba;
        }
    }
}

/// Panel with its own base vectors and drawables attached to it.
pub struct DrawablePanel<P>
where
    P: Panel,
{
    panel: P,
    basis: Mat2,
    drawables: Vec<Drawable>,
}

impl<P> DrawablePanel<P>
where
    P: Panel,
{
    /// Wraps the panel with identity base vectors.
    pub fn new(panel: P) -> Self {
        Self::with_basis(panel, Mat2::identity())
    }

    /// Wraps the panel with given base vectors `i` and `j`.
    pub fn with_basis(panel: P, basis: Mat2) -> Self {
        Self {
            panel,
            basis,
            drawables: Vec::new(),
        }
    }

    pub fn set_basis(&mut self, basis: Mat2) {
        self.basis = basis;
    }

    /// Attaches the drawable; drawables are drawn in order of attachment.
    pub fn add_drawable(&mut self, drawable: Drawable) {
        self.drawables.push(drawable);
    }

    pub fn drawable(&self, index: usize) -> Option<&Drawable> {
        self.drawables.get(index)
    }

    pub fn drawable_mut(&mut self, index: usize) -> Option<&mut Drawable> {
        self.drawables.get_mut(index)
    }

    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    /// Detaches all drawables.
    pub fn clear_drawables(&mut self) {
        self.drawables.clear();
    }

    /// Draws all visible attached drawables onto the wrapped panel.
    ///
    /// Returns count of drawn drawables.
    ///
    pub fn render(&mut self) -> Result<usize, RenderError> {
        let transform = Affine2::from_linear(self.basis);
        let items = self.drawables.iter().map(|drawable| (drawable, transform));
        Renderer::render_drawables(items, &mut self.panel)
    }

    pub fn inner(&self) -> &P {
        &self.panel
    }

    pub fn inner_mut(&mut self) -> &mut P {
        &mut self.panel
    }
}

impl<P> Panel for DrawablePanel<P>
where
    P: Panel,
{
    fn size(&self) -> Size {
        self.panel.size()
    }

    fn blit(&mut self, color: Color, position: (i32, i32)) -> Result<(), RenderError> {
        self.panel.blit(color, position)
    }

    fn clear(&mut self, color: Color) {
        self.panel.clear(color)
    }

    fn basis(&self) -> Mat2 {
        self.basis
    }
}
