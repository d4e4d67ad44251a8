//! Renderable geometry of game engine.

use crate::math::{rotation, Affine2, Vec2};

use super::{color, raster, Color, Panel, RenderError};

/// Objects of this trait can be drawn onto a [`Panel`].
pub trait Draw {
    /// Draws the object onto the target, mapping its geometry with the transform.
    ///
    /// Writes only to the target; an out-of-bounds draw writes nothing.
    ///
    fn draw(&self, target: &mut dyn Panel, transform: &Affine2) -> Result<(), RenderError>;
}

/// Kind of geometry of a drawable.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape {
    /// Single point.
    Pixel { position: Vec2 },
    /// Segment between two endpoints.
    Line { from: Vec2, to: Vec2 },
    /// Filled triangle.
    Triangle { vertices: [Vec2; 3] },
}

impl Shape {
    /// Equilateral triangle around `center` with vertices at `radius` from it.
    ///
    /// The first vertex lies straight below the center (positive `y`).
    ///
    pub fn equilateral(center: Vec2, radius: f32) -> Self {
        let top = Vec2::new(0.0, radius);
        let vertices = [
            center + top,
            center + rotation(120.0) * top,
            center + rotation(240.0) * top,
        ];
        Shape::Triangle { vertices }
    }

    /// Points which define the geometry.
    pub fn points(&self) -> Vec<Vec2> {
        match *self {
            Shape::Pixel { position } => vec![position],
            Shape::Line { from, to } => vec![from, to],
            Shape::Triangle { vertices } => vertices.to_vec(),
        }
    }

    /// Area of the shape; only triangles have one.
    pub fn area(&self) -> f32 {
        match *self {
            Shape::Triangle { vertices: [a, b, c] } => {
                let (ab, bc, ca) = ((b - a).mag(), (c - b).mag(), (a - c).mag());
                let p = (ab + bc + ca) / 2.0;
                (p * (p - ab) * (p - bc) * (p - ca)).max(0.0).sqrt()
            }
            _ => 0.0,
        }
    }

    /// Interior angles of a triangle in degrees, at each vertex in order.
    pub fn angles(&self) -> Option<[f32; 3]> {
        match *self {
            Shape::Triangle { vertices: [a, b, c] } => {
                let angle = |at: Vec2, p: Vec2, q: Vec2| {
                    let (u, v) = (p - at, q - at);
                    let cos = u.dot(v) / (u.mag() * v.mag());
                    cos.clamp(-1.0, 1.0).acos().to_degrees()
                };
                Some([angle(a, b, c), angle(b, c, a), angle(c, a, b)])
            }
            _ => None,
        }
    }
}

/// Unit of renderable geometry with optional color.
///
/// Drawable without color is drawn with [`color::default_color`].
///
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Drawable {
    shape: Shape,
    color: Option<Color>,
    visible: bool,
}

impl Drawable {
    /// Creates visible drawable without color.
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            color: None,
            visible: true,
        }
    }

    pub fn pixel(position: Vec2) -> Self {
        Self::new(Shape::Pixel { position })
    }

    pub fn line(from: Vec2, to: Vec2) -> Self {
        Self::new(Shape::Line { from, to })
    }

    pub fn triangle(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self::new(Shape::Triangle {
            vertices: [a, b, c],
        })
    }

    /// Same drawable filled with the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Same drawable, but hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Own color of the drawable, if any.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Color which the drawable is drawn with.
    pub fn effective_color(&self) -> Color {
        self.color.unwrap_or_else(color::default_color)
    }

    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Draw for Drawable {
    fn draw(&self, target: &mut dyn Panel, transform: &Affine2) -> Result<(), RenderError> {
        let color = self.effective_color();
        match self.shape {
            Shape::Pixel { position } => raster::point(target, transform.apply(position), color),
            Shape::Line { from, to } => {
                raster::line(target, transform.apply(from), transform.apply(to), color)
            }
            Shape::Triangle { vertices } => {
                raster::triangle(target, vertices.map(|v| transform.apply(v)), color)
            }
        }
    }
}
