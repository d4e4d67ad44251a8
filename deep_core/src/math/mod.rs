//! 2D math utilities: affine transforms and axis-aligned rectangles.

use std::ops::Mul;

pub use ultraviolet::{Mat2, Vec2};


/// Rotation matrix for counterclockwise rotation by `degrees`.
pub fn rotation(degrees: f32) -> Mat2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Mat2::new(Vec2::new(cos, sin), Vec2::new(-sin, cos))
}

/// Non-uniform scale matrix.
pub fn scale(scaling: Vec2) -> Mat2 {
    Mat2::new(Vec2::new(scaling.x, 0.0), Vec2::new(0.0, scaling.y))
}

/// Affine transform of 2D points: linear part followed by translation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine2 {
    pub linear: Mat2,
    pub translation: Vec2,
}

impl Affine2 {
    /// Transform which leaves every point in place.
    pub fn identity() -> Self {
        Self::new(Mat2::identity(), Vec2::zero())
    }

    pub fn new(linear: Mat2, translation: Vec2) -> Self {
        Self {
            linear,
            translation,
        }
    }

    /// Pure translation.
    pub fn from_translation(translation: Vec2) -> Self {
        Self::new(Mat2::identity(), translation)
    }

    /// Pure linear transform, e.g. base vectors of a panel.
    pub fn from_linear(linear: Mat2) -> Self {
        Self::new(linear, Vec2::zero())
    }

    /// Scales, then rotates (in degrees), then translates.
    pub fn from_trs(translation: Vec2, rotation_degrees: f32, scaling: Vec2) -> Self {
        Self::new(rotation(rotation_degrees) * scale(scaling), translation)
    }

    /// Applies this transform to the point.
    pub fn apply(&self, point: Vec2) -> Vec2 {
        self.linear * point + self.translation
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Composition: `(a * b).apply(p) == a.apply(b.apply(p))`.
impl Mul for Affine2 {
    type Output = Affine2;

    fn mul(self, rhs: Affine2) -> Self::Output {
        Affine2::new(
            self.linear * rhs.linear,
            self.linear * rhs.translation + self.translation,
        )
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn min(&self) -> Vec2 {
        self.position
    }

    pub fn max(&self) -> Vec2 {
        self.position + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Same rectangle moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.position + offset, self.size)
    }

    /// Returns `true` if the point lies inside of the rectangle (edges included).
    pub fn contains(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Returns `true` if the interiors of two rectangles overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
    }

    /// Overlapping area of two rectangles, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.overlaps(other) {
            return None;
        }
        let min = Vec2::new(
            self.min().x.max(other.min().x),
            self.min().y.max(other.min().y),
        );
        let max = Vec2::new(
            self.max().x.min(other.max().x),
            self.max().y.min(other.max().y),
        );
        Some(Rect::new(min, max - min))
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(Vec2::zero(), Vec2::zero())
    }
}
