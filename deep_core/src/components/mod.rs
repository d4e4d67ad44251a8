//! Components provided by game engine.

use crate::math::{Affine2, Rect, Vec2};


/// Position, scale and rotation of an entity in the world.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub translation: Vec2,
    pub scaling: Vec2,
    /// Counterclockwise rotation in degrees.
    pub rotation: f32,
}

impl Transform {
    pub fn new(translation: Vec2, scaling: Vec2, rotation: f32) -> Self {
        Self {
            translation,
            scaling,
            rotation,
        }
    }

    /// Transform placed at the point without scaling or rotation.
    pub fn from_translation(translation: Vec2) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    /// Model transform which maps local geometry into the world.
    pub fn affine(&self) -> Affine2 {
        Affine2::from_trs(self.translation, self.rotation, self.scaling)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vec2::zero(), Vec2::one(), 0.0)
    }
}

/// Change of translation per second.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Velocity(pub Vec2);

impl Velocity {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self(Vec2::new(dx, dy))
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Self(Vec2::zero())
    }
}

/// Change of velocity per second.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Acceleration(pub Vec2);

impl Acceleration {
    pub fn new(ddx: f32, ddy: f32) -> Self {
        Self(Vec2::new(ddx, ddy))
    }
}

impl Default for Acceleration {
    fn default() -> Self {
        Self(Vec2::zero())
    }
}

/// Axis-aligned collision box, relative to the translation of the entity.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Collider {
    pub bounds: Rect,
}

impl Collider {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }

    /// Collision box in world space for the entity with given transform.
    pub fn world_bounds(&self, transform: Option<&Transform>) -> Rect {
        match transform {
            Some(transform) => self.bounds.translated(transform.translation),
            None => self.bounds,
        }
    }
}

/// Health points of an entity.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Health {
    current: u32,
    max: u32,
}

impl Health {
    /// Creates health with `current` points, which cannot be greater than `max`.
    pub fn new(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    /// Full health of `max` points.
    pub fn full(max: u32) -> Self {
        Self::new(max, max)
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Removes points; health never goes below zero.
    pub fn damage(&mut self, points: u32) {
        self.current = self.current.saturating_sub(points);
    }

    /// Restores points; health never goes above maximum.
    pub fn heal(&mut self, points: u32) {
        self.current = self.current.saturating_add(points).min(self.max);
    }

    pub fn is_dead(&self) -> bool {
        self.current == 0
    }
}
