//! Rasterization of primitives onto panels.
//!
//! Every primitive checks its whole footprint before writing anything,
//! so a failed draw leaves the panel untouched.

use crate::math::Vec2;

use super::{Color, Panel, RenderError};

/// Pixel which contains the point.
pub fn to_pixel(point: Vec2) -> (i32, i32) {
    (point.x.floor() as i32, point.y.floor() as i32)
}

fn check_bounds(panel: &dyn Panel, min: (i32, i32), max: (i32, i32)) -> Result<(), RenderError> {
    let size = panel.size();
    for &(x, y) in &[min, max] {
        if !size.contains(x, y) {
            return Err(RenderError::OutOfBounds { x, y, size });
        }
    }
    Ok(())
}

/// Draws a single pixel.
pub fn point(panel: &mut dyn Panel, position: Vec2, color: Color) -> Result<(), RenderError> {
    panel.blit(color, to_pixel(position))
}

/// Draws a line between two points using Bresenham's algorithm.
pub fn line(panel: &mut dyn Panel, from: Vec2, to: Vec2, color: Color) -> Result<(), RenderError> {
    let (x0, y0) = to_pixel(from);
    let (x1, y1) = to_pixel(to);
    check_bounds(&*panel, (x0.min(x1), y0.min(y1)), (x0.max(x1), y0.max(y1)))?;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        panel.blit(color, (x, y))?;
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    Ok(())
}

/// Fills a triangle, sampling pixel centers with edge functions.
///
/// Degenerate triangles (with zero area) draw nothing.
///
pub fn triangle(panel: &mut dyn Panel, vertices: [Vec2; 3], color: Color) -> Result<(), RenderError> {
    let [v0, v1, v2] = vertices;
    let min = to_pixel(Vec2::new(
        v0.x.min(v1.x).min(v2.x),
        v0.y.min(v1.y).min(v2.y),
    ));
    let max = to_pixel(Vec2::new(
        v0.x.max(v1.x).max(v2.x),
        v0.y.max(v1.y).max(v2.y),
    ));
    check_bounds(&*panel, min, max)?;

    let area = edge(v0, v1, v2);
    if area.abs() < f32::EPSILON {
        return Ok(());
    }

    const ERR: f32 = -1e-4;
    for y in min.1..=max.1 {
        for x in min.0..=max.0 {
            let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let w0 = edge(v1, v2, center) / area;
            let w1 = edge(v2, v0, center) / area;
            let w2 = 1.0 - w0 - w1;
            if w0 >= ERR && w1 >= ERR && w2 >= ERR {
                panel.blit(color, (x, y))?;
            }
        }
    }
    Ok(())
}

/// Doubled signed area of triangle `(a, b, c)`.
fn edge(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}
