#![cfg(test)]

use crate::math::{scale, Affine2, Mat2, Vec2};
use crate::scene::Scene;

use super::color::{black, white};
use super::*;

/// Panel which records every blit instead of storing pixels.
struct RecordingPanel {
    size: Size,
    blits: Vec<(i32, i32)>,
}

impl RecordingPanel {
    fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            blits: Vec::new(),
        }
    }
}

impl Panel for RecordingPanel {
    fn size(&self) -> Size {
        self.size
    }

    fn blit(&mut self, _color: Color, position: (i32, i32)) -> Result<(), RenderError> {
        let (x, y) = position;
        if !self.size.contains(x, y) {
            return Err(RenderError::OutOfBounds { x, y, size: self.size });
        }
        self.blits.push(position);
        Ok(())
    }

    fn clear(&mut self, _color: Color) {
        self.blits.clear();
    }
}

fn filled(framebuffer: &Framebuffer) -> Vec<(u32, u32)> {
    let size = framebuffer.size();
    let mut pixels = Vec::new();
    for y in 0..size.height {
        for x in 0..size.width {
            if framebuffer.pixel(x, y) != Some(black()) {
                pixels.push((x, y));
            }
        }
    }
    pixels
}

#[test]
fn test_pixel_is_floored() {
    let mut framebuffer = Framebuffer::new(Size::new(4, 4));
    Drawable::pixel(Vec2::new(1.5, 2.7))
        .draw(&mut framebuffer, &Affine2::identity())
        .unwrap();
    assert_eq!(filled(&framebuffer), [(1, 2)]);
    assert_eq!(framebuffer.pixel(1, 2), Some(white()));
}

#[test]
fn test_colored_pixel() {
    let mut framebuffer = Framebuffer::new(Size::new(2, 2));
    let green = Color::new(0, 255, 0, 255);
    Drawable::pixel(Vec2::zero())
        .with_color(green)
        .draw(&mut framebuffer, &Affine2::identity())
        .unwrap();
    assert_eq!(framebuffer.pixel(0, 0), Some(green));
}

#[test]
fn test_line_pixels() {
    let mut framebuffer = Framebuffer::new(Size::new(4, 4));
    let line = Drawable::line(Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0));
    line.draw(&mut framebuffer, &Affine2::identity()).unwrap();
    assert_eq!(filled(&framebuffer), [(0, 0), (1, 0), (2, 0), (3, 0)]);

    framebuffer.clear(black());
    let diagonal = Drawable::line(Vec2::new(3.0, 3.0), Vec2::new(0.0, 0.0));
    diagonal.draw(&mut framebuffer, &Affine2::identity()).unwrap();
    assert_eq!(filled(&framebuffer), [(0, 0), (1, 1), (2, 2), (3, 3)]);
}

#[test]
fn test_triangle_is_filled() {
    let vertices = [
        Vec2::new(0.0, 0.0),
        Vec2::new(4.0, 0.0),
        Vec2::new(0.0, 4.0),
    ];
    let [a, b, c] = vertices;
    for triangle in [Drawable::triangle(a, b, c), Drawable::triangle(a, c, b)] {
        let mut framebuffer = Framebuffer::new(Size::new(5, 5));
        triangle.draw(&mut framebuffer, &Affine2::identity()).unwrap();
        let pixels = filled(&framebuffer);
        assert!(pixels.contains(&(0, 0)));
        assert!(pixels.contains(&(1, 1)));
        assert!(pixels.contains(&(3, 0)));
        assert!(!pixels.contains(&(3, 3)));
        assert!(!pixels.contains(&(4, 4)));
    }
}

#[test]
fn test_degenerate_triangle_draws_nothing() {
    let mut framebuffer = Framebuffer::new(Size::new(4, 4));
    let triangle = Drawable::triangle(
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(2.0, 2.0),
    );
    triangle.draw(&mut framebuffer, &Affine2::identity()).unwrap();
    assert!(filled(&framebuffer).is_empty());
}

#[test]
fn test_out_of_bounds_draw_writes_nothing() {
    let mut framebuffer = Framebuffer::new(Size::new(4, 4));
    let error = Drawable::pixel(Vec2::new(-1.0, 0.0))
        .draw(&mut framebuffer, &Affine2::identity())
        .unwrap_err();
    assert!(matches!(error, RenderError::OutOfBounds { x: -1, y: 0, .. }));

    let line = Drawable::line(Vec2::new(1.0, 1.0), Vec2::new(10.0, 1.0));
    assert!(line.draw(&mut framebuffer, &Affine2::identity()).is_err());

    let triangle = Drawable::triangle(
        Vec2::new(0.0, 0.0),
        Vec2::new(8.0, 0.0),
        Vec2::new(0.0, 2.0),
    );
    assert!(triangle.draw(&mut framebuffer, &Affine2::identity()).is_err());
    assert!(filled(&framebuffer).is_empty());
}

#[test]
fn test_alpha_blending() {
    let half_red = Color::new(255, 0, 0, 128);
    assert_eq!(blend(half_red, black()), Color::new(128, 0, 0, 255));
    assert_eq!(blend(white(), half_red), white());
    assert_eq!(blend(color::transparent(), white()), white());

    let mut framebuffer = Framebuffer::new(Size::new(1, 1));
    framebuffer.blit(half_red, (0, 0)).unwrap();
    assert_eq!(framebuffer.pixel(0, 0), Some(Color::new(128, 0, 0, 255)));
}

#[test]
fn test_framebuffer_clear() {
    let mut framebuffer = Framebuffer::new(Size::new(3, 2));
    assert_eq!(framebuffer.size(), Size::new(3, 2));
    assert_eq!(framebuffer.pixel(3, 0), None);

    let blue = Color::new(0, 0, 255, 255);
    framebuffer.clear(blue);
    assert_eq!(framebuffer.pixel(2, 1), Some(blue));
    assert_eq!(framebuffer.image().get_pixel(0, 0).0, [0, 0, 255, 255]);
}

#[test]
fn test_drawable_panel_applies_basis() {
    let framebuffer = Framebuffer::new(Size::new(4, 4));
    let mut panel = DrawablePanel::with_basis(framebuffer, scale(Vec2::new(2.0, 2.0)));
    panel.add_drawable(Drawable::pixel(Vec2::new(1.0, 1.0)));
    panel.add_drawable(Drawable::pixel(Vec2::new(0.0, 0.0)).hidden());

    assert_eq!(panel.render().unwrap(), 1);
    assert_eq!(filled(panel.inner()), [(2, 2)]);

    panel.set_basis(Mat2::identity());
    panel.clear_drawables();
    assert_eq!(panel.render().unwrap(), 0);
}

#[test]
fn test_render_empty_scene() {
    let scene = Scene::new("empty");
    let mut panel = RecordingPanel::new(4, 4);
    let mut renderer = Renderer::new();

    let stats = renderer.render(&scene, &mut panel).unwrap();
    assert_eq!(stats.draw_calls, 0);
    assert!(panel.blits.is_empty());
    assert_eq!(renderer.frames(), 1);
}

#[test]
fn test_render_in_collection_order() {
    let mut scene = Scene::new("ordered");
    scene.add_drawable(Drawable::pixel(Vec2::new(2.0, 0.0)));
    scene.add_drawable(Drawable::pixel(Vec2::new(0.0, 1.0)).hidden());
    scene.add_drawable(Drawable::pixel(Vec2::new(0.0, 0.0)));
    let entity = scene.spawn();
    scene
        .attach_drawable(entity, Drawable::pixel(Vec2::new(1.0, 3.0)))
        .unwrap();

    let mut panel = RecordingPanel::new(4, 4);
    let mut renderer = Renderer::new();
    let stats = renderer.render(&scene, &mut panel).unwrap();

    assert_eq!(stats.draw_calls, scene.collect_drawables().len());
    assert_eq!(stats.draw_calls, 3);
    assert_eq!(panel.blits, [(2, 0), (0, 0), (1, 3)]);
    assert_eq!(renderer.last_frame(), stats);
}

#[test]
fn test_render_applies_view_and_basis() {
    let mut scene = Scene::new("camera");
    scene.add_drawable(Drawable::pixel(Vec2::new(1.0, 0.0)));
    scene.view_mut().translation = Vec2::new(0.0, 1.0);

    let framebuffer = Framebuffer::new(Size::new(4, 4));
    let mut panel = DrawablePanel::with_basis(framebuffer, scale(Vec2::new(2.0, 1.0)));
    Renderer::new().render(&scene, &mut panel).unwrap();
    assert_eq!(filled(panel.inner()), [(2, 1)]);
}

#[test]
fn test_out_of_bounds_aborts_frame() {
    let mut scene = Scene::new("broken");
    scene.add_drawable(Drawable::pixel(Vec2::new(0.0, 0.0)));
    scene.add_drawable(Drawable::pixel(Vec2::new(9.0, 0.0)));
    scene.add_drawable(Drawable::pixel(Vec2::new(1.0, 0.0)));

    let mut panel = RecordingPanel::new(4, 4);
    let mut renderer = Renderer::new();
    let result = renderer.render(&scene, &mut panel);

    assert!(matches!(result, Err(RenderError::OutOfBounds { x: 9, y: 0, .. })));
    assert_eq!(panel.blits, [(0, 0)]);
    assert_eq!(renderer.frames(), 1);
    assert_eq!(renderer.last_frame(), FrameStats::default());
}

#[test]
fn test_equilateral_triangle() {
    let radius = 2.0;
    let shape = Shape::equilateral(Vec2::new(5.0, 5.0), radius);
    let expected = 3.0 * 3f32.sqrt() / 4.0 * radius * radius;
    assert!((shape.area() - expected).abs() < 1e-4);

    for angle in shape.angles().unwrap() {
        assert!((angle - 60.0).abs() < 1e-3);
    }
    assert_eq!(Shape::Pixel { position: Vec2::zero() }.angles(), None);
    assert_eq!(Shape::Line { from: Vec2::zero(), to: Vec2::one() }.area(), 0.0);
}
