#![cfg(test)]

use crate::config::WindowConfig;
use crate::graphics::{color, Color, Drawable, Panel, Size};
use crate::math::Vec2;

use super::{Headless, ImageSequence, Present, Window};

fn config() -> WindowConfig {
    WindowConfig {
        title: "test".to_string(),
        size: Size::new(4, 3),
    }
}

#[test]
fn test_headless_is_open_while_window_exists() {
    let headless = Headless::new();
    let window = Window::new(&config(), Box::new(headless.clone())).unwrap();
    assert!(headless.is_open());
    assert_eq!(window.size(), Size::new(4, 3));
    drop(window);
    assert!(!headless.is_open());
}

#[test]
fn test_present_hands_over_frame() {
    let headless = Headless::new();
    let mut window = Window::new(&config(), Box::new(headless.clone())).unwrap();
    let red = Color::new(255, 0, 0, 255);
    window.blit(red, (2, 1)).unwrap();
    window.present().unwrap();
    window.present().unwrap();

    assert_eq!(window.presented(), 2);
    assert_eq!(headless.frames(), 2);
    let frame = headless.last_frame().unwrap();
    assert_eq!(frame.dimensions(), (4, 3));
    assert_eq!(frame.get_pixel(2, 1).0, [255, 0, 0, 255]);
    assert_eq!(frame.get_pixel(0, 0).0, [0, 0, 0, 255]);
}

#[test]
fn test_closed_headless_refuses_frames() {
    let mut headless = Headless::new();
    let frame = image::RgbaImage::new(1, 1);
    assert!(headless.present(&frame).is_err());
}

#[test]
fn test_attached_drawables_are_rendered() {
    let mut window = Window::new(&config(), Box::new(Headless::new())).unwrap();
    window.add_drawable(Drawable::pixel(Vec2::new(3.0, 2.0)));
    window.add_drawable(Drawable::pixel(Vec2::new(0.0, 0.0)).hidden());

    assert_eq!(window.render_attached().unwrap(), 1);
    assert_eq!(window.framebuffer().pixel(3, 2), Some(color::white()));
    assert_eq!(window.framebuffer().pixel(0, 0), Some(color::black()));
}

#[test]
fn test_image_sequence_writes_png_files() {
    let directory = tempfile::tempdir().unwrap();
    let output = directory.path().join("frames");
    let mut sequence = ImageSequence::with_interval(&output, 2);
    sequence.open("test", Size::new(2, 2)).unwrap();

    let mut frame = image::RgbaImage::new(2, 2);
    frame.put_pixel(1, 0, image::Rgba([0, 255, 0, 255]));
    for _ in 0..3 {
        sequence.present(&frame).unwrap();
    }

    assert_eq!(sequence.written().len(), 2);
    assert!(sequence.written()[0].ends_with("frame_000000.png"));
    assert!(sequence.written()[1].ends_with("frame_000002.png"));

    let decoded = image::open(&sequence.written()[1]).unwrap().to_rgba8();
    assert_eq!(decoded.get_pixel(1, 0).0, [0, 255, 0, 255]);
}
