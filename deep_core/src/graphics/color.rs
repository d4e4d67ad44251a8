//! Color utilities for game engine.

use palette::Srgba;

/// Color with alpha channel, 8 bits per channel.
pub type Color = Srgba<u8>;

/// Color of drawables which have no color of their own.
pub fn default_color() -> Color {
    white()
}

pub fn white() -> Color {
    Color::new(255, 255, 255, 255)
}

pub fn black() -> Color {
    Color::new(0, 0, 0, 255)
}

pub fn transparent() -> Color {
    Color::new(0, 0, 0, 0)
}

/// Blends `source` over `destination` using alpha of the source.
///
/// Result is always opaque, as the destination of any panel is.
///
pub fn blend(source: Color, destination: Color) -> Color {
    let alpha = source.alpha as u16;
    let inv_alpha = 255 - alpha;
    let mix = |src: u8, dst: u8| ((src as u16 * alpha + dst as u16 * inv_alpha) / 255) as u8;
    Color::new(
        mix(source.red, destination.red),
        mix(source.green, destination.green),
        mix(source.blue, destination.blue),
        255,
    )
}

pub(crate) fn to_rgba(color: Color) -> image::Rgba<u8> {
    image::Rgba([color.red, color.green, color.blue, color.alpha])
}

pub(crate) fn from_rgba(rgba: image::Rgba<u8>) -> Color {
    let [red, green, blue, alpha] = rgba.0;
    Color::new(red, green, blue, alpha)
}
