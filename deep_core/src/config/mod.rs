//! Configuration of game engine.

use std::time::Duration;

use semver::Version;

use crate::graphics::{color, Color, Size};

mod tests;

pub const ENGINE_NAME: &str = env!("CARGO_CRATE_NAME", "library must be compiled by Cargo");

const ENGINE_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "library must be compiled by Cargo");
lazy_static::lazy_static! {
    pub static ref ENGINE_VERSION: Version = ENGINE_VERSION_STR
        .parse()
        .expect("Cargo package version must be valid semver");
}

/// Parameters of the window which is created on initialization.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub size: Size,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Deep".to_string(),
            size: Size::new(640, 480),
        }
    }
}

/// Configuration of the application which uses game engine.
#[derive(Debug, Clone)]
pub struct Config {
    name: String,
    version: Version,
    window: WindowConfig,
    updates_per_second: u32,
    clear_color: Color,
    max_frames: Option<u64>,
}

impl Config {
    pub fn new(name: String, version: Version) -> Self {
        Self {
            window: WindowConfig {
                title: name.clone(),
                ..WindowConfig::default()
            },
            name,
            version,
            updates_per_second: 60,
            clear_color: color::black(),
            max_frames: None,
        }
    }

    pub fn with_window(mut self, title: impl ToString, size: impl Into<Size>) -> Self {
        self.window = WindowConfig {
            title: title.to_string(),
            size: size.into(),
        };
        self
    }

    /// Count of fixed updates per second of the frame loop; zero is treated as one.
    pub fn with_updates_per_second(mut self, updates_per_second: u32) -> Self {
        self.updates_per_second = updates_per_second.max(1);
        self
    }

    pub fn with_clear_color(mut self, clear_color: Color) -> Self {
        self.clear_color = clear_color;
        self
    }

    /// Stops the frame loop after given count of frames.
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn window(&self) -> &WindowConfig {
        &self.window
    }

    pub fn updates_per_second(&self) -> u32 {
        self.updates_per_second
    }

    /// Duration of one fixed update.
    pub fn update_step(&self) -> Duration {
        Duration::from_secs(1) / self.updates_per_second
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn max_frames(&self) -> Option<u64> {
        self.max_frames
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("Hello World".to_string(), Version::new(0, 0, 0))
    }
}
