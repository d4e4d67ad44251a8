#![cfg(test)]

use std::time::Duration;

use semver::Version;

use crate::graphics::Size;

use super::{Config, ENGINE_NAME, ENGINE_VERSION};

#[test]
fn test_engine_identity() {
    assert_eq!(ENGINE_NAME, "deep_core");
    assert_eq!(ENGINE_VERSION.major, 0);
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.name(), "Hello World");
    assert_eq!(config.version(), &Version::new(0, 0, 0));
    assert_eq!(config.window().title, "Hello World");
    assert_eq!(config.updates_per_second(), 60);
    assert_eq!(config.max_frames(), None);
}

#[test]
fn test_builder() {
    let config = Config::new("demo".to_string(), Version::new(1, 2, 3))
        .with_window("Demo window", (320, 200))
        .with_updates_per_second(0)
        .with_max_frames(10);
    assert_eq!(config.window().title, "Demo window");
    assert_eq!(config.window().size, Size::new(320, 200));
    assert_eq!(config.updates_per_second(), 1);
    assert_eq!(config.update_step(), Duration::from_secs(1));
    assert_eq!(config.max_frames(), Some(10));

    let config = config.with_updates_per_second(100);
    assert_eq!(config.update_step(), Duration::from_millis(10));
}
