//! Headless demo of `deep` 2D game engine

use std::error::Error;
use std::path::PathBuf;

use log::LevelFilter;

use deep_core::config::Config;
use deep_core::graphics::Size;
use deep_core::input::{InputEvent, Key, ScriptedInput};
use deep_core::math::Vec2;
use deep_core::window::{Headless, ImageSequence, Present};
use deep_core::Core;

mod demo;
mod logger;

const APP_NAME: &str = env!("CARGO_CRATE_NAME", "application must be compiled by Cargo");
const APP_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "application must be compiled by Cargo");

const WINDOW_SIZE: Size = Size::new(160, 120);

/// Entry point of `deep` demo.
///
/// Frames are written as PNG files into the directory given as the first argument,
/// otherwise they are only counted.
///
fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let _handle = logger::init(LevelFilter::Debug)?;
    log::info!("logger initialized successfully");

    let version = APP_VERSION_STR.parse()?;
    let config = Config::new(APP_NAME.to_string(), version)
        .with_window("Deep demo", WINDOW_SIZE)
        .with_updates_per_second(60)
        .with_max_frames(240);

    let presenter: Box<dyn Present> = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(directory) => {
            log::info!("frames are written to {}", directory.display());
            Box::new(ImageSequence::with_interval(directory, 30))
        }
        None => Box::new(Headless::new()),
    };

    let mut core = Core::new(config);
    core.init(presenter)?;
    let center = Vec2::new(WINDOW_SIZE.width as f32, WINDOW_SIZE.height as f32) / 2.0;
    if let Some(scene) = core.active_scene_mut() {
        demo::populate(scene, center)?;
    }
    let input = ScriptedInput::new()
        .idle(180)
        .then([InputEvent::KeyPressed(Key::Escape)]);
    core.set_input_source(Box::new(input));

    let result = core.run();
    log::info!("{} frames were shown", core.frames());
    core.shutdown();
    Ok(result?)
}
