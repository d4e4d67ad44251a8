//! Presentation surfaces which receive rendered frames.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use image::RgbaImage;
use thiserror::Error;

use crate::graphics::Size;

/// Error that can happen when a frame is presented.
#[derive(Debug, Error)]
pub enum PresentError {
    #[error("presentation surface is closed")]
    Closed,

    #[error("failed to encode frame: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to write frame: {0}")]
    Io(#[from] io::Error),
}

/// Objects of this trait stand for the OS-level surface of a window.
pub trait Present {
    /// Prepares the surface; called once when the window is created.
    fn open(&mut self, _title: &str, _size: Size) -> Result<(), PresentError> {
        Ok(())
    }

    /// Shows the frame.
    fn present(&mut self, frame: &RgbaImage) -> Result<(), PresentError>;

    /// Releases the surface; called once when the window is dropped.
    fn close(&mut self) {}
}

#[derive(Default, Debug)]
struct HeadlessState {
    open: bool,
    frames: u64,
    last_frame: Option<RgbaImage>,
}

/// Surface without any output which keeps the last presented frame.
///
/// Clones share the same state, so a clone can be kept to inspect
/// frames presented by a window which owns the other one.
///
#[derive(Default, Debug, Clone)]
pub struct Headless {
    state: Arc<Mutex<HeadlessState>>,
}

impl Headless {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of presented frames.
    pub fn frames(&self) -> u64 {
        self.lock().frames
    }

    /// Copy of the last presented frame.
    pub fn last_frame(&self) -> Option<RgbaImage> {
        self.lock().last_frame.clone()
    }

    /// Returns `true` while the owning window exists.
    pub fn is_open(&self) -> bool {
        self.lock().open
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HeadlessState> {
        // state stays consistent even if a holder panicked
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Present for Headless {
    fn open(&mut self, _title: &str, _size: Size) -> Result<(), PresentError> {
        self.lock().open = true;
        Ok(())
    }

    fn present(&mut self, frame: &RgbaImage) -> Result<(), PresentError> {
        let mut state = self.lock();
        if !state.open {
            return Err(PresentError::Closed);
        }
        state.frames += 1;
        state.last_frame = Some(frame.clone());
        Ok(())
    }

    fn close(&mut self) {
        self.lock().open = false;
    }
}

/// Surface which writes every `every`-th frame into a PNG file of the directory.
#[derive(Debug)]
pub struct ImageSequence {
    directory: PathBuf,
    every: u64,
    frames: u64,
    written: Vec<PathBuf>,
}

impl ImageSequence {
    /// Writes every frame into `directory`.
    pub fn new<P>(directory: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self::with_interval(directory, 1)
    }

    /// Writes only every `every`-th frame (the first one included).
    pub fn with_interval<P>(directory: P, every: u64) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            directory: directory.as_ref().to_path_buf(),
            every: every.max(1),
            frames: 0,
            written: Vec::new(),
        }
    }

    /// Paths of files written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl Present for ImageSequence {
    fn open(&mut self, _title: &str, _size: Size) -> Result<(), PresentError> {
        fs::create_dir_all(&self.directory)?;
        Ok(())
    }

    fn present(&mut self, frame: &RgbaImage) -> Result<(), PresentError> {
        let index = self.frames;
        self.frames += 1;
        if index % self.every != 0 {
            return Ok(());
        }
        let path = self.directory.join(format!("frame_{:06}.png", index));
        frame.save(&path)?;
        log::debug!("frame {} was written to {}", index, path.display());
        self.written.push(path);
        Ok(())
    }
}
