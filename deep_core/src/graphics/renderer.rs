//! Render utilities for graphics of game engine.

use crate::math::Affine2;
use crate::scene::Scene;

use super::{Draw, Drawable, Panel, RenderError};

/// Statistics of one rendered frame.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameStats {
    /// Count of drawables drawn in this frame.
    pub draw_calls: usize,
}

/// System that rasterizes drawables of scenes onto panels.
///
/// Drawables are drawn in order, later ones occlude earlier ones.
/// There is no depth buffer.
///
#[derive(Default, Debug)]
pub struct Renderer {
    frames: u64,
    last_frame: FrameStats,
}

impl Renderer {
    /// Creates render system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws all drawables of the scene onto the target.
    ///
    /// # Errors
    ///
    /// The first failed draw aborts the rest of the frame and is returned.
    ///
    pub fn render(&mut self, scene: &Scene, target: &mut dyn Panel) -> Result<FrameStats, RenderError> {
        let screen = Affine2::from_linear(target.basis()) * scene.view().transform();
        let items = scene.collect_drawables();
        let items = items
            .iter()
            .map(|item| (item.drawable, screen * item.model));

        let result = Self::render_drawables(items, target);
        self.frames += 1;
        let draw_calls = match result {
            Ok(draw_calls) => draw_calls,
            Err(error) => {
                log::error!("frame {} was aborted: {}", self.frames, error);
                return Err(error);
            }
        };
        self.last_frame = FrameStats { draw_calls };
        log::trace!("frame {} drawn with {} draw calls", self.frames, draw_calls);
        Ok(self.last_frame)
    }

    /// Draws visible drawables onto the target in the given order,
    /// each with its own transform.
    ///
    /// Returns count of drawn drawables.
    ///
    pub fn render_drawables<'a, I>(items: I, target: &mut dyn Panel) -> Result<usize, RenderError>
    where
        I: IntoIterator<Item = (&'a Drawable, Affine2)>,
    {
        let mut draw_calls = 0;
        for (drawable, transform) in items {
            if !drawable.is_visible() {
                continue;
            }
            drawable.draw(target, &transform)?;
            draw_calls += 1;
        }
        Ok(draw_calls)
    }

    /// Count of frames this renderer has rendered, including aborted ones.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Statistics of the last successfully rendered frame.
    pub fn last_frame(&self) -> FrameStats {
        self.last_frame
    }
}
