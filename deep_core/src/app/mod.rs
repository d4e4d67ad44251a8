//! Utilities for engine initialization and the frame loop.

use std::thread;
use std::time::{Duration, Instant};

use slotmap::{new_key_type, SlotMap};

use crate::config::{Config, ENGINE_NAME, ENGINE_VERSION};
use crate::error::{DError, Result};
use crate::graphics::{Panel, RenderError, Renderer};
use crate::input::{Input, InputEvent, InputSource, Key, NoInput};
use crate::scene::Scene;
use crate::window::{Present, Window};


new_key_type! {
    /// Identifier of a scene registered in [`Core`].
    pub struct SceneId;
}

/// State of [`Core`].
///
/// Only transitions `Uninitialized -> Running -> Stopped` are possible.
///
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    Uninitialized,
    Running,
    Stopped,
}

/// General context of game engine: owns the window, the renderer and all scenes.
pub struct Core {
    config: Config,
    state: State,
    window: Option<Window>,
    renderer: Renderer,
    scenes: SlotMap<SceneId, Scene>,
    active: Option<SceneId>,
    pending_deletion: Vec<SceneId>,
    input: Input,
    input_source: Box<dyn InputSource>,
    events: Vec<InputEvent>,
    frames: u64,
}

impl Core {
    /// Creates uninitialized context without any input.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: State::Uninitialized,
            window: None,
            renderer: Renderer::new(),
            scenes: SlotMap::with_key(),
            active: None,
            pending_deletion: Vec::new(),
            input: Input::new(),
            input_source: Box::new(NoInput),
            events: Vec::new(),
            frames: 0,
        }
    }

    /// Opens the window on the given presentation surface
    /// and activates the default scene if no scene is active yet.
    ///
    /// # Errors
    ///
    /// An error is returned if the context was already initialized
    /// or if the window cannot be opened.
    ///
    pub fn init(&mut self, presenter: Box<dyn Present>) -> Result<()> {
        if self.state != State::Uninitialized {
            return Err(DError::from(format!(
                "cannot initialize {:?} engine core",
                self.state,
            )));
        }
        log::info!(
            "initializing {} v{} for {} v{}",
            ENGINE_NAME,
            *ENGINE_VERSION,
            self.config.name(),
            self.config.version(),
        );

        let window = Window::new(self.config.window(), presenter)
            .map_err(|error| DError::new("failed to open window", error))?;
        self.window = Some(window);
        if self.active.is_none() {
            let scene = self.create_scene("main");
            self.active = Some(scene);
        }
        self.state = State::Running;
        Ok(())
    }

    /// Replaces the source of input events.
    pub fn set_input_source(&mut self, source: Box<dyn InputSource>) {
        self.input_source = source;
    }

    /// Registers new empty scene.
    pub fn create_scene<T>(&mut self, name: T) -> SceneId
    where
        T: ToString,
    {
        let scene = Scene::new(name);
        log::debug!("scene \"{}\" was created", scene.name());
        self.scenes.insert(scene)
    }

    /// Deletes the scene at the end of the current frame,
    /// or immediately if the frame loop is not running.
    ///
    /// # Errors
    ///
    /// An error is returned if there is no such scene.
    ///
    pub fn delete_scene(&mut self, id: SceneId) -> Result<()> {
        if !self.scenes.contains_key(id) {
            return Err(DError::from("cannot delete unknown scene"));
        }
        if self.state == State::Running {
            if !self.pending_deletion.contains(&id) {
                self.pending_deletion.push(id);
            }
        } else {
            self.remove_scene(id);
        }
        Ok(())
    }

    /// Makes the scene the one which is updated and rendered each frame.
    ///
    /// # Errors
    ///
    /// An error is returned if there is no such scene or it is going to be deleted.
    ///
    pub fn set_active_scene(&mut self, id: SceneId) -> Result<()> {
        if !self.scenes.contains_key(id) || self.pending_deletion.contains(&id) {
            return Err(DError::from("cannot activate unknown scene"));
        }
        self.active = Some(id);
        Ok(())
    }

    pub fn active_scene_id(&self) -> Option<SceneId> {
        self.active
    }

    pub fn active_scene(&self) -> Option<&Scene> {
        self.scenes.get(self.active?)
    }

    pub fn active_scene_mut(&mut self) -> Option<&mut Scene> {
        self.scenes.get_mut(self.active?)
    }

    pub fn scene(&self, id: SceneId) -> Option<&Scene> {
        self.scenes.get(id)
    }

    pub fn scene_mut(&mut self, id: SceneId) -> Option<&mut Scene> {
        self.scenes.get_mut(id)
    }

    /// Runs one frame: polls input, updates the active scene by `delta_time`,
    /// renders and presents it.
    ///
    /// # Errors
    ///
    /// An error is returned if the context is not running.
    /// Failed frame stops the context, so the error is returned only once.
    ///
    pub fn step(&mut self, delta_time: Duration) -> Result<()> {
        self.ensure_running()?;
        self.poll_input();
        self.update(delta_time);
        self.finish_frame()
    }

    /// Runs frames with fixed update step until the context is stopped.
    ///
    /// Time which passes between frames is accumulated,
    /// and the active scene is updated as many times as whole steps fit into it.
    ///
    /// # Errors
    ///
    /// An error is returned if the context is not running or a frame has failed.
    ///
    pub fn run(&mut self) -> Result<()> {
        self.ensure_running()?;
        let step = self.config.update_step();
        log::info!("frame loop started with update step of {:?}", step);

        let mut previous = Instant::now();
        let mut lag = Duration::ZERO;
        while self.state == State::Running {
            let now = Instant::now();
            lag += now.duration_since(previous);
            previous = now;
            if lag < step {
                thread::sleep(step - lag);
                continue;
            }

            self.poll_input();
            while lag >= step {
                self.update(step);
                lag -= step;
            }
            self.finish_frame()?;
        }
        log::info!("frame loop finished after {} frames", self.frames);
        Ok(())
    }

    /// Stops the context, closes the window and flushes logs.
    ///
    /// Does nothing before initialization.
    ///
    pub fn shutdown(&mut self) {
        if self.state == State::Uninitialized {
            return;
        }
        self.stop("shutdown was requested");
        for id in std::mem::take(&mut self.pending_deletion) {
            self.remove_scene(id);
        }
        // window is closed on drop
        self.window = None;
        log::logger().flush();
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    pub fn window_mut(&mut self) -> Option<&mut Window> {
        self.window.as_mut()
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    /// Count of completed frames.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn ensure_running(&self) -> Result<()> {
        match self.state {
            State::Running => Ok(()),
            state => Err(DError::from(format!("engine core is {:?}", state))),
        }
    }

    fn poll_input(&mut self) {
        self.input.begin_frame();
        self.events.clear();
        self.input_source.poll(&mut self.events);
        for &event in &self.events {
            log::trace!("input event: {:?}", event);
            self.input.handle(event);
        }
    }

    fn update(&mut self, delta_time: Duration) {
        if let Some(scene) = self.active.and_then(|id| self.scenes.get_mut(id)) {
            scene.update(delta_time);
        }
    }

    fn finish_frame(&mut self) -> Result<()> {
        if let Err(error) = self.draw() {
            self.stop("frame has failed");
            return Err(DError::new(
                format!("failed to draw frame {}", self.frames),
                error,
            ));
        }
        self.end_frame();
        Ok(())
    }

    fn draw(&mut self) -> std::result::Result<(), RenderError> {
        let window = match self.window.as_mut() {
            Some(window) => window,
            None => return Ok(()),
        };
        window.clear(self.config.clear_color());
        if let Some(scene) = self.active.and_then(|id| self.scenes.get(id)) {
            self.renderer.render(scene, window)?;
        }
        window.render_attached()?;
        window.present()?;
        Ok(())
    }

    fn end_frame(&mut self) {
        for id in std::mem::take(&mut self.pending_deletion) {
            self.remove_scene(id);
        }
        self.frames += 1;

        if self.input.quit_requested() {
            self.stop("quit was requested");
        } else if self.input.is_pressed(Key::Escape) {
            self.stop("escape was pressed");
        } else if self.config.max_frames().map_or(false, |max| self.frames >= max) {
            self.stop("frame limit was reached");
        }
    }

    fn remove_scene(&mut self, id: SceneId) {
        if let Some(scene) = self.scenes.remove(id) {
            log::debug!("scene \"{}\" was deleted", scene.name());
        }
        if self.active == Some(id) {
            log::warn!("active scene was deleted, nothing will be rendered");
            self.active = None;
        }
    }

    fn stop(&mut self, reason: &str) {
        if self.state == State::Running {
            log::info!("engine core stopped: {}", reason);
            self.state = State::Stopped;
        }
    }
}
