//! Keyboard and window events of game engine.

use std::collections::{HashSet, VecDeque};

pub use winit::event::VirtualKeyCode as Key;


/// Event which is produced by an input source.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// User asked to close the application.
    Quit,
    KeyPressed(Key),
    KeyReleased(Key),
}

/// Objects of this trait produce input events; polled once per frame.
pub trait InputSource {
    /// Appends all events which happened since the previous poll.
    fn poll(&mut self, events: &mut Vec<InputEvent>);
}

/// Input source which never produces any events.
#[derive(Default, Debug, Copy, Clone)]
pub struct NoInput;

impl InputSource for NoInput {
    fn poll(&mut self, _events: &mut Vec<InputEvent>) {}
}

/// Input source which replays prepared batches of events, one batch per poll.
///
/// Produces nothing when all batches are replayed.
///
#[derive(Default, Debug, Clone)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the batch of events for the next frame.
    pub fn then(mut self, events: impl IntoIterator<Item = InputEvent>) -> Self {
        self.frames.push_back(events.into_iter().collect());
        self
    }

    /// Appends `count` frames without any events.
    pub fn idle(mut self, count: usize) -> Self {
        self.frames.extend(std::iter::repeat_with(Vec::new).take(count));
        self
    }

    /// Count of batches which are not yet replayed.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, events: &mut Vec<InputEvent>) {
        if let Some(batch) = self.frames.pop_front() {
            events.extend(batch);
        }
    }
}

/// State of the keyboard as seen by the frame loop.
#[derive(Default, Debug, Clone)]
pub struct Input {
    pressed: HashSet<Key>,
    just_pressed: HashSet<Key>,
    quit: bool,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets keys pressed in the previous frame; pressed keys stay pressed.
    pub fn begin_frame(&mut self) {
        self.just_pressed.clear();
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.quit = true,
            InputEvent::KeyPressed(key) => {
                if self.pressed.insert(key) {
                    self.just_pressed.insert(key);
                }
            }
            InputEvent::KeyReleased(key) => {
                self.pressed.remove(&key);
            }
        }
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Returns `true` if the key became pressed during the current frame.
    pub fn is_just_pressed(&self, key: Key) -> bool {
        self.just_pressed.contains(&key)
    }

    /// Returns `true` if quit was requested at any time.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}
