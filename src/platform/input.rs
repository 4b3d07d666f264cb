//! Keyboard input adapter
//!
//! Turns raw key names (`KeyboardEvent.key`) into movement intents and the
//! one-time start signal.

use crate::settings::Settings;
use crate::sim::MoveIntent;

/// What a key event asks the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Replace the current movement intent
    Move(MoveIntent),
    /// Begin the game loop
    Start,
    /// Nothing to do
    Ignored,
}

/// Key bindings plus the "has the game started" latch
#[derive(Debug, Clone)]
pub struct InputAdapter {
    left_keys: Vec<String>,
    right_keys: Vec<String>,
    started: bool,
}

impl InputAdapter {
    pub fn new(left_keys: Vec<String>, right_keys: Vec<String>) -> Self {
        Self {
            left_keys,
            right_keys,
            started: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.left_keys.clone(), settings.right_keys.clone())
    }

    fn is_left(&self, key: &str) -> bool {
        self.left_keys.iter().any(|k| k == key)
    }

    fn is_right(&self, key: &str) -> bool {
        self.right_keys.iter().any(|k| k == key)
    }

    #[cfg(test)]
    fn started(&self) -> bool {
        self.started
    }

    /// Mark the game as started without a key press
    pub fn mark_started(&mut self) {
        self.started = true;
    }

    pub fn key_down(&mut self, key: &str) -> KeyAction {
        if self.is_left(key) {
            KeyAction::Move(MoveIntent::Left)
        } else if self.is_right(key) {
            KeyAction::Move(MoveIntent::Right)
        } else if !self.started {
            self.started = true;
            KeyAction::Start
        } else {
            KeyAction::Ignored
        }
    }

    /// Releasing either movement key clears the intent
    pub fn key_up(&self, key: &str) -> KeyAction {
        if self.is_left(key) || self.is_right(key) {
            KeyAction::Move(MoveIntent::None)
        } else {
            KeyAction::Ignored
        }
    }
}
