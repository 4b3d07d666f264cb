//! Game settings
//!
//! Read as JSON from LocalStorage on the web. Every field has a default so
//! partial JSON documents are accepted.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{Arena, LayoutKind};

/// Reasons a settings document is rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Malformed JSON or wrong field types
    #[error("invalid settings json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("arena must have positive size, got {width}x{height}")]
    InvalidArena { width: f32, height: f32 },

    /// Radius must satisfy 0 < r < min(width, height) / 2
    #[error("ball radius {radius} must be in (0, {max})")]
    BallRadius { radius: f32, max: f32 },

    #[error("ball start ({x}, {y}) is outside the arena")]
    BallOutsideArena { x: f32, y: f32 },

    #[error("paddle must have positive size, got {width}x{height}")]
    InvalidPaddle { width: f32, height: f32 },

    #[error("paddle width {paddle} does not fit arena width {arena}")]
    PaddleTooWide { paddle: f32, arena: f32 },

    #[error("layout must contain at least one brick")]
    NoBricks,

    #[error("no keys bound to move {0}")]
    MissingKeys(&'static str),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Starting centre
    pub ball_start: Vec2,
    /// Starting velocity (units per millisecond)
    pub ball_velocity: Vec2,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,

    // === Level ===
    pub layout: LayoutKind,
    /// Layout seed; `None` picks one from the clock at game creation
    pub seed: Option<u64>,

    // === Input ===
    /// `KeyboardEvent.key` values that move the paddle left
    pub left_keys: Vec<String>,
    /// `KeyboardEvent.key` values that move the paddle right
    pub right_keys: Vec<String>,

    // === HUD ===
    /// Draw the status line (brick count, prompts)
    pub show_status: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_start: Vec2::new(BALL_START_X, BALL_START_Y),
            ball_velocity: Vec2::new(BALL_START_VX, BALL_START_VY),

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,

            layout: LayoutKind::default(),
            seed: None,

            left_keys: vec!["ArrowLeft".to_string(), "a".to_string()],
            right_keys: vec!["ArrowRight".to_string(), "d".to_string()],

            show_status: true,
        }
    }
}

impl Settings {
    /// Parse and validate a JSON settings document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn arena(&self) -> Arena {
        Arena {
            width: self.arena_width,
            height: self.arena_height,
        }
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        let (width, height) = (self.arena_width, self.arena_height);
        if !(width > 0.0 && height > 0.0) {
            return Err(SettingsError::InvalidArena { width, height });
        }

        let max = width.min(height) / 2.0;
        if !(self.ball_radius > 0.0 && self.ball_radius < max) {
            return Err(SettingsError::BallRadius {
                radius: self.ball_radius,
                max,
            });
        }

        let start = self.ball_start;
        if !(start.x >= 0.0 && start.x <= width && start.y >= 0.0 && start.y <= height) {
            return Err(SettingsError::BallOutsideArena {
                x: start.x,
                y: start.y,
            });
        }

        if !(self.paddle_width > 0.0 && self.paddle_height > 0.0) {
            return Err(SettingsError::InvalidPaddle {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.paddle_width > width {
            return Err(SettingsError::PaddleTooWide {
                paddle: self.paddle_width,
                arena: width,
            });
        }

        if let LayoutKind::Random { count: 0 } = self.layout {
            return Err(SettingsError::NoBricks);
        }

        if self.left_keys.is_empty() {
            return Err(SettingsError::MissingKeys("left"));
        }
        if self.right_keys.is_empty() {
            return Err(SettingsError::MissingKeys("right"));
        }

        Ok(())
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "brick_breaker_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
