//! Brick Breaker - a minimal Breakout style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state, levels)
//! - `renderer`: Renderer contract and scene painting
//! - `platform`: Input adapter and frame clock
//! - `game`: Game session tying the pieces together
//! - `settings`: Data-driven game configuration

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, GamePhase, create_game};
pub use settings::{Settings, SettingsError};
pub use sim::LayoutKind;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 400.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;
    /// Gap between the paddle's bottom edge and the arena floor
    pub const PADDLE_BASELINE_GAP: f32 = 30.0;
    /// Paddle speed (units per second)
    pub const PADDLE_SPEED: f32 = 400.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_X: f32 = 300.0;
    pub const BALL_START_Y: f32 = 332.0;
    /// Velocities are in units per millisecond
    pub const BALL_START_VX: f32 = 0.1;
    pub const BALL_START_VY: f32 = 0.2;
    /// Launch speed after a paddle top hit (units per millisecond)
    pub const BALL_FORCE: f32 = 0.3;

    /// Brick grid used by the layout generator
    pub const GRID_COLUMNS: usize = 10;
    pub const GRID_ROWS: usize = 10;
    pub const BRICK_HEIGHT: f32 = 16.0;
    pub const BRICK_GAP: f32 = 4.0;
    pub const BRICK_TOP_OFFSET: f32 = 40.0;
    pub const MIN_DURABILITY: u8 = 1;
    pub const MAX_DURABILITY: u8 = 7;
    /// Bricks drawn for a random layout
    pub const DEFAULT_BRICK_COUNT: usize = 24;
}
