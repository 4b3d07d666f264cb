//! Game state and core simulation types
//!
//! Plain fixed-shape records. Only the simulation engine mutates them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Player's currently held directional input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveIntent {
    #[default]
    None,
    Left,
    Right,
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every brick was destroyed
    Won,
    /// Ball crossed the bottom of the arena
    Lost,
}

/// Fixed-size rectangular play field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Centre position
    pub pos: Vec2,
    /// Velocity in units per millisecond
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(
            Vec2::new(BALL_START_X, BALL_START_Y),
            Vec2::new(BALL_START_VX, BALL_START_VY),
            BALL_RADIUS,
        )
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self { pos, width, height }
    }

    /// Paddle centred horizontally, resting just above the arena floor
    pub fn centered(arena: &Arena, width: f32, height: f32) -> Self {
        let x = (arena.width - width) / 2.0;
        let y = arena.height - PADDLE_BASELINE_GAP - height;
        Self::new(Vec2::new(x, y), width, height)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.width, self.height)
    }

    /// Slide horizontally by `dx`, keeping both edges inside the arena
    pub fn slide(&mut self, dx: f32, arena: &Arena) {
        let max_x = (arena.width - self.width).max(0.0);
        self.pos.x = (self.pos.x + dx).clamp(0.0, max_x);
    }
}

/// A brick entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Remaining hits before removal
    pub durability: u8,
}

impl Brick {
    pub fn new(pos: Vec2, width: f32, height: f32, durability: u8) -> Self {
        Self {
            pos,
            width,
            height,
            durability,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.width, self.height)
    }

    /// Take one hit; durability never goes below zero
    pub fn hit(&mut self) {
        self.durability = self.durability.saturating_sub(1);
    }

    pub fn is_destroyed(&self) -> bool {
        self.durability == 0
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Live bricks in stable insertion order
    pub bricks: Vec<Brick>,
    /// Running flag; once false it stays false
    pub is_active: bool,
    pub move_intent: MoveIntent,
    /// Set together with `is_active = false`
    pub outcome: Option<Outcome>,
    /// Bricks swept from the live set so far
    pub bricks_destroyed: u32,
}

impl GameState {
    pub fn new(arena: Arena, ball: Ball, paddle: Paddle, bricks: Vec<Brick>) -> Self {
        debug_assert!(
            ball.radius > 0.0 && ball.radius < arena.width.min(arena.height) / 2.0,
            "ball radius {} out of range for arena {}x{}",
            ball.radius,
            arena.width,
            arena.height
        );

        Self {
            arena,
            ball,
            paddle,
            bricks,
            is_active: true,
            move_intent: MoveIntent::None,
            outcome: None,
            bricks_destroyed: 0,
        }
    }

    /// Move to the terminal state. The first recorded outcome wins.
    pub fn end(&mut self, outcome: Outcome) {
        if self.outcome.is_none() {
            log::info!("Game ended: {:?}", outcome);
            self.outcome = Some(outcome);
        }
        self.is_active = false;
    }
}
