//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time and intent come in as arguments
//! - Seeded RNG only (layout generation)
//! - Stable brick iteration order
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod rect;
pub mod state;
pub mod step;

pub use collision::{Side, ball_rect_collision, overlaps, paddle_rebound};
pub use level::{LayoutKind, fixed_layout, generate_layout, random_layout};
pub use rect::Rect;
pub use state::{Arena, Ball, Brick, GameState, MoveIntent, Outcome, Paddle};
pub use step::step;
