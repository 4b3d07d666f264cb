//! Collision detection and response for circles against rectangles
//!
//! Overlap is tested with the ball's tentative position; the contacted side is
//! chosen from where the ball was before the step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Side of a rectangle the ball came in through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// Circle-vs-rectangle overlap on the ball's bounding box
///
/// The ball misses if it lies wholly to one side of the rectangle.
pub fn overlaps(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let left_miss = center.x + radius < rect.left();
    let right_miss = center.x - radius > rect.right();
    let top_miss = center.y + radius < rect.top();
    let bottom_miss = center.y - radius > rect.bottom();

    !(left_miss || right_miss || top_miss || bottom_miss)
}

/// Check collision between the ball and a rectangle
///
/// Returns the contacted side, or `None` if the tentative position does not
/// overlap. Side priority is left, right, top, then bottom as the fallback;
/// corner approaches therefore resolve horizontally.
pub fn ball_rect_collision(
    prev_center: Vec2,
    center: Vec2,
    radius: f32,
    rect: &Rect,
) -> Option<Side> {
    if !overlaps(center, radius, rect) {
        return None;
    }

    let side = if prev_center.x + radius < rect.left() {
        Side::Left
    } else if prev_center.x - radius > rect.right() {
        Side::Right
    } else if prev_center.y + radius < rect.top() {
        Side::Top
    } else {
        Side::Bottom
    };

    Some(side)
}

/// Push the ball just outside the contacted edge and reflect the matching axis
pub fn resolve_side(side: Side, rect: &Rect, radius: f32, pos: &mut Vec2, vel: &mut Vec2) {
    match side {
        Side::Left => {
            pos.x = rect.left() - radius;
            vel.x = -vel.x;
        }
        Side::Right => {
            pos.x = rect.right() + radius;
            vel.x = -vel.x;
        }
        Side::Top => {
            pos.y = rect.top() - radius;
            vel.y = -vel.y;
        }
        Side::Bottom => {
            pos.y = rect.bottom() + radius;
            vel.y = -vel.y;
        }
    }
}

/// Rebound velocity for a paddle top hit
///
/// The horizontal offset of the ball from the paddle centre, normalised by
/// `(width + radius) / 2`, becomes the horizontal share of the launch speed.
/// Centre hits go straight up; edge hits leave at a shallow angle.
pub fn paddle_rebound(ball_x: f32, radius: f32, paddle: &Rect, force: f32) -> Vec2 {
    let adj = ((ball_x - paddle.left()) - paddle.width / 2.0) / ((paddle.width + radius) / 2.0);
    // Corner contacts can land past the normalising span
    let adj = adj.clamp(-1.0, 1.0);
    let opp = (1.0 - adj * adj).sqrt();

    Vec2::new(adj * force, -opp * force)
}
