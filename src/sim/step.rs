//! Simulation step
//!
//! Advances the game state by one discrete time step. Pure and synchronous:
//! the same state, delta and intent always produce the same next state.

use super::collision::{Side, ball_rect_collision, paddle_rebound, resolve_side};
use super::state::{GameState, MoveIntent, Outcome};
use crate::consts::*;

/// Advance `state` by `dt_millis` milliseconds
///
/// Order matters: paddle, tentative ball advance, walls, bricks, brick sweep,
/// win check, paddle rebound, commit. Bricks are resolved one after another
/// against the same running ball position, so overlapping hit regions
/// resolve in collection order.
///
/// Callers stop stepping once `state.is_active` is false.
pub fn step(state: &mut GameState, dt_millis: f32, intent: MoveIntent) {
    let dt = if dt_millis.is_finite() { dt_millis.max(0.0) } else { 0.0 };
    let arena = state.arena;

    // Paddle
    let distance = dt / 1000.0 * PADDLE_SPEED;
    match intent {
        MoveIntent::Left => state.paddle.slide(-distance, &arena),
        MoveIntent::Right => state.paddle.slide(distance, &arena),
        MoveIntent::None => {}
    }

    // Tentative advance (explicit Euler, no sub-stepping)
    let prev = state.ball.pos;
    let radius = state.ball.radius;
    let mut pos = prev + state.ball.vel * dt;
    let mut vel = state.ball.vel;

    // Walls
    if pos.x + radius > arena.width {
        pos.x = arena.width - radius;
        vel.x = -vel.x;
    } else if pos.x - radius < 0.0 {
        pos.x = radius;
        vel.x = -vel.x;
    }

    // Touching the floor already counts as a miss
    if pos.y + radius >= arena.height {
        pos.y = arena.height - radius;
        vel.y = -vel.y;
        state.end(Outcome::Lost);
    } else if pos.y - radius < 0.0 {
        pos.y = radius;
        vel.y = -vel.y;
    }

    // Bricks
    for brick in &mut state.bricks {
        let rect = brick.rect();
        if let Some(side) = ball_rect_collision(prev, pos, radius, &rect) {
            brick.hit();
            resolve_side(side, &rect, radius, &mut pos, &mut vel);
            log::trace!(
                "Brick at ({}, {}) hit on {:?}, durability {}",
                rect.left(),
                rect.top(),
                side,
                brick.durability
            );
        }
    }

    // Sweep destroyed bricks
    let live_before = state.bricks.len();
    state.bricks.retain(|b| !b.is_destroyed());
    let swept = live_before - state.bricks.len();
    if swept > 0 {
        state.bricks_destroyed += swept as u32;
        log::debug!(
            "{} brick(s) destroyed, {} remaining",
            swept,
            state.bricks.len()
        );
    }

    if state.bricks.is_empty() {
        state.end(Outcome::Won);
    }

    // Paddle
    let paddle = state.paddle.rect();
    match ball_rect_collision(prev, pos, radius, &paddle) {
        Some(Side::Top) => {
            pos.y = paddle.top() - radius;
            vel = paddle_rebound(pos.x, radius, &paddle, BALL_FORCE);
        }
        Some(side) => resolve_side(side, &paddle, radius, &mut pos, &mut vel),
        None => {}
    }

    state.ball.pos = pos;
    state.ball.vel = vel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::random_layout;
    use crate::sim::state::{Arena, Ball, Brick, Paddle};
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const EPS: f32 = 1e-4;

    /// 400x600 arena, centred paddle (x 160..240, y 558..570) and one brick
    /// parked mid-arena so the game stays active
    fn state_with_ball(pos: Vec2, vel: Vec2) -> GameState {
        let arena = Arena::default();
        let paddle = Paddle::centered(&arena, PADDLE_WIDTH, PADDLE_HEIGHT);
        let bricks = vec![Brick::new(Vec2::new(190.0, 200.0), 20.0, 10.0, 3)];
        GameState::new(arena, Ball::new(pos, vel, 10.0), paddle, bricks)
    }

    #[test]
    fn test_right_wall_reflection() {
        let mut state = state_with_ball(Vec2::new(385.0, 300.0), Vec2::new(0.1, 0.0));
        step(&mut state, 100.0, MoveIntent::None);

        assert!((state.ball.pos.x - 390.0).abs() < EPS);
        assert!(state.ball.vel.x < 0.0);
        assert!(state.is_active);
    }

    #[test]
    fn test_left_and_top_wall_reflection() {
        let mut state = state_with_ball(Vec2::new(60.0, 15.0), Vec2::new(-0.2, -0.1));
        step(&mut state, 300.0, MoveIntent::None);

        assert!((state.ball.pos.x - 10.0).abs() < EPS);
        assert!((state.ball.pos.y - 10.0).abs() < EPS);
        assert!(state.ball.vel.x > 0.0);
        assert!(state.ball.vel.y > 0.0);
        assert!(state.is_active);
    }

    #[test]
    fn test_bottom_exit_is_terminal() {
        let mut state = state_with_ball(Vec2::new(300.0, 590.0), Vec2::new(0.1, 0.3));
        step(&mut state, 100.0, MoveIntent::None);

        assert!((state.ball.pos.x - 310.0).abs() < EPS);
        assert!((state.ball.pos.y - 590.0).abs() < EPS);
        assert!((state.ball.vel.y + 0.3).abs() < EPS);
        assert!(!state.is_active);
        assert_eq!(state.outcome, Some(Outcome::Lost));

        for _ in 0..10 {
            step(&mut state, 16.0, MoveIntent::Left);
            assert!(!state.is_active);
        }
    }

    #[test]
    fn test_ball_landing_on_floor_is_terminal() {
        let mut state = state_with_ball(Vec2::new(300.0, 580.0), Vec2::new(0.0, 0.1));
        step(&mut state, 100.0, MoveIntent::None);

        assert!((state.ball.pos.y - 590.0).abs() < EPS);
        assert!(state.ball.vel.y < 0.0);
        assert!(!state.is_active);
        assert_eq!(state.outcome, Some(Outcome::Lost));
    }

    #[test]
    fn test_single_brick_top_hit_wins() {
        let arena = Arena::default();
        let paddle = Paddle::centered(&arena, PADDLE_WIDTH, PADDLE_HEIGHT);
        let bricks = vec![Brick::new(Vec2::new(30.0, 30.0), 40.0, 20.0, 1)];
        let ball = Ball::new(Vec2::new(50.0, 15.0), Vec2::new(0.0, 0.1), 10.0);
        let mut state = GameState::new(arena, ball, paddle, bricks);

        step(&mut state, 100.0, MoveIntent::None);

        assert!(state.bricks.is_empty());
        assert_eq!(state.bricks_destroyed, 1);
        assert!((state.ball.pos.y - 20.0).abs() < EPS);
        assert!(state.ball.vel.y < 0.0);
        // Last brick gone in this very step
        assert!(!state.is_active);
        assert_eq!(state.outcome, Some(Outcome::Won));
    }

    #[test]
    fn test_damaged_brick_stays_until_zero() {
        let mut state = state_with_ball(Vec2::new(50.0, 15.0), Vec2::new(0.0, 0.1));
        state.bricks.push(Brick::new(Vec2::new(30.0, 30.0), 40.0, 20.0, 2));

        step(&mut state, 100.0, MoveIntent::None);
        assert_eq!(state.bricks.len(), 2);
        assert_eq!(state.bricks[1].durability, 1);
        assert!(state.is_active);
    }

    #[test]
    fn test_left_side_wins_tie_break() {
        let mut state = state_with_ball(Vec2::new(85.0, 110.0), Vec2::new(0.1, 0.0));
        state.bricks.push(Brick::new(Vec2::new(100.0, 100.0), 40.0, 20.0, 5));

        step(&mut state, 100.0, MoveIntent::None);

        // Reflected horizontally off the left edge, not the top or bottom
        assert!((state.ball.pos.x - 90.0).abs() < EPS);
        assert!((state.ball.pos.y - 110.0).abs() < EPS);
        assert!(state.ball.vel.x < 0.0);
        assert_eq!(state.ball.vel.y, 0.0);
        assert_eq!(state.bricks[1].durability, 4);
    }

    #[test]
    fn test_corner_approach_resolves_left() {
        let mut state = state_with_ball(Vec2::new(85.0, 85.0), Vec2::new(0.1, 0.1));
        state.bricks.push(Brick::new(Vec2::new(100.0, 100.0), 40.0, 20.0, 5));

        step(&mut state, 100.0, MoveIntent::None);

        assert!((state.ball.pos.x - 90.0).abs() < EPS);
        assert!(state.ball.vel.x < 0.0);
        assert!(state.ball.vel.y > 0.0);
    }

    #[test]
    fn test_adjacent_bricks_resolve_sequentially() {
        let mut state = state_with_ball(Vec2::new(70.0, 15.0), Vec2::new(0.0, 0.1));
        state.bricks.push(Brick::new(Vec2::new(30.0, 30.0), 40.0, 20.0, 3));
        state.bricks.push(Brick::new(Vec2::new(70.0, 30.0), 40.0, 20.0, 3));

        step(&mut state, 100.0, MoveIntent::None);

        // Both bricks take the hit and each one flips vy in turn
        assert_eq!(state.bricks[1].durability, 2);
        assert_eq!(state.bricks[2].durability, 2);
        assert!((state.ball.pos.y - 20.0).abs() < EPS);
        assert!(state.ball.vel.y > 0.0);
    }

    #[test]
    fn test_paddle_center_hit_goes_straight_up() {
        let mut state = state_with_ball(Vec2::new(200.0, 540.0), Vec2::new(0.0, 0.1));
        step(&mut state, 100.0, MoveIntent::None);

        let paddle_top = state.paddle.pos.y;
        assert!((state.ball.pos.y - (paddle_top - 10.0)).abs() < EPS);
        assert!(state.ball.vel.x.abs() < EPS);
        assert!((state.ball.vel.y + BALL_FORCE).abs() < EPS);
        assert!(state.is_active);
    }

    #[test]
    fn test_paddle_off_center_hit_angles_outward() {
        let mut state = state_with_ball(Vec2::new(230.0, 540.0), Vec2::new(0.0, 0.1));
        step(&mut state, 100.0, MoveIntent::None);

        assert!(state.ball.vel.x > 0.0);
        assert!(state.ball.vel.y < 0.0);
        assert!((state.ball.vel.length() - BALL_FORCE).abs() < EPS);
    }

    #[test]
    fn test_paddle_side_hit_reflects_horizontally() {
        let mut state = state_with_ball(Vec2::new(145.0, 564.0), Vec2::new(0.1, 0.0));
        step(&mut state, 100.0, MoveIntent::None);

        assert!((state.ball.pos.x - 150.0).abs() < EPS);
        assert!(state.ball.vel.x < 0.0);
    }

    #[test]
    fn test_paddle_moves_with_intent() {
        let mut state = state_with_ball(Vec2::new(200.0, 300.0), Vec2::ZERO);
        let start = state.paddle.pos.x;

        step(&mut state, 100.0, MoveIntent::Right);
        assert!((state.paddle.pos.x - (start + 40.0)).abs() < EPS);

        step(&mut state, 50.0, MoveIntent::Left);
        assert!((state.paddle.pos.x - (start + 20.0)).abs() < EPS);

        step(&mut state, 100.0, MoveIntent::None);
        assert!((state.paddle.pos.x - (start + 20.0)).abs() < EPS);
    }

    #[test]
    fn test_zero_and_negative_dt_do_not_move() {
        let mut state = state_with_ball(Vec2::new(200.0, 300.0), Vec2::new(0.1, 0.2));
        let before = state.clone();

        step(&mut state, 0.0, MoveIntent::Right);
        step(&mut state, -50.0, MoveIntent::Left);
        step(&mut state, f32::NAN, MoveIntent::Left);

        assert_eq!(state.ball, before.ball);
        assert_eq!(state.paddle, before.paddle);
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = Pcg32::seed_from_u64(7);
        let mut rng2 = Pcg32::seed_from_u64(7);
        let arena = Arena::default();
        let make = |bricks| {
            let paddle = Paddle::centered(&arena, PADDLE_WIDTH, PADDLE_HEIGHT);
            GameState::new(arena, Ball::default(), paddle, bricks)
        };
        let mut state1 = make(random_layout(&mut rng1, &arena, 30));
        let mut state2 = make(random_layout(&mut rng2, &arena, 30));

        let intents = [MoveIntent::Left, MoveIntent::None, MoveIntent::Right];
        for i in 0..500 {
            let intent = intents[i % intents.len()];
            step(&mut state1, 16.0, intent);
            step(&mut state2, 16.0, intent);
        }

        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.paddle, state2.paddle);
        assert_eq!(state1.bricks, state2.bricks);
        assert_eq!(state1.is_active, state2.is_active);
    }

    fn intent_strategy() -> impl Strategy<Value = MoveIntent> {
        prop_oneof![
            Just(MoveIntent::None),
            Just(MoveIntent::Left),
            Just(MoveIntent::Right),
        ]
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_arena(
            moves in proptest::collection::vec((intent_strategy(), 0.0f32..200.0), 1..100)
        ) {
            let mut state = state_with_ball(Vec2::new(200.0, 300.0), Vec2::ZERO);
            for (intent, dt) in moves {
                step(&mut state, dt, intent);
                prop_assert!(state.paddle.pos.x >= 0.0);
                prop_assert!(state.paddle.pos.x + state.paddle.width <= state.arena.width + EPS);
            }
        }

        #[test]
        fn prop_ball_stays_in_arena(
            x in 10.0f32..390.0,
            y in 10.0f32..300.0,
            vx in -0.5f32..0.5,
            vy in -0.5f32..0.5,
            dt in 0.0f32..50.0,
        ) {
            let mut state = state_with_ball(Vec2::new(x, y), Vec2::new(vx, vy));
            state.bricks = vec![Brick::new(Vec2::ZERO, 40.0, 16.0, 3)];
            step(&mut state, dt, MoveIntent::None);

            let ball = &state.ball;
            prop_assert!(ball.pos.x - ball.radius >= -EPS);
            prop_assert!(ball.pos.x + ball.radius <= state.arena.width + EPS);
            prop_assert!(ball.pos.y - ball.radius >= -EPS);
            prop_assert!(ball.pos.y + ball.radius <= state.arena.height + EPS);
        }

        #[test]
        fn prop_durability_never_increases(
            seed in any::<u64>(),
            moves in proptest::collection::vec((intent_strategy(), 0.0f32..40.0), 1..300)
        ) {
            let arena = Arena::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let paddle = Paddle::centered(&arena, PADDLE_WIDTH, PADDLE_HEIGHT);
            let bricks = random_layout(&mut rng, &arena, 40);
            let mut state = GameState::new(arena, Ball::default(), paddle, bricks);

            for (intent, dt) in moves {
                if !state.is_active {
                    break;
                }
                let before = state.bricks.clone();
                step(&mut state, dt, intent);

                for brick in &state.bricks {
                    // Bricks never move, so position identifies them
                    let old = before.iter().find(|b| b.pos == brick.pos);
                    prop_assert!(old.is_some());
                    prop_assert!(brick.durability <= old.map_or(0, |b| b.durability));
                    prop_assert!(brick.durability > 0);
                }
                if state.bricks.is_empty() {
                    prop_assert!(!state.is_active);
                }
            }
        }
    }
}
