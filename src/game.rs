//! Game session
//!
//! Owns one game's state together with its input adapter and frame clock.
//! Hosts drive it with key events and frame timestamps; nothing here is
//! global, so several sessions can coexist.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::platform::{FrameClock, InputAdapter, KeyAction};
use crate::renderer::{Renderer, render_scene};
use crate::settings::{Settings, SettingsError};
use crate::sim::{Ball, GameState, MoveIntent, Paddle, generate_layout, step};

/// Session lifecycle as seen by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Built, waiting for the start key
    Ready,
    /// Frames are being stepped
    Running,
    /// Won or lost; terminal
    Ended,
}

/// Build a new session from settings
pub fn create_game(settings: &Settings) -> Result<Game, SettingsError> {
    Game::new(settings)
}

/// A single game session driven by host key events and frames
pub struct Game {
    state: GameState,
    input: InputAdapter,
    clock: FrameClock,
    seed: u64,
    show_status: bool,
}

impl Game {
    pub fn new(settings: &Settings) -> Result<Self, SettingsError> {
        settings.validate()?;

        let seed = settings.seed.unwrap_or_else(clock_seed);
        let arena = settings.arena();
        let mut rng = Pcg32::seed_from_u64(seed);
        let bricks = generate_layout(&mut rng, &arena, settings.layout);
        let ball = Ball::new(
            settings.ball_start,
            settings.ball_velocity,
            settings.ball_radius,
        );
        let paddle = Paddle::centered(&arena, settings.paddle_width, settings.paddle_height);

        log::info!(
            "Game created: arena {}x{}, {} bricks, seed {}",
            arena.width,
            arena.height,
            bricks.len(),
            seed
        );

        Ok(Self {
            state: GameState::new(arena, ball, paddle, bricks),
            input: InputAdapter::from_settings(settings),
            clock: FrameClock::new(),
            seed,
            show_status: settings.show_status,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> GamePhase {
        if !self.state.is_active {
            GamePhase::Ended
        } else if self.clock.is_running() {
            GamePhase::Running
        } else {
            GamePhase::Ready
        }
    }

    /// Begin stepping frames. Only a ready game can start.
    pub fn start(&mut self) {
        if self.phase() != GamePhase::Ready {
            return;
        }
        self.input.mark_started();
        self.clock.start();
        log::info!("Game started");
    }

    /// Stop stepping frames; the state is kept as is
    pub fn stop(&mut self) {
        if self.clock.is_running() {
            self.clock.stop();
            log::info!("Game loop stopped");
        }
    }

    /// Override the movement intent (autopilot, touch controls)
    pub fn set_intent(&mut self, intent: MoveIntent) {
        self.state.move_intent = intent;
    }

    pub fn key_down(&mut self, key: &str) -> KeyAction {
        let action = self.input.key_down(key);
        self.apply(action);
        action
    }

    pub fn key_up(&mut self, key: &str) -> KeyAction {
        let action = self.input.key_up(key);
        self.apply(action);
        action
    }

    fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Move(intent) => self.state.move_intent = intent,
            KeyAction::Start => self.start(),
            KeyAction::Ignored => {}
        }
    }

    /// Step one frame at host timestamp `timestamp` (milliseconds)
    ///
    /// Returns whether the host should request another frame. The loop stops
    /// itself once the game ends.
    pub fn frame(&mut self, timestamp: f64) -> bool {
        if !self.clock.is_running() {
            return false;
        }

        // Nothing moves without elapsed time, and contacts settled last frame
        // must not be resolved again
        let dt = self.clock.tick(timestamp);
        if dt > 0.0 {
            let intent = self.state.move_intent;
            step(&mut self.state, dt, intent);
        }

        if !self.state.is_active {
            log::info!(
                "Game over: {:?}, {} bricks destroyed",
                self.state.outcome,
                self.state.bricks_destroyed
            );
            self.clock.stop();
        }
        self.clock.is_running()
    }

    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        render_scene(renderer, &self.state, self.phase(), self.show_status);
    }
}

/// Steer the paddle under the ball, leaving a dead zone around its centre
pub fn autopilot_intent(state: &GameState) -> MoveIntent {
    let paddle_center = state.paddle.pos.x + state.paddle.width / 2.0;
    let offset = state.ball.pos.x - paddle_center;
    let dead_zone = state.paddle.width / 4.0;

    if offset < -dead_zone {
        MoveIntent::Left
    } else if offset > dead_zone {
        MoveIntent::Right
    } else {
        MoveIntent::None
    }
}

#[cfg(target_arch = "wasm32")]
fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
