//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use brick_breaker::platform::KeyAction;
    use brick_breaker::renderer::CanvasRenderer;
    use brick_breaker::{Game, Settings, create_game};

    /// Session plus the surface it paints on
    struct App {
        game: Game,
        renderer: CanvasRenderer,
    }

    impl App {
        fn render(&mut self) {
            self.game.render(&mut self.renderer);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let body = document.body().ok_or("no body")?;

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        body.append_child(&canvas)?;

        let settings = Settings::load();
        let game = create_game(&settings).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let renderer = CanvasRenderer::new(&canvas, settings.arena_width, settings.arena_height)
            .ok_or("canvas has no 2d context")?;

        let app = Rc::new(RefCell::new(App { game, renderer }));

        // Ready screen until the start key arrives
        app.borrow_mut().render();

        setup_input_handlers(app)?;

        log::info!("Brick Breaker ready, press any key");
        Ok(())
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Key down: movement or start
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let action = app.borrow_mut().game.key_down(&event.key());
                if action == KeyAction::Start {
                    request_animation_frame(app.clone());
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up: release movement
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window for animation frame");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let keep_running = {
            let mut a = app.borrow_mut();
            let keep_running = a.game.frame(time);
            a.render();
            keep_running
        };

        if keep_running {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

/// Frame length used by the headless run (60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_FRAME_MS: f64 = 1000.0 / 60.0;

/// Give up on a headless run after this many frames (ten minutes of play)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_MAX_FRAMES: u32 = 60 * 60 * 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::game::autopilot_intent;
    use brick_breaker::{GamePhase, Settings, create_game};

    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode runs a headless autopilot game - use `trunk serve` to play in a browser");

    let settings = Settings::load();
    let mut game = match create_game(&settings) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid settings: {}", e);
            std::process::exit(1);
        }
    };

    game.start();
    let mut frames = 0;
    while game.phase() == GamePhase::Running && frames < HEADLESS_MAX_FRAMES {
        let intent = autopilot_intent(game.state());
        game.set_intent(intent);
        game.frame(frames as f64 * HEADLESS_FRAME_MS);
        frames += 1;
    }

    let state = game.state();
    match state.outcome {
        Some(outcome) => log::info!(
            "Finished after {} frames: {:?}, {} bricks destroyed, {} left",
            frames,
            outcome,
            state.bricks_destroyed,
            state.bricks.len()
        ),
        None => log::warn!(
            "Stopped after {} frames with {} bricks left",
            frames,
            state.bricks.len()
        ),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
