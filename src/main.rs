//! Dino Run entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use dino_run::Settings;
    use dino_run::platform::web::CanvasSurface;
    use dino_run::platform::{Activation, FrameClock, activate, input::is_activation_key};
    use dino_run::renderer::{RenderOptions, render};
    use dino_run::sim::GameState;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        clock: FrameClock,
        surface: CanvasSurface,
        options: RenderOptions,
    }

    impl Game {
        fn frame(&mut self, time: f64) {
            let dt = self.clock.advance(time);
            self.state.update(dt);
            render(&self.state, &mut self.surface, &self.options);

            for event in self.state.drain_events() {
                log::debug!("{:?}", event);
            }
        }

        fn on_activate(&mut self) {
            match activate(&mut self.state) {
                Activation::Started => log::info!("Game started!"),
                Activation::Restarted => log::info!("Game restarted!"),
                Activation::Jumped | Activation::Ignored => {}
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Dino Run starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let settings = Settings::load();
        // First run seeds LocalStorage with a complete, editable document
        settings.save();
        canvas.set_width(settings.viewport_width as u32);
        canvas.set_height(settings.viewport_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let state = GameState::new(settings.viewport_width, settings.viewport_height, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let game = Rc::new(RefCell::new(Game {
            state,
            clock: FrameClock::new(settings.max_frame_ms),
            surface: CanvasSurface::new(ctx),
            options: RenderOptions::from(&settings),
        }));

        setup_input_handlers(&canvas, game.clone())?;
        request_animation_frame(game);

        log::info!("Dino Run running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if !is_activation_key(&event.code()) {
                    return;
                }
                event.prevent_default();
                if !event.repeat() {
                    game.borrow_mut().on_activate();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
                event.prevent_default();
                game.borrow_mut().on_activate();
            });
            canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(callback.unchecked_ref());
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), dino_run::GameError> {
    use dino_run::consts::FRAME_MS;
    use dino_run::platform::{Activation, activate};
    use dino_run::sim::{GameEvent, GameState, autopilot};

    env_logger::init();
    log::info!("Dino Run (native) starting...");
    log::info!("Native mode runs a headless demo - serve the wasm build to play");

    let settings = dino_run::Settings::load();
    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    let mut state = GameState::new(settings.viewport_width, settings.viewport_height, seed)?;
    activate(&mut state);

    let mut best = 0u64;
    let mut jumps = 0u32;
    for _ in 0..settings.demo_frames {
        if settings.autopilot {
            autopilot::drive(&mut state, FRAME_MS);
        } else {
            state.update(FRAME_MS);
        }

        for event in state.drain_events() {
            match event {
                GameEvent::Jumped => jumps += 1,
                GameEvent::GameOver { score } => best = best.max(score),
                other => log::debug!("{:?}", other),
            }
        }

        if state.is_game_over() && activate(&mut state) == Activation::Restarted {
            log::info!("Restarting (run {})", state.runs);
        }
    }

    best = best.max(state.display_score());
    log::info!(
        "Demo finished after {} frames: {} run(s), {} jumps, best score {}, current speed {:.1}",
        settings.demo_frames,
        state.runs,
        jumps,
        best,
        state.speed
    );
    println!("best score: {}", best);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
