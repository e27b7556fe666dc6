//! Lime Pirate entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use lime_pirate::GameConfig;
    use lime_pirate::consts::SIM_DT;
    use lime_pirate::platform::assets::SpriteImages;
    use lime_pirate::platform::input::TAP_BUTTONS;
    use lime_pirate::platform::{KeyBinding, PlatformError, map_key};
    use lime_pirate::renderer::CanvasRenderer;
    use lime_pirate::sim::{Controls, FixedStep, GameState, TickInput, autopilot, tick};
    use lime_pirate::ui::HudModel;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        controls: Controls,
        step: FixedStep,
        last_time: f64,
        /// One-shot: dismiss the game-over overlay on the next tick
        acknowledge: bool,
        /// Demo mode - the autopilot drives
        autopilot: bool,
        tap_release_ms: f64,
        /// Last HUD written to the DOM
        hud: Option<HudModel>,
    }

    impl Game {
        fn new(state: GameState, renderer: CanvasRenderer) -> Self {
            let tap_release_ms = state.tuning.tap_release_ms;
            Self {
                state,
                renderer,
                controls: Controls::default(),
                step: FixedStep::default(),
                last_time: 0.0,
                acknowledge: false,
                autopilot: false,
                tap_release_ms,
                hud: None,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            for _ in 0..self.step.advance(dt) {
                self.controls.release_expired(time);
                let controls = if self.autopilot {
                    autopilot::steer(&self.state)
                } else {
                    self.controls.clone()
                };
                let input = TickInput {
                    controls,
                    now_ms: time,
                    acknowledge: self.acknowledge,
                };
                tick(&mut self.state, &input);

                // Clear one-shot inputs after processing
                self.acknowledge = false;
            }

            for event in self.state.drain_events() {
                log::info!("{}", event);
            }
        }

        /// Render the current frame
        fn render(&self) {
            self.renderer.render(&self.state);
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self, time: f64) {
            let hud = HudModel::from_state(&self.state, time);
            if self.hud.as_ref() == Some(&hud) {
                return;
            }

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            set_text(&document, "#hud-level .hud-value", &hud.level);
            set_text(&document, "#hud-timer .hud-value", &hud.timer);
            set_text(&document, "#hud-limes .hud-value", &hud.remaining);

            if let Some(el) = document.get_element_by_id("hud-boost") {
                match &hud.boost {
                    Some(remaining) => {
                        let _ = el.set_attribute("class", "hud-item");
                        set_text(&document, "#hud-boost .hud-value", remaining);
                    }
                    None => {
                        let _ = el.set_attribute("class", "hud-item hidden");
                    }
                }
            }

            // Show/hide game over
            if let Some(el) = document.get_element_by_id("game-over") {
                match hud.overlay {
                    Some(message) => {
                        let _ = el.set_attribute("class", "");
                        set_text(&document, "#game-over-message", message);
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }

            self.hud = Some(hud);
        }
    }

    fn set_text(document: &Document, selector: &str, text: &str) {
        if let Some(el) = document.query_selector(selector).ok().flatten() {
            el.set_text_content(Some(text));
        }
    }

    /// High-resolution timestamp on the same clock as animation frames
    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    /// Inline JSON config, if the page carries one
    fn read_config(document: &Document) -> GameConfig {
        match document
            .get_element_by_id(GameConfig::ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(json) => GameConfig::from_json_or_default(&json),
            None => GameConfig::default(),
        }
    }

    pub async fn run() -> Result<(), PlatformError> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
        }

        log::info!("Lime Pirate starting...");

        let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
        let document = window.document().ok_or(PlatformError::NoDocument)?;
        let config = read_config(&document);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| PlatformError::MissingElement("gameCanvas".to_string()))?
            .dyn_into()
            .map_err(|_| PlatformError::MissingElement("gameCanvas".to_string()))?;

        // Full viewport, sized once
        let width = window.inner_width()?.as_f64().unwrap_or(800.0);
        let height = window.inner_height()?.as_f64().unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        // Start is gated on the background image
        let images = SpriteImages::load(&config.assets).await?;
        let renderer = CanvasRenderer::new(&canvas, images)?;

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(
            seed,
            Vec2::new(width as f32, height as f32),
            config.tuning,
        );
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game::new(state, renderer)));

        setup_keyboard(game.clone())?;
        setup_tap_buttons(&document, game.clone())?;
        setup_continue_button(&document, game.clone())?;

        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        // Start game loop
        request_animation_frame(game);

        log::info!("Lime Pirate running!");
        Ok(())
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) -> Result<(), PlatformError> {
        let window = web_sys::window().ok_or(PlatformError::NoWindow)?;

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(binding) = map_key(&event.key()) else {
                    return;
                };
                event.prevent_default();
                let mut g = game.borrow_mut();
                match binding {
                    KeyBinding::Move(dir) => g.controls.press(dir),
                    KeyBinding::Acknowledge if !event.repeat() => g.acknowledge = true,
                    KeyBinding::ToggleAutopilot if !event.repeat() => {
                        g.autopilot = !g.autopilot;
                        // Keys held across the toggle would otherwise stick
                        g.controls.clear();
                        log::info!("Autopilot: {}", g.autopilot);
                    }
                    _ => {}
                }
            });
            window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(KeyBinding::Move(dir)) = map_key(&event.key()) {
                    game.borrow_mut().controls.release(dir);
                }
            });
            window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_tap_buttons(
        document: &Document,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), PlatformError> {
        for (id, dir) in TAP_BUTTONS {
            let Some(btn) = document.get_element_by_id(id) else {
                log::debug!("No #{} button, tap controls disabled", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                let delay = g.tap_release_ms;
                g.controls.tap(dir, now_ms(), delay);
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn setup_continue_button(
        document: &Document,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), PlatformError> {
        if let Some(btn) = document.get_element_by_id("continue-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().acknowledge = true;
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud(time);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Lime Pirate failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Lime Pirate (native) starting...");
    log::info!(
        "Native mode is a headless autopilot run - use `trunk serve` for the web version"
    );

    let config = match std::env::args().nth(1) {
        Some(path) => match lime_pirate::GameConfig::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}: {} - using defaults", path, e);
                lime_pirate::GameConfig::default()
            }
        },
        None => lime_pirate::GameConfig::default(),
    };

    headless::run(config, 3);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{SystemTime, UNIX_EPOCH};

    use glam::Vec2;
    use lime_pirate::GameConfig;
    use lime_pirate::consts::SIM_DT;
    use lime_pirate::sim::{GamePhase, GameState, TickInput, autopilot, tick};

    /// Ten simulated minutes
    const MAX_TICKS: u64 = 60 * 60 * 10;

    /// Let the autopilot play until `max_runs` runs have ended
    pub fn run(config: GameConfig, max_runs: u32) {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let mut state = GameState::new(seed, Vec2::new(1280.0, 720.0), config.tuning);
        log::info!("Headless run with seed: {}", seed);

        let mut finished_runs = 0;
        let mut best_level = state.level;
        for t in 0..MAX_TICKS {
            let game_over = matches!(state.phase, GamePhase::GameOver(_));
            if game_over {
                finished_runs += 1;
                if finished_runs >= max_runs {
                    break;
                }
            }

            let input = TickInput {
                controls: autopilot::steer(&state),
                // Simulated wall clock
                now_ms: t as f64 * SIM_DT as f64 * 1000.0,
                acknowledge: game_over,
            };
            tick(&mut state, &input);
            best_level = best_level.max(state.level);

            for event in state.drain_events() {
                log::info!("[tick {:>6}] {}", t, event);
            }
        }

        println!(
            "Seed {}: {} run(s) finished, best level {}",
            seed, finished_runs, best_level
        );
    }
}
