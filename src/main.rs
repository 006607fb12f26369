//! Catch Nano entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use catch_nano::Settings;
    use catch_nano::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
    use catch_nano::renderer::CanvasRenderer;
    use catch_nano::sim::{GameEvent, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Option<CanvasRenderer>,
        input: TickInput,
        settings: Settings,
        last_score: u32,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, width: f32, height: f32, settings: Settings) -> Self {
            Self {
                state: GameState::new(seed, width, height),
                renderer: None,
                input: TickInput::default(),
                settings,
                last_score: 0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run one simulation frame
        fn update(&mut self, time: f64) {
            let event = tick(&mut self.state, &self.input, time);

            // Pointer targets are one-shot; held keys persist
            self.input.target_x = None;

            // Flash on fruit catch
            if self.state.score > self.last_score {
                if let Some(ref mut renderer) = self.renderer {
                    renderer.trigger_flash();
                }
            }
            self.last_score = self.state.score;

            if let GameEvent::GameOver { final_score } = event {
                show_game_over(final_score);
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let snap = self.state.snapshot();
            if let Some(ref mut renderer) = self.renderer {
                renderer.render(&snap);
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }

            if let Some(el) = document.get_element_by_id("lives") {
                el.set_text_content(Some(&self.state.lives.max(0).to_string()));
            }

            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    el.set_text_content(Some(&self.fps.to_string()));
                } else {
                    el.set_text_content(None);
                }
            }
        }

        /// Begin a fresh session from the start or end overlay
        fn start(&mut self) {
            self.state.start(now_ms());
            self.last_score = 0;

            let document = web_sys::window().unwrap().document().unwrap();
            if let Some(el) = document.get_element_by_id("start-overlay") {
                let _ = el.set_attribute("class", "overlay hidden");
            }
            if let Some(el) = document.get_element_by_id("end-overlay") {
                let _ = el.set_attribute("class", "overlay hidden");
            }
        }
    }

    /// Monotonic timestamp in ms, same clock as the RAF callback
    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    /// Reveal the end overlay and build the share link
    fn show_game_over(final_score: u32) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(el) = document.get_element_by_id("final-score") {
            el.set_text_content(Some(&final_score.to_string()));
        }
        if let Some(el) = document.get_element_by_id("end-overlay") {
            let _ = el.set_attribute("class", "overlay");
        }

        // Shareable result link; text and URL are URI-encoded, nothing more
        if let Some(el) = document.get_element_by_id("share-button") {
            let page = window.location().href().unwrap_or_default();
            let text = format!(
                "I scored {final_score} points in Catch Nano! Catch some fruit yourself!"
            );
            let href = format!(
                "https://twitter.com/intent/tweet?text={}&url={}",
                String::from(js_sys::encode_uri_component(&text)),
                String::from(js_sys::encode_uri_component(&page)),
            );
            let _ = el.set_attribute("href", &href);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Catch Nano starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        if canvas.width() == 0 {
            canvas.set_width(DEFAULT_CANVAS_WIDTH as u32);
            canvas.set_height(DEFAULT_CANVAS_HEIGHT as u32);
        }

        // Settings and renderer are built before the shared game cell so no
        // borrow is outstanding when the renderer is installed below.
        let settings = Settings::load();
        let renderer = match CanvasRenderer::new(canvas.clone(), settings.reduced_motion) {
            Ok(renderer) => Some(renderer),
            Err(e) => {
                log::error!("Failed to create renderer: {:?}", e);
                None
            }
        };

        // Play area geometry is queried once and reused for boundary math
        let (width, height) = renderer
            .as_ref()
            .map(|r| r.size())
            .unwrap_or((canvas.width() as f32, canvas.height() as f32));

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, width, height, settings)));
        game.borrow_mut().renderer = renderer;

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());

        request_animation_frame(game);

        log::info!("Catch Nano running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Held-key state
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "Left" => g.input.left = true,
                    "ArrowRight" | "Right" => g.input.right = true,
                    // Toggle the FPS counter; the preference persists
                    "f" | "F" => {
                        g.settings.show_fps = !g.settings.show_fps;
                        g.settings.save();
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "Left" => g.input.left = false,
                    "ArrowRight" | "Right" => g.input.right = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - absolute pointer target for the basket center
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().input.target_x = Some(event.offset_x() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        if game.borrow().settings.touch_controls {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    game.borrow_mut().input.target_x = Some(x);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for id in ["start-button", "restart-button"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    game.borrow_mut().start();
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Catch Nano (native) starting...");

    // Headless autopilot session: exercises the sim without a browser.
    run_demo_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn run_demo_session() {
    use catch_nano::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
    use catch_nano::sim::{GameEvent, GameState, ItemKind, TickInput, tick};

    let mut state = GameState::new(0xCA7C4, DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT);
    state.start(0.0);

    let mut input = TickInput::default();
    let mut now = 0.0;
    let frame_ms = 1000.0 / 60.0;

    let final_score = loop {
        now += frame_ms;

        // Chase the lowest fruit on screen
        input.target_x = state
            .items
            .iter()
            .filter(|i| i.kind == ItemKind::Fruit)
            .max_by(|a, b| {
                a.pos
                    .y
                    .partial_cmp(&b.pos.y)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|i| i.pos.x);

        match tick(&mut state, &input, now) {
            GameEvent::GameOver { final_score } => break final_score,
            GameEvent::Continue => {}
        }

        // Two simulated minutes is plenty for a demo
        if now > 120_000.0 {
            break state.score;
        }
    };

    println!("Demo session finished with score {final_score}");
}
