//! Rock Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};

    use rock_dodge::persistence::{LocalStore, MemoryStore, ProgressStore};
    use rock_dodge::platform::InputState;
    use rock_dodge::renderer::{self, RenderState};
    use rock_dodge::sim::Viewport;
    use rock_dodge::{FrameOutcome, GameError, Result, Session, Settings, Tuning};

    type Store = Box<dyn ProgressStore>;

    /// Game instance holding all state
    struct Game {
        session: Session<Store>,
        render_state: RenderState,
        input: InputState,
        settings: Settings,
    }

    impl Game {
        /// Run one frame: sample input, tick, draw. Returns whether to keep looping.
        fn update(&mut self) -> FrameOutcome {
            let input = self.input.take_snapshot();
            let outcome = self.session.frame(&input);

            if outcome == FrameOutcome::Continue {
                self.render();
            }
            self.update_hud();
            outcome
        }

        /// Render the current frame
        fn render(&mut self) {
            let state = self.session.state();
            let vertices = renderer::scene(state, &self.settings);
            let clear = renderer::background(state.elapsed, &self.settings);

            match self.render_state.render(&vertices, clear) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let state = self.session.state();

            set_text(&document, "score", &state.score.to_string());
            set_text(&document, "level", &state.level.to_string());
            set_text(&document, "high-score", &state.high_score.to_string());

            if let Some(el) = document
                .get_element_by_id("game-over")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                let display = if state.is_game_over() { "block" } else { "none" };
                let _ = el.style().set_property("display", display);
            }
        }

        /// Switch between the full and classic look
        fn toggle_look(&mut self) {
            self.settings = self.settings.toggled();
            self.settings.save();
        }
    }

    fn set_text(document: &web_sys::Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn open_store() -> Store {
        match LocalStore::open() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("{}; scores will not be saved", e);
                Box::new(MemoryStore::new())
            }
        }
    }

    /// Acquire the canvas and a GPU surface for it
    async fn init_graphics() -> Result<(HtmlCanvasElement, RenderState)> {
        let window = web_sys::window()
            .ok_or_else(|| GameError::GraphicsUnavailable("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| GameError::GraphicsUnavailable("no document".into()))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .and_then(|el| el.dyn_into().ok())
            .ok_or_else(|| GameError::GraphicsUnavailable("no #game canvas".into()))?;

        // Sized once at startup; window resizes are not tracked
        let width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(800.0) as u32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(600.0) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| GameError::GraphicsUnavailable(format!("no surface: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| GameError::GraphicsUnavailable(format!("no adapter: {e}")))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await?;
        Ok((canvas, render_state))
    }

    pub async fn run() -> Result<()> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {e}").into());
        }

        log::info!("Rock Dodge starting...");

        let (canvas, render_state) = init_graphics().await?;

        let (width, height) = render_state.size;
        let viewport = Viewport::new(width as f32, height as f32);
        let seed = js_sys::Date::now() as u64;
        let session = Session::new(open_store(), viewport, seed, Tuning::default());

        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            session,
            render_state,
            input: InputState::new(),
            settings: Settings::load(),
        }));
        game.borrow().update_hud();

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Rock Dodge running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Mouse move - absolute position
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().input.pointer_move(event.client_x() as f32);
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if g.input.key_down(&key) {
                    // Arrow keys would otherwise scroll the page
                    event.prevent_default();
                } else if key == "v" || key == "V" {
                    g.toggle_look();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur - keyup events are lost while unfocused
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().input.clear();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start - anchor the drag
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().input.touch_start(touch.client_x() as f32);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move - relative drag
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().input.touch_move(touch.client_x() as f32);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end / cancel
        for name in ["touchend", "touchcancel"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                game.borrow_mut().input.touch_end();
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let outcome = game.borrow_mut().update();

        // The loop parks on game over; restart schedules it again
        if outcome == FrameOutcome::Continue {
            request_animation_frame(game);
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                let restarted = {
                    let mut g = game.borrow_mut();
                    let restarted = g.session.restart(seed);
                    if restarted {
                        g.input.clear();
                        g.update_hud();
                    }
                    restarted
                };
                if restarted {
                    request_animation_frame(game.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Tell the user the game cannot run
    pub fn report_fatal(error: &GameError) {
        log::error!("{}", error);
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!("WebGL not supported! ({error})"));
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        wasm_game::report_fatal(&e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rock_dodge::persistence::MemoryStore;
    use rock_dodge::sim::{TickInput, Viewport};
    use rock_dodge::{FrameOutcome, Session, Tuning};

    env_logger::init();
    log::info!("Rock Dodge (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    // Headless round with a motionless player
    let mut session = Session::new(
        MemoryStore::new(),
        Viewport::new(800.0, 600.0),
        42,
        Tuning::default(),
    );
    let mut frames = 0u32;
    while frames < 100_000 && session.frame(&TickInput::default()) == FrameOutcome::Continue {
        frames += 1;
    }

    let state = session.state();
    println!(
        "Headless round: {} frames, score {}, level {}",
        frames, state.score, state.level
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
