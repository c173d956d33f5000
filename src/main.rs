//! Classic Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use classic_pong::Settings;
    use classic_pong::consts::*;
    use classic_pong::render::{Frame, Rect, RenderSink};
    use classic_pong::sim::{GameEvent, GameState, Playfield, Side, TickInput, tick};

    /// Canvas 2D implementation of the render sink
    struct Canvas2dSink {
        ctx: CanvasRenderingContext2d,
    }

    impl Canvas2dSink {
        fn fill_rect(&self, rect: &Rect) {
            self.ctx.set_fill_style_str(rect.color.0);
            self.ctx.fill_rect(
                rect.x as f64,
                rect.y as f64,
                rect.width as f64,
                rect.height as f64,
            );
        }
    }

    impl RenderSink for Canvas2dSink {
        fn present(&mut self, frame: &Frame) {
            // The board rect covers the whole field and clears the last frame
            self.fill_rect(&frame.board);
            for segment in &frame.net {
                self.fill_rect(segment);
            }
            self.fill_rect(&frame.player);
            self.fill_rect(&frame.cpu);

            self.ctx.set_fill_style_str(frame.ball.color.0);
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                frame.ball.x as f64,
                frame.ball.y as f64,
                frame.ball.radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.close_path();
            self.ctx.fill();
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        input: TickInput,
        sink: Canvas2dSink,
        accumulator: f32,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(state: GameState, settings: Settings, sink: Canvas2dSink) -> Self {
            Self {
                state,
                settings,
                input: TickInput::default(),
                sink,
                accumulator: 0.0,
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run simulation ticks at the fixed rate
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let events = tick(&mut self.state, &self.input);
                self.log_events(&events);
                self.accumulator -= SIM_DT;
                substeps += 1;
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

        fn log_events(&self, events: &[GameEvent]) {
            for event in events {
                match event {
                    GameEvent::WallBounce => log::debug!("wall bounce"),
                    GameEvent::PaddleHit(Side::Player) => log::debug!("player return"),
                    GameEvent::PaddleHit(Side::Cpu) => log::debug!("cpu return"),
                    GameEvent::Score(scorer) => log::info!(
                        "{} scores ({} - {}, cpu level {:.1})",
                        if *scorer == Side::Player { "player" } else { "cpu" },
                        self.state.player().score(),
                        self.state.cpu().score(),
                        self.state.cpu().level(),
                    ),
                }
            }
        }

        /// Compose and present the current frame
        fn render(&mut self) {
            let frame = Frame::compose(&self.state, &self.settings);
            self.sink.present(&frame);
        }

        /// Update score display in the DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.get_element_by_id("player-score") {
                el.set_inner_html(&format!("Your score: {}", self.state.player().score()));
            }
            if let Some(el) = document.get_element_by_id("computer-score") {
                el.set_inner_html(&format!("CPU Score: {}", self.state.cpu().score()));
            }
            if self.settings.show_fps {
                if let Some(el) = document.get_element_by_id("fps") {
                    el.set_text_content(Some(&self.fps.to_string()));
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Classic Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("2d context unavailable")
            .dyn_into()
            .expect("not a 2d context");

        // Session bounds are fixed from the canvas dimensions at startup
        let field = Playfield::new(canvas.width() as f32, canvas.height() as f32);
        let settings = Settings::load();

        let game = Rc::new(RefCell::new(Game::new(
            GameState::new(field),
            settings,
            Canvas2dSink { ctx },
        )));

        setup_input_handlers(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Classic Pong running ({}x{})", field.width, field.height);
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move drives the player paddle. The desired center is stored
        // in the pending input and applied at the next tick.
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            // The canvas offset shifts when the page scrolls; measure per event
            let rect = canvas_clone.get_bounding_client_rect();
            let y = event.client_y() as f32 - rect.top() as f32;
            game.borrow_mut().input.paddle_center_y = Some(y);
        });
        let _ =
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
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

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
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
    use classic_pong::sim::{GameEvent, GameState, Playfield, Side, TickInput, tick};

    env_logger::init();
    log::info!("Classic Pong (native) starting...");
    log::info!("Headless demo: the player paddle shadows the ball for 3000 ticks");

    let mut state = GameState::new(Playfield::new(700.0, 500.0));
    for _ in 0..3000 {
        let input = TickInput {
            paddle_center_y: Some(state.ball().pos().y),
        };
        for event in tick(&mut state, &input) {
            match event {
                GameEvent::Score(Side::Player) => log::info!("player scores"),
                GameEvent::Score(Side::Cpu) => log::info!("cpu scores"),
                _ => {}
            }
        }
    }

    println!(
        "Final score after {} ticks: you {} - cpu {}",
        state.time_ticks(),
        state.player().score(),
        state.cpu().score()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
