//! Robo Grid entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement};

    use robo_grid::consts::*;
    use robo_grid::render::{CanvasRenderer, build_scene};
    use robo_grid::settings::Settings;
    use robo_grid::sim::{Direction, FixedStep, RunPhase, SimState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: SimState,
        renderer: Option<CanvasRenderer>,
        settings: Settings,
        clock: FixedStep,
        last_time: f64,
        input: TickInput,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: SimState::new(seed),
                renderer: None,
                settings: Settings::load(),
                clock: FixedStep::new(),
                last_time: 0.0,
                input: TickInput::default(),
            }
        }

        /// Run simulation ticks owed for this frame
        fn update(&mut self, dt: f32) {
            let steps = self.clock.advance(dt);
            for _ in 0..steps {
                let input = self.input;
                tick(&mut self.state, &input);

                // Clear one-shot inputs after processing
                self.input = TickInput::default();
            }
        }

        /// Render the current frame
        fn render(&self) {
            if let Some(ref renderer) = self.renderer {
                renderer.draw(&build_scene(&self.state, &self.settings));
            }
        }

        /// Rebuild the program list display (current highlighted, queue below)
        fn update_program_display(&self, document: &Document) {
            let Some(list) = document.get_element_by_id("program") else {
                return;
            };
            list.set_inner_html("");

            let append = |text: &str, class: &str| {
                if let Ok(item) = document.create_element("li") {
                    item.set_text_content(Some(text));
                    let _ = item.set_attribute("class", class);
                    let _ = list.append_child(&item);
                }
            };

            if let Some(ref current) = self.state.current {
                append(current.direction.label(), "instruction current");
            }
            for instruction in self.state.program.iter() {
                append(instruction.direction.label(), "instruction");
            }
        }

        /// Update the status banner from the run phase
        fn update_status(&self, document: &Document) {
            let Some(el) = document.get_element_by_id("status") else {
                return;
            };
            let (text, class) = match self.state.phase {
                RunPhase::Idle => ("queue moves, then press Run", "status"),
                RunPhase::Running => ("running...", "status"),
                RunPhase::Stopped => ("program complete", "status"),
                RunPhase::Won => ("goal reached - you win!", "status won"),
                RunPhase::Lost => ("hit a hazard - you lose!", "status lost"),
            };
            el.set_text_content(Some(text));
            let _ = el.set_attribute("class", class);
        }

        /// Fresh board and program
        fn restart(&mut self, seed: u64) {
            self.state.reset(seed);
            self.clock.reset();
            self.input = TickInput::default();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Robo Grid starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Board initialized with seed: {}", seed);

        match CanvasRenderer::new(&canvas) {
            Ok(renderer) => game.borrow_mut().renderer = Some(renderer),
            Err(e) => log::error!("Failed to acquire 2d context: {:?}", e),
        }

        setup_buttons(&document, game.clone());
        setup_keyboard(game.clone());

        request_animation_frame(game);

        log::info!("Robo Grid running!");
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        let moves = [
            ("btn-up", Direction::Up),
            ("btn-down", Direction::Down),
            ("btn-left", Direction::Left),
            ("btn-right", Direction::Right),
        ];

        for (id, direction) in moves {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    game.borrow_mut().input.queue = Some(direction);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        if let Some(btn) = document.get_element_by_id("btn-run") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().input.run = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("btn-reset") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                game.borrow_mut().restart(seed);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let mut g = game.borrow_mut();
            match event.key().as_str() {
                "ArrowUp" => g.input.queue = Some(Direction::Up),
                "ArrowDown" => g.input.queue = Some(Direction::Down),
                "ArrowLeft" => g.input.queue = Some(Direction::Left),
                "ArrowRight" => g.input.queue = Some(Direction::Right),
                " " | "Enter" => g.input.run = true,
                "r" | "R" => {
                    let seed = js_sys::Date::now() as u64;
                    g.restart(seed);
                }
                _ => {}
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
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

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();

            let document = web_sys::window().unwrap().document().unwrap();
            g.update_program_display(&document);
            g.update_status(&document);
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
    log::info!("Robo Grid (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Scripted demo: queue a short program and run it to completion
    demo_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_run() {
    use robo_grid::sim::{Direction, SimState, TickInput, tick};

    let mut state = SimState::new(0x5EED);
    if let Some(goal) = state.grid.goal() {
        log::info!("goal cell: {:?}", goal);
    }

    for direction in [Direction::Right, Direction::Right, Direction::Down] {
        state.enqueue(direction);
    }
    state.start_run();

    let idle = TickInput::default();
    let mut ticks = 0u32;
    while !state.phase.is_settled() && ticks < 1000 {
        tick(&mut state, &idle);
        ticks += 1;
    }

    println!(
        "demo finished after {} ticks: {:?}, robot at cell {:?}",
        ticks,
        state.phase,
        state.robot.cell(&state.grid),
    );
}
