//! Solo Pong entry point
//!
//! Owns the window and the per-frame host loop: sample input, run one
//! simulation tick, draw, present. The simulation itself never touches the
//! windowing layer.

use macroquad::prelude::*;

use solo_pong::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use solo_pong::render;
use solo_pong::sim::{GameState, tick};

/// Host-side application: one simulation state plus the handler methods the
/// windowing layer drives each frame.
struct App {
    state: GameState,
    game_over: bool,
}

impl App {
    fn new(width: f32, height: f32) -> Self {
        Self {
            state: GameState::new(width, height),
            game_over: false,
        }
    }

    fn on_resize(&mut self, width: f32, height: f32) {
        self.state.on_resize(width, height);
    }

    fn on_pointer_move(&mut self, x: f32, _y: f32) {
        self.state.set_pointer_x(x);
    }

    /// Returns true when the key requests an immediate exit
    fn on_key(&mut self, key: KeyCode) -> bool {
        matches!(key, KeyCode::Escape)
    }

    /// One displayed frame: advance the simulation, report, draw
    fn on_frame(&mut self) {
        let result = tick(&mut self.state);
        if result.missed {
            println!("Lives left: {}", result.lives);
        }
        if result.game_over {
            println!("Game Over!");
            self.game_over = true;
        }
        render::draw_frame(&self.state);
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Solo Pong".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Solo Pong starting ({}x{})", WINDOW_WIDTH, WINDOW_HEIGHT);

    let mut app = App::new(screen_width(), screen_height());

    loop {
        if get_keys_pressed().into_iter().any(|key| app.on_key(key)) {
            log::info!("Exit requested");
            break;
        }

        let (width, height) = (screen_width(), screen_height());
        if width != app.state.width || height != app.state.height {
            app.on_resize(width, height);
        }

        let (pointer_x, pointer_y) = mouse_position();
        app.on_pointer_move(pointer_x, pointer_y);

        app.on_frame();
        if app.game_over {
            // Exhausting lives is a normal terminal state, not an error
            break;
        }

        next_frame().await;
    }
}
