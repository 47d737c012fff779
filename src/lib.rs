//! Solo Pong - a one-ball, one-paddle catch game
//!
//! Core modules:
//! - `sim`: deterministic per-frame simulation (ball, paddle, lives)
//! - `render`: immediate-mode drawing of the current frame
//!
//! The simulation is pure and headless-testable. The host loop in `main.rs`
//! samples input, calls [`sim::tick`] once per displayed frame, and hands the
//! resulting state to `render`.

pub mod render;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Initial window size in pixels
    pub const WINDOW_WIDTH: i32 = 1400;
    pub const WINDOW_HEIGHT: i32 = 700;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 85.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;

    /// Ball geometry
    pub const BALL_RADIUS: f32 = 15.0;
    /// Horizontal inset of the spawn point from the right window edge
    pub const BALL_SPAWN_INSET: f32 = 60.0;
    /// Spawn velocity, in pixels per tick
    pub const BALL_START_VX: f32 = -0.25;
    pub const BALL_START_VY: f32 = 0.009;

    /// Downward acceleration added to the ball every tick. There is no
    /// terminal velocity cap.
    pub const GRAVITY: f32 = 0.000_35;

    /// Vertical distance below the paddle's center line past which the ball
    /// counts as missed
    pub const MISS_MARGIN: f32 = 60.0;

    /// Lives at program start
    pub const START_LIVES: i32 = 1;
}
