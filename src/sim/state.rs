//! Game state and core simulation types
//!
//! One ball, one paddle, a life counter and the current window size. The
//! paddle's vertical baseline is derived from the window height on demand,
//! never stored, so a resize re-derives it automatically.

use glam::Vec2;

use super::collision::Aabb;
use crate::consts::*;

/// The ball: position and velocity in pixels / pixels-per-tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Spawn position and velocity for a fresh game in a window of the given
    /// size. Spawning happens exactly once, at program start.
    fn spawn(width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(width - BALL_SPAWN_INSET, height / 2.0),
            vel: Vec2::new(BALL_START_VX, BALL_START_VY),
            radius: BALL_RADIUS,
        }
    }

    /// Bounding box: center ± radius on each axis
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, self.radius * 2.0, self.radius * 2.0)
    }
}

/// The player's paddle. Only the horizontal center moves; it tracks the
/// pointer with no clamping, so it can leave the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub center_x: f32,
}

impl Paddle {
    /// The paddle's box at the given vertical baseline
    pub fn aabb(&self, baseline: f32) -> Aabb {
        Aabb::from_center(
            Vec2::new(self.center_x, baseline),
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
        )
    }
}

/// Complete simulation state, owned by the host loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    /// Remaining lives; the game is over once this reaches zero
    pub lives: i32,
    /// Current window size in pixels
    pub width: f32,
    pub height: f32,
}

impl GameState {
    /// Fresh state for a window of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            ball: Ball::spawn(width, height),
            paddle: Paddle { center_x: 0.0 },
            lives: START_LIVES,
            width,
            height,
        }
    }

    /// Pointer-move operation: the paddle center follows the reported x
    /// coordinate directly. May be called zero or many times between ticks;
    /// the last value wins.
    pub fn set_pointer_x(&mut self, x: f32) {
        self.paddle.center_x = x;
    }

    /// Resize operation: store the new window size. The paddle baseline and
    /// miss line are derived values and pick up the change on the next tick.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Vertical center line of the paddle: 9/10 of the window height
    pub fn paddle_baseline(&self) -> f32 {
        9.0 * self.height / 10.0
    }

    /// A ball at or past this y coordinate counts as missed, regardless of
    /// its horizontal position.
    pub fn miss_line(&self) -> f32 {
        self.paddle_baseline() - PADDLE_HEIGHT / 2.0 + MISS_MARGIN
    }
}
