//! Immediate-mode drawing of the current frame
//!
//! Pulls everything it needs out of the simulation state; nothing here
//! mutates gameplay.

use macroquad::prelude::*;

use crate::consts::{PADDLE_HEIGHT, PADDLE_WIDTH};
use crate::sim::GameState;

/// Segments in the ball's triangle fan
const BALL_SEGMENTS: u8 = 50;

/// Screen position of the lives overlay
const HUD_POS: (f32, f32) = (10.0, 20.0);
const HUD_FONT_SIZE: f32 = 24.0;

/// Draw one frame: clear, paddle, ball, lives overlay
pub fn draw_frame(state: &GameState) {
    clear_background(BLACK);

    let baseline = state.paddle_baseline();
    draw_rectangle(
        state.paddle.center_x - PADDLE_WIDTH / 2.0,
        baseline - PADDLE_HEIGHT / 2.0,
        PADDLE_WIDTH,
        PADDLE_HEIGHT,
        WHITE,
    );

    draw_poly(
        state.ball.pos.x,
        state.ball.pos.y,
        BALL_SEGMENTS,
        state.ball.radius,
        0.0,
        RED,
    );

    draw_text(
        &format!("Lives: {}", state.lives),
        HUD_POS.0,
        HUD_POS.1,
        HUD_FONT_SIZE,
        WHITE,
    );
}
