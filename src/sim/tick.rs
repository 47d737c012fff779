//! The per-frame simulation step
//!
//! Exactly one [`tick`] runs per displayed frame. The update order is
//! load-bearing: integrate, paddle catch, side walls, far wall, miss check.

use glam::Vec2;

use super::state::GameState;
use crate::consts::GRAVITY;

/// What a single tick produced, for the host loop to render and report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickResult {
    /// Ball position after the tick
    pub pos: Vec2,
    /// Ball velocity after the tick
    pub vel: Vec2,
    /// Remaining lives
    pub lives: i32,
    /// The ball sat past the miss line this tick and cost a life
    pub missed: bool,
    /// Lives are exhausted; the host must stop ticking and exit
    pub game_over: bool,
}

/// Advance the simulation by one frame.
///
/// Collision responses are velocity sign flips only; the ball is never
/// repositioned onto a boundary, and a missed ball is never respawned. It
/// keeps falling, losing a life on every tick it spends past the miss line,
/// until the host acts on `game_over`.
pub fn tick(state: &mut GameState) -> TickResult {
    let baseline = state.paddle_baseline();
    let miss_line = state.miss_line();
    let width = state.width;
    let height = state.height;

    let ball = &mut state.ball;

    // Euler step, position before gravity
    ball.pos += ball.vel;
    ball.vel.y += GRAVITY;

    // Paddle catch: always deflect upward, whatever the approach direction
    if ball.aabb().overlaps(&state.paddle.aabb(baseline)) {
        ball.vel.y = -ball.vel.y.abs();
    }

    // Side walls
    if ball.pos.x - ball.radius < 0.0 || ball.pos.x + ball.radius > width {
        ball.vel.x = -ball.vel.x;
    }

    // Far wall
    if ball.pos.y + ball.radius > height {
        ball.vel.y = -ball.vel.y.abs();
    }

    // Miss line is a pure y threshold, independent of where the paddle is
    // horizontally
    let missed = ball.pos.y >= miss_line;
    if missed {
        state.lives -= 1;
    }

    TickResult {
        pos: state.ball.pos,
        vel: state.ball.vel,
        lives: state.lives,
        missed,
        game_over: state.lives <= 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    fn state() -> GameState {
        GameState::new(1400.0, 700.0)
    }

    #[test]
    fn test_first_tick_from_spawn() {
        let mut s = state();
        let r = tick(&mut s);
        assert_eq!(r.pos, Vec2::new(1340.0 - 0.25, 350.0 + 0.009));
        assert_eq!(r.vel.x, -0.25);
        assert_eq!(r.vel.y, 0.009 + GRAVITY);
        assert_eq!(r.lives, 1);
        assert!(!r.missed);
        assert!(!r.game_over);
    }

    #[test]
    fn test_paddle_bounce_forces_upward() {
        // Falling ball that lands inside the paddle box this tick
        let mut s = state();
        s.set_pointer_x(700.0);
        s.ball.vel = Vec2::new(0.0, 2.0);
        s.ball.pos = Vec2::new(700.0, 625.0 - s.ball.vel.y);

        let r = tick(&mut s);
        assert_eq!(r.vel.y, -(2.0 + GRAVITY));
        assert!(!r.missed, "contact above the miss line is a catch");
    }

    #[test]
    fn test_paddle_bounce_from_below_stays_upward() {
        // A rising ball that clips the paddle keeps moving up
        let mut s = state();
        s.set_pointer_x(700.0);
        s.ball.vel = Vec2::new(0.0, -1.5);
        s.ball.pos = Vec2::new(700.0, 632.0 + 1.5);

        let r = tick(&mut s);
        assert!(r.vel.y < 0.0);
        assert_eq!(r.vel.y, -(1.5 - GRAVITY));
    }

    #[test]
    fn test_left_wall_flips_vx() {
        let mut s = state();
        s.ball.pos = Vec2::new(BALL_RADIUS - 1.0, 300.0);
        s.ball.vel = Vec2::new(-0.25, 0.0);

        let r = tick(&mut s);
        assert_eq!(r.vel.x, 0.25);
    }

    #[test]
    fn test_right_wall_flips_vx() {
        let mut s = state();
        s.ball.pos = Vec2::new(1400.0 - BALL_RADIUS + 1.0, 300.0);
        s.ball.vel = Vec2::new(0.25, 0.0);

        let r = tick(&mut s);
        assert_eq!(r.vel.x, -0.25);
    }

    #[test]
    fn test_far_wall_deflects_upward() {
        // The miss line sits above the far wall, so crossing it costs a life
        // even as the wall deflects the ball
        let mut s = state();
        s.lives = 3;
        s.ball.pos = Vec2::new(700.0, 690.0);
        s.ball.vel = Vec2::new(0.0, 1.0);

        let r = tick(&mut s);
        assert_eq!(r.vel.y, -(1.0 + GRAVITY));
        assert!(r.missed);
        assert_eq!(r.lives, 2);
    }

    #[test]
    fn test_miss_decrements_and_terminates() {
        let mut s = state();
        s.ball.pos = Vec2::new(200.0, 681.0);
        s.ball.vel = Vec2::ZERO;

        let r = tick(&mut s);
        assert!(r.missed);
        assert_eq!(r.lives, 0);
        assert!(r.game_over);
    }

    #[test]
    fn test_miss_fires_every_qualifying_tick() {
        // No one-shot guard: a ball parked past the miss line drains a life
        // per tick until the counter hits zero
        let mut s = state();
        s.lives = 3;
        s.ball.pos = Vec2::new(200.0, 685.0);
        s.ball.vel = Vec2::ZERO;

        let r1 = tick(&mut s);
        assert!(r1.missed && r1.lives == 2 && !r1.game_over);
        let r2 = tick(&mut s);
        assert!(r2.missed && r2.lives == 1 && !r2.game_over);
        let r3 = tick(&mut s);
        assert!(r3.missed && r3.lives == 0 && r3.game_over);
    }

    #[test]
    fn test_miss_is_horizontal_position_independent() {
        // Ball far from the paddle still misses once past the threshold
        let mut s = state();
        s.set_pointer_x(1300.0);
        s.ball.pos = Vec2::new(30.0, 680.0);
        s.ball.vel = Vec2::ZERO;

        let r = tick(&mut s);
        assert!(r.missed);
    }

    #[test]
    fn test_ball_does_not_stick_to_paddle() {
        // After a catch the ball keeps integrating upward on following ticks
        let mut s = state();
        s.set_pointer_x(700.0);
        s.ball.vel = Vec2::new(0.0, 3.0);
        s.ball.pos = Vec2::new(700.0, 622.0);

        let r1 = tick(&mut s);
        assert!(r1.vel.y < 0.0);

        let y_after_hit = s.ball.pos.y;
        let r2 = tick(&mut s);
        assert!(r2.pos.y < y_after_hit, "ball must move away from the paddle");
        assert!(r2.vel.y < 0.0);
    }

    proptest! {
        // Away from every collider a tick is a plain Euler step: position
        // advances by the pre-tick velocity, then gravity lands on vy.
        #[test]
        fn prop_free_flight_is_plain_euler(
            x in 100.0f32..1200.0,
            y in 50.0f32..600.0,
            vx in -2.0f32..2.0,
            vy in -2.0f32..2.0,
        ) {
            let mut s = state();
            // Park the paddle outside the play area
            s.set_pointer_x(-500.0);
            s.ball.pos = Vec2::new(x, y);
            s.ball.vel = Vec2::new(vx, vy);

            let r = tick(&mut s);
            prop_assert_eq!(r.pos, Vec2::new(x + vx, y + vy));
            prop_assert_eq!(r.vel.x, vx);
            prop_assert_eq!(r.vel.y, vy + GRAVITY);
            prop_assert!(!r.missed);
        }

        // A paddle contact always leaves the ball moving upward (or level),
        // regardless of the incoming vertical direction.
        #[test]
        fn prop_paddle_contact_never_leaves_downward_vy(
            vy in -5.0f32..5.0,
            off_x in -40.0f32..40.0,
        ) {
            let mut s = state();
            s.set_pointer_x(700.0);
            // Land the ball center inside the paddle box this tick
            s.ball.vel = Vec2::new(0.0, vy);
            s.ball.pos = Vec2::new(700.0 + off_x, 630.0 - vy);

            let r = tick(&mut s);
            prop_assert!(r.vel.y <= 0.0);
        }
    }
}
