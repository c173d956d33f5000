//! Collision tests for the ball against walls and paddles
//!
//! Paddle collision is a "trigger zone" approximation rather than true
//! circle-rectangle intersection: the ball's edge nearest a paddle must sit
//! inside a one-paddle-width band on the paddle's inward side while the ball
//! center is within the paddle's vertical span. A ball fast enough to cross
//! the band between ticks tunnels through; the zone is wide enough for any
//! rally short of a very long one, so the simplification stays.

use glam::Vec2;

use super::state::{Paddle, Playfield};

/// True when the ball's top or bottom edge has crossed the field bounds
pub fn hits_top_or_bottom(ball_pos: Vec2, ball_radius: f32, field: &Playfield) -> bool {
    ball_pos.y - ball_radius < 0.0 || ball_pos.y + ball_radius > field.height
}

/// Trigger-zone test for the left (player) paddle.
///
/// The ball's left edge must lie in `(0, paddle right edge]` and the ball
/// center within the paddle's vertical span, inclusive on both ends.
pub fn in_player_zone(ball_pos: Vec2, ball_radius: f32, paddle: &Paddle) -> bool {
    let ball_left = ball_pos.x - ball_radius;
    let paddle_right = paddle.x() + paddle.width();

    ball_left > 0.0
        && ball_left <= paddle_right
        && ball_pos.y >= paddle.y()
        && ball_pos.y <= paddle.y() + paddle.height()
}

/// Trigger-zone test for the right (computer) paddle.
///
/// Mirror of the player test: the ball's right edge must lie in
/// `[one paddle-width inward, paddle's left edge)` with the same vertical
/// span check.
pub fn in_cpu_zone(ball_pos: Vec2, ball_radius: f32, paddle: &Paddle) -> bool {
    let ball_right = ball_pos.x + ball_radius;

    ball_right < paddle.x()
        && ball_right >= paddle.x() - paddle.width()
        && ball_pos.y >= paddle.y()
        && ball_pos.y <= paddle.y() + paddle.height()
}

/// Ball fully past the left edge: the player conceded
pub fn past_left_wall(ball_pos: Vec2, ball_radius: f32) -> bool {
    ball_pos.x - ball_radius < 0.0
}

/// Ball fully past the right edge: the computer conceded
pub fn past_right_wall(ball_pos: Vec2, ball_radius: f32, field: &Playfield) -> bool {
    ball_pos.x + ball_radius > field.width
}
