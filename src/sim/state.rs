//! Game state and core simulation types
//!
//! Entities keep their fields private and expose mutators that enforce the
//! state invariants (scores only ever increment, the computer's difficulty
//! level never drops below its floor) at the mutation site.

use glam::Vec2;

use crate::consts::*;

/// Fixed playfield bounds, taken from the render surface at session start
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The ball
///
/// Velocity is in pixels per tick; `advance` applies it unconditionally and
/// out-of-bounds detection happens separately in the tick sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pos: Vec2,
    vel: Vec2,
    radius: f32,
    /// Speed added along the current heading per paddle hit; restored to its
    /// initial value on every reset
    increment: f32,
    /// Sign of the most recent horizontal travel (+1 toward the computer).
    /// Read by `reset` to serve away from the direction of play; only
    /// `advance` updates it, so back-to-back resets are idempotent. Starts
    /// negative so a ball with no horizontal history serves toward the
    /// computer side.
    travel_dir: f32,
}

impl Ball {
    /// Ball at field center, first serve toward the computer side
    pub fn new(field: &Playfield) -> Self {
        Self {
            pos: field.center(),
            vel: Vec2::splat(BALL_SERVE_VELOCITY),
            radius: BALL_RADIUS,
            increment: SPEED_INCREMENT,
            travel_dir: -1.0,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Pure translation: position += velocity, once per tick
    pub fn advance(&mut self) {
        self.pos += self.vel;
        if self.vel.x != 0.0 {
            self.travel_dir = self.vel.x.signum();
        }
    }

    /// Elastic top/bottom wall reflection: flip vertical velocity, no energy loss
    pub fn reflect_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Flip horizontal velocity; called on any paddle hit
    pub fn reverse_horizontal(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Grow speed by the increment scalar while preserving heading.
    ///
    /// Scaling the velocity by `(v + increment) / v` adds exactly
    /// `increment` to the speed and leaves the direction angle untouched
    /// (the similar-triangles proportion on the velocity components).
    pub fn increase_speed(&mut self) {
        let v = self.vel.length();
        if v == 0.0 {
            return;
        }
        self.vel += self.vel * (self.increment / v);
    }

    /// Place the ball with a given velocity, as if it had been traveling
    /// that way. Test scaffolding only.
    #[cfg(test)]
    pub(crate) fn place(&mut self, pos: Vec2, vel: Vec2) {
        self.pos = pos;
        self.vel = vel;
        if vel.x != 0.0 {
            self.travel_dir = vel.x.signum();
        }
    }

    /// Reposition to field center and restore serve velocity after a score.
    ///
    /// The serve goes opposite the recorded direction of travel, i.e. toward
    /// whoever just scored. A ball that has never traveled horizontally
    /// serves toward the computer side.
    pub fn reset(&mut self, field: &Playfield) {
        self.pos = field.center();
        self.increment = SPEED_INCREMENT;
        self.vel = Vec2::new(-self.travel_dir * BALL_SERVE_VELOCITY, BALL_SERVE_VELOCITY);
    }
}

/// A paddle: fixed horizontal position and size, mutable vertical position,
/// plus its owner's score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    score: u32,
}

impl Paddle {
    /// Player paddle on the left edge, vertically centered
    pub fn new_player(field: &Playfield) -> Self {
        Self {
            x: 0.0,
            y: field.height / 2.0 - PADDLE_HEIGHT / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            score: 0,
        }
    }

    /// Computer paddle flush against the right edge, vertically centered
    pub fn new_cpu(field: &Playfield) -> Self {
        Self {
            x: field.width - PADDLE_WIDTH,
            y: field.height / 2.0 - PADDLE_HEIGHT / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            score: 0,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Direct positional control from pointer input: place the paddle center
    /// at the supplied field coordinate. No smoothing, no velocity.
    pub fn set_center_y(&mut self, center_y: f32) {
        self.y = center_y - self.height / 2.0;
    }

    /// Award a point; the only way a score changes
    pub fn add_point(&mut self) {
        self.score += 1;
    }
}

/// The computer paddle: plain paddle geometry plus a tracking-gain level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpuPaddle {
    paddle: Paddle,
    level: f32,
}

impl CpuPaddle {
    pub fn new(field: &Playfield) -> Self {
        Self {
            paddle: Paddle::new_cpu(field),
            level: CPU_START_LEVEL,
        }
    }

    pub fn geometry(&self) -> &Paddle {
        &self.paddle
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.paddle.score()
    }

    pub fn add_point(&mut self) {
        self.paddle.add_point();
    }

    /// Proportional tracking: move the paddle center a `level` fraction of
    /// the way toward the ball each tick (first-order lag, not snapping).
    pub fn track(&mut self, ball_y: f32) {
        let delta = (ball_y - self.paddle.center_y()) * self.level;
        self.paddle.y += delta;
    }

    /// Rubber-band difficulty: losing a point makes the computer better.
    /// Uncapped upward.
    pub fn raise_level(&mut self) {
        self.level += CPU_LEVEL_STEP;
    }

    /// Winning a point makes the computer slightly easier, floored so it
    /// never stops tracking entirely. No-op at the floor.
    pub fn lower_level(&mut self) {
        self.level = (self.level - CPU_LEVEL_STEP).max(CPU_LEVEL_FLOOR);
    }
}

/// Complete session state: one running game, no menus or pause
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    field: Playfield,
    player: Paddle,
    cpu: CpuPaddle,
    ball: Ball,
    time_ticks: u64,
}

impl GameState {
    pub fn new(field: Playfield) -> Self {
        Self {
            field,
            player: Paddle::new_player(&field),
            cpu: CpuPaddle::new(&field),
            ball: Ball::new(&field),
            time_ticks: 0,
        }
    }

    pub fn field(&self) -> &Playfield {
        &self.field
    }

    pub fn player(&self) -> &Paddle {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Paddle {
        &mut self.player
    }

    pub fn cpu(&self) -> &CpuPaddle {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut CpuPaddle {
        &mut self.cpu
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn advance_clock(&mut self) {
        self.time_ticks += 1;
    }
}
