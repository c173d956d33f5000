//! Classic Pong - player vs. an adaptive computer paddle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, paddle control, scoring)
//! - `render`: Frame description consumed by a passive render sink
//! - `settings`: Display preferences persisted in LocalStorage

pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (50 Hz, one tick per update/render pass)
    pub const SIM_DT: f32 = 1.0 / 50.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Paddle dimensions (both sides)
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Serve velocity per axis, pixels per tick
    pub const BALL_SERVE_VELOCITY: f32 = 5.0;
    /// Speed added along the current heading on every paddle hit
    pub const SPEED_INCREMENT: f32 = 1.0;

    /// Computer paddle tracking gain (difficulty level)
    pub const CPU_START_LEVEL: f32 = 0.3;
    pub const CPU_LEVEL_STEP: f32 = 0.1;
    pub const CPU_LEVEL_FLOOR: f32 = 0.2;

    /// Net segment geometry (vertical dashed centerline)
    pub const NET_SEGMENT_WIDTH: f32 = 2.0;
    pub const NET_SEGMENT_HEIGHT: f32 = 10.0;
    pub const NET_SEGMENT_SPACING: f32 = 15.0;
}
