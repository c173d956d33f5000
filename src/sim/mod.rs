//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No rendering or platform dependencies
//! - All mutation through methods that enforce the state invariants

pub mod collision;
pub mod state;
pub mod tick;

pub use state::{Ball, CpuPaddle, GameState, Paddle, Playfield};
pub use tick::{GameEvent, Side, TickInput, tick};
