//! Frame description for the render sink
//!
//! The simulation never draws. Each tick the driver composes a `Frame` (a
//! plain list of shapes plus the scores) from the current state and hands
//! it to a `RenderSink`. The sink is a passive consumer with no feedback
//! into the simulation.

use crate::Settings;
use crate::consts::*;
use crate::sim::GameState;

/// CSS-style solid color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub &'static str);

/// Board background
pub const BOARD_COLOR: Color = Color("#302f2f");
/// High-contrast board background
pub const BOARD_COLOR_HIGH_CONTRAST: Color = Color("#000000");
/// Paddles, ball and net
pub const INK_COLOR: Color = Color("white");

/// Axis-aligned filled rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

/// Filled circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Color,
}

/// Everything a sink needs to draw one tick's worth of state
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Full-field background rect; clears the previous frame
    pub board: Rect,
    /// Dashed centerline, computed from field height alone
    pub net: Vec<Rect>,
    pub player: Rect,
    pub cpu: Rect,
    pub ball: Circle,
    pub player_score: u32,
    pub cpu_score: u32,
}

impl Frame {
    /// Build the draw list for the current state
    pub fn compose(state: &GameState, settings: &Settings) -> Self {
        let field = state.field();
        let board_color = if settings.high_contrast {
            BOARD_COLOR_HIGH_CONTRAST
        } else {
            BOARD_COLOR
        };

        let net = if settings.show_net {
            net_segments(field.width, field.height)
        } else {
            Vec::new()
        };

        Self {
            board: Rect {
                x: 0.0,
                y: 0.0,
                width: field.width,
                height: field.height,
                color: board_color,
            },
            net,
            player: paddle_rect(state.player()),
            cpu: paddle_rect(state.cpu().geometry()),
            ball: Circle {
                x: state.ball().pos().x,
                y: state.ball().pos().y,
                radius: state.ball().radius(),
                color: INK_COLOR,
            },
            player_score: state.player().score(),
            cpu_score: state.cpu().score(),
        }
    }
}

fn paddle_rect(paddle: &crate::sim::Paddle) -> Rect {
    Rect {
        x: paddle.x(),
        y: paddle.y(),
        width: paddle.width(),
        height: paddle.height(),
        color: INK_COLOR,
    }
}

/// Net segments down the field centerline, one every `NET_SEGMENT_SPACING`
/// pixels from the top edge to the bottom
fn net_segments(field_width: f32, field_height: f32) -> Vec<Rect> {
    let x = field_width / 2.0 - NET_SEGMENT_WIDTH / 2.0;
    let mut segments = Vec::new();
    let mut y = 0.0;
    while y <= field_height {
        segments.push(Rect {
            x,
            y,
            width: NET_SEGMENT_WIDTH,
            height: NET_SEGMENT_HEIGHT,
            color: INK_COLOR,
        });
        y += NET_SEGMENT_SPACING;
    }
    segments
}

/// Passive consumer of composed frames
pub trait RenderSink {
    fn present(&mut self, frame: &Frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Playfield, TickInput, tick};

    fn new_state() -> GameState {
        GameState::new(Playfield::new(700.0, 500.0))
    }

    #[test]
    fn test_frame_matches_state() {
        let state = new_state();
        let frame = Frame::compose(&state, &Settings::default());

        assert_eq!(frame.board.width, 700.0);
        assert_eq!(frame.player.x, 0.0);
        assert_eq!(frame.cpu.x, 700.0 - PADDLE_WIDTH);
        assert_eq!(frame.ball.x, 350.0);
        assert_eq!(frame.ball.radius, BALL_RADIUS);
        assert_eq!(frame.player_score, 0);
        assert_eq!(frame.cpu_score, 0);
    }

    #[test]
    fn test_net_is_ball_independent() {
        let mut state = new_state();
        let before = Frame::compose(&state, &Settings::default());
        tick(&mut state, &TickInput::default());
        let after = Frame::compose(&state, &Settings::default());
        assert_eq!(before.net, after.net);
        assert_ne!(before.ball.y, after.ball.y);
    }

    #[test]
    fn test_net_layout() {
        let segments = net_segments(700.0, 500.0);
        // One segment every 15px, top edge through bottom edge inclusive
        assert_eq!(segments.len(), 34);
        assert!(segments.iter().all(|s| s.x == 349.0));
        assert_eq!(segments[1].y - segments[0].y, NET_SEGMENT_SPACING);
    }

    #[test]
    fn test_settings_toggles() {
        let state = new_state();
        let settings = Settings {
            show_net: false,
            high_contrast: true,
            ..Settings::default()
        };
        let frame = Frame::compose(&state, &settings);
        assert!(frame.net.is_empty());
        assert_eq!(frame.board.color, BOARD_COLOR_HIGH_CONTRAST);
    }
}
