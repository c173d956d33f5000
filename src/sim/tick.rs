//! Fixed timestep simulation tick
//!
//! One tick runs the whole update sequence in a fixed order: advance the
//! ball, track with the computer paddle, resolve wall bounce and paddle
//! hits, then test scoring. The loop driver renders after each tick; the
//! simulation never touches the render sink.

use super::collision;
use super::state::GameState;

/// Input commands for a single tick (deterministic)
///
/// Pointer input arrives asynchronously; the driver stores the latest
/// desired paddle center here and the tick applies it, so the simulation
/// sees input only at tick boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Desired player paddle center (field coordinates, from pointer Y)
    pub paddle_center_y: Option<f32>,
}

/// Which participant an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Cpu,
}

/// Gameplay events produced by a tick, in occurrence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball reflected off the top or bottom wall
    WallBounce,
    /// Ball entered a paddle's trigger zone and was returned
    PaddleHit(Side),
    /// A point was scored; the side named is the scorer
    Score(Side),
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if let Some(center_y) = input.paddle_center_y {
        state.player_mut().set_center_y(center_y);
    }

    state.advance_clock();

    // 1. Advance ball position
    state.ball_mut().advance();

    let field = *state.field();
    let ball_pos = state.ball().pos();
    let ball_radius = state.ball().radius();

    // 2. Computer paddle tracks the ball
    state.cpu_mut().track(ball_pos.y);

    // 3. Vertical wall bounce
    if collision::hits_top_or_bottom(ball_pos, ball_radius, &field) {
        state.ball_mut().reflect_vertical();
        events.push(GameEvent::WallBounce);
    }

    // 4. Player paddle hit
    if collision::in_player_zone(ball_pos, ball_radius, state.player()) {
        state.ball_mut().reverse_horizontal();
        state.ball_mut().increase_speed();
        events.push(GameEvent::PaddleHit(Side::Player));
    }

    // 5. Computer paddle hit
    if collision::in_cpu_zone(ball_pos, ball_radius, state.cpu().geometry()) {
        state.ball_mut().reverse_horizontal();
        state.ball_mut().increase_speed();
        events.push(GameEvent::PaddleHit(Side::Cpu));
    }

    // 6./7. Scoring: crossing a side wall awards the opponent a point,
    // resets the ball, and rubber-bands the computer's difficulty.
    if collision::past_left_wall(ball_pos, ball_radius) {
        state.cpu_mut().add_point();
        state.ball_mut().reset(&field);
        state.cpu_mut().lower_level();
        events.push(GameEvent::Score(Side::Cpu));
    } else if collision::past_right_wall(ball_pos, ball_radius, &field) {
        state.player_mut().add_point();
        state.ball_mut().reset(&field);
        state.cpu_mut().raise_level();
        events.push(GameEvent::Score(Side::Player));
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Playfield;
    use glam::Vec2;

    fn new_state() -> GameState {
        GameState::new(Playfield::new(700.0, 500.0))
    }

    #[test]
    fn test_tick_advances_ball_by_velocity() {
        // Freshly served ball mid-field: a tick produces no collisions
        let mut state = new_state();
        let before = state.ball().pos();
        let vel = state.ball().vel();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball().pos(), before + vel);
        assert_eq!(state.time_ticks(), 1);
    }

    #[test]
    fn test_tick_applies_pointer_input() {
        let mut state = new_state();
        let input = TickInput {
            paddle_center_y: Some(321.0),
        };
        tick(&mut state, &input);
        assert!((state.player().center_y() - 321.0).abs() < 1e-6);
    }

    #[test]
    fn test_cpu_tracks_during_tick() {
        let mut state = new_state();
        let ball_y_after = state.ball().pos().y + state.ball().vel().y;
        tick(&mut state, &TickInput::default());
        // 250 + (ball_y - 250) * 0.3, against the post-advance ball position
        let expected = 250.0 + (ball_y_after - 250.0) * CPU_START_LEVEL;
        assert!((state.cpu().geometry().center_y() - expected).abs() < 1e-4);
    }

    #[test]
    fn test_wall_bounce_conserves_speed() {
        let mut state = new_state();
        state
            .ball_mut()
            .place(Vec2::new(350.0, 12.0), Vec2::new(3.0, -5.0));
        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::WallBounce));
        // Sign flipped, magnitude unchanged
        assert_eq!(state.ball().vel().y, 5.0);
        assert_eq!(state.ball().vel().x, 3.0);
    }

    #[test]
    fn test_player_paddle_hit_reverses_and_speeds_up() {
        let mut state = new_state();
        let paddle_center = state.player().center_y();
        // One tick of travel lands the ball's left edge inside the zone
        state
            .ball_mut()
            .place(Vec2::new(24.0, paddle_center), Vec2::new(-4.0, 0.0));

        let speed_before = state.ball().vel().length();
        let events = tick(&mut state, &TickInput::default());

        assert!(events.contains(&GameEvent::PaddleHit(Side::Player)));
        assert!(state.ball().vel().x > 0.0);
        assert!(state.ball().vel().length() > speed_before);
    }

    #[test]
    fn test_cpu_concedes_point() {
        let mut state = new_state();
        // Ball sails past the right wall this tick, well clear of the cpu zone
        state
            .ball_mut()
            .place(Vec2::new(680.0, 480.0), Vec2::new(20.0, 0.0));

        let level_before = state.cpu().level();
        let events = tick(&mut state, &TickInput::default());

        assert!(events.contains(&GameEvent::Score(Side::Player)));
        assert_eq!(state.player().score(), 1);
        assert_eq!(state.cpu().score(), 0);
        assert_eq!(state.ball().pos(), state.field().center());
        // Conceding raises the difficulty
        assert!((state.cpu().level() - (level_before + CPU_LEVEL_STEP)).abs() < 1e-5);
        // Serve goes back toward the player
        assert!(state.ball().vel().x < 0.0);
        assert_eq!(state.ball().vel().y, BALL_SERVE_VELOCITY);
    }

    #[test]
    fn test_player_concedes_point() {
        let mut state = new_state();
        // Park the paddle away from the ball's path so nothing intercepts it
        let input = TickInput {
            paddle_center_y: Some(450.0),
        };
        state
            .ball_mut()
            .place(Vec2::new(15.0, 100.0), Vec2::new(-20.0, 0.0));

        let events = tick(&mut state, &input);

        assert!(events.contains(&GameEvent::Score(Side::Cpu)));
        assert_eq!(state.cpu().score(), 1);
        // Winning lowers the difficulty, floored
        assert!((state.cpu().level() - CPU_LEVEL_FLOOR).abs() < 1e-5);
        // Serve goes back toward the computer
        assert!(state.ball().vel().x > 0.0);
    }

    #[test]
    fn test_event_order_bounce_then_hit() {
        let mut state = new_state();
        state.player_mut().set_center_y(20.0);
        // Lands in the top-left corner: inside the player zone and past the
        // top wall in the same tick
        state
            .ball_mut()
            .place(Vec2::new(19.0, 9.0), Vec2::new(-4.0, -3.0));

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(
            events,
            vec![GameEvent::WallBounce, GameEvent::PaddleHit(Side::Player)]
        );
    }

    #[test]
    fn test_determinism() {
        let mut a = new_state();
        let mut b = new_state();
        let inputs = [
            TickInput {
                paddle_center_y: Some(100.0),
            },
            TickInput::default(),
            TickInput {
                paddle_center_y: Some(400.0),
            },
            TickInput::default(),
        ];
        for input in &inputs {
            let ea = tick(&mut a, input);
            let eb = tick(&mut b, input);
            assert_eq!(ea, eb);
        }
        assert_eq!(a, b);
    }
}
