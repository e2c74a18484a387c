//! Fixed-step simulation tick
//!
//! Advances the game by exactly one frame. The host decides how often to call it.

use super::collision::{bounce_velocity, collides, hit_offset};
use super::state::{Ball, GameState, Paddle, Side};
use crate::consts::*;

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball bounced off a paddle; `speed` is the ball speed after the bump
    PaddleHit { side: Side, speed: f32 },
    /// `side` won the point; scores are (user, com) after the increment
    Scored { side: Side, user: u32, com: u32 },
    /// Ball reflected off the top or bottom wall
    WallBounce,
}

/// Move the computer paddle 10% of the way toward centering on the ball
pub fn track_ball(com: &mut Paddle, ball: &Ball) {
    com.y += (ball.pos.y - com.center_y()) * COM_TRACKING_GAIN;
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.ticks += 1;

    // 1. Integrate
    state.ball.pos += state.ball.vel;

    // 2. Opponent reacts to the new ball position
    track_ball(&mut state.com, &state.ball);

    // 3. Only the paddle on the ball's half is tested
    let on_left = state.surface.is_left_half(state.ball.pos.x);
    let side = if on_left { Side::User } else { Side::Com };

    // 4. Paddle bounce. Re-tested every tick, so sustained overlap keeps bumping speed.
    let paddle = state.paddle(side);
    if collides(&state.ball, paddle) {
        let offset = hit_offset(&state.ball, paddle);
        let direction = if on_left { 1.0 } else { -1.0 };

        state.ball.vel = bounce_velocity(offset, state.ball.speed, direction);
        state.ball.speed += BALL_SPEED_STEP;

        events.push(GameEvent::PaddleHit {
            side,
            speed: state.ball.speed,
        });
    }

    // 5. Scoring
    let ball = &state.ball;
    let scorer = if ball.pos.x - ball.radius < 0.0 {
        Some(Side::Com)
    } else if ball.pos.x + ball.radius > state.surface.width {
        Some(Side::User)
    } else {
        None
    };

    if let Some(side) = scorer {
        state.paddle_mut(side).score += 1;
        state.reset_ball();
        let (user, com) = state.scores();
        events.push(GameEvent::Scored { side, user, com });
    }

    // 6. Top/bottom walls, checked even right after a reset
    let ball = &mut state.ball;
    if ball.pos.y - ball.radius < 0.0 || ball.pos.y + ball.radius > state.surface.height {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::WallBounce);
    }

    events
}
