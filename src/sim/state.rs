//! Game state and core simulation types
//!
//! Everything one game needs lives in `GameState`; several games can run side by side.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Drawing surface dimensions supplied by the host (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether `x` lies in the left half (the user's side)
    #[inline]
    pub fn is_left_half(&self, x: f32) -> bool {
        x < self.width / 2.0
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(SURFACE_WIDTH as f32, SURFACE_HEIGHT as f32)
    }
}

/// Which paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Pointer-controlled, left edge
    User,
    /// Heuristic-controlled, right edge
    Com,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::User => "user",
            Side::Com => "com",
        }
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Scalar speed used for the next paddle bounce. Not kept in sync with `vel`.
    pub speed: f32,
}

impl Ball {
    /// Ball at `pos` with the starting velocity and speed
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::new(BALL_START_VEL_X, BALL_START_VEL_Y),
            radius: BALL_RADIUS,
            speed: BALL_START_SPEED,
        }
    }
}

/// A paddle. `x` is fixed per side; `y` is the top edge and is never clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub score: u32,
}

impl Paddle {
    /// Paddle on `side`, vertically centered on the surface
    pub fn new(side: Side, surface: &Surface) -> Self {
        let x = match side {
            Side::User => 0.0,
            Side::Com => surface.width - PADDLE_WIDTH,
        };
        Self {
            side,
            x,
            y: (surface.height - PADDLE_HEIGHT) / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            score: 0,
        }
    }

    /// Vertical center of the paddle
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub surface: Surface,
    pub ball: Ball,
    /// Left paddle, follows the pointer
    pub user: Paddle,
    /// Right paddle, follows the ball
    pub com: Paddle,
    /// Simulation tick counter
    pub ticks: u64,
}

impl GameState {
    /// Fresh game: ball centered, paddles centered on their edges, scores 0
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            ball: Ball::new(surface.center()),
            user: Paddle::new(Side::User, &surface),
            com: Paddle::new(Side::Com, &surface),
            ticks: 0,
        }
    }

    /// Center the user paddle on the pointer's vertical position.
    ///
    /// The paddle may be driven partially or fully off the surface.
    pub fn apply_pointer_input(&mut self, pointer_y: f32) {
        self.user.y = pointer_y - self.user.height / 2.0;
    }

    /// Recenter the ball after a point.
    ///
    /// Only the horizontal velocity flips, so the serve goes toward the side
    /// that just conceded. `vel.y` carries over from the previous rally.
    pub fn reset_ball(&mut self) {
        self.ball.pos = self.surface.center();
        self.ball.speed = BALL_START_SPEED;
        self.ball.vel.x = -self.ball.vel.x;
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::User => &self.user,
            Side::Com => &self.com,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::User => &mut self.user,
            Side::Com => &mut self.com,
        }
    }

    /// (user, com)
    pub fn scores(&self) -> (u32, u32) {
        (self.user.score, self.com.score)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Surface::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_layout() {
        let state = GameState::new(Surface::new(800.0, 400.0));

        assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(state.ball.vel, Vec2::new(5.0, 5.0));
        assert_eq!(state.ball.speed, 5.0);
        assert_eq!(state.ball.radius, 10.0);

        assert_eq!(state.user.x, 0.0);
        assert_eq!(state.user.y, 150.0);
        assert_eq!(state.com.x, 790.0);
        assert_eq!(state.com.y, 150.0);
        assert_eq!(state.scores(), (0, 0));
        assert_eq!(state.ticks, 0);
    }

    #[test]
    fn test_pointer_input_centers_paddle() {
        let mut state = GameState::default();
        state.apply_pointer_input(120.0);
        assert_eq!(state.user.y, 70.0);
        assert_eq!(state.user.center_y(), 120.0);
    }

    #[test]
    fn test_pointer_input_not_clamped() {
        let mut state = GameState::default();

        state.apply_pointer_input(-500.0);
        assert_eq!(state.user.y, -550.0);

        state.apply_pointer_input(10_000.0);
        assert_eq!(state.user.y, 9_950.0);

        // Computer paddle untouched
        assert_eq!(state.com.y, 150.0);
    }

    #[test]
    fn test_reset_ball_flips_only_horizontal() {
        let mut state = GameState::default();
        state.ball.pos = Vec2::new(795.0, 33.0);
        state.ball.vel = Vec2::new(6.5, -3.25);
        state.ball.speed = 7.5;

        state.reset_ball();

        assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(state.ball.speed, 5.0);
        assert_eq!(state.ball.vel, Vec2::new(-6.5, -3.25));
    }

    #[test]
    fn test_paddle_lookup_by_side() {
        let mut state = GameState::default();
        state.paddle_mut(Side::Com).score = 3;
        assert_eq!(state.paddle(Side::Com).score, 3);
        assert_eq!(state.paddle(Side::User).score, 0);
        assert_eq!(Side::Com.as_str(), "com");
    }

    #[test]
    fn test_independent_instances() {
        let mut a = GameState::default();
        let b = GameState::new(Surface::new(640.0, 480.0));

        a.apply_pointer_input(0.0);

        assert_eq!(a.user.y, -50.0);
        assert_eq!(b.user.y, 190.0);
        assert_eq!(b.com.x, 630.0);
    }

    #[test]
    fn test_state_json_snapshot() {
        let mut state = GameState::default();
        state.com.score = 2;
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
