//! Collision detection and response
//!
//! Ball and paddles are both treated as axis-aligned boxes. Overlap is strict:
//! boxes that only share an edge do not collide.

use glam::Vec2;

use super::state::{Ball, Paddle};
use crate::consts::MAX_BOUNCE_ANGLE;

/// Axis-aligned bounding box in surface coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Aabb {
    /// Strict overlap test
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left < other.right
            && self.top < other.bottom
            && self.right > other.left
            && self.bottom > other.top
    }
}

impl Ball {
    /// Bounding box of the ball's circle
    pub fn bounds(&self) -> Aabb {
        Aabb {
            left: self.pos.x - self.radius,
            right: self.pos.x + self.radius,
            top: self.pos.y - self.radius,
            bottom: self.pos.y + self.radius,
        }
    }
}

impl Paddle {
    pub fn bounds(&self) -> Aabb {
        Aabb {
            left: self.x,
            right: self.x + self.width,
            top: self.y,
            bottom: self.y + self.height,
        }
    }
}

/// Check whether the ball overlaps the paddle
pub fn collides(ball: &Ball, paddle: &Paddle) -> bool {
    paddle.bounds().overlaps(&ball.bounds())
}

/// Where the ball struck the paddle, relative to its center.
///
/// -1 is the top tip, 1 the bottom tip. Not clamped: a corner hit can land
/// slightly outside that range.
pub fn hit_offset(ball: &Ball, paddle: &Paddle) -> f32 {
    let half = paddle.height / 2.0;
    (ball.pos.y - paddle.center_y()) / half
}

/// Outgoing velocity after a paddle hit.
///
/// `direction` is +1 to send the ball right, -1 to send it left. The angle
/// scales linearly with the hit offset up to 45° at the tips.
pub fn bounce_velocity(offset: f32, speed: f32, direction: f32) -> Vec2 {
    let angle = MAX_BOUNCE_ANGLE * offset;
    Vec2::new(direction * speed * angle.cos(), speed * angle.sin())
}
