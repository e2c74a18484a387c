//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per `tick` call, no wall-clock dependency
//! - No global state (every game owns its `GameState`)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, bounce_velocity, collides, hit_offset};
pub use state::{Ball, GameState, Paddle, Side, Surface};
pub use tick::{GameEvent, tick, track_ball};
