//! Canvas Pong - classic two-paddle Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, collisions, scoring)
//! - `renderer`: Drawing primitives and the per-frame redraw
//! - `platform`: Host plumbing (fixed-rate scheduling, pointer mapping, terminal/web hosts)
//! - `settings`: Data-driven surface size, frame rate and font

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use renderer::{Color, DrawSurface, RenderStyle, render};
pub use settings::{Settings, SettingsError};
pub use sim::{GameEvent, GameState, Side, Surface, tick};

/// Game configuration constants
pub mod consts {
    /// Scheduler rate (ticks per second)
    pub const FRAMES_PER_SECOND: u32 = 50;
    /// Maximum ticks run per host wake-up before the backlog is dropped
    pub const MAX_CATCH_UP_TICKS: u32 = 5;

    /// Default surface dimensions (pixels)
    pub const SURFACE_WIDTH: u32 = 800;
    pub const SURFACE_HEIGHT: u32 = 400;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_SPEED: f32 = 5.0;
    /// Initial velocity components (down and to the right)
    pub const BALL_START_VEL_X: f32 = 5.0;
    pub const BALL_START_VEL_Y: f32 = 5.0;
    /// Speed gained on every paddle contact (no upper bound)
    pub const BALL_SPEED_STEP: f32 = 0.5;

    /// Paddle dimensions
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    /// Fraction of the vertical error the computer paddle corrects each tick
    pub const COM_TRACKING_GAIN: f32 = 0.1;
    /// Bounce angle at the very tip of a paddle (radians)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Net segments
    pub const NET_SPACING: f32 = 15.0;
    pub const NET_SEGMENT_WIDTH: f32 = 2.0;
    pub const NET_SEGMENT_HEIGHT: f32 = 10.0;

    /// Canvas font for the scores
    pub const SCORE_FONT: &str = "45px helvetica";
}
