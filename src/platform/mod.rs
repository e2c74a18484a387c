//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/ticks (fixed-rate scheduling)
//! - Input events (pointer position in surface coordinates)

#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::consts::MAX_CATCH_UP_TICKS;
use crate::sim::GameEvent;

/// Converts elapsed wall-clock time into a whole number of due ticks.
///
/// Time is fed in milliseconds from whatever clock the host has. When the host
/// falls behind, at most `max_catch_up` ticks run per wake-up and the rest of
/// the backlog is dropped.
#[derive(Debug, Clone)]
pub struct FixedStep {
    interval_ms: f64,
    accumulator: f64,
    max_catch_up: u32,
}

impl FixedStep {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            accumulator: 0.0,
            max_catch_up: MAX_CATCH_UP_TICKS,
        }
    }

    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }

    /// Add `elapsed_ms` and return how many ticks are now due
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        self.accumulator += elapsed_ms.max(0.0);

        let mut due = 0;
        while self.accumulator >= self.interval_ms && due < self.max_catch_up {
            self.accumulator -= self.interval_ms;
            due += 1;
        }

        // Spiral-of-death guard
        if due == self.max_catch_up && self.accumulator >= self.interval_ms {
            log::debug!(
                "Dropping {:.1}ms of tick backlog",
                self.accumulator - self.accumulator % self.interval_ms
            );
            self.accumulator %= self.interval_ms;
        }

        due
    }

    /// Milliseconds until the next tick is due
    pub fn until_next_ms(&self) -> f64 {
        (self.interval_ms - self.accumulator).max(0.0)
    }
}

/// Map a pointer row on a `rows`-tall grid to the surface y at that row's center
pub fn row_to_surface_y(row: u16, rows: u16, surface_height: f32) -> f32 {
    (row as f32 + 0.5) * surface_height / rows.max(1) as f32
}

/// Report tick events through the `log` facade
pub fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::Scored { side, user, com } => {
                log::debug!("Point to {}: {} - {}", side.as_str(), user, com);
            }
            GameEvent::PaddleHit { side, speed } => {
                log::trace!("Ball hit {} paddle, speed {:.1}", side.as_str(), speed);
            }
            GameEvent::WallBounce => log::trace!("Wall bounce"),
        }
    }
}
