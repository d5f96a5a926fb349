//! Dino Run - A side-scrolling obstacle runner
//!
//! Core modules:
//! - `sim`: Simulation engine (player physics, spawner, collisions, run state)
//! - `renderer`: Read-only drawing pass over a 2D `Surface` capability
//! - `platform`: Host adapters (frame clock, input policy, browser canvas)
//! - `settings`: Host configuration

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{GameError, SettingsError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Reference frame length in ms; all per-tick quantities are tuned for 60 fps
    pub const FRAME_MS: f32 = 16.667;

    /// Player geometry (design constants, not configurable)
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;

    /// Downward acceleration per normalized tick
    pub const GRAVITY: f32 = 0.8;
    /// Vertical velocity applied on jump (negative = up)
    pub const JUMP_VELOCITY: f32 = -15.0;

    /// Leg animation advance per normalized tick, and cycle length
    pub const RUN_CYCLE_RATE: f32 = 0.2;
    pub const RUN_CYCLE_LENGTH: f32 = 2.0;

    /// Thickness of the ground band at the bottom of the viewport
    pub const GROUND_BAND_HEIGHT: f32 = 20.0;
    /// Period of the ground scroll texture
    pub const GROUND_TILE: f32 = 20.0;

    /// Session speed curve
    pub const START_SPEED: f32 = 2.0;
    pub const SPEED_INCREMENT: f32 = 0.001;
    /// Score gained per tick is `speed * SCORE_RATE`
    pub const SCORE_RATE: f32 = 0.1;

    /// Obstacles always outrun the ground scroll by this margin
    pub const OBSTACLE_SPEED_MARGIN: f32 = 2.0;

    /// Spawner difficulty ratchet (milliseconds)
    pub const SPAWN_INTERVAL_START: f32 = 2000.0;
    pub const SPAWN_INTERVAL_STEP: f32 = 50.0;
    pub const SPAWN_INTERVAL_MIN: f32 = 1000.0;
}

/// Clamp a host-supplied frame delta to something the integrators can use.
///
/// Negative, NaN and infinite deltas are treated as zero.
#[inline]
pub fn sanitize_dt(dt_ms: f32) -> f32 {
    if dt_ms.is_finite() && dt_ms > 0.0 {
        dt_ms
    } else {
        0.0
    }
}

/// Fraction of a 60 fps reference frame covered by `dt_ms`
#[inline]
pub fn frame_scale(dt_ms: f32) -> f32 {
    sanitize_dt(dt_ms) / consts::FRAME_MS
}
