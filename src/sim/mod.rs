//! Simulation module
//!
//! All gameplay logic lives here:
//! - Frame-rate independent: every motion scales with the frame delta
//! - Seeded RNG only
//! - Obstacles iterate in spawn order
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod ground;
pub mod obstacle;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use ground::Ground;
pub use obstacle::{Obstacle, ObstacleSize};
pub use player::Player;
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameState, MAX_PENDING_EVENTS};
pub use tick::{first_collision, tick};
