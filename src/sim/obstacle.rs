//! Obstacles (cacti) scrolling toward the player

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::frame_scale;

/// Obstacle size classes. Each class has a fixed collision box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleSize {
    Short,
    Medium,
    Tall,
}

impl ObstacleSize {
    pub const ALL: [ObstacleSize; 3] = [Self::Short, Self::Medium, Self::Tall];

    /// Pick a size class uniformly at random
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Collision box as (width, height)
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            ObstacleSize::Short => (18.0, 25.0),
            ObstacleSize::Medium => (22.0, 35.0),
            ObstacleSize::Tall => (25.0, 50.0),
        }
    }

    pub fn width(&self) -> f32 {
        self.dimensions().0
    }

    pub fn height(&self) -> f32 {
        self.dimensions().1
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleSize::Short => "short",
            ObstacleSize::Medium => "medium",
            ObstacleSize::Tall => "tall",
        }
    }
}

/// An obstacle standing on the ground line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: ObstacleSize,
    /// Leftward speed per normalized tick, fixed at spawn
    pub speed: f32,
}

impl Obstacle {
    /// Spawn an obstacle with a randomly chosen size class
    pub fn new<R: Rng + ?Sized>(spawn_x: f32, ground_y: f32, speed: f32, rng: &mut R) -> Self {
        Self::with_size(spawn_x, ground_y, speed, ObstacleSize::sample(rng))
    }

    /// Spawn an obstacle of a known size class
    pub fn with_size(spawn_x: f32, ground_y: f32, speed: f32, size: ObstacleSize) -> Self {
        Self {
            pos: Vec2::new(spawn_x, ground_y - size.height()),
            size,
            speed,
        }
    }

    pub fn width(&self) -> f32 {
        self.size.width()
    }

    pub fn height(&self) -> f32 {
        self.size.height()
    }

    /// Move left for one frame of `dt_ms` milliseconds
    pub fn update(&mut self, dt_ms: f32) {
        self.pos.x -= self.speed * frame_scale(dt_ms);
    }

    /// Fully past the left edge of the viewport
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.width() < 0.0
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width(), self.height())
    }

    /// Strict AABB overlap against another box (usually the player's)
    pub fn collides_with(&self, other: &Rect) -> bool {
        self.bounds().overlaps(other)
    }
}
