//! Axis-aligned rectangles for collision geometry
//!
//! Screen coordinates: x grows right, y grows down. A rectangle is anchored
//! at its top-left corner.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap on both axes. Rectangles that only share an edge do
    /// not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(other.right() <= self.left()
            || other.left() >= self.right()
            || other.bottom() <= self.top()
            || other.top() >= self.bottom())
    }
}
