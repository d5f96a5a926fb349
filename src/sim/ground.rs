//! Ground line and its cosmetic scroll

use serde::{Deserialize, Serialize};

use crate::consts::{GROUND_BAND_HEIGHT, GROUND_TILE};
use crate::frame_scale;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ground {
    /// Viewport width the band spans
    pub width: f32,
    ground_y: f32,
    /// Texture offset in [0, GROUND_TILE); visual only
    pub scroll_offset: f32,
}

impl Ground {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            ground_y: height - GROUND_BAND_HEIGHT,
            scroll_offset: 0.0,
        }
    }

    pub fn update(&mut self, dt_ms: f32, speed: f32) {
        self.scroll_offset += speed * frame_scale(dt_ms);
        if self.scroll_offset >= GROUND_TILE {
            self.scroll_offset = 0.0;
        }
    }

    /// Vertical coordinate of the top of the ground band
    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }
}
