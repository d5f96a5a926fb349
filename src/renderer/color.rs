//! Color type and the game palette

use serde::{Deserialize, Serialize};

/// Straight-alpha sRGB color
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in [0, 1]
    pub a: f32,
}

impl Color {
    /// Opaque color from a 0xRRGGBB literal
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 1.0,
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS color string, as accepted by a canvas 2D context
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                self.a.clamp(0.0, 1.0)
            )
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::hex(0xf7f7f7);
    pub const GROUND: Color = Color::hex(0x8b4513);
    pub const GROUND_TEXTURE: Color = Color::hex(0xa0522d);
    pub const GRASS: Color = Color::hex(0x228b22);
    pub const HORIZON: Color = Color::hex(0xcccccc);
    pub const CACTUS: Color = Color::hex(0x2e7d32);
    pub const CACTUS_SPINE: Color = Color::hex(0x654321);
    pub const PLAYER_BODY: Color = Color::hex(0x4a5568);
    pub const PLAYER_HEAD: Color = Color::hex(0x2d3748);
    pub const EYE_WHITE: Color = Color::hex(0xffffff);
    pub const EYE_PUPIL: Color = Color::hex(0x000000);
    pub const HUD_TEXT: Color = Color::hex(0x333333);
    pub const OVERLAY: Color = Color::hex(0x000000).with_alpha(0.5);
    pub const OVERLAY_TEXT: Color = Color::hex(0xffffff);
}
