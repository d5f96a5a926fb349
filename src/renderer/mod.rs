//! Rendering
//!
//! The renderer is a pure read of simulation state. It draws through the
//! `Surface` capability so any backend (browser canvas, test recorder, ...)
//! can sit underneath.

pub mod color;
pub mod hud;
pub mod scene;

pub use color::{Color, colors};
pub use hud::HudView;

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, Rect};

/// Horizontal anchoring of text relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    pub color: Color,
    pub align: TextAlign,
}

impl TextStyle {
    pub const fn new(size: f32, color: Color, align: TextAlign) -> Self {
        Self { size, color, align }
    }
}

/// Primitive drawing operations a backend must provide
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
    /// `pos` is the text baseline anchor
    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);
}

/// Presentation toggles
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Show the "State: Running/Jumping" debug line
    pub show_player_state: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_player_state: true,
        }
    }
}

impl From<&Settings> for RenderOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            show_player_state: settings.show_player_state,
        }
    }
}

/// Draw one frame: background, ground, obstacles, player, HUD, overlays
pub fn render(state: &GameState, surface: &mut impl Surface, options: &RenderOptions) {
    let (width, height) = (state.width, state.height);

    scene::draw_background(surface, width, height);
    scene::draw_ground(surface, &state.ground);
    for obstacle in &state.obstacles {
        scene::draw_obstacle(surface, obstacle);
    }
    scene::draw_player(surface, &state.player);

    let hud = HudView::from_state(state);
    scene::draw_hud(surface, &hud, options.show_player_state);

    match state.phase {
        GamePhase::NotStarted => scene::draw_start_prompt(surface, width, height),
        GamePhase::GameOver => scene::draw_game_over(surface, &hud, width, height),
        GamePhase::Running => {}
    }
}
