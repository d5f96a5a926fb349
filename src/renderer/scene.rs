//! Drawing routines for each scene element
//!
//! Every function takes state by shared reference; drawing never feeds back
//! into the simulation.

use glam::Vec2;

use super::color::colors;
use super::hud::HudView;
use super::{Surface, TextAlign, TextStyle};
use crate::consts::{GROUND_BAND_HEIGHT, GROUND_TILE, PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::sim::{Ground, Obstacle, ObstacleSize, Player, Rect};

/// Spacing of grass tufts along the ground line
const GRASS_SPACING: f32 = 8.0;

pub fn draw_background(surface: &mut impl Surface, width: f32, height: f32) {
    surface.fill_rect(Rect::new(0.0, 0.0, width, height), colors::BACKGROUND);
}

pub fn draw_ground(surface: &mut impl Surface, ground: &Ground) {
    let y = ground.ground_y();
    let width = ground.width;

    surface.fill_rect(Rect::new(0.0, y, width, GROUND_BAND_HEIGHT), colors::GROUND);

    // Texture tiles scroll left with the offset
    for x in tile_positions(ground.scroll_offset, width, GROUND_TILE) {
        surface.fill_rect(Rect::new(x, y + 5.0, 10.0, 5.0), colors::GROUND_TEXTURE);
    }

    for x in tile_positions(ground.scroll_offset, width, GRASS_SPACING) {
        surface.fill_rect(Rect::new(x, y - 3.0, 4.0, 3.0), colors::GRASS);
        surface.fill_rect(Rect::new(x + 2.0, y - 5.0, 2.0, 2.0), colors::GRASS);
    }

    surface.stroke_line(Vec2::new(0.0, y), Vec2::new(width, y), 1.0, colors::HORIZON);
}

/// Left edges of repeating tiles covering `[-offset, width)`.
///
/// Positions are computed from an integer index so wide viewports cannot
/// stall on `f32` accumulation.
pub fn tile_positions(
    offset: f32,
    width: f32,
    spacing: f32,
) -> impl ExactSizeIterator<Item = f32> + DoubleEndedIterator {
    let count = ((width + offset) / spacing).ceil().max(0.0) as u32;
    (0..count).map(move |i| -offset + i as f32 * spacing)
}

/// A cactus filling the obstacle's collision box. Arm layout depends on the
/// size class; the trunk always spans the full box height.
pub fn draw_obstacle(surface: &mut impl Surface, obstacle: &Obstacle) {
    let b = obstacle.bounds();
    let (w, h) = (b.width, b.height);

    let trunk = Rect::new(b.x + w * 0.3, b.y, w * 0.4, h);
    surface.fill_rect(trunk, colors::CACTUS);

    for arm in arm_rects(obstacle.size, &b) {
        surface.fill_rect(arm, colors::CACTUS);
    }

    // Spines down the trunk
    let mut y = b.y + 4.0;
    while y < b.bottom() - 2.0 {
        surface.fill_rect(Rect::new(trunk.x - 1.0, y, 1.0, 2.0), colors::CACTUS_SPINE);
        surface.fill_rect(Rect::new(trunk.right(), y + 3.0, 1.0, 2.0), colors::CACTUS_SPINE);
        y += 6.0;
    }
}

/// Arm segments for a cactus occupying `b`: short cacti have none, medium
/// ones a left arm, tall ones both
pub fn arm_rects(size: ObstacleSize, b: &Rect) -> Vec<Rect> {
    let (w, h) = (b.width, b.height);
    let left = [
        Rect::new(b.x, b.y + h * 0.45, w * 0.35, h * 0.12),
        Rect::new(b.x, b.y + h * 0.2, w * 0.18, h * 0.37),
    ];
    let right = [
        Rect::new(b.x + w * 0.65, b.y + h * 0.55, w * 0.35, h * 0.12),
        Rect::new(b.x + w * 0.82, b.y + h * 0.3, w * 0.18, h * 0.37),
    ];
    match size {
        ObstacleSize::Short => Vec::new(),
        ObstacleSize::Medium => left.to_vec(),
        ObstacleSize::Tall => left.into_iter().chain(right).collect(),
    }
}

pub fn draw_player(surface: &mut impl Surface, player: &Player) {
    let x = player.pos.x;
    let y = player.pos.y;
    let top = y - PLAYER_HEIGHT;

    surface.fill_rect(player.bounds(), colors::PLAYER_BODY);
    surface.fill_rect(Rect::new(x + 25.0, top - 15.0, 20.0, 20.0), colors::PLAYER_HEAD);
    surface.fill_rect(Rect::new(x + 35.0, top - 10.0, 6.0, 6.0), colors::EYE_WHITE);
    surface.fill_rect(Rect::new(x + 37.0, top - 8.0, 2.0, 2.0), colors::EYE_PUPIL);

    for leg_x in leg_offsets(player) {
        surface.fill_rect(Rect::new(x + leg_x, y, 6.0, 15.0), colors::PLAYER_BODY);
    }

    // Tail
    surface.fill_rect(Rect::new(x - 10.0, top + 10.0, 15.0, 8.0), colors::PLAYER_BODY);
}

/// Horizontal leg positions relative to the body; legs alternate while
/// running and tuck together in the air
pub fn leg_offsets(player: &Player) -> [f32; 2] {
    if player.is_airborne() {
        [10.0, 18.0]
    } else {
        let stride = player.run_cycle.floor() * 3.0;
        [8.0 + stride, PLAYER_WIDTH / 2.0 - stride]
    }
}

pub fn draw_hud(surface: &mut impl Surface, hud: &HudView, show_player_state: bool) {
    let style = TextStyle::new(16.0, colors::HUD_TEXT, TextAlign::Left);
    surface.fill_text(&hud.score_text(), Vec2::new(10.0, 30.0), &style);
    surface.fill_text(&hud.speed_text(), Vec2::new(10.0, 50.0), &style);
    if show_player_state {
        surface.fill_text(hud.player_state_text(), Vec2::new(10.0, 70.0), &style);
    }
}

pub fn draw_start_prompt(surface: &mut impl Surface, width: f32, height: f32) {
    let style = TextStyle::new(20.0, colors::HUD_TEXT, TextAlign::Center);
    surface.fill_text(
        "Press Space to start",
        Vec2::new(width / 2.0, height / 2.0),
        &style,
    );
}

pub fn draw_game_over(surface: &mut impl Surface, hud: &HudView, width: f32, height: f32) {
    surface.fill_rect(Rect::new(0.0, 0.0, width, height), colors::OVERLAY);

    let center = Vec2::new(width / 2.0, height / 2.0);
    surface.fill_text(
        "GAME OVER",
        center - Vec2::new(0.0, 20.0),
        &TextStyle::new(32.0, colors::OVERLAY_TEXT, TextAlign::Center),
    );
    surface.fill_text(
        &hud.final_score_text(),
        center + Vec2::new(0.0, 15.0),
        &TextStyle::new(20.0, colors::OVERLAY_TEXT, TextAlign::Center),
    );
    surface.fill_text(
        "Press Space to restart",
        center + Vec2::new(0.0, 45.0),
        &TextStyle::new(16.0, colors::OVERLAY_TEXT, TextAlign::Center),
    );
}
