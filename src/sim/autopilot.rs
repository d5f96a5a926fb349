//! Idle/demo mode: a simple controller that plays the game
//!
//! Only looks at public state and only acts through `GameState::jump`, so a
//! session driven by the autopilot behaves exactly like one driven by a
//! player pressing the key.

use super::state::{GamePhase, GameState};

/// Jump when the next obstacle is this many normalized ticks away
pub const JUMP_LEAD_TICKS: f32 = 8.0;

/// Whether the autopilot wants to jump this frame
pub fn should_jump(state: &GameState) -> bool {
    if state.phase != GamePhase::Running || state.player.is_airborne() {
        return false;
    }

    let player = state.player.bounds();

    // Nearest obstacle the player has not cleared yet
    let next = state
        .obstacles
        .iter()
        .filter(|o| o.bounds().right() > player.left())
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x));

    match next {
        Some(obstacle) => {
            let gap = obstacle.pos.x - player.right();
            gap >= 0.0 && gap <= obstacle.speed * JUMP_LEAD_TICKS
        }
        None => false,
    }
}

/// Run one frame with the autopilot at the controls.
///
/// Returns whether it jumped.
pub fn drive(state: &mut GameState, dt_ms: f32) -> bool {
    let jumped = should_jump(state) && state.jump();
    state.update(dt_ms);
    jumped
}
