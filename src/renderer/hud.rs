//! HUD view model: everything the on-screen text needs, derived from state

use crate::sim::{GamePhase, GameState};

#[derive(Debug, Clone, PartialEq)]
pub struct HudView {
    pub phase: GamePhase,
    /// Floored score
    pub score: u64,
    pub speed: f32,
    pub airborne: bool,
    pub game_over: bool,
}

impl HudView {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            score: state.display_score(),
            speed: state.speed,
            airborne: state.player.is_airborne(),
            game_over: state.is_game_over(),
        }
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// Speed to one decimal place
    pub fn speed_text(&self) -> String {
        format!("Speed: {:.1}", self.speed)
    }

    pub fn player_state_text(&self) -> &'static str {
        if self.airborne {
            "State: Jumping"
        } else {
            "State: Running"
        }
    }

    pub fn final_score_text(&self) -> String {
        format!("Final Score: {}", self.score)
    }
}
