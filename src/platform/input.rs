//! Input policy: a single activation key starts, jumps and restarts

use crate::sim::{GamePhase, GameState};

/// What an activation press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Started,
    Jumped,
    /// Pressed mid-air; nothing happened
    Ignored,
    Restarted,
}

/// Apply one press of the activation key to the session
pub fn activate(state: &mut GameState) -> Activation {
    match state.phase {
        GamePhase::NotStarted => {
            state.start();
            Activation::Started
        }
        GamePhase::Running => {
            if state.jump() {
                Activation::Jumped
            } else {
                Activation::Ignored
            }
        }
        GamePhase::GameOver => {
            state.start();
            Activation::Restarted
        }
    }
}

/// Keys that count as the activation key (`KeyboardEvent.code` values)
pub fn is_activation_key(code: &str) -> bool {
    matches!(code, "Space" | "ArrowUp")
}
