//! Session state and the run state machine
//!
//! `GameState` owns everything the simulation mutates. The per-tick update
//! lives in `tick`; this module holds construction, the run transitions and
//! the read-only queries hosts and the renderer use.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ground::Ground;
use super::obstacle::{Obstacle, ObstacleSize};
use super::player::Player;
use super::tick::tick;
use crate::consts::*;
use crate::error::GameError;

/// Pending diagnostic events kept before the oldest are dropped
pub const MAX_PENDING_EVENTS: usize = 256;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed (or destroyed), waiting for `start`
    NotStarted,
    /// Active run
    Running,
    /// Run ended on a collision; `start` restarts
    GameOver,
}

/// Diagnostic events for an optional observer.
///
/// Nothing in the simulation reads these back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run began; `run` counts starts since construction (1-based)
    Started { run: u32 },
    Jumped,
    ObstacleSpawned { size: ObstacleSize, x: f32, speed: f32 },
    GameOver { score: u64 },
    Destroyed,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the size-class RNG was created from
    pub seed: u64,
    rng: Pcg32,
    /// Viewport dimensions
    pub width: f32,
    pub height: f32,
    pub phase: GamePhase,
    pub player: Player,
    pub ground: Ground,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Accumulated score; displayed floored
    pub score: f32,
    pub speed: f32,
    /// Milliseconds since the last spawn
    pub spawn_timer_ms: f32,
    /// Milliseconds between spawns; only ever shrinks within a run
    pub spawn_interval_ms: f32,
    /// Running ticks in the current run
    pub time_ticks: u64,
    /// Number of times `start` has been called
    pub runs: u32,
    #[serde(skip)]
    events: VecDeque<GameEvent>,
}

impl GameState {
    /// Create a session for a `width` x `height` viewport.
    ///
    /// Fails if either dimension is not a positive finite number.
    pub fn new(width: f32, height: f32, seed: u64) -> Result<Self, GameError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(GameError::InvalidViewport { width, height });
        }

        let ground = Ground::new(width, height);
        let player = Player::new(PLAYER_X, ground.ground_y());

        log::info!(
            "Game initialized with dimensions {}x{} (seed {})",
            width,
            height,
            seed
        );

        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            width,
            height,
            phase: GamePhase::NotStarted,
            player,
            ground,
            obstacles: Vec::new(),
            score: 0.0,
            speed: START_SPEED,
            spawn_timer_ms: 0.0,
            spawn_interval_ms: SPAWN_INTERVAL_START,
            time_ticks: 0,
            runs: 0,
            events: VecDeque::new(),
        })
    }

    /// Begin a run from any phase, resetting score, speed, spawner and
    /// obstacles. The player keeps its position.
    pub fn start(&mut self) {
        let restart = self.phase == GamePhase::GameOver;

        self.score = 0.0;
        self.speed = START_SPEED;
        self.spawn_timer_ms = 0.0;
        self.spawn_interval_ms = SPAWN_INTERVAL_START;
        self.obstacles.clear();
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        self.runs += 1;

        if restart {
            log::info!("Game restarted (run {})", self.runs);
        } else {
            log::info!("Game started (run {})", self.runs);
        }
        self.emit(GameEvent::Started { run: self.runs });
    }

    /// Forward a jump to the player while a run is active.
    ///
    /// Returns whether the player actually left the ground.
    pub fn jump(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let jumped = self.player.jump();
        if jumped {
            log::debug!("Player jumped at tick {}", self.time_ticks);
            self.emit(GameEvent::Jumped);
        }
        jumped
    }

    /// Advance the simulation by `dt_ms` milliseconds (no-op unless running)
    pub fn update(&mut self, dt_ms: f32) {
        tick(self, dt_ms);
    }

    /// Halt the session; further updates have no effect until `start`
    pub fn destroy(&mut self) {
        self.phase = GamePhase::NotStarted;
        log::info!("Game destroyed");
        self.emit(GameEvent::Destroyed);
    }

    /// Put an obstacle into play regardless of the spawn timer
    pub fn spawn_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Whether a run has been started (and the session not destroyed since)
    pub fn is_running(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Score as shown to the player
    pub fn display_score(&self) -> u64 {
        self.score.max(0.0).floor() as u64
    }

    pub fn ground_y(&self) -> f32 {
        self.ground.ground_y()
    }

    /// Take all pending diagnostic events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}
