//! The runner: vertical physics and jump handling

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::frame_scale;

/// The player-controlled runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// x is fixed after construction; y is the foot line
    pub pos: Vec2,
    /// Vertical velocity per normalized tick (negative = up)
    pub velocity_y: f32,
    pub on_ground: bool,
    /// Ground line seen on the last update
    pub ground_y: f32,
    /// Leg animation phase in [0, RUN_CYCLE_LENGTH)
    #[serde(default)]
    pub run_cycle: f32,
}

impl Player {
    /// Create a grounded player standing on `ground_y`
    pub fn new(x: f32, ground_y: f32) -> Self {
        Self {
            pos: Vec2::new(x, ground_y),
            velocity_y: 0.0,
            on_ground: true,
            ground_y,
            run_cycle: 0.0,
        }
    }

    /// Start a jump if standing on the ground.
    ///
    /// Returns `false` (and changes nothing) while airborne.
    pub fn jump(&mut self) -> bool {
        if !self.on_ground {
            return false;
        }
        self.velocity_y = JUMP_VELOCITY;
        self.on_ground = false;
        true
    }

    /// Integrate gravity for one frame of `dt_ms` milliseconds
    pub fn update(&mut self, dt_ms: f32, ground_y: f32) {
        self.ground_y = ground_y;
        let scale = frame_scale(dt_ms);

        if !self.on_ground {
            self.velocity_y += GRAVITY * scale;
            self.pos.y += self.velocity_y * scale;

            // Only a descending player can land; a zero-length frame right
            // after takeoff leaves the jump intact
            if self.pos.y >= self.ground_y && self.velocity_y >= 0.0 {
                self.land();
            }
        } else {
            // Standing players follow the ground line
            self.pos.y = self.ground_y;
        }

        self.run_cycle += RUN_CYCLE_RATE * scale;
        if self.run_cycle >= RUN_CYCLE_LENGTH {
            self.run_cycle = 0.0;
        }
    }

    fn land(&mut self) {
        self.pos.y = self.ground_y;
        self.velocity_y = 0.0;
        self.on_ground = true;
    }

    pub fn is_airborne(&self) -> bool {
        !self.on_ground
    }

    /// Collision box: the body rectangle standing on the foot line
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.pos.x,
            self.pos.y - PLAYER_HEIGHT,
            PLAYER_WIDTH,
            PLAYER_HEIGHT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    const GROUND: f32 = 380.0;

    #[test]
    fn test_new_player_is_grounded() {
        let p = Player::new(PLAYER_X, GROUND);
        assert!(p.on_ground);
        assert_eq!(p.pos.y, GROUND);
        assert_eq!(p.velocity_y, 0.0);
        assert_eq!(p.bounds(), Rect::new(100.0, 330.0, 40.0, 50.0));
    }

    #[test]
    fn test_double_jump_is_ignored() {
        let mut p = Player::new(PLAYER_X, GROUND);
        assert!(p.jump());
        assert_eq!(p.velocity_y, JUMP_VELOCITY);
        assert!(!p.jump());
        assert_eq!(p.velocity_y, JUMP_VELOCITY);
        assert!(p.is_airborne());
    }

    #[test]
    fn test_jump_arc_lands_on_ground() {
        let mut p = Player::new(PLAYER_X, GROUND);
        p.jump();

        p.update(FRAME_MS, GROUND);
        assert!(p.pos.y < GROUND);
        assert!((p.velocity_y - (JUMP_VELOCITY + GRAVITY)).abs() < 1e-4);

        let mut apex = GROUND;
        for _ in 0..200 {
            p.update(FRAME_MS, GROUND);
            apex = apex.min(p.pos.y);
            if p.on_ground {
                break;
            }
        }
        assert!(p.on_ground);
        assert_eq!(p.pos.y, GROUND);
        assert_eq!(p.velocity_y, 0.0);
        // Peak height of roughly v^2 / 2g
        assert!(GROUND - apex > 120.0 && GROUND - apex < 160.0);
    }

    #[test]
    fn test_airtime_is_frame_rate_independent() {
        let airtime = |dt: f32| {
            let mut p = Player::new(PLAYER_X, GROUND);
            p.jump();
            let mut elapsed = 0.0;
            while !p.on_ground {
                p.update(dt, GROUND);
                elapsed += dt;
            }
            elapsed
        };
        let at_60 = airtime(FRAME_MS);
        let at_120 = airtime(FRAME_MS / 2.0);
        assert!((at_60 - at_120).abs() < FRAME_MS * 2.0);
    }

    #[test]
    fn test_zero_and_invalid_dt_freeze_motion() {
        let mut p = Player::new(PLAYER_X, GROUND);
        p.jump();
        p.update(0.0, GROUND);
        p.update(-20.0, GROUND);
        p.update(f32::NAN, GROUND);
        assert_eq!(p.pos.y, GROUND);
        assert_eq!(p.velocity_y, JUMP_VELOCITY);
        assert!(p.is_airborne());
    }

    #[test]
    fn test_run_cycle_wraps() {
        let mut p = Player::new(PLAYER_X, GROUND);
        for _ in 0..25 {
            p.update(FRAME_MS, GROUND);
            assert!(p.run_cycle >= 0.0 && p.run_cycle < RUN_CYCLE_LENGTH);
        }
    }

    proptest! {
        #[test]
        fn prop_never_below_ground(
            dts in prop::collection::vec(0.0f32..200.0, 1..120),
            jumps in prop::collection::vec(any::<bool>(), 1..120),
        ) {
            let mut p = Player::new(PLAYER_X, GROUND);
            for (i, dt) in dts.iter().enumerate() {
                if jumps[i % jumps.len()] {
                    p.jump();
                }
                p.update(*dt, GROUND);
                prop_assert!(p.pos.y <= GROUND);
                if p.on_ground {
                    prop_assert_eq!(p.velocity_y, 0.0);
                    prop_assert_eq!(p.pos.y, GROUND);
                }
            }
        }
    }
}
