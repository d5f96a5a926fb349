//! Per-frame simulation step
//!
//! Order within a tick: speed/score, player, ground, spawner, obstacle
//! motion and culling, then the collision scan.

use super::obstacle::Obstacle;
use super::rect::Rect;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::sanitize_dt;

/// Advance the session by one frame of `dt_ms` milliseconds.
///
/// Does nothing unless the session is running.
pub fn tick(state: &mut GameState, dt_ms: f32) {
    if state.phase != GamePhase::Running {
        return;
    }
    let dt = sanitize_dt(dt_ms);

    state.time_ticks += 1;

    // Fixed per-tick ramp, deliberately not scaled by dt
    state.speed += SPEED_INCREMENT;
    state.score += state.speed * SCORE_RATE;

    let ground_y = state.ground.ground_y();
    state.player.update(dt, ground_y);
    state.ground.update(dt, state.speed);

    step_spawner(state, dt);

    for obstacle in &mut state.obstacles {
        obstacle.update(dt);
    }
    state.obstacles.retain(|o| !o.is_off_screen());

    let player_bounds = state.player.bounds();
    if let Some(index) = first_collision(&player_bounds, &state.obstacles) {
        end_run(state, index);
    }
}

/// Accumulate spawn time and emit at most one obstacle per tick
fn step_spawner(state: &mut GameState, dt: f32) {
    state.spawn_timer_ms += dt;
    if state.spawn_timer_ms < state.spawn_interval_ms {
        return;
    }

    let spawn_x = state.width;
    let ground_y = state.ground.ground_y();
    // Speed is locked in at spawn and never follows the session speed
    let speed = state.speed + OBSTACLE_SPEED_MARGIN;
    let obstacle = Obstacle::new(spawn_x, ground_y, speed, state.rng_mut());

    log::debug!(
        "Spawned {} obstacle at x={} speed={:.3} (interval {}ms)",
        obstacle.size.as_str(),
        spawn_x,
        speed,
        state.spawn_interval_ms
    );
    state.emit(GameEvent::ObstacleSpawned {
        size: obstacle.size,
        x: spawn_x,
        speed,
    });
    state.obstacles.push(obstacle);

    state.spawn_timer_ms = 0.0;
    state.spawn_interval_ms =
        (state.spawn_interval_ms - SPAWN_INTERVAL_STEP).max(SPAWN_INTERVAL_MIN);
}

/// Index of the first obstacle (in spawn order) overlapping `player`
pub fn first_collision(player: &Rect, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles.iter().position(|o| o.collides_with(player))
}

fn end_run(state: &mut GameState, obstacle_index: usize) {
    state.phase = GamePhase::GameOver;
    let score = state.display_score();
    log::info!(
        "Game over: hit {} obstacle after {} ticks, final score {}",
        state.obstacles[obstacle_index].size.as_str(),
        state.time_ticks,
        score
    );
    state.emit(GameEvent::GameOver { score });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::ObstacleSize;
    use proptest::prelude::*;

    const HOST_DT: f32 = 16.67;

    fn running_state(seed: u64) -> GameState {
        let mut state = GameState::new(800.0, 400.0, seed).unwrap();
        state.start();
        state
    }

    /// Run without jumping until the first collision (or the frame limit)
    fn run_until_game_over(state: &mut GameState, max_frames: u32) {
        for _ in 0..max_frames {
            state.update(HOST_DT);
            if state.is_game_over() {
                return;
            }
        }
    }

    #[test]
    fn test_not_started_is_inert() {
        let mut state = GameState::new(800.0, 400.0, 1).unwrap();
        state.update(HOST_DT);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.speed, START_SPEED);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_hundred_ticks_without_spawns() {
        let mut state = running_state(3);
        assert_eq!(state.ground_y(), 380.0);

        let mut expected = 0.0f32;
        let mut speed = START_SPEED;
        for _ in 0..100 {
            state.update(HOST_DT);
            speed += SPEED_INCREMENT;
            expected += speed * SCORE_RATE;
        }

        assert!(!state.is_game_over());
        // 100 frames is ~1.67s, short of the first spawn at 2s
        assert!(state.obstacles.is_empty());
        assert!((state.speed - speed).abs() < 1e-4);
        assert!((state.score - expected).abs() < 1e-2, "{} vs {}", state.score, expected);
        assert_eq!(state.display_score(), expected.floor() as u64);
    }

    #[test]
    fn test_forced_obstacle_ends_run() {
        let mut state = running_state(3);
        let ground_y = state.ground_y();
        state.spawn_obstacle(Obstacle::with_size(
            PLAYER_X,
            ground_y,
            state.speed + OBSTACLE_SPEED_MARGIN,
            ObstacleSize::Tall,
        ));

        state.update(HOST_DT);
        assert!(state.is_game_over());

        let score = state.score;
        let speed = state.speed;
        let obstacle_x = state.obstacles[0].pos.x;
        state.update(HOST_DT);
        assert_eq!(state.score, score);
        assert_eq!(state.speed, speed);
        assert_eq!(state.obstacles[0].pos.x, obstacle_x);
    }

    #[test]
    fn test_simultaneous_hits_single_game_over() {
        let mut state = running_state(3);
        let ground_y = state.ground_y();
        for x in [PLAYER_X, PLAYER_X + 10.0] {
            state.spawn_obstacle(Obstacle::with_size(x, ground_y, 4.0, ObstacleSize::Tall));
        }
        state.drain_events();

        state.update(HOST_DT);
        assert!(state.is_game_over());
        let game_overs = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_first_spawn_and_ratchet() {
        let mut state = running_state(5);
        let ticks_to_spawn = (SPAWN_INTERVAL_START / HOST_DT).ceil() as u32;
        for _ in 0..ticks_to_spawn - 1 {
            state.update(HOST_DT);
        }
        assert!(state.obstacles.is_empty());

        state.update(HOST_DT);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.spawn_timer_ms, 0.0);
        assert_eq!(state.spawn_interval_ms, SPAWN_INTERVAL_START - SPAWN_INTERVAL_STEP);

        let obstacle = &state.obstacles[0];
        assert!((obstacle.speed - (state.speed + OBSTACLE_SPEED_MARGIN)).abs() < 1e-5);
        // Spawned at the right edge, then advanced within the same tick
        assert!(obstacle.pos.x < 800.0 && obstacle.pos.x > 790.0);
        assert_eq!(obstacle.pos.y, state.ground_y() - obstacle.height());
    }

    #[test]
    fn test_obstacle_speed_fixed_after_spawn() {
        let mut state = running_state(5);
        while state.obstacles.is_empty() {
            state.update(HOST_DT);
        }
        let spawn_speed = state.obstacles[0].speed;
        for _ in 0..30 {
            state.jump();
            state.update(HOST_DT);
        }
        assert!(state.speed > spawn_speed - OBSTACLE_SPEED_MARGIN);
        assert_eq!(state.obstacles[0].speed, spawn_speed);
    }

    #[test]
    fn test_spawn_interval_floor() {
        let mut state = running_state(9);
        // Big steps trigger a spawn every tick; obstacles never reach the player
        for _ in 0..40 {
            state.obstacles.clear();
            state.update(SPAWN_INTERVAL_START);
        }
        assert_eq!(state.spawn_interval_ms, SPAWN_INTERVAL_MIN);
    }

    #[test]
    fn test_off_screen_obstacles_culled_in_order() {
        let mut state = running_state(9);
        let ground_y = state.ground_y();
        state.spawn_obstacle(Obstacle::with_size(-30.0, ground_y, 4.0, ObstacleSize::Short));
        state.spawn_obstacle(Obstacle::with_size(600.0, ground_y, 4.0, ObstacleSize::Medium));
        state.spawn_obstacle(Obstacle::with_size(700.0, ground_y, 4.0, ObstacleSize::Tall));

        state.update(HOST_DT);
        let sizes: Vec<_> = state.obstacles.iter().map(|o| o.size).collect();
        assert_eq!(sizes, vec![ObstacleSize::Medium, ObstacleSize::Tall]);
    }

    #[test]
    fn test_running_into_cactus_ends_game() {
        let mut state = running_state(11);
        run_until_game_over(&mut state, 1000);
        assert!(state.is_game_over());
        assert!(state.score > 0.0);
        assert!(!state.obstacles.is_empty());
    }

    #[test]
    fn test_restart_matches_fresh_session() {
        let mut state = running_state(11);
        run_until_game_over(&mut state, 1000);
        assert!(state.is_game_over());
        assert!(state.score > 0.0);
        assert!(!state.obstacles.is_empty());

        state.start();
        let fresh = running_state(11);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, fresh.score);
        assert_eq!(state.speed, fresh.speed);
        assert_eq!(state.spawn_timer_ms, fresh.spawn_timer_ms);
        assert_eq!(state.spawn_interval_ms, fresh.spawn_interval_ms);
        assert!(state.obstacles.is_empty());
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_running_flag_across_lifecycle() {
        let mut state = GameState::new(800.0, 400.0, 13).unwrap();
        assert!(!state.is_running() && !state.is_game_over());

        state.start();
        assert!(state.is_running() && !state.is_game_over());

        run_until_game_over(&mut state, 1000);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.is_running() && state.is_game_over());

        state.start();
        assert!(state.is_running() && !state.is_game_over());

        run_until_game_over(&mut state, 1000);
        assert!(state.is_game_over());
        state.destroy();
        assert!(!state.is_running() && !state.is_game_over());

        state.start();
        assert!(state.is_running() && !state.is_game_over());
    }

    #[test]
    fn test_negative_dt_keeps_physics_still() {
        let mut state = running_state(2);
        state.jump();
        let y = state.player.pos.y;
        state.update(-50.0);
        state.update(f32::NAN);
        assert_eq!(state.player.pos.y, y);
        assert_eq!(state.spawn_timer_ms, 0.0);
        // The fixed per-tick ramp still applies
        assert!(state.speed > START_SPEED);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = running_state(77);
        let mut b = running_state(77);
        for i in 0..2000 {
            if i % 45 == 0 {
                a.jump();
                b.jump();
            }
            a.update(HOST_DT);
            b.update(HOST_DT);
        }
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.score, b.score);
        let sizes_a: Vec<_> = a.obstacles.iter().map(|o| o.size).collect();
        let sizes_b: Vec<_> = b.obstacles.iter().map(|o| o.size).collect();
        assert_eq!(sizes_a, sizes_b);
    }

    #[test]
    fn test_snapshot_resumes_identically() {
        let mut state = running_state(21);
        for _ in 0..150 {
            state.update(HOST_DT);
        }
        let json = serde_json::to_string(&state).unwrap();
        let mut restored: GameState = serde_json::from_str(&json).unwrap();

        for _ in 0..400 {
            state.update(HOST_DT);
            restored.update(HOST_DT);
        }
        assert_eq!(state.phase, restored.phase);
        assert_eq!(state.score, restored.score);
        assert_eq!(state.obstacles.len(), restored.obstacles.len());
        for (a, b) in state.obstacles.iter().zip(&restored.obstacles) {
            assert_eq!(a.size, b.size);
            assert_eq!(a.pos, b.pos);
        }
    }

    proptest! {
        #[test]
        fn prop_run_invariants(
            seed in any::<u64>(),
            dts in prop::collection::vec(0.0f32..120.0, 1..300),
            jump_every in 1usize..60,
        ) {
            let mut state = running_state(seed);
            let ground_y = state.ground_y();
            for (i, dt) in dts.iter().enumerate() {
                if i % jump_every == 0 {
                    state.jump();
                }
                let speed_before = state.speed;
                let interval_before = state.spawn_interval_ms;
                let was_running = state.phase == GamePhase::Running;

                state.update(*dt);

                prop_assert!(state.player.pos.y <= ground_y);
                prop_assert!(state.spawn_interval_ms <= interval_before);
                prop_assert!(state.spawn_interval_ms >= SPAWN_INTERVAL_MIN);
                if was_running {
                    prop_assert!(state.speed > speed_before);
                } else {
                    prop_assert_eq!(state.speed, speed_before);
                }
                for o in &state.obstacles {
                    prop_assert_eq!(o.pos.y, ground_y - o.height());
                    prop_assert!(!o.is_off_screen());
                }
            }
        }
    }
}
