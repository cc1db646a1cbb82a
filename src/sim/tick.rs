//! Per-frame simulation tick
//!
//! Strict in-tick order: advance -> collide -> cleanup -> spawn cadence.
//! Advancement happens before collision testing, so an entity that crosses
//! into collision range and past the removal threshold in the same tick is
//! still tested for collision first, then evaluated for removal.

use crate::consts::*;
use crate::hover_offset;

use super::collision::{entity_aabb, player_aabb};
use super::spawn::spawn_wave;
use super::state::{EntityKind, GameEvent, GameState, Phase};

/// Advance the session by one display frame.
///
/// `dt` is the wall-clock frame delta in seconds; it drives the elapsed
/// counter and the spawn cadence. Entity travel is per-tick (depth gains the
/// level speed once per call, whatever `dt` is).
///
/// Does nothing unless the session is Running.
pub fn tick(state: &mut GameState, dt: f32) {
    if state.phase != Phase::Running {
        return;
    }

    state.time_ticks += 1;
    state.elapsed += dt as f64;
    state.player.vertical_offset = hover_offset(state.elapsed as f32);

    // Advance every live entity toward the camera
    let speed = state.level.speed();
    for entity in &mut state.entities {
        entity.depth += speed;
    }

    // Collision pass, against the post-advancement positions
    let player_box = player_aabb(state.player.lane);

    let obstacle_hit = state
        .entities_of(EntityKind::Obstacle)
        .any(|e| entity_aabb(e).intersects(&player_box));

    // All intersecting collectibles are collected this tick; removal is
    // synchronous with detection so none can score twice. This happens even
    // on an obstacle-hit tick (observed original behavior: both effects
    // apply in the same tick).
    let mut collected = Vec::new();
    state.entities.retain(|e| {
        if e.kind == EntityKind::Collectible && entity_aabb(e).intersects(&player_box) {
            collected.push(e.id);
            false
        } else {
            true
        }
    });
    for id in collected {
        state.score += 1;
        state.push_event(GameEvent::Collected { id });
    }

    // Discard entities past the camera, independent of collision outcome
    state.entities.retain(|e| e.depth <= REMOVE_DEPTH);

    if obstacle_hit {
        let elapsed_secs = state.elapsed;
        let score = state.score;
        log::info!("game over: score {score}, survived {elapsed_secs:.2}s");
        state.phase = Phase::GameOver;
        // Leaving Running releases the recurring timer on this exit path too
        state.spawn_timer = None;
        state.push_event(GameEvent::GameOver {
            score,
            elapsed_secs,
        });
        return;
    }

    // Spawn scheduler runs on its own cadence, only while still Running
    let fires = match state.spawn_timer.as_mut() {
        Some(timer) => timer.advance(dt as f64 * 1000.0),
        None => 0,
    };
    for _ in 0..fires {
        spawn_wave(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::sim::state::{Entity, LaneDirection};

    const FRAME_DT: f32 = 1.0 / 60.0;

    fn running_state(seed: u64, level: Level) -> GameState {
        let mut state = GameState::new(seed, level);
        state.start();
        state
    }

    fn push_entity(state: &mut GameState, kind: EntityKind, lane: i32, depth: f32) -> u32 {
        let id = state.next_entity_id();
        state.entities.push(Entity {
            id,
            kind,
            lane,
            depth,
        });
        id
    }

    #[test]
    fn test_tick_noop_outside_running() {
        let mut state = GameState::new(1, Level::Medium);
        tick(&mut state, FRAME_DT);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.elapsed, 0.0);

        state.start();
        state.phase = Phase::GameOver;
        tick(&mut state, FRAME_DT);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_medium_spawn_cadence_scenario() {
        // Medium tier: speed 0.12, interval 2000 ms. After one spawn
        // interval exactly one obstacle exists, at the spawn depth, with at
        // most one collectible in a different lane.
        let mut state = running_state(0xBEEF, Level::Medium);
        for _ in 0..120 {
            tick(&mut state, FRAME_DT);
        }

        let obstacles: Vec<Entity> = state
            .entities_of(EntityKind::Obstacle)
            .copied()
            .collect();
        assert_eq!(obstacles.len(), 1);
        assert!((obstacles[0].depth - SPAWN_DEPTH).abs() < 1e-3);

        let collectibles: Vec<Entity> = state
            .entities_of(EntityKind::Collectible)
            .copied()
            .collect();
        assert!(collectibles.len() <= 1);
        if let Some(c) = collectibles.first() {
            assert_ne!(c.lane, obstacles[0].lane);
        }

        // After N more ticks the obstacle has advanced by N * 0.12
        let n = 50;
        for _ in 0..n {
            tick(&mut state, FRAME_DT);
        }
        let obstacle = state
            .entities
            .iter()
            .find(|e| e.id == obstacles[0].id)
            .expect("obstacle still live");
        let expected = SPAWN_DEPTH + n as f32 * 0.12;
        assert!((obstacle.depth - expected).abs() < 1e-3);
    }

    #[test]
    fn test_obstacle_collision_ends_run_and_records_elapsed() {
        let mut state = running_state(3, Level::Medium);
        // Suppress scheduled spawns so only our scripted obstacle exists
        state.spawn_timer = None;
        push_entity(&mut state, EntityKind::Obstacle, 0, SPAWN_DEPTH);

        let mut ticks = 0;
        while state.phase == Phase::Running {
            tick(&mut state, FRAME_DT);
            ticks += 1;
            assert!(ticks < 10_000, "never collided");
        }

        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.score, 0);
        // Elapsed equals the accumulated frame time at the collision tick
        assert!((state.elapsed - ticks as f64 * FRAME_DT as f64).abs() < 1e-9);
        assert!(
            state
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::GameOver { .. }))
        );
    }

    #[test]
    fn test_collectible_scores_exactly_once() {
        let mut state = running_state(4, Level::Easy);
        state.spawn_timer = None;
        let id = push_entity(&mut state, EntityKind::Collectible, 0, -0.5);

        tick(&mut state, FRAME_DT);
        assert_eq!(state.score, 1);
        assert!(!state.entities.iter().any(|e| e.id == id));
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::Collected { id })
        );

        // Removed entity can never score again
        for _ in 0..100 {
            tick(&mut state, FRAME_DT);
        }
        assert_eq!(state.score, 1);
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn test_multiple_collectibles_all_score_in_one_tick() {
        let mut state = running_state(5, Level::Easy);
        state.spawn_timer = None;
        // Two collectibles overlapping the player at once (different depths,
        // same lane)
        push_entity(&mut state, EntityKind::Collectible, 0, -0.4);
        push_entity(&mut state, EntityKind::Collectible, 0, 0.3);

        tick(&mut state, FRAME_DT);
        assert_eq!(state.score, 2);
    }

    #[test]
    fn test_same_tick_obstacle_and_collectible_both_apply() {
        let mut state = running_state(6, Level::Easy);
        state.spawn_timer = None;
        push_entity(&mut state, EntityKind::Obstacle, 0, -0.2);
        push_entity(&mut state, EntityKind::Collectible, 0, 0.2);

        tick(&mut state, FRAME_DT);
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_entities_removed_past_camera() {
        let mut state = running_state(7, Level::Hard);
        state.spawn_timer = None;
        // Just under the threshold; one tick at 0.15 pushes it past
        push_entity(&mut state, EntityKind::Obstacle, 2, REMOVE_DEPTH - 0.01);

        tick(&mut state, FRAME_DT);
        assert!(state.entities.is_empty());
        // Removal does not end the run
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn test_passed_collectible_removed_without_scoring() {
        let mut state = running_state(8, Level::Hard);
        state.spawn_timer = None;
        push_entity(&mut state, EntityKind::Collectible, 0, REMOVE_DEPTH - 0.01);

        tick(&mut state, FRAME_DT);
        assert!(state.entities.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_game_over_cancels_spawn_timer() {
        let mut state = running_state(9, Level::Hard);
        push_entity(&mut state, EntityKind::Obstacle, 0, 0.0);

        tick(&mut state, FRAME_DT);
        assert_eq!(state.phase, Phase::GameOver);
        assert!(state.spawn_timer.is_none());

        // Ticking in GameOver never spawns or advances anything
        let live = state.entities.clone();
        for _ in 0..200 {
            tick(&mut state, FRAME_DT);
        }
        assert_eq!(state.entities, live);
    }

    #[test]
    fn test_depth_monotonic_until_removed() {
        let mut state = running_state(10, Level::Medium);
        let mut last: std::collections::HashMap<u32, f32> = Default::default();

        for _ in 0..2000 {
            tick(&mut state, FRAME_DT);
            for e in &state.entities {
                if let Some(prev) = last.get(&e.id) {
                    assert!(e.depth > *prev);
                }
                last.insert(e.id, e.depth);
            }
        }
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed and input script stay identical
        let mut a = running_state(0xA11CE, Level::Hard);
        let mut b = running_state(0xA11CE, Level::Hard);

        for i in 0..3000 {
            if i % 37 == 0 {
                a.move_lane(LaneDirection::Left);
                b.move_lane(LaneDirection::Left);
            }
            if i % 53 == 0 {
                a.move_lane(LaneDirection::Right);
                b.move_lane(LaneDirection::Right);
            }
            tick(&mut a, FRAME_DT);
            tick(&mut b, FRAME_DT);
        }

        assert_eq!(a.phase, b.phase);
        assert_eq!(a.score, b.score);
        assert_eq!(a.entities, b.entities);
        assert_eq!(a.time_ticks, b.time_ticks);
    }

    #[test]
    fn test_hover_offset_tracks_elapsed() {
        let mut state = running_state(11, Level::Easy);
        state.spawn_timer = None;
        for _ in 0..30 {
            tick(&mut state, FRAME_DT);
        }
        let expected = crate::hover_offset(state.elapsed as f32);
        assert!((state.player.vertical_offset - expected).abs() < 1e-6);
    }
}
