//! Spawn scheduling
//!
//! A spawn event always creates one obstacle and, half the time, one
//! collectible in a *different* lane, so a single firing can never force an
//! unavoidable collision/collection ambiguity.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::consts::*;

use super::state::{Entity, EntityKind, GameEvent, GameState};

/// Recurring spawn timer owned by the session state machine.
///
/// Created when entering Running and dropped on every exit path, so a
/// duplicate live timer across re-entries is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnTimer {
    interval_ms: f64,
    remaining_ms: f64,
}

impl SpawnTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            remaining_ms: interval_ms,
        }
    }

    /// Advance the timer by `dt_ms`, returning how many times it fired.
    /// A huge frame gap yields multiple firings rather than losing cadence.
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        self.remaining_ms -= dt_ms;
        let mut fires = 0;
        while self.remaining_ms <= 0.0 {
            self.remaining_ms += self.interval_ms;
            fires += 1;
        }
        fires
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}

/// Materialize one spawn event: shuffle the lane set, place an obstacle at
/// the first lane of the permutation and, with fixed probability, a
/// collectible at the second. Both at the spawn depth.
pub fn spawn_wave(state: &mut GameState) {
    let mut lanes = LANES;
    lanes.shuffle(&mut state.rng);

    let obstacle = state.next_entity_id();
    state.entities.push(Entity {
        id: obstacle,
        kind: EntityKind::Obstacle,
        lane: lanes[0],
        depth: SPAWN_DEPTH,
    });

    let collectible = if state.rng.random_bool(COLLECTIBLE_CHANCE) {
        let id = state.next_entity_id();
        state.entities.push(Entity {
            id,
            kind: EntityKind::Collectible,
            lane: lanes[1],
            depth: SPAWN_DEPTH,
        });
        Some(id)
    } else {
        None
    };

    log::debug!(
        "spawn: obstacle #{obstacle} lane {}, collectible {:?}",
        lanes[0],
        collectible
    );
    state.push_event(GameEvent::Spawned {
        obstacle,
        collectible,
    });
}
