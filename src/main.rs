//! Quantum Dash entry point
//!
//! The browser host drives the loop (frame callbacks, keyboard input, score
//! submission). Natively this runs a headless demo session with a simple
//! dodge autopilot, which doubles as a smoke test of the full loop.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use quantum_dash::backend::ScoreSubmission;
    use quantum_dash::consts::*;
    use quantum_dash::level::Level;
    use quantum_dash::sim::state::{EntityKind, GameEvent, GameState, LaneDirection, Phase};
    use quantum_dash::sim::tick;
    use quantum_dash::{Leaderboards, now_ms};

    env_logger::init();

    let seed = now_ms() as u64;
    let level = Level::Medium;
    log::info!("Quantum Dash headless demo, seed {seed}, level {}", level.as_str());

    let mut state = GameState::new(seed, level);
    state.start();

    let dt = 1.0 / 60.0;
    let max_ticks = 60 * 60 * 5; // five simulated minutes

    for _ in 0..max_ticks {
        autopilot(&mut state);
        tick(&mut state, dt);

        for event in state.drain_events() {
            match event {
                GameEvent::Collected { id } => log::debug!("collected #{id}"),
                GameEvent::Spawned { .. } => {}
                GameEvent::GameOver { score, elapsed_secs } => {
                    log::info!("run over: score {score}, {elapsed_secs:.2}s");
                }
            }
        }

        if state.phase == Phase::GameOver {
            break;
        }
    }

    let payload = ScoreSubmission {
        level,
        score: state.score,
        elapsed_secs: state.elapsed,
    };
    println!(
        "score submission payload: {}",
        serde_json::to_string(&payload).unwrap_or_default()
    );

    let mut boards = Leaderboards::load();
    if let Some(rank) = boards.tier_mut(level).add_score("demo", state.score, now_ms()) {
        println!("local leaderboard rank: #{rank}");
    }
    boards.save();

    // Naive dodge bot: if an obstacle is closing in on the current lane,
    // step to a neighboring lane that has no nearby obstacle.
    fn autopilot(state: &mut GameState) {
        let lane = state.player.lane;
        let threatened = |l: i32| {
            state
                .entities_of(EntityKind::Obstacle)
                .any(|e| e.lane == l && e.depth > -8.0 && e.depth < 2.0)
        };

        if !threatened(lane) {
            return;
        }
        let left = lane - LANE_SPACING;
        let right = lane + LANE_SPACING;
        if left >= LANE_MIN && !threatened(left) {
            state.move_lane(LaneDirection::Left);
        } else if right <= LANE_MAX && !threatened(right) {
            state.move_lane(LaneDirection::Right);
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_entry {
    use wasm_bindgen::prelude::*;

    /// Install logging and panic reporting; the JS host constructs the
    /// session and drives `tick` from its animation frame callback.
    #[wasm_bindgen(start)]
    pub fn wasm_main() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Quantum Dash core loaded");
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
