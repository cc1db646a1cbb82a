//! Quantum Dash - a 3D lane-dodging collectible runner
//!
//! Core modules:
//! - `sim`: Deterministic game-state update loop (lanes, spawning, collisions, scoring)
//! - `level`: Difficulty tiers (travel speed + spawn cadence)
//! - `scene`: Per-frame snapshot and id-keyed handle map for the renderer
//! - `leaderboard`: Local per-tier top-10 cache
//! - `backend`: Wire types for the login/score HTTP backend
//! - `settings`: Player preferences

pub mod backend;
pub mod leaderboard;
pub mod level;
pub mod scene;
pub mod settings;
pub mod sim;

pub use leaderboard::Leaderboards;
pub use level::Level;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// The fixed lane set (x coordinates of the three track lanes)
    pub const LANES: [i32; 3] = [-2, 0, 2];
    /// Distance between adjacent lanes
    pub const LANE_SPACING: i32 = 2;
    /// Outermost lane bounds (inclusive)
    pub const LANE_MIN: i32 = -2;
    pub const LANE_MAX: i32 = 2;

    /// Depth (z) at which new entities materialize, far ahead of the player
    pub const SPAWN_DEPTH: f32 = -20.0;
    /// Depth past which an entity is behind the camera and removed
    pub const REMOVE_DEPTH: f32 = 5.0;

    /// Chance that a spawn event also produces a collectible
    pub const COLLECTIBLE_CHANCE: f64 = 0.5;

    /// Obstacles and collectibles are unit cubes
    pub const ENTITY_HALF_EXTENTS: Vec3 = Vec3::new(0.5, 0.5, 0.5);
    /// Player ship bounding volume
    pub const PLAYER_HALF_EXTENTS: Vec3 = Vec3::new(0.5, 0.35, 0.8);

    /// Baseline hover height of the player ship
    pub const HOVER_BASE: f32 = 0.2;
    /// Amplitude of the cosmetic hover oscillation
    pub const HOVER_AMPLITUDE: f32 = 0.1;
    /// Angular frequency of the hover oscillation (rad/s)
    pub const HOVER_FREQUENCY: f32 = 2.0;

    /// Camera follow offset above and behind the player
    pub const CAMERA_HEIGHT: f32 = 2.0;
    pub const CAMERA_DISTANCE: f32 = 5.0;
}

/// Cosmetic hover offset for the player ship at a given elapsed time.
///
/// Purely visual - excluded from collision.
#[inline]
pub fn hover_offset(elapsed_secs: f32) -> f32 {
    consts::HOVER_BASE + (elapsed_secs * consts::HOVER_FREQUENCY).sin() * consts::HOVER_AMPLITUDE
}

/// Current wall-clock time in milliseconds since the Unix epoch
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}
