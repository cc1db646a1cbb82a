//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-driven only (one `tick` per display frame)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, entity_aabb, player_aabb};
pub use spawn::{SpawnTimer, spawn_wave};
pub use state::{Entity, EntityKind, GameEvent, GameState, LaneDirection, Phase, Player};
pub use tick::tick;
