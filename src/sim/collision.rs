//! Axis-aligned bounding-box collision
//!
//! The player ship and every track entity are tested as AABBs once per tick,
//! after advancement. Lanes are 2 units apart and no box is wider than 1
//! unit, so entities in different lanes can never overlap the player.

use glam::Vec3;

use crate::consts::*;

use super::state::Entity;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Overlap test, inclusive of touching faces
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

/// Player bounding volume at the given lane.
///
/// Built at the fixed hover baseline: the cosmetic vertical oscillation is
/// excluded from collision.
pub fn player_aabb(lane: i32) -> Aabb {
    Aabb::from_center_half_extents(
        Vec3::new(lane as f32, HOVER_BASE, 0.0),
        PLAYER_HALF_EXTENTS,
    )
}

/// Bounding volume of a track entity at its current lane/depth
pub fn entity_aabb(entity: &Entity) -> Aabb {
    Aabb::from_center_half_extents(
        Vec3::new(entity.lane as f32, 0.0, entity.depth),
        ENTITY_HALF_EXTENTS,
    )
}
