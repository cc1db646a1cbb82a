//! Renderer boundary
//!
//! The renderer never reaches into simulation state: each frame it is handed
//! a [`SceneView`] snapshot, and it keeps its own visual objects in a
//! [`HandleMap`] keyed by entity id. Id-keyed lookup (instead of positional
//! array indexing) stays correct when entities are removed mid-list.

use std::collections::HashMap;

use glam::Vec3;

use crate::consts::*;
use crate::sim::state::{EntityKind, GameState, Phase};

/// World-space pose of the player ship for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerPose {
    pub position: Vec3,
    /// Fixed facing down the track
    pub yaw: f32,
}

/// Camera follow pose: above and behind the player, looking at its lane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
}

/// One drawable track entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityInstance {
    pub id: u32,
    pub kind: EntityKind,
    pub position: Vec3,
}

/// Immutable per-frame snapshot consumed by the renderer
#[derive(Debug, Clone)]
pub struct SceneView {
    pub phase: Phase,
    pub score: u32,
    pub elapsed_secs: f64,
    pub player: PlayerPose,
    pub camera: CameraPose,
    pub entities: Vec<EntityInstance>,
}

impl SceneView {
    /// Capture the current state. The player pose carries the live hover
    /// offset; the camera follows the player's lane.
    pub fn capture(state: &GameState) -> Self {
        let lane_x = state.player.lane as f32;
        Self {
            phase: state.phase,
            score: state.score,
            elapsed_secs: state.elapsed,
            player: PlayerPose {
                position: Vec3::new(lane_x, state.player.vertical_offset, 0.0),
                yaw: -std::f32::consts::FRAC_PI_2,
            },
            camera: CameraPose {
                eye: Vec3::new(lane_x, CAMERA_HEIGHT, CAMERA_DISTANCE),
                target: Vec3::new(lane_x, 0.0, 0.0),
            },
            entities: state
                .entities
                .iter()
                .map(|e| EntityInstance {
                    id: e.id,
                    kind: e.kind,
                    position: Vec3::new(e.lane as f32, 0.0, e.depth),
                })
                .collect(),
        }
    }
}

/// Entity-id keyed storage for renderer-side handles (meshes, GPU objects).
///
/// Lookups of ids that no longer exist are no-ops, never faults.
#[derive(Debug, Clone, Default)]
pub struct HandleMap<H> {
    handles: HashMap<u32, H>,
}

impl<H> HandleMap<H> {
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }

    pub fn insert(&mut self, id: u32, handle: H) -> Option<H> {
        self.handles.insert(id, handle)
    }

    pub fn get(&self, id: u32) -> Option<&H> {
        self.handles.get(&id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut H> {
        self.handles.get_mut(&id)
    }

    pub fn remove(&mut self, id: u32) -> Option<H> {
        self.handles.remove(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.handles.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Drop handles whose entity is gone, returning them so the renderer can
    /// dispose the underlying resources.
    pub fn prune(&mut self, view: &SceneView) -> Vec<H> {
        let live: std::collections::HashSet<u32> =
            view.entities.iter().map(|e| e.id).collect();
        let stale: Vec<u32> = self
            .handles
            .keys()
            .copied()
            .filter(|id| !live.contains(id))
            .collect();
        stale
            .into_iter()
            .filter_map(|id| self.handles.remove(&id))
            .collect()
    }
}
