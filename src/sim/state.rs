//! Game session state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::level::Level;

use super::spawn::SpawnTimer;

/// Current phase of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the explicit start action
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended by an obstacle collision
    GameOver,
}

/// What an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Red cube - colliding with it ends the run
    Obstacle,
    /// Quantum cube - colliding with it scores a point
    Collectible,
}

/// A live track entity (obstacle or collectible)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    /// Unique, monotonically increasing (creation-order tiebreak)
    pub id: u32,
    pub kind: EntityKind,
    /// One of the fixed lane set
    pub lane: i32,
    /// Signed distance along the travel axis; starts at the spawn depth,
    /// increases every tick until past the camera
    pub depth: f32,
}

/// Lane-change input direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneDirection {
    Left,
    Right,
}

/// The player ship
#[derive(Debug, Clone, Copy)]
pub struct Player {
    /// Current discrete lane, mutated only by validated input
    pub lane: i32,
    /// Cosmetic hover oscillation, derived from elapsed time.
    /// Not gameplay-relevant and excluded from collision.
    pub vertical_offset: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            lane: 0,
            vertical_offset: HOVER_BASE,
        }
    }
}

/// Events emitted by the tick for the host to react to
/// (play sounds, submit scores, update HUD)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A spawn event fired
    Spawned {
        obstacle: u32,
        collectible: Option<u32>,
    },
    /// A collectible was picked up
    Collected { id: u32 },
    /// An obstacle collision ended the run
    GameOver { score: u32, elapsed_secs: f64 },
}

/// Complete session state, owned by the game-loop host and passed by
/// reference into every phase function. No ambient singletons.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Difficulty tier for this session
    pub level: Level,
    /// Session state machine phase
    pub phase: Phase,
    /// Collectibles picked up this run
    pub score: u32,
    /// Survival duration in seconds since entering Running;
    /// frozen once the run ends
    pub elapsed: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// The player ship
    pub player: Player,
    /// Live entities, in creation order (ids are monotonic)
    pub entities: Vec<Entity>,
    /// Recurring spawn timer; Some only while Running
    pub(crate) spawn_timer: Option<SpawnTimer>,
    /// Seeded RNG for lane permutations and collectible rolls
    pub(crate) rng: Pcg32,
    /// Next entity ID
    next_id: u32,
    /// Events produced since the last drain
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session in NotStarted
    pub fn new(seed: u64, level: Level) -> Self {
        Self {
            seed,
            level,
            phase: Phase::NotStarted,
            score: 0,
            elapsed: 0.0,
            time_ticks: 0,
            player: Player::default(),
            entities: Vec::new(),
            spawn_timer: None,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            events: Vec::new(),
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Explicit start action. Valid only from NotStarted; anything else is
    /// silently ignored.
    pub fn start(&mut self) {
        if self.phase != Phase::NotStarted {
            return;
        }
        log::info!("session start (level {})", self.level.as_str());
        self.begin_run();
    }

    /// Explicit "play again" action. Valid only from GameOver; anything else
    /// is silently ignored.
    pub fn play_again(&mut self) {
        if self.phase != Phase::GameOver {
            return;
        }
        log::info!("play again (level {})", self.level.as_str());
        self.begin_run();
    }

    /// Full reset into Running: clears entities, zeroes score/lane/elapsed,
    /// restarts the spawn timer.
    fn begin_run(&mut self) {
        self.phase = Phase::Running;
        self.score = 0;
        self.elapsed = 0.0;
        self.time_ticks = 0;
        self.player = Player::default();
        self.entities.clear();
        self.spawn_timer = Some(SpawnTimer::new(self.level.spawn_interval_ms()));
        self.events.clear();
    }

    /// Move the player one lane left or right, clamped to the outermost
    /// lanes. No-op at the bound; rejected while not Running.
    pub fn move_lane(&mut self, direction: LaneDirection) {
        if self.phase != Phase::Running {
            return;
        }
        match direction {
            LaneDirection::Left => {
                if self.player.lane > LANE_MIN {
                    self.player.lane -= LANE_SPACING;
                }
            }
            LaneDirection::Right => {
                if self.player.lane < LANE_MAX {
                    self.player.lane += LANE_SPACING;
                }
            }
        }
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Live entities of one kind
    pub fn entities_of(&self, kind: EntityKind) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.kind == kind)
    }
}
