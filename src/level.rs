//! Difficulty tiers
//!
//! Each tier pairs a per-tick travel speed with a spawn interval: faster
//! levels spawn more often and move entities faster.

use serde::{Deserialize, Serialize};

/// Difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Easy => "easy",
            Level::Medium => "medium",
            Level::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Level::Easy),
            "medium" | "med" => Some(Level::Medium),
            "hard" => Some(Level::Hard),
            _ => None,
        }
    }

    /// Depth gained per tick by every live entity
    pub fn speed(&self) -> f32 {
        match self {
            Level::Easy => 0.08,
            Level::Medium => 0.12,
            Level::Hard => 0.15,
        }
    }

    /// Wall-clock interval between spawn events
    pub fn spawn_interval_ms(&self) -> f64 {
        match self {
            Level::Easy => 3000.0,
            Level::Medium => 2000.0,
            Level::Hard => 1000.0,
        }
    }

    /// All tiers, slowest first
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for level in Level::ALL {
            assert_eq!(Level::from_str(level.as_str()), Some(level));
        }
        assert_eq!(Level::from_str("med"), Some(Level::Medium));
        assert_eq!(Level::from_str("brutal"), None);
    }

    #[test]
    fn test_faster_tiers_spawn_more_often() {
        assert!(Level::Hard.speed() > Level::Medium.speed());
        assert!(Level::Medium.speed() > Level::Easy.speed());
        assert!(Level::Hard.spawn_interval_ms() < Level::Medium.spawn_interval_ms());
        assert!(Level::Medium.spawn_interval_ms() < Level::Easy.spawn_interval_ms());
    }

    #[test]
    fn test_wire_format_is_lowercase() {
        let json = serde_json::to_string(&Level::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
