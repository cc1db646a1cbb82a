//! Login/score backend boundary
//!
//! The core loop never talks HTTP itself: on the GameOver transition the
//! host serializes a [`ScoreSubmission`], sends it with a bearer token, and
//! classifies the response with [`SubmitOutcome`]. Backend failures never
//! touch in-loop state and are not retried here.

use serde::{Deserialize, Serialize};

use crate::level::Level;

/// Payload POSTed to the scoring endpoint when a run ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub level: Level,
    /// Collectibles gathered this run
    pub score: u32,
    /// Survival duration in seconds
    pub elapsed_secs: f64,
}

/// One ranked row returned by the leaderboard endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub username: String,
    pub score: u32,
}

/// How the host should react to a scoring/leaderboard response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 200/201 - stored
    Accepted,
    /// 401 - token missing/expired; host should redirect to re-auth
    Unauthorized,
    /// Other 4xx - the request itself was bad; surface to the user
    Rejected(u16),
    /// 5xx or anything unexpected; surface to the user
    ServerError(u16),
}

impl SubmitOutcome {
    pub fn from_status(status: u16) -> Self {
        match status {
            200 | 201 => SubmitOutcome::Accepted,
            401 => SubmitOutcome::Unauthorized,
            400..=499 => SubmitOutcome::Rejected(status),
            _ => SubmitOutcome::ServerError(status),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// `Authorization` header value for a stored session token
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}
