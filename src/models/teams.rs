//! GeneratedTeams snapshot and the coin toss result.

use crate::models::player::Player;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a coin toss.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum TossResult {
    Heads,
    Tails,
}

/// Immutable result of one team generation. Replaced wholesale on every
/// (re)generation; never partially mutated.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GeneratedTeams {
    /// Team A roster; the resolved captain sits at index 0 when present.
    pub team_a: Vec<Player>,
    /// Team B roster; same captain-first ordering.
    pub team_b: Vec<Player>,
    /// Resolved captain snapshots. None only when the captain id no longer
    /// resolves against the roster, which callers surface as a data defect.
    pub captain_a: Option<Player>,
    pub captain_b: Option<Player>,
    /// The single leftover player when the assignable pool split unevenly.
    pub common_player: Option<Player>,
    /// When this split was produced. Display/ordering only.
    pub generated_at: DateTime<Utc>,
}

impl GeneratedTeams {
    /// Total players placed on a side (captains included, common excluded).
    pub fn assigned_count(&self) -> usize {
        self.team_a.len() + self.team_b.len()
    }
}
