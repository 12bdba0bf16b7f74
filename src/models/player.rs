//! Player and PlayerRole data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in selections and lookups).
pub type PlayerId = Uuid;

/// Optional role used to balance team composition during generation.
///
/// Wire names match the persisted format exactly ("All-rounder" with a hyphen).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum PlayerRole {
    Batsman,
    Bowler,
    #[serde(rename = "All-rounder")]
    AllRounder,
}

/// A player in the master roster.
///
/// Match selection is tracked as a separate id set on the session, never as a
/// flag on the player record, so the same player value can appear in roster
/// views and generated teams without aliasing.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub full_name: String,
    /// None means unranked; unranked players fill whichever side is short.
    #[serde(default)]
    pub role: Option<PlayerRole>,
}

impl Player {
    /// Create a new player with the given name and optional role.
    pub fn new(full_name: impl Into<String>, role: Option<PlayerRole>) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name: full_name.into(),
            role,
        }
    }
}
