//! File-backed persistence for the roster and the match-session snapshot.
//!
//! Two JSON files under a data directory: `players.json` (the roster) and
//! `match_state.json` (the wizard snapshot). Reads that fail for any reason
//! fall back to "nothing stored" with a log line; they never propagate.
//! Writes are best effort: a failed write is logged and the in-memory state
//! stays authoritative.

use crate::models::{MatchSession, Player, PlayerId};
use std::fs;
use std::path::{Path, PathBuf};

const PLAYERS_FILE: &str = "players.json";
const MATCH_STATE_FILE: &str = "match_state.json";

/// Handle to the on-disk store. Cheap to clone paths from; all methods take
/// `&self` since the single-writer session model needs no interior locking.
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Open (creating if needed) the data directory.
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn players_path(&self) -> PathBuf {
        self.dir.join(PLAYERS_FILE)
    }

    fn match_state_path(&self) -> PathBuf {
        self.dir.join(MATCH_STATE_FILE)
    }

    /// The stored roster, or empty if nothing is stored or the payload is
    /// unreadable. Failure is recovered locally, never surfaced.
    pub fn load_roster(&self) -> Vec<Player> {
        read_json(&self.players_path()).unwrap_or_default()
    }

    /// Append a new player and return the updated roster. Duplicate-name
    /// checks happen at the calling layer before this is invoked.
    pub fn save_player(&self, player: Player) -> Vec<Player> {
        let mut roster = self.load_roster();
        roster.push(player);
        self.write_roster(&roster);
        roster
    }

    /// Replace the stored record matching the player's id (role updates) and
    /// return the updated roster.
    pub fn update_player(&self, player: Player) -> Vec<Player> {
        let mut roster = self.load_roster();
        if let Some(slot) = roster.iter_mut().find(|p| p.id == player.id) {
            *slot = player;
        }
        self.write_roster(&roster);
        roster
    }

    /// Remove the given id and return the updated roster.
    pub fn delete_player(&self, id: PlayerId) -> Vec<Player> {
        let mut roster = self.load_roster();
        roster.retain(|p| p.id != id);
        self.write_roster(&roster);
        roster
    }

    /// Erase both the roster and the persisted session snapshot.
    pub fn clear_all(&self) {
        remove_if_present(&self.players_path());
        remove_if_present(&self.match_state_path());
    }

    /// Persist the full session snapshot. Called after every session change so
    /// a reload resumes the exact step, selections, captains, and last result.
    pub fn persist_match_state(&self, session: &MatchSession) {
        write_json(&self.match_state_path(), session);
    }

    /// The stored session snapshot, or a fresh one at the first step.
    pub fn load_match_state(&self) -> MatchSession {
        read_json(&self.match_state_path()).unwrap_or_default()
    }

    fn write_roster(&self, roster: &[Player]) {
        write_json(&self.players_path(), &roster);
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    if !path.is_file() {
        return None;
    }
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Failed to read {}: {e}; treating as empty", path.display());
            return None;
        }
    };
    match serde_json::from_str(&data) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Failed to parse {}: {e}; treating as empty", path.display());
            None
        }
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) {
    let payload = match serde_json::to_string_pretty(value) {
        Ok(p) => p,
        Err(e) => {
            log::error!("Failed to serialize {}: {e}", path.display());
            return;
        }
    };
    if let Err(e) = fs::write(path, payload) {
        log::error!("Failed to write {}: {e}", path.display());
    }
}

fn remove_if_present(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            log::error!("Failed to remove {}: {e}", path.display());
        }
    }
}
