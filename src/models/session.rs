//! MatchSession: the single mutable cross-step state of the match wizard.

use crate::models::player::PlayerId;
use crate::models::teams::{GeneratedTeams, TossResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Errors that can occur during match-creation operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatchError {
    /// The session is not in a step that allows this action.
    InvalidStep,
    /// Fewer than 2 players selected; cannot advance to captains.
    NotEnoughPlayersSelected,
    /// Both captains must be chosen before generating teams.
    MissingCaptain,
    /// The two captains must be distinct players.
    SameCaptain,
    /// A captain must be one of the selected players.
    PlayerNotSelected(PlayerId),
    /// Player id not found in the roster.
    PlayerNotFound(PlayerId),
    /// Player names must be non-empty.
    EmptyPlayerName,
    /// A player with this name already exists (names are unique, case-insensitive).
    DuplicatePlayerName,
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::InvalidStep => write!(f, "Invalid step for this action"),
            MatchError::NotEnoughPlayersSelected => {
                write!(f, "Select at least 2 players to continue")
            }
            MatchError::MissingCaptain => write!(f, "Both captains must be chosen"),
            MatchError::SameCaptain => write!(f, "Captains must be two different players"),
            MatchError::PlayerNotSelected(_) => {
                write!(f, "Captain must be one of the selected players")
            }
            MatchError::PlayerNotFound(_) => write!(f, "Player not found"),
            MatchError::EmptyPlayerName => write!(f, "Player name cannot be empty"),
            MatchError::DuplicatePlayerName => write!(f, "Player already exists"),
        }
    }
}

/// Current position in the match-creation wizard.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStep {
    /// Picking the match pool from the roster.
    #[default]
    SelectPlayers,
    /// Picking one captain per side from the pool.
    SelectCaptains,
    /// Showing the last generated split; reshuffle re-enters generation.
    ViewTeams,
}

/// Full wizard state: step, selection, captains, last result, toss.
///
/// Owned by the application session; every mutation goes through one of the
/// step operations in `logic`, and the caller persists the whole snapshot
/// afterwards so a reload resumes exactly where the user left off.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchSession {
    pub step: MatchStep,
    /// Players picked for this match. Order irrelevant.
    pub selected_player_ids: HashSet<PlayerId>,
    /// Captain for team A; always a member of `selected_player_ids` when set.
    pub captain_a_id: Option<PlayerId>,
    /// Captain for team B; distinct from captain A when both are set.
    pub captain_b_id: Option<PlayerId>,
    /// Most recent generator output, kept across backward navigation.
    pub last_generated_teams: Option<GeneratedTeams>,
    /// Recorded toss outcome, independent of the wizard steps.
    pub toss_result: Option<TossResult>,
}

impl MatchSession {
    /// Fresh session at the first step with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the forward transition out of player selection is available.
    pub fn can_advance_to_captains(&self) -> bool {
        self.selected_player_ids.len() >= 2
    }

    /// Drop a player from the selection and from any captain slot holding it.
    /// Used both by the selection toggle and by roster deletion, so a removed
    /// player never survives as a stale captain reference.
    pub fn remove_player(&mut self, id: PlayerId) {
        self.selected_player_ids.remove(&id);
        if self.captain_a_id == Some(id) {
            self.captain_a_id = None;
        }
        if self.captain_b_id == Some(id) {
            self.captain_b_id = None;
        }
    }

    /// Clear both captain slots (deselect-all path).
    pub fn clear_captains(&mut self) {
        self.captain_a_id = None;
        self.captain_b_id = None;
    }

    /// Validate that `id` may occupy a captain slot: it must be selected and
    /// must not equal the other slot's occupant.
    pub(crate) fn check_captain(
        &self,
        id: PlayerId,
        other: Option<PlayerId>,
    ) -> Result<(), MatchError> {
        if !self.selected_player_ids.contains(&id) {
            return Err(MatchError::PlayerNotSelected(id));
        }
        if other == Some(id) {
            return Err(MatchError::SameCaptain);
        }
        Ok(())
    }
}
