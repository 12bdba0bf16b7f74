//! Roster validation: constructing and updating player records. The storage
//! layer owns the stored list; these run at the calling layer first so an
//! invalid player never reaches it.

use crate::models::{MatchError, Player, PlayerId, PlayerRole};

/// Validate and construct a new player. Names are trimmed, must be non-empty,
/// and must be unique case-insensitively within the roster.
pub fn create_player(
    roster: &[Player],
    name: &str,
    role: Option<PlayerRole>,
) -> Result<Player, MatchError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(MatchError::EmptyPlayerName);
    }
    let is_duplicate = roster
        .iter()
        .any(|p| p.full_name.eq_ignore_ascii_case(name));
    if is_duplicate {
        return Err(MatchError::DuplicatePlayerName);
    }
    Ok(Player::new(name, role))
}

/// Produce the updated record for a role change (the only mutable field after
/// creation). The caller hands the result to the store.
pub fn change_role(
    roster: &[Player],
    id: PlayerId,
    role: Option<PlayerRole>,
) -> Result<Player, MatchError> {
    let mut p = roster
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .ok_or(MatchError::PlayerNotFound(id))?;
    p.role = role;
    Ok(p)
}
