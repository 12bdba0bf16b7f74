//! Player-selection step: toggle players in and out of the match pool and
//! advance to captain selection.

use crate::models::{MatchError, MatchSession, MatchStep, Player, PlayerId};

/// Toggle one player in or out of the selection. Toggling a current captain
/// out clears that captain slot in the same update.
pub fn toggle_player(
    session: &mut MatchSession,
    roster: &[Player],
    id: PlayerId,
) -> Result<(), MatchError> {
    if !roster.iter().any(|p| p.id == id) {
        return Err(MatchError::PlayerNotFound(id));
    }
    if session.selected_player_ids.contains(&id) {
        session.remove_player(id);
    } else {
        session.selected_player_ids.insert(id);
    }
    Ok(())
}

/// Select-all / deselect-all control: selects the full roster, or empties the
/// selection (which also clears both captain slots) when everyone is already in.
pub fn toggle_select_all(session: &mut MatchSession, roster: &[Player]) {
    if session.selected_player_ids.len() == roster.len() {
        session.selected_player_ids.clear();
        session.clear_captains();
    } else {
        session.selected_player_ids = roster.iter().map(|p| p.id).collect();
    }
}

/// Forward transition select-players -> select-captains. Requires at least 2
/// selected players; below that the action is unavailable, not an error state
/// the session can enter.
pub fn confirm_selection(session: &mut MatchSession) -> Result<(), MatchError> {
    if session.step != MatchStep::SelectPlayers {
        return Err(MatchError::InvalidStep);
    }
    if !session.can_advance_to_captains() {
        return Err(MatchError::NotEnoughPlayersSelected);
    }
    session.step = MatchStep::SelectCaptains;
    Ok(())
}
