//! Captain-selection step: two mutually exclusive pickers over the selected
//! pool, plus backward navigation to player selection.

use crate::models::{MatchError, MatchSession, MatchStep, PlayerId};

/// Set (or clear, with None) the captain for team A. The choice must be a
/// selected player and must differ from captain B.
pub fn set_captain_a(
    session: &mut MatchSession,
    id: Option<PlayerId>,
) -> Result<(), MatchError> {
    if let Some(id) = id {
        session.check_captain(id, session.captain_b_id)?;
    }
    session.captain_a_id = id;
    Ok(())
}

/// Set (or clear, with None) the captain for team B. Mirror of `set_captain_a`.
pub fn set_captain_b(
    session: &mut MatchSession,
    id: Option<PlayerId>,
) -> Result<(), MatchError> {
    if let Some(id) = id {
        session.check_captain(id, session.captain_a_id)?;
    }
    session.captain_b_id = id;
    Ok(())
}

/// Backward transition select-captains -> select-players. Always allowed from
/// the captain step; keeps captains and any previous result so the user can
/// tweak the selection without losing downstream state.
pub fn back_to_selection(session: &mut MatchSession) -> Result<(), MatchError> {
    if session.step != MatchStep::SelectCaptains {
        return Err(MatchError::InvalidStep);
    }
    session.step = MatchStep::SelectPlayers;
    Ok(())
}
