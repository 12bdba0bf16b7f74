//! Team generation: split the selected pool into two role-balanced sides.
//!
//! Policy: captains are pulled out first, the remaining pool is grouped by
//! role in a fixed priority order (Batsman, Bowler, All-rounder, unranked),
//! each group is shuffled independently, and players are dealt to the side
//! with the smaller count so any residual imbalance lands in the unranked
//! group. An odd pool leaves exactly one common player.

use crate::models::{
    GeneratedTeams, MatchError, MatchSession, MatchStep, Player, PlayerId, PlayerRole,
};
use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;

/// Role buckets in assignment priority order; `None` (unranked) goes last so
/// the leftover always comes from the lowest-priority group.
const ROLE_ORDER: [Option<PlayerRole>; 4] = [
    Some(PlayerRole::Batsman),
    Some(PlayerRole::Bowler),
    Some(PlayerRole::AllRounder),
    None,
];

/// Build a team split from the roster, the selected pool, and the two captain
/// ids. Pure apart from the RNG: callers inject the random source so tests can
/// seed it and assert exact output.
///
/// A captain id that no longer resolves against the roster yields a `None`
/// captain field rather than a failure; the snapshot is still returned and the
/// caller surfaces the inconsistency.
pub fn build_teams(
    roster: &[Player],
    selected_ids: &std::collections::HashSet<PlayerId>,
    captain_a_id: PlayerId,
    captain_b_id: PlayerId,
    rng: &mut impl Rng,
) -> GeneratedTeams {
    // Assignable pool: selected players minus the two captains.
    let pool: Vec<&Player> = roster
        .iter()
        .filter(|p| {
            selected_ids.contains(&p.id) && p.id != captain_a_id && p.id != captain_b_id
        })
        .collect();

    let mut team_a: Vec<Player> = Vec::new();
    let mut team_b: Vec<Player> = Vec::new();

    for role in ROLE_ORDER {
        let mut group: Vec<&Player> = pool.iter().copied().filter(|p| p.role == role).collect();
        group.shuffle(rng);
        for player in group {
            // Feed the smaller side; ties go to team A. Keeps |A| - |B| in
            // {0, 1} after every append.
            if team_a.len() <= team_b.len() {
                team_a.push(player.clone());
            } else {
                team_b.push(player.clone());
            }
        }
    }

    // Pool sizes can differ by at most 1; pop the last append from the larger
    // side so the two teams end up exactly equal.
    let common_player = if team_a.len() > team_b.len() {
        team_a.pop()
    } else if team_b.len() > team_a.len() {
        team_b.pop()
    } else {
        None
    };

    let captain_a = roster.iter().find(|p| p.id == captain_a_id).cloned();
    let captain_b = roster.iter().find(|p| p.id == captain_b_id).cloned();

    if let Some(cap) = &captain_a {
        team_a.insert(0, cap.clone());
    }
    if let Some(cap) = &captain_b {
        team_b.insert(0, cap.clone());
    }

    GeneratedTeams {
        team_a,
        team_b,
        captain_a,
        captain_b,
        common_player,
        generated_at: Utc::now(),
    }
}

/// Pull the validated captain ids out of the session, or say why generation
/// cannot run yet.
fn captain_ids(session: &MatchSession) -> Result<(PlayerId, PlayerId), MatchError> {
    let a = session.captain_a_id.ok_or(MatchError::MissingCaptain)?;
    let b = session.captain_b_id.ok_or(MatchError::MissingCaptain)?;
    if a == b {
        return Err(MatchError::SameCaptain);
    }
    Ok((a, b))
}

/// Forward transition select-captains -> view-teams: generate a fresh split
/// and store it as the session's last result.
pub fn generate_teams(
    session: &mut MatchSession,
    roster: &[Player],
    rng: &mut impl Rng,
) -> Result<(), MatchError> {
    if session.step != MatchStep::SelectCaptains {
        return Err(MatchError::InvalidStep);
    }
    let (a, b) = captain_ids(session)?;
    let teams = build_teams(roster, &session.selected_player_ids, a, b, rng);
    session.last_generated_teams = Some(teams);
    session.step = MatchStep::ViewTeams;
    Ok(())
}

/// Re-run generation with the same pool and captains, replacing the stored
/// snapshot in place. Only available while viewing teams.
pub fn reshuffle_teams(
    session: &mut MatchSession,
    roster: &[Player],
    rng: &mut impl Rng,
) -> Result<(), MatchError> {
    if session.step != MatchStep::ViewTeams {
        return Err(MatchError::InvalidStep);
    }
    let (a, b) = captain_ids(session)?;
    let teams = build_teams(roster, &session.selected_player_ids, a, b, rng);
    session.last_generated_teams = Some(teams);
    Ok(())
}

/// Backward transition view-teams -> select-captains. The last result stays
/// around until the next forward action replaces it.
pub fn back_to_captains(session: &mut MatchSession) -> Result<(), MatchError> {
    if session.step != MatchStep::ViewTeams {
        return Err(MatchError::InvalidStep);
    }
    session.step = MatchStep::SelectCaptains;
    Ok(())
}
