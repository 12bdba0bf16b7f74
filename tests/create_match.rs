//! Integration tests for the match-creation wizard: selection, captains,
//! team generation, and reshuffling.

use cricket_match_web::{
    back_to_captains, back_to_selection, build_teams, change_role, confirm_selection,
    create_player, flip, generate_teams, reshuffle_teams, set_captain_a, set_captain_b,
    toggle_player, toggle_select_all, GeneratedTeams, MatchError, MatchSession, MatchStep,
    Player, PlayerId, PlayerRole, TossResult,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn roster_of(names: &[&str]) -> Vec<Player> {
    names.iter().map(|n| Player::new(*n, None)).collect()
}

/// Session with every roster player selected and the first two as captains,
/// already advanced to the captain step.
fn session_ready(roster: &[Player]) -> MatchSession {
    let mut s = MatchSession::new();
    s.selected_player_ids = roster.iter().map(|p| p.id).collect();
    confirm_selection(&mut s).unwrap();
    set_captain_a(&mut s, Some(roster[0].id)).unwrap();
    set_captain_b(&mut s, Some(roster[1].id)).unwrap();
    s
}

fn all_ids(t: &GeneratedTeams) -> Vec<PlayerId> {
    t.team_a
        .iter()
        .chain(t.team_b.iter())
        .chain(t.common_player.iter())
        .map(|p| p.id)
        .collect()
}

#[test]
fn advancing_requires_two_selected_players() {
    let roster = roster_of(&["Alice", "Bob"]);
    let mut s = MatchSession::new();
    assert_eq!(
        confirm_selection(&mut s),
        Err(MatchError::NotEnoughPlayersSelected)
    );
    toggle_player(&mut s, &roster, roster[0].id).unwrap();
    assert_eq!(
        confirm_selection(&mut s),
        Err(MatchError::NotEnoughPlayersSelected)
    );
    toggle_player(&mut s, &roster, roster[1].id).unwrap();
    confirm_selection(&mut s).unwrap();
    assert_eq!(s.step, MatchStep::SelectCaptains);
    // Forward transition is only defined from the selection step.
    assert_eq!(confirm_selection(&mut s), Err(MatchError::InvalidStep));
}

#[test]
fn deselecting_a_captain_clears_the_slot_and_membership() {
    let roster = roster_of(&["Alice", "Bob", "Carol"]);
    let mut s = MatchSession::new();
    for p in &roster {
        toggle_player(&mut s, &roster, p.id).unwrap();
    }
    confirm_selection(&mut s).unwrap();
    set_captain_a(&mut s, Some(roster[0].id)).unwrap();

    toggle_player(&mut s, &roster, roster[0].id).unwrap();
    assert_eq!(s.captain_a_id, None);
    assert!(!s.selected_player_ids.contains(&roster[0].id));
}

#[test]
fn deselect_all_clears_both_captains() {
    let roster = roster_of(&["Alice", "Bob", "Carol"]);
    let mut s = MatchSession::new();
    toggle_select_all(&mut s, &roster);
    assert_eq!(s.selected_player_ids.len(), 3);
    confirm_selection(&mut s).unwrap();
    set_captain_a(&mut s, Some(roster[0].id)).unwrap();
    set_captain_b(&mut s, Some(roster[1].id)).unwrap();

    toggle_select_all(&mut s, &roster);
    assert!(s.selected_player_ids.is_empty());
    assert_eq!(s.captain_a_id, None);
    assert_eq!(s.captain_b_id, None);
}

#[test]
fn captains_must_be_selected_and_distinct() {
    let roster = roster_of(&["Alice", "Bob", "Carol"]);
    let mut s = MatchSession::new();
    toggle_player(&mut s, &roster, roster[0].id).unwrap();
    toggle_player(&mut s, &roster, roster[1].id).unwrap();
    confirm_selection(&mut s).unwrap();

    assert_eq!(
        set_captain_a(&mut s, Some(roster[2].id)),
        Err(MatchError::PlayerNotSelected(roster[2].id))
    );
    set_captain_a(&mut s, Some(roster[0].id)).unwrap();
    assert_eq!(
        set_captain_b(&mut s, Some(roster[0].id)),
        Err(MatchError::SameCaptain)
    );
    set_captain_b(&mut s, Some(roster[1].id)).unwrap();
    // Clearing a slot is always allowed.
    set_captain_a(&mut s, None).unwrap();
    assert_eq!(s.captain_a_id, None);
}

#[test]
fn generation_requires_both_captains() {
    let roster = roster_of(&["Alice", "Bob", "Carol"]);
    let mut s = MatchSession::new();
    toggle_select_all(&mut s, &roster);
    confirm_selection(&mut s).unwrap();
    set_captain_a(&mut s, Some(roster[0].id)).unwrap();
    assert_eq!(
        generate_teams(&mut s, &roster, &mut StdRng::seed_from_u64(1)),
        Err(MatchError::MissingCaptain)
    );
}

#[test]
fn four_players_split_evenly_with_no_common_player() {
    let roster = roster_of(&["Alice", "Bob", "Carol", "Dave"]);
    let mut s = session_ready(&roster);
    generate_teams(&mut s, &roster, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(s.step, MatchStep::ViewTeams);

    let t = s.last_generated_teams.as_ref().unwrap();
    assert_eq!(t.team_a.len(), 2);
    assert_eq!(t.team_b.len(), 2);
    assert!(t.common_player.is_none());
    // Captains at position 0 of their own team.
    assert_eq!(t.team_a[0].id, roster[0].id);
    assert_eq!(t.team_b[0].id, roster[1].id);
    // Carol and Dave land on opposite sides.
    let rest: HashSet<PlayerId> = [t.team_a[1].id, t.team_b[1].id].into_iter().collect();
    assert_eq!(
        rest,
        [roster[2].id, roster[3].id].into_iter().collect::<HashSet<_>>()
    );
}

#[test]
fn odd_pool_produces_exactly_one_common_player() {
    let roster = roster_of(&["Alice", "Bob", "Carol", "Dave", "Eve"]);
    let mut s = session_ready(&roster);
    generate_teams(&mut s, &roster, &mut StdRng::seed_from_u64(7)).unwrap();

    let t = s.last_generated_teams.as_ref().unwrap();
    assert!(t.common_player.is_some());
    // Assignable pool of 3: one common, 4 players assigned (captains included).
    assert_eq!(t.assigned_count(), 4);
    assert_eq!(t.team_a.len(), t.team_b.len());
}

#[test]
fn every_selected_player_appears_exactly_once() {
    let roster = roster_of(&["A", "B", "C", "D", "E", "F", "G"]);
    let mut s = session_ready(&roster);
    generate_teams(&mut s, &roster, &mut StdRng::seed_from_u64(3)).unwrap();

    let t = s.last_generated_teams.as_ref().unwrap();
    let ids = all_ids(t);
    let unique: HashSet<PlayerId> = ids.iter().copied().collect();
    assert_eq!(ids.len(), roster.len());
    assert_eq!(unique.len(), roster.len());
    // Neither captain shows up on the opposing side or as common.
    assert!(!t.team_b.iter().any(|p| p.id == roster[0].id));
    assert!(!t.team_a.iter().any(|p| p.id == roster[1].id));
    assert_ne!(t.common_player.as_ref().map(|p| p.id), Some(roster[0].id));
    assert_ne!(t.common_player.as_ref().map(|p| p.id), Some(roster[1].id));
}

#[test]
fn roles_are_balanced_across_sides() {
    let mut roster = roster_of(&["CapA", "CapB"]);
    for i in 0..4 {
        roster.push(Player::new(format!("Bat{i}"), Some(PlayerRole::Batsman)));
    }
    for i in 0..4 {
        roster.push(Player::new(format!("Bowl{i}"), Some(PlayerRole::Bowler)));
    }
    for i in 0..2 {
        roster.push(Player::new(format!("All{i}"), Some(PlayerRole::AllRounder)));
    }
    let mut s = session_ready(&roster);
    generate_teams(&mut s, &roster, &mut StdRng::seed_from_u64(11)).unwrap();

    let t = s.last_generated_teams.as_ref().unwrap();
    let count = |team: &[Player], role: PlayerRole| {
        team.iter().filter(|p| p.role == Some(role)).count()
    };
    // Even-sized role groups split exactly in half.
    assert_eq!(count(&t.team_a, PlayerRole::Batsman), 2);
    assert_eq!(count(&t.team_b, PlayerRole::Batsman), 2);
    assert_eq!(count(&t.team_a, PlayerRole::Bowler), 2);
    assert_eq!(count(&t.team_b, PlayerRole::Bowler), 2);
    assert_eq!(count(&t.team_a, PlayerRole::AllRounder), 1);
    assert_eq!(count(&t.team_b, PlayerRole::AllRounder), 1);
}

#[test]
fn seeded_generation_is_deterministic() {
    let roster = roster_of(&["A", "B", "C", "D", "E", "F", "G", "H"]);
    let selected: HashSet<PlayerId> = roster.iter().map(|p| p.id).collect();

    let first = build_teams(
        &roster,
        &selected,
        roster[0].id,
        roster[1].id,
        &mut StdRng::seed_from_u64(42),
    );
    let second = build_teams(
        &roster,
        &selected,
        roster[0].id,
        roster[1].id,
        &mut StdRng::seed_from_u64(42),
    );
    assert_eq!(first.team_a, second.team_a);
    assert_eq!(first.team_b, second.team_b);
    assert_eq!(first.common_player, second.common_player);
}

#[test]
fn unresolved_captain_degrades_to_none_without_failing() {
    let roster = roster_of(&["Alice", "Bob", "Carol"]);
    let selected: HashSet<PlayerId> = roster.iter().map(|p| p.id).collect();
    let ghost = uuid::Uuid::new_v4();

    let t = build_teams(&roster, &selected, ghost, roster[0].id, &mut StdRng::seed_from_u64(1));
    assert!(t.captain_a.is_none());
    assert_eq!(t.captain_b.as_ref().unwrap().id, roster[0].id);
    // No captain to prepend on side A; the side still exists.
    assert!(t.team_a.iter().all(|p| p.id != ghost));
}

#[test]
fn empty_assignable_pool_leaves_captains_alone() {
    let roster = roster_of(&["Alice", "Bob"]);
    let mut s = session_ready(&roster);
    generate_teams(&mut s, &roster, &mut StdRng::seed_from_u64(5)).unwrap();

    let t = s.last_generated_teams.as_ref().unwrap();
    assert_eq!(t.team_a.len(), 1);
    assert_eq!(t.team_b.len(), 1);
    assert!(t.common_player.is_none());
}

#[test]
fn reshuffle_is_only_available_while_viewing_teams() {
    let roster = roster_of(&["A", "B", "C", "D", "E"]);
    let mut s = MatchSession::new();
    toggle_select_all(&mut s, &roster);
    let mut rng = StdRng::seed_from_u64(9);
    assert_eq!(
        reshuffle_teams(&mut s, &roster, &mut rng),
        Err(MatchError::InvalidStep)
    );

    confirm_selection(&mut s).unwrap();
    set_captain_a(&mut s, Some(roster[0].id)).unwrap();
    set_captain_b(&mut s, Some(roster[1].id)).unwrap();
    generate_teams(&mut s, &roster, &mut rng).unwrap();

    reshuffle_teams(&mut s, &roster, &mut rng).unwrap();
    assert_eq!(s.step, MatchStep::ViewTeams);
    let t = s.last_generated_teams.as_ref().unwrap();
    // Structural invariants hold for the new draw.
    assert_eq!(t.team_a.len(), t.team_b.len());
    assert_eq!(all_ids(t).len(), roster.len());
}

#[test]
fn backward_navigation_keeps_downstream_state() {
    let roster = roster_of(&["A", "B", "C", "D"]);
    let mut s = session_ready(&roster);
    generate_teams(&mut s, &roster, &mut StdRng::seed_from_u64(2)).unwrap();

    back_to_captains(&mut s).unwrap();
    assert_eq!(s.step, MatchStep::SelectCaptains);
    assert!(s.last_generated_teams.is_some());
    assert_eq!(s.captain_a_id, Some(roster[0].id));

    back_to_selection(&mut s).unwrap();
    assert_eq!(s.step, MatchStep::SelectPlayers);
    assert_eq!(s.captain_b_id, Some(roster[1].id));
    assert!(s.last_generated_teams.is_some());

    // No further back step exists.
    assert_eq!(back_to_selection(&mut s), Err(MatchError::InvalidStep));
}

#[test]
fn deleting_a_captain_scrubs_the_session() {
    let roster = roster_of(&["Alice", "Bob", "Carol"]);
    let mut s = MatchSession::new();
    toggle_select_all(&mut s, &roster);
    confirm_selection(&mut s).unwrap();
    set_captain_a(&mut s, Some(roster[0].id)).unwrap();

    // Roster deletion path: the session scrub is one update.
    s.remove_player(roster[0].id);
    assert_eq!(s.captain_a_id, None);
    assert!(!s.selected_player_ids.contains(&roster[0].id));
    assert_eq!(s.selected_player_ids.len(), 2);
}

#[test]
fn player_names_are_validated_at_entry() {
    let mut roster = Vec::new();
    let p = create_player(&roster, "  MS Dhoni  ", Some(PlayerRole::Batsman)).unwrap();
    assert_eq!(p.full_name, "MS Dhoni");
    roster.push(p);

    assert_eq!(create_player(&roster, "   ", None), Err(MatchError::EmptyPlayerName));
    assert_eq!(
        create_player(&roster, "ms dhoni", None),
        Err(MatchError::DuplicatePlayerName)
    );
}

#[test]
fn change_role_replaces_only_the_role() {
    let roster = roster_of(&["Alice"]);
    let updated = change_role(&roster, roster[0].id, Some(PlayerRole::Bowler)).unwrap();
    assert_eq!(updated.id, roster[0].id);
    assert_eq!(updated.full_name, "Alice");
    assert_eq!(updated.role, Some(PlayerRole::Bowler));

    let ghost = uuid::Uuid::new_v4();
    assert_eq!(
        change_role(&roster, ghost, None),
        Err(MatchError::PlayerNotFound(ghost))
    );
}

#[test]
fn toss_produces_both_outcomes_over_many_flips() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut seen = HashSet::new();
    for _ in 0..64 {
        seen.insert(flip(&mut rng));
    }
    assert!(seen.contains(&TossResult::Heads));
    assert!(seen.contains(&TossResult::Tails));
}
