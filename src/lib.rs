//! Cricket match team organizer: library with models, wizard logic, and storage.

pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{
    back_to_captains, back_to_selection, build_teams, change_role, confirm_selection,
    create_player, flip, generate_teams, reshuffle_teams, set_captain_a, set_captain_b,
    toggle_player, toggle_select_all, TOSS_DELAY,
};
pub use models::{
    GeneratedTeams, MatchError, MatchSession, MatchStep, Player, PlayerId, PlayerRole, TossResult,
};
pub use storage::Storage;
