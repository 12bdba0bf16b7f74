//! Match-creation business logic: roster ops, wizard steps, generation, toss.

mod captains;
mod generator;
mod roster;
mod selection;
mod toss;

pub use captains::{back_to_selection, set_captain_a, set_captain_b};
pub use generator::{back_to_captains, build_teams, generate_teams, reshuffle_teams};
pub use roster::{change_role, create_player};
pub use selection::{confirm_selection, toggle_player, toggle_select_all};
pub use toss::{flip, TOSS_DELAY};
