//! Data structures for the match organizer: players, wizard state, teams.

mod player;
mod session;
mod teams;

pub use player::{Player, PlayerId, PlayerRole};
pub use session::{MatchError, MatchSession, MatchStep};
pub use teams::{GeneratedTeams, TossResult};
