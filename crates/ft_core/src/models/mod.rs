//! Domain data: players, squads, match events and result snapshots.

pub mod events;
pub mod player;
pub mod report;
pub mod roster;

pub use events::{EventKind, MatchEvent, MatchId, TeamSide};
pub use player::{Player, PlayerRole};
pub use report::{MatchOutcome, MatchReport, StandingsRow, TournamentReport};
pub use roster::{Roster, STARTING_LIMIT};
