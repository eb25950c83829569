//! Error types for tournament and match setup.

use thiserror::Error;

/// Errors raised while assembling rosters or starting a tournament.
///
/// Simulation itself is infallible once it starts; everything here is a
/// setup problem the caller can fix and retry.
#[derive(Error, Debug)]
pub enum SimError {
    /// A player failed roster validation.
    #[error("invalid player: {reason}")]
    InvalidPlayer { reason: String },

    /// A match was requested for a team with nobody in the starting lineup.
    #[error("team '{team}' has no starting players")]
    EmptyLineup { team: String },

    /// A tournament needs at least two teams to schedule any fixture.
    #[error("tournament requires at least 2 teams, found {found}")]
    NotEnoughTeams { found: usize },

    /// An official or reporter pool the rotation draws from is empty.
    #[error("{pool} pool is empty")]
    EmptyPool { pool: &'static str },
}

pub type Result<T> = std::result::Result<T, SimError>;

// ============================================================================
// Tests
// ============================================================================
