use serde::{Deserialize, Serialize};

use super::events::{MatchEvent, TeamSide};

/// How a match ended.
///
/// `Win` requires a strictly higher score. A technical defeat names the
/// side that could not continue; the score is forced to 1:0 against them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Win { side: TeamSide },
    Draw,
    TechnicalDefeat { offender: TeamSide },
}

/// Snapshot of one finished match: final score, outcome and the full
/// ordered event log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchReport {
    pub home: String,
    pub away: String,
    pub score_home: u8,
    pub score_away: u8,
    pub outcome: MatchOutcome,
    pub events: Vec<MatchEvent>,
}

impl MatchReport {
    pub fn team_name(&self, side: TeamSide) -> &str {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    /// Name of the winning team, if there is one.
    pub fn winner(&self) -> Option<&str> {
        match self.outcome {
            MatchOutcome::Win { side } => Some(self.team_name(side)),
            MatchOutcome::TechnicalDefeat { offender } => {
                Some(self.team_name(offender.opponent()))
            }
            MatchOutcome::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self.outcome, MatchOutcome::Draw)
    }
}

/// One line of the final table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandingsRow {
    pub team: String,
    pub played: u32,
    pub points: u32,
}

/// Everything a tournament run produces: the table, every match report
/// (replays included, in play order) and how many replays were needed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TournamentReport {
    pub standings: Vec<StandingsRow>,
    pub matches: Vec<MatchReport>,
    pub replays: usize,
}

impl TournamentReport {
    /// The table is sorted by points, so the champion heads it.
    pub fn champion(&self) -> Option<&StandingsRow> {
        self.standings.first()
    }
}

// ============================================================================
// Tests
// ============================================================================
