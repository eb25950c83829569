//! # ft_core - Seeded Football Tournament Simulation
//!
//! This library simulates a complete round-robin football tournament,
//! minute by minute, from a single RNG seed.
//!
//! ## Features
//! - Fully seeded simulation (same seed = same tournament)
//! - Minute-level match engine with cards, set pieces and substitutions
//! - Live observers for commentary and press diaries
//! - Round-robin scheduling with tie-break replays

pub mod engine;
pub mod error;
pub mod models;
pub mod reporting;
pub mod tournament;

// Re-export the match engine
pub use engine::{
    Broadcast, CardType, Foul, MatchEngine, MatchObserver, MatchPhase, RandomSource, Referee,
};
pub use error::{Result, SimError};

// Re-export core model types
pub use models::{
    EventKind, MatchEvent, MatchId, MatchOutcome, MatchReport, Player, PlayerRole, Roster,
    StandingsRow, TeamSide, TournamentReport, STARTING_LIMIT,
};

// Re-export reporting observers
pub use reporting::{Commentator, SportsJournalist};

// Re-export the tournament driver
pub use tournament::{Fixture, Tournament};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::random::seeded;
    use crate::engine::test_support::full_squad;
    use std::sync::Arc;

    #[test]
    fn test_full_tournament_run() {
        let teams: Vec<Roster> = ["Harbor Athletic", "Ridgeline Rovers", "Veldt United"]
            .iter()
            .map(|name| full_squad(name))
            .collect();
        let referees = vec![Referee::new("Kim Aldana"), Referee::new("Sol Ferreira")];

        let dir = tempfile::tempdir().unwrap();
        let journalist = Arc::new(SportsJournalist::new(
            "Ines Vidal",
            dir.path().join("press.log"),
        ));
        let commentators: Vec<Arc<dyn MatchObserver>> =
            vec![Arc::new(Commentator::new("Ray Donner"))];
        let journalists: Vec<Arc<dyn MatchObserver>> = vec![journalist.clone()];

        let mut tournament = Tournament::new(teams, referees, commentators, journalists);
        let report = tournament.run(&mut seeded(42)).unwrap();

        // Three teams: three opening fixtures plus any replays.
        assert_eq!(report.standings.len(), 3);
        assert_eq!(report.matches.len(), 3 + report.replays);

        let decisive = report
            .matches
            .iter()
            .filter(|m| m.score_home != m.score_away)
            .count() as u32;
        let drawn = report.matches.len() as u32 - decisive;
        let points: u32 = report.standings.iter().map(|row| row.points).sum();
        assert_eq!(points, 3 * decisive + 2 * drawn);

        // Scores agree with the event log, except when a match was
        // forfeited and the score forced.
        for m in &report.matches {
            if matches!(m.outcome, MatchOutcome::TechnicalDefeat { .. }) {
                continue;
            }
            let home_goals = m
                .events
                .iter()
                .filter(|e| e.kind == EventKind::Goal && e.side == Some(TeamSide::Home))
                .count() as u8;
            let away_goals = m
                .events
                .iter()
                .filter(|e| e.kind == EventKind::Goal && e.side == Some(TeamSide::Away))
                .count() as u8;
            assert_eq!((home_goals, away_goals), (m.score_home, m.score_away));
        }

        // One journalist pool member hears every match: one diary line
        // per event.
        let total_events: usize = report.matches.iter().map(|m| m.events.len()).sum();
        let diary = std::fs::read_to_string(journalist.path()).unwrap();
        assert_eq!(diary.lines().count(), total_events);
    }

    #[test]
    fn test_same_seed_same_tournament() {
        let play = || {
            let teams: Vec<Roster> = ["Harbor Athletic", "Ridgeline Rovers"]
                .iter()
                .map(|name| full_squad(name))
                .collect();
            let mut tournament = Tournament::new(
                teams,
                vec![Referee::new("Kim Aldana")],
                vec![Arc::new(Commentator::new("Ray Donner")) as Arc<dyn MatchObserver>],
                vec![Arc::new(Commentator::new("Gus Marek")) as Arc<dyn MatchObserver>],
            );
            tournament.run(&mut seeded(7)).unwrap()
        };
        assert_eq!(play(), play());
    }
}
