//! Round-robin tournament scheduling and scoring.
//!
//! Every pairing plays once (first-listed team at home), officials and
//! reporters rotate through their pools, and wins count three points to a
//! draw's one. After the full round, teams left sharing a points total
//! replay each other home and away in one tie-break round; the table is
//! then final, sorted by points with registration order breaking ties.

use std::cmp::{Ordering, Reverse};
use std::sync::Arc;

use crate::engine::{MatchEngine, MatchObserver, RandomSource, Referee};
use crate::error::{Result, SimError};
use crate::models::{MatchReport, Roster, StandingsRow, TournamentReport};

const WIN_POINTS: u32 = 3;
const DRAW_POINTS: u32 = 1;

/// One scheduled match: indices into the tournament's team list and its
/// three assignment pools. `replay` marks tie-break fixtures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub home: usize,
    pub away: usize,
    pub referee: usize,
    pub commentator: usize,
    pub journalist: usize,
    pub replay: bool,
}

/// Wrapping cursor over one pool. Each pool rotates independently, and the
/// cursor keeps its position from the opening round into the replays.
#[derive(Debug, Default)]
struct Rotation {
    next: usize,
}

impl Rotation {
    fn take(&mut self, len: usize) -> usize {
        let index = self.next % len;
        self.next += 1;
        index
    }
}

/// Owns the competing squads and drives them through a full round-robin.
///
/// Squads are mutated in place match after match, so cards and tallies
/// accumulate across the whole tournament: a player sent off in the first
/// fixture stays unavailable in every later one.
pub struct Tournament {
    teams: Vec<Roster>,
    referees: Vec<Referee>,
    commentators: Vec<Arc<dyn MatchObserver>>,
    journalists: Vec<Arc<dyn MatchObserver>>,
    points: Vec<u32>,
    played: Vec<u32>,
    fixtures: Vec<Fixture>,
    referee_rotation: Rotation,
    commentator_rotation: Rotation,
    journalist_rotation: Rotation,
}

impl Tournament {
    pub fn new(
        teams: Vec<Roster>,
        referees: Vec<Referee>,
        commentators: Vec<Arc<dyn MatchObserver>>,
        journalists: Vec<Arc<dyn MatchObserver>>,
    ) -> Self {
        let team_count = teams.len();
        Self {
            teams,
            referees,
            commentators,
            journalists,
            points: vec![0; team_count],
            played: vec![0; team_count],
            fixtures: Vec::new(),
            referee_rotation: Rotation::default(),
            commentator_rotation: Rotation::default(),
            journalist_rotation: Rotation::default(),
        }
    }

    pub fn teams(&self) -> &[Roster] {
        &self.teams
    }

    /// Fixtures scheduled so far, replays included once they exist.
    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// Current table: stable descending sort by points, so teams on equal
    /// points keep their registration order.
    pub fn standings(&self) -> Vec<StandingsRow> {
        let mut order: Vec<usize> = (0..self.teams.len()).collect();
        order.sort_by_key(|&index| Reverse(self.points[index]));
        order
            .into_iter()
            .map(|index| StandingsRow {
                team: self.teams[index].name().to_string(),
                played: self.played[index],
                points: self.points[index],
            })
            .collect()
    }

    /// Play the whole tournament: the opening round-robin, then one replay
    /// round among point-tied teams. A tournament is a single-use driver;
    /// run it once and read the report.
    pub fn run(&mut self, random: &mut dyn RandomSource) -> Result<TournamentReport> {
        self.validate()?;

        self.schedule_round_robin();
        log::info!(
            "tournament: {} teams, {} fixtures scheduled",
            self.teams.len(),
            self.fixtures.len()
        );

        let mut reports = Vec::new();
        self.play_pending(0, &mut reports, random)?;

        let tied = self.tied_teams();
        let replay_start = self.fixtures.len();
        self.schedule_replays(&tied);
        let replays = self.fixtures.len() - replay_start;
        if replays > 0 {
            log::info!(
                "tournament: {} point-tied teams, {} replays",
                tied.len(),
                replays
            );
            self.play_pending(replay_start, &mut reports, random)?;
        }

        Ok(TournamentReport {
            standings: self.standings(),
            matches: reports,
            replays,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.teams.len() < 2 {
            return Err(SimError::NotEnoughTeams {
                found: self.teams.len(),
            });
        }
        if self.referees.is_empty() {
            return Err(SimError::EmptyPool { pool: "referee" });
        }
        if self.commentators.is_empty() {
            return Err(SimError::EmptyPool { pool: "commentator" });
        }
        if self.journalists.is_empty() {
            return Err(SimError::EmptyPool { pool: "journalist" });
        }
        Ok(())
    }

    /// Every unordered pair once, the earlier-listed team at home:
    /// n(n-1)/2 fixtures.
    fn schedule_round_robin(&mut self) {
        for home in 0..self.teams.len() {
            for away in home + 1..self.teams.len() {
                self.schedule(home, away, false);
            }
        }
    }

    /// Teams sharing their points total with at least one other team. One
    /// flat set: ties at different totals all land in the same replay
    /// round.
    fn tied_teams(&self) -> Vec<usize> {
        (0..self.teams.len())
            .filter(|&index| {
                self.points
                    .iter()
                    .enumerate()
                    .any(|(other, points)| other != index && *points == self.points[index])
            })
            .collect()
    }

    /// Replays are ordered pairs: every tied team hosts every other tied
    /// team once, in team-list order.
    fn schedule_replays(&mut self, tied: &[usize]) {
        for &home in tied {
            for &away in tied {
                if home != away {
                    self.schedule(home, away, true);
                }
            }
        }
    }

    fn schedule(&mut self, home: usize, away: usize, replay: bool) {
        let fixture = Fixture {
            home,
            away,
            referee: self.referee_rotation.take(self.referees.len()),
            commentator: self.commentator_rotation.take(self.commentators.len()),
            journalist: self.journalist_rotation.take(self.journalists.len()),
            replay,
        };
        self.fixtures.push(fixture);
    }

    fn play_pending(
        &mut self,
        from: usize,
        reports: &mut Vec<MatchReport>,
        random: &mut dyn RandomSource,
    ) -> Result<()> {
        for number in from..self.fixtures.len() {
            let fixture = self.fixtures[number].clone();
            let report = self.play_fixture(number, &fixture, random)?;
            reports.push(report);
        }
        Ok(())
    }

    fn play_fixture(
        &mut self,
        number: usize,
        fixture: &Fixture,
        random: &mut dyn RandomSource,
    ) -> Result<MatchReport> {
        log::info!(
            "fixture {}: {} vs {}{}",
            number + 1,
            self.teams[fixture.home].name(),
            self.teams[fixture.away].name(),
            if fixture.replay { " (replay)" } else { "" }
        );

        let (home, away) = pair_mut(&mut self.teams, fixture.home, fixture.away);
        let referee = &self.referees[fixture.referee];
        let mut engine = MatchEngine::new(home, away, referee)?;
        engine.subscribe(self.commentators[fixture.commentator].clone());
        engine.subscribe(self.journalists[fixture.journalist].clone());
        let report = engine.run(random);

        self.apply_result(fixture, &report);
        Ok(report)
    }

    fn apply_result(&mut self, fixture: &Fixture, report: &MatchReport) {
        match report.score_home.cmp(&report.score_away) {
            Ordering::Greater => self.points[fixture.home] += WIN_POINTS,
            Ordering::Less => self.points[fixture.away] += WIN_POINTS,
            Ordering::Equal => {
                self.points[fixture.home] += DRAW_POINTS;
                self.points[fixture.away] += DRAW_POINTS;
            }
        }
        self.played[fixture.home] += 1;
        self.played[fixture.away] += 1;
    }
}

/// Disjoint mutable borrows of two team slots.
fn pair_mut(teams: &mut [Roster], first: usize, second: usize) -> (&mut Roster, &mut Roster) {
    debug_assert_ne!(first, second);
    if first < second {
        let (head, tail) = teams.split_at_mut(second);
        (&mut head[first], &mut tail[0])
    } else {
        let (head, tail) = teams.split_at_mut(first);
        (&mut tail[0], &mut head[second])
    }
}

// ============================================================================
// Tests
// ============================================================================
