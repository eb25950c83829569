//! Minute-by-minute simulation of a single match.
//!
//! Each live minute runs the same script: flip a coin for the attacking
//! side, pick one of its available forwards at random, then see whether the
//! minute brings a foul, a goal, or a save. Fouls go to the referee and can
//! escalate through cards into forced substitutions; a side that cannot
//! replace a sent-off player forfeits the match on the spot.
//!
//! Every decision draws from the injected [`RandomSource`], in a fixed
//! order: attacking side, forward shuffle, foul check, then on a foul the
//! fouling side, its forward shuffle, card, free kick, penalty (only when
//! no free kick) and set-piece conversion, or on a clean minute the single
//! goal check. Seeded runs are therefore fully reproducible.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::error::{Result, SimError};
use crate::models::{
    EventKind, MatchEvent, MatchId, MatchOutcome, MatchReport, Roster, TeamSide,
};

use super::broadcast::{Broadcast, MatchObserver};
use super::phase::MatchPhase;
use super::random::RandomSource;
use super::referee::{CardType, Referee};

const HALF_DURATION_MINUTES: u8 = 45;
const OVERTIME_DURATION_MINUTES: u8 = 15;
const ATTACK_SPLIT: u32 = 2;
const FOUL_ODDS: u32 = 10;
const OPEN_PLAY_GOAL_ODDS: u32 = 5;
const SET_PIECE_GOAL_ODDS: u32 = 2;

/// Stable handle on a player. Substitutions reshuffle roster order, so a
/// lineup index captured early in a minute can go stale before the goal is
/// credited; name and shirt survive.
#[derive(Clone)]
struct PlayerRef {
    name: String,
    shirt_number: u8,
}

/// Simulates one match between two mutably borrowed squads.
///
/// The borrows mean everything that happens here (tallies, cards, roster
/// order) is visible to the caller afterwards, which is how tournament
/// state accumulates across fixtures.
pub struct MatchEngine<'a> {
    home: &'a mut Roster,
    away: &'a mut Roster,
    referee: &'a Referee,
    id: MatchId,
    phase: MatchPhase,
    minute: u8,
    score_home: u8,
    score_away: u8,
    forfeited_by: Option<TeamSide>,
    broadcast: Broadcast,
    events: Vec<MatchEvent>,
}

impl<'a> MatchEngine<'a> {
    /// Pair two squads under a referee. Both need somebody in the starting
    /// lineup; an empty lineup is a setup error, not a forfeit.
    pub fn new(home: &'a mut Roster, away: &'a mut Roster, referee: &'a Referee) -> Result<Self> {
        for roster in [&*home, &*away] {
            if roster.starting().is_empty() {
                return Err(SimError::EmptyLineup {
                    team: roster.name().to_string(),
                });
            }
        }

        let id = MatchId::new(home.name(), away.name());
        Ok(Self {
            home,
            away,
            referee,
            id,
            phase: MatchPhase::NotStarted,
            minute: 0,
            score_home: 0,
            score_away: 0,
            forfeited_by: None,
            broadcast: Broadcast::new(),
            events: Vec::new(),
        })
    }

    pub fn id(&self) -> &MatchId {
        &self.id
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn score(&self) -> (u8, u8) {
        (self.score_home, self.score_away)
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn subscribe(&mut self, observer: Arc<dyn MatchObserver>) {
        self.broadcast.subscribe(observer);
    }

    pub fn unsubscribe(&mut self, observer: &Arc<dyn MatchObserver>) {
        self.broadcast.unsubscribe(observer);
    }

    pub fn subscriber_count(&self) -> usize {
        self.broadcast.len()
    }

    /// Play the match to completion and return its report.
    ///
    /// Regulation is two 45-minute halves; a level score adds two 15-minute
    /// overtime periods, after which a level score stands as a draw. Calling
    /// this on an already terminal match plays nothing and returns the
    /// existing snapshot. Subscribers are dropped on every exit path.
    pub fn run(&mut self, random: &mut dyn RandomSource) -> MatchReport {
        if self.phase.is_terminal() {
            return self.report();
        }

        log::info!(
            "match {}: kicking off, referee {}",
            self.id,
            self.referee.name
        );
        self.advance(MatchPhase::FirstHalf);
        let message = format!("Kick-off: {}", self.id);
        self.publish(MatchEvent::new(self.minute, EventKind::KickOff), message);
        self.play_period(HALF_DURATION_MINUTES, random);

        if !self.phase.is_terminal() {
            self.advance(MatchPhase::HalfTimeBreak);
            let message = format!("Half-time: {}", self.score_line());
            self.publish(MatchEvent::new(self.minute, EventKind::HalfTime), message);
            self.advance(MatchPhase::SecondHalf);
            self.play_period(HALF_DURATION_MINUTES, random);
        }

        if !self.phase.is_terminal() && self.score_home == self.score_away {
            self.advance(MatchPhase::TiedAfterRegulation);
            log::info!(
                "match {}: level after regulation, overtime follows",
                self.id
            );
            self.advance(MatchPhase::Overtime1);
            let message = format!("Overtime: {}", self.score_line());
            self.publish(MatchEvent::new(self.minute, EventKind::KickOff), message);
            self.play_period(OVERTIME_DURATION_MINUTES, random);

            if !self.phase.is_terminal() {
                self.advance(MatchPhase::OvertimeBreak);
                let message = format!("Overtime break: {}", self.score_line());
                self.publish(MatchEvent::new(self.minute, EventKind::HalfTime), message);
                self.advance(MatchPhase::Overtime2);
                let message = "Second overtime under way".to_string();
                self.publish(MatchEvent::new(self.minute, EventKind::KickOff), message);
                self.play_period(OVERTIME_DURATION_MINUTES, random);
            }
        }

        if !self.phase.is_terminal() {
            self.advance(MatchPhase::Finished);
            let message = self.full_time_message();
            self.publish(MatchEvent::new(self.minute, EventKind::FullTime), message);
        }

        self.broadcast.clear();
        log::info!(
            "match {}: {} ({})",
            self.id,
            self.score_line(),
            self.phase.label()
        );
        self.report()
    }

    fn play_period(&mut self, duration: u8, random: &mut dyn RandomSource) {
        for _ in 0..duration {
            self.minute += 1;
            self.simulate_minute(random);
            if self.phase.is_terminal() {
                return;
            }
        }
    }

    fn simulate_minute(&mut self, random: &mut dyn RandomSource) {
        let attacking = pick_side(random);
        let Some((striker_idx, striker)) = self.pick_forward(attacking, random) else {
            log::trace!(
                "minute {}: {} have no forward to attack with",
                self.minute,
                self.roster(attacking).name()
            );
            return;
        };
        if let Some(player) = self.roster(attacking).get(striker_idx) {
            log::trace!("minute {}: {}", self.minute, player.play_line());
        }

        if random.chance(FOUL_ODDS) {
            self.resolve_foul(attacking, &striker, random);
        } else if random.chance(OPEN_PLAY_GOAL_ODDS) {
            self.credit_goal(attacking, &striker);
        } else {
            self.record_save(attacking.opponent());
        }
    }

    /// Shuffle the side's available forwards, bench included, and take the
    /// first. Returns the squad index (lineup before bench, valid until the
    /// roster next changes) and a stable reference.
    fn pick_forward(
        &self,
        side: TeamSide,
        random: &mut dyn RandomSource,
    ) -> Option<(usize, PlayerRef)> {
        let roster = self.roster(side);
        let candidates: Vec<usize> = roster
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_forward() && p.is_available())
            .map(|(index, _)| index)
            .collect();
        if candidates.is_empty() {
            return None;
        }

        let order = random.permutation(candidates.len());
        let index = candidates[order[0]];
        let player = roster.get(index)?;
        Some((
            index,
            PlayerRef {
                name: player.name.clone(),
                shirt_number: player.shirt_number,
            },
        ))
    }

    fn resolve_foul(
        &mut self,
        attacking: TeamSide,
        striker: &PlayerRef,
        random: &mut dyn RandomSource,
    ) {
        let fouling = pick_side(random);
        let Some((offender_idx, offender)) = self.pick_forward(fouling, random) else {
            log::trace!(
                "minute {}: whistle against {}, but nobody is on to blame",
                self.minute,
                self.roster(fouling).name()
            );
            return;
        };
        let team = self.roster(fouling).name().to_string();

        let message = format!("Foul by {} ({})", offender.name, team);
        self.publish(
            MatchEvent::new(self.minute, EventKind::Foul)
                .with_side(fouling)
                .with_player(offender.name.clone()),
            message,
        );

        let ruling = self.referee.adjudicate(&offender.name, &team, random);

        let sent_off = match ruling.card {
            CardType::Red => {
                if let Some(player) = self.roster_mut(fouling).get_mut(offender_idx) {
                    player.receive_red_card();
                }
                let message = format!("Red card for {} ({})", offender.name, team);
                self.publish(
                    MatchEvent::new(self.minute, EventKind::RedCard)
                        .with_side(fouling)
                        .with_player(offender.name.clone()),
                    message,
                );
                true
            }
            CardType::Yellow => {
                let yellows = match self.roster_mut(fouling).get_mut(offender_idx) {
                    Some(player) => player.receive_yellow_card(),
                    None => return,
                };
                let message = format!("Yellow card for {} ({})", offender.name, team);
                self.publish(
                    MatchEvent::new(self.minute, EventKind::YellowCard)
                        .with_side(fouling)
                        .with_player(offender.name.clone()),
                    message,
                );
                if yellows >= 2 {
                    let message =
                        format!("Second yellow, red card: {} ({})", offender.name, team);
                    self.publish(
                        MatchEvent::new(self.minute, EventKind::RedCard)
                            .with_side(fouling)
                            .with_player(offender.name.clone()),
                        message,
                    );
                    true
                } else {
                    false
                }
            }
        };

        if sent_off && !self.replace_sent_off(fouling, offender_idx) {
            return;
        }

        if ruling.free_kick || ruling.penalty {
            self.resolve_set_piece(attacking, fouling, striker, ruling.free_kick, random);
        }
    }

    /// Swap a replacement in for a sent-off player. When no swap is
    /// possible, because the bench is empty or the offender never held a
    /// lineup slot, the side forfeits and the match ends here.
    fn replace_sent_off(&mut self, side: TeamSide, outgoing: usize) -> bool {
        match self.roster_mut(side).substitute(outgoing) {
            Some((incoming, replaced)) => {
                let team = self.roster(side).name().to_string();
                log::debug!(
                    "minute {}: {} send {} on for {}",
                    self.minute,
                    team,
                    incoming,
                    replaced
                );
                let message = format!("Substitution for {}: {} on for {}", team, incoming, replaced);
                self.publish(
                    MatchEvent::new(self.minute, EventKind::Substitution)
                        .with_side(side)
                        .with_player(incoming),
                    message,
                );
                true
            }
            None => {
                self.declare_technical_defeat(side);
                false
            }
        }
    }

    /// The set piece favours the minute's attacking side: its selected
    /// forward either converts or is denied by the defence.
    fn resolve_set_piece(
        &mut self,
        attacking: TeamSide,
        fouling: TeamSide,
        striker: &PlayerRef,
        free_kick: bool,
        random: &mut dyn RandomSource,
    ) {
        let (kind, label) = if free_kick {
            (EventKind::FreeKick, "Free kick")
        } else {
            (EventKind::Penalty, "Penalty")
        };
        let message = format!("{} against {}", label, self.roster(fouling).name());
        self.publish(
            MatchEvent::new(self.minute, kind).with_side(fouling),
            message,
        );

        if random.chance(SET_PIECE_GOAL_ODDS) {
            self.credit_goal(attacking, striker);
        } else {
            let defending = attacking.opponent();
            let message = format!(
                "The attempt is blocked by {}",
                self.roster(defending).name()
            );
            self.publish(
                MatchEvent::new(self.minute, EventKind::ShotBlocked).with_side(defending),
                message,
            );
        }
    }

    fn credit_goal(&mut self, side: TeamSide, scorer: &PlayerRef) {
        match side {
            TeamSide::Home => self.score_home += 1,
            TeamSide::Away => self.score_away += 1,
        }
        if let Some(player) = self
            .roster_mut(side)
            .find_player_mut(&scorer.name, scorer.shirt_number)
        {
            player.record_tally();
        }
        let message = format!(
            "Goal for {}: {} ({})",
            self.roster(side).name(),
            scorer.name,
            self.score_line()
        );
        self.publish(
            MatchEvent::new(self.minute, EventKind::Goal)
                .with_side(side)
                .with_player(scorer.name.clone()),
            message,
        );
    }

    fn record_save(&mut self, defending: TeamSide) {
        let Some(keeper_idx) = self.defending_keeper(defending) else {
            return;
        };
        let keeper_name = match self.roster_mut(defending).get_mut(keeper_idx) {
            Some(keeper) => {
                keeper.record_tally();
                keeper.name.clone()
            }
            None => return,
        };
        let message = format!(
            "Save by {} ({})",
            keeper_name,
            self.roster(defending).name()
        );
        self.publish(
            MatchEvent::new(self.minute, EventKind::Save)
                .with_side(defending)
                .with_player(keeper_name),
            message,
        );
    }

    /// The defending side's first available keeper, lineup before bench.
    fn defending_keeper(&self, side: TeamSide) -> Option<usize> {
        self.roster(side)
            .iter()
            .position(|p| p.is_goalkeeper() && p.is_available())
    }

    /// Forfeit: the offending side loses 1:0 and the match ends here. The
    /// forfeit event is the last one; no full-time event follows.
    fn declare_technical_defeat(&mut self, offender: TeamSide) {
        match offender {
            TeamSide::Home => {
                self.score_home = 0;
                self.score_away = 1;
            }
            TeamSide::Away => {
                self.score_home = 1;
                self.score_away = 0;
            }
        }
        self.forfeited_by = Some(offender);

        let team = self.roster(offender).name().to_string();
        log::info!("match {}: technical defeat for {}", self.id, team);
        let message = format!(
            "Technical defeat for {}, no replacement available ({})",
            team,
            self.score_line()
        );
        self.publish(
            MatchEvent::new(self.minute, EventKind::TechnicalDefeat).with_side(offender),
            message,
        );
        self.advance(MatchPhase::TechnicalDefeat);
    }

    /// Record an event and deliver its message to every subscriber.
    fn publish(&mut self, event: MatchEvent, message: String) {
        self.events.push(event);
        self.broadcast.deliver(&self.id, &message);
    }

    fn advance(&mut self, next: MatchPhase) {
        log::debug!(
            "match {}: {} -> {}",
            self.id,
            self.phase.label(),
            next.label()
        );
        self.phase = next;
    }

    fn roster(&self, side: TeamSide) -> &Roster {
        match side {
            TeamSide::Home => &*self.home,
            TeamSide::Away => &*self.away,
        }
    }

    fn roster_mut(&mut self, side: TeamSide) -> &mut Roster {
        match side {
            TeamSide::Home => &mut *self.home,
            TeamSide::Away => &mut *self.away,
        }
    }

    fn score_line(&self) -> String {
        format!(
            "{} {} : {} {}",
            self.id.home, self.score_home, self.score_away, self.id.away
        )
    }

    fn full_time_message(&self) -> String {
        match self.score_home.cmp(&self.score_away) {
            Ordering::Greater => format!(
                "Full time: {} win {}:{}",
                self.id.home, self.score_home, self.score_away
            ),
            Ordering::Less => format!(
                "Full time: {} win {}:{}",
                self.id.away, self.score_away, self.score_home
            ),
            Ordering::Equal => format!("Full time: {}, a draw", self.score_line()),
        }
    }

    fn report(&self) -> MatchReport {
        let outcome = match self.forfeited_by {
            Some(offender) => MatchOutcome::TechnicalDefeat { offender },
            None => match self.score_home.cmp(&self.score_away) {
                Ordering::Greater => MatchOutcome::Win {
                    side: TeamSide::Home,
                },
                Ordering::Less => MatchOutcome::Win {
                    side: TeamSide::Away,
                },
                Ordering::Equal => MatchOutcome::Draw,
            },
        };

        MatchReport {
            home: self.id.home.clone(),
            away: self.id.away.clone(),
            score_home: self.score_home,
            score_away: self.score_away,
            outcome,
            events: self.events.clone(),
        }
    }
}

fn pick_side(random: &mut dyn RandomSource) -> TeamSide {
    if random.chance(ATTACK_SPLIT) {
        TeamSide::Home
    } else {
        TeamSide::Away
    }
}

// ============================================================================
// Tests
// ============================================================================
