//! Test doubles shared across engine and tournament tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::models::{MatchId, Player, PlayerRole, Roster};

use super::broadcast::MatchObserver;
use super::random::RandomSource;

/// Replays a fixed list of draws, panicking as soon as the script and the
/// code under test disagree about draw count or bounds.
pub(crate) struct ScriptedSource {
    draws: VecDeque<u32>,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_below(&mut self, bound: u32) -> u32 {
        let value = self.draws.pop_front().expect("draw script exhausted");
        assert!(
            value < bound,
            "scripted draw {} does not fit 0..{}",
            value,
            bound
        );
        value
    }
}

/// Collects every delivered message, in order, with its source pairing.
#[derive(Default)]
pub(crate) struct RecordingObserver {
    entries: Mutex<Vec<(String, String)>>,
}

impl RecordingObserver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

impl MatchObserver for RecordingObserver {
    fn receive(&self, source: &MatchId, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((source.to_string(), message.to_string()));
    }
}

/// Roster with the given players added in order.
pub(crate) fn roster_of(team: &str, players: &[(&str, u8, PlayerRole)]) -> Roster {
    let mut roster = Roster::new(team);
    for (name, shirt, role) in players {
        roster
            .add(Player::new(*name, *shirt, *role))
            .expect("valid test player");
    }
    roster
}

/// The smallest useful squad: one forward, one keeper, no bench.
///
/// With a single eligible forward per side, forward selection consumes no
/// permutation draws, which keeps draw scripts short.
pub(crate) fn duel_roster(team: &str, forward: &str, keeper: &str) -> Roster {
    roster_of(
        team,
        &[
            (forward, 9, PlayerRole::Forward),
            (keeper, 1, PlayerRole::Goalkeeper),
        ],
    )
}

/// A realistic squad: keeper plus ten forwards starting, a backup keeper
/// and two forwards on the bench.
pub(crate) fn full_squad(team: &str) -> Roster {
    let mut roster = Roster::new(team);
    roster
        .add(Player::new(
            format!("{} Keeper", team),
            1,
            PlayerRole::Goalkeeper,
        ))
        .expect("valid test player");
    for i in 0..10u8 {
        roster
            .add(Player::new(
                format!("{} Forward {}", team, i + 1),
                2 + i,
                PlayerRole::Forward,
            ))
            .expect("valid test player");
    }
    roster
        .add(Player::new(
            format!("{} Backup Keeper", team),
            12,
            PlayerRole::Goalkeeper,
        ))
        .expect("valid test player");
    for i in 0..2u8 {
        roster
            .add(Player::new(
                format!("{} Substitute {}", team, i + 1),
                13 + i,
                PlayerRole::Forward,
            ))
            .expect("valid test player");
    }
    roster
}
