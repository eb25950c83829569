use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::error::{Result, SimError};

/// Most players a starting lineup may hold.
pub const STARTING_LIMIT: usize = 11;

/// A team's squad, split into the starting lineup and the bench.
///
/// Placement is decided once, at `add` time: the first eleven go into the
/// lineup, except that only one goalkeeper may start. Everyone else waits on
/// the bench in arrival order. After that the only way players move between
/// the two lists is [`Roster::substitute`], which keeps the lineup size
/// constant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Roster {
    name: String,
    starting: Vec<Player>,
    substitutes: Vec<Player>,
}

impl Roster {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            starting: Vec::new(),
            substitutes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn starting(&self) -> &[Player] {
        &self.starting
    }

    pub fn substitutes(&self) -> &[Player] {
        &self.substitutes
    }

    /// Total squad size, lineup and bench together.
    pub fn len(&self) -> usize {
        self.starting.len() + self.substitutes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starting.is_empty() && self.substitutes.is_empty()
    }

    /// Register a player, placing them in the lineup or on the bench.
    ///
    /// Rejects blank names. A goalkeeper is benched when the lineup already
    /// has one, even if lineup slots remain free.
    pub fn add(&mut self, player: Player) -> Result<()> {
        if player.name.trim().is_empty() {
            return Err(SimError::InvalidPlayer {
                reason: format!(
                    "player name must not be blank (shirt {})",
                    player.shirt_number
                ),
            });
        }

        let lineup_full = self.starting.len() >= STARTING_LIMIT;
        let keeper_slot_taken = player.is_goalkeeper() && self.has_starting_keeper();
        if lineup_full || keeper_slot_taken {
            self.substitutes.push(player);
        } else {
            self.starting.push(player);
        }
        Ok(())
    }

    fn has_starting_keeper(&self) -> bool {
        self.starting.iter().any(|p| p.is_goalkeeper())
    }

    /// Swap the first bench player in for the starting player at `outgoing`.
    ///
    /// The replaced player joins the back of the bench, the replacement the
    /// back of the lineup, so lineup and bench sizes are unchanged. Returns
    /// `(incoming, outgoing)` names, or `None` when the index is not a
    /// starting slot or the bench is empty.
    pub fn substitute(&mut self, outgoing: usize) -> Option<(String, String)> {
        if outgoing >= self.starting.len() || self.substitutes.is_empty() {
            return None;
        }

        let replacement = self.substitutes.remove(0);
        let replaced = self.starting.remove(outgoing);
        let names = (replacement.name.clone(), replaced.name.clone());
        self.starting.push(replacement);
        self.substitutes.push(replaced);
        Some(names)
    }

    /// Index into the combined squad: lineup slots first, then the bench.
    pub fn get(&self, index: usize) -> Option<&Player> {
        if index < self.starting.len() {
            self.starting.get(index)
        } else {
            self.substitutes.get(index - self.starting.len())
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Player> {
        if index < self.starting.len() {
            self.starting.get_mut(index)
        } else {
            self.substitutes.get_mut(index - self.starting.len())
        }
    }

    /// Look a player up by name and shirt number, wherever they sit.
    /// Survives the reordering a substitution causes.
    pub fn find_player_mut(&mut self, name: &str, shirt_number: u8) -> Option<&mut Player> {
        self.starting
            .iter_mut()
            .chain(self.substitutes.iter_mut())
            .find(|p| p.name == name && p.shirt_number == shirt_number)
    }

    /// Everyone in the squad, lineup before bench.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.starting.iter().chain(self.substitutes.iter())
    }

    /// Sort lineup and bench independently with the same comparator.
    /// Players do not move between the two lists.
    pub fn sort_players_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&Player, &Player) -> std::cmp::Ordering,
    {
        self.starting.sort_by(&mut compare);
        self.substitutes.sort_by(&mut compare);
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Player;
    type IntoIter = std::iter::Chain<std::slice::Iter<'a, Player>, std::slice::Iter<'a, Player>>;

    fn into_iter(self) -> Self::IntoIter {
        self.starting.iter().chain(self.substitutes.iter())
    }
}

// ============================================================================
// Tests
// ============================================================================
