use super::random::RandomSource;

const RED_CARD_ODDS: u32 = 20;
const FREE_KICK_ODDS: u32 = 2;
const PENALTY_ODDS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    Yellow,
    Red,
}

/// A referee's complete ruling on one foul. Lives for one simulated
/// minute and is never persisted.
///
/// A card is always shown. `free_kick` and `penalty` are mutually
/// exclusive; both can be false when the referee waves play on.
#[derive(Debug, Clone, PartialEq)]
pub struct Foul {
    pub player: String,
    pub team: String,
    pub card: CardType,
    pub free_kick: bool,
    pub penalty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Referee {
    pub name: String,
}

impl Referee {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Rule on a foul by the named player.
    ///
    /// Draw order is fixed: card first (1-in-20 red, otherwise yellow),
    /// then a 1-in-2 free kick, and only when no free kick was given a
    /// 1-in-2 penalty.
    pub fn adjudicate(&self, player: &str, team: &str, random: &mut dyn RandomSource) -> Foul {
        let card = if random.chance(RED_CARD_ODDS) {
            CardType::Red
        } else {
            CardType::Yellow
        };
        let free_kick = random.chance(FREE_KICK_ODDS);
        let penalty = !free_kick && random.chance(PENALTY_ODDS);

        log::debug!(
            "referee {} rules on {} ({}): {:?} card, free kick {}, penalty {}",
            self.name,
            player,
            team,
            card,
            free_kick,
            penalty
        );

        Foul {
            player: player.to_string(),
            team: team.to_string(),
            card,
            free_kick,
            penalty,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
