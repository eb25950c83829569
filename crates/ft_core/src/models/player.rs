use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The two roles the simulation distinguishes.
///
/// Selection, set pieces and saves all branch on this, so the set is closed:
/// adding a role means touching the engine, not just the data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlayerRole {
    Forward,
    Goalkeeper,
}

impl PlayerRole {
    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, PlayerRole::Goalkeeper)
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, PlayerRole::Forward)
    }

    /// Role display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            PlayerRole::Forward => "Forward",
            PlayerRole::Goalkeeper => "Goalkeeper",
        }
    }

    /// Role abbreviation for compact display
    pub fn abbreviation(&self) -> &'static str {
        match self {
            PlayerRole::Forward => "FW",
            PlayerRole::Goalkeeper => "GK",
        }
    }
}

impl FromStr for PlayerRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FW" | "FWD" | "FORWARD" => Ok(PlayerRole::Forward),
            "GK" | "GOALKEEPER" => Ok(PlayerRole::Goalkeeper),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// A squad member.
///
/// `tally` counts whatever the role produces: goals for forwards, saves for
/// goalkeepers. Card state persists for as long as the player instance lives,
/// so across a whole tournament a sent-off player stays sent off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub name: String,
    pub shirt_number: u8,
    pub role: PlayerRole,

    #[serde(default)]
    pub tally: u32,

    #[serde(default)]
    pub yellow_cards: u8,

    #[serde(default)]
    pub has_red_card: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, shirt_number: u8, role: PlayerRole) -> Self {
        Self {
            name: name.into(),
            shirt_number,
            role,
            tally: 0,
            yellow_cards: 0,
            has_red_card: false,
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.role.is_goalkeeper()
    }

    pub fn is_forward(&self) -> bool {
        self.role.is_forward()
    }

    /// A sent-off player can never be selected for play again.
    pub fn is_available(&self) -> bool {
        !self.has_red_card
    }

    /// Credit one goal or save, depending on role.
    pub fn record_tally(&mut self) {
        self.tally += 1;
    }

    /// Book the player. The second yellow promotes to a sending-off.
    /// Returns the yellow count after booking.
    pub fn receive_yellow_card(&mut self) -> u8 {
        self.yellow_cards += 1;
        if self.yellow_cards >= 2 {
            self.has_red_card = true;
        }
        self.yellow_cards
    }

    /// Straight red: the player is out for the rest of the tournament.
    pub fn receive_red_card(&mut self) {
        self.has_red_card = true;
    }

    /// One line of commentary-style flavour for the player taking the ball.
    pub fn play_line(&self) -> String {
        match self.role {
            PlayerRole::Forward => {
                format!("Forward {} (#{}) attacks!", self.name, self.shirt_number)
            }
            PlayerRole::Goalkeeper => format!(
                "Goalkeeper {} (#{}) defends the goal!",
                self.name, self.shirt_number
            ),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
