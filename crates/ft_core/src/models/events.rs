use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two participating teams an event belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn opponent(self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

/// Identifies a match by its pairing. Subscribers receive this with every
/// message so one observer can follow several matches at once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MatchId {
    pub home: String,
    pub away: String,
}

impl MatchId {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}

/// Everything the engine can report about a match minute.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    KickOff,
    HalfTime,
    FullTime,
    Goal,
    Save,
    Foul,
    YellowCard,
    RedCard,
    Substitution,
    FreeKick,
    Penalty,
    ShotBlocked,
    TechnicalDefeat,
}

/// One entry in a match's event log.
///
/// `minute` is absolute match time (1-45 first half, 46-90 second half,
/// 91-120 overtime); phase boundary events carry the minute they follow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEvent {
    pub minute: u8,

    #[serde(rename = "type")]
    pub kind: EventKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<TeamSide>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
}

impl MatchEvent {
    pub fn new(minute: u8, kind: EventKind) -> Self {
        Self {
            minute,
            kind,
            side: None,
            player: None,
        }
    }

    pub fn with_side(mut self, side: TeamSide) -> Self {
        self.side = Some(side);
        self
    }

    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = Some(player.into());
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn opponent_flips_sides() {
        assert_eq!(TeamSide::Home.opponent(), TeamSide::Away);
        assert_eq!(TeamSide::Away.opponent(), TeamSide::Home);
    }

    #[test]
    fn match_id_displays_as_pairing() {
        let id = MatchId::new("Harbor Athletic", "Ridgeline Rovers");
        assert_eq!(id.to_string(), "Harbor Athletic vs Ridgeline Rovers");
    }

    #[test]
    fn event_serializes_with_type_key() {
        let event = MatchEvent::new(17, EventKind::Goal)
            .with_side(TeamSide::Home)
            .with_player("Dan Mercer");
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({
                "minute": 17,
                "type": "goal",
                "side": "home",
                "player": "Dan Mercer",
            })
        );
    }

    #[test]
    fn bare_event_omits_empty_fields() {
        let event = MatchEvent::new(45, EventKind::HalfTime);
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value, json!({"minute": 45, "type": "half_time"}));
    }

    #[test]
    fn kind_names_are_snake_case() {
        assert_eq!(
            serde_json::to_string(&EventKind::TechnicalDefeat).unwrap(),
            "\"technical_defeat\""
        );
        assert_eq!(
            serde_json::to_string(&EventKind::FreeKick).unwrap(),
            "\"free_kick\""
        );
    }
}
