//! Tournament setup files: the squads and staff a run starts from.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use ft_core::{Player, PlayerRole, Roster};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentSetup {
    pub teams: Vec<TeamSetup>,
    pub referees: Vec<String>,
    pub commentators: Vec<String>,
    pub journalists: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSetup {
    pub name: String,
    pub players: Vec<PlayerSetup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub name: String,
    pub shirt_number: u8,
    pub role: PlayerRole,
}

impl TournamentSetup {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading setup file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing setup file {}", path.display()))
    }

    /// Squads built in declaration order; the eleven-player lineup rule
    /// decides who starts and who sits.
    pub fn build_rosters(&self) -> ft_core::Result<Vec<Roster>> {
        self.teams
            .iter()
            .map(|team| {
                let mut roster = Roster::new(team.name.as_str());
                for player in &team.players {
                    roster.add(Player::new(
                        player.name.as_str(),
                        player.shirt_number,
                        player.role,
                    ))?;
                }
                Ok(roster)
            })
            .collect()
    }

    /// The built-in exhibition: three squads of fourteen, two referees and
    /// a small press corps. Players are listed keeper first, so each squad
    /// starts a keeper and ten forwards with three substitutes waiting.
    pub fn sample() -> Self {
        fn player(name: &str, shirt_number: u8, role: PlayerRole) -> PlayerSetup {
            PlayerSetup {
                name: name.to_string(),
                shirt_number,
                role,
            }
        }

        fn squad(
            team: &str,
            keeper: (&str, u8),
            backup: (&str, u8),
            forwards: [(&str, u8); 12],
        ) -> TeamSetup {
            let mut players = vec![player(keeper.0, keeper.1, PlayerRole::Goalkeeper)];
            players.extend(
                forwards[..10]
                    .iter()
                    .map(|(name, shirt)| player(name, *shirt, PlayerRole::Forward)),
            );
            players.push(player(backup.0, backup.1, PlayerRole::Goalkeeper));
            players.extend(
                forwards[10..]
                    .iter()
                    .map(|(name, shirt)| player(name, *shirt, PlayerRole::Forward)),
            );
            TeamSetup {
                name: team.to_string(),
                players,
            }
        }

        TournamentSetup {
            teams: vec![
                squad(
                    "Harbor Athletic",
                    ("Anton Voss", 1),
                    ("Ivo Malek", 13),
                    [
                        ("Dan Mercer", 9),
                        ("Luca Reinholt", 10),
                        ("Emil Varga", 11),
                        ("Jonas Feld", 7),
                        ("Noah Lindqvist", 8),
                        ("Marco Deluca", 17),
                        ("Oliver Crane", 14),
                        ("Felix Brandt", 19),
                        ("Sami Okafor", 21),
                        ("Brook Tanner", 23),
                        ("Rune Dahl", 27),
                        ("Cole Winters", 29),
                    ],
                ),
                squad(
                    "Ridgeline Rovers",
                    ("Pavel Brik", 1),
                    ("Stellan Marsh", 13),
                    [
                        ("Rio Calder", 9),
                        ("Mats Keller", 10),
                        ("Owen Blackwell", 11),
                        ("Tariq Mansour", 7),
                        ("Leon Krause", 8),
                        ("Dario Venn", 17),
                        ("Kofi Asante", 14),
                        ("Viktor Hale", 19),
                        ("Juno Maddox", 21),
                        ("Ezra Thorn", 23),
                        ("Arlo Quint", 27),
                        ("Idris Vale", 29),
                    ],
                ),
                squad(
                    "Veldt United",
                    ("Iker Munoz", 1),
                    ("Teodor Hask", 13),
                    [
                        ("Abel Fontaine", 9),
                        ("Casper Rhodes", 10),
                        ("Milan Petric", 11),
                        ("Yusuf Demir", 7),
                        ("Anders Lyng", 8),
                        ("Bruno Sala", 17),
                        ("Jalen Cross", 14),
                        ("Pietro Gallo", 19),
                        ("Soren Vik", 21),
                        ("Max Arden", 23),
                        ("Ruben Falk", 27),
                        ("Elia Moretti", 29),
                    ],
                ),
            ],
            referees: vec!["Kim Aldana".to_string(), "Sol Ferreira".to_string()],
            commentators: vec!["Ray Donner".to_string(), "Gus Marek".to_string()],
            journalists: vec!["Ines Vidal".to_string(), "Petra Kovac".to_string()],
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
