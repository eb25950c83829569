//! Fulltime CLI
//!
//! Runs a seeded round-robin tournament from a JSON setup file and writes
//! the final table, the match reports and the press diaries to disk.

mod setup;

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::LevelFilter;

use ft_core::engine::random::seeded;
use ft_core::{
    Commentator, MatchObserver, Referee, Roster, SportsJournalist, Tournament, TournamentReport,
};

use setup::TournamentSetup;

#[derive(Parser)]
#[command(name = "ft_cli")]
#[command(about = "Run seeded football tournaments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a full tournament and write the reports
    Run {
        /// Tournament setup JSON (defaults to the built-in exhibition)
        #[arg(long)]
        setup: Option<PathBuf>,

        /// RNG seed; the same seed replays the same tournament
        #[arg(long, default_value = "20")]
        seed: u64,

        /// Output directory for reports and press diaries
        #[arg(long, default_value = "tournament_out")]
        out: PathBuf,
    },

    /// Write the built-in exhibition setup as an editable starting point
    Sample {
        /// Output JSON file path
        #[arg(long, default_value = "setup.json")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { setup, seed, out } => run_tournament(setup.as_deref(), seed, &out),
        Commands::Sample { out } => write_sample(&out),
    }
}

fn run_tournament(setup_path: Option<&Path>, seed: u64, out: &Path) -> Result<()> {
    let setup = match setup_path {
        Some(path) => TournamentSetup::load(path)?,
        None => TournamentSetup::sample(),
    };

    println!("⚽ Kicking off: {} teams, seed {}", setup.teams.len(), seed);

    let press_dir = out.join("press");
    fs::create_dir_all(&press_dir)
        .with_context(|| format!("creating output directory {}", press_dir.display()))?;

    let teams = setup.build_rosters()?;
    let referees: Vec<Referee> = setup
        .referees
        .iter()
        .map(|name| Referee::new(name.as_str()))
        .collect();
    let commentators: Vec<Arc<dyn MatchObserver>> = setup
        .commentators
        .iter()
        .map(|name| Arc::new(Commentator::new(name.as_str())) as Arc<dyn MatchObserver>)
        .collect();
    let journalists: Vec<Arc<dyn MatchObserver>> = setup
        .journalists
        .iter()
        .map(|name| {
            let diary = press_dir.join(format!("{}.log", slug(name)));
            Arc::new(SportsJournalist::new(name.as_str(), diary)) as Arc<dyn MatchObserver>
        })
        .collect();

    let mut tournament = Tournament::new(teams, referees, commentators, journalists);
    let report = tournament.run(&mut seeded(seed))?;

    print_standings(&report);
    print_top_scorers(tournament.teams());

    save_report(out, &report)?;
    save_rosters(out, tournament.teams())?;
    println!("\n📄 Reports saved to: {}", out.display());
    Ok(())
}

fn write_sample(out: &Path) -> Result<()> {
    let sample = TournamentSetup::sample();
    let json = serde_json::to_string_pretty(&sample)?;
    fs::write(out, json).with_context(|| format!("writing {}", out.display()))?;
    println!("📄 Sample setup saved to: {}", out.display());
    println!("   Edit it, then play it: ft_cli run --setup {}", out.display());
    Ok(())
}

fn print_standings(report: &TournamentReport) {
    println!(
        "\n🏆 Final standings ({} matches, {} replays):",
        report.matches.len(),
        report.replays
    );
    for (place, row) in report.standings.iter().enumerate() {
        println!(
            "   {}. {:<24} {:>2} played  {:>2} points",
            place + 1,
            row.team,
            row.played,
            row.points
        );
    }
    if let Some(champion) = report.champion() {
        println!("\n✅ Champions: {}", champion.team);
    }
}

fn print_top_scorers(teams: &[Roster]) {
    let mut scorers: Vec<(&str, &str, u32)> = Vec::new();
    for team in teams {
        for player in team.iter().filter(|p| p.is_forward() && p.tally > 0) {
            scorers.push((player.name.as_str(), team.name(), player.tally));
        }
    }
    if scorers.is_empty() {
        return;
    }
    scorers.sort_by(|a, b| b.2.cmp(&a.2));

    println!("\n⚽ Top scorers:");
    for (name, team, goals) in scorers.iter().take(5) {
        println!("   {:<24} {}  {}", name, team, goals);
    }
}

fn save_report(out: &Path, report: &TournamentReport) -> Result<()> {
    let path = out.join("tournament.json");
    let json = serde_json::to_string_pretty(report)?;
    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))
}

/// Final squads sorted by tally, so scorers and busy keepers lead their
/// team listings.
fn save_rosters(out: &Path, teams: &[Roster]) -> Result<()> {
    let mut snapshot: Vec<Roster> = teams.to_vec();
    for team in &mut snapshot {
        team.sort_players_by(|a, b| b.tally.cmp(&a.tally));
    }
    let path = out.join("rosters.json");
    let json = serde_json::to_string_pretty(&snapshot)?;
    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))
}

/// File-name-safe version of an observer's name.
fn slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

fn init_logger() {
    let mut builder = Builder::new();
    builder.format(|formatter, record| {
        writeln!(
            formatter,
            "{} [{}] ({}): {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Ok(var) = env::var("RUST_LOG") {
        builder.parse_filters(&var);
    } else {
        // default to Info when RUST_LOG is unset
        builder.filter(None, LevelFilter::Info);
    }

    builder.init();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_filename_safe() {
        assert_eq!(slug("Ines Vidal"), "ines_vidal");
        assert_eq!(slug("J. O'Hara-Quinn"), "j__o_hara_quinn");
    }

    #[test]
    fn run_writes_reports_and_diaries() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");

        run_tournament(None, 20, &out).unwrap();

        let report: TournamentReport =
            serde_json::from_str(&fs::read_to_string(out.join("tournament.json")).unwrap())
                .unwrap();
        assert_eq!(report.standings.len(), 3);
        assert_eq!(report.matches.len(), 3 + report.replays);

        let rosters: Vec<Roster> =
            serde_json::from_str(&fs::read_to_string(out.join("rosters.json")).unwrap()).unwrap();
        assert_eq!(rosters.len(), 3);

        // One diary per journalist in the sample setup.
        let diaries = fs::read_dir(out.join("press")).unwrap().count();
        assert_eq!(diaries, TournamentSetup::sample().journalists.len());
    }

    #[test]
    fn rerunning_the_same_seed_writes_the_same_report() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first");
        let second = dir.path().join("second");

        run_tournament(None, 77, &first).unwrap();
        run_tournament(None, 77, &second).unwrap();

        assert_eq!(
            fs::read_to_string(first.join("tournament.json")).unwrap(),
            fs::read_to_string(second.join("tournament.json")).unwrap()
        );
    }
}
