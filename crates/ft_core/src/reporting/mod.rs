//! Observers that carry match events out of the engine: live commentary
//! on stdout and a timestamped press diary on disk.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::engine::MatchObserver;
use crate::models::MatchId;

/// Relays every event to stdout as live commentary under the
/// commentator's name.
#[derive(Debug, Clone)]
pub struct Commentator {
    pub name: String,
}

impl Commentator {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl MatchObserver for Commentator {
    fn receive(&self, _source: &MatchId, message: &str) {
        println!("{}: {}", self.name, message);
    }
}

/// Appends every event to a diary file, one timestamped line per message.
///
/// Write failures are logged and swallowed; a broken pen does not stop
/// the match.
#[derive(Debug, Clone)]
pub struct SportsJournalist {
    pub name: String,
    path: PathBuf,
}

impl SportsJournalist {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

impl MatchObserver for SportsJournalist {
    fn receive(&self, source: &MatchId, message: &str) {
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("{} [{}] {}\n", stamp, source, message);
        if let Err(error) = self.append(&line) {
            log::warn!(
                "journalist {} could not write to {}: {}",
                self.name,
                self.path.display(),
                error
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
