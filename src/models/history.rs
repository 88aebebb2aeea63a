use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::round::RoundResult;
use super::store;
use crate::error::Result;

pub const MAX_HISTORY: usize = 200;

/// Where a round came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Standard,
    Daily,
    Survival,
    Solver,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Standard => "standard",
            Mode::Daily => "daily",
            Mode::Survival => "survival",
            Mode::Solver => "solver",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub result: String,
    pub target: i64,
    pub attempts: u32,
    pub time_secs: u64,
    pub points: u32,
    pub mode: Mode,
    #[serde(default)]
    pub cheated: bool,
    /// Played by the solver rather than the player.
    #[serde(default)]
    pub automated: bool,
    pub date: String,
}

impl HistoryEntry {
    pub fn new(result: &RoundResult, mode: Mode) -> Self {
        Self {
            result: result.ending.as_str().to_string(),
            target: result.target,
            attempts: result.attempts,
            time_secs: result.elapsed_secs,
            points: result.points,
            mode,
            cheated: result.cheated,
            automated: result.automated,
            date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Finished rounds, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn load(path: &Path) -> Self {
        store::load_or_default(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        store::save_json(path, self)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY);
    }
}

/// Loads, prepends and saves in one step.
pub fn append(path: &Path, result: &RoundResult, mode: Mode) -> Result<()> {
    let mut history = History::load(path);
    history.push(HistoryEntry::new(result, mode));
    history.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::difficulty::Difficulty;
    use crate::models::round::Ending;
    use tempfile::TempDir;

    fn result(target: i64) -> RoundResult {
        RoundResult {
            ending: Ending::TimedOut,
            difficulty: Difficulty::Medium,
            target,
            attempts: 4,
            elapsed_secs: 120,
            cheated: false,
            hinted: false,
            automated: false,
            points: 0,
        }
    }

    #[test]
    fn test_newest_first_and_capped() {
        let mut history = History::default();
        for i in 0..(MAX_HISTORY as i64 + 10) {
            history.push(HistoryEntry::new(&result(i), Mode::Standard));
        }
        assert_eq!(history.entries().len(), MAX_HISTORY);
        assert_eq!(history.entries()[0].target, MAX_HISTORY as i64 + 9);
    }

    #[test]
    fn test_append_round_trips_through_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        append(&path, &result(1), Mode::Daily).unwrap();
        append(&path, &result(2), Mode::Survival).unwrap();

        let history = History::load(&path);
        assert_eq!(history.entries().len(), 2);
        assert_eq!(history.entries()[0].mode, Mode::Survival);
        assert_eq!(history.entries()[1].result, "timeout");
    }
}
