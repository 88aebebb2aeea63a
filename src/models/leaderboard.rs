use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::history::Mode;
use super::round::RoundResult;
use super::store;
use crate::error::Result;

pub const MAX_ENTRIES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub attempts: u32,
    pub time_secs: u64,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub date: String,
}

impl LeaderboardEntry {
    /// Builds an entry for a genuine win. Cheated, lost and solver rounds
    /// have no entry.
    pub fn from_result(result: &RoundResult, name: &str, mode: Mode) -> Option<Self> {
        if !result.is_genuine_win() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            attempts: result.attempts,
            time_secs: result.elapsed_secs,
            difficulty: result.difficulty,
            mode,
            points: result.points,
            date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        })
    }

    fn rank_key(&self) -> (u32, u64) {
        (self.attempts, self.time_secs)
    }

    fn day(&self) -> &str {
        self.date.get(..10).unwrap_or(self.date.as_str())
    }
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Top scores, best first: fewer attempts, then less time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn load(path: &Path) -> Self {
        let mut board: Leaderboard = store::load_or_default(path);
        board.entries.sort_by_key(LeaderboardEntry::rank_key);
        board.entries.truncate(MAX_ENTRIES);
        board
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        store::save_json(path, self)
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// 1-based rank the result would take, if it makes the board at all.
    pub fn qualifies(&self, result: &RoundResult, mode: Mode) -> Option<usize> {
        if !result.is_genuine_win() {
            return None;
        }
        let key = (result.attempts, result.elapsed_secs);
        if let Some(i) = self.daily_slot(mode, &today()) {
            if self.entries[i].rank_key() <= key {
                return None;
            }
        }
        let position = self.position_for(key);
        (position < MAX_ENTRIES).then_some(position + 1)
    }

    /// Inserts a result under `name`, returning its 1-based rank.
    pub fn record(&mut self, result: &RoundResult, name: &str, mode: Mode) -> Option<usize> {
        let entry = LeaderboardEntry::from_result(result, name, mode)?;
        self.insert(entry)
    }

    /// A daily round holds at most one place per date: a better replay
    /// replaces the earlier score, anything else is refused.
    pub fn insert(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        let key = entry.rank_key();
        let previous = self.daily_slot(entry.mode, entry.day());
        if let Some(i) = previous {
            if self.entries[i].rank_key() <= key {
                return None;
            }
        }

        let position = self.position_for(key);
        if position >= MAX_ENTRIES {
            return None;
        }
        self.entries.insert(position, entry);
        // the replaced entry ranked below the new one, so it moved down by one
        if let Some(i) = previous {
            self.entries.remove(i + 1);
        }
        self.entries.truncate(MAX_ENTRIES);
        Some(position + 1)
    }

    fn daily_slot(&self, mode: Mode, day: &str) -> Option<usize> {
        if mode != Mode::Daily {
            return None;
        }
        self.entries
            .iter()
            .position(|e| e.mode == Mode::Daily && e.day() == day)
    }

    fn position_for(&self, key: (u32, u64)) -> usize {
        self.entries
            .iter()
            .position(|e| e.rank_key() > key)
            .unwrap_or(self.entries.len())
    }
}
