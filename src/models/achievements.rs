use std::collections::BTreeMap;
use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::round::RoundResult;
use super::store;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Achievement {
    OneShot,
    SpeedRunner,
    QuickWin,
    NoHints,
}

pub const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement::OneShot,
    Achievement::SpeedRunner,
    Achievement::QuickWin,
    Achievement::NoHints,
];

impl Achievement {
    pub fn id(&self) -> &'static str {
        match self {
            Achievement::OneShot => "one_shot",
            Achievement::SpeedRunner => "speed_runner",
            Achievement::QuickWin => "quick_win",
            Achievement::NoHints => "no_hints",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Achievement::OneShot => "One-Shot",
            Achievement::SpeedRunner => "Speed Runner",
            Achievement::QuickWin => "Quick Win",
            Achievement::NoHints => "Pure Luck",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Achievement::OneShot => "Win in 1 attempt",
            Achievement::SpeedRunner => "Win under 10 seconds",
            Achievement::QuickWin => "Win under 30 seconds",
            Achievement::NoHints => "Win without asking for a hint",
        }
    }

    fn earned_by(&self, result: &RoundResult) -> bool {
        match self {
            Achievement::OneShot => result.attempts == 1,
            Achievement::SpeedRunner => result.elapsed_secs < 10,
            Achievement::QuickWin => result.elapsed_secs < 30,
            Achievement::NoHints => !result.hinted,
        }
    }
}

/// Unlock dates keyed by achievement id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unlocked {
    dates: BTreeMap<String, String>,
}

impl Unlocked {
    pub fn load(path: &Path) -> Self {
        store::load_or_default(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        store::save_json(path, self)
    }

    pub fn unlocked_on(&self, id: &str) -> Option<&str> {
        self.dates.get(id).map(String::as_str)
    }

    /// Records every achievement newly earned by `result`.
    pub fn award(&mut self, result: &RoundResult) -> Vec<Achievement> {
        if !result.is_genuine_win() {
            return Vec::new();
        }

        let today = Local::now().format("%Y-%m-%d").to_string();
        let mut new = Vec::new();
        for achievement in ACHIEVEMENTS {
            if self.dates.contains_key(achievement.id()) || !achievement.earned_by(result) {
                continue;
            }
            self.dates.insert(achievement.id().to_string(), today.clone());
            new.push(achievement);
        }
        new
    }
}
