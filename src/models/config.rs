use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::store;
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub difficulty: Difficulty,
    pub player_name: Option<String>,
    /// Seconds added to the clock for each guess.
    pub time_penalty_secs: u64,
    pub sound: bool,
    pub log_level: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            player_name: None,
            time_penalty_secs: 0,
            sound: true,
            log_level: "warn".to_string(),
        }
    }
}

/// Files kept under the data directory.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// `~/.config/hunch`, or `./.hunch` when no home directory is known.
    pub fn default_location() -> Self {
        let dir = match dirs::home_dir() {
            Some(home) => home.join(".config").join("hunch"),
            None => PathBuf::from(".hunch"),
        };
        Self::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config(&self) -> PathBuf {
        self.dir.join("config.json")
    }

    pub fn leaderboard(&self) -> PathBuf {
        self.dir.join("leaderboard.json")
    }

    pub fn history(&self) -> PathBuf {
        self.dir.join("history.json")
    }

    pub fn achievements(&self) -> PathBuf {
        self.dir.join("achievements.json")
    }
}

pub fn load_config(storage: &Storage) -> UserConfig {
    store::load_or_default(&storage.config())
}

pub fn save_config(storage: &Storage, config: &UserConfig) -> Result<()> {
    store::save_json(&storage.config(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_missing() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().to_path_buf());
        let config = load_config(&storage);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.time_penalty_secs, 0);
        assert!(config.sound);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().to_path_buf());
        fs::write(storage.config(), r#"{"difficulty": "hard", "player_name": "ada"}"#).unwrap();

        let config = load_config(&storage);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.player_name.as_deref(), Some("ada"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_save_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("data"));
        let config = UserConfig {
            difficulty: Difficulty::Easy,
            time_penalty_secs: 10,
            sound: false,
            ..UserConfig::default()
        };
        save_config(&storage, &config).unwrap();

        let loaded = load_config(&storage);
        assert_eq!(loaded.difficulty, Difficulty::Easy);
        assert_eq!(loaded.time_penalty_secs, 10);
        assert!(!loaded.sound);
    }
}
