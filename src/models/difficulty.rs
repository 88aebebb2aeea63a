use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Custom,
    /// Only reachable through survival mode.
    #[value(skip)]
    Survival,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Custom => "custom",
            Difficulty::Survival => "survival",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Custom => "Custom",
            Difficulty::Survival => "Survival",
        }
    }

    /// Built-in profile for a preset tier. `Custom` falls back to the medium
    /// budgets over the medium range until the caller narrows it.
    pub fn profile(&self) -> Profile {
        match self {
            Difficulty::Easy => Profile::preset(*self, 1, 50, 12, 120),
            Difficulty::Medium => Profile::preset(*self, 1, 100, 10, 120),
            Difficulty::Hard => Profile::preset(*self, 1, 500, 7, 180),
            Difficulty::Custom => Profile::preset(*self, 1, 100, 10, 120),
            Difficulty::Survival => Profile::survival(),
        }
    }
}

/// Range, attempt budget and time budget for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub difficulty: Difficulty,
    pub lower: i64,
    pub upper: i64,
    pub max_attempts: u32,
    pub time_limit: Duration,
}

impl Profile {
    fn preset(difficulty: Difficulty, lower: i64, upper: i64, attempts: u32, secs: u64) -> Self {
        Self {
            difficulty,
            lower,
            upper,
            max_attempts: attempts,
            time_limit: Duration::from_secs(secs),
        }
    }

    pub fn custom(
        lower: i64,
        upper: i64,
        max_attempts: Option<u32>,
        time_limit_secs: Option<u64>,
    ) -> Result<Self> {
        if lower >= upper {
            return Err(Error::InvalidRange {
                min: lower,
                max: upper,
            });
        }

        if upper.checked_sub(lower).is_none() {
            return Err(Error::InvalidBudget("range is too wide".to_string()));
        }

        let base = Difficulty::Custom.profile();
        let max_attempts = max_attempts.unwrap_or(base.max_attempts);
        if max_attempts == 0 {
            return Err(Error::InvalidBudget("at least one attempt is required".to_string()));
        }

        let time_limit = match time_limit_secs {
            Some(0) => {
                return Err(Error::InvalidBudget("time limit must be positive".to_string()));
            }
            Some(secs) => Duration::from_secs(secs),
            None => base.time_limit,
        };

        Ok(Self {
            difficulty: Difficulty::Custom,
            lower,
            upper,
            max_attempts,
            time_limit,
        })
    }

    /// Short rounds played back to back in survival mode.
    pub fn survival() -> Self {
        Self::preset(Difficulty::Survival, 1, 20, 6, 25)
    }

    /// Integer midpoint of the range, the last number of the lower half.
    pub fn midpoint(&self) -> i64 {
        self.lower + (self.upper - self.lower) / 2
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let easy = Difficulty::Easy.profile();
        assert_eq!((easy.lower, easy.upper), (1, 50));
        assert_eq!(easy.max_attempts, 12);
        assert_eq!(easy.time_limit, Duration::from_secs(120));

        let hard = Difficulty::Hard.profile();
        assert_eq!((hard.lower, hard.upper), (1, 500));
        assert_eq!(hard.max_attempts, 7);
        assert_eq!(hard.time_limit, Duration::from_secs(180));
    }

    #[test]
    fn test_custom_defaults_budgets() {
        let p = Profile::custom(-20, 20, None, None).unwrap();
        assert_eq!(p.difficulty, Difficulty::Custom);
        assert_eq!(p.max_attempts, 10);
        assert_eq!(p.time_limit, Duration::from_secs(120));
        assert_eq!(p.midpoint(), 0);
    }

    #[test]
    fn test_custom_rejects_bad_range() {
        assert!(matches!(
            Profile::custom(10, 10, None, None),
            Err(Error::InvalidRange { min: 10, max: 10 })
        ));
        assert!(Profile::custom(50, 1, None, None).is_err());
        assert!(Profile::custom(i64::MIN, i64::MAX, None, None).is_err());
    }

    #[test]
    fn test_custom_rejects_empty_budgets() {
        assert!(matches!(
            Profile::custom(1, 10, Some(0), None),
            Err(Error::InvalidBudget(_))
        ));
        assert!(matches!(
            Profile::custom(1, 10, None, Some(0)),
            Err(Error::InvalidBudget(_))
        ));
    }

    #[test]
    fn test_survival_profile_is_its_own_tier() {
        let p = Profile::survival();
        assert_eq!(p.difficulty, Difficulty::Survival);
        assert_eq!((p.lower, p.upper, p.max_attempts), (1, 20, 6));
        assert_eq!(p.time_limit, Duration::from_secs(25));
        assert_eq!(Difficulty::Survival.profile(), p);
        assert_eq!(p.difficulty.display_name(), "Survival");
        assert!(Difficulty::from_str("survival", true).is_err());
    }

    #[test]
    fn test_midpoint_and_contains() {
        let p = Difficulty::Easy.profile();
        assert_eq!(p.midpoint(), 25);
        assert!(p.contains(1));
        assert!(p.contains(50));
        assert!(!p.contains(0));
        assert!(!p.contains(51));
    }
}
