use std::time::Duration;

use rand::Rng;
use tracing::debug;

use super::difficulty::{Difficulty, Profile};
use super::hint::{unlocked_tiers, Hint, HINT_TIERS};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    TooLow,
    TooHigh,
}

/// How close a wrong guess landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proximity {
    BoilingHot,
    VeryHot,
    Hot,
    Warm,
    Cold,
}

impl Proximity {
    pub fn from_distance(distance: u64) -> Self {
        match distance {
            0..=2 => Proximity::BoilingHot,
            3..=5 => Proximity::VeryHot,
            6..=10 => Proximity::Hot,
            11..=20 => Proximity::Warm,
            _ => Proximity::Cold,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Proximity::BoilingHot => "Boiling hot!",
            Proximity::VeryHot => "Very hot!",
            Proximity::Hot => "Hot!",
            Proximity::Warm => "Warm.",
            Proximity::Cold => "Cold.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub guess: i64,
    pub direction: Direction,
    pub proximity: Proximity,
    /// Hints unlocked by this guess. Earlier ones stay on the round.
    pub new_hints: Vec<Hint>,
    pub attempts_remaining: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Continue(Feedback),
    Exhausted,
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Won,
    Exhausted,
    TimedOut,
    GaveUp,
}

impl Ending {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ending::Won => "win",
            Ending::Exhausted => "exhausted",
            Ending::TimedOut => "timeout",
            Ending::GaveUp => "gave_up",
        }
    }
}

/// Summary of a finished round, handed to the stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub ending: Ending,
    pub difficulty: Difficulty,
    pub target: i64,
    pub attempts: u32,
    pub elapsed_secs: u64,
    pub cheated: bool,
    pub hinted: bool,
    pub automated: bool,
    pub points: u32,
}

impl RoundResult {
    pub fn is_win(&self) -> bool {
        self.ending == Ending::Won
    }

    /// Won by the player without the cheat or the solver.
    pub fn is_genuine_win(&self) -> bool {
        self.is_win() && !self.cheated && !self.automated
    }
}

pub fn points_for(attempts: u32, elapsed_secs: u64) -> u32 {
    let penalty = attempts as u64 * 40 + elapsed_secs * 2;
    1000u64.saturating_sub(penalty) as u32
}

#[derive(Debug, Clone)]
pub struct Round {
    profile: Profile,
    target: i64,
    attempts_used: u32,
    penalty_per_attempt: Duration,
    hints: Vec<Hint>,
    hinted: bool,
    cheated: bool,
    automated: bool,
    ending: Option<(Ending, Duration)>,
}

impl Round {
    pub fn new<R: Rng + ?Sized>(profile: Profile, rng: &mut R) -> Self {
        let target = rng.gen_range(profile.lower..=profile.upper);
        Self::with_target(profile, target)
    }

    pub fn with_target(profile: Profile, target: i64) -> Self {
        debug!(
            difficulty = profile.difficulty.as_str(),
            lower = profile.lower,
            upper = profile.upper,
            "round started"
        );
        Self {
            profile,
            target,
            attempts_used: 0,
            penalty_per_attempt: Duration::ZERO,
            hints: Vec::new(),
            hinted: false,
            cheated: false,
            automated: false,
            ending: None,
        }
    }

    /// Seconds added to the clock for every guess that consumes an attempt.
    pub fn with_penalty(mut self, penalty: Duration) -> Self {
        self.penalty_per_attempt = penalty;
        self
    }

    /// Flags the round as played by the solver.
    pub fn automated(mut self) -> Self {
        self.automated = true;
        self
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.profile.max_attempts.saturating_sub(self.attempts_used)
    }

    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    pub fn is_over(&self) -> bool {
        self.ending().is_some()
    }

    pub fn ending(&self) -> Option<Ending> {
        self.ending.map(|(ending, _)| ending)
    }

    pub fn effective_elapsed(&self, elapsed: Duration) -> Duration {
        elapsed + self.penalty_per_attempt * self.attempts_used
    }

    pub fn time_remaining(&self, elapsed: Duration) -> Duration {
        self.profile
            .time_limit
            .saturating_sub(self.effective_elapsed(elapsed))
    }

    pub fn submit(&mut self, guess: i64, elapsed: Duration) -> Result<Outcome> {
        if self.is_over() {
            return Err(Error::RoundOver);
        }
        if self.effective_elapsed(elapsed) > self.profile.time_limit {
            self.finish(Ending::TimedOut, elapsed);
            return Ok(Outcome::TimedOut);
        }
        if !self.profile.contains(guess) {
            return Err(Error::OutOfRange {
                guess,
                lower: self.profile.lower,
                upper: self.profile.upper,
            });
        }

        self.attempts_used += 1;
        debug!(attempt = self.attempts_used, guess, "guess submitted");

        if guess == self.target {
            self.finish(Ending::Won, elapsed);
            return Ok(Outcome::Won);
        }
        if self.attempts_remaining() == 0 {
            self.finish(Ending::Exhausted, elapsed);
            return Ok(Outcome::Exhausted);
        }

        let direction = if guess < self.target {
            Direction::TooLow
        } else {
            Direction::TooHigh
        };
        let distance = guess.abs_diff(self.target);
        let new_hints = self.unlock_hints();

        Ok(Outcome::Continue(Feedback {
            guess,
            direction,
            proximity: Proximity::from_distance(distance),
            new_hints,
            attempts_remaining: self.attempts_remaining(),
        }))
    }

    /// Timer callback. Returns `Some(TimedOut)` on the tick that ends the round.
    pub fn tick(&mut self, elapsed: Duration) -> Option<Outcome> {
        if self.is_over() || !self.time_remaining(elapsed).is_zero() {
            return None;
        }
        self.finish(Ending::TimedOut, elapsed);
        Some(Outcome::TimedOut)
    }

    /// Ends the round in a win without spending an attempt.
    pub fn cheat(&mut self, elapsed: Duration) -> Result<Outcome> {
        if self.is_over() {
            return Err(Error::RoundOver);
        }
        self.cheated = true;
        debug!("cheat activated");
        self.finish(Ending::Won, elapsed);
        Ok(Outcome::Won)
    }

    pub fn give_up(&mut self, elapsed: Duration) -> Result<()> {
        if self.is_over() {
            return Err(Error::RoundOver);
        }
        self.finish(Ending::GaveUp, elapsed);
        Ok(())
    }

    /// Reveals the next locked hint tier ahead of schedule.
    pub fn request_hint(&mut self) -> Option<Hint> {
        if self.is_over() {
            return None;
        }
        let tier = HINT_TIERS.get(self.hints.len())?;
        let hint = tier.reveal(self.target, &self.profile);
        self.hints.push(hint.clone());
        self.hinted = true;
        Some(hint)
    }

    pub fn result(&self) -> Option<RoundResult> {
        let (ending, elapsed) = self.ending?;
        let elapsed_secs = self.effective_elapsed(elapsed).as_secs();
        let points = if ending == Ending::Won && !self.cheated && !self.automated {
            points_for(self.attempts_used, elapsed_secs)
        } else {
            0
        };

        Some(RoundResult {
            ending,
            difficulty: self.profile.difficulty,
            target: self.target,
            attempts: self.attempts_used,
            elapsed_secs,
            cheated: self.cheated,
            hinted: self.hinted,
            automated: self.automated,
            points,
        })
    }

    fn unlock_hints(&mut self) -> Vec<Hint> {
        let unlocked = unlocked_tiers(self.attempts_used);
        let mut new_hints = Vec::new();
        while self.hints.len() < unlocked {
            let hint = HINT_TIERS[self.hints.len()].reveal(self.target, &self.profile);
            self.hints.push(hint.clone());
            new_hints.push(hint);
        }
        new_hints
    }

    fn finish(&mut self, ending: Ending, elapsed: Duration) {
        debug!(ending = ending.as_str(), attempts = self.attempts_used, "round over");
        self.ending = Some((ending, elapsed));
    }
}
