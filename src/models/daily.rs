use chrono::{Datelike, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::difficulty::Difficulty;
use super::round::Round;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The day's medium round. Every player gets the same target on the same date.
pub fn daily_round(date: NaiveDate) -> Round {
    let profile = Difficulty::Medium.profile();
    let seed = 0x6875_6e63_6800_0000 ^ date.num_days_from_ce() as u64;
    let mut rng = StdRng::seed_from_u64(seed);
    let target = rng.gen_range(profile.lower..=profile.upper);
    Round::with_target(profile, target)
}
