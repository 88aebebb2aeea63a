use std::thread;
use std::time::{Duration, Instant};

use tracing::warn;

use super::Session;
use crate::display;
use crate::models::{history, Bisector, Difficulty, Mode, Outcome, Round, RoundResult};

pub fn solve(session: &Session, delay_ms: u64) {
    let profile = Difficulty::Easy.profile();
    let round = Round::new(profile, &mut rand::thread_rng()).automated();
    display::display_intro(round.profile());
    println!("Solver started (bisection).");

    let result = run_solver(round, Duration::from_millis(delay_ms));
    display::display_ending(&result, session.config.sound);

    if let Err(e) = history::append(&session.storage.history(), &result, Mode::Solver) {
        warn!(error = %e, "could not save history");
    }
}

/// Plays the round by always guessing the middle of what is left.
pub fn run_solver(mut round: Round, delay: Duration) -> RoundResult {
    let started = Instant::now();
    let profile = *round.profile();
    let mut bisector = Bisector::new(profile.lower, profile.upper);

    loop {
        match bisector.next_guess() {
            Some(guess) => {
                print!("Attempt {}: {} ... ", round.attempts_used() + 1, guess);
                match round.submit(guess, started.elapsed()) {
                    Ok(Outcome::Continue(feedback)) => {
                        display::display_feedback(&feedback);
                        bisector.observe(guess, feedback.direction);
                    }
                    Ok(Outcome::Won) => println!("found it!"),
                    Ok(_) => println!(),
                    Err(e) => {
                        println!("{}", e);
                        round.give_up(started.elapsed()).ok();
                    }
                }
            }
            None => {
                round.give_up(started.elapsed()).ok();
            }
        }

        round.tick(started.elapsed());
        if let Some(result) = round.result() {
            return result;
        }
        thread::sleep(delay);
    }
}
