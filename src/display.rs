use std::io::{self, Write};
use std::time::Duration;

use crate::models::leaderboard::MAX_ENTRIES;
use crate::models::{
    Achievement, Direction, Ending, Feedback, Hint, History, Leaderboard, Profile, Round,
    RoundResult, Unlocked, ACHIEVEMENTS,
};

pub fn format_clock(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub fn display_intro(profile: &Profile) {
    println!("\n{}", "=".repeat(60));
    println!("  HUNCH - {} round", profile.difficulty.display_name());
    println!("{}\n", "=".repeat(60));
    println!(
        "Guess the number between {} and {}.",
        profile.lower, profile.upper
    );
    println!(
        "You have {} attempts and {} on the clock.",
        profile.max_attempts,
        format_clock(profile.time_limit)
    );
    println!("Type 'hint' for a hint or 'quit' to give up.\n");
}

pub fn prompt(round: &Round, remaining: Duration) {
    print!(
        "[{} left] Attempt {}/{} > ",
        format_clock(remaining),
        round.attempts_used() + 1,
        round.profile().max_attempts
    );
    io::stdout().flush().ok();
}

pub fn display_feedback(feedback: &Feedback) {
    let direction = match feedback.direction {
        Direction::TooLow => "Too low!",
        Direction::TooHigh => "Too high!",
    };
    println!("{}: {} {}", feedback.guess, feedback.proximity.label(), direction);
    for hint in &feedback.new_hints {
        display_hint(hint);
    }
    println!("{} attempt(s) left.", feedback.attempts_remaining);
}

pub fn display_hint(hint: &Hint) {
    println!("  Hint: {}.", hint);
}

pub fn display_ending(result: &RoundResult, sound: bool) {
    println!();
    println!("{}", "-".repeat(60));
    match result.ending {
        Ending::Won if result.cheated => {
            println!("Cheat activated! You win! The number was {}.", result.target);
            println!("(Cheat wins do not count for the leaderboard.)");
        }
        Ending::Won => {
            println!(
                "Congratulations! You guessed {} in {} attempt(s) and {}s.",
                result.target, result.attempts, result.elapsed_secs
            );
            println!("Points: {}", result.points);
        }
        Ending::Exhausted => {
            println!("Game over! Out of attempts. The number was {}.", result.target);
        }
        Ending::TimedOut => println!("Time's up! The number was {}.", result.target),
        Ending::GaveUp => println!("Gave up. The number was {}.", result.target),
    }
    println!("{}", "-".repeat(60));
    sound_cue(result.is_win(), sound);
}

/// Terminal bell: one ring for a win, two for a loss.
pub fn sound_cue(win: bool, enabled: bool) {
    if !enabled {
        return;
    }
    let bells = if win { "\x07" } else { "\x07\x07" };
    print!("{}", bells);
    io::stdout().flush().ok();
}

pub fn display_new_achievements(new: &[Achievement]) {
    if new.is_empty() {
        return;
    }
    let titles: Vec<&str> = new.iter().map(|a| a.title()).collect();
    println!("New achievements: {}", titles.join(", "));
}

pub fn display_leaderboard(board: &Leaderboard) {
    println!("\n{}", "=".repeat(60));
    println!("  LEADERBOARD (top {})", MAX_ENTRIES);
    println!("{}", "=".repeat(60));

    if board.is_empty() {
        println!("No scores yet.");
    }
    for (i, e) in board.entries().iter().enumerate() {
        println!(
            "{}. {:<16} {:>2} attempts  {:>4}s  {:<8} {:<8} {:>4} pts  {}",
            i + 1,
            e.name,
            e.attempts,
            e.time_secs,
            e.difficulty.display_name(),
            e.mode.as_str(),
            e.points,
            e.date
        );
    }
    println!("{}\n", "=".repeat(60));
}

pub fn display_history(history: &History, limit: usize) {
    if history.entries().is_empty() {
        println!("No rounds played yet.");
        return;
    }

    println!("Last {} round(s):", limit.min(history.entries().len()));
    for e in history.entries().iter().take(limit) {
        let cheat = if e.cheated { " (cheat)" } else { "" };
        println!(
            "  {}  {:<9} {:<9}{} target {:>4}, {} attempt(s), {}s, {} pts",
            e.date,
            e.mode.as_str(),
            e.result,
            cheat,
            e.target,
            e.attempts,
            e.time_secs,
            e.points
        );
    }
}

pub fn display_achievements(unlocked: &Unlocked) {
    for a in ACHIEVEMENTS {
        let status = match unlocked.unlocked_on(a.id()) {
            Some(date) => format!("Unlocked on {}", date),
            None => "Locked".to_string(),
        };
        println!("{:<13} {:<32} {}", a.title(), a.description(), status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(Duration::from_secs(0)), "0:00");
        assert_eq!(format_clock(Duration::from_secs(65)), "1:05");
        assert_eq!(format_clock(Duration::from_secs(180)), "3:00");
    }
}
