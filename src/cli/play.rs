use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::input::{parse_command, Command, Event, InputReader};
use super::Session;
use crate::display;
use crate::error::Result;
use crate::models::{
    daily, history, Difficulty, Leaderboard, Mode, Outcome, Profile, Round, RoundResult, Unlocked,
};

const TICK: Duration = Duration::from_secs(1);
const DEFAULT_NAME: &str = "Player";

pub struct PlayOptions {
    pub difficulty: Difficulty,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub attempts: Option<u32>,
    pub time: Option<u64>,
    pub name: Option<String>,
}

impl PlayOptions {
    pub fn preset(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            min: None,
            max: None,
            attempts: None,
            time: None,
            name: None,
        }
    }

    /// Any override turns the round into a custom one built on the chosen
    /// tier's budgets.
    pub fn profile(&self) -> Result<Profile> {
        let base = self.difficulty.profile();
        let overridden = self.min.is_some()
            || self.max.is_some()
            || self.attempts.is_some()
            || self.time.is_some();

        if self.difficulty != Difficulty::Custom && !overridden {
            return Ok(base);
        }

        Profile::custom(
            self.min.unwrap_or(base.lower),
            self.max.unwrap_or(base.upper),
            Some(self.attempts.unwrap_or(base.max_attempts)),
            Some(self.time.unwrap_or(base.time_limit.as_secs())),
        )
    }
}

pub fn play(session: &Session, options: PlayOptions) {
    let profile = match options.profile() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let input = InputReader::spawn();
    let mut rng = rand::thread_rng();

    loop {
        let round = Round::new(profile, &mut rng).with_penalty(penalty(session));
        display::display_intro(round.profile());

        let result = play_round(round, &input);
        finish_round(session, &input, &result, Mode::Standard, options.name.as_deref());

        if input.is_closed() || !input.confirm("Play again? (y/n): ") {
            break;
        }
    }

    println!("Thank you for playing! Goodbye.");
}

pub fn daily(session: &Session, name: Option<String>) {
    let date = daily::today();
    let input = InputReader::spawn();

    let round = daily::daily_round(date).with_penalty(penalty(session));
    println!("Daily challenge for {}", date.format("%Y-%m-%d"));
    display::display_intro(round.profile());

    let result = play_round(round, &input);
    finish_round(session, &input, &result, Mode::Daily, name.as_deref());
}

pub fn penalty(session: &Session) -> Duration {
    Duration::from_secs(session.config.time_penalty_secs)
}

/// Drives one round from the first prompt to its ending. Each tick of the
/// input timeout is a timer callback.
pub fn play_round(mut round: Round, input: &InputReader) -> RoundResult {
    let started = Instant::now();
    debug!(secret = round.target(), "secret chosen");
    display::prompt(&round, round.time_remaining(started.elapsed()));

    loop {
        let answered = match input.next_event(TICK) {
            Event::Tick => {
                if round.tick(started.elapsed()).is_some() {
                    println!();
                }
                false
            }
            Event::Closed => {
                println!();
                round.give_up(started.elapsed()).ok();
                false
            }
            Event::Line(line) => {
                handle_line(&mut round, &line, started.elapsed());
                true
            }
        };

        if let Some(result) = round.result() {
            return result;
        }
        if answered {
            display::prompt(&round, round.time_remaining(started.elapsed()));
        }
    }
}

fn handle_line(round: &mut Round, line: &str, elapsed: Duration) {
    let command = match parse_command(line) {
        Ok(c) => c,
        Err(e) => {
            println!("{}. Please enter a valid integer.", e);
            return;
        }
    };

    match command {
        Command::Cheat => {
            round.cheat(elapsed).ok();
        }
        Command::GiveUp => {
            round.give_up(elapsed).ok();
        }
        Command::Hint => match round.request_hint() {
            Some(hint) => display::display_hint(&hint),
            None => {
                println!("No more hints for this round. So far:");
                for hint in round.hints() {
                    display::display_hint(hint);
                }
            }
        },
        Command::Guess(guess) => match round.submit(guess, elapsed) {
            Ok(Outcome::Continue(feedback)) => display::display_feedback(&feedback),
            Ok(_) => {}
            Err(e) => println!("{}", e),
        },
    }
}

/// Shows the ending and updates history, achievements and the leaderboard.
pub fn finish_round(
    session: &Session,
    input: &InputReader,
    result: &RoundResult,
    mode: Mode,
    name: Option<&str>,
) {
    let storage = &session.storage;
    display::display_ending(result, session.config.sound);

    if let Err(e) = history::append(&storage.history(), result, mode) {
        warn!(error = %e, "could not save history");
        eprintln!("Failed to save history: {}", e);
    }

    let mut unlocked = Unlocked::load(&storage.achievements());
    let new = unlocked.award(result);
    if !new.is_empty() {
        display::display_new_achievements(&new);
        if let Err(e) = unlocked.save(&storage.achievements()) {
            eprintln!("Failed to save achievements: {}", e);
        }
    }

    let mut board = Leaderboard::load(&storage.leaderboard());
    let Some(rank) = board.qualifies(result, mode) else {
        return;
    };

    let name = match name.or(session.config.player_name.as_deref()) {
        Some(n) => n.to_string(),
        None => input
            .ask(&format!("Top-{} score! Enter your name [{}]: ", rank, DEFAULT_NAME))
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_NAME.to_string()),
    };

    if let Some(rank) = board.record(result, &name, mode) {
        match board.save(&storage.leaderboard()) {
            Ok(()) => println!("{} placed #{} on the leaderboard.", name, rank),
            Err(e) => eprintln!("Failed to save leaderboard: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::{Storage, UserConfig};
    use crate::models::Ending;
    use std::sync::mpsc;
    use tempfile::TempDir;

    fn scripted(lines: &[&str]) -> InputReader {
        let (tx, rx) = mpsc::channel();
        for line in lines {
            tx.send(line.to_string()).unwrap();
        }
        InputReader::from_receiver(rx)
    }

    fn session(dir: &TempDir) -> Session {
        Session {
            storage: Storage::new(dir.path().to_path_buf()),
            config: UserConfig {
                sound: false,
                ..UserConfig::default()
            },
        }
    }

    #[test]
    fn test_scripted_win_skips_bad_input() {
        let round = Round::with_target(Difficulty::Easy.profile(), 27);
        let input = scripted(&["ten", "99", "10", "40", "27"]);
        let result = play_round(round, &input);
        assert_eq!(result.ending, Ending::Won);
        assert_eq!(result.attempts, 3);
    }

    #[test]
    fn test_cheat_keystroke() {
        let round = Round::with_target(Difficulty::Hard.profile(), 321);
        let input = scripted(&["100", "p"]);
        let result = play_round(round, &input);
        assert!(result.is_win());
        assert!(result.cheated);
        assert_eq!(result.attempts, 1);
    }

    #[test]
    fn test_closed_input_gives_up() {
        let round = Round::with_target(Difficulty::Easy.profile(), 27);
        let input = scripted(&["hint", "3"]);
        let result = play_round(round, &input);
        assert_eq!(result.ending, Ending::GaveUp);
        assert!(result.hinted);
        assert!(input.is_closed());
    }

    #[test]
    fn test_finish_round_records_win() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);
        let input = scripted(&[]);

        let mut round = Round::with_target(Difficulty::Easy.profile(), 27);
        for guess in [10, 40, 27] {
            round.submit(guess, Duration::from_secs(20)).unwrap();
        }
        let result = round.result().unwrap();
        finish_round(&session, &input, &result, Mode::Standard, Some("ada"));

        let board = Leaderboard::load(&session.storage.leaderboard());
        assert_eq!(board.entries().len(), 1);
        assert_eq!(board.entries()[0].name, "ada");
        assert_eq!(board.entries()[0].attempts, 3);

        let history = crate::models::History::load(&session.storage.history());
        assert_eq!(history.entries().len(), 1);
        assert!(Unlocked::load(&session.storage.achievements())
            .unlocked_on("quick_win")
            .is_some());
    }

    #[test]
    fn test_finish_round_skips_cheat() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);
        let input = scripted(&["mallory"]);

        let mut round = Round::with_target(Difficulty::Easy.profile(), 27);
        round.cheat(Duration::from_secs(1)).unwrap();
        finish_round(&session, &input, &round.result().unwrap(), Mode::Standard, None);

        assert!(Leaderboard::load(&session.storage.leaderboard()).is_empty());
        assert!(!session.storage.achievements().exists());
    }

    #[test]
    fn test_prompted_name_defaults() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);
        let input = scripted(&[""]);

        let mut round = Round::with_target(Difficulty::Medium.profile(), 50);
        round.submit(50, Duration::from_secs(3)).unwrap();
        finish_round(&session, &input, &round.result().unwrap(), Mode::Daily, None);

        let board = Leaderboard::load(&session.storage.leaderboard());
        assert_eq!(board.entries()[0].name, DEFAULT_NAME);
        assert_eq!(board.entries()[0].mode, Mode::Daily);
    }

    #[test]
    fn test_profile_resolution() {
        let preset = PlayOptions::preset(Difficulty::Hard).profile().unwrap();
        assert_eq!(preset, Difficulty::Hard.profile());

        let ranged = PlayOptions {
            min: Some(-50),
            max: Some(50),
            ..PlayOptions::preset(Difficulty::Easy)
        }
        .profile()
        .unwrap();
        assert_eq!(ranged.difficulty, Difficulty::Custom);
        assert_eq!((ranged.lower, ranged.upper), (-50, 50));
        assert_eq!(ranged.max_attempts, 12);

        let bad = PlayOptions {
            min: Some(9),
            max: Some(3),
            ..PlayOptions::preset(Difficulty::Custom)
        };
        assert!(bad.profile().is_err());
    }
}
