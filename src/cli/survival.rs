use rand::Rng;
use tracing::warn;

use super::input::InputReader;
use super::play::{penalty, play_round};
use super::Session;
use crate::display;
use crate::models::{history, Mode, Profile, Round};

pub fn survival(session: &Session, rounds: u32) {
    if rounds == 0 {
        eprintln!("Survival needs at least one round.");
        std::process::exit(1);
    }

    let input = InputReader::spawn();
    let mut rng = rand::thread_rng();

    println!("Survival mode: {} rounds. Good luck!", rounds);
    let survived = run_survival(session, Profile::survival(), rounds, &input, &mut rng);

    println!("\n{}", "=".repeat(60));
    if survived == rounds {
        println!("  You survived all {} rounds!", rounds);
    } else {
        println!("  Survived {}/{} rounds.", survived, rounds);
    }
    println!("{}\n", "=".repeat(60));
}

/// Plays up to `rounds` rounds back to back and returns how many were won.
/// The first loss, or closed input, ends the run.
pub fn run_survival<R: Rng + ?Sized>(
    session: &Session,
    profile: Profile,
    rounds: u32,
    input: &InputReader,
    rng: &mut R,
) -> u32 {
    let mut survived = 0;

    for number in 1..=rounds {
        println!("\nRound {}/{}", number, rounds);
        let round = Round::new(profile, rng).with_penalty(penalty(session));
        display::display_intro(round.profile());

        let result = play_round(round, input);
        display::display_ending(&result, session.config.sound);
        if let Err(e) = history::append(&session.storage.history(), &result, Mode::Survival) {
            warn!(error = %e, "could not save history");
        }

        if !result.is_win() {
            break;
        }
        survived += 1;
        if input.is_closed() {
            break;
        }
    }

    survived
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::{Storage, UserConfig};
    use crate::models::History;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::mpsc;
    use tempfile::TempDir;

    fn session(dir: &TempDir) -> Session {
        Session {
            storage: Storage::new(dir.path().to_path_buf()),
            config: UserConfig {
                sound: false,
                ..UserConfig::default()
            },
        }
    }

    fn scripted(lines: &[&str]) -> InputReader {
        let (tx, rx) = mpsc::channel();
        for line in lines {
            tx.send(line.to_string()).unwrap();
        }
        InputReader::from_receiver(rx)
    }

    #[test]
    fn test_stops_after_first_loss() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);
        // cheat through round one, give up round two, never reach round three
        let input = scripted(&["p", "quit", "p"]);
        let mut rng = StdRng::seed_from_u64(3);

        let survived = run_survival(&session, Profile::survival(), 3, &input, &mut rng);
        assert_eq!(survived, 1);

        let history = History::load(&session.storage.history());
        assert_eq!(history.entries().len(), 2);
        assert!(history.entries().iter().all(|e| e.mode == Mode::Survival));
        assert_eq!(history.entries()[0].result, "gave_up");
    }

    #[test]
    fn test_survives_every_round() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);
        let input = scripted(&["p", "p"]);
        let mut rng = StdRng::seed_from_u64(9);

        assert_eq!(run_survival(&session, Profile::survival(), 2, &input, &mut rng), 2);
    }
}
