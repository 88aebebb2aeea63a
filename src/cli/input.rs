use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crate::error::{Error, Result};

/// What the player typed at the guess prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Guess(i64),
    Cheat,
    Hint,
    GiveUp,
}

pub fn parse_command(line: &str) -> Result<Command> {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "p" => Ok(Command::Cheat),
        "h" | "hint" => Ok(Command::Hint),
        "q" | "quit" | "give up" | "giveup" => Ok(Command::GiveUp),
        _ => trimmed
            .parse::<i64>()
            .map(Command::Guess)
            .map_err(|_| Error::InvalidGuess(trimmed.to_string())),
    }
}

pub enum Event {
    Line(String),
    Tick,
    Closed,
}

/// Lines from stdin, delivered over a channel so the game loop can wake up
/// for timer ticks while the player is still typing.
pub struct InputReader {
    rx: Receiver<String>,
    closed: Cell<bool>,
}

impl InputReader {
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Self::from_receiver(rx)
    }

    pub fn from_receiver(rx: Receiver<String>) -> Self {
        Self {
            rx,
            closed: Cell::new(false),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    pub fn next_event(&self, tick: Duration) -> Event {
        match self.rx.recv_timeout(tick) {
            Ok(line) => Event::Line(line),
            Err(RecvTimeoutError::Timeout) => Event::Tick,
            Err(RecvTimeoutError::Disconnected) => {
                self.closed.set(true);
                Event::Closed
            }
        }
    }

    pub fn read_line(&self) -> Option<String> {
        match self.rx.recv() {
            Ok(line) => Some(line),
            Err(_) => {
                self.closed.set(true);
                None
            }
        }
    }

    pub fn ask(&self, question: &str) -> Option<String> {
        print!("{}", question);
        io::stdout().flush().ok();
        self.read_line().map(|l| l.trim().to_string())
    }

    pub fn confirm(&self, question: &str) -> bool {
        matches!(
            self.ask(question).as_deref().map(str::to_lowercase).as_deref(),
            Some("y") | Some("yes")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command(" 42 \n").unwrap(), Command::Guess(42));
        assert_eq!(parse_command("-7").unwrap(), Command::Guess(-7));
        assert_eq!(parse_command("P").unwrap(), Command::Cheat);
        assert_eq!(parse_command("hint").unwrap(), Command::Hint);
        assert_eq!(parse_command("Give Up").unwrap(), Command::GiveUp);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        match parse_command("forty") {
            Err(Error::InvalidGuess(s)) => assert_eq!(s, "forty"),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(parse_command("").is_err());
        assert!(parse_command("4.5").is_err());
    }

    #[test]
    fn test_reader_events() {
        let (tx, rx) = mpsc::channel();
        let reader = InputReader::from_receiver(rx);
        tx.send("12".to_string()).unwrap();

        assert!(matches!(reader.next_event(Duration::from_millis(10)), Event::Line(l) if l == "12"));
        assert!(matches!(reader.next_event(Duration::from_millis(10)), Event::Tick));
        drop(tx);
        assert!(matches!(reader.next_event(Duration::from_millis(10)), Event::Closed));
        assert!(reader.is_closed());
    }

    #[test]
    fn test_confirm() {
        let (tx, rx) = mpsc::channel();
        let reader = InputReader::from_receiver(rx);
        tx.send("Y".to_string()).unwrap();
        tx.send("nope".to_string()).unwrap();
        assert!(reader.confirm("sure? "));
        assert!(!reader.confirm("sure? "));
        drop(tx);
        assert!(!reader.confirm("sure? "));
    }
}
