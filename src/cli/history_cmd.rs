use super::Session;
use crate::display::display_history;
use crate::models::{History, Mode};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub played: usize,
    pub won: usize,
    pub cheated: usize,
    pub best_attempts: Option<u32>,
    pub best_time_secs: Option<u64>,
    pub best_points: u32,
}

impl Stats {
    /// Summarises the player's own rounds. Solver runs are left out.
    pub fn from_history(history: &History) -> Self {
        let mut stats = Stats::default();
        for e in history.entries() {
            if e.automated || e.mode == Mode::Solver {
                continue;
            }
            stats.played += 1;
            if e.cheated {
                stats.cheated += 1;
                continue;
            }
            if e.result != "win" {
                continue;
            }
            stats.won += 1;
            stats.best_attempts = Some(stats.best_attempts.map_or(e.attempts, |b| b.min(e.attempts)));
            stats.best_time_secs = Some(stats.best_time_secs.map_or(e.time_secs, |b| b.min(e.time_secs)));
            stats.best_points = stats.best_points.max(e.points);
        }
        stats
    }

    pub fn win_rate(&self) -> f32 {
        if self.played > 0 {
            self.won as f32 / self.played as f32 * 100.0
        } else {
            0.0
        }
    }
}

pub fn show_history(session: &Session, limit: usize) {
    let history = History::load(&session.storage.history());
    display_history(&history, limit);
}

pub fn show_stats(session: &Session) {
    let history = History::load(&session.storage.history());
    let stats = Stats::from_history(&history);

    println!("Rounds played:  {}", stats.played);
    println!("Rounds won:     {} ({:.0}%)", stats.won, stats.win_rate());
    println!("Cheat wins:     {}", stats.cheated);
    match stats.best_attempts {
        Some(a) => println!("Fewest attempts: {}", a),
        None => println!("Fewest attempts: -"),
    }
    match stats.best_time_secs {
        Some(t) => println!("Fastest win:    {}s", t),
        None => println!("Fastest win:    -"),
    }
    println!("Best points:    {}", stats.best_points);
}
