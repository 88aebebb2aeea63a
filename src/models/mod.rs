pub mod achievements;
pub mod config;
pub mod daily;
pub mod difficulty;
pub mod hint;
pub mod history;
pub mod leaderboard;
pub mod round;
pub mod solver;
mod store;

// config is accessed as crate::models::config::{load_config, save_config, ...}
pub use achievements::{Achievement, Unlocked, ACHIEVEMENTS};
pub use difficulty::{Difficulty, Profile};
pub use hint::Hint;
pub use history::{History, Mode};
pub use leaderboard::Leaderboard;
pub use round::{Direction, Ending, Feedback, Outcome, Round, RoundResult};
pub use solver::Bisector;
