mod achievements_cmd;
mod difficulty_cmd;
mod history_cmd;
mod input;
mod leaderboard_cmd;
mod play;
mod solve;
mod survival;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::models::config::{self, Storage, UserConfig};
use crate::models::Difficulty;
use crate::telemetry;

#[derive(Parser)]
#[command(name = "hunch")]
#[command(about = "Guess the secret number before the clock runs out", long_about = None)]
pub struct Cli {
    /// Where config, leaderboard and history are kept
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log round events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play rounds until you stop
    Play {
        #[arg(value_enum)]
        difficulty: Option<Difficulty>,
        /// Lowest possible number (custom range)
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i64>,
        /// Highest possible number (custom range)
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,
        #[arg(long)]
        attempts: Option<u32>,
        /// Time limit in seconds
        #[arg(long)]
        time: Option<u64>,
        /// Name to use on the leaderboard
        #[arg(long)]
        name: Option<String>,
    },
    /// Today's shared medium round
    Daily {
        #[arg(long)]
        name: Option<String>,
    },
    /// Win several short rounds in a row
    Survival {
        #[arg(default_value_t = 3)]
        rounds: u32,
    },
    /// Watch the computer bisect an easy round
    Solve {
        #[arg(long, default_value_t = 150)]
        delay_ms: u64,
    },
    /// Show the top scores
    Leaderboard {
        /// Remove every entry
        #[arg(long)]
        clear: bool,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// List recent rounds, newest first
    History {
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Win rate and personal bests
    Stats,
    /// Unlocked and locked achievements
    Achievements,
    /// Show or set the default difficulty
    Difficulty {
        #[arg(value_enum)]
        level: Option<Difficulty>,
    },
}

/// Everything a command needs once the CLI has been parsed.
pub struct Session {
    pub storage: Storage,
    pub config: UserConfig,
}

pub fn run(cli: Cli) {
    let storage = match cli.data_dir {
        Some(dir) => Storage::new(dir),
        None => Storage::default_location(),
    };
    let config = config::load_config(&storage);

    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    telemetry::init_telemetry_with_level(level);
    debug!(data_dir = %storage.dir().display(), "storage ready");

    let session = Session { storage, config };

    match cli.command {
        None => {
            let difficulty = session.config.difficulty;
            play::play(&session, play::PlayOptions::preset(difficulty));
        }
        Some(Commands::Play {
            difficulty,
            min,
            max,
            attempts,
            time,
            name,
        }) => {
            let options = play::PlayOptions {
                difficulty: difficulty.unwrap_or(session.config.difficulty),
                min,
                max,
                attempts,
                time,
                name,
            };
            play::play(&session, options)
        }
        Some(Commands::Daily { name }) => play::daily(&session, name),
        Some(Commands::Survival { rounds }) => survival::survival(&session, rounds),
        Some(Commands::Solve { delay_ms }) => solve::solve(&session, delay_ms),
        Some(Commands::Leaderboard { clear, yes }) => {
            leaderboard_cmd::handle_leaderboard(&session, clear, yes)
        }
        Some(Commands::History { limit }) => history_cmd::show_history(&session, limit),
        Some(Commands::Stats) => history_cmd::show_stats(&session),
        Some(Commands::Achievements) => achievements_cmd::show_achievements(&session),
        Some(Commands::Difficulty { level }) => difficulty_cmd::handle_difficulty(&session, level),
    }
}
