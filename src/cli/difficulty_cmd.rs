use super::Session;
use crate::display::format_clock;
use crate::models::{config, Difficulty};

pub fn handle_difficulty(session: &Session, level: Option<Difficulty>) {
    let mut user_config = session.config.clone();

    match level {
        None => {
            println!("Current difficulty: {}", user_config.difficulty.display_name());
            println!();
            println!("Profiles:");
            for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
                let p = d.profile();
                println!(
                    "  {:<7} {}-{}, {} attempts, {}",
                    d.display_name(),
                    p.lower,
                    p.upper,
                    p.max_attempts,
                    format_clock(p.time_limit)
                );
            }
            println!("  Custom  your range: hunch play --min <n> --max <n>");
            println!();
            println!("To change: hunch difficulty <level>");
        }
        Some(Difficulty::Custom) | Some(Difficulty::Survival) => {
            eprintln!("Only easy, medium or hard can be the default.");
            std::process::exit(1);
        }
        Some(new_level) => {
            let old_level = user_config.difficulty;
            if old_level == new_level {
                println!("Difficulty is already set to {}", new_level.display_name());
                return;
            }

            user_config.difficulty = new_level;
            if let Err(e) = config::save_config(&session.storage, &user_config) {
                eprintln!("Failed to save config: {}", e);
                std::process::exit(1);
            }

            println!(
                "Difficulty changed from {} to {}",
                old_level.display_name(),
                new_level.display_name()
            );
        }
    }
}
