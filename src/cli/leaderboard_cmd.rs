use super::input::InputReader;
use super::Session;
use crate::display::display_leaderboard;
use crate::models::Leaderboard;

pub fn handle_leaderboard(session: &Session, clear: bool, yes: bool) {
    let path = session.storage.leaderboard();
    let mut board = Leaderboard::load(&path);

    if !clear {
        display_leaderboard(&board);
        return;
    }

    if board.is_empty() {
        println!("Leaderboard is already empty.");
        return;
    }

    if !yes && !InputReader::spawn().confirm("Clear leaderboard? (y/n): ") {
        println!("Leaderboard kept.");
        return;
    }

    board.clear();
    if let Err(e) = board.save(&path) {
        eprintln!("Failed to save leaderboard: {}", e);
        std::process::exit(1);
    }
    println!("Leaderboard cleared.");
}
