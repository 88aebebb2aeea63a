use super::Session;
use crate::display::display_achievements;
use crate::models::Unlocked;

pub fn show_achievements(session: &Session) {
    let unlocked = Unlocked::load(&session.storage.achievements());
    display_achievements(&unlocked);
}
