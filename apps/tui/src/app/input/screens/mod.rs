use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod browse;
mod chat;
mod help;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if app.show_help {
        help::handle_help_input(app, key);
        return;
    }

    if help::handle_help_toggle(app, key) {
        return;
    }

    match app.screen {
        AppScreen::Browse => browse::handle_browse_input(app, key),
        AppScreen::Chat => chat::handle_chat_input(app, key),
    }
}
