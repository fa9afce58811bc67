use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_chat_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.screen = AppScreen::Browse;
        }
        KeyCode::Enter => {
            app.send_chat_message();
        }
        KeyCode::Backspace => {
            app.chat_input.pop();
        }
        KeyCode::Char(ch) => {
            app.chat_input.push(ch);
        }
        _ => {}
    }
}
