use crate::app::state::App;
use crossterm::event::KeyCode;

/// F1 toggles the help screen from anywhere outside a text field.
pub fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if key == KeyCode::F(1) && !app.search_active {
        app.show_help = true;
        return true;
    }
    false
}

pub fn handle_help_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::F(1) => {
            app.show_help = false;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}
