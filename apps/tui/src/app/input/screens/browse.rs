use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen, BrowseFocus};
use crossterm::event::KeyCode;

pub fn handle_browse_input(app: &mut App, key: KeyCode) {
    if app.search_active {
        handle_search_input(app, key);
        return;
    }

    match app.focus {
        BrowseFocus::Products => handle_product_list_input(app, key),
        BrowseFocus::Alternatives => handle_alternatives_input(app, key),
    }
}

fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.clear_search();
        }
        KeyCode::Enter => {
            // Keep the filter, leave typing mode.
            app.search_active = false;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.apply_search();
        }
        KeyCode::Char(ch) => {
            app.search_input.push(ch);
            app.apply_search();
        }
        _ => {}
    }
}

fn handle_product_list_input(app: &mut App, key: KeyCode) {
    let total_rows = app.row_count();

    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('/') => {
            app.search_active = true;
        }
        KeyCode::Char('c') => {
            app.screen = AppScreen::Chat;
        }
        KeyCode::Char('r') => {
            app.load_catalog();
        }
        KeyCode::Esc => {
            if app.search_input.is_empty() {
                app.clear_selection();
            } else {
                app.clear_search();
            }
        }
        KeyCode::Enter => {
            app.select_at_cursor();
        }
        KeyCode::Tab => {
            if app.detail.is_some() {
                app.focus = BrowseFocus::Alternatives;
            }
        }
        KeyCode::Up => {
            if app.cursor > 0 {
                app.cursor -= 1;
            }
        }
        KeyCode::Down => {
            if app.cursor + 1 < total_rows {
                app.cursor += 1;
            }
        }
        KeyCode::PageUp => {
            app.cursor = app.cursor.saturating_sub(5);
        }
        KeyCode::PageDown => {
            let new_index = app.cursor + 5;
            app.cursor = if new_index >= total_rows {
                total_rows - 1
            } else {
                new_index
            };
        }
        KeyCode::Home => {
            app.cursor = 0;
        }
        KeyCode::End => {
            app.cursor = total_rows - 1;
        }
        _ => {}
    }
}

fn handle_alternatives_input(app: &mut App, key: KeyCode) {
    let count = app.alternative_items().map_or(0, <[_]>::len);

    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Esc | KeyCode::Tab => {
            app.focus = BrowseFocus::Products;
        }
        KeyCode::Up => {
            app.alternative_cursor = wrap_decrement(app.alternative_cursor, count);
        }
        KeyCode::Down => {
            app.alternative_cursor = wrap_increment(app.alternative_cursor, count);
        }
        KeyCode::Enter => {
            app.choose_alternative();
        }
        _ => {}
    }
}
