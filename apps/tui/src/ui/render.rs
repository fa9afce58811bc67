use crate::app::{App, AppScreen};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::screens;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    if app.show_help {
        screens::help::render_help(f, f.area());
        return;
    }

    match app.screen {
        AppScreen::Browse => screens::browse::render_browse(app, f),
        AppScreen::Chat => screens::chat::render_chat(app, f),
    }
}

/// Status block shared by the browse and chat screens.
pub fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let status_text = if app.status_message.is_empty() {
        Text::from("")
    } else {
        let style = if app.status_message.starts_with("Error")
            || app.status_message.starts_with("Failed")
        {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };

        Text::from(Span::styled(&app.status_message, style))
    };

    let status_paragraph = Paragraph::new(status_text)
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(status_paragraph, area);
}

/// One-line keyboard hint bar.
pub fn render_shortcuts(f: &mut Frame<'_>, area: Rect, pairs: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (index, (key, action)) in pairs.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        let trailer = if index + 1 == pairs.len() {
            format!(": {action}")
        } else {
            format!(": {action} | ")
        };
        spans.push(Span::styled(trailer, Style::default().fg(Color::Gray)));
    }

    let paragraph = Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
