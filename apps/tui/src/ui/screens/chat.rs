use crate::app::App;
use crate::ui::render::{render_shortcuts, render_status};
use echocart::assistant::WidgetStatus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_chat(app: &App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area().inner(Margin::new(2, 1)));

    render_header(app, f, chunks[0]);
    render_transcript(app, f, chunks[1]);
    render_input(app, f, chunks[2]);
    render_status(app, f, chunks[3]);
    render_shortcuts(
        f,
        chunks[4],
        &[("Enter", "Send"), ("Esc", "Back"), ("F1", "Help")],
    );
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let (state_label, state_style) = match app.widget_status {
        WidgetStatus::Waiting => ("connecting…", Style::default().fg(Color::Yellow)),
        WidgetStatus::Ready => (
            "online",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        WidgetStatus::Unavailable => ("unavailable", Style::default().fg(Color::Red)),
    };

    let header = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "Sustainability Assistant ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("[{state_label}]"), state_style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_transcript(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Conversation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = if app.chat_transcript.is_empty() {
        Text::from(Span::styled(
            "Ask about product sustainability, alternatives, or metrics.",
            Style::default().fg(Color::Gray),
        ))
    } else {
        Text::from(
            app.chat_transcript
                .iter()
                .map(|message| {
                    TextLine::from(vec![
                        Span::styled(
                            "You: ",
                            Style::default()
                                .fg(Color::Green)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(message.as_str(), Style::default().fg(Color::White)),
                    ])
                })
                .collect::<Vec<_>>(),
        )
    };

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_input(app: &App, f: &mut Frame<'_>, area: Rect) {
    let cursor = if (app.animation_counter * 2.0).sin() > 0.0 {
        "█"
    } else {
        " "
    };

    let input = Paragraph::new(TextLine::from(vec![
        Span::styled("> ", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("{}{cursor}", app.chat_input),
            Style::default().fg(Color::White),
        ),
    ]))
    .block(
        Block::default()
            .title(" Message ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(input, area);
}
