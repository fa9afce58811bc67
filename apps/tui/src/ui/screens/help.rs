use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_help(f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let key = |k: &'static str, what: &'static str| {
        TextLine::from(vec![
            Span::styled(
                format!("  {k:<12}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(what, Style::default().fg(Color::White)),
        ])
    };
    let heading = |text: &'static str| {
        TextLine::from(Span::styled(
            text,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let lines = vec![
        heading("Products"),
        key("↑/↓", "Move through the product list"),
        key("Enter", "Select the highlighted product"),
        key("Esc", "Clear the search filter, then the selection"),
        key("/", "Search products"),
        key("Tab", "Jump between the list and the alternatives"),
        key("r", "Reload the product data file"),
        TextLine::from(""),
        heading("Assistant"),
        key("c", "Open the assistant chat"),
        key("Enter", "Send the typed message"),
        key("Esc", "Return to the product list"),
        TextLine::from(""),
        heading("Metrics"),
        TextLine::from(Span::styled(
            "  Bars show carbon (kg CO₂), water (L) and waste (g).",
            Style::default().fg(Color::White),
        )),
        TextLine::from(Span::styled(
            "  Green is a low footprint, red a high one; gray means the",
            Style::default().fg(Color::White),
        )),
        TextLine::from(Span::styled(
            "  value was missing or not numeric.",
            Style::default().fg(Color::White),
        )),
        TextLine::from(""),
        key("F1 / Esc", "Close this help"),
        key("q", "Quit"),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area.inner(Margin::new(2, 1)));
}
