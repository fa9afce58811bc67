use crate::app::state::PLACEHOLDER_LABEL;
use crate::app::{App, BrowseFocus, ProductDetail};
use crate::ui::render::{render_shortcuts, render_status};
use crate::ui::widgets::meter::metric_gauge;
use echocart::catalog::ParsedAlternatives;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_browse(app: &App, f: &mut Frame<'_>) {
    let mut constraints = vec![Constraint::Length(3)];
    let has_banner = app.data_banner.is_some();
    if has_banner {
        constraints.push(Constraint::Length(1));
    }
    constraints.extend([
        Constraint::Min(14),
        Constraint::Length(3),
        Constraint::Length(1),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area().inner(Margin::new(2, 1)));

    render_title(f, chunks[0]);

    let mut next = 1;
    if has_banner {
        render_banner(app, f, chunks[next]);
        next += 1;
    }

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[next]);

    render_product_list(app, f, content[0]);
    render_detail(app, f, content[1]);

    render_status(app, f, chunks[next + 1]);
    render_shortcuts(
        f,
        chunks[next + 2],
        &[
            ("↑/↓", "Navigate"),
            ("Enter", "Select"),
            ("Tab", "Alternatives"),
            ("/", "Search"),
            ("c", "Chat"),
            ("r", "Reload"),
            ("F1", "Help"),
            ("q", "Quit"),
        ],
    );
}

fn render_title(f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .title("== EcoCart Sustainability Dashboard ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let title_paragraph = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "EcoCart ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Sustainability Dashboard",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(title_block)
    .alignment(Alignment::Left);

    f.render_widget(title_paragraph, area);
}

/// Non-blocking data-source error line, shown above the panes so the rest
/// of the view stays usable.
fn render_banner(app: &App, f: &mut Frame<'_>, area: Rect) {
    let Some(message) = app.data_banner.as_deref() else {
        return;
    };
    let banner = Paragraph::new(Span::styled(
        message,
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(banner, area);
}

fn render_product_list(app: &App, f: &mut Frame<'_>, area: Rect) {
    let searching = app.search_active || !app.search_input.is_empty();
    let focused = app.focus == BrowseFocus::Products;

    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(format!(" Products ({}) ", app.listed().len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let panes = if searching {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3)])
            .split(area)
    };

    let list_area = panes[0];
    let total_rows = app.row_count();
    let max_visible_rows = list_area.height.saturating_sub(2) as usize;

    let mut scroll_offset = 0;
    if total_rows > max_visible_rows && max_visible_rows > 0 {
        if app.cursor >= max_visible_rows + scroll_offset {
            scroll_offset = app.cursor.saturating_sub(max_visible_rows) + 1;
        } else if app.cursor < scroll_offset {
            scroll_offset = app.cursor;
        }
    }

    let mut lines = Vec::with_capacity(total_rows);
    for row in 0..total_rows {
        let (label, catalog_index) = if row == 0 {
            (PLACEHOLDER_LABEL.to_string(), None)
        } else {
            let index = app.listed()[row - 1];
            let name = app.products[index].display_name().unwrap_or_default();
            (name.to_string(), Some(index))
        };

        let is_cursor = row == app.cursor;
        let is_selected = catalog_index.is_some() && catalog_index == app.selected_index();

        let style = if is_cursor {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if is_selected {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else if catalog_index.is_none() {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::White)
        };

        let prefix = if is_cursor { ">" } else { " " };
        let marker = if is_selected { "●" } else { " " };
        lines.push(TextLine::from(Span::styled(
            format!("{prefix}{marker} {label}"),
            style,
        )));
    }

    let shown = lines
        .into_iter()
        .skip(scroll_offset)
        .take(max_visible_rows.max(1))
        .collect::<Vec<_>>();

    let paragraph = Paragraph::new(Text::from(shown)).block(block);
    f.render_widget(paragraph, list_area);

    if searching {
        let cursor = if app.search_active { "█" } else { "" };
        let search_line = Paragraph::new(TextLine::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}{cursor}", app.search_input),
                Style::default().fg(Color::Yellow),
            ),
        ]));
        f.render_widget(search_line, panes[1]);
    }
}

fn render_detail(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Product Details ")
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Hidden detail panel: nothing selected (or placeholder selected).
    let Some(detail) = app.detail.as_ref() else {
        let hint = Paragraph::new("Select a product to view its sustainability metrics")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(hint, inner);
        return;
    };

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(inner);

    let name_line = Paragraph::new(Span::styled(
        &detail.name,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(name_line, sections[0]);

    for (slot, (metric, reading)) in detail.readings.iter().enumerate() {
        f.render_widget(metric_gauge(*metric, reading), sections[slot + 1]);
    }

    render_alternatives(app, detail, f, sections[4]);
}

fn render_alternatives(app: &App, detail: &ProductDetail, f: &mut Frame<'_>, area: Rect) {
    let focused = app.focus == BrowseFocus::Alternatives;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Sustainable Alternatives ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines = match &detail.alternatives {
        ParsedAlternatives::Empty => vec![TextLine::from(Span::styled(
            "No alternatives data available",
            Style::default().fg(Color::Gray),
        ))],
        ParsedAlternatives::Invalid => vec![TextLine::from(Span::styled(
            "Could not load alternatives",
            Style::default().fg(Color::Red),
        ))],
        ParsedAlternatives::Delimited(items) | ParsedAlternatives::Structured(items) => {
            if items.is_empty() {
                vec![TextLine::from(Span::styled(
                    "No sustainable alternatives found",
                    Style::default().fg(Color::Gray),
                ))]
            } else {
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let is_cursor = focused && index == app.alternative_cursor;
                        let style = if is_cursor {
                            Style::default()
                                .fg(Color::Black)
                                .bg(Color::Yellow)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::White)
                        };
                        let prefix = if is_cursor { ">" } else { " " };
                        TextLine::from(Span::styled(
                            format!("{prefix} {}. {}", index + 1, item.name),
                            style,
                        ))
                    })
                    .collect()
            }
        }
    };

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
