use super::{key_hint, rating_badge};
use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthChar;

pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let movies = app.visible();

    // Layout: header(3) + filter(3) + cards(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    // ── Header ──
    let header_text = format!(
        " Flix Collection   [{} of {} movies]",
        movies.len(),
        app.catalog.len()
    );
    let header = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(header, chunks[0]);

    // ── Active filter ──
    let filter_style = if app.filter.is_active() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let filter_bar = Paragraph::new(format!(" 🔍 {} ", app.filter.describe()))
        .style(filter_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(filter_style)
                .title(" Filter (f) "),
        );
    frame.render_widget(filter_bar, chunks[1]);

    // ── Cards ──
    let text_width = (area.width as usize).saturating_sub(8);
    let items: Vec<ListItem> = movies
        .iter()
        .map(|movie| {
            let title_width = text_width.saturating_sub(10);
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        truncate_str(&movie.title, title_width),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    rating_badge(movie.rating),
                ]),
                Line::from(Span::styled(
                    truncate_str(&movie.description, text_width),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    truncate_str(movie.poster_or(&app.placeholder_poster), text_width),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Movies ")
        .title_bottom(
            Line::from(format!(
                " {} of {} ",
                if movies.is_empty() { 0 } else { app.list_selected + 1 },
                movies.len()
            ))
            .alignment(Alignment::Right),
        );

    if items.is_empty() {
        let message = if app.catalog.is_empty() {
            " The catalog is empty. Press a to add a movie."
        } else {
            " No movies match the current filter. Esc clears it."
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(list_block);
        frame.render_widget(empty, chunks[2]);
    } else {
        let list_widget = List::new(items)
            .block(list_block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▸ ");

        let mut list_state = ListState::default();
        list_state.select(Some(app.list_selected));
        frame.render_stateful_widget(list_widget, chunks[2], &mut list_state);
    }

    // ── Status bar ──
    let status_line = Line::from(vec![
        key_hint(" ↑↓"),
        Span::raw(" Navigate  "),
        key_hint("Enter"),
        Span::raw(" Details  "),
        key_hint("f"),
        Span::raw(" Filter  "),
        key_hint("a"),
        Span::raw(" Add Movie  "),
        key_hint("?"),
        Span::raw(" Help  "),
        key_hint("q"),
        Span::raw(" Quit  "),
        Span::styled(&app.status_msg, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(status_line), chunks[3]);
}

/// Truncate a string to `max_width` terminal columns, adding "…" if truncated.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut result = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            // make room for the ellipsis
            while width + 1 > max_width {
                match result.pop() {
                    Some(last) => width -= last.width().unwrap_or(0),
                    None => return String::new(),
                }
            }
            result.push('…');
            return result;
        }
        width += w;
        result.push(c);
    }
    result
}
