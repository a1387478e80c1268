use super::{key_hint, rating_badge};
use crate::app::App;
use crate::catalog::MovieRecord;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(app: &App, frame: &mut Frame) {
    match app.current_movie() {
        Some(movie) => render_movie(app, movie, frame),
        None => render_not_found(frame),
    }
}

fn render_movie(app: &App, movie: &MovieRecord, frame: &mut Frame) {
    let area = frame.area();

    // Layout: header(4) + description(5) + about(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    // ── Header ──
    let header_lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {}  ", movie.title),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            rating_badge(movie.rating),
        ]),
        Line::from(vec![
            Span::styled(" Poster: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                movie.poster_or(&app.placeholder_poster),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ),
        ]),
    ];
    let header = Paragraph::new(header_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Movie {} ", movie.id)),
    );
    frame.render_widget(header, chunks[0]);

    // ── Short description ──
    let description = Paragraph::new(movie.description.as_str())
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(description, chunks[1]);

    // ── About the movie ──
    render_about(app, movie, frame, chunks[2]);

    // ── Status bar ──
    let status_line = Line::from(vec![
        key_hint(" t"),
        Span::raw(" Watch Trailer  "),
        key_hint("↑↓/PgUp/PgDn"),
        Span::raw(" Scroll  "),
        key_hint("Esc"),
        Span::raw(" Back to Movies  "),
        Span::styled(&app.status_msg, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(status_line), chunks[3]);
}

fn render_about(app: &App, movie: &MovieRecord, frame: &mut Frame, area: Rect) {
    let text = tui_markdown::from_str(&movie.long_description);
    let about = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" About the Movie ")
                .title_bottom(
                    Line::from(format!(" scroll: {} ", app.detail_scroll))
                        .alignment(Alignment::Right),
                ),
        );
    frame.render_widget(about, area);
}

fn render_not_found(frame: &mut Frame) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let message = Paragraph::new("Movie not found")
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(message, chunks[0]);

    let status_line = Line::from(vec![key_hint(" Esc"), Span::raw(" Back to Movies")]);
    frame.render_widget(Paragraph::new(status_line), chunks[1]);
}
