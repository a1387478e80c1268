mod add_form;
mod detail;
mod filters;
mod help;
mod list;
pub mod trailer;

use crate::app::App;
use crate::route::Route;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
};

/// Top-level render dispatch.
pub fn render(app: &App, frame: &mut Frame) {
    match &app.route {
        Route::Catalog => list::render(app, frame),
        Route::Movie(_) => detail::render(app, frame),
    }

    if app.filter_overlay.is_open() {
        filters::render(app, frame);
    }
    if app.add_overlay.is_open() {
        add_form::render(app, frame);
    }
    if app.trailer.is_open() {
        trailer::render(app, frame);
    }

    // Render help overlay on top if active
    if app.help.is_open() {
        help::render(frame);
    }
}

/// Create a centered rectangle using percentage of parent area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Highlighted key hint for status bars.
fn key_hint(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )
}

/// Rating badge, e.g. `★ 4.8`.
fn rating_badge(rating: f64) -> Span<'static> {
    Span::styled(
        format!(" ★ {:.1} ", rating),
        Style::default()
            .bg(Color::Red)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}
