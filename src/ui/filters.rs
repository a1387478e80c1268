use super::centered_rect;
use crate::app::{App, FilterField};
use crate::filter::MAX_RATING;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, LineGauge, Paragraph},
};

pub fn render(app: &App, frame: &mut Frame) {
    let area = centered_rect(60, 40, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Filter Movies ")
        .title_bottom(
            Line::from(" Tab switch  ←/→ rating  Del reset  Enter/Esc close ")
                .style(Style::default().fg(Color::DarkGray)),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    let focus_style = |field: FilterField| {
        if app.filter_focus == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    // ── Title search ──
    let title_text = if app.filter.title.is_empty() {
        Span::styled("Search by title...", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(app.filter.title.as_str(), Style::default().fg(Color::White))
    };
    let title_input = Paragraph::new(Line::from(title_text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(FilterField::Title))
            .title(" Title "),
    );
    frame.render_widget(title_input, chunks[0]);

    if app.filter_focus == FilterField::Title {
        let cursor_x = chunks[0].x + 1 + app.filter.title.chars().count() as u16;
        frame.set_cursor_position((cursor_x.min(chunks[0].right().saturating_sub(2)), chunks[0].y + 1));
    }

    // ── Minimum rating ──
    let rating_gauge = LineGauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(FilterField::Rating))
                .title(" Minimum Rating "),
        )
        .filled_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .label(format!("{:.1} ★ ", app.filter.min_rating))
        .ratio(app.filter.min_rating / MAX_RATING);
    frame.render_widget(rating_gauge, chunks[1]);

    let summary = Paragraph::new(format!(
        " {} of {} movies match",
        app.visible().len(),
        app.catalog.len()
    ))
    .style(Style::default().fg(Color::Gray));
    frame.render_widget(summary, chunks[2]);
}
