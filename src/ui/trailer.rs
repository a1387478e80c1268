use super::{centered_rect, key_hint};
use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Content rectangle of the trailer overlay; clicks outside it close the overlay.
pub fn area(viewport: Rect) -> Rect {
    centered_rect(80, 50, viewport)
}

pub fn render(app: &App, frame: &mut Frame) {
    let Some(movie) = app.current_movie() else {
        return;
    };
    let area = area(frame.area());

    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  ▶ Trailer",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                movie.trailer_url.as_str(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            key_hint("  o"),
            Span::raw(" Play in external player   "),
            key_hint("y"),
            Span::raw(" Copy link"),
        ]),
    ];

    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(format!(" {} Trailer ", movie.title))
                .title(Line::from(" [x] ").alignment(Alignment::Right))
                .title_bottom(
                    Line::from(" x/Esc or click outside to close ")
                        .style(Style::default().fg(Color::DarkGray)),
                ),
        );

    frame.render_widget(popup, area);
}
