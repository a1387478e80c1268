use super::centered_rect;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

fn section(name: &str) -> Line<'_> {
    Line::from(Span::styled(
        format!("  {name}"),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn binding<'a>(keys: &'a str, action: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("    {keys:<10}"), Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ])
}

pub fn render(frame: &mut Frame) {
    let area = centered_rect(70, 80, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, area);

    let help_text = vec![
        Line::from(""),
        section("Global"),
        binding("?", "Toggle this help"),
        binding("Ctrl+C", "Quit application"),
        Line::from(""),
        section("Movie List"),
        binding("↑/k ↓/j", "Navigate up/down"),
        binding("g/G", "Jump to first/last movie"),
        binding("Enter", "Open movie details"),
        binding("f or /", "Filter by title and minimum rating"),
        binding("Esc", "Clear the filter"),
        binding("a", "Add a new movie"),
        binding("q", "Quit"),
        Line::from(""),
        section("Movie Details"),
        binding("t/Enter", "Watch trailer"),
        binding("↑/↓", "Scroll description"),
        binding("PgUp/PgDn", "Scroll page up/down"),
        binding("Esc/b", "Back to movies"),
        Line::from(""),
        section("Trailer"),
        binding("o", "Play in external player"),
        binding("y", "Copy trailer link to clipboard"),
        binding("x/Esc", "Close (or click outside)"),
        Line::from(""),
    ];

    let help = Paragraph::new(help_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help — Keybindings ")
                .title_bottom(Line::from(" Press any key to close ").style(Style::default().fg(Color::DarkGray))),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(help, area);
}
