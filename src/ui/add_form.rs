use super::centered_rect;
use crate::app::App;
use crate::form::DraftField;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn render(app: &App, frame: &mut Frame) {
    let area = centered_rect(70, 90, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Add New Movie ")
        .title_bottom(
            Line::from(" Tab/Enter next  Shift+Tab prev  Ctrl+S add  Esc cancel ")
                .style(Style::default().fg(Color::DarkGray)),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = DraftField::ALL.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Min(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (field, chunk) in DraftField::ALL.iter().zip(chunks.iter()) {
        let focused = app.form.focus == *field;
        let value = app.form.value(*field);
        let text = if value.is_empty() {
            Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(value, Style::default().fg(Color::White))
        };
        let border = if app.form.error.as_ref().is_some_and(|e| e.field() == *field) {
            Style::default().fg(Color::Red)
        } else if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let input = Paragraph::new(Line::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" {} ", field.label())),
        );
        frame.render_widget(input, *chunk);

        if focused {
            let cursor_x = chunk.x + 1 + value.chars().count() as u16;
            frame.set_cursor_position((cursor_x.min(chunk.right().saturating_sub(2)), chunk.y + 1));
        }
    }

    if let Some(error) = &app.form.error {
        let message = Paragraph::new(format!(" {}", error)).style(Style::default().fg(Color::Red));
        frame.render_widget(message, chunks[DraftField::ALL.len()]);
    }
}
