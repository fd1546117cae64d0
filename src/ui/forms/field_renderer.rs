//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a field: bordered input plus one message line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a labeled input with its inline validation message underneath.
///
/// Returns the area of the input box (without the message line).
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    reveal: bool,
    message: Option<&str>,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_style = match (is_active, message.is_some()) {
        (_, true) => Style::default().fg(Color::Red),
        (true, false) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_empty() && !is_active {
        Paragraph::new(Span::styled(
            field.placeholder.as_str(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.display_value(reveal), style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), chunks[0]);

    if let Some(message) = message {
        let line = Paragraph::new(format!(" {message}")).style(Style::default().fg(Color::Red));
        frame.render_widget(line, chunks[1]);
    }

    chunks[0]
}

/// Draw a single line of key hints: `[(key, action), ...]`
pub fn draw_help_text(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
