//! Layout components (main area, status bar)

use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the main content area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.form;
    let mut spans = vec![];

    // Form readiness
    let readiness = if form.can_submit() {
        Span::styled(" ● ready ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ incomplete ", Style::default().fg(Color::Yellow))
    };
    spans.push(readiness);

    if let Some(msg) = &state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::White)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " Esc Esc/^C:quit ";
    let hint_width = (quit_hint.len() as u16).min(area.width);
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(hint_width),
        width: hint_width,
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
