//! Sign-in form rendering

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use crate::platform::{CLEAR_SHORTCUT, RESET_SHORTCUT, REVEAL_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{AppState, FormLayout, EMAIL_FIELD, PASSWORD_FIELD};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const FORM_WIDTH: u16 = 76;
const BUTTON_WIDTH: u16 = 13;
/// email + password + button + spacer + help + borders
const FORM_HEIGHT: u16 = FIELD_HEIGHT * 2 + BUTTON_HEIGHT + 1 + 1 + 2;

/// Label on the submit button
pub const SUBMIT_LABEL: &str = "Sign In";

/// Center a `width` x `height` box inside `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}

/// Draw the sign-in form and return where its controls landed
pub fn draw_sign_in(frame: &mut Frame, area: Rect, state: &AppState) -> FormLayout {
    let form = &state.form;
    let form_area = centered(area, FORM_WIDTH, FORM_HEIGHT);

    let block = Block::default()
        .title(" Sign In ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, form_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),                // Spacer
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(form_area);

    let email_message = form.email_message().map(|e| e.to_string());
    let email = draw_field(
        frame,
        chunks[0],
        &form.email,
        form.active_field_index == EMAIL_FIELD,
        true,
        email_message.as_deref(),
    );

    let password_message = form.password_message().map(|e| e.to_string());
    let password = draw_field(
        frame,
        chunks[1],
        &form.password,
        form.active_field_index == PASSWORD_FIELD,
        state.show_password,
        password_message.as_deref(),
    );

    let submit = Rect {
        width: BUTTON_WIDTH.min(chunks[2].width),
        ..chunks[2]
    };
    render_button(
        frame,
        submit,
        SUBMIT_LABEL,
        form.is_submit_focused(),
        form.can_submit(),
    );

    let reveal_action = if state.show_password {
        "mask"
    } else {
        "reveal"
    };
    let hints: Vec<(&str, &str)> = if form.is_submit_focused() {
        vec![("Enter", "sign in"), ("Tab", "next"), ("Esc Esc", "quit")]
    } else {
        vec![
            ("Tab", "next"),
            (SUBMIT_SHORTCUT, "sign in"),
            (REVEAL_SHORTCUT, reveal_action),
            (CLEAR_SHORTCUT, "clear"),
            (RESET_SHORTCUT, "reset"),
        ]
    };
    draw_help_text(frame, chunks[4], &hints);

    FormLayout {
        email,
        password,
        submit,
    }
}
