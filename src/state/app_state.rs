//! Application state definitions

use super::forms::SignInForm;
use crate::config::SignInConfig;
use ratatui::layout::Rect;
use std::collections::VecDeque;

/// Screen areas recorded during the last draw, used for mouse hit-testing
#[derive(Debug, Clone, Copy, Default)]
pub struct FormLayout {
    pub email: Rect,
    pub password: Rect,
    pub submit: Rect,
}

impl FormLayout {
    /// Which focus index (field or button) contains the given cell
    pub fn hit(&self, column: u16, row: u16) -> Option<usize> {
        use super::forms::{EMAIL_FIELD, PASSWORD_FIELD, SUBMIT_BUTTON};

        let contains = |r: &Rect| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        };
        if contains(&self.email) {
            Some(EMAIL_FIELD)
        } else if contains(&self.password) {
            Some(PASSWORD_FIELD)
        } else if contains(&self.submit) {
            Some(SUBMIT_BUTTON)
        } else {
            None
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: SignInForm,

    // UI state
    pub show_password: bool,
    pub status_message: Option<String>,
    /// Esc was pressed once; a second Esc quits
    pub quit_armed: bool,
    pub layout: FormLayout,

    // Modal error queue, front is displayed
    errors: VecDeque<String>,
}

impl AppState {
    /// Build the mount state from user configuration
    pub fn from_config(config: &SignInConfig) -> Self {
        let mut form = SignInForm::with_min_password_length(config.min_password_length());
        if let Some(email) = config.prefill_email.as_deref().filter(|e| !e.is_empty()) {
            form.set_email(email);
        }
        Self {
            form,
            show_password: config.show_password.unwrap_or(false),
            ..Default::default()
        }
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently on screen
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Drop the displayed error, revealing the next one if any
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }
}
