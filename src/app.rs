//! Application state and core logic

use crate::config::SignInConfig;
use crate::report::ReportSink;
use crate::state::{AppState, Form, SubmitOutcome, SUBMIT_BUTTON};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Receives submitted sign-in data
    sink: Box<dyn ReportSink>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &SignInConfig, sink: Box<dyn ReportSink>) -> Self {
        Self {
            state: AppState::from_config(config),
            sink,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Double Esc quits
        if key.code == KeyCode::Esc {
            if self.state.quit_armed {
                self.quit = true;
            } else {
                self.state.quit_armed = true;
                self.state.status_message = Some("Press Esc again to quit".to_string());
            }
            return Ok(());
        }
        self.state.quit_armed = false;

        // Clear any status messages on key press
        self.state.status_message = None;

        let on_button = self.state.form.is_submit_focused();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('u') if ctrl => self.state.form.clear_active(),
            KeyCode::Char('n') if ctrl => {
                self.state.form.reset();
                self.state.status_message = Some("Form reset".to_string());
            }
            KeyCode::Char('r') if key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER) => {
                self.state.toggle_show_password();
            }
            KeyCode::Enter if on_button => self.submit(),
            // Enter in a field moves on, like Tab
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Char(' ') if on_button => self.submit(),
            KeyCode::Char(c)
                if !ctrl && !key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER) =>
            {
                self.state.form.input_char(c);
            }
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle bracketed paste into the focused field
    pub fn handle_paste(&mut self, text: &str) -> Result<()> {
        if self.state.has_errors() {
            return Ok(());
        }
        self.state.quit_armed = false;
        self.state.status_message = None;
        self.state.form.paste(text);
        Ok(())
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_errors() {
            return Ok(());
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(index) = self.state.layout.hit(mouse.column, mouse.row) {
                self.state.quit_armed = false;
                self.state.status_message = None;
                self.state.form.focus(index);
                if index == SUBMIT_BUTTON {
                    self.submit();
                }
            }
        }
        Ok(())
    }

    /// Submit the form through the report sink
    fn submit(&mut self) {
        match self.state.form.submit(self.sink.as_mut()) {
            Ok(SubmitOutcome::Submitted) => {
                self.state.status_message = Some("Sign In submitted".to_string());
            }
            Ok(SubmitOutcome::Disabled) => {
                self.state.status_message =
                    Some("Fix the highlighted fields to sign in".to_string());
            }
            Err(e) => {
                self.state.push_error(format!("Failed to submit: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{MockReportSink, ReportError, SignInReport};
    use crate::state::{FormLayout, EMAIL_FIELD, PASSWORD_FIELD};
    use mockall::predicate::eq;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn app_with(sink: MockReportSink) -> App {
        App::new(&SignInConfig::default(), Box::new(sink))
    }

    fn idle_sink() -> MockReportSink {
        let mut sink = MockReportSink::new();
        sink.expect_report().never();
        sink
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn fill_valid(app: &mut App) {
        type_str(app, "test@example.com");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_str(app, "password123");
    }

    mod typing {
        use super::*;

        #[test]
        fn test_keystrokes_update_fields() {
            let mut app = app_with(idle_sink());
            fill_valid(&mut app);
            assert_eq!(app.state.form.email.as_text(), "test@example.com");
            assert_eq!(app.state.form.password.as_text(), "password123");
            assert!(app.state.form.can_submit());
        }

        #[test]
        fn test_uppercase_is_kept() {
            let mut app = app_with(idle_sink());
            app.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT))
                .unwrap();
            assert_eq!(app.state.form.email.as_text(), "A");
        }

        #[test]
        fn test_backspace_and_clear() {
            let mut app = app_with(idle_sink());
            type_str(&mut app, "abc");
            app.handle_key(key(KeyCode::Backspace)).unwrap();
            assert_eq!(app.state.form.email.as_text(), "ab");
            app.handle_key(ctrl('u')).unwrap();
            assert!(app.state.form.email.is_empty());
        }

        #[test]
        fn test_ctrl_n_resets_form() {
            let mut app = app_with(idle_sink());
            fill_valid(&mut app);
            app.handle_key(ctrl('n')).unwrap();
            assert!(app.state.form.email.is_empty());
            assert!(app.state.form.password.is_empty());
            assert!(!app.state.form.can_submit());
            assert!(app.state.form.email_message().is_none());
            assert_eq!(app.state.status_message.as_deref(), Some("Form reset"));
        }

        #[test]
        fn test_ctrl_chars_do_not_type() {
            let mut app = app_with(idle_sink());
            app.handle_key(ctrl('x')).unwrap();
            assert!(app.state.form.email.is_empty());
        }

        #[test]
        fn test_enter_in_field_moves_focus() {
            let mut app = app_with(idle_sink());
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.form.active_field_index, PASSWORD_FIELD);
            assert!(app.state.form.email_message().is_some());
        }

        #[test]
        fn test_up_down_move_focus() {
            let mut app = app_with(idle_sink());
            app.handle_key(key(KeyCode::Down)).unwrap();
            assert_eq!(app.state.form.active_field_index, PASSWORD_FIELD);
            app.handle_key(key(KeyCode::Up)).unwrap();
            assert_eq!(app.state.form.active_field_index, EMAIL_FIELD);
        }

        #[test]
        fn test_reveal_toggle() {
            let mut app = app_with(idle_sink());
            let reveal = KeyEvent::new(KeyCode::Char('r'), crate::platform::SHORTCUT_MODIFIER);
            app.handle_key(reveal).unwrap();
            assert!(app.state.show_password);
            assert!(app.state.form.email.is_empty());
        }
    }

    mod submitting {
        use super::*;

        #[test]
        fn test_ctrl_s_reports_pair() {
            let mut sink = MockReportSink::new();
            sink.expect_report()
                .with(eq(SignInReport {
                    email: "test@example.com".to_string(),
                    password: "password123".to_string(),
                }))
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(sink);
            fill_valid(&mut app);

            app.handle_key(ctrl('s')).unwrap();
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Sign In submitted")
            );
        }

        #[test]
        fn test_enter_on_button_submits() {
            let mut sink = MockReportSink::new();
            sink.expect_report().times(1).returning(|_| Ok(()));
            let mut app = app_with(sink);
            fill_valid(&mut app);

            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert!(app.state.form.is_submit_focused());
            app.handle_key(key(KeyCode::Enter)).unwrap();
        }

        #[test]
        fn test_invalid_form_does_not_report() {
            let mut app = app_with(idle_sink());
            type_str(&mut app, "invalid-email");
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_str(&mut app, "short");

            app.handle_key(ctrl('s')).unwrap();
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Fix the highlighted fields to sign in")
            );
        }

        #[test]
        fn test_sink_error_opens_dialog() {
            let mut sink = MockReportSink::new();
            sink.expect_report()
                .returning(|_| Err(ReportError::Rejected("closed".to_string())));
            let mut app = app_with(sink);
            fill_valid(&mut app);

            app.handle_key(ctrl('s')).unwrap();
            assert_eq!(
                app.state.current_error(),
                Some("Failed to submit: report sink rejected submission: closed")
            );

            // Typing is blocked while the dialog is up
            app.handle_key(key(KeyCode::Char('x'))).unwrap();
            assert_eq!(app.state.form.password.as_text(), "password123");

            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(!app.state.has_errors());
        }
    }

    mod paste {
        use super::*;

        #[test]
        fn test_paste_into_focused_field() {
            let mut app = app_with(idle_sink());
            app.handle_paste("test@example.com").unwrap();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            app.handle_paste("password123\n").unwrap();
            assert!(app.state.form.can_submit());
        }

        #[test]
        fn test_paste_blocked_by_dialog() {
            let mut app = app_with(idle_sink());
            app.state.push_error("boom".to_string());
            app.handle_paste("x").unwrap();
            assert!(app.state.form.email.is_empty());
        }
    }

    mod quitting {
        use super::*;

        #[test]
        fn test_should_quit_initially_false() {
            let app = app_with(idle_sink());
            assert!(!app.should_quit());
        }

        #[test]
        fn test_double_esc_quits() {
            let mut app = app_with(idle_sink());
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(!app.should_quit());
            assert!(app.state.quit_armed);
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_other_key_disarms_quit() {
            let mut app = app_with(idle_sink());
            app.handle_key(key(KeyCode::Esc)).unwrap();
            app.handle_key(key(KeyCode::Char('a'))).unwrap();
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(!app.should_quit());
        }

        #[test]
        fn test_esc_dismisses_error_before_quitting() {
            let mut app = app_with(idle_sink());
            app.state.push_error("boom".to_string());
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(!app.state.has_errors());
            assert!(!app.state.quit_armed);
        }
    }

    mod mouse {
        use super::*;

        fn with_layout(app: &mut App) {
            app.state.layout = FormLayout {
                email: Rect::new(0, 0, 20, 3),
                password: Rect::new(0, 4, 20, 3),
                submit: Rect::new(0, 8, 12, 3),
            };
        }

        #[test]
        fn test_click_focuses_field_and_blurs_previous() {
            let mut app = app_with(idle_sink());
            with_layout(&mut app);
            app.handle_mouse(click(3, 5)).unwrap();
            assert_eq!(app.state.form.active_field_index, PASSWORD_FIELD);
            assert!(app.state.form.email_message().is_some());
        }

        #[test]
        fn test_click_button_submits() {
            let mut sink = MockReportSink::new();
            sink.expect_report().times(1).returning(|_| Ok(()));
            let mut app = app_with(sink);
            with_layout(&mut app);
            fill_valid(&mut app);

            app.handle_mouse(click(2, 9)).unwrap();
            assert!(app.state.form.is_submit_focused());
        }

        #[test]
        fn test_click_outside_does_nothing() {
            let mut app = app_with(idle_sink());
            with_layout(&mut app);
            app.handle_mouse(click(50, 50)).unwrap();
            assert_eq!(app.state.form.active_field_index, EMAIL_FIELD);
        }
    }
}
