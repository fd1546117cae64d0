//! Sign-in form model: fields, validity flags and submit gate

use super::field::FormField;
use super::validation::{
    validate_email, validate_password, ValidationError, DEFAULT_MIN_PASSWORD_LENGTH,
};
use crate::report::{ReportError, ReportSink, SignInReport};
use tracing::{debug, info};

pub const EMAIL_FIELD: usize = 0;
pub const PASSWORD_FIELD: usize = 1;
pub const SUBMIT_BUTTON: usize = 2;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    /// Called with the index of the field focus is leaving
    fn blur(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.blur(current);
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.blur(current);
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The payload was handed to the sink
    Submitted,
    /// The submit control is disabled; nothing was reported
    Disabled,
}

/// Email/password form with per-field validity flags.
///
/// The submit control is enabled iff both flags are set. Flags start
/// false and no message is visible until the field is touched.
#[derive(Debug, Clone)]
pub struct SignInForm {
    pub email: FormField,
    pub password: FormField,
    is_email_valid: bool,
    is_password_valid: bool,
    min_password_length: usize,
    pub active_field_index: usize,
}

impl SignInForm {
    pub fn new() -> Self {
        Self::with_min_password_length(DEFAULT_MIN_PASSWORD_LENGTH)
    }

    /// Build a form with a stricter password minimum.
    /// Values below the default are raised to it.
    pub fn with_min_password_length(min: usize) -> Self {
        let min = min.max(DEFAULT_MIN_PASSWORD_LENGTH);
        Self {
            email: FormField::text("email", "Email").with_placeholder("you@example.com"),
            password: FormField::secret("password", "Password")
                .with_placeholder(format!("at least {min} characters")),
            is_email_valid: false,
            is_password_valid: false,
            min_password_length: min,
            active_field_index: EMAIL_FIELD,
        }
    }

    pub fn min_password_length(&self) -> usize {
        self.min_password_length
    }

    /// Store a new email value and recompute its validity
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email.set_text(value);
        self.revalidate_email();
    }

    /// Store a new password value and recompute its validity
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password.set_text(value);
        self.revalidate_password();
    }

    pub fn is_email_valid(&self) -> bool {
        self.is_email_valid
    }

    pub fn is_password_valid(&self) -> bool {
        self.is_password_valid
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.is_email_valid && self.is_password_valid
    }

    /// Returns true if the submit button has focus
    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON
    }

    /// The inline message for the email field, if one should be shown
    pub fn email_message(&self) -> Option<ValidationError> {
        if self.email.touched {
            validate_email(self.email.as_text()).err()
        } else {
            None
        }
    }

    /// The inline message for the password field, if one should be shown
    pub fn password_message(&self) -> Option<ValidationError> {
        if self.password.touched {
            validate_password(self.password.as_text(), self.min_password_length).err()
        } else {
            None
        }
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        match self.active_field_index {
            EMAIL_FIELD => {
                self.email.push_char(c);
                self.revalidate_email();
            }
            PASSWORD_FIELD => {
                self.password.push_char(c);
                self.revalidate_password();
            }
            _ => {}
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        match self.active_field_index {
            EMAIL_FIELD => {
                self.email.pop_char();
                self.revalidate_email();
            }
            PASSWORD_FIELD => {
                self.password.pop_char();
                self.revalidate_password();
            }
            _ => {}
        }
    }

    /// Clear the focused text field
    pub fn clear_active(&mut self) {
        match self.active_field_index {
            EMAIL_FIELD => {
                self.email.clear();
                self.revalidate_email();
            }
            PASSWORD_FIELD => {
                self.password.clear();
                self.revalidate_password();
            }
            _ => {}
        }
    }

    /// Append pasted text to the focused text field.
    ///
    /// Line breaks are dropped so a trailing newline from the clipboard
    /// does not poison the value.
    pub fn paste(&mut self, text: &str) {
        let text: String = text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
        match self.active_field_index {
            EMAIL_FIELD => self.set_email(format!("{}{text}", self.email.as_text())),
            PASSWORD_FIELD => self.set_password(format!("{}{text}", self.password.as_text())),
            _ => {}
        }
    }

    /// Move focus to `index`, blurring the field that had it
    pub fn focus(&mut self, index: usize) {
        let current = self.active_field_index;
        if current != index {
            self.blur(current);
            self.set_active_field(index);
        }
    }

    /// Return to the freshly mounted state
    pub fn reset(&mut self) {
        self.email.reset();
        self.password.reset();
        self.is_email_valid = false;
        self.is_password_valid = false;
        self.active_field_index = EMAIL_FIELD;
    }

    /// Snapshot of the current values in report shape
    pub fn to_report(&self) -> SignInReport {
        SignInReport {
            email: self.email.as_text().to_string(),
            password: self.password.as_text().to_string(),
        }
    }

    /// Hand the current `{email, password}` pair to `sink` if the form is valid.
    ///
    /// Does nothing and returns [`SubmitOutcome::Disabled`] otherwise.
    pub fn submit(&self, sink: &mut dyn ReportSink) -> Result<SubmitOutcome, ReportError> {
        if !self.can_submit() {
            debug!(
                email_valid = self.is_email_valid(),
                password_valid = self.is_password_valid(),
                "Submit ignored, form invalid"
            );
            return Ok(SubmitOutcome::Disabled);
        }

        sink.report(&self.to_report())?;
        info!("Sign-in form submitted");
        Ok(SubmitOutcome::Submitted)
    }

    fn revalidate_email(&mut self) {
        self.is_email_valid = validate_email(self.email.as_text()).is_ok();
    }

    fn revalidate_password(&mut self) {
        self.is_password_valid =
            validate_password(self.password.as_text(), self.min_password_length).is_ok();
    }
}

impl Default for SignInForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignInForm {
    fn field_count(&self) -> usize {
        3 // email, password, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON);
    }
    fn blur(&mut self, index: usize) {
        let field = match index {
            EMAIL_FIELD => &mut self.email,
            PASSWORD_FIELD => &mut self.password,
            _ => return,
        };
        field.mark_touched();
        debug!(field = %field.name, "Field blurred");
    }
}
