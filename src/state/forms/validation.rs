//! Field validators for the sign-in form

use regex::Regex;
use thiserror::Error;

/// Minimum password length used when nothing else is configured
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Inline validation failures. `Display` is the message shown under the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Your password must have at least {min} characters.")]
    PasswordTooShort { min: usize },
}

/// Check that `email` has a `local@domain.tld` shape with no whitespace
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let matches = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email));
    if matches {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Check that `password` has at least `min` characters (not bytes)
pub fn validate_password(password: &str, min: usize) -> Result<(), ValidationError> {
    if password.chars().count() >= min {
        Ok(())
    } else {
        Err(ValidationError::PasswordTooShort { min })
    }
}
