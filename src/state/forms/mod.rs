//! Form domain layer
//!
//! Type-safe form handling for the sign-in view: field values,
//! validators and the form model that gates submission.

mod field;
mod sign_in_form;
mod validation;

pub use field::FormField;
pub use sign_in_form::{
    Form, SignInForm, SubmitOutcome, EMAIL_FIELD, PASSWORD_FIELD, SUBMIT_BUTTON,
};
pub use validation::DEFAULT_MIN_PASSWORD_LENGTH;
