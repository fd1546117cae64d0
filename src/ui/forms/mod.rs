//! Form rendering module
//!
//! - `field_renderer`: labeled inputs with inline validation messages
//! - `sign_in_form`: the sign-in page

mod field_renderer;
mod sign_in_form;

pub use sign_in_form::draw_sign_in;
