//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::state::AppState;
use ratatui::Frame;

/// Main draw function. Records control positions for mouse handling.
pub fn draw(frame: &mut Frame, state: &mut AppState) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    state.layout = forms::draw_sign_in(frame, main_area, state);

    layout::draw_status_bar(frame, status_area, state);

    // Modal error dialog on top of everything
    if let Some(error) = state.current_error() {
        components::render_error_dialog(frame, error);
    }
}
