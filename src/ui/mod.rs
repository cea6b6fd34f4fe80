//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod posts;

use crate::app::App;
use crate::state::View;
use components::{render_error_dialog, render_success_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Register => forms::draw_registration(frame, main_area, app),
        View::Posts => posts::draw(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Modal dialogs on top, errors first
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    } else if let Some(message) = &app.state.notification {
        render_success_dialog(frame, message);
    }
}
