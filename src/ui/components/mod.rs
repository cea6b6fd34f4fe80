//! Reusable UI components

mod button;
mod dialog;
mod text;

pub use button::{render_action_button, render_sidebar_button, BUTTON_HEIGHT};
pub use dialog::{render_error_dialog, render_success_dialog};
pub use text::wrap_text;
