//! Application state definitions

use super::forms::RegistrationForm;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Register,
    Posts,
}

impl View {
    pub const ALL: [View; 2] = [View::Register, View::Posts];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Posts => "Posts",
        }
    }

    /// Function key that switches to this view
    pub fn hotkey(&self) -> &'static str {
        match self {
            Self::Register => "F1",
            Self::Posts => "F2",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: RegistrationForm,
    /// Selected post in the feed
    pub selected_index: usize,
    /// Queue of error messages shown as modal dialogs, oldest first
    error_queue: VecDeque<String>,
    /// Success notification shown as a modal dialog
    pub notification: Option<String>,
}

impl AppState {
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn show_notification(&mut self, message: String) {
        self.notification = Some(message);
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// True while any dialog captures input
    pub fn has_modal(&self) -> bool {
        self.has_errors() || self.notification.is_some()
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down within `total` items
    pub fn move_selection_down(&mut self, total: usize) {
        if self.selected_index + 1 < total {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside a list of `total` items
    pub fn clamp_selection(&mut self, total: usize) {
        self.selected_index = self.selected_index.min(total.saturating_sub(1));
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }
}
