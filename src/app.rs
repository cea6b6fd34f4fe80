//! Application state and core logic

use crate::config::TuiConfig;
use crate::feed::{FeedLoader, Post, PostSource, WpClient};
use crate::state::{AppState, Form, SubmitOutcome, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Post feed, fetched once at startup
    pub feed: FeedLoader,
    /// Loaded user configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App instance and start loading the feed
    pub fn new(config: TuiConfig) -> Result<Self> {
        let client = WpClient::new(config.api_base(), config.request_timeout())?;
        tracing::info!("Loading posts from {}", client.endpoint());
        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Create an App that reads posts from `source`
    pub fn with_source(config: TuiConfig, source: Arc<dyn PostSource>) -> Self {
        Self {
            state: AppState::default(),
            feed: FeedLoader::spawn(source),
            config,
            quit: false,
            copy_message: None,
        }
    }

    /// Per-frame housekeeping: pick up a finished feed fetch
    pub fn tick(&mut self) {
        if self.feed.poll() {
            let total = self.feed.state().posts().len();
            self.state.clamp_selection(total);
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Switch to another view
    pub fn navigate(&mut self, view: View) {
        if self.state.current_view != view {
            self.copy_message = None;
            self.state.current_view = view;
        }
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

        if self.state.notification.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notification();
            }
            return Ok(());
        }

        match key.code {
            KeyCode::F(1) => {
                self.navigate(View::Register);
                return Ok(());
            }
            KeyCode::F(2) => {
                self.navigate(View::Posts);
                return Ok(());
            }
            _ => {}
        }

        match self.state.current_view {
            View::Register => self.handle_register_key(key),
            View::Posts => self.handle_posts_key(key),
        }
    }

    fn has_command_modifier(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(crate::platform::COPY_MODIFIER)
    }

    /// Handle keys in Register view
    fn handle_register_key(&mut self, key: KeyEvent) -> Result<()> {
        let command = Self::has_command_modifier(&key);

        match key.code {
            KeyCode::Char('s') if command => self.submit_form(),
            KeyCode::Char('r') if command => self.toggle_active_visibility(),
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter if self.state.form.is_submit_row_active() => self.submit_form(),
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Char(c) if !command && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.state.form.input_char(c);
            }
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Submit the registration form and surface the outcome
    fn submit_form(&mut self) {
        match self.state.form.submit() {
            SubmitOutcome::Accepted(confirmation) => {
                self.state.form.set_active_field(0);
                self.state.show_notification(confirmation.message());
            }
            SubmitOutcome::Rejected => {
                // focus the first field that needs fixing
                if let Some(field) = self.state.form.errors.failing_fields().first() {
                    self.state.form.set_active_field(field.index());
                }
            }
        }
    }

    /// Toggle reveal on the focused password field
    fn toggle_active_visibility(&mut self) {
        if let Some(field) = self.state.form.active_input() {
            self.state.form.toggle_visibility(field);
        }
    }

    /// Handle keys in Posts view
    fn handle_posts_key(&mut self, key: KeyEvent) -> Result<()> {
        let total = self.feed.state().posts().len();

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(total),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Home | KeyCode::Char('g') => self.state.reset_selection(),
            KeyCode::End | KeyCode::Char('G') => {
                self.state.selected_index = total.saturating_sub(1);
            }
            KeyCode::Char('y') => {
                if let Some(link) = self.selected_post().map(|p| p.link.clone()) {
                    match self.copy_to_clipboard(&link) {
                        Ok(()) => self.copy_message = Some("Copied link".to_string()),
                        Err(e) => self.push_error(format!("Failed to copy link: {e}")),
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// The post under the cursor, if the feed has loaded
    pub fn selected_post(&self) -> Option<&Post> {
        self.feed.state().posts().get(self.state.selected_index)
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
