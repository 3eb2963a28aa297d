//! Event handling for lazy-http-tui
//!
//! Keys are routed by input mode and focus:
//! - Theme picker open: the picker gets every key
//! - Global shortcuts: quit, send, method, theme picker, focus cycling
//! - Response pane focused: view selection, scrolling, copy
//! - An editor focused: text editing and clipboard
//!
//! Handlers return [`AppAction`]s; they are applied here through
//! [`apply_action`] so every state transition lives in `actions.rs`.

mod clipboard;
mod editing;
mod response;
mod theme_picker;

use crate::actions::{apply_action, AppAction};
use crate::state::AppState;
use crate::theme::ThemeRegistry;
use crate::types::{Focus, InputMode, ResponseState};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// What the UI loop has to do after a batch of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// The user asked to dispatch the current request
    pub send: bool,
}

#[derive(Debug, Default)]
pub struct EventHandler {
    pub should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll the terminal briefly and handle at most one event
    pub fn handle_events(
        &mut self,
        state: &mut AppState,
        response: &ResponseState,
        themes: &ThemeRegistry,
    ) -> Result<EventOutcome> {
        if !event::poll(Duration::from_millis(50))? {
            return Ok(EventOutcome::default());
        }

        let outcome = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key(key, state, response, themes)
            }
            Event::Paste(text) => {
                if !matches!(state.input_mode, InputMode::PickingTheme(_)) {
                    editing::handle_paste(state, &text);
                }
                EventOutcome::default()
            }
            _ => EventOutcome::default(),
        };

        Ok(outcome)
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        state: &mut AppState,
        response: &ResponseState,
        themes: &ThemeRegistry,
    ) -> EventOutcome {
        if let InputMode::PickingTheme(selected) = state.input_mode {
            if let Some(action) = theme_picker::handle_theme_picker_key(key, selected, themes) {
                if let AppAction::ApplyTheme(name) = &action {
                    tracing::info!(theme = %name, "theme changed");
                }
                apply_action(action, state);
            }
            return EventOutcome::default();
        }

        // The footer message only lives until the next key
        apply_action(AppAction::ClearStatus, state);

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') if ctrl => {
                self.should_quit = true;
            }
            KeyCode::Char('q') if state.focus == Focus::Response => {
                self.should_quit = true;
            }
            KeyCode::Char('s') if ctrl => return EventOutcome { send: true },
            KeyCode::F(5) => return EventOutcome { send: true },
            KeyCode::Char('n') if ctrl => apply_action(AppAction::CycleMethod, state),
            KeyCode::Char('t') if ctrl => {
                let current = themes.position(&state.theme_name).unwrap_or(0);
                apply_action(AppAction::OpenThemePicker { current }, state);
            }
            KeyCode::Tab => apply_action(AppAction::FocusNext, state),
            KeyCode::BackTab => apply_action(AppAction::FocusPrevious, state),

            _ if state.focus == Focus::Response => {
                if let Some(action) = response::handle_response_key(key, response, state.view) {
                    apply_action(action, state);
                }
            }
            _ => {
                if let Some(action) = editing::handle_editor_key(state, key) {
                    apply_action(action, state);
                }
            }
        }

        EventOutcome::default()
    }
}
