//! Key handling for the URL, headers and body editors

use super::clipboard;
use crate::actions::AppAction;
use crate::state::AppState;
use crate::types::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle a key aimed at the focused editor; returns the footer action to
/// apply afterwards, if any
pub fn handle_editor_key(state: &mut AppState, key: KeyEvent) -> Option<AppAction> {
    let focus = state.focus;
    let editor = state.focused_editor()?;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => {
            let text = editor.copy_text();
            let what = if editor.has_selection() { "selection" } else { "line" };
            Some(AppAction::SetStatus(clipboard::copy_status(
                clipboard::copy(&text),
                what,
            )))
        }
        KeyCode::Char('x') if ctrl => {
            let text = editor.copy_text();
            let result = clipboard::copy(&text);
            if result.is_ok() {
                editor.cut();
            }
            Some(AppAction::SetStatus(clipboard::copy_status(result, "and cut")))
        }
        KeyCode::Char('v') if ctrl => match clipboard::paste() {
            Ok(text) => {
                editor.insert_str_normalized(&text);
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard read failed");
                Some(AppAction::SetStatus(format!("Clipboard unavailable: {e}")))
            }
        },
        KeyCode::Char('f') if ctrl => {
            if focus != Focus::Body {
                return Some(AppAction::SetStatus(
                    "Formatting only applies to the body".to_string(),
                ));
            }
            match editor.format_json() {
                Ok(()) => Some(AppAction::SetStatus("Body formatted".to_string())),
                Err(e) => Some(AppAction::SetStatus(e)),
            }
        }
        _ => {
            editor.handle_key_event(key);
            None
        }
    }
}

/// Insert bracketed-paste text into the focused editor
pub fn handle_paste(state: &mut AppState, text: &str) -> bool {
    match state.focused_editor() {
        Some(editor) => {
            editor.insert_str_normalized(text);
            true
        }
        None => false,
    }
}
