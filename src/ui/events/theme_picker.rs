//! Theme picker modal input

use crate::actions::AppAction;
use crate::theme::ThemeRegistry;
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_theme_picker_key(
    key: KeyEvent,
    selected: usize,
    themes: &ThemeRegistry,
) -> Option<AppAction> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(AppAction::ThemePickerDown {
            count: themes.len(),
        }),
        KeyCode::Char('k') | KeyCode::Up => Some(AppAction::ThemePickerUp),
        KeyCode::Enter => themes
            .by_index(selected)
            .map(|theme| AppAction::ApplyTheme(theme.name.to_string())),
        KeyCode::Esc | KeyCode::Char('q') => Some(AppAction::CloseThemePicker),
        _ => None,
    }
}
