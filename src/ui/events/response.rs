//! Key handling while the response pane has focus

use super::clipboard;
use crate::actions::AppAction;
use crate::types::{FormattedView, ResponseState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Lines moved by Ctrl+D / Ctrl+U and PgDn / PgUp
pub const SCROLL_LINES_PER_ACTION: usize = 5;

/// Map a key to a response-pane action; `view` is needed for copying
pub fn handle_response_key(
    key: KeyEvent,
    response: &ResponseState,
    view: FormattedView,
) -> Option<AppAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let action = match key.code {
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            AppAction::SetView(FormattedView::ALL[index])
        }
        KeyCode::Char('l') | KeyCode::Right => AppAction::NextView,
        KeyCode::Char('h') | KeyCode::Left => AppAction::PreviousView,

        KeyCode::Char('d') if ctrl => AppAction::ScrollDown(SCROLL_LINES_PER_ACTION),
        KeyCode::Char('u') if ctrl => AppAction::ScrollUp(SCROLL_LINES_PER_ACTION),
        KeyCode::PageDown => AppAction::ScrollDown(SCROLL_LINES_PER_ACTION),
        KeyCode::PageUp => AppAction::ScrollUp(SCROLL_LINES_PER_ACTION),
        KeyCode::Char('j') | KeyCode::Down => AppAction::ScrollDown(1),
        KeyCode::Char('k') | KeyCode::Up => AppAction::ScrollUp(1),
        KeyCode::Char('g') | KeyCode::Home => AppAction::ScrollTop,

        KeyCode::Char('c') if ctrl => copy_view(response, view),
        KeyCode::Char('y') => copy_view(response, view),

        _ => return None,
    };

    Some(action)
}

fn copy_view(response: &ResponseState, view: FormattedView) -> AppAction {
    let text = view.render(&response.raw_text);
    let what = format!("{} view", view.title());
    AppAction::SetStatus(clipboard::copy_status(clipboard::copy(&text), &what))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn handle(key: KeyEvent) -> Option<AppAction> {
        handle_response_key(key, &ResponseState::default(), FormattedView::Raw)
    }

    #[test]
    fn test_number_keys_pick_views() {
        assert_eq!(
            handle(key(KeyCode::Char('1'))),
            Some(AppAction::SetView(FormattedView::Raw))
        );
        assert_eq!(
            handle(key(KeyCode::Char('4'))),
            Some(AppAction::SetView(FormattedView::Html))
        );
        assert_eq!(handle(key(KeyCode::Char('5'))), None);
    }

    #[test]
    fn test_view_cycling_keys() {
        assert_eq!(handle(key(KeyCode::Char('l'))), Some(AppAction::NextView));
        assert_eq!(handle(key(KeyCode::Right)), Some(AppAction::NextView));
        assert_eq!(handle(key(KeyCode::Char('h'))), Some(AppAction::PreviousView));
    }

    #[test]
    fn test_scroll_keys() {
        assert_eq!(handle(key(KeyCode::Char('j'))), Some(AppAction::ScrollDown(1)));
        assert_eq!(handle(key(KeyCode::Up)), Some(AppAction::ScrollUp(1)));
        assert_eq!(
            handle(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            Some(AppAction::ScrollDown(SCROLL_LINES_PER_ACTION))
        );
        assert_eq!(
            handle(key(KeyCode::PageUp)),
            Some(AppAction::ScrollUp(SCROLL_LINES_PER_ACTION))
        );
        assert_eq!(handle(key(KeyCode::Char('g'))), Some(AppAction::ScrollTop));
    }

    #[test]
    fn test_copy_always_reports_status() {
        assert!(matches!(
            handle(key(KeyCode::Char('y'))),
            Some(AppAction::SetStatus(_))
        ));
    }
}
