use crate::state::AppState;
use crate::types::{FormattedView, InputMode};

/// State changes that don't need the editors' key handling
///
/// Input handlers translate keys into these; the UI loop applies them
/// through [`apply_action`] so the transitions stay testable without a
/// terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Focus
    FocusNext,
    FocusPrevious,

    // Request
    CycleMethod,

    // Response pane
    SetView(FormattedView),
    NextView,
    PreviousView,
    ScrollUp(usize),
    ScrollDown(usize),
    ScrollTop,
    ResetResponseScroll,

    // Theme picker
    OpenThemePicker { current: usize },
    ThemePickerUp,
    ThemePickerDown { count: usize },
    ApplyTheme(String),
    CloseThemePicker,

    // Footer
    SetStatus(String),
    ClearStatus,
}

/// Apply an action to the application state
pub fn apply_action(action: AppAction, state: &mut AppState) {
    match action {
        AppAction::FocusNext => {
            if let Some(editor) = state.focused_editor() {
                editor.clear_selection();
            }
            state.focus = state.focus.next();
        }
        AppAction::FocusPrevious => {
            if let Some(editor) = state.focused_editor() {
                editor.clear_selection();
            }
            state.focus = state.focus.previous();
        }

        AppAction::CycleMethod => {
            state.method = state.method.next();
        }

        // Each view starts at the top
        AppAction::SetView(view) => {
            if state.view != view {
                state.view = view;
                state.response_scroll = 0;
            }
        }
        AppAction::NextView => {
            state.view = state.view.next();
            state.response_scroll = 0;
        }
        AppAction::PreviousView => {
            state.view = state.view.previous();
            state.response_scroll = 0;
        }
        AppAction::ScrollUp(lines) => {
            state.response_scroll = state.response_scroll.saturating_sub(lines);
        }
        AppAction::ScrollDown(lines) => {
            state.response_scroll = state.response_scroll.saturating_add(lines);
        }
        AppAction::ScrollTop | AppAction::ResetResponseScroll => {
            state.response_scroll = 0;
        }

        AppAction::OpenThemePicker { current } => {
            state.input_mode = InputMode::PickingTheme(current);
        }
        AppAction::ThemePickerUp => {
            if let InputMode::PickingTheme(index) = &mut state.input_mode {
                *index = index.saturating_sub(1);
            }
        }
        AppAction::ThemePickerDown { count } => {
            if let InputMode::PickingTheme(index) = &mut state.input_mode {
                if *index + 1 < count {
                    *index += 1;
                }
            }
        }
        AppAction::ApplyTheme(name) => {
            state.status = Some(format!("Theme: {name}"));
            state.theme_name = name;
            state.input_mode = InputMode::Normal;
        }
        AppAction::CloseThemePicker => {
            state.input_mode = InputMode::Normal;
        }

        AppAction::SetStatus(message) => {
            state.status = Some(message);
        }
        AppAction::ClearStatus => {
            state.status = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Focus, HttpMethod};

    fn create_test_state() -> AppState {
        AppState::default()
    }

    #[test]
    fn test_focus_cycle() {
        let mut state = create_test_state();
        assert_eq!(state.focus, Focus::Url);

        apply_action(AppAction::FocusNext, &mut state);
        assert_eq!(state.focus, Focus::Headers);

        apply_action(AppAction::FocusNext, &mut state);
        apply_action(AppAction::FocusNext, &mut state);
        assert_eq!(state.focus, Focus::Response);

        apply_action(AppAction::FocusNext, &mut state);
        assert_eq!(state.focus, Focus::Url);

        apply_action(AppAction::FocusPrevious, &mut state);
        assert_eq!(state.focus, Focus::Response);
    }

    #[test]
    fn test_leaving_editor_drops_selection() {
        let mut state = create_test_state();
        state.url.select_all();
        assert!(state.url.has_selection());

        apply_action(AppAction::FocusNext, &mut state);
        assert!(!state.url.has_selection());
    }

    #[test]
    fn test_cycle_method() {
        let mut state = create_test_state();
        apply_action(AppAction::CycleMethod, &mut state);
        assert_eq!(state.method, HttpMethod::Post);

        for _ in 0..3 {
            apply_action(AppAction::CycleMethod, &mut state);
        }
        assert_eq!(state.method, HttpMethod::Get);
    }

    #[test]
    fn test_view_change_resets_scroll() {
        let mut state = create_test_state();
        state.response_scroll = 12;

        apply_action(AppAction::SetView(FormattedView::Json), &mut state);
        assert_eq!(state.view, FormattedView::Json);
        assert_eq!(state.response_scroll, 0);

        state.response_scroll = 4;
        apply_action(AppAction::SetView(FormattedView::Json), &mut state);
        assert_eq!(state.response_scroll, 4);

        apply_action(AppAction::NextView, &mut state);
        assert_eq!(state.view, FormattedView::Xml);
        assert_eq!(state.response_scroll, 0);

        apply_action(AppAction::PreviousView, &mut state);
        apply_action(AppAction::PreviousView, &mut state);
        assert_eq!(state.view, FormattedView::Raw);
    }

    #[test]
    fn test_scroll_actions() {
        let mut state = create_test_state();
        state.response_scroll = 10;

        apply_action(AppAction::ScrollDown(5), &mut state);
        assert_eq!(state.response_scroll, 15);

        apply_action(AppAction::ScrollUp(1), &mut state);
        assert_eq!(state.response_scroll, 14);

        apply_action(AppAction::ScrollUp(50), &mut state);
        assert_eq!(state.response_scroll, 0);

        state.response_scroll = 8;
        apply_action(AppAction::ScrollTop, &mut state);
        assert_eq!(state.response_scroll, 0);
    }

    #[test]
    fn test_theme_picker_navigation() {
        let mut state = create_test_state();

        apply_action(AppAction::OpenThemePicker { current: 1 }, &mut state);
        assert_eq!(state.input_mode, InputMode::PickingTheme(1));

        apply_action(AppAction::ThemePickerUp, &mut state);
        apply_action(AppAction::ThemePickerUp, &mut state);
        assert_eq!(state.input_mode, InputMode::PickingTheme(0));

        for _ in 0..5 {
            apply_action(AppAction::ThemePickerDown { count: 3 }, &mut state);
        }
        assert_eq!(state.input_mode, InputMode::PickingTheme(2));

        apply_action(AppAction::CloseThemePicker, &mut state);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.theme_name, "DarkPlus");
    }

    #[test]
    fn test_apply_theme() {
        let mut state = create_test_state();
        apply_action(AppAction::OpenThemePicker { current: 0 }, &mut state);
        apply_action(AppAction::ApplyTheme("Monokai".to_string()), &mut state);

        assert_eq!(state.theme_name, "Monokai");
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.status.as_deref(), Some("Theme: Monokai"));
    }

    #[test]
    fn test_picker_moves_ignored_outside_picker() {
        let mut state = create_test_state();
        apply_action(AppAction::ThemePickerDown { count: 7 }, &mut state);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_status_actions() {
        let mut state = create_test_state();
        apply_action(AppAction::SetStatus("Copied".to_string()), &mut state);
        assert_eq!(state.status.as_deref(), Some("Copied"));

        apply_action(AppAction::ClearStatus, &mut state);
        assert!(state.status.is_none());
    }
}
