//! UI drawing module
//!
//! This module is organized into focused submodules:
//! - `components`: header and footer bars
//! - `highlight`: JSON / markup tokenizer for the response pane
//! - `modals`: theme picker
//! - `panels`: request editors and the response pane
//! - `styling`: method colors and shared styles

mod components;
mod highlight;
mod modals;
mod panels;
mod styling;

pub use panels::ResponseLines;

use crate::state::AppState;
use crate::theme::ThemeRegistry;
use crate::types::{InputMode, ResponseState};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use std::sync::Arc;

/// Dispatch progress shown in the header and response title
#[derive(Debug, Clone, Copy, Default)]
pub struct Activity {
    pub in_flight: usize,
    pub spinner_index: usize,
}

/// Draw one frame
pub fn render(
    frame: &mut Frame,
    state: &AppState,
    response: &Arc<ResponseState>,
    response_lines: &mut ResponseLines,
    themes: &ThemeRegistry,
    activity: Activity,
) {
    let theme = themes.resolve(&state.theme_name);

    // Header, Body, Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_chunks[1]);

    components::render_header(
        frame,
        main_chunks[0],
        state,
        activity.in_flight,
        activity.spinner_index,
    );

    panels::render_request_panel(frame, body_chunks[0], state, theme);

    let lines = response_lines.get(response, state.view, theme);
    panels::render_response_panel(
        frame,
        body_chunks[1],
        state,
        lines,
        activity.in_flight,
        theme,
    );

    components::render_footer(frame, main_chunks[2], state);

    // Modals go on top of everything else
    if let InputMode::PickingTheme(selected) = state.input_mode {
        modals::render_theme_picker(frame, themes, selected, theme.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Focus, FormattedView};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &AppState, response: &str) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let themes = ThemeRegistry::builtin();
        let response = Arc::new(ResponseState::new(response));
        let mut lines = ResponseLines::default();

        terminal
            .draw(|frame| {
                render(
                    frame,
                    state,
                    &response,
                    &mut lines,
                    &themes,
                    Activity::default(),
                )
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_frame_shows_request_and_response() {
        let state = AppState::default();
        let screen = draw(&state, "WELCOME!");

        assert!(screen.contains("GET"));
        assert!(screen.contains("www.baidu.com"));
        assert!(screen.contains("WELCOME!"));
        assert!(screen.contains("[2] Headers"));
        assert!(screen.contains("1 Raw"));
    }

    #[test]
    fn test_frame_renders_formatted_view() {
        let mut state = AppState::default();
        state.view = FormattedView::Json;
        state.focus = Focus::Response;
        let screen = draw(&state, "{\"name\":\"x\"}");

        assert!(screen.contains("\"name\": \"x\""));
    }

    #[test]
    fn test_theme_picker_drawn_on_top() {
        let mut state = AppState::default();
        state.input_mode = InputMode::PickingTheme(0);
        let screen = draw(&state, "");

        assert!(screen.contains("Theme"));
        assert!(screen.contains("SolarizedLight"));
        assert!(screen.contains("(current)"));
    }
}
