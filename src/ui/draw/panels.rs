//! Main panels: the request editors on the left, the response on the right

use super::highlight::highlight;
use super::styling;
use crate::editor::TextEditor;
use crate::state::AppState;
use crate::theme::Theme;
use crate::types::{Focus, FormattedView, InputMode, ResponseState};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::sync::Arc;

/// Highlighted lines for the last drawn response, rebuilt only when the
/// snapshot, the view or the theme changes
#[derive(Debug, Default)]
pub struct ResponseLines {
    source: Option<Arc<ResponseState>>,
    view: FormattedView,
    theme: &'static str,
    lines: Vec<Line<'static>>,
}

impl ResponseLines {
    pub fn get(
        &mut self,
        response: &Arc<ResponseState>,
        view: FormattedView,
        theme: &Theme,
    ) -> &[Line<'static>] {
        let fresh = self
            .source
            .as_ref()
            .is_some_and(|s| Arc::ptr_eq(s, response))
            && self.view == view
            && self.theme == theme.name;

        if !fresh {
            let text = view.render(&response.raw_text);
            self.lines = highlight(&text, view, theme);
            self.source = Some(Arc::clone(response));
            self.view = view;
            self.theme = theme.name;
        }

        &self.lines
    }
}

/// Render the URL, headers and body editors stacked vertically
pub fn render_request_panel(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // URL
            Constraint::Percentage(35), // Headers
            Constraint::Min(3),         // Body
        ])
        .split(area);

    let body_title = if state.method.supports_body() {
        "[3] Body".to_string()
    } else {
        format!("[3] Body (not sent with {})", state.method)
    };

    let editors = [
        (&state.url, Focus::Url, "[1] URL".to_string(), chunks[0]),
        (&state.headers, Focus::Headers, "[2] Headers".to_string(), chunks[1]),
        (&state.body, Focus::Body, body_title, chunks[2]),
    ];

    for (editor, focus, title, area) in editors {
        let focused = state.focus == focus && state.input_mode == InputMode::Normal;
        render_editor(frame, area, editor, &title, focused, theme);
    }
}

fn render_editor(
    frame: &mut Frame,
    area: Rect,
    editor: &TextEditor,
    title: &str,
    focused: bool,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::border_style(focused, theme))
        .title(title.to_string());
    let inner = block.inner(area);

    let (line, column) = editor.cursor_line_col();
    let scroll_y = line.saturating_sub(inner.height.saturating_sub(1) as usize);
    let scroll_x = column.saturating_sub(inner.width.saturating_sub(1) as usize);

    let text_style = if editor.has_selection() {
        styling::pane_style(theme).bg(theme.selection)
    } else {
        styling::pane_style(theme)
    };

    let lines: Vec<Line> = editor
        .content()
        .split('\n')
        .map(|l| Line::from(Span::styled(l, text_style)))
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(styling::pane_style(theme))
        .block(block)
        .scroll((clamp_offset(scroll_y), clamp_offset(scroll_x)));
    frame.render_widget(paragraph, area);

    if focused {
        frame.set_cursor_position((
            inner.x + (column - scroll_x) as u16,
            inner.y + (line - scroll_y) as u16,
        ));
    }
}

/// Render the response pane: view tabs on top, highlighted text below
pub fn render_response_panel(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    lines: &[Line<'static>],
    in_flight: usize,
    theme: &Theme,
) {
    let focused = state.focus == Focus::Response && state.input_mode == InputMode::Normal;
    let title = if in_flight > 0 {
        "[4] Response (...)"
    } else {
        "[4] Response"
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::border_style(focused, theme))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    render_view_tabs(frame, chunks[0], state.view);

    // Skip to the scroll position here; the paragraph's own offset is only u16
    let scroll = state.response_scroll.min(lines.len().saturating_sub(1));
    let gutter = lines.len().to_string().len();
    let numbered: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll)
        .take(chunks[1].height as usize)
        .map(|(i, line)| {
            let mut spans = vec![Span::styled(
                format!("{:>gutter$} ", i + 1),
                Style::default().fg(theme.line_number),
            )];
            spans.extend(line.spans.iter().cloned());
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(numbered).style(styling::pane_style(theme));
    frame.render_widget(paragraph, chunks[1]);
}

fn clamp_offset(offset: usize) -> u16 {
    u16::try_from(offset).unwrap_or(u16::MAX)
}

/// Render the tab bar showing [ Raw ] [ JSON ] [ XML ] [ HTML ]
fn render_view_tabs(frame: &mut Frame, area: Rect, active: FormattedView) {
    let mut spans = Vec::new();
    for view in FormattedView::ALL {
        let style = if view == active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled("[ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("{} {}", view.index() + 1, view.title()),
            style,
        ));
        spans.push(Span::styled(" ] ", Style::default().fg(Color::DarkGray)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeRegistry;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw_response(state: &AppState, lines: &[Line<'static>]) -> String {
        let registry = ThemeRegistry::builtin();
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        terminal
            .draw(|frame| {
                render_response_panel(
                    frame,
                    frame.area(),
                    state,
                    lines,
                    0,
                    registry.resolve("DarkPlus"),
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
    fn test_response_scroll_past_u16_range() {
        let lines: Vec<Line<'static>> = (0..70_000)
            .map(|i| Line::from(format!("row {i}")))
            .collect();
        let mut state = AppState::default();
        state.response_scroll = 69_999;

        let screen = draw_response(&state, &lines);
        assert!(screen.contains("70000 row 69999"));
        assert!(!screen.contains("row 4463"));
    }

    #[test]
    fn test_response_scroll_clamped_to_last_line() {
        let lines = vec![Line::from("first"), Line::from("second")];
        let mut state = AppState::default();
        state.response_scroll = 500;

        let screen = draw_response(&state, &lines);
        assert!(screen.contains("2 second"));
        assert!(!screen.contains("first"));
    }

    #[test]
    fn test_clamp_offset_saturates() {
        assert_eq!(clamp_offset(12), 12);
        assert_eq!(clamp_offset(70_000), u16::MAX);
    }

    #[test]
    fn test_response_lines_cached_per_snapshot() {
        let registry = ThemeRegistry::builtin();
        let theme = registry.resolve("DarkPlus");
        let mut cache = ResponseLines::default();

        let first = Arc::new(ResponseState::new("{\"a\":1}"));
        assert_eq!(cache.get(&first, FormattedView::Json, theme).len(), 3);
        assert_eq!(cache.get(&first, FormattedView::Raw, theme).len(), 1);

        let second = Arc::new(ResponseState::new("a\nb"));
        assert_eq!(cache.get(&second, FormattedView::Raw, theme).len(), 2);
    }

    #[test]
    fn test_response_lines_follow_theme() {
        let registry = ThemeRegistry::builtin();
        let mut cache = ResponseLines::default();
        let response = Arc::new(ResponseState::new("plain"));

        let dark = cache.get(&response, FormattedView::Raw, registry.resolve("DarkPlus"))[0]
            .spans[0]
            .style
            .fg;
        let light = cache.get(&response, FormattedView::Raw, registry.resolve("LightPlus"))[0]
            .spans[0]
            .style
            .fg;
        assert_ne!(dark, light);
    }
}
