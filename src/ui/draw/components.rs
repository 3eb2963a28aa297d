//! Header and footer bars

use super::styling::{self, SPINNER};
use crate::config::display_host;
use crate::state::AppState;
use crate::types::{Focus, InputMode};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the application header: method, target host, dispatch status, theme
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    in_flight: usize,
    spinner_index: usize,
) {
    let host = display_host(state.url.content()).unwrap_or_else(|| "no host".to_string());

    let status = if in_flight > 0 {
        Span::styled(
            format!("{} Sending ({in_flight})", SPINNER[spinner_index % SPINNER.len()]),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled("Ready", Style::default().fg(Color::Green))
    };

    let header = Line::from(vec![
        Span::styled("lazy http tui ", Style::default().fg(Color::Cyan)),
        Span::styled(
            format!(" {} ", state.method),
            Style::default()
                .fg(Color::Black)
                .bg(styling::method_color(state.method))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {host} | ")),
        status,
        Span::styled(
            format!(" | Theme: {}", state.theme_name),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let widget = Paragraph::new(header).block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

/// Render the footer: the last status message, else key help for the focus
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let (text, color) = match &state.status {
        Some(message) => (message.clone(), Color::LightCyan),
        None => (help_text(state).to_string(), Color::Yellow),
    };

    let footer = Paragraph::new(text)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL).title("Commands"));

    frame.render_widget(footer, area);
}

fn help_text(state: &AppState) -> &'static str {
    if matches!(state.input_mode, InputMode::PickingTheme(_)) {
        return "j/k/↑/↓:Move Enter:Apply Esc:Cancel";
    }
    match state.focus {
        Focus::Response => {
            "1-4:View h/l:Cycle j/k:Scroll ^D/^U:Page g:Top y:Copy | Tab:Focus ^S:Send ^N:Method ^T:Theme q:Quit"
        }
        Focus::Body => {
            "^A:All ^C/^X/^V:Clipboard ^L:Clear ^F:Format | Tab:Focus ^S:Send ^N:Method ^T:Theme ^Q:Quit"
        }
        Focus::Url | Focus::Headers => {
            "^A:All ^C/^X/^V:Clipboard ^L:Clear | Tab:Focus ^S/F5:Send ^N:Method ^T:Theme ^Q:Quit"
        }
    }
}
