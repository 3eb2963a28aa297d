//! Modal dialog rendering

use crate::theme::{Theme, ThemeRegistry};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the theme picker with a color swatch per entry
pub fn render_theme_picker(
    frame: &mut Frame,
    themes: &ThemeRegistry,
    selected: usize,
    active_theme: &str,
) {
    let area = frame.area();

    let modal_width = (area.width as f32 * 0.5).clamp(30.0, 50.0) as u16;
    let modal_height = (themes.len() as u16 + 4).min(area.height);
    let modal_area = Rect {
        x: area.width.saturating_sub(modal_width) / 2,
        y: area.height.saturating_sub(modal_height) / 2,
        width: modal_width.min(area.width),
        height: modal_height,
    };

    // Clear the background behind the modal
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(" Theme ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(Color::Rgb(30, 30, 30)).fg(Color::White));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let items: Vec<Line> = (0..themes.len())
        .filter_map(|i| themes.by_index(i))
        .enumerate()
        .map(|(i, theme)| theme_line(theme, i == selected, theme.name == active_theme))
        .collect();
    frame.render_widget(Paragraph::new(items), chunks[0]);

    let help = Paragraph::new("Enter: Apply  |  Esc: Cancel")
        .style(Style::default().fg(Color::Rgb(150, 150, 150)))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[1]);
}

fn theme_line(theme: &Theme, highlighted: bool, active: bool) -> Line<'static> {
    let marker = if highlighted { "> " } else { "  " };
    let name_style = if highlighted {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![
        Span::styled(marker, name_style),
        Span::styled(format!("{:<16}", theme.name), name_style),
    ];
    for color in [theme.key, theme.string, theme.number, theme.keyword] {
        spans.push(Span::styled("██", Style::default().fg(color).bg(theme.background)));
    }
    if active {
        spans.push(Span::styled(" (current)", Style::default().fg(Color::DarkGray)));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_line_marks_highlight_and_current() {
        let registry = ThemeRegistry::builtin();
        let theme = registry.resolve("Monokai");

        let line = theme_line(theme, true, true);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with("> Monokai"));
        assert!(text.ends_with("(current)"));

        let line = theme_line(theme, false, false);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with("  Monokai"));
        assert!(!text.contains("current"));
    }
}
