//! Styling utilities and color helpers shared by the panels

use crate::theme::Theme;
use crate::types::HttpMethod;
use ratatui::style::{Color, Modifier, Style};

/// Spinner frames for an in-flight dispatch
pub const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Get the color for an HTTP method
pub fn method_color(method: HttpMethod) -> Color {
    match method {
        HttpMethod::Get => Color::Green,
        HttpMethod::Post => Color::Blue,
        HttpMethod::Put => Color::Yellow,
        HttpMethod::Delete => Color::Red,
    }
}

/// Border for a pane, highlighted when it has focus
pub fn border_style(focused: bool, theme: &Theme) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border)
    }
}

pub fn pane_style(theme: &Theme) -> Style {
    Style::default().bg(theme.background).fg(theme.foreground)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeRegistry;

    #[test]
    fn test_every_method_has_distinct_color() {
        let mut colors: Vec<String> = HttpMethod::ALL
            .iter()
            .map(|m| format!("{:?}", method_color(*m)))
            .collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), HttpMethod::ALL.len());
    }

    #[test]
    fn test_unfocused_border_uses_theme() {
        let registry = ThemeRegistry::builtin();
        let theme = registry.resolve("Monokai");
        assert_eq!(border_style(false, theme).fg, Some(theme.border));
        assert_eq!(border_style(true, theme).fg, Some(Color::Cyan));
    }
}
