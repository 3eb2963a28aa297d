//! Syntax highlighting for the response pane
//!
//! A line-oriented tokenizer, not a parser: it only has to color text that
//! the formatter already produced (or raw text that looks similar).

use crate::format::{INVALID_JSON, INVALID_XML};
use crate::theme::Theme;
use crate::types::FormattedView;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Syntax {
    Json,
    Markup,
    Plain,
}

/// Pick the tokenizer for text rendered in `view`
pub fn detect_syntax(text: &str, view: FormattedView) -> Syntax {
    if text == INVALID_JSON || text == INVALID_XML {
        return Syntax::Plain;
    }
    match view {
        FormattedView::Json => Syntax::Json,
        FormattedView::Xml | FormattedView::Html => Syntax::Markup,
        FormattedView::Raw => {
            let trimmed = text.trim_start();
            if trimmed.starts_with('{') || trimmed.starts_with('[') {
                Syntax::Json
            } else if trimmed.starts_with('<') {
                Syntax::Markup
            } else {
                Syntax::Plain
            }
        }
    }
}

/// Themed lines for `text` as shown in `view`
pub fn highlight(text: &str, view: FormattedView, theme: &Theme) -> Vec<Line<'static>> {
    highlight_as(text, detect_syntax(text, view), theme)
}

pub fn highlight_as(text: &str, syntax: Syntax, theme: &Theme) -> Vec<Line<'static>> {
    match syntax {
        Syntax::Json => text.lines().map(|l| json_line(l, theme)).collect(),
        Syntax::Markup => {
            let mut in_comment = false;
            text.lines()
                .map(|l| markup_line(l, theme, &mut in_comment))
                .collect()
        }
        Syntax::Plain => text
            .lines()
            .map(|l| {
                Line::from(Span::styled(
                    l.to_string(),
                    Style::default().fg(theme.foreground),
                ))
            })
            .collect(),
    }
}

fn json_line(line: &str, theme: &Theme) -> Line<'static> {
    let chars: Vec<char> = line.chars().collect();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '"' => {
                let start = i;
                i += 1;
                while i < chars.len() {
                    match chars[i] {
                        '\\' => i += 2,
                        '"' => {
                            i += 1;
                            break;
                        }
                        _ => i += 1,
                    }
                }
                let end = i.min(chars.len());
                let token: String = chars[start..end].iter().collect();

                let rest = chars[end..].iter().find(|c| !c.is_whitespace());
                let color = if rest == Some(&':') {
                    theme.key
                } else {
                    theme.string
                };
                spans.push(Span::styled(token, Style::default().fg(color)));
            }
            '{' | '}' | '[' | ']' | ',' | ':' => {
                spans.push(Span::styled(
                    c.to_string(),
                    Style::default().fg(theme.punctuation),
                ));
                i += 1;
            }
            c if c == '-' || c.is_ascii_digit() => {
                let start = i;
                while i < chars.len()
                    && (chars[i].is_ascii_digit() || matches!(chars[i], '-' | '+' | '.' | 'e' | 'E'))
                {
                    i += 1;
                }
                let token: String = chars[start..i].iter().collect();
                spans.push(Span::styled(token, Style::default().fg(theme.number)));
            }
            c if c.is_alphabetic() => {
                let start = i;
                while i < chars.len() && chars[i].is_alphanumeric() {
                    i += 1;
                }
                let token: String = chars[start..i].iter().collect();
                let style = match token.as_str() {
                    "true" | "false" | "null" => Style::default().fg(theme.keyword),
                    _ => Style::default().fg(theme.foreground),
                };
                spans.push(Span::styled(token, style));
            }
            _ => {
                let start = i;
                while i < chars.len()
                    && !matches!(chars[i], '"' | '{' | '}' | '[' | ']' | ',' | ':' | '-')
                    && !chars[i].is_ascii_alphanumeric()
                {
                    i += 1;
                }
                if i == start {
                    i += 1;
                }
                let token: String = chars[start..i].iter().collect();
                spans.push(Span::styled(token, Style::default().fg(theme.foreground)));
            }
        }
    }

    Line::from(spans)
}

fn markup_line(line: &str, theme: &Theme, in_comment: &mut bool) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut rest = line;

    while !rest.is_empty() {
        if *in_comment {
            match rest.find("-->") {
                Some(end) => {
                    spans.push(comment_span(&rest[..end + 3], theme));
                    rest = &rest[end + 3..];
                    *in_comment = false;
                }
                None => {
                    spans.push(comment_span(rest, theme));
                    rest = "";
                }
            }
            continue;
        }

        if rest.starts_with("<!--") {
            *in_comment = true;
            continue;
        }

        if rest.starts_with('<') {
            let end = rest.find('>').map(|i| i + 1).unwrap_or(rest.len());
            push_tag(&rest[..end], theme, &mut spans);
            rest = &rest[end..];
            continue;
        }

        let end = rest.find('<').unwrap_or(rest.len());
        spans.push(Span::styled(
            rest[..end].to_string(),
            Style::default().fg(theme.foreground),
        ));
        rest = &rest[end..];
    }

    Line::from(spans)
}

fn comment_span(text: &str, theme: &Theme) -> Span<'static> {
    Span::styled(
        text.to_string(),
        Style::default()
            .fg(theme.comment)
            .add_modifier(Modifier::ITALIC),
    )
}

/// Color one `<...>` chunk: brackets, tag name, attribute names and values
fn push_tag(tag: &str, theme: &Theme, spans: &mut Vec<Span<'static>>) {
    let punct = Style::default().fg(theme.punctuation);
    let mut rest = tag;

    let open_len = ["</", "<?", "<!", "<"]
        .iter()
        .find(|p| rest.starts_with(**p))
        .map(|p| p.len())
        .unwrap_or(0);
    spans.push(Span::styled(rest[..open_len].to_string(), punct));
    rest = &rest[open_len..];

    let name_end = rest
        .find(|c: char| c.is_whitespace() || c == '>' || c == '/' || c == '?')
        .unwrap_or(rest.len());
    spans.push(Span::styled(
        rest[..name_end].to_string(),
        Style::default().fg(theme.tag),
    ));
    rest = &rest[name_end..];

    while !rest.is_empty() {
        let c = rest.chars().next().unwrap_or(' ');
        if c == '"' || c == '\'' {
            let close = rest[1..].find(c).map(|i| i + 2).unwrap_or(rest.len());
            spans.push(Span::styled(
                rest[..close].to_string(),
                Style::default().fg(theme.string),
            ));
            rest = &rest[close..];
        } else if c.is_whitespace() || matches!(c, '=' | '/' | '>' | '?') {
            let len = c.len_utf8();
            spans.push(Span::styled(rest[..len].to_string(), punct));
            rest = &rest[len..];
        } else {
            let end = rest
                .find(|c: char| c.is_whitespace() || matches!(c, '=' | '/' | '>' | '"' | '\''))
                .unwrap_or(rest.len());
            spans.push(Span::styled(
                rest[..end].to_string(),
                Style::default().fg(theme.attribute),
            ));
            rest = &rest[end..];
        }
    }
}
