//! Named color themes for the syntax-highlighted panes
//!
//! The rest of the application only ever stores a theme *name*; the registry
//! resolves it to colors at draw time.

use ratatui::style::Color;

pub const DEFAULT_THEME: &str = "DarkPlus";

/// Colors for one syntax-highlighting theme
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub foreground: Color,
    pub key: Color,
    pub string: Color,
    pub number: Color,
    /// true / false / null
    pub keyword: Color,
    pub punctuation: Color,
    pub tag: Color,
    pub attribute: Color,
    pub comment: Color,
    pub line_number: Color,
    pub selection: Color,
    pub border: Color,
}

#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ThemeRegistry {
    pub fn builtin() -> Self {
        Self {
            themes: vec![
                Theme {
                    name: "DarkPlus",
                    background: Color::Rgb(30, 30, 30),
                    foreground: Color::Rgb(212, 212, 212),
                    key: Color::Rgb(156, 220, 254),
                    string: Color::Rgb(206, 145, 120),
                    number: Color::Rgb(181, 206, 168),
                    keyword: Color::Rgb(86, 156, 214),
                    punctuation: Color::Rgb(212, 212, 212),
                    tag: Color::Rgb(86, 156, 214),
                    attribute: Color::Rgb(156, 220, 254),
                    comment: Color::Rgb(106, 153, 85),
                    line_number: Color::Rgb(133, 133, 133),
                    selection: Color::Rgb(38, 79, 120),
                    border: Color::Rgb(68, 68, 68),
                },
                Theme {
                    name: "LightPlus",
                    background: Color::Rgb(255, 255, 255),
                    foreground: Color::Rgb(0, 0, 0),
                    key: Color::Rgb(4, 81, 165),
                    string: Color::Rgb(163, 21, 21),
                    number: Color::Rgb(9, 134, 88),
                    keyword: Color::Rgb(0, 0, 255),
                    punctuation: Color::Rgb(0, 0, 0),
                    tag: Color::Rgb(128, 0, 0),
                    attribute: Color::Rgb(229, 0, 0),
                    comment: Color::Rgb(0, 128, 0),
                    line_number: Color::Rgb(35, 120, 147),
                    selection: Color::Rgb(173, 214, 255),
                    border: Color::Rgb(200, 200, 200),
                },
                Theme {
                    name: "Monokai",
                    background: Color::Rgb(39, 40, 34),
                    foreground: Color::Rgb(248, 248, 242),
                    key: Color::Rgb(102, 217, 239),
                    string: Color::Rgb(230, 219, 116),
                    number: Color::Rgb(174, 129, 255),
                    keyword: Color::Rgb(249, 38, 114),
                    punctuation: Color::Rgb(248, 248, 242),
                    tag: Color::Rgb(249, 38, 114),
                    attribute: Color::Rgb(166, 226, 46),
                    comment: Color::Rgb(117, 113, 94),
                    line_number: Color::Rgb(144, 144, 138),
                    selection: Color::Rgb(73, 72, 62),
                    border: Color::Rgb(117, 113, 94),
                },
                Theme {
                    name: "SolarizedDark",
                    background: Color::Rgb(0, 43, 54),
                    foreground: Color::Rgb(131, 148, 150),
                    key: Color::Rgb(38, 139, 210),
                    string: Color::Rgb(42, 161, 152),
                    number: Color::Rgb(211, 54, 130),
                    keyword: Color::Rgb(133, 153, 0),
                    punctuation: Color::Rgb(147, 161, 161),
                    tag: Color::Rgb(38, 139, 210),
                    attribute: Color::Rgb(147, 161, 161),
                    comment: Color::Rgb(88, 110, 117),
                    line_number: Color::Rgb(88, 110, 117),
                    selection: Color::Rgb(7, 54, 66),
                    border: Color::Rgb(7, 54, 66),
                },
                Theme {
                    name: "SolarizedLight",
                    background: Color::Rgb(253, 246, 227),
                    foreground: Color::Rgb(101, 123, 131),
                    key: Color::Rgb(38, 139, 210),
                    string: Color::Rgb(42, 161, 152),
                    number: Color::Rgb(211, 54, 130),
                    keyword: Color::Rgb(133, 153, 0),
                    punctuation: Color::Rgb(88, 110, 117),
                    tag: Color::Rgb(38, 139, 210),
                    attribute: Color::Rgb(147, 161, 161),
                    comment: Color::Rgb(147, 161, 161),
                    line_number: Color::Rgb(147, 161, 161),
                    selection: Color::Rgb(238, 232, 213),
                    border: Color::Rgb(238, 232, 213),
                },
                Theme {
                    name: "Abyss",
                    background: Color::Rgb(0, 12, 24),
                    foreground: Color::Rgb(102, 136, 204),
                    key: Color::Rgb(34, 119, 255),
                    string: Color::Rgb(34, 170, 68),
                    number: Color::Rgb(249, 145, 87),
                    keyword: Color::Rgb(34, 85, 153),
                    punctuation: Color::Rgb(102, 136, 204),
                    tag: Color::Rgb(34, 85, 153),
                    attribute: Color::Rgb(221, 187, 136),
                    comment: Color::Rgb(56, 78, 120),
                    line_number: Color::Rgb(64, 96, 128),
                    selection: Color::Rgb(119, 0, 136),
                    border: Color::Rgb(8, 40, 80),
                },
                Theme {
                    name: "HighContrast",
                    background: Color::Black,
                    foreground: Color::White,
                    key: Color::LightCyan,
                    string: Color::LightYellow,
                    number: Color::LightGreen,
                    keyword: Color::LightMagenta,
                    punctuation: Color::White,
                    tag: Color::LightBlue,
                    attribute: Color::LightCyan,
                    comment: Color::Green,
                    line_number: Color::White,
                    selection: Color::Blue,
                    border: Color::White,
                },
            ],
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.themes.iter().map(|t| t.name)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.themes
            .iter()
            .position(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn by_index(&self, index: usize) -> Option<&Theme> {
        self.themes.get(index)
    }

    /// Theme for `name`, or the default one when the name is unknown
    pub fn resolve(&self, name: &str) -> &Theme {
        self.get(name)
            .or_else(|| self.get(DEFAULT_THEME))
            .unwrap_or(&self.themes[0])
    }

    /// Name following `current`, wrapping around
    pub fn next_name(&self, current: &str) -> &'static str {
        let next = self
            .position(current)
            .map(|i| (i + 1) % self.themes.len())
            .unwrap_or(0);
        self.themes[next].name
    }
}
