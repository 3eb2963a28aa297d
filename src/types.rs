use serde::Deserialize;
use std::fmt;

/// HTTP verbs offered by the method selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 4] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Next method in selector order, wrapping back to GET
    pub fn next(&self) -> HttpMethod {
        match self {
            HttpMethod::Get => HttpMethod::Post,
            HttpMethod::Post => HttpMethod::Put,
            HttpMethod::Put => HttpMethod::Delete,
            HttpMethod::Delete => HttpMethod::Get,
        }
    }

    /// Only POST and PUT carry a request payload
    pub fn supports_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }

    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the user typed to describe one request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestSpec {
    pub method: HttpMethod,

    /// Sent exactly as typed, never validated or normalized
    pub url: String,

    /// Raw "Name: Value" lines, any newline convention
    pub headers: String,

    pub body: Option<String>,
}

impl RequestSpec {
    /// The payload that will actually go on the wire, if any
    pub fn payload(&self) -> Option<&str> {
        if !self.method.supports_body() {
            return None;
        }
        self.body.as_deref().filter(|b| !b.is_empty())
    }
}

/// Text shown in the response pane before the first dispatch completes
pub const WELCOME_TEXT: &str = "WELCOME!";

/// Outcome of the most recent dispatch: the body text, or "Error: ..." on failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseState {
    pub raw_text: String,
}

impl ResponseState {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
        }
    }

    /// Failure text in the same slot a body would go
    pub fn error(message: impl fmt::Display) -> Self {
        Self {
            raw_text: format!("Error: {message}"),
        }
    }
}

impl Default for ResponseState {
    fn default() -> Self {
        Self::new(WELCOME_TEXT)
    }
}

/// Alternate renderings of the raw response text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormattedView {
    #[default]
    Raw,
    Json,
    Xml,
    Html,
}

impl FormattedView {
    pub const ALL: [FormattedView; 4] = [
        FormattedView::Raw,
        FormattedView::Json,
        FormattedView::Xml,
        FormattedView::Html,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            FormattedView::Raw => "Raw",
            FormattedView::Json => "JSON",
            FormattedView::Xml => "XML",
            FormattedView::Html => "HTML",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            FormattedView::Raw => 0,
            FormattedView::Json => 1,
            FormattedView::Xml => 2,
            FormattedView::Html => 3,
        }
    }

    pub fn next(&self) -> FormattedView {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> FormattedView {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Tag attached to each dispatch so late results can be recognized
pub type DispatchId = u64;

/// Which pane receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Url,
    Headers,
    Body,
    Response,
}

impl Focus {
    pub fn next(&self) -> Focus {
        match self {
            Focus::Url => Focus::Headers,
            Focus::Headers => Focus::Body,
            Focus::Body => Focus::Response,
            Focus::Response => Focus::Url,
        }
    }

    pub fn previous(&self) -> Focus {
        match self {
            Focus::Url => Focus::Response,
            Focus::Headers => Focus::Url,
            Focus::Body => Focus::Headers,
            Focus::Response => Focus::Body,
        }
    }

    pub fn is_editor(&self) -> bool {
        !matches!(self, Focus::Response)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    /// Theme picker is open; holds the highlighted entry
    PickingTheme(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_cycle_wraps() {
        let mut method = HttpMethod::Get;
        for expected in [
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Delete,
            HttpMethod::Get,
        ] {
            method = method.next();
            assert_eq!(method, expected);
        }
    }

    #[test]
    fn test_supports_body() {
        assert!(HttpMethod::Post.supports_body());
        assert!(HttpMethod::Put.supports_body());
        assert!(!HttpMethod::Get.supports_body());
        assert!(!HttpMethod::Delete.supports_body());
    }

    #[test]
    fn test_payload_ignored_for_get_and_delete() {
        for method in [HttpMethod::Get, HttpMethod::Delete] {
            let spec = RequestSpec {
                method,
                url: "http://localhost".to_string(),
                headers: String::new(),
                body: Some("{\"a\":1}".to_string()),
            };
            assert_eq!(spec.payload(), None);
        }
    }

    #[test]
    fn test_payload_empty_body_not_sent() {
        let spec = RequestSpec {
            method: HttpMethod::Post,
            body: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(spec.payload(), None);
    }

    #[test]
    fn test_payload_kept_verbatim() {
        let spec = RequestSpec {
            method: HttpMethod::Put,
            body: Some("  raw\r\nbody  ".to_string()),
            ..Default::default()
        };
        assert_eq!(spec.payload(), Some("  raw\r\nbody  "));
    }

    #[test]
    fn test_error_state_prefix() {
        let state = ResponseState::error("connection refused");
        assert_eq!(state.raw_text, "Error: connection refused");
    }

    #[test]
    fn test_default_response_is_welcome() {
        assert_eq!(ResponseState::default().raw_text, WELCOME_TEXT);
    }

    #[test]
    fn test_view_cycle() {
        assert_eq!(FormattedView::Raw.next(), FormattedView::Json);
        assert_eq!(FormattedView::Html.next(), FormattedView::Raw);
        assert_eq!(FormattedView::Raw.previous(), FormattedView::Html);
    }

    #[test]
    fn test_focus_cycle_round_trip() {
        let focus = Focus::Url;
        assert_eq!(focus.next().next().next().next(), Focus::Url);
        assert_eq!(focus.previous(), Focus::Response);
        assert!(!Focus::Response.is_editor());
    }
}
