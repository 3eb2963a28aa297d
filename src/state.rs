use crate::config::Config;
use crate::editor::TextEditor;
use crate::types::{Focus, FormattedView, HttpMethod, InputMode, RequestSpec};

/// Everything the UI owns apart from the response itself, which lives in
/// the [`ResponseStore`](crate::store::ResponseStore)
#[derive(Debug, Clone)]
pub struct AppState {
    pub method: HttpMethod,
    pub url: TextEditor,
    pub headers: TextEditor,
    pub body: TextEditor,

    /// Pane receiving key input
    pub focus: Focus,
    pub input_mode: InputMode,

    /// Response tab being shown
    pub view: FormattedView,

    /// Scroll offset for the response pane (lines)
    pub response_scroll: usize,

    /// Name only; colors are looked up in the theme registry when drawing
    pub theme_name: String,

    /// One-line message in the footer, cleared on the next key press
    pub status: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            method: config.request.method,
            url: TextEditor::single_line().with_content(config.request.url.as_str()),
            headers: TextEditor::multi_line().with_content(config.request.headers.as_str()),
            body: TextEditor::multi_line().with_content(config.request.body.as_str()),
            focus: Focus::Url,
            input_mode: InputMode::Normal,
            view: config.ui.view,
            response_scroll: 0,
            theme_name: config.ui.theme.clone(),
            status: None,
        }
    }

    /// Editor behind the focused pane, if the focus is on one
    pub fn focused_editor(&mut self) -> Option<&mut TextEditor> {
        match self.focus {
            Focus::Url => Some(&mut self.url),
            Focus::Headers => Some(&mut self.headers),
            Focus::Body => Some(&mut self.body),
            Focus::Response => None,
        }
    }

    /// Snapshot of the editors as a request to dispatch
    pub fn request_spec(&self) -> RequestSpec {
        let body = self.body.content();
        RequestSpec {
            method: self.method,
            url: self.url.content().to_string(),
            headers: self.headers.content().to_string(),
            body: (!body.is_empty()).then(|| body.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_from_config_defaults() {
        let state = AppState::default();
        assert_eq!(state.method, HttpMethod::Get);
        assert_eq!(state.url.content(), "http://www.baidu.com");
        assert_eq!(state.focus, Focus::Url);
        assert_eq!(state.view, FormattedView::Raw);
        assert_eq!(state.theme_name, "DarkPlus");
        assert!(!state.url.is_multiline());
        assert!(state.body.is_multiline());
    }

    #[test]
    fn test_request_spec_reflects_editors() {
        let mut state = AppState::default();
        state.method = HttpMethod::Post;
        state.url.set_content("http://localhost:5000/items".to_string());
        state.headers.set_content("Accept: application/json".to_string());
        state.body.set_content("{\"a\":1}".to_string());

        let spec = state.request_spec();
        assert_eq!(spec.method, HttpMethod::Post);
        assert_eq!(spec.url, "http://localhost:5000/items");
        assert_eq!(spec.headers, "Accept: application/json");
        assert_eq!(spec.body.as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_empty_body_is_none() {
        let state = AppState::default();
        assert_eq!(state.request_spec().body, None);
    }

    #[test]
    fn test_focused_editor() {
        let mut state = AppState::default();
        state.focus = Focus::Body;
        state.focused_editor().unwrap().insert_str("x");
        assert_eq!(state.body.content(), "x");

        state.focus = Focus::Response;
        assert!(state.focused_editor().is_none());
    }
}
