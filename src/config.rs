use crate::theme::DEFAULT_THEME;
use crate::types::{FormattedView, HttpMethod};
use color_eyre::Result;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const APP_DIR: &str = "lazy-http-tui";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub request: RequestDefaults,
    pub ui: UiConfig,
    pub log: LogConfig,
}

/// What the request editors start out with
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RequestDefaults {
    pub url: String,
    pub method: HttpMethod,
    pub headers: String,
    pub body: String,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            url: "http://www.baidu.com".to_string(),
            method: HttpMethod::Get,
            headers: String::new(),
            body: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: String,
    /// Response view shown first
    pub view: FormattedView,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            view: FormattedView::Raw,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file; the terminal belongs to the UI so logs never go to stdout
    pub file: Option<PathBuf>,
    /// Filter directive used when LAZY_HTTP_TUI_LOG is not set
    pub level: Option<String>,
}

impl LogConfig {
    pub fn file_path(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(format!("{APP_DIR}.log")))
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        // Use ~/.config instead of platform-specific directory
        let home_dir = dirs::home_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find home directory"))?;

        Ok(home_dir.join(".config").join(APP_DIR).join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Host part of a URL for the header bar, if the URL parses at all
///
/// Display only: dispatch never validates what the user typed.
pub fn display_host(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    Some(match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}
