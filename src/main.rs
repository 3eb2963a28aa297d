mod actions;
mod app;
mod config;
mod editor;
mod format;
mod request;
mod state;
mod store;
mod theme;
mod types;
mod ui;

use app::App;
use color_eyre::{eyre::eyre, Result};
use config::{Config, LogConfig};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
};
use std::fs::OpenOptions;
use std::io::stdout;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `lazy_http_tui=debug`
const LOG_ENV: &str = "LAZY_HTTP_TUI_LOG";

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    init_tracing(&config.log)?;
    tracing::info!(
        url = %config.request.url,
        theme = %config.ui.theme,
        "starting"
    );

    let terminal = ratatui::init();
    execute!(stdout(), EnableBracketedPaste)?;

    let app_result = App::new(&config).run(terminal).await;

    execute!(stdout(), DisableBracketedPaste)?;
    ratatui::restore();
    app_result
}

/// Send logs to a file; the terminal belongs to the UI
fn init_tracing(log: &LogConfig) -> Result<()> {
    let path = log.file_path();
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let default_level = log.level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level))
        .add_directive("reqwest=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("hyper_util=warn".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| eyre!("failed to initialize logging to {}: {e}", path.display()))
}
