use crate::actions::{apply_action, AppAction};
use crate::config::Config;
use crate::request::{DispatchOutcome, Dispatcher};
use crate::state::AppState;
use crate::store::ResponseStore;
use crate::theme::ThemeRegistry;
use crate::ui;
use crate::ui::draw::{Activity, ResponseLines};
use color_eyre::Result;
use ratatui::{DefaultTerminal, Frame};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::{error::TryRecvError, UnboundedReceiver};

#[derive(Debug)]
pub struct App {
    state: AppState,
    store: ResponseStore,
    dispatcher: Dispatcher,
    outcomes: UnboundedReceiver<DispatchOutcome>,
    themes: ThemeRegistry,
    response_lines: ResponseLines,
    /// Set by the store subscription whenever a new response lands
    response_changed: Arc<AtomicBool>,
    spinner_index: usize,
    last_tick: Instant,
    event_handler: ui::EventHandler,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let themes = ThemeRegistry::builtin();
        let mut state = AppState::from_config(config);
        if themes.get(&state.theme_name).is_none() {
            tracing::warn!(theme = %state.theme_name, "unknown theme in config, using default");
            state.theme_name = themes.resolve(&state.theme_name).name.to_string();
        }

        let (dispatcher, outcomes) = Dispatcher::new(reqwest::Client::new());

        let mut store = ResponseStore::default();
        let response_changed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&response_changed);
        store.subscribe(move |_| flag.store(true, Ordering::Relaxed));
        store.subscribe(|response| {
            tracing::debug!(bytes = response.raw_text.len(), "response updated");
        });

        Self {
            state,
            store,
            dispatcher,
            outcomes,
            themes,
            response_lines: ResponseLines::default(),
            response_changed,
            spinner_index: 0,
            last_tick: Instant::now(),
            event_handler: ui::EventHandler::new(),
        }
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        // Main UI loop
        while !self.event_handler.should_quit {
            // Update spinner animation
            if self.last_tick.elapsed().as_millis() > 100 {
                self.spinner_index = (self.spinner_index + 1) % 4;
                self.last_tick = Instant::now();
            }

            self.drain_outcomes();

            terminal.draw(|frame| self.draw(frame))?;

            let response = self.store.snapshot();
            let outcome =
                self.event_handler
                    .handle_events(&mut self.state, &response, &self.themes)?;

            if outcome.send {
                self.send();
            }

            // Let the runtime make progress on in-flight dispatches
            tokio::task::yield_now().await;
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let response = self.store.snapshot();
        let activity = Activity {
            in_flight: self.store.in_flight(),
            spinner_index: self.spinner_index,
        };
        ui::draw::render(
            frame,
            &self.state,
            &response,
            &mut self.response_lines,
            &self.themes,
            activity,
        );
    }

    /// Start a dispatch for whatever the editors currently hold
    fn send(&mut self) {
        let spec = self.state.request_spec();
        let id = self.store.begin_dispatch();
        self.dispatcher.dispatch(id, spec);
    }

    /// Apply every finished dispatch waiting in the channel
    fn drain_outcomes(&mut self) {
        loop {
            match self.outcomes.try_recv() {
                Ok(DispatchOutcome { id, state }) => {
                    self.store.publish(id, state);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("dispatch channel closed");
                    break;
                }
            }
        }

        if self.response_changed.swap(false, Ordering::Relaxed) {
            apply_action(AppAction::ResetResponseScroll, &mut self.state);
        }
    }
}
