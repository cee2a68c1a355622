//! Main application module.
//!
//! This module contains the main `App` struct that coordinates the
//! event loop, state management, rendering, and the two async
//! collaborators (the scan sequencer and the insight fetch).

use crate::config::Config;
use crate::data::Catalog;
use crate::error::Result;
use crate::events::EventHandler;
use crate::insight::{InsightClient, InsightProvider, InsightRequest};
use crate::state::{Action, ClusterTab, SCAN_FINDS, Store};
use crate::ui::{Theme, Ui};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Action sender, cloned into spawned tasks.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Insight provider.
    insight: Arc<dyn InsightProvider>,
    /// Resolved theme colors.
    theme: Theme,
    /// Configuration.
    config: Config,
}

impl App {
    /// Create a new application.
    pub fn new(config: Config) -> Result<Self> {
        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        // Create store over the authored catalog
        let store = Store::new(Catalog::load(), action_tx.clone());

        // Create event handler
        let event_handler = EventHandler::new(
            action_tx.clone(),
            config.keybindings.clone(),
            config.ui.mouse_support,
        );

        // Insight client; an unconfigured key degrades to fallback text
        let insight_client = InsightClient::new(config.insight.clone())?;
        if !insight_client.is_configured() {
            tracing::info!("insight service not configured; serving fallback text");
        }
        let insight: Arc<dyn InsightProvider> = Arc::new(insight_client);

        let theme = Theme::resolve(&config.theme, store.app.theme_mode);

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_rx,
            action_tx,
            insight,
            theme,
            config,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            // Update event handler with current state
            self.event_handler.update_store_snapshot(&self.store);

            // Render UI
            let theme = self.theme;
            self.terminal.draw(|frame| {
                Ui::render(frame, &self.store, &theme, &self.config.ui);
            })?;

            // Handle events and actions
            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.handle_action(action)?;
                    }
                }

                // Handle actions from the channel
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action)?;
                }
            }

            // Check if we should quit
            if self.store.app.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle an action. Most actions reduce directly; the scan and the
    /// insight fetch spawn tasks that report back through the channel.
    fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::StartScan => {
                if !self.store.discover.is_scanning() {
                    self.store.reduce(Action::StartScan);
                    self.spawn_scan();
                }
            }
            Action::RequestInsight => {
                self.request_insight();
            }
            Action::ToggleTheme => {
                self.store.reduce(Action::ToggleTheme);
                self.theme = Theme::resolve(&self.config.theme, self.store.app.theme_mode);
            }
            other => {
                self.store.reduce(other);
            }
        }

        Ok(())
    }

    /// Replay the scan status steps on a timer, then complete.
    fn spawn_scan(&self) {
        let tx = self.action_tx.clone();
        let step_ms = self.config.ui.scan_step_ms.max(50);

        tokio::spawn(async move {
            let mut found = 0;
            for (step, finds) in SCAN_FINDS.iter().enumerate() {
                tokio::time::sleep(Duration::from_millis(step_ms)).await;
                found += finds;
                if tx.send(Action::ScanProgress { step, found }).is_err() {
                    return;
                }
            }
            tokio::time::sleep(Duration::from_millis(step_ms / 2)).await;
            let _ = tx.send(Action::ScanCompleted);
        });
    }

    /// Fetch an insight for the focused signal, if one is due.
    fn request_insight(&mut self) {
        if self.store.cluster.tab != ClusterTab::Signals {
            return;
        }
        let Some(signal_id) = self.store.focused_signal_id() else {
            return;
        };
        if !self.store.cluster.can_request(&signal_id) {
            return;
        }
        let Some(signal) = self.store.catalog.signal(&signal_id).cloned() else {
            return;
        };

        let markets = self.store.catalog.signal_markets(&signal);
        let request = InsightRequest::for_signal(&signal, &markets);

        self.store.reduce(Action::InsightLoading(signal_id.clone()));
        tracing::debug!(signal = %signal_id, "requesting insight");

        let provider = Arc::clone(&self.insight);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let text = provider.signal_insight(&request).await;
            let _ = tx.send(Action::InsightLoaded { signal_id, text });
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
