//! Event handler turning terminal input into actions.

use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::{Action, InputMode, Screen, Store, TradeSide};
use crate::ui::layout::{Layout, market_chart_canvas};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::Duration;
use tokio::sync::mpsc;

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Action sender (for future async dispatch).
    #[allow(dead_code)]
    action_tx: mpsc::UnboundedSender<Action>,
    /// Key bindings.
    keybindings: KeyBindings,
    /// Whether mouse tracking is enabled.
    mouse_support: bool,
    /// Last known terminal size, for mouse hit testing.
    terminal_size: (u16, u16),
    /// Store snapshot for state-aware handling.
    snapshot: Snapshot,
}

/// The slice of store state the handler needs.
#[derive(Clone, Default)]
struct Snapshot {
    input_mode: InputMode,
    screen: Screen,
    trade_open: bool,
}

impl EventHandler {
    /// Create a new event handler.
    pub fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        keybindings: KeyBindings,
        mouse_support: bool,
    ) -> Self {
        let terminal_size = crossterm::terminal::size().unwrap_or((80, 24));
        Self {
            action_tx,
            keybindings,
            mouse_support,
            terminal_size,
            snapshot: Snapshot::default(),
        }
    }

    /// Update the store snapshot for state-aware event handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        self.snapshot = Snapshot {
            input_mode: store.app.input_mode,
            screen: store.app.screen().clone(),
            trade_open: store.trade.is_open(),
        };
    }

    /// Get the next action from user input.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                CrosstermEvent::Key(key) => {
                    if let Some(action) = self.handle_key(key) {
                        return Ok(Some(action));
                    }
                }
                CrosstermEvent::Mouse(mouse) => {
                    if let Some(action) = self.handle_mouse(mouse) {
                        return Ok(Some(action));
                    }
                }
                CrosstermEvent::Resize(w, h) => {
                    self.terminal_size = (w, h);
                }
                _ => {}
            }
        }
        Ok(None)
    }

    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match self.snapshot.input_mode {
            InputMode::Normal => self.handle_normal_mode(key),
            InputMode::Search => self.handle_search_mode(key),
        }
    }

    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            MouseEventKind::Moved if self.mouse_support => self.handle_mouse_moved(mouse),
            _ => None,
        }
    }

    /// Map a pointer move over the market chart into a chart fraction.
    fn handle_mouse_moved(&self, mouse: MouseEvent) -> Option<Action> {
        if !matches!(self.snapshot.screen, Screen::Market(_)) || self.snapshot.trade_open {
            return None;
        }

        let (w, h) = self.terminal_size;
        let layout = Layout::new(Rect::new(0, 0, w, h));
        let canvas = market_chart_canvas(layout.content_area);

        let inside = canvas.width > 1
            && mouse.column >= canvas.x
            && mouse.column < canvas.x + canvas.width
            && mouse.row >= canvas.y
            && mouse.row < canvas.y + canvas.height;

        if inside {
            let frac = (mouse.column - canvas.x) as f64 / (canvas.width - 1) as f64;
            Some(Action::ChartPointerMoved(frac))
        } else {
            Some(Action::ChartPointerLeft)
        }
    }

    fn handle_normal_mode(&self, key: KeyEvent) -> Option<Action> {
        let input = super::InputEvent::from(key);
        let keys = &self.keybindings;

        // The trade sheet captures input while open
        if self.snapshot.trade_open {
            return self.handle_trade_sheet(input);
        }

        // Global shortcuts
        if input.matches(&keys.quit) {
            return Some(Action::Quit);
        }
        if input.matches(&keys.help) {
            return Some(Action::ToggleHelp);
        }
        if input.matches(&keys.theme) {
            return Some(Action::ToggleTheme);
        }
        if input.matches(&keys.back) || input.key == super::Key::Backspace {
            return Some(Action::NavigateBack);
        }

        // Root screen switching
        if input.matches(&keys.discover) {
            return Some(Action::SetScreen(Screen::Discover));
        }
        if input.matches(&keys.watchlist) {
            return Some(Action::SetScreen(Screen::Watchlist));
        }
        if input.matches(&keys.activity) {
            return Some(Action::SetScreen(Screen::Activity));
        }
        if input.matches(&keys.profile) {
            return Some(Action::SetScreen(Screen::Profile));
        }

        // List navigation
        if input.matches(&keys.up) || input.key == super::Key::Up {
            return Some(Action::ScrollUp);
        }
        if input.matches(&keys.down) || input.key == super::Key::Down {
            return Some(Action::ScrollDown);
        }
        if input.key == super::Key::Home {
            return Some(Action::GoToTop);
        }
        if input.key == super::Key::End {
            return Some(Action::GoToBottom);
        }
        if input.matches(&keys.select) {
            return Some(Action::Select);
        }

        // Screen-specific bindings
        match &self.snapshot.screen {
            Screen::Discover => self.handle_discover(input),
            Screen::Watchlist => self.handle_watchlist(input),
            Screen::Activity => self.handle_activity(input),
            Screen::Cluster(_) => self.handle_cluster(input),
            Screen::Market(_) => self.handle_market(input),
            Screen::Profile => None,
        }
    }

    fn handle_discover(&self, input: super::InputEvent) -> Option<Action> {
        let keys = &self.keybindings;
        if input.matches(&keys.search) {
            return Some(Action::SetInputMode(InputMode::Search));
        }
        if input.matches(&keys.scan) {
            return Some(Action::StartScan);
        }
        if input.matches(&keys.watch) {
            return Some(Action::ToggleWatch);
        }
        None
    }

    fn handle_watchlist(&self, input: super::InputEvent) -> Option<Action> {
        let keys = &self.keybindings;
        if input.matches(&keys.left)
            || input.matches(&keys.right)
            || input.key == super::Key::Left
            || input.key == super::Key::Right
            || input.key == super::Key::Tab
        {
            return Some(Action::ToggleWatchTab);
        }
        if input.matches(&keys.watch) {
            return Some(Action::ToggleWatch);
        }
        None
    }

    fn handle_activity(&self, input: super::InputEvent) -> Option<Action> {
        if input.matches(&self.keybindings.mark) {
            return Some(Action::MarkAllRead);
        }
        None
    }

    fn handle_cluster(&self, input: super::InputEvent) -> Option<Action> {
        let keys = &self.keybindings;
        if input.matches(&keys.left) || input.key == super::Key::Left {
            return Some(Action::PrevClusterTab);
        }
        if input.matches(&keys.right)
            || input.key == super::Key::Right
            || input.key == super::Key::Tab
        {
            return Some(Action::NextClusterTab);
        }
        if input.matches(&keys.insight) {
            return Some(Action::RequestInsight);
        }
        if input.matches(&keys.watch) {
            return Some(Action::ToggleWatch);
        }
        None
    }

    fn handle_market(&self, input: super::InputEvent) -> Option<Action> {
        let keys = &self.keybindings;
        if input.matches(&keys.left) || input.key == super::Key::Left {
            return Some(Action::ChartCursorLeft);
        }
        if input.matches(&keys.right) || input.key == super::Key::Right {
            return Some(Action::ChartCursorRight);
        }
        if input.matches(&keys.trade) {
            return Some(Action::OpenTradeSheet);
        }
        if input.matches(&keys.expand) {
            return Some(Action::ToggleDescription);
        }
        if input.matches(&keys.watch) {
            return Some(Action::ToggleWatch);
        }
        None
    }

    fn handle_trade_sheet(&self, input: super::InputEvent) -> Option<Action> {
        let keys = &self.keybindings;
        if input.matches(&keys.quit) {
            return Some(Action::Quit);
        }
        if input.matches(&keys.back) {
            return Some(Action::CloseTradeSheet);
        }
        if input.matches(&keys.select) {
            return Some(Action::ConfirmTrade);
        }
        if input.matches(&keys.mark) || input.key == super::Key::Tab {
            return Some(Action::ToggleTradeMode);
        }
        if input.matches(&keys.left) || input.key == super::Key::Left {
            return Some(Action::AdjustTrade(-1));
        }
        if input.matches(&keys.right) || input.key == super::Key::Right {
            return Some(Action::AdjustTrade(1));
        }
        match input.char() {
            Some('y') | Some('Y') => Some(Action::SetTradeSide(TradeSide::Yes)),
            Some('n') | Some('N') => Some(Action::SetTradeSide(TradeSide::No)),
            _ => None,
        }
    }

    fn handle_search_mode(&self, key: KeyEvent) -> Option<Action> {
        let input = super::InputEvent::from(key);
        match input.key {
            super::Key::Escape => Some(Action::CancelSearch),
            super::Key::Enter => Some(Action::SubmitSearch),
            super::Key::Backspace => Some(Action::SearchBackspace),
            _ => input.char().map(Action::SearchChar),
        }
    }
}
