//! State management for Mirror.
//!
//! Centralized state with a unidirectional data flow: input events become
//! [`Action`]s, the [`Store`] reduces them synchronously, and the UI
//! renders from the result. The two async collaborators (insight fetch,
//! scan sequencer) report back through the same action channel.

mod activity_state;
mod app_state;
mod cluster_state;
mod discover_state;
mod market_state;
mod trade_state;
mod watchlist_state;

pub use activity_state::ActivityState;
pub use app_state::{AppState, InputMode, Screen, ThemeMode};
pub use cluster_state::{ClusterState, ClusterTab, InsightStatus};
pub use discover_state::{DiscoverState, SCAN_FINDS, SCAN_STEPS, ScanState};
pub use market_state::MarketDetailState;
pub use trade_state::{ExecutionMode, TradeForm, TradeSide, TradeState, TradeTicket};
pub use watchlist_state::{WatchTab, WatchlistState};

use crate::data::{ActivityKind, Catalog, Market};
use crate::error::Result;
use tokio::sync::mpsc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SetScreen(Screen),
    OpenCluster(String),
    OpenMarket(String),
    NavigateBack,
    SetInputMode(InputMode),
    ToggleTheme,
    ToggleHelp,

    // List movement (contextual per screen)
    ScrollUp,
    ScrollDown,
    GoToTop,
    GoToBottom,
    Select,

    // Search (Discover)
    SearchChar(char),
    SearchBackspace,
    SubmitSearch,
    CancelSearch,

    // Network scan (Discover)
    StartScan,
    ScanProgress { step: usize, found: u32 },
    ScanCompleted,

    // Cluster view
    SetClusterTab(ClusterTab),
    NextClusterTab,
    PrevClusterTab,
    RequestInsight,
    InsightLoading(String),
    InsightLoaded { signal_id: String, text: String },

    // Market detail
    ToggleDescription,
    ChartPointerMoved(f64),
    ChartPointerLeft,
    ChartCursorLeft,
    ChartCursorRight,

    // Watchlist
    ToggleWatch,
    ToggleWatchTab,

    // Activity
    MarkAllRead,

    // Trade sheet
    OpenTradeSheet,
    CloseTradeSheet,
    SetTradeSide(TradeSide),
    ToggleTradeMode,
    AdjustTrade(i64),
    ConfirmTrade,

    // Notifications and errors
    ShowNotification(Notification),
    DismissNotification,
    SetError(String),
    ClearError,

    // Quit
    Quit,
}

/// A notification to display to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration_secs: u64,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
            duration_secs: 3,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
            duration_secs: 3,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Warning,
            duration_secs: 5,
        }
    }
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// The immutable market-intelligence catalog.
    pub catalog: Catalog,
    /// Application state.
    pub app: AppState,
    /// Discover screen state.
    pub discover: DiscoverState,
    /// Cluster view state.
    pub cluster: ClusterState,
    /// Market detail state.
    pub market: MarketDetailState,
    /// Trade sheet state.
    pub trade: TradeState,
    /// Watchlist state.
    pub watchlist: WatchlistState,
    /// Activity feed state.
    pub activity: ActivityState,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store over a catalog.
    pub fn new(catalog: Catalog, action_tx: mpsc::UnboundedSender<Action>) -> Self {
        let discover = DiscoverState::new(&catalog);
        let watchlist = WatchlistState::new(&catalog);
        let activity = ActivityState::new(&catalog);
        Self {
            catalog,
            app: AppState::default(),
            discover,
            cluster: ClusterState::default(),
            market: MarketDetailState::default(),
            trade: TradeState::default(),
            watchlist,
            activity,
            action_tx,
        }
    }

    /// Dispatch an action through the channel.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| crate::Error::channel(e.to_string()))
    }

    /// The market shown by the current screen, if any.
    pub fn current_market(&self) -> Option<&Market> {
        match self.app.screen() {
            Screen::Market(id) => self.catalog.market(id),
            _ => None,
        }
    }

    /// The id of the cluster shown by the current screen, if any.
    pub fn current_cluster_id(&self) -> Option<&str> {
        match self.app.screen() {
            Screen::Cluster(id) => Some(id.as_str()),
            _ => None,
        }
    }

    /// The signal focused in the cluster view's Signals tab, if any.
    pub fn focused_signal_id(&self) -> Option<String> {
        let cluster = self.catalog.cluster(self.current_cluster_id()?)?;
        cluster
            .signal_ids
            .get(self.cluster.selected_signal)
            .cloned()
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Navigation
            Action::SetScreen(screen) => {
                self.app.switch_root(screen);
            }
            Action::OpenCluster(id) => {
                if self.catalog.cluster(&id).is_some() {
                    self.cluster.reset();
                    self.app.push_screen(Screen::Cluster(id));
                } else {
                    self.app.error = Some(format!("Cluster {id} not found"));
                }
            }
            Action::OpenMarket(id) => {
                if self.catalog.market(&id).is_some() {
                    self.market.reset();
                    self.app.push_screen(Screen::Market(id));
                } else {
                    self.app.error = Some(format!("Market {id} not found"));
                }
            }
            Action::NavigateBack => self.navigate_back(),
            Action::SetInputMode(mode) => {
                self.app.input_mode = mode;
            }
            Action::ToggleTheme => {
                self.app.theme_mode = self.app.theme_mode.toggled();
            }
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,

            // List movement
            Action::ScrollUp => self.scroll(-1),
            Action::ScrollDown => self.scroll(1),
            Action::GoToTop => self.scroll(i64::MIN),
            Action::GoToBottom => self.scroll(i64::MAX),
            Action::Select => self.select(),

            // Search
            Action::SearchChar(c) => {
                self.app.push_search_char(c);
                self.discover.search_query = Some(self.app.search_buffer.clone());
                self.discover.selected_index = 0;
            }
            Action::SearchBackspace => {
                self.app.pop_search_char();
                self.discover.search_query = if self.app.search_buffer.is_empty() {
                    None
                } else {
                    Some(self.app.search_buffer.clone())
                };
                self.discover.selected_index = 0;
            }
            Action::SubmitSearch => {
                self.app.input_mode = InputMode::Normal;
            }
            Action::CancelSearch => {
                self.app.clear_search();
                self.discover.search_query = None;
                self.discover.selected_index = 0;
                self.app.input_mode = InputMode::Normal;
            }

            // Scan
            Action::StartScan => {
                if !self.discover.is_scanning() {
                    self.discover.scan = Some(ScanState { step: 0, found: 0 });
                }
            }
            Action::ScanProgress { step, found } => {
                if self.discover.is_scanning() {
                    self.discover.scan = Some(ScanState { step, found });
                }
            }
            Action::ScanCompleted => {
                self.discover.scan = None;
                self.discover.rank_by_alpha(&self.catalog);
            }

            // Cluster view
            Action::SetClusterTab(tab) => self.cluster.tab = tab,
            Action::NextClusterTab => self.cluster.tab = self.cluster.tab.next(),
            Action::PrevClusterTab => self.cluster.tab = self.cluster.tab.prev(),
            // RequestInsight is resolved by the app layer, which owns the
            // async fetch; it arrives back as InsightLoading/InsightLoaded.
            Action::RequestInsight => {}
            Action::InsightLoading(signal_id) => self.cluster.set_loading(&signal_id),
            Action::InsightLoaded { signal_id, text } => {
                self.cluster.set_ready(&signal_id, text);
            }

            // Market detail
            Action::ToggleDescription => {
                self.market.desc_expanded = !self.market.desc_expanded;
            }
            Action::ChartPointerMoved(frac) => {
                if let Some(market) = self.current_market() {
                    let data = market.price_history.clone();
                    self.market.pointer_moved(frac, &data);
                }
            }
            Action::ChartPointerLeft => self.market.pointer_left(),
            Action::ChartCursorLeft => {
                if let Some(market) = self.current_market() {
                    let data = market.price_history.clone();
                    self.market.step_cursor(-1, &data);
                }
            }
            Action::ChartCursorRight => {
                if let Some(market) = self.current_market() {
                    let data = market.price_history.clone();
                    self.market.step_cursor(1, &data);
                }
            }

            // Watchlist
            Action::ToggleWatch => self.toggle_watch(),
            Action::ToggleWatchTab => {
                self.watchlist.tab = self.watchlist.tab.toggled();
                self.watchlist.selected_index = 0;
            }

            // Activity
            Action::MarkAllRead => {
                self.activity.mark_all_read();
                self.activity.expanded_id = None;
            }

            // Trade sheet
            Action::OpenTradeSheet => self.open_trade_sheet(),
            Action::CloseTradeSheet => self.trade.close(),
            Action::SetTradeSide(side) => {
                if let Some(form) = self.trade.form.as_mut() {
                    form.side = side;
                }
            }
            Action::ToggleTradeMode => {
                if let Some(form) = self.trade.form.as_mut() {
                    form.mode = form.mode.toggled();
                }
            }
            Action::AdjustTrade(steps) => {
                if let Some(form) = self.trade.form.as_mut() {
                    match form.mode {
                        ExecutionMode::Manual => form.adjust_size(steps),
                        ExecutionMode::Agent => form.adjust_runtime(steps),
                    }
                }
            }
            Action::ConfirmTrade => self.confirm_trade(),

            // Notifications and errors
            Action::ShowNotification(notification) => {
                self.app.notification = Some(notification);
            }
            Action::DismissNotification => self.app.notification = None,
            Action::SetError(error) => self.app.error = Some(error),
            Action::ClearError => self.app.error = None,

            // Quit
            Action::Quit => self.app.should_quit = true,
        }
    }

    /// Back navigation peels overlays before popping routes.
    fn navigate_back(&mut self) {
        if self.app.show_help {
            self.app.show_help = false;
        } else if self.trade.is_open() {
            self.trade.close();
        } else if self.app.error.is_some() {
            self.app.error = None;
        } else if self.app.notification.is_some() {
            self.app.notification = None;
        } else {
            self.app.pop_screen();
        }
    }

    /// Move the active list selection, clamped to the list bounds.
    fn scroll(&mut self, delta: i64) {
        let step = |current: usize, len: usize| -> usize {
            if len == 0 {
                return 0;
            }
            let max = (len - 1) as i64;
            (current as i64).saturating_add(delta).clamp(0, max) as usize
        };

        match self.app.screen().clone() {
            Screen::Discover => {
                let len = self.discover.visible_clusters(&self.catalog).len();
                self.discover.selected_index = step(self.discover.selected_index, len);
            }
            Screen::Watchlist => {
                let len = self.watchlist.active_len();
                self.watchlist.selected_index = step(self.watchlist.selected_index, len);
            }
            Screen::Activity => {
                let len = self.activity.entries.len();
                self.activity.selected_index = step(self.activity.selected_index, len);
            }
            Screen::Cluster(id) => {
                let Some(cluster) = self.catalog.cluster(&id) else {
                    return;
                };
                match self.cluster.tab {
                    ClusterTab::Compare => {
                        let len = self.catalog.compare_rows(cluster).len();
                        self.cluster.selected_market = step(self.cluster.selected_market, len);
                    }
                    ClusterTab::Signals => {
                        let len = self.catalog.cluster_signals(cluster).len();
                        self.cluster.selected_signal = step(self.cluster.selected_signal, len);
                    }
                    ClusterTab::Activity => {}
                }
            }
            Screen::Market(_) | Screen::Profile => {}
        }
    }

    /// Activate the focused item of the current screen.
    fn select(&mut self) {
        match self.app.screen().clone() {
            Screen::Discover => {
                if let Some(cluster) = self.discover.selected_cluster(&self.catalog) {
                    let id = cluster.id.clone();
                    self.reduce(Action::OpenCluster(id));
                }
            }
            Screen::Watchlist => {
                let Some(id) = self.watchlist.selected_id().map(String::from) else {
                    return;
                };
                match self.watchlist.tab {
                    WatchTab::Clusters => self.reduce(Action::OpenCluster(id)),
                    WatchTab::Markets => self.reduce(Action::OpenMarket(id)),
                }
            }
            Screen::Activity => self.select_activity_entry(),
            Screen::Cluster(id) => {
                let Some(cluster) = self.catalog.cluster(&id) else {
                    return;
                };
                match self.cluster.tab {
                    ClusterTab::Compare => {
                        let markets = self.catalog.compare_rows(cluster);
                        if let Some(market) = markets.get(self.cluster.selected_market) {
                            let id = market.id.clone();
                            self.reduce(Action::OpenMarket(id));
                        }
                    }
                    ClusterTab::Signals => {
                        // "Capitalize on Inconsistency": jump to the
                        // signal's first related market.
                        let signals = self.catalog.cluster_signals(cluster);
                        if let Some(market_id) = signals
                            .get(self.cluster.selected_signal)
                            .and_then(|s| s.related_market_ids.first())
                        {
                            let id = market_id.clone();
                            self.reduce(Action::OpenMarket(id));
                        }
                    }
                    ClusterTab::Activity => {}
                }
            }
            Screen::Market(_) => self.open_trade_sheet(),
            Screen::Profile => {}
        }
    }

    /// Activate the focused activity entry: unread signals jump to their
    /// cluster, everything else expands or collapses.
    fn select_activity_entry(&mut self) {
        let Some(entry) = self.activity.selected_entry().cloned() else {
            return;
        };

        if !entry.read {
            self.activity.mark_read(&entry.id);
            if entry.kind == ActivityKind::Signal
                && let Some(cluster_id) = entry.cluster_id.clone()
            {
                self.reduce(Action::OpenCluster(cluster_id));
            }
        } else {
            self.activity.toggle_expanded(&entry.id);
        }
    }

    /// Watch/unwatch the entity the current screen focuses.
    fn toggle_watch(&mut self) {
        let toggled = match self.app.screen().clone() {
            Screen::Discover => {
                let picked = self
                    .discover
                    .selected_cluster(&self.catalog)
                    .map(|c| (c.id.clone(), c.title.clone()));
                picked.map(|(id, title)| (self.watchlist.toggle_cluster(&id), title))
            }
            Screen::Cluster(id) => {
                let title = self.catalog.cluster(&id).map(|c| c.title.clone());
                title.map(|title| (self.watchlist.toggle_cluster(&id), title))
            }
            Screen::Market(id) => {
                let title = self.catalog.market(&id).map(|m| m.title.clone());
                title.map(|title| (self.watchlist.toggle_market(&id), title))
            }
            Screen::Watchlist => {
                let result = match self.watchlist.selected_id().map(String::from) {
                    Some(id) => {
                        let title = match self.watchlist.tab {
                            WatchTab::Clusters => {
                                self.catalog.cluster(&id).map(|c| c.title.clone())
                            }
                            WatchTab::Markets => {
                                self.catalog.market(&id).map(|m| m.title.clone())
                            }
                        }
                        .unwrap_or_else(|| id.clone());
                        let watched = match self.watchlist.tab {
                            WatchTab::Clusters => self.watchlist.toggle_cluster(&id),
                            WatchTab::Markets => self.watchlist.toggle_market(&id),
                        };
                        Some((watched, title))
                    }
                    None => None,
                };
                // keep the selection inside the shrunken list
                let len = self.watchlist.active_len();
                if self.watchlist.selected_index >= len && len > 0 {
                    self.watchlist.selected_index = len - 1;
                }
                result
            }
            Screen::Activity | Screen::Profile => None,
        };

        if let Some((watched, title)) = toggled {
            let notification = if watched {
                Notification::success(format!("Watching {title}"))
            } else {
                Notification::info(format!("Removed {title} from watchlist"))
            };
            self.app.notification = Some(notification);
        }
    }

    /// Open the trade sheet for the current market.
    fn open_trade_sheet(&mut self) {
        let Some(market) = self.current_market() else {
            return;
        };
        if market.is_tradeable() {
            let id = market.id.clone();
            self.trade.open(id);
        } else {
            self.app.notification =
                Some(Notification::warning("Market is locked for trading"));
        }
    }

    /// Confirm the open trade form.
    fn confirm_trade(&mut self) {
        let Some(form) = self.trade.form.clone() else {
            return;
        };
        let Some(market) = self.catalog.market(&form.market_id).cloned() else {
            self.trade.close();
            return;
        };

        if let Some(ticket) = self.trade.confirm(&market) {
            let message = match ticket.mode {
                ExecutionMode::Manual => format!("Order for {} dispatched.", ticket.side),
                ExecutionMode::Agent => format!(
                    "Agent active for {}m. Monitoring arbitrage...",
                    ticket.runtime_mins.unwrap_or_default()
                ),
            };
            tracing::info!(ticket_id = %ticket.id, market = %ticket.market_id, "trade confirmed");
            self.app.notification = Some(Notification::success(message));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        Store::new(Catalog::load(), tx)
    }

    #[test]
    fn test_open_and_back_preserves_origin() {
        let mut store = store();
        store.reduce(Action::SetScreen(Screen::Watchlist));
        store.reduce(Action::OpenCluster("c1".into()));
        store.reduce(Action::OpenMarket("m1".into()));
        assert_eq!(store.app.screen(), &Screen::Market("m1".into()));

        store.reduce(Action::NavigateBack);
        assert_eq!(store.app.screen(), &Screen::Cluster("c1".into()));
        store.reduce(Action::NavigateBack);
        assert_eq!(store.app.screen(), &Screen::Watchlist);
    }

    #[test]
    fn test_open_unknown_cluster_sets_error() {
        let mut store = store();
        store.reduce(Action::OpenCluster("c99".into()));
        assert!(store.app.error.is_some());
        assert_eq!(store.app.screen(), &Screen::Discover);
    }

    #[test]
    fn test_scroll_clamps_at_bounds() {
        let mut store = store();
        store.reduce(Action::ScrollUp);
        assert_eq!(store.discover.selected_index, 0);
        store.reduce(Action::GoToBottom);
        assert_eq!(store.discover.selected_index, 9);
        store.reduce(Action::ScrollDown);
        assert_eq!(store.discover.selected_index, 9);
        store.reduce(Action::GoToTop);
        assert_eq!(store.discover.selected_index, 0);
    }

    #[test]
    fn test_select_on_discover_opens_cluster() {
        let mut store = store();
        store.reduce(Action::ScrollDown);
        store.reduce(Action::Select);
        assert_eq!(store.app.screen(), &Screen::Cluster("c2".into()));
    }

    #[test]
    fn test_live_search_filters_and_resets_selection() {
        let mut store = store();
        store.reduce(Action::GoToBottom);
        store.reduce(Action::SetInputMode(InputMode::Search));
        for c in "eth".chars() {
            store.reduce(Action::SearchChar(c));
        }
        assert_eq!(store.discover.selected_index, 0);
        let visible = store.discover.visible_clusters(&store.catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "c4");

        store.reduce(Action::CancelSearch);
        assert_eq!(store.discover.search_query, None);
        assert_eq!(store.discover.visible_clusters(&store.catalog).len(), 10);
    }

    #[test]
    fn test_scan_lifecycle_ranks_clusters() {
        let mut store = store();
        store.reduce(Action::StartScan);
        assert!(store.discover.is_scanning());
        // a second start while running is ignored
        store.reduce(Action::ScanProgress { step: 2, found: 6 });
        store.reduce(Action::StartScan);
        assert_eq!(store.discover.scan, Some(ScanState { step: 2, found: 6 }));

        store.reduce(Action::ScanCompleted);
        assert!(!store.discover.is_scanning());
        assert!(store.discover.ranked);
        // c3 and c7 share the top score; stable sort keeps c3 first
        assert_eq!(store.discover.order.first().map(String::as_str), Some("c3"));
    }

    #[test]
    fn test_insight_slots_last_write_wins() {
        let mut store = store();
        store.reduce(Action::InsightLoading("s1".into()));
        assert_eq!(store.cluster.insight("s1"), Some(&InsightStatus::Loading));
        store.reduce(Action::InsightLoaded {
            signal_id: "s1".into(),
            text: "first".into(),
        });
        store.reduce(Action::InsightLoaded {
            signal_id: "s1".into(),
            text: "second".into(),
        });
        assert_eq!(
            store.cluster.insight("s1"),
            Some(&InsightStatus::Ready("second".into()))
        );
    }

    #[test]
    fn test_chart_pointer_only_acts_on_market_screen() {
        let mut store = store();
        store.reduce(Action::ChartPointerMoved(0.5));
        assert_eq!(store.market.readout(), None);

        store.reduce(Action::OpenMarket("m1".into()));
        store.reduce(Action::ChartPointerMoved(1.0));
        let readout = store.market.readout().unwrap();
        assert_eq!(readout.index, 7);
        assert_eq!(readout.percent, 65);

        store.reduce(Action::ChartPointerLeft);
        assert_eq!(store.market.readout(), None);
    }

    #[test]
    fn test_trade_flow_manual() {
        let mut store = store();
        store.reduce(Action::OpenMarket("m1".into()));
        store.reduce(Action::Select);
        assert!(store.trade.is_open());

        store.reduce(Action::SetTradeSide(TradeSide::No));
        store.reduce(Action::AdjustTrade(5));
        store.reduce(Action::ConfirmTrade);

        assert!(!store.trade.is_open());
        assert_eq!(store.trade.tickets.len(), 1);
        let ticket = &store.trade.tickets[0];
        assert_eq!(ticket.side, TradeSide::No);
        assert_eq!(ticket.size, rust_decimal_macros::dec!(150));
        assert!(
            store
                .app
                .notification
                .as_ref()
                .is_some_and(|n| n.message.contains("NO"))
        );
    }

    #[test]
    fn test_trade_agent_mode_adjusts_runtime() {
        let mut store = store();
        store.reduce(Action::OpenMarket("m1".into()));
        store.reduce(Action::OpenTradeSheet);
        store.reduce(Action::ToggleTradeMode);
        store.reduce(Action::AdjustTrade(-2));
        store.reduce(Action::ConfirmTrade);

        let ticket = &store.trade.tickets[0];
        assert_eq!(ticket.mode, ExecutionMode::Agent);
        assert_eq!(ticket.runtime_mins, Some(50));
        // size untouched in agent mode
        assert_eq!(ticket.size, rust_decimal_macros::dec!(100));
    }

    #[test]
    fn test_back_closes_trade_sheet_before_popping() {
        let mut store = store();
        store.reduce(Action::OpenMarket("m1".into()));
        store.reduce(Action::OpenTradeSheet);
        store.reduce(Action::NavigateBack);
        assert!(!store.trade.is_open());
        assert_eq!(store.app.screen(), &Screen::Market("m1".into()));
    }

    #[test]
    fn test_watch_toggle_from_market_screen() {
        let mut store = store();
        store.reduce(Action::OpenMarket("m9".into()));
        store.reduce(Action::ToggleWatch);
        assert!(store.watchlist.is_watching_market("m9"));
        store.reduce(Action::ToggleWatch);
        assert!(!store.watchlist.is_watching_market("m9"));
    }

    #[test]
    fn test_unread_signal_entry_jumps_to_cluster() {
        let mut store = store();
        store.reduce(Action::SetScreen(Screen::Activity));
        // a1 is an unread signal pointing at c1
        store.reduce(Action::Select);
        assert_eq!(store.app.screen(), &Screen::Cluster("c1".into()));
        assert!(store.activity.entries[0].read);
    }

    #[test]
    fn test_mark_all_read() {
        let mut store = store();
        store.reduce(Action::MarkAllRead);
        assert!(store.activity.all_read());
    }
}
