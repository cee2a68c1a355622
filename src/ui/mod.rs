//! UI rendering using ratatui.
//!
//! One widget per screen, plus shared chrome (status bar, bottom nav)
//! and overlays (trade sheet, notifications, help). Everything renders
//! from the store; no widget holds state.

pub mod layout;
mod theme;
mod widgets;

pub use layout::Layout;
pub use theme::Theme;

use ratatui::Frame;
use ratatui::widgets::Block;

use crate::config::UiConfig;
use crate::state::{Screen, Store};

/// Main UI renderer.
pub struct Ui;

impl Ui {
    /// Render the entire UI.
    pub fn render(frame: &mut Frame, store: &Store, theme: &Theme, ui_config: &UiConfig) {
        // Paint the themed background first
        frame.render_widget(Block::default().style(theme.base()), frame.area());

        let layout = Layout::new(frame.area());

        widgets::StatusBar::render(frame, layout.status_area, store, theme);
        widgets::BottomNav::render(frame, layout.nav_area, store, theme);

        match store.app.screen().clone() {
            Screen::Discover => {
                widgets::DiscoverScreen::render(frame, layout.content_area, store, theme);
            }
            Screen::Watchlist => {
                widgets::WatchlistScreen::render(frame, layout.content_area, store, theme);
            }
            Screen::Activity => {
                widgets::ActivityScreen::render(frame, layout.content_area, store, theme);
            }
            Screen::Profile => {
                widgets::ProfileScreen::render(frame, layout.content_area, store, theme);
            }
            Screen::Cluster(id) => {
                widgets::ClusterScreen::render(frame, layout.content_area, store, theme, &id);
            }
            Screen::Market(id) => {
                widgets::MarketScreen::render(
                    frame,
                    layout.content_area,
                    store,
                    theme,
                    &id,
                    ui_config.chart_smoothing_steps,
                );
            }
        }

        // Overlays, innermost last
        if store.trade.is_open() {
            widgets::TradeSheet::render(frame, layout.content_area, store, theme);
        }
        if store.app.show_help {
            widgets::HelpPanel::render(frame, frame.area(), theme);
        }
        if let Some(notification) = &store.app.notification {
            widgets::render_notification(frame, layout.notification_area, notification, theme);
        }
        if let Some(error) = &store.app.error {
            widgets::render_error(frame, layout.notification_area, error, theme);
        }
    }
}
