//! Watchlist screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState, Paragraph},
};

use super::cards::{cluster_card_lines, market_row_lines};
use crate::state::{Store, WatchTab};
use crate::ui::Theme;

/// Watchlist screen widget.
pub struct WatchlistScreen;

impl WatchlistScreen {
    /// Render the watchlist screen.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Length(2), // tabs
                Constraint::Min(0),    // list
            ])
            .split(area);

        let header = vec![
            Line::from(Span::styled(
                " Watchlist",
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                " High-conviction market monitoring.",
                Style::default().fg(theme.muted),
            )),
        ];
        frame.render_widget(Paragraph::new(header), chunks[0]);

        Self::render_tabs(frame, chunks[1], store, theme);

        match store.watchlist.tab {
            WatchTab::Clusters => Self::render_clusters(frame, chunks[2], store, theme),
            WatchTab::Markets => Self::render_markets(frame, chunks[2], store, theme),
        }
    }

    fn render_tabs(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let mut spans = vec![Span::raw(" ")];
        for tab in [WatchTab::Clusters, WatchTab::Markets] {
            let selected = store.watchlist.tab == tab;
            let style = if selected {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.muted)
            };
            spans.push(Span::styled(format!(" {tab} "), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            "[Tab] switch  [w] unwatch",
            Style::default().fg(theme.border),
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_clusters(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let clusters: Vec<_> = store
            .watchlist
            .clusters
            .iter()
            .filter_map(|id| store.catalog.cluster(id))
            .collect();

        if clusters.is_empty() {
            Self::render_empty(frame, area, "No watched clusters yet", theme);
            return;
        }

        let items: Vec<ListItem> = clusters
            .iter()
            .map(|c| ListItem::new(Text::from(cluster_card_lines(c, true, theme))))
            .collect();

        let list = List::new(items)
            .highlight_style(theme.highlight())
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        if store.watchlist.tab == WatchTab::Clusters {
            state.select(Some(store.watchlist.selected_index));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_markets(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let markets: Vec<_> = store
            .watchlist
            .markets
            .iter()
            .filter_map(|id| store.catalog.market(id))
            .collect();

        if markets.is_empty() {
            Self::render_empty(frame, area, "No watched markets yet", theme);
            return;
        }

        let items: Vec<ListItem> = markets
            .iter()
            .map(|m| ListItem::new(Text::from(market_row_lines(m, true, theme))))
            .collect();

        let list = List::new(items)
            .highlight_style(theme.highlight())
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        if store.watchlist.tab == WatchTab::Markets {
            state.select(Some(store.watchlist.selected_index));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_empty(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(theme.muted),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Mirror surfaces price inconsistencies automatically.",
                Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
            )),
            Line::from(Span::styled(
                "Watch clusters and markets with [w] to monitor them here.",
                Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}
