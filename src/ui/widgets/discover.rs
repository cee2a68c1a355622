//! Discover screen: searchable cluster cards and the scan overlay.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::cards::cluster_card_lines;
use crate::state::Store;
use crate::ui::{Theme, layout::centered_rect};

/// Discover screen widget.
pub struct DiscoverScreen;

impl DiscoverScreen {
    /// Render the discover screen.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Length(2), // search
                Constraint::Min(0),    // cluster list
            ])
            .split(area);

        Self::render_header(frame, chunks[0], store, theme);
        Self::render_search(frame, chunks[1], store, theme);
        Self::render_clusters(frame, chunks[2], store, theme);

        if store.discover.is_scanning() {
            Self::render_scan_overlay(frame, area, store, theme);
        }
    }

    fn render_header(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let label = if store.discover.is_scanning() {
            Span::styled(
                "DEEP SCANNING...",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )
        } else if store.discover.ranked {
            Span::styled(
                "⊕ ARB RANKED",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("OPTIMIZED CLUSTERS", theme.label())
        };

        let header = Line::from(vec![
            Span::styled(
                " Mirror",
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            label,
            Span::styled("   [s] scan  [t] theme", Style::default().fg(theme.border)),
        ]);

        frame.render_widget(Paragraph::new(header), area);
    }

    fn render_search(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let searching = store.app.is_searching();
        let query = &store.app.search_buffer;

        let line = if query.is_empty() && !searching {
            Line::from(vec![
                Span::styled(" ⌕ ", Style::default().fg(theme.muted)),
                Span::styled(
                    "Search markets or topics  [/]",
                    Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
                ),
            ])
        } else {
            let mut spans = vec![
                Span::styled(" ⌕ ", Style::default().fg(theme.accent)),
                Span::styled(query.clone(), Style::default().fg(theme.foreground)),
            ];
            if searching {
                spans.push(Span::styled(
                    "█",
                    Style::default().fg(theme.accent).add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            Line::from(spans)
        };

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(if searching {
                theme.foreground
            } else {
                theme.border
            }));

        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_clusters(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let clusters = store.discover.visible_clusters(&store.catalog);

        if clusters.is_empty() {
            let empty = Paragraph::new("No clusters match your criteria")
                .style(Style::default().fg(theme.muted))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = clusters
            .iter()
            .map(|cluster| {
                let watched = store.watchlist.is_watching_cluster(&cluster.id);
                ListItem::new(Text::from(cluster_card_lines(cluster, watched, theme)))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(theme.highlight())
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(Some(store.discover.selected_index));

        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_scan_overlay(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let Some(scan) = store.discover.scan else {
            return;
        };

        let popup = centered_rect(70, 40, area);
        frame.render_widget(Clear, popup);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "◉ SURFACING EDGE SIGNALS",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                scan.status(),
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("{} INCONSISTENCIES INDEXED", scan.found),
                theme.label(),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent)),
            )
            .style(theme.base());

        frame.render_widget(paragraph, popup);
    }
}
