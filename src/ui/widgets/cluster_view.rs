//! Cluster view: header, tabs, and the Compare/Signals/Activity panes.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

use super::cards::market_row_lines;
use crate::data::{Cluster, RelationshipKind, Severity};
use crate::state::{ClusterTab, InsightStatus, Store};
use crate::ui::Theme;

/// Cluster view widget.
pub struct ClusterScreen;

impl ClusterScreen {
    /// Render the cluster view.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme, cluster_id: &str) {
        let Some(cluster) = store.catalog.cluster(cluster_id) else {
            let missing = Paragraph::new("Cluster not found")
                .style(Style::default().fg(theme.muted))
                .alignment(Alignment::Center);
            frame.render_widget(missing, area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(2), // tabs
                Constraint::Min(0),    // tab content
            ])
            .split(area);

        Self::render_header(frame, chunks[0], cluster, store, theme);
        Self::render_tabs(frame, chunks[1], store, theme);

        match store.cluster.tab {
            ClusterTab::Compare => Self::render_compare(frame, chunks[2], cluster, store, theme),
            ClusterTab::Signals => Self::render_signals(frame, chunks[2], cluster, store, theme),
            ClusterTab::Activity => Self::render_activity(frame, chunks[2], cluster, store, theme),
        }
    }

    fn render_header(
        frame: &mut Frame,
        area: Rect,
        cluster: &Cluster,
        store: &Store,
        theme: &Theme,
    ) {
        let mut title_spans = vec![
            Span::styled(" ‹ [Esc] ", Style::default().fg(theme.muted)),
            Span::styled(
                cluster.title.clone(),
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if cluster.is_high_alpha() {
            title_spans.push(Span::styled(
                "  ⚡ALPHA",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        if store.watchlist.is_watching_cluster(&cluster.id) {
            title_spans.push(Span::styled("  ◇", Style::default().fg(theme.warning)));
        }

        let lines = vec![
            Line::from(title_spans),
            Line::from(Span::styled(
                format!("   {}", cluster.subtitle),
                Style::default().fg(theme.muted),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_tabs(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let mut spans = vec![Span::raw(" ")];
        for tab in ClusterTab::ALL {
            let selected = store.cluster.tab == tab;
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
        spans.push(Span::styled("‹h  l›", Style::default().fg(theme.border)));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_compare(
        frame: &mut Frame,
        area: Rect,
        cluster: &Cluster,
        store: &Store,
        theme: &Theme,
    ) {
        let relationships = store.catalog.cluster_relationships(cluster);

        if store.catalog.cluster_markets(cluster).is_empty() {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "NODES DORMANT",
                    Style::default()
                        .fg(theme.foreground)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Comparative data is currently being indexed for this cluster.",
                    Style::default().fg(theme.muted),
                )),
            ];
            let empty = Paragraph::new(lines).alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        // Build one selectable item per market row; group headers ride
        // along as extra lines on their group's first row.
        let mut items: Vec<ListItem> = Vec::new();
        if relationships.is_empty() {
            for market in store.catalog.cluster_markets(cluster) {
                let watched = store.watchlist.is_watching_market(&market.id);
                items.push(ListItem::new(Text::from(market_row_lines(
                    market, watched, theme,
                ))));
            }
        } else {
            for relationship in relationships {
                let dot_color = match relationship.kind {
                    RelationshipKind::Threshold => theme.warning,
                    _ => theme.accent,
                };
                let markets = store.catalog.relationship_markets(relationship);
                for (i, market) in markets.iter().enumerate() {
                    let mut lines = Vec::new();
                    if i == 0 {
                        lines.push(Line::from(vec![
                            Span::styled("• ", Style::default().fg(dot_color)),
                            Span::styled(
                                format!("{} RELATIONSHIP", relationship.kind).to_uppercase(),
                                theme.label(),
                            ),
                        ]));
                        lines.push(Line::from(Span::styled(
                            relationship.description.clone(),
                            Style::default().fg(theme.foreground),
                        )));
                        lines.push(Line::from(""));
                    }
                    let watched = store.watchlist.is_watching_market(&market.id);
                    lines.extend(market_row_lines(market, watched, theme));
                    items.push(ListItem::new(Text::from(lines)));
                }
            }
        }

        let list = List::new(items)
            .highlight_style(theme.highlight())
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(Some(store.cluster.selected_market));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_signals(
        frame: &mut Frame,
        area: Rect,
        cluster: &Cluster,
        store: &Store,
        theme: &Theme,
    ) {
        let signals = store.catalog.cluster_signals(cluster);

        if signals.is_empty() {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "MARKET PARITY",
                    Style::default()
                        .fg(theme.foreground)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Probabilities are currently balanced across reporting venues.",
                    Style::default().fg(theme.muted),
                )),
            ];
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
            return;
        }

        let items: Vec<ListItem> = signals
            .iter()
            .map(|signal| {
                let severity_color = match signal.severity {
                    Severity::High => theme.error,
                    Severity::Med => theme.warning,
                    Severity::Low => theme.accent,
                };

                let mut lines = vec![
                    Line::from(vec![
                        Span::styled("▲ ", Style::default().fg(severity_color)),
                        Span::styled(signal.kind.to_string().to_uppercase(), theme.label()),
                        Span::styled(
                            format!("   {} PRIORITY", signal.severity).to_uppercase(),
                            Style::default().fg(severity_color),
                        ),
                    ]),
                    Line::from(Span::styled(
                        signal.explanation.clone(),
                        Style::default()
                            .fg(theme.foreground)
                            .add_modifier(Modifier::BOLD),
                    )),
                ];

                match store.cluster.insight(&signal.id) {
                    Some(InsightStatus::Loading) => {
                        lines.push(Line::from(Span::styled(
                            "  Analyzing node...",
                            Style::default()
                                .fg(theme.accent)
                                .add_modifier(Modifier::ITALIC),
                        )));
                    }
                    Some(InsightStatus::Ready(text)) => {
                        lines.push(Line::from(Span::styled(
                            "  ✦ MIRROR INTELLIGENCE",
                            Style::default()
                                .fg(theme.accent)
                                .add_modifier(Modifier::BOLD),
                        )));
                        lines.push(Line::from(Span::styled(
                            format!("  {text}"),
                            Style::default().fg(theme.muted),
                        )));
                    }
                    None => {
                        lines.push(Line::from(Span::styled(
                            "  [i] Request AI Deep-Dive",
                            Style::default().fg(theme.muted),
                        )));
                    }
                }

                lines.push(Line::from(Span::styled(
                    "  [Enter] Capitalize on Inconsistency",
                    Style::default().fg(theme.border),
                )));
                lines.push(Line::from(""));

                ListItem::new(Text::from(lines))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(theme.highlight())
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(Some(store.cluster.selected_signal));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_activity(
        frame: &mut Frame,
        area: Rect,
        cluster: &Cluster,
        store: &Store,
        theme: &Theme,
    ) {
        let entries = store.catalog.cluster_activity(&cluster.id);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("⚡ CLUSTER HEARTBEAT", theme.label()),
                Span::styled("   ● STABLE", Style::default().fg(theme.success)),
            ]),
            Line::from(""),
        ];

        if entries.is_empty() {
            lines.push(Line::from(Span::styled(
                "Silence across the network",
                Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
            )));
        } else {
            for entry in entries {
                lines.push(Line::from(vec![
                    Span::styled("○ ", Style::default().fg(theme.accent)),
                    Span::styled(
                        entry.title.clone(),
                        Style::default()
                            .fg(theme.foreground)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("   {}", entry.timestamp), theme.label()),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("  {}", entry.message),
                    Style::default().fg(theme.muted),
                )));
                lines.push(Line::from(""));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("NODE OBSERVATIONS", theme.label())));
        lines.push(Line::from(Span::styled(
            format!(
                "Predictive models show high confidence in current pricing structures. \
                 Liquidity remains robust at {}.",
                cluster.volume.as_deref().unwrap_or("N/A")
            ),
            Style::default().fg(theme.muted),
        )));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
