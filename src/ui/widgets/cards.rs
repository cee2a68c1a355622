//! Shared card/row line builders for clusters and markets.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::truncate_string;
use crate::data::{Cluster, Market, MarketStatus};
use crate::ui::Theme;

/// Lines for one cluster card in a list.
pub fn cluster_card_lines(cluster: &Cluster, watched: bool, theme: &Theme) -> Vec<Line<'static>> {
    let mut title_spans = vec![Span::styled(
        cluster.title.clone(),
        Style::default()
            .fg(theme.foreground)
            .add_modifier(Modifier::BOLD),
    )];
    if cluster.signal_count > 0 {
        title_spans.push(Span::styled(" ●", Style::default().fg(theme.accent)));
    }
    if cluster.is_high_alpha() {
        title_spans.push(Span::styled(
            "  ⚡ALPHA",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
    }
    if watched {
        title_spans.push(Span::styled("  ◇", Style::default().fg(theme.warning)));
    }

    let subtitle = Line::from(Span::styled(
        cluster.subtitle.clone(),
        Style::default().fg(theme.muted),
    ));

    let tags = Line::from(Span::styled(
        cluster.sample_markets.join(" · "),
        Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
    ));

    let rating = cluster
        .alpha_score
        .map(|s| s.to_string())
        .unwrap_or_else(|| "--".to_string());
    let footer = Line::from(vec![
        Span::styled("VOL ", theme.label()),
        Span::styled(
            cluster.volume.clone().unwrap_or_else(|| "N/A".into()),
            Style::default().fg(theme.foreground),
        ),
        Span::styled("   SIGNALS ", theme.label()),
        Span::styled(
            format!("{} detected", cluster.signal_count),
            Style::default().fg(theme.foreground),
        ),
        Span::styled("   RATING ", theme.label()),
        Span::styled(
            rating,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    vec![
        Line::from(title_spans),
        subtitle,
        tags,
        footer,
        Line::from(""),
    ]
}

/// Lines for one market row in a list.
pub fn market_row_lines(market: &Market, watched: bool, theme: &Theme) -> Vec<Line<'static>> {
    let status_color = match market.status {
        MarketStatus::Open => theme.accent,
        MarketStatus::Closed => theme.muted,
        MarketStatus::Resolved => theme.foreground,
    };

    let change_pct = market.price_change_24h * rust_decimal::Decimal::ONE_HUNDRED;
    let (change_text, change_color) = if market.is_up() {
        (format!("+{:.0}%", change_pct), theme.success)
    } else {
        (format!("{:.0}%", change_pct), theme.muted)
    };

    let mut title_spans = vec![Span::styled(
        truncate_string(&market.title, 46),
        Style::default()
            .fg(theme.foreground)
            .add_modifier(Modifier::BOLD),
    )];
    if watched {
        title_spans.push(Span::styled("  ◇", Style::default().fg(theme.warning)));
    }
    title_spans.push(Span::styled(
        format!("   {}¢ ", market.yes_cents()),
        Style::default()
            .fg(theme.foreground)
            .add_modifier(Modifier::BOLD),
    ));
    title_spans.push(Span::styled(change_text, Style::default().fg(change_color)));

    let meta = Line::from(vec![
        Span::styled(market.venue.to_uppercase(), theme.label()),
        Span::styled(" · ", Style::default().fg(theme.border)),
        Span::styled(
            market.status.to_string().to_uppercase(),
            Style::default().fg(status_color),
        ),
        Span::styled(" · ", Style::default().fg(theme.border)),
        Span::styled(format!("{} liquidity", market.liquidity), theme.label()),
    ]);

    vec![Line::from(title_spans), meta, Line::from("")]
}
