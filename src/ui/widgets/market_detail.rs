//! Market detail screen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use rust_decimal::Decimal;

use super::PriceChart;
use crate::data::Market;
use crate::state::Store;
use crate::ui::{Theme, layout::market_chart_block};

/// Market detail screen widget.
pub struct MarketScreen;

impl MarketScreen {
    /// Render the market detail screen.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        store: &Store,
        theme: &Theme,
        market_id: &str,
        smoothing_steps: usize,
    ) {
        let Some(market) = store.catalog.market(market_id) else {
            let missing = Paragraph::new("Market not found")
                .style(Style::default().fg(theme.muted))
                .alignment(ratatui::layout::Alignment::Center);
            frame.render_widget(missing, area);
            return;
        };

        // Header rows above the chart; heights must stay in step with
        // the chart hit box in ui::layout.
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // venue bar
                Constraint::Length(2), // title
                Constraint::Length(4), // probability
                Constraint::Min(0),    // chart + below
            ])
            .split(area);

        Self::render_venue_bar(frame, chunks[0], market, store, theme);
        Self::render_title(frame, chunks[1], market, theme);
        Self::render_probability(frame, chunks[2], market, theme);

        let chart_area = market_chart_block(area);
        if chart_area.height >= 3 {
            PriceChart::render(
                frame,
                chart_area,
                &market.price_history,
                &store.market,
                smoothing_steps,
                theme,
            );
        }

        // Everything below the chart
        let below_y = chart_area.y + chart_area.height;
        let bottom = Rect {
            x: area.x + 1,
            y: below_y,
            width: area.width.saturating_sub(2),
            height: (area.y + area.height).saturating_sub(below_y),
        };
        Self::render_below_chart(frame, bottom, market, store, theme);
    }

    fn render_venue_bar(
        frame: &mut Frame,
        area: Rect,
        market: &Market,
        store: &Store,
        theme: &Theme,
    ) {
        let watched = store.watchlist.is_watching_market(&market.id);
        let watch_label = if watched { "◆ watched" } else { "◇ watch [w]" };

        let line = Line::from(vec![
            Span::styled(" ‹ back [Esc]  ", Style::default().fg(theme.muted)),
            Span::styled(
                market.venue.to_uppercase(),
                Style::default()
                    .fg(theme.muted)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(watch_label, Style::default().fg(theme.warning)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_title(frame: &mut Frame, area: Rect, market: &Market, theme: &Theme) {
        let title = Paragraph::new(Line::from(Span::styled(
            format!(" {}", market.title),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )))
        .wrap(Wrap { trim: true });
        frame.render_widget(title, area);
    }

    fn render_probability(frame: &mut Frame, area: Rect, market: &Market, theme: &Theme) {
        let change_pct = (market.price_change_24h * Decimal::ONE_HUNDRED).abs();
        let (arrow, change_color) = if market.is_up() {
            ("↑", theme.success)
        } else {
            ("↓", theme.muted)
        };

        let lines = vec![
            Line::from(Span::styled(" CURRENT PROBABILITY", theme.label())),
            Line::from(vec![
                Span::styled(
                    format!(" {}¢", market.yes_cents()),
                    Style::default()
                        .fg(theme.foreground)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {arrow} {:.1}%", change_pct),
                    Style::default()
                        .fg(change_color)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_below_chart(
        frame: &mut Frame,
        area: Rect,
        market: &Market,
        store: &Store,
        theme: &Theme,
    ) {
        if area.height == 0 {
            return;
        }

        let desc_height = if store.market.desc_expanded { 6 } else { 2 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(desc_height), // description
                Constraint::Length(1),           // expand hint
                Constraint::Length(3),           // meta rows
                Constraint::Min(0),
                Constraint::Length(1), // action hint
            ])
            .split(area);

        let description = Paragraph::new(market.description.clone())
            .style(Style::default().fg(theme.muted))
            .wrap(Wrap { trim: true });
        frame.render_widget(description, chunks[0]);

        let hint_text = if store.market.desc_expanded {
            "[d] Less"
        } else {
            "[d] Market Info"
        };
        let hint = Paragraph::new(Span::styled(
            hint_text,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::UNDERLINED),
        ));
        frame.render_widget(hint, chunks[1]);

        let meta = vec![
            meta_row("RESOLUTION", market.resolution_date.to_string(), theme),
            meta_row("OPEN INTEREST", "$14,290,111".to_string(), theme),
            meta_row("LIQUIDITY", market.liquidity.to_string().to_uppercase(), theme),
        ];
        frame.render_widget(Paragraph::new(meta), chunks[2]);

        let action = if market.is_tradeable() {
            Span::styled(
                " [o] Open Position ",
                Style::default()
                    .fg(theme.background)
                    .bg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(" Market locked ", Style::default().fg(theme.muted))
        };
        frame.render_widget(
            Paragraph::new(Line::from(action)).alignment(ratatui::layout::Alignment::Center),
            chunks[4],
        );
    }
}

fn meta_row(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<16}"), theme.label()),
        Span::styled(
            value,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}
