//! Trade sheet popup.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::data::Market;
use crate::state::{ExecutionMode, Store, TradeForm, TradeSide};
use crate::ui::{Theme, layout::sheet_rect};

/// Trade sheet popup widget.
pub struct TradeSheet;

impl TradeSheet {
    /// Render the trade sheet over the content area.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let Some(form) = store.trade.form.as_ref() else {
            return;
        };
        let Some(market) = store.catalog.market(&form.market_id) else {
            return;
        };

        let popup = sheet_rect(area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Review Order ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(theme.base());
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // venue line
                Constraint::Length(2), // mode tabs
                Constraint::Min(6),    // mode body
                Constraint::Length(2), // escrow note
                Constraint::Length(1), // confirm hint
            ])
            .split(inner);

        let venue = Paragraph::new(Line::from(Span::styled(
            format!("↗ {} DIRECT EXECUTION", market.venue.to_uppercase()),
            theme.label(),
        )));
        frame.render_widget(venue, chunks[0]);

        Self::render_mode_tabs(frame, chunks[1], form, theme);

        match form.mode {
            ExecutionMode::Manual => Self::render_manual(frame, chunks[2], form, market, theme),
            ExecutionMode::Agent => Self::render_agent(frame, chunks[2], form, theme),
        }

        let note = Paragraph::new(Line::from(Span::styled(
            "🛡 Collateral is locked in escrow during active execution.",
            Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
        )));
        frame.render_widget(note, chunks[3]);

        let confirm = match form.mode {
            ExecutionMode::Manual => format!(" [Enter] Confirm {} Purchase ", form.side),
            ExecutionMode::Agent => " [Enter] Deploy Intelligence Agent ".to_string(),
        };
        let confirm_style = match form.mode {
            ExecutionMode::Manual => Style::default()
                .fg(theme.background)
                .bg(theme.foreground)
                .add_modifier(Modifier::BOLD),
            ExecutionMode::Agent => Style::default()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(confirm, confirm_style)))
                .alignment(Alignment::Center),
            chunks[4],
        );
    }

    fn render_mode_tabs(frame: &mut Frame, area: Rect, form: &TradeForm, theme: &Theme) {
        let mut spans = vec![Span::styled("EXECUTION MODE  ", theme.label())];
        for mode in [ExecutionMode::Manual, ExecutionMode::Agent] {
            let selected = form.mode == mode;
            let style = if selected {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.muted)
            };
            spans.push(Span::styled(format!(" {mode} "), style));
        }
        spans.push(Span::styled("  [Tab] switch", Style::default().fg(theme.border)));
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_manual(
        frame: &mut Frame,
        area: Rect,
        form: &TradeForm,
        market: &Market,
        theme: &Theme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // side selector
                Constraint::Length(2), // size gauge
                Constraint::Length(2), // payout + fee
                Constraint::Min(0),
            ])
            .split(area);

        let side_button = |side: TradeSide, price_cents: Decimal| {
            let selected = form.side == side;
            let style = if selected {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.foreground)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted)
            };
            Span::styled(format!("  {side} {price_cents}¢  "), style)
        };

        let sides = Line::from(vec![
            side_button(TradeSide::Yes, market.yes_cents()),
            Span::raw("  "),
            side_button(TradeSide::No, market.no_cents()),
            Span::styled("   [y]/[n]", Style::default().fg(theme.border)),
        ]);
        frame.render_widget(Paragraph::new(sides), chunks[0]);

        // Size selector: 10..=1000 step 10
        let ratio = ((form.size - Decimal::TEN) / Decimal::from(990))
            .to_f64()
            .unwrap_or(0.0)
            .clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .block(Block::default().title(Line::from(vec![
                Span::styled("SIZE ($USD)  ", theme.label()),
                Span::styled(
                    format!("${}", form.size),
                    Style::default()
                        .fg(theme.foreground)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  ‹h  l›", Style::default().fg(theme.border)),
            ])))
            .gauge_style(Style::default().fg(theme.foreground).bg(theme.selection))
            .ratio(ratio)
            .label("");
        frame.render_widget(gauge, chunks[1]);

        let lines = vec![
            Line::from(vec![
                Span::styled("Estimated Payout  ", Style::default().fg(theme.muted)),
                Span::styled(
                    format!("${:.2}", form.payout(market)),
                    Style::default()
                        .fg(theme.foreground)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Network Fee       ", Style::default().fg(theme.muted)),
                Span::styled(
                    format!("${:.2}", form.fee()),
                    Style::default()
                        .fg(theme.foreground)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), chunks[2]);
    }

    fn render_agent(frame: &mut Frame, area: Rect, form: &TradeForm, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // blurb
                Constraint::Length(2), // runtime gauge
                Constraint::Length(2), // placards
                Constraint::Min(0),
            ])
            .split(area);

        let blurb = Paragraph::new(Line::from(vec![
            Span::styled("⚡ Autonomous Arbitrage  ", Style::default().fg(theme.accent)),
            Span::styled(
                "executes only when target implied probability matches your criteria.",
                Style::default().fg(theme.muted),
            ),
        ]));
        frame.render_widget(blurb, chunks[0]);

        // Runtime selector: 5..=240 minutes step 5
        let ratio = ((form.runtime_mins - 5) as f64 / 235.0).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .block(Block::default().title(Line::from(vec![
                Span::styled("BOT RUNTIME  ", theme.label()),
                Span::styled(
                    format!("{} minutes", form.runtime_mins),
                    Style::default()
                        .fg(theme.foreground)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  ‹h  l›  (5m – 4h)", Style::default().fg(theme.border)),
            ])))
            .gauge_style(Style::default().fg(theme.accent).bg(theme.selection))
            .ratio(ratio)
            .label("");
        frame.render_widget(gauge, chunks[1]);

        let placards = Paragraph::new(Line::from(vec![
            Span::styled("EXIT STRATEGY ", theme.label()),
            Span::styled("Convergence", Style::default().fg(theme.foreground)),
            Span::raw("    "),
            Span::styled("MAX SLIPPAGE ", theme.label()),
            Span::styled("0.2% Fixed", Style::default().fg(theme.foreground)),
        ]));
        frame.render_widget(placards, chunks[2]);
    }
}
