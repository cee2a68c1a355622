//! Profile screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{Store, ThemeMode};
use crate::ui::Theme;

/// Profile screen widget.
pub struct ProfileScreen;

impl ProfileScreen {
    /// Render the profile screen.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // identity
                Constraint::Length(4), // stat tiles
                Constraint::Min(6),    // preferences
                Constraint::Length(1), // sign out hint
            ])
            .split(area);

        Self::render_identity(frame, chunks[0], store, theme);
        Self::render_stats(frame, chunks[1], store, theme);
        Self::render_preferences(frame, chunks[2], theme);

        let signout = Paragraph::new(Line::from(Span::styled(
            "⏻ Sign Out",
            Style::default().fg(theme.error),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(signout, chunks[3]);
    }

    fn render_identity(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let mode_hint = match store.app.theme_mode {
            ThemeMode::Dark => "[t] ☀ light mode",
            ThemeMode::Light => "[t] ☾ dark mode",
        };

        let lines = vec![
            Line::from(Span::styled(
                "▐ JT ▌",
                Style::default()
                    .fg(theme.background)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "John Trader",
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("FOUNDING MEMBER", theme.label())),
            Line::from(Span::styled(mode_hint, Style::default().fg(theme.border))),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_stats(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let tiles = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(area);

        let tile = |label: &'static str, value: String, color| {
            Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(label, theme.label())),
                Line::from(Span::styled(
                    value,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
            ])
            .alignment(Alignment::Center)
        };

        // Authored profile stats plus this session's ticket count
        frame.render_widget(
            tile("SIGNALS CAUGHT", "112".into(), theme.foreground),
            tiles[0],
        );
        frame.render_widget(tile("WIN RATE", "64%".into(), theme.accent), tiles[1]);
        frame.render_widget(
            tile(
                "SESSION ORDERS",
                store.trade.tickets.len().to_string(),
                theme.success,
            ),
            tiles[2],
        );
    }

    fn render_preferences(frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(Span::styled(" ⚙ PREFERENCES ", theme.label()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let items = [
            ("◎", "Push Notifications"),
            ("⚿", "API Integrations"),
            ("🛡", "Privacy & Security"),
            ("ℹ", "Mirror Handbook"),
        ];

        let lines: Vec<Line> = items
            .into_iter()
            .map(|(icon, label)| {
                Line::from(vec![
                    Span::styled(format!(" {icon}  "), Style::default().fg(theme.muted)),
                    Span::styled(label, Style::default().fg(theme.foreground)),
                    Span::styled("  ›", Style::default().fg(theme.border)),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
