//! Status bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::Store;
use crate::ui::Theme;

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let brand = Span::styled(
            " ◆ Mirror ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        );

        let screen = Span::styled(
            format!(" {} ", store.app.screen().title()),
            Style::default().fg(theme.foreground),
        );

        let mode = if store.discover.is_scanning() {
            Span::styled(
                " Deep Scanning... ",
                Style::default()
                    .fg(theme.warning)
                    .add_modifier(Modifier::ITALIC),
            )
        } else if store.discover.ranked {
            Span::styled(" Arb Ranked ", Style::default().fg(theme.accent))
        } else {
            Span::raw("")
        };

        let unread = store.activity.unread_count();
        let unread_span = if unread > 0 {
            Span::styled(format!(" {unread} unread "), Style::default().fg(theme.warning))
        } else {
            Span::raw("")
        };

        let help_hint = Span::styled(" Press ? for help ", Style::default().fg(theme.muted));

        let left = vec![
            brand,
            Span::raw("|"),
            screen,
            Span::raw("|"),
            mode,
            unread_span,
        ];

        let left_len: usize = left.iter().map(|s| s.content.chars().count()).sum();
        let right_len = help_hint.content.chars().count();
        let padding = area
            .width
            .saturating_sub(left_len as u16 + right_len as u16);

        let mut spans = left;
        spans.push(Span::raw(" ".repeat(padding as usize)));
        spans.push(help_hint);

        let paragraph =
            Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.border));

        frame.render_widget(paragraph, area);
    }
}
