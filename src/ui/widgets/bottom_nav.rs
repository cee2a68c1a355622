//! Bottom navigation bar.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{Screen, Store};
use crate::ui::Theme;

/// Bottom navigation: the four root screens.
pub struct BottomNav;

impl BottomNav {
    /// Render the navigation bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let items = [
            ("1", "◎", "Discover", Screen::Discover),
            ("2", "◇", "Watchlist", Screen::Watchlist),
            ("3", "⚡", "Activity", Screen::Activity),
            ("4", "●", "Profile", Screen::Profile),
        ];

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(inner);

        // The root behind the current route keeps its tab lit
        let active_root = match store.app.screen() {
            Screen::Cluster(_) | Screen::Market(_) => None,
            screen => Some(screen.clone()),
        };

        for ((key, icon, label, screen), chunk) in items.into_iter().zip(chunks.iter()) {
            let is_active = active_root.as_ref() == Some(&screen);
            let style = if is_active {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted)
            };

            let line = Line::from(vec![
                Span::styled(format!("{icon} "), style),
                Span::styled(label, style),
                Span::styled(format!(" [{key}]"), Style::default().fg(theme.border)),
            ]);

            let paragraph = Paragraph::new(line).alignment(Alignment::Center);
            frame.render_widget(paragraph, *chunk);
        }
    }
}
