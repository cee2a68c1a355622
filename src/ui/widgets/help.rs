//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::Theme;
use crate::ui::layout::centered_rect;

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let popup_area = centered_rect(60, 80, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let section = |name: &'static str| {
            Line::from(vec![Span::styled(
                name,
                Style::default()
                    .fg(theme.warning)
                    .add_modifier(Modifier::BOLD),
            )])
        };
        let entry = |keys: &'static str, action: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {keys:<8}"), Style::default().fg(theme.accent)),
                Span::styled(action, Style::default().fg(theme.foreground)),
            ])
        };

        let help_text = vec![
            section("Navigation"),
            Line::from(""),
            entry("j/↓", "Move down"),
            entry("k/↑", "Move up"),
            entry("Enter", "Select / open"),
            entry("Esc", "Back / close overlay"),
            entry("1-4", "Discover / Watchlist / Activity / Profile"),
            Line::from(""),
            section("Discover"),
            Line::from(""),
            entry("/", "Search clusters"),
            entry("s", "Scan for inconsistencies"),
            entry("w", "Watch/unwatch cluster"),
            Line::from(""),
            section("Cluster"),
            Line::from(""),
            entry("h/l", "Switch Compare/Signals/Activity tab"),
            entry("i", "Request AI insight for signal"),
            Line::from(""),
            section("Market"),
            Line::from(""),
            entry("h/l", "Move chart cursor"),
            entry("o", "Open position (trade sheet)"),
            entry("d", "Expand description"),
            Line::from(""),
            section("Trade Sheet"),
            Line::from(""),
            entry("y/n", "Buy Yes / Buy No"),
            entry("Tab", "Manual / Agent mode"),
            entry("h/l", "Adjust size or runtime"),
            entry("Enter", "Confirm"),
            Line::from(""),
            section("General"),
            Line::from(""),
            entry("t", "Toggle theme"),
            entry("m", "Mark activity read"),
            entry("?", "Toggle help"),
            entry("q", "Quit"),
        ];

        let help = Paragraph::new(help_text).style(theme.base()).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.warning)),
        );

        frame.render_widget(help, popup_area);
    }
}
