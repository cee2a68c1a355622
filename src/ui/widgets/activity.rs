//! Activity feed screen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::data::{ActivityEntry, ActivityKind};
use crate::state::Store;
use crate::ui::Theme;

/// Activity screen widget.
pub struct ActivityScreen;

impl ActivityScreen {
    /// Render the activity screen.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Min(0),    // feed
                Constraint::Length(1), // footer
            ])
            .split(area);

        Self::render_header(frame, chunks[0], store, theme);
        Self::render_feed(frame, chunks[1], store, theme);

        let footer = Paragraph::new(Line::from(Span::styled(
            "· CHRONICLE COMPLETE ·",
            Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
        )))
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(footer, chunks[2]);
    }

    fn render_header(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let mark = if store.activity.all_read() {
            Span::styled("✓ All Read", Style::default().fg(theme.muted))
        } else {
            Span::styled(
                "[m] Mark Read",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )
        };

        let title = Span::styled(
            " Activity",
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        );
        let subtitle = Span::styled(
            "  Intelligence and system logs.",
            Style::default().fg(theme.muted),
        );

        let used = title.content.chars().count() + subtitle.content.chars().count();
        let pad = (area.width as usize).saturating_sub(used + mark.content.chars().count() + 1);

        let line = Line::from(vec![
            title,
            subtitle,
            Span::raw(" ".repeat(pad)),
            mark,
            Span::raw(" "),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_feed(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let items: Vec<ListItem> = store
            .activity
            .entries
            .iter()
            .map(|entry| {
                let expanded = store.activity.is_expanded(&entry.id);
                ListItem::new(Text::from(entry_lines(entry, expanded, theme)))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(theme.highlight())
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(Some(store.activity.selected_index));
        frame.render_stateful_widget(list, area, &mut state);
    }
}

fn entry_lines(entry: &ActivityEntry, expanded: bool, theme: &Theme) -> Vec<Line<'static>> {
    let (icon, icon_color) = match entry.kind {
        ActivityKind::Signal => ("⚡", theme.accent),
        ActivityKind::Alert => ("◉", theme.warning),
        ActivityKind::System => ("ℹ", theme.muted),
    };

    let title_style = if entry.read {
        Style::default().fg(theme.muted)
    } else {
        Style::default()
            .fg(theme.foreground)
            .add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{icon} "), Style::default().fg(icon_color)),
        Span::styled(entry.kind.to_string().to_uppercase(), theme.label()),
        Span::raw("  "),
        Span::styled(entry.title.clone(), title_style),
        Span::styled(format!("   {}", entry.timestamp), theme.label()),
    ])];

    // Unread entries show their message inline; read ones collapse until
    // expanded.
    if !entry.read || expanded {
        lines.push(Line::from(Span::styled(
            format!("   {}", entry.message),
            Style::default().fg(theme.muted),
        )));
        if !entry.read && entry.kind == ActivityKind::Signal && entry.cluster_id.is_some() {
            lines.push(Line::from(vec![
                Span::styled("   PRIORITY INTEL ", Style::default().fg(theme.accent)),
                Span::styled("→ investigate node [Enter]", Style::default().fg(theme.border)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines
}
