//! Layout management for the TUI.

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Rows the market detail screen reserves above the chart block.
const MARKET_HEADER_ROWS: u16 = 7;
/// Rows of the chart block (stats row + canvas + axis row).
const CHART_BLOCK_ROWS: u16 = 13;

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top).
    pub status_area: Rect,
    /// Main content area.
    pub content_area: Rect,
    /// Bottom navigation area.
    pub nav_area: Rect,
    /// Notification area (overlaid).
    pub notification_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect) -> Self {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status bar
                Constraint::Min(0),    // Main content
                Constraint::Length(2), // Bottom navigation
            ])
            .split(area);

        // Notification area floats near the top of the content
        let notification_area = Rect {
            x: area.width / 6,
            y: chunks[1].y + 1,
            width: area.width - (area.width / 6) * 2,
            height: 3,
        };

        Self {
            status_area: chunks[0],
            content_area: chunks[1],
            nav_area: chunks[2],
            notification_area,
        }
    }
}

/// The chart block inside the market detail screen (stats row + canvas +
/// axis row). Shared with the event handler so mouse hit testing and
/// rendering agree on the same cells.
pub fn market_chart_block(content: Rect) -> Rect {
    let y = content.y.saturating_add(MARKET_HEADER_ROWS);
    let height = CHART_BLOCK_ROWS.min(content.height.saturating_sub(MARKET_HEADER_ROWS));
    Rect {
        x: content.x.saturating_add(1),
        y,
        width: content.width.saturating_sub(2),
        height,
    }
}

/// The canvas cells of the market chart (the block minus its stats and
/// axis rows).
pub fn market_chart_canvas(content: Rect) -> Rect {
    let block = market_chart_block(content);
    Rect {
        x: block.x,
        y: block.y.saturating_add(1),
        width: block.width,
        height: block.height.saturating_sub(2),
    }
}

/// Create a centered popup area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a bottom-sheet popup area over the content (the trade sheet).
pub fn sheet_rect(area: Rect) -> Rect {
    let height = (area.height * 3 / 4).max(16).min(area.height);
    Rect {
        x: area.x + 2,
        y: area.y + area.height.saturating_sub(height),
        width: area.width.saturating_sub(4),
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_layout_partitions_rows() {
        let layout = Layout::new(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.content_area.height, 27);
        assert_eq!(layout.nav_area.height, 2);
        assert_eq!(layout.nav_area.y, 28);
    }

    #[test]
    fn test_chart_canvas_inside_block() {
        let content = Rect::new(0, 1, 80, 27);
        let block = market_chart_block(content);
        let canvas = market_chart_canvas(content);
        assert_eq!(canvas.y, block.y + 1);
        assert_eq!(canvas.height, block.height - 2);
        assert!(canvas.width <= content.width);
    }

    #[test]
    fn test_chart_block_survives_tiny_terminal() {
        let content = Rect::new(0, 1, 10, 5);
        let block = market_chart_block(content);
        let canvas = market_chart_canvas(content);
        assert_eq!(block.height, 0);
        assert_eq!(canvas.height, 0);
    }
}
