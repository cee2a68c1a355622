//! Market detail state: chart cursor and description expansion.

use crate::chart::{ChartCursor, PlotArea, Readout, normalize};

/// State for the market detail screen.
#[derive(Debug)]
pub struct MarketDetailState {
    /// Logical plot box for the price chart.
    pub area: PlotArea,
    /// Pointer tracking over the chart.
    pub cursor: ChartCursor,
    /// Whether the pointer is currently over the chart.
    pub hovering: bool,
    /// Whether the full description is shown.
    pub desc_expanded: bool,
}

impl Default for MarketDetailState {
    fn default() -> Self {
        Self {
            area: PlotArea::default(),
            cursor: ChartCursor::default(),
            hovering: false,
            desc_expanded: false,
        }
    }
}

impl MarketDetailState {
    /// Reset per-market state when a different market opens.
    pub fn reset(&mut self) {
        self.cursor.clear();
        self.hovering = false;
        self.desc_expanded = false;
    }

    /// Handle a pointer move expressed as a fraction of the chart width.
    /// The fraction is clamped into [0, 1] before mapping, so device
    /// jitter at the edges cannot become a validation error.
    pub fn pointer_moved(&mut self, frac: f64, data: &[f64]) {
        if data.is_empty() {
            return;
        }
        let px = frac.clamp(0.0, 1.0) * self.area.width;
        let points = normalize(data, &self.area);
        if self.cursor.update(px, self.area.width, &points).is_ok() {
            self.hovering = true;
        }
    }

    /// The pointer left the chart.
    pub fn pointer_left(&mut self) {
        self.hovering = false;
        self.cursor.clear();
    }

    /// Move the cursor by whole samples (keyboard navigation). Starts at
    /// the newest sample when there is no cursor yet.
    pub fn step_cursor(&mut self, delta: i64, data: &[f64]) {
        if data.is_empty() {
            return;
        }
        let n = data.len();
        let current = self
            .cursor
            .readout()
            .map(|r| r.index as i64)
            .unwrap_or((n - 1) as i64);
        let index = (current + delta).clamp(0, (n - 1) as i64) as usize;

        let points = normalize(data, &self.area);
        let px = points[index].x;
        if self.cursor.update(px, self.area.width, &points).is_ok() {
            self.hovering = true;
        }
    }

    /// Current readout when hovering.
    pub fn readout(&self) -> Option<Readout> {
        if self.hovering { self.cursor.readout() } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DATA: [f64; 8] = [0.45, 0.48, 0.42, 0.55, 0.51, 0.58, 0.62, 0.65];

    #[test]
    fn test_pointer_move_resolves_readout() {
        let mut state = MarketDetailState::default();
        state.pointer_moved(1.0, &DATA);
        let readout = state.readout().unwrap();
        assert_eq!(readout.index, 7);
        assert_eq!(readout.percent, 65);
    }

    #[test]
    fn test_pointer_fraction_clamped() {
        let mut state = MarketDetailState::default();
        state.pointer_moved(1.7, &DATA);
        assert_eq!(state.readout().unwrap().index, 7);
        state.pointer_moved(-0.3, &DATA);
        assert_eq!(state.readout().unwrap().index, 0);
    }

    #[test]
    fn test_pointer_leave_clears_readout() {
        let mut state = MarketDetailState::default();
        state.pointer_moved(0.5, &DATA);
        assert!(state.readout().is_some());
        state.pointer_left();
        assert_eq!(state.readout(), None);
    }

    #[test]
    fn test_step_cursor_starts_at_newest() {
        let mut state = MarketDetailState::default();
        state.step_cursor(-1, &DATA);
        assert_eq!(state.readout().unwrap().index, 6);
        state.step_cursor(-10, &DATA);
        assert_eq!(state.readout().unwrap().index, 0);
        state.step_cursor(3, &DATA);
        assert_eq!(state.readout().unwrap().index, 3);
        state.step_cursor(99, &DATA);
        assert_eq!(state.readout().unwrap().index, 7);
    }

    #[test]
    fn test_empty_series_is_inert() {
        let mut state = MarketDetailState::default();
        state.pointer_moved(0.5, &[]);
        state.step_cursor(1, &[]);
        assert_eq!(state.readout(), None);
    }
}
