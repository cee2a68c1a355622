//! Interactive price chart widget.
//!
//! Consumes the chart core: normalized points, the flattened smooth
//! curve, series metrics, and the pointer readout. The widget only maps
//! plot coordinates onto the terminal canvas; all geometry and
//! statistics come from [`crate::chart`].

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Paragraph,
        canvas::{Canvas, Line as CanvasLine, Points},
    },
};

use crate::chart::{Curve, PlotArea, SeriesMetrics, extrema_indices, normalize};
use crate::state::MarketDetailState;
use crate::ui::Theme;

/// Price chart widget.
pub struct PriceChart;

impl PriceChart {
    /// Render the chart block (stats row, canvas, axis row) for a series.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        data: &[f64],
        detail: &MarketDetailState,
        smoothing_steps: usize,
        theme: &Theme,
    ) {
        if area.height < 3 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // stats row
                Constraint::Min(0),    // canvas
                Constraint::Length(1), // axis row
            ])
            .split(area);

        let plot = detail.area;
        let metrics = SeriesMetrics::compute(data);
        let points = normalize(data, &plot);

        Self::render_stats(frame, chunks[0], &metrics, detail, theme);
        Self::render_canvas(
            frame,
            chunks[1],
            data,
            &points,
            &plot,
            detail,
            smoothing_steps,
            theme,
        );
        Self::render_axis(frame, chunks[2], theme);
    }

    fn render_stats(
        frame: &mut Frame,
        area: Rect,
        metrics: &SeriesMetrics,
        detail: &MarketDetailState,
        theme: &Theme,
    ) {
        let bias_color = match metrics.bias {
            crate::chart::Bias::Bull => theme.accent,
            crate::chart::Bias::Bear => theme.warning,
            crate::chart::Bias::Flat => theme.muted,
        };

        let mut spans = vec![
            Span::styled("STABILITY ", theme.label()),
            Span::styled(
                format!("{}%", metrics.stability_percent),
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", Style::default().fg(theme.border)),
            Span::styled("BIAS ", theme.label()),
            Span::styled(
                metrics.bias.to_string(),
                Style::default().fg(bias_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   ● LIVE", Style::default().fg(theme.accent)),
        ];

        // Hover readout pill, right-aligned
        if let Some(readout) = detail.readout() {
            let pill = format!("  PROB. {}¢ ", readout.percent);
            let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
            let pad = (area.width as usize).saturating_sub(used + pill.chars().count());
            spans.push(Span::raw(" ".repeat(pad)));
            spans.push(Span::styled(
                pill,
                Style::default()
                    .fg(theme.background)
                    .bg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    #[allow(clippy::too_many_arguments)]
    fn render_canvas(
        frame: &mut Frame,
        area: Rect,
        data: &[f64],
        points: &[crate::chart::Point],
        plot: &PlotArea,
        detail: &MarketDetailState,
        smoothing_steps: usize,
        theme: &Theme,
    ) {
        let curve = Curve::from_points(points, plot);
        let polyline = curve.flatten(smoothing_steps);
        let extrema = extrema_indices(data);
        let readout = detail.readout();
        let cursor_x = readout.and_then(|r| points.get(r.index)).map(|p| p.x);

        // Screen y grows down, canvas y grows up
        let flip = |y: f64| plot.height - y;

        let canvas = Canvas::default()
            .x_bounds([0.0, plot.width])
            .y_bounds([0.0, plot.height])
            .marker(symbols::Marker::Braille)
            .paint(move |ctx| {
                // Grid bands at the top, middle, and bottom of the band
                for p in [0.0, 0.5, 1.0] {
                    let y = flip(plot.padding + plot.band_height() * p);
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: y,
                        x2: plot.width,
                        y2: y,
                        color: theme.border,
                    });
                }

                // Area shade: drop a line from the curve to the box floor
                for &(x, y) in &polyline {
                    ctx.draw(&CanvasLine {
                        x1: x,
                        y1: 0.0,
                        x2: x,
                        y2: flip(y),
                        color: theme.selection,
                    });
                }

                // The curve itself
                for pair in polyline.windows(2) {
                    ctx.draw(&CanvasLine {
                        x1: pair[0].0,
                        y1: flip(pair[0].1),
                        x2: pair[1].0,
                        y2: flip(pair[1].1),
                        color: theme.foreground,
                    });
                }

                // Extrema markers (earliest occurrence of min and max)
                if let Some((min_idx, max_idx)) = extrema {
                    let marks: Vec<(f64, f64)> = [min_idx, max_idx]
                        .iter()
                        .filter_map(|&i| points.get(i))
                        .map(|p| (p.x, flip(p.y)))
                        .collect();
                    ctx.draw(&Points {
                        coords: &marks,
                        color: theme.muted,
                    });
                }

                // Pointer cursor: vertical hairline plus a dot on the curve
                if let (Some(x), Some(r)) = (cursor_x, readout) {
                    ctx.draw(&CanvasLine {
                        x1: x,
                        y1: 0.0,
                        x2: x,
                        y2: plot.height,
                        color: theme.muted,
                    });
                    ctx.draw(&Points {
                        coords: &[(x, flip(r.y))],
                        color: theme.accent,
                    });
                }
            });

        frame.render_widget(canvas, area);
    }

    fn render_axis(frame: &mut Frame, area: Rect, theme: &Theme) {
        let left = "24 HOURS AGO";
        let right = "NOW";
        let pad = (area.width as usize).saturating_sub(left.len() + right.len());
        let line = Line::from(vec![
            Span::styled(left, theme.label()),
            Span::raw(" ".repeat(pad)),
            Span::styled(right, theme.label()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
