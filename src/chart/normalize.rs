//! Series normalization into plot coordinates.

use crate::error::{Error, Result};

/// Logical drawing box for a chart.
///
/// Pixel space: x grows right, y grows down. `padding` is reserved at the
/// top and bottom so the curve never touches the box edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl PlotArea {
    /// Create a validated plot area.
    pub fn new(width: f64, height: f64, padding: f64) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::invalid_input(format!(
                "plot width must be positive, got {width}"
            )));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(Error::invalid_input(format!(
                "plot height must be positive, got {height}"
            )));
        }
        if !padding.is_finite() || padding < 0.0 {
            return Err(Error::invalid_input(format!(
                "plot padding must be non-negative, got {padding}"
            )));
        }
        if padding * 2.0 >= height {
            return Err(Error::invalid_input(format!(
                "padding {padding} leaves no vertical band in height {height}"
            )));
        }
        Ok(Self {
            width,
            height,
            padding,
        })
    }

    /// Vertical extent available to the curve.
    pub fn band_height(&self) -> f64 {
        self.height - self.padding * 2.0
    }
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 180.0,
            padding: 30.0,
        }
    }
}

/// A sample mapped into the plot box, paired with its original value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

/// Map a probability series into plot coordinates.
///
/// Samples are spread evenly across the width in input order; values map
/// onto the padded vertical band with higher values nearer the top. An
/// empty series yields an empty point list. A flat series (zero range)
/// uses a divisor of 1 so every point lands on the same finite row
/// instead of producing NaN. A single sample sits at `x = 0`.
pub fn normalize(data: &[f64], area: &PlotArea) -> Vec<Point> {
    if data.is_empty() {
        return Vec::new();
    }

    let min_val = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max_val - min_val;
    let divisor = if range == 0.0 { 1.0 } else { range };
    let span = (data.len() - 1) as f64;

    data.iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = if span == 0.0 {
                0.0
            } else {
                (i as f64 / span) * area.width
            };
            let y = area.height
                - area.padding
                - ((value - min_val) / divisor) * area.band_height();
            Point { x, y, value }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn default_area() -> PlotArea {
        PlotArea::default()
    }

    #[test]
    fn test_plot_area_validation() {
        assert!(PlotArea::new(400.0, 180.0, 30.0).is_ok());
        assert!(PlotArea::new(0.0, 180.0, 30.0).is_err());
        assert!(PlotArea::new(-1.0, 180.0, 30.0).is_err());
        assert!(PlotArea::new(400.0, 0.0, 0.0).is_err());
        assert!(PlotArea::new(400.0, 180.0, -5.0).is_err());
        // padding eats the whole height
        assert!(PlotArea::new(400.0, 180.0, 90.0).is_err());
        assert!(PlotArea::new(400.0, f64::NAN, 30.0).is_err());
    }

    #[test]
    fn test_point_count_matches_input() {
        let area = default_area();
        for n in [1usize, 2, 3, 8, 100] {
            let data: Vec<f64> = (0..n).map(|i| i as f64 / n as f64).collect();
            assert_eq!(normalize(&data, &area).len(), n);
        }
    }

    #[test]
    fn test_empty_series_yields_empty_points() {
        assert_eq!(normalize(&[], &default_area()), Vec::new());
    }

    #[test]
    fn test_x_spans_full_width() {
        let area = default_area();
        let points = normalize(&[0.45, 0.48, 0.42, 0.55, 0.51, 0.58, 0.62, 0.65], &area);
        assert_eq!(points.first().unwrap().x, 0.0);
        assert_eq!(points.last().unwrap().x, area.width);
        // strictly ascending x, lockstep with input order
        for pair in points.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
    }

    #[test]
    fn test_y_within_padded_band() {
        let area = default_area();
        let points = normalize(&[0.0, 0.25, 0.5, 0.75, 1.0], &area);
        for p in &points {
            assert!(p.y >= area.padding, "y {} above band", p.y);
            assert!(p.y <= area.height - area.padding, "y {} below band", p.y);
        }
        // extremes touch the band edges
        assert_eq!(points[0].y, area.height - area.padding);
        assert_eq!(points[4].y, area.padding);
    }

    #[test]
    fn test_higher_values_map_nearer_top() {
        let points = normalize(&[0.2, 0.8], &default_area());
        assert!(points[1].y < points[0].y);
    }

    #[test]
    fn test_flat_series_all_points_on_one_row() {
        let area = default_area();
        let points = normalize(&[0.5, 0.5, 0.5, 0.5], &area);
        for p in &points {
            assert!(p.y.is_finite());
            assert_eq!(p.y, points[0].y);
        }
    }

    #[test]
    fn test_single_sample_sits_at_origin_column() {
        let area = default_area();
        let points = normalize(&[0.7], &area);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].x, 0.0);
        assert!(points[0].y.is_finite());
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let area = default_area();
        let data = [0.45, 0.48, 0.42, 0.55, 0.51, 0.58, 0.62, 0.65];
        assert_eq!(normalize(&data, &area), normalize(&data, &area));
    }

    #[test]
    fn test_values_carried_through() {
        let data = [0.3, 0.5, 0.2];
        let points = normalize(&data, &default_area());
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        assert_eq!(values, data.to_vec());
    }
}
