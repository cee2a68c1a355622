//! Summary statistics over a probability series.

use std::fmt;

/// Directional trend over the visible window.
///
/// Classified from the first and last sample only, so a sub-window gets a
/// bias local to that window rather than the full trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bias {
    Bull,
    Bear,
    #[default]
    Flat,
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bull => write!(f, "Bull"),
            Self::Bear => write!(f, "Bear"),
            Self::Flat => write!(f, "Flat"),
        }
    }
}

/// Derived metrics for a probability series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeriesMetrics {
    /// 0–100; higher when the series' probability band is narrower.
    /// Only meaningful for series bounded to [0, 1].
    pub stability_percent: u8,
    pub bias: Bias,
    pub min_value: f64,
    pub max_value: f64,
}

impl SeriesMetrics {
    /// Compute metrics for a series. Empty input yields the neutral
    /// defaults (stability 0, Flat, zero extrema).
    pub fn compute(data: &[f64]) -> Self {
        let (Some(&first), Some(&last)) = (data.first(), data.last()) else {
            return Self::default();
        };

        let min_value = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max_value = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max_value - min_value;

        let stability_percent = ((1.0 - range) * 100.0).clamp(0.0, 100.0).round() as u8;

        let bias = if last > first {
            Bias::Bull
        } else if last < first {
            Bias::Bear
        } else {
            Bias::Flat
        };

        Self {
            stability_percent,
            bias,
            min_value,
            max_value,
        }
    }
}

/// Indices of the series minimum and maximum, ties resolving to the
/// earliest index. `None` for an empty series.
pub fn extrema_indices(data: &[f64]) -> Option<(usize, usize)> {
    if data.is_empty() {
        return None;
    }
    let mut min_idx = 0;
    let mut max_idx = 0;
    for (i, &v) in data.iter().enumerate() {
        if v < data[min_idx] {
            min_idx = i;
        }
        if v > data[max_idx] {
            max_idx = i;
        }
    }
    Some((min_idx, max_idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_series_neutral_defaults() {
        let m = SeriesMetrics::compute(&[]);
        assert_eq!(m.stability_percent, 0);
        assert_eq!(m.bias, Bias::Flat);
        assert_eq!(m.min_value, 0.0);
        assert_eq!(m.max_value, 0.0);
    }

    #[test]
    fn test_flat_series_full_stability() {
        let m = SeriesMetrics::compute(&[0.4, 0.4, 0.4]);
        assert_eq!(m.stability_percent, 100);
        assert_eq!(m.bias, Bias::Flat);
    }

    #[test]
    fn test_stability_from_range() {
        // range 0.3 -> round((1 - 0.3) * 100) = 70
        let m = SeriesMetrics::compute(&[0.3, 0.5, 0.2]);
        assert_eq!(m.stability_percent, 70);
    }

    #[test]
    fn test_stability_clamped_for_out_of_domain_input() {
        // range > 1 would go negative without the clamp
        let m = SeriesMetrics::compute(&[0.0, 1.5]);
        assert_eq!(m.stability_percent, 0);
    }

    #[test]
    fn test_bias_uses_window_endpoints_only() {
        // rises in the middle but ends below the first sample
        assert_eq!(SeriesMetrics::compute(&[0.3, 0.5, 0.2]).bias, Bias::Bear);
        assert_eq!(SeriesMetrics::compute(&[0.2, 0.1, 0.4]).bias, Bias::Bull);
        assert_eq!(SeriesMetrics::compute(&[0.3, 0.9, 0.3]).bias, Bias::Flat);
    }

    #[test]
    fn test_extrema_values() {
        let m = SeriesMetrics::compute(&[0.45, 0.48, 0.42, 0.55, 0.51, 0.58, 0.62, 0.65]);
        assert_eq!(m.min_value, 0.42);
        assert_eq!(m.max_value, 0.65);
        // end-to-end example: stability 77, Bull
        assert_eq!(m.stability_percent, 77);
        assert_eq!(m.bias, Bias::Bull);
    }

    #[test]
    fn test_extrema_indices_earliest_wins() {
        assert_eq!(extrema_indices(&[0.5, 0.2, 0.8, 0.2, 0.8]), Some((1, 2)));
        assert_eq!(extrema_indices(&[0.4, 0.4]), Some((0, 0)));
        assert_eq!(extrema_indices(&[]), None);
    }

    #[test]
    fn test_single_sample() {
        let m = SeriesMetrics::compute(&[0.7]);
        assert_eq!(m.stability_percent, 100);
        assert_eq!(m.bias, Bias::Flat);
        assert_eq!(m.min_value, 0.7);
        assert_eq!(m.max_value, 0.7);
    }
}
