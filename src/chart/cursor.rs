//! Pointer-to-sample resolution for the interactive readout.

use super::normalize::Point;
use crate::error::{Error, Result};

/// Resolve a horizontal pointer coordinate to the nearest sample index.
///
/// The mapping is monotonic and idempotent: `px = 0` resolves to index 0
/// and `px = width` to `n - 1`. Coordinates outside `[0, width]` are
/// rejected rather than clamped; callers own clamping their input device
/// into range.
pub fn sample_index(px: f64, width: f64, n: usize) -> Result<usize> {
    if !width.is_finite() || width <= 0.0 {
        return Err(Error::invalid_input(format!(
            "pointer width must be positive, got {width}"
        )));
    }
    if n == 0 {
        return Err(Error::invalid_input("empty series has no samples"));
    }
    if !px.is_finite() || px < 0.0 || px > width {
        return Err(Error::invalid_input(format!(
            "pointer {px} outside [0, {width}]"
        )));
    }

    let idx = ((px / width) * (n - 1) as f64).round() as usize;
    Ok(idx.min(n - 1))
}

/// The sample under the pointer, ready for cursor/tooltip rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    pub index: usize,
    /// The sample value as a rounded integer percent.
    pub percent: u8,
    /// Pixel row of the sample inside the plot box.
    pub y: f64,
}

impl Readout {
    /// Resolve the readout for a pointer position over a point sequence.
    pub fn resolve(px: f64, width: f64, points: &[Point]) -> Result<Self> {
        let index = sample_index(px, width, points.len())?;
        let point = points[index];
        Ok(Self {
            index,
            percent: (point.value * 100.0).round().clamp(0.0, 255.0) as u8,
            y: point.y,
        })
    }
}

/// Tracks the most recent readout for the animated cursor follower.
///
/// Only the latest position matters; a superseded position is discarded.
/// The retained index drives the visual follower and is not
/// correctness-bearing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartCursor {
    last: Option<Readout>,
}

impl ChartCursor {
    /// Resolve and retain the readout for a pointer position.
    pub fn update(&mut self, px: f64, width: f64, points: &[Point]) -> Result<Readout> {
        let readout = Readout::resolve(px, width, points)?;
        self.last = Some(readout);
        Ok(readout)
    }

    /// The last resolved readout, if the pointer has been over the chart.
    pub fn readout(&self) -> Option<Readout> {
        self.last
    }

    /// Forget the pointer (it left the chart).
    pub fn clear(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::super::normalize::{PlotArea, normalize};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_endpoints_map_to_first_and_last() {
        for n in [2usize, 3, 8, 100] {
            assert_eq!(sample_index(0.0, 400.0, n).unwrap(), 0);
            assert_eq!(sample_index(400.0, 400.0, n).unwrap(), n - 1);
        }
    }

    #[test]
    fn test_mapping_is_idempotent() {
        for px in [0.0, 57.3, 200.0, 399.9, 400.0] {
            let a = sample_index(px, 400.0, 8).unwrap();
            let b = sample_index(px, 400.0, 8).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_mapping_is_monotonic() {
        let mut last = 0;
        for step in 0..=400 {
            let idx = sample_index(step as f64, 400.0, 8).unwrap();
            assert!(idx >= last);
            last = idx;
        }
    }

    #[test]
    fn test_single_sample_always_index_zero() {
        assert_eq!(sample_index(0.0, 400.0, 1).unwrap(), 0);
        assert_eq!(sample_index(250.0, 400.0, 1).unwrap(), 0);
        assert_eq!(sample_index(400.0, 400.0, 1).unwrap(), 0);
    }

    #[test]
    fn test_out_of_range_pointer_rejected() {
        assert!(sample_index(-0.1, 400.0, 8).is_err());
        assert!(sample_index(400.1, 400.0, 8).is_err());
        assert!(sample_index(f64::NAN, 400.0, 8).is_err());
    }

    #[test]
    fn test_bad_parameters_rejected() {
        assert!(sample_index(10.0, 0.0, 8).is_err());
        assert!(sample_index(10.0, -400.0, 8).is_err());
        assert!(sample_index(10.0, 400.0, 0).is_err());
    }

    #[test]
    fn test_readout_exposes_percent_and_row() {
        let area = PlotArea::default();
        let data = [0.45, 0.48, 0.42, 0.55, 0.51, 0.58, 0.62, 0.65];
        let points = normalize(&data, &area);

        let readout = Readout::resolve(area.width, area.width, &points).unwrap();
        assert_eq!(readout.index, 7);
        assert_eq!(readout.percent, 65);
        assert_eq!(readout.y, points[7].y);
    }

    #[test]
    fn test_cursor_retains_latest_only() {
        let area = PlotArea::default();
        let points = normalize(&[0.2, 0.4, 0.6], &area);
        let mut cursor = ChartCursor::default();
        assert_eq!(cursor.readout(), None);

        cursor.update(0.0, area.width, &points).unwrap();
        cursor.update(area.width, area.width, &points).unwrap();
        assert_eq!(cursor.readout().unwrap().index, 2);

        cursor.clear();
        assert_eq!(cursor.readout(), None);
    }

    #[test]
    fn test_cursor_rejects_without_clobbering() {
        let area = PlotArea::default();
        let points = normalize(&[0.2, 0.4, 0.6], &area);
        let mut cursor = ChartCursor::default();
        cursor.update(200.0, area.width, &points).unwrap();
        let before = cursor.readout();
        assert!(cursor.update(-5.0, area.width, &points).is_err());
        assert_eq!(cursor.readout(), before);
    }
}
