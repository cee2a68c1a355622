//! Smooth curve construction from normalized points.

use super::normalize::{PlotArea, Point};

/// A single path command in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo {
        x: f64,
        y: f64,
    },
    /// Cubic segment to `(x, y)` through two control points.
    CubicTo {
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Close,
}

/// Stroke and fill paths for a price curve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    /// The smooth line through every sample.
    pub stroke: Vec<PathCmd>,
    /// The stroke closed down to the bottom of the box, for area shading.
    pub fill: Vec<PathCmd>,
}

impl Curve {
    /// Build the stroke and fill paths for a point sequence.
    ///
    /// Each consecutive pair is joined by a cubic whose control points
    /// both sit at the horizontal midpoint, carrying the previous and
    /// current y respectively. The curve passes exactly through every
    /// sample and stays inside the min/max band on monotonic runs. A
    /// single point yields a move-only stroke; an empty input yields
    /// empty paths.
    pub fn from_points(points: &[Point], area: &PlotArea) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };

        let mut stroke = Vec::with_capacity(points.len());
        stroke.push(PathCmd::MoveTo {
            x: first.x,
            y: first.y,
        });
        for pair in points.windows(2) {
            let (prev, curr) = (pair[0], pair[1]);
            let cx = (prev.x + curr.x) / 2.0;
            stroke.push(PathCmd::CubicTo {
                c1x: cx,
                c1y: prev.y,
                c2x: cx,
                c2y: curr.y,
                x: curr.x,
                y: curr.y,
            });
        }

        let mut fill = stroke.clone();
        fill.push(PathCmd::LineTo {
            x: area.width,
            y: area.height,
        });
        fill.push(PathCmd::LineTo {
            x: 0.0,
            y: area.height,
        });
        fill.push(PathCmd::Close);

        Self { stroke, fill }
    }

    /// Flatten the stroke into a polyline by sampling each cubic segment.
    ///
    /// `steps` is the number of subdivisions per segment (minimum 1). The
    /// returned polyline starts at the move-to point and contains each
    /// segment's endpoint exactly, so every original sample appears in
    /// the output.
    pub fn flatten(&self, steps: usize) -> Vec<(f64, f64)> {
        let steps = steps.max(1);
        let mut out = Vec::new();
        let mut cursor = (0.0, 0.0);

        for cmd in &self.stroke {
            match *cmd {
                PathCmd::MoveTo { x, y } => {
                    cursor = (x, y);
                    out.push(cursor);
                }
                PathCmd::CubicTo {
                    c1x,
                    c1y,
                    c2x,
                    c2y,
                    x,
                    y,
                } => {
                    for k in 1..=steps {
                        let t = k as f64 / steps as f64;
                        out.push(cubic_at(cursor, (c1x, c1y), (c2x, c2y), (x, y), t));
                    }
                    cursor = (x, y);
                }
                PathCmd::LineTo { x, y } => {
                    cursor = (x, y);
                    out.push(cursor);
                }
                PathCmd::Close => {}
            }
        }

        out
    }
}

/// Evaluate a cubic Bézier at parameter `t`.
fn cubic_at(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64), p3: (f64, f64), t: f64) -> (f64, f64) {
    let u = 1.0 - t;
    let (b0, b1, b2, b3) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    (
        b0 * p0.0 + b1 * p1.0 + b2 * p2.0 + b3 * p3.0,
        b0 * p0.1 + b1 * p1.1 + b2 * p2.1 + b3 * p3.1,
    )
}

#[cfg(test)]
mod tests {
    use super::super::normalize::normalize;
    use super::*;
    use pretty_assertions::assert_eq;

    fn build(data: &[f64]) -> (Vec<Point>, Curve, PlotArea) {
        let area = PlotArea::default();
        let points = normalize(data, &area);
        let curve = Curve::from_points(&points, &area);
        (points, curve, area)
    }

    #[test]
    fn test_empty_input_yields_empty_paths() {
        let (_, curve, _) = build(&[]);
        assert_eq!(curve, Curve::default());
    }

    #[test]
    fn test_single_point_is_move_only() {
        let (points, curve, _) = build(&[0.5]);
        assert_eq!(
            curve.stroke,
            vec![PathCmd::MoveTo {
                x: points[0].x,
                y: points[0].y
            }]
        );
    }

    #[test]
    fn test_one_cubic_per_consecutive_pair() {
        let (points, curve, _) = build(&[0.45, 0.48, 0.42, 0.55]);
        assert_eq!(curve.stroke.len(), points.len());
        assert!(matches!(curve.stroke[0], PathCmd::MoveTo { .. }));
        assert!(
            curve.stroke[1..]
                .iter()
                .all(|c| matches!(c, PathCmd::CubicTo { .. }))
        );
    }

    #[test]
    fn test_control_points_at_horizontal_midpoint() {
        let (points, curve, _) = build(&[0.3, 0.7]);
        let PathCmd::CubicTo {
            c1x,
            c1y,
            c2x,
            c2y,
            x,
            y,
        } = curve.stroke[1]
        else {
            panic!("expected cubic");
        };
        let mid = (points[0].x + points[1].x) / 2.0;
        assert_eq!(c1x, mid);
        assert_eq!(c2x, mid);
        assert_eq!(c1y, points[0].y);
        assert_eq!(c2y, points[1].y);
        assert_eq!((x, y), (points[1].x, points[1].y));
    }

    #[test]
    fn test_fill_closes_through_bottom_corners() {
        let (_, curve, area) = build(&[0.3, 0.7]);
        let tail = &curve.fill[curve.fill.len() - 3..];
        assert_eq!(
            tail,
            &[
                PathCmd::LineTo {
                    x: area.width,
                    y: area.height
                },
                PathCmd::LineTo {
                    x: 0.0,
                    y: area.height
                },
                PathCmd::Close,
            ]
        );
        // fill starts as the stroke does
        assert_eq!(curve.fill[..curve.stroke.len()], curve.stroke[..]);
    }

    #[test]
    fn test_flatten_passes_through_every_sample() {
        let data = [0.45, 0.48, 0.42, 0.55, 0.51, 0.58, 0.62, 0.65];
        let (points, curve, _) = build(&data);
        let poly = curve.flatten(8);
        for p in &points {
            assert!(
                poly.iter()
                    .any(|&(x, y)| (x - p.x).abs() < 1e-9 && (y - p.y).abs() < 1e-9),
                "sample ({}, {}) missing from polyline",
                p.x,
                p.y
            );
        }
    }

    #[test]
    fn test_flatten_segment_count() {
        let (_, curve, _) = build(&[0.1, 0.2, 0.3]);
        // move-to point + 2 segments * 4 steps
        assert_eq!(curve.flatten(4).len(), 1 + 2 * 4);
    }

    #[test]
    fn test_flatten_is_monotonic_in_x() {
        let (_, curve, _) = build(&[0.45, 0.48, 0.42, 0.55, 0.51]);
        let poly = curve.flatten(6);
        for pair in poly.windows(2) {
            assert!(pair[1].0 >= pair[0].0);
        }
    }

    #[test]
    fn test_flat_series_flattens_to_one_row() {
        let (points, curve, _) = build(&[0.5, 0.5, 0.5]);
        for (_, y) in curve.flatten(5) {
            assert_eq!(y, points[0].y);
        }
    }
}
