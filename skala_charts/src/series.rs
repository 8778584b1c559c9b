// Copyright 2026 the Skala Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data series and presentation metadata.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;
use peniko::color::palette::css;

use crate::marker::MarkerShape;

/// An ordered sequence of data points plus presentation metadata.
///
/// Non-finite coordinates are rejected at ingestion: every constructor
/// filters them out (with a diagnostic), so bounds and tick computation
/// downstream never see a NaN or infinity.
///
/// Pixel-space "scaled" copies of the values are derived and owned by each
/// chart's layout pass, never stored here, so mutating a series between
/// renders cannot leave stale pixel state behind.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// The data points, in presentation order.
    pub points: Vec<Point>,
    /// Legend label.
    pub label: String,
    /// Series color.
    pub color: Color,
    /// Marker glyph for scatter points.
    pub marker: MarkerShape,
    /// Optional start/end colors for gradient scatter coloring.
    ///
    /// When set, each scatter point is colored by interpolating between the
    /// two by its vertical position within the series.
    pub gradient: Option<(Color, Color)>,
}

impl Series {
    /// Creates a series from points, dropping non-finite entries.
    pub fn new(points: impl IntoIterator<Item = Point>, label: impl Into<String>) -> Self {
        let mut dropped = 0_usize;
        let points: Vec<Point> = points
            .into_iter()
            .filter(|p| {
                let ok = p.x.is_finite() && p.y.is_finite();
                if !ok {
                    dropped += 1;
                }
                ok
            })
            .collect();
        if dropped > 0 {
            tracing::warn!(dropped, "dropped non-finite points from series");
        }
        Self {
            points,
            label: label.into(),
            color: css::LIGHT_BLUE,
            marker: MarkerShape::Circle,
            gradient: None,
        }
    }

    /// Creates a series from y-values alone, with x running `1..=n`.
    pub fn from_values(values: &[f64], label: impl Into<String>) -> Self {
        Self::new(
            values
                .iter()
                .enumerate()
                .map(|(i, &y)| Point::new((i + 1) as f64, y)),
            label,
        )
    }

    /// Creates a series by sampling `f` over `[min_x, max_x]`.
    ///
    /// NaN/infinite samples are skipped, and finite samples are clamped to
    /// `±1/step` so a near-singularity cannot blow up the axis bounds.
    pub fn from_fn(
        f: impl Fn(f64) -> f64,
        min_x: f64,
        max_x: f64,
        samples: usize,
        label: impl Into<String>,
    ) -> Self {
        let samples = samples.max(1);
        let step = (max_x - min_x) / samples as f64;
        let limit = if step != 0.0 {
            (1.0 / step).abs()
        } else {
            f64::MAX
        };
        let mut points = Vec::with_capacity(samples + 1);
        for i in 0..=samples {
            let x = min_x + step * i as f64;
            let y = f(x);
            if !y.is_finite() {
                continue;
            }
            points.push(Point::new(x, y.clamp(-limit, limit)));
        }
        Self::new(points, label)
    }

    /// Sets the series color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the scatter marker glyph.
    pub fn with_marker(mut self, marker: MarkerShape) -> Self {
        self.marker = marker;
        self
    }

    /// Enables gradient scatter coloring between `start` and `end`.
    pub fn with_gradient(mut self, start: Color, end: Color) -> Self {
        self.gradient = Some((start, end));
        self
    }

    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Returns a default categorical color palette of `count` entries.
///
/// Colors are taken from named CSS colors and repeat if `count` exceeds the
/// palette length.
pub fn default_series_colors(count: usize) -> Vec<Color> {
    const PALETTE: [Color; 8] = [
        css::CORNFLOWER_BLUE,
        css::ORANGE,
        css::MEDIUM_SEA_GREEN,
        css::CRIMSON,
        css::GOLDENROD,
        css::SLATE_BLUE,
        css::DARK_CYAN,
        css::HOT_PINK,
    ];

    (0..count).map(|i| PALETTE[i % PALETTE.len()]).collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn constructor_filters_non_finite_points() {
        let s = Series::new(
            [
                Point::new(0.0, 1.0),
                Point::new(1.0, f64::NAN),
                Point::new(f64::INFINITY, 2.0),
                Point::new(2.0, 3.0),
            ],
            "s",
        );
        assert_eq!(s.len(), 2);
        assert!(s.points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn from_values_starts_x_at_one() {
        let s = Series::from_values(&[5.0, 7.0], "s");
        assert_eq!(s.points[0], Point::new(1.0, 5.0));
        assert_eq!(s.points[1], Point::new(2.0, 7.0));
    }

    #[test]
    fn sampled_function_skips_poles_and_clamps() {
        // 1/x has a pole at zero; sampling across it must neither emit
        // non-finite points nor exceed the clamp limit.
        let s = Series::from_fn(|x| 1.0 / x, -1.0, 1.0, 400, "recip");
        let limit = 1.0 / (2.0 / 400.0);
        assert!(!s.is_empty());
        for p in &s.points {
            assert!(p.y.is_finite());
            assert!(p.y.abs() <= limit + 1e-9);
        }
    }

    #[test]
    fn palette_repeats_past_its_length() {
        let colors = default_series_colors(10);
        assert_eq!(colors.len(), 10);
        assert_eq!(colors[0], colors[8]);
    }
}
