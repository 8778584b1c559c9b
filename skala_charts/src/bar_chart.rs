// Copyright 2026 the Skala Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart orchestration with sign-aware stacking.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::Brush;
use peniko::color::palette::css;
use skala_core::{Hatching, Renderer};

use crate::axis::{AxisLayout, Margins};
use crate::bounds::AxisBounds;
use crate::error::{ChartError, ChartResult};
use crate::guides;
use crate::stack::StackFrame;
use crate::ticks::TickSet;

/// Fraction of the value-axis extent reserved as headroom.
const VALUE_MARGIN_FRACTION: f64 = 0.1;

/// Bar growth direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BarOrientation {
    /// Bars grow upward from the baseline.
    #[default]
    Vertical,
    /// Bars grow rightward from the baseline.
    Horizontal,
}

/// One bar series: a value per category plus presentation metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct BarSeries {
    /// One value per category, index-aligned with the chart's categories.
    pub values: Vec<f64>,
    /// Legend label.
    pub label: String,
    /// Fill color.
    pub color: peniko::Color,
    /// Hatch pattern for the fill.
    pub hatch: Hatching,
}

impl BarSeries {
    /// Creates a bar series. Non-finite values are replaced with zero (the
    /// slot cannot be dropped without breaking category alignment).
    pub fn new(values: impl Into<Vec<f64>>, label: impl Into<String>) -> Self {
        let mut values = values.into();
        let mut replaced = 0_usize;
        for v in &mut values {
            if !v.is_finite() {
                *v = 0.0;
                replaced += 1;
            }
        }
        if replaced > 0 {
            tracing::warn!(replaced, "replaced non-finite bar values with zero");
        }
        Self {
            values,
            label: label.into(),
            color: css::LIGHT_BLUE,
            hatch: Hatching::None,
        }
    }

    /// Sets the fill color.
    pub fn with_color(mut self, color: peniko::Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the hatch pattern.
    pub fn with_hatch(mut self, hatch: Hatching) -> Self {
        self.hatch = hatch;
        self
    }
}

/// A categorical bar chart with optional stacked series.
#[derive(Clone, Debug)]
pub struct BarChart {
    categories: Vec<String>,
    series: Vec<BarSeries>,
    orientation: BarOrientation,
    grid: bool,
    spacing: f64,
}

/// Derived layout for one bar-chart render pass.
#[derive(Clone, Debug)]
pub struct BarChartLayout {
    /// Axis layout: the category direction runs in index units `0..n`, the
    /// value direction in data units.
    pub axis: AxisLayout,
    /// Pixels per category along the category direction.
    pub band_width: f64,
    /// Category center positions with the category labels.
    pub category_ticks: TickSet,
    /// Normalized bar rectangles, `bars[series][category]`.
    pub bars: Vec<Vec<Rect>>,
}

impl BarChart {
    /// Creates a bar chart from category labels and the base series.
    ///
    /// The base series must supply exactly one value per category.
    pub fn new(categories: Vec<String>, base: BarSeries) -> ChartResult<Self> {
        if base.values.len() != categories.len() {
            return Err(ChartError::LengthMismatch {
                expected: categories.len(),
                found: base.values.len(),
            });
        }
        Ok(Self {
            categories,
            series: alloc::vec![base],
            orientation: BarOrientation::Vertical,
            grid: false,
            spacing: 20.0,
        })
    }

    /// Sets the bar growth direction.
    pub fn with_orientation(mut self, orientation: BarOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Enables or disables value-axis gridlines.
    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the gap between adjacent category bands, in pixels.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    /// Adds a stacked series on top of the base series.
    ///
    /// A series whose point count does not match the base series is
    /// rejected with a diagnostic and the chart renders without it; this is
    /// a recoverable data-shape problem, not a render failure.
    pub fn add_stack_series(&mut self, series: BarSeries) {
        if series.values.len() != self.categories.len() {
            tracing::warn!(
                expected = self.categories.len(),
                found = series.values.len(),
                label = %series.label,
                "stack series point count does not match the base series; skipping"
            );
            return;
        }
        self.series.push(series);
    }

    /// Number of accepted series (base plus stacked).
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Label/color pairs for an external legend renderer, base series
    /// first.
    pub fn legend_labels(&self) -> Vec<(&str, peniko::Color)> {
        self.series
            .iter()
            .map(|s| (s.label.as_str(), s.color))
            .collect()
    }

    /// Computes the layout for a plot area of `size`.
    pub fn layout(&self, size: Size) -> ChartResult<BarChartLayout> {
        let n = self.categories.len();
        if n == 0 {
            return Err(ChartError::NoData);
        }

        // Value bounds: the base series' extremes, widened by each stacked
        // series' positive maximum and negative minimum (stacks extend the
        // reachable total on their own sign side only).
        let base = &self.series[0];
        let mut max_v = base.values.iter().fold(f64::MIN, |a, &b| a.max(b));
        let mut min_v = base.values.iter().fold(f64::MAX, |a, &b| a.min(b));
        for s in &self.series[1..] {
            let s_max = s.values.iter().fold(f64::MIN, |a, &b| a.max(b));
            let s_min = s.values.iter().fold(f64::MAX, |a, &b| a.min(b));
            if s_max > 0.0 {
                max_v += s_max;
            }
            if s_min < 0.0 {
                min_v += s_min;
            }
        }
        if min_v >= 0.0 {
            // All-positive bars grow from a zero baseline, not from the
            // smallest value.
            min_v = 0.0;
        }

        let (bounds, margins) = match self.orientation {
            BarOrientation::Vertical => (
                AxisBounds {
                    x: (0.0, n as f64),
                    y: (min_v, max_v),
                },
                Margins {
                    x: (0.0, 0.0),
                    y: (0.0, size.height * VALUE_MARGIN_FRACTION),
                },
            ),
            BarOrientation::Horizontal => (
                AxisBounds {
                    x: (min_v, max_v),
                    y: (0.0, n as f64),
                },
                Margins {
                    x: (0.0, size.width * VALUE_MARGIN_FRACTION),
                    y: (0.0, 0.0),
                },
            ),
        };
        let axis = AxisLayout::new(bounds, size, margins);

        let band_width = match self.orientation {
            BarOrientation::Vertical => size.width / n as f64,
            BarOrientation::Horizontal => size.height / n as f64,
        };
        let bar_width = (band_width - self.spacing).max(0.0);

        let mut category_ticks = TickSet::default();
        for (i, label) in self.categories.iter().enumerate() {
            let center = i as f64 + 0.5;
            let pos = match self.orientation {
                BarOrientation::Vertical => axis.to_pixel(Point::new(center, 0.0)).x,
                BarOrientation::Horizontal => axis.to_pixel(Point::new(0.0, center)).y,
            };
            category_ticks.positions.push(pos);
            category_ticks.labels.push(label.clone());
        }

        let mut bars: Vec<Vec<Rect>> = self.series.iter().map(|_| Vec::with_capacity(n)).collect();
        for i in 0..n {
            let mut frame = StackFrame::new();
            for (s, rects) in self.series.iter().zip(&mut bars) {
                let rect = match self.orientation {
                    BarOrientation::Vertical => {
                        let extent = s.values[i] / axis.scale_y;
                        let start = axis.origin.y + frame.push(extent);
                        let x0 = axis.to_pixel(Point::new(i as f64, 0.0)).x + self.spacing * 0.5;
                        Rect::new(x0, start, x0 + bar_width, start + extent)
                    }
                    BarOrientation::Horizontal => {
                        let extent = s.values[i] / axis.scale_x;
                        let start = axis.origin.x + frame.push(extent);
                        let y0 = axis.to_pixel(Point::new(0.0, i as f64)).y + self.spacing * 0.5;
                        Rect::new(start, y0, start + extent, y0 + bar_width)
                    }
                };
                rects.push(rect.abs());
            }
        }

        Ok(BarChartLayout {
            axis,
            band_width,
            category_ticks,
            bars,
        })
    }

    /// Lays out and draws the chart into `renderer`.
    pub fn render(&self, size: Size, renderer: &mut dyn Renderer) -> ChartResult<()> {
        let layout = self.layout(size)?;

        match self.orientation {
            BarOrientation::Vertical => {
                guides::draw_y_guides(renderer, &layout.axis.y_ticks, size, self.grid, false);
                guides::draw_x_guides(renderer, &layout.category_ticks, size, false);
            }
            BarOrientation::Horizontal => {
                guides::draw_x_guides(renderer, &layout.axis.x_ticks, size, self.grid);
                guides::draw_y_guides(renderer, &layout.category_ticks, size, false, false);
            }
        }

        for (s, rects) in self.series.iter().zip(&layout.bars) {
            let brush = Brush::Solid(s.color);
            for &rect in rects {
                renderer.fill_rect(rect, &brush, s.hatch);
            }
        }

        renderer.finish();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use skala_core::{DrawCommand, RecordingRenderer};

    use super::*;

    fn categories(n: usize) -> Vec<String> {
        (0..n).map(|i| i.to_string()).collect()
    }

    #[test]
    fn mismatched_base_series_is_a_configuration_error() {
        let err = BarChart::new(categories(3), BarSeries::new(vec![1.0, 2.0], "base"));
        assert_eq!(
            err.err(),
            Some(ChartError::LengthMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn mismatched_stack_series_is_rejected_but_chart_still_renders() {
        let mut chart =
            BarChart::new(categories(3), BarSeries::new(vec![1.0, 2.0, 3.0], "base")).unwrap();
        chart.add_stack_series(BarSeries::new(vec![1.0, 2.0], "bad"));
        chart.add_stack_series(BarSeries::new(vec![1.0, 2.0, 3.0], "good"));
        assert_eq!(chart.series_count(), 2);

        let mut r = RecordingRenderer::new();
        chart.render(Size::new(300.0, 300.0), &mut r).unwrap();
        let rects = r
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count();
        assert_eq!(rects, 6, "two accepted series x three categories");
    }

    #[test]
    fn all_positive_bars_grow_from_a_zero_baseline() {
        let chart =
            BarChart::new(categories(2), BarSeries::new(vec![5.0, 10.0], "base")).unwrap();
        let layout = chart.layout(Size::new(200.0, 200.0)).unwrap();
        assert_eq!(layout.axis.bounds.y.0, 0.0);
        assert_eq!(layout.axis.origin.y, 0.0);
        assert_eq!(layout.axis.origin_value.y, 0.0);
    }

    #[test]
    fn stacked_extents_are_contiguous_and_non_overlapping() {
        let mut chart =
            BarChart::new(categories(2), BarSeries::new(vec![4.0, -2.0], "base")).unwrap();
        chart.add_stack_series(BarSeries::new(vec![3.0, -1.0], "s1"));
        chart.add_stack_series(BarSeries::new(vec![-2.0, 5.0], "s2"));
        let size = Size::new(300.0, 300.0);
        let layout = chart.layout(size).unwrap();

        for cat in 0..2 {
            let origin = layout.axis.origin.y;
            let mut positive: Vec<Rect> = Vec::new();
            let mut negative: Vec<Rect> = Vec::new();
            let mut positive_len = 0.0;
            let mut negative_len = 0.0;
            for (s, rects) in chart.series.iter().zip(&layout.bars) {
                let value = s.values[cat];
                let rect = rects[cat];
                if value >= 0.0 {
                    positive.push(rect);
                    positive_len += value.abs() / layout.axis.scale_y;
                } else {
                    negative.push(rect);
                    negative_len += value.abs() / layout.axis.scale_y;
                }
            }
            // Each side forms one contiguous run starting at the origin.
            positive.sort_by(|a, b| a.y0.total_cmp(&b.y0));
            let mut cursor = origin;
            for r in &positive {
                assert!((r.y0 - cursor).abs() < 1e-9, "gap or overlap at {cursor}");
                cursor = r.y1;
            }
            assert!((cursor - origin - positive_len).abs() < 1e-9);

            negative.sort_by(|a, b| b.y1.total_cmp(&a.y1));
            let mut cursor = origin;
            for r in &negative {
                assert!((r.y1 - cursor).abs() < 1e-9, "gap or overlap at {cursor}");
                cursor = r.y0;
            }
            assert!((origin - cursor - negative_len).abs() < 1e-9);
        }
    }

    #[test]
    fn horizontal_orientation_stacks_along_x() {
        let mut chart = BarChart::new(categories(2), BarSeries::new(vec![3.0, 4.0], "base"))
            .unwrap()
            .with_orientation(BarOrientation::Horizontal);
        chart.add_stack_series(BarSeries::new(vec![1.0, 2.0], "s1"));
        let layout = chart.layout(Size::new(400.0, 200.0)).unwrap();
        // Stacked rect continues where the base rect ends.
        let base = layout.bars[0][0];
        let stacked = layout.bars[1][0];
        assert!((stacked.x0 - base.x1).abs() < 1e-9);
        assert_eq!(base.y0, stacked.y0);
    }

    #[test]
    fn category_ticks_sit_at_band_centers() {
        let chart =
            BarChart::new(categories(4), BarSeries::new(vec![1.0; 4], "base")).unwrap();
        let layout = chart.layout(Size::new(400.0, 100.0)).unwrap();
        assert_eq!(layout.band_width, 100.0);
        assert!((layout.category_ticks.positions[0] - 50.0).abs() < 1e-9);
        assert!((layout.category_ticks.positions[3] - 350.0).abs() < 1e-9);
    }
}
