// Copyright 2026 the Skala Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scatter chart orchestration with polygonal markers.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Size};
use peniko::{Brush, Color};
use skala_core::{Hatching, Renderer};

use crate::axis::{AxisLayout, Margins};
use crate::error::ChartResult;
use crate::guides;
use crate::marker::MarkerGeometry;
use crate::series::Series;

/// Fraction of each pixel extent reserved as margin on both ends.
const MARGIN_FRACTION: f64 = 0.05;

/// A scatter chart over one axis pair.
#[derive(Clone, Debug, Default)]
pub struct ScatterChart {
    series: Vec<Series>,
    grid: bool,
    marker_size: f64,
}

/// Derived layout for one scatter-chart render pass.
#[derive(Clone, Debug)]
pub struct ScatterChartLayout {
    /// The axis layout over all series.
    pub axis: AxisLayout,
    /// Pixel-space points per series; points outside the plot are dropped.
    pub scaled: Vec<Vec<Point>>,
}

impl ScatterChart {
    /// Creates an empty scatter chart.
    pub fn new() -> Self {
        Self {
            marker_size: 10.0,
            ..Self::default()
        }
    }

    /// Enables or disables gridlines.
    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the marker glyph size in pixels.
    pub fn with_marker_size(mut self, size: f64) -> Self {
        self.marker_size = size;
        self
    }

    /// Adds a series. Its marker shape and (optionally gradient) coloring
    /// come from the series' own style fields.
    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Label/color pairs for an external legend renderer.
    ///
    /// Gradient series report their start color, matching how their legend
    /// swatch is usually drawn.
    pub fn legend_labels(&self) -> Vec<(&str, Color)> {
        self.series
            .iter()
            .map(|s| (s.label.as_str(), s.gradient.map_or(s.color, |(start, _)| start)))
            .collect()
    }

    /// Computes the layout for a plot area of `size`.
    pub fn layout(&self, size: Size) -> ChartResult<ScatterChartLayout> {
        let axis = AxisLayout::of_series(
            &self.series,
            size,
            Margins::fraction(size, MARGIN_FRACTION, MARGIN_FRACTION),
        )?;
        let scaled = self
            .series
            .iter()
            .map(|s| {
                s.points
                    .iter()
                    .map(|&p| axis.to_pixel(p))
                    .filter(|&p| axis.contains_pixel(p))
                    .collect()
            })
            .collect();
        Ok(ScatterChartLayout { axis, scaled })
    }

    /// Lays out and draws the chart into `renderer`.
    pub fn render(&self, size: Size, renderer: &mut dyn Renderer) -> ChartResult<()> {
        let layout = self.layout(size)?;

        guides::draw_x_guides(renderer, &layout.axis.x_ticks, size, self.grid);
        guides::draw_y_guides(renderer, &layout.axis.y_ticks, size, self.grid, false);

        for (series, points) in self.series.iter().zip(&layout.scaled) {
            // Gradient coloring interpolates within this series' own
            // vertical pixel span, so the full gradient is always used.
            let span = points
                .iter()
                .map(|p| p.y)
                .fold(None, |acc: Option<(f64, f64)>, y| match acc {
                    None => Some((y, y)),
                    Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
                });

            for &p in points {
                let color = match (series.gradient, span) {
                    (Some((start, end)), Some((lo, hi))) if hi > lo => {
                        lerp_color(start, end, (p.y - lo) / (hi - lo))
                    }
                    (Some((start, _)), _) => start,
                    (None, _) => series.color,
                };
                draw_marker(renderer, series, p, self.marker_size, color);
            }
        }

        renderer.finish();
        Ok(())
    }
}

fn draw_marker(renderer: &mut dyn Renderer, series: &Series, p: Point, size: f64, color: Color) {
    let brush = Brush::Solid(color);
    match series.marker.geometry(p, size) {
        MarkerGeometry::Circle { center, radius } => renderer.fill_circle(center, radius, &brush),
        MarkerGeometry::Rect(rect) => renderer.fill_rect(rect, &brush, Hatching::None),
        MarkerGeometry::Triangle(a, b, c) => renderer.fill_triangle(a, b, c, &brush),
        MarkerGeometry::Polygon(points) => renderer.fill_polygon(&points, &brush),
    }
}

fn lerp_color(start: Color, end: Color, t: f64) -> Color {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "interpolation factor is clamped to [0, 1]"
    )]
    let t = t.clamp(0.0, 1.0) as f32;
    let a = start.components;
    let b = end.components;
    Color::new([
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ])
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;
    use skala_core::{DrawCommand, RecordingRenderer};

    use crate::marker::MarkerShape;

    use super::*;

    fn points() -> [Point; 3] {
        [
            Point::new(1.0, 10.0),
            Point::new(2.0, 20.0),
            Point::new(3.0, 30.0),
        ]
    }

    #[test]
    fn markers_follow_the_series_shape() {
        let mut chart = ScatterChart::new();
        chart.add_series(Series::new(points(), "stars").with_marker(MarkerShape::Star));
        let mut r = RecordingRenderer::new();
        chart.render(Size::new(400.0, 300.0), &mut r).unwrap();
        let polygons = r
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { points, .. } if points.len() == 10))
            .count();
        assert_eq!(polygons, 3);
    }

    #[test]
    fn gradient_series_spans_both_end_colors() {
        let mut chart = ScatterChart::new();
        chart.add_series(
            Series::new(points(), "grad").with_gradient(css::RED, css::BLUE),
        );
        let mut r = RecordingRenderer::new();
        chart.render(Size::new(400.0, 300.0), &mut r).unwrap();
        let circles: Vec<&DrawCommand> = r
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .collect();
        assert_eq!(circles.len(), 3);
        let brush_of = |c: &DrawCommand| match c {
            DrawCommand::Circle { brush, .. } => brush.clone(),
            _ => unreachable!(),
        };
        assert_eq!(brush_of(circles[0]), Brush::Solid(css::RED));
        assert_eq!(brush_of(circles[2]), Brush::Solid(css::BLUE));
        assert_ne!(brush_of(circles[1]), brush_of(circles[0]));
    }

    #[test]
    fn lerp_endpoints_reproduce_the_inputs() {
        assert_eq!(lerp_color(css::RED, css::BLUE, 0.0), css::RED);
        assert_eq!(lerp_color(css::RED, css::BLUE, 1.0), css::BLUE);
    }
}
