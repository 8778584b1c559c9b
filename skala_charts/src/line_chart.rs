// Copyright 2026 the Skala Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line chart orchestration, including a secondary y axis.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Size};
use peniko::{Brush, Color};
use skala_core::{Renderer, StrokeStyle};

use crate::axis::{AxisLayout, Margins};
use crate::bounds::AxisBounds;
use crate::error::ChartResult;
use crate::guides;
use crate::series::Series;

/// Fraction of each pixel extent reserved as margin on both ends.
const MARGIN_FRACTION: f64 = 0.05;

/// Which y axis a line series is assigned to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisSide {
    /// The left (primary) y axis.
    #[default]
    Primary,
    /// The right (secondary) y axis.
    Secondary,
}

/// A line chart over one or two y axes sharing an x axis.
#[derive(Clone, Debug, Default)]
pub struct LineChart {
    primary: Vec<Series>,
    secondary: Vec<Series>,
    primary_grid: bool,
    secondary_grid: bool,
    line_width: f64,
}

/// Derived layout for one line-chart render pass.
///
/// Scaled point lists are index-aligned with the chart's series on each
/// axis; points falling outside the plot area are dropped, so a list can be
/// shorter than its series.
#[derive(Clone, Debug)]
pub struct LineChartLayout {
    /// Layout of the primary axis pair.
    pub primary: AxisLayout,
    /// Layout of the secondary axis pair, with its x range merged with the
    /// primary's so vertical ticks align.
    pub secondary: Option<AxisLayout>,
    /// Pixel-space points per primary series.
    pub scaled_primary: Vec<Vec<Point>>,
    /// Pixel-space points per secondary series.
    pub scaled_secondary: Vec<Vec<Point>>,
}

impl LineChart {
    /// Creates an empty line chart.
    pub fn new() -> Self {
        Self {
            line_width: 1.5,
            ..Self::default()
        }
    }

    /// Enables or disables gridlines per axis.
    pub fn with_grid(mut self, primary: bool, secondary: bool) -> Self {
        self.primary_grid = primary;
        self.secondary_grid = secondary;
        self
    }

    /// Sets the plot line width.
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    /// Adds a series to the chosen axis.
    pub fn add_series(&mut self, series: Series, side: AxisSide) {
        match side {
            AxisSide::Primary => self.primary.push(series),
            AxisSide::Secondary => self.secondary.push(series),
        }
    }

    /// Samples `f` over `[min_x, max_x]` and adds the result to the primary
    /// axis. Non-finite samples are dropped before they can reach bounds
    /// computation.
    pub fn add_function(
        &mut self,
        f: impl Fn(f64) -> f64,
        min_x: f64,
        max_x: f64,
        label: impl Into<String>,
    ) {
        self.add_series(
            Series::from_fn(f, min_x, max_x, 400, label),
            AxisSide::Primary,
        );
    }

    /// Label/color pairs for an external legend renderer, primary-axis
    /// series first.
    pub fn legend_labels(&self) -> Vec<(&str, Color)> {
        self.primary
            .iter()
            .chain(&self.secondary)
            .map(|s| (s.label.as_str(), s.color))
            .collect()
    }

    /// Computes the layout for a plot area of `size`.
    ///
    /// Pure: recomputed wholesale on every call, no state is carried
    /// between passes.
    pub fn layout(&self, size: Size) -> ChartResult<LineChartLayout> {
        let margins = Margins::fraction(size, MARGIN_FRACTION, MARGIN_FRACTION);
        let primary_bounds = AxisBounds::of_series(&self.primary)?;

        if self.secondary.is_empty() {
            let axis = AxisLayout::new(primary_bounds, size, margins);
            let scaled_primary = scale_series(&self.primary, &axis);
            return Ok(LineChartLayout {
                primary: axis,
                secondary: None,
                scaled_primary,
                scaled_secondary: Vec::new(),
            });
        }

        let secondary_bounds = AxisBounds::of_series(&self.secondary)?;
        let (primary_axis, secondary_axis) = AxisLayout::merge_x_axis(
            AxisLayout::new(primary_bounds, size, margins),
            AxisLayout::new(secondary_bounds, size, margins),
        );
        let scaled_primary = scale_series(&self.primary, &primary_axis);
        let scaled_secondary = scale_series(&self.secondary, &secondary_axis);
        Ok(LineChartLayout {
            primary: primary_axis,
            secondary: Some(secondary_axis),
            scaled_primary,
            scaled_secondary,
        })
    }

    /// Lays out and draws the chart into `renderer`, ending the pass with
    /// `finish`.
    pub fn render(&self, size: Size, renderer: &mut dyn Renderer) -> ChartResult<()> {
        let layout = self.layout(size)?;

        guides::draw_x_guides(renderer, &layout.primary.x_ticks, size, self.primary_grid);
        guides::draw_y_guides(renderer, &layout.primary.y_ticks, size, self.primary_grid, false);
        if let Some(secondary) = &layout.secondary {
            guides::draw_y_guides(renderer, &secondary.y_ticks, size, self.secondary_grid, true);
        }

        for (series, points) in self.primary.iter().zip(&layout.scaled_primary) {
            draw_series_line(renderer, series, points, self.line_width, false);
        }
        for (series, points) in self.secondary.iter().zip(&layout.scaled_secondary) {
            // Secondary-axis series draw dashed to keep the two scales
            // distinguishable.
            draw_series_line(renderer, series, points, self.line_width, true);
        }

        renderer.finish();
        Ok(())
    }
}

fn scale_series(series: &[Series], axis: &AxisLayout) -> Vec<Vec<Point>> {
    series
        .iter()
        .map(|s| {
            s.points
                .iter()
                .map(|&p| axis.to_pixel(p))
                .filter(|&p| axis.contains_pixel(p))
                .collect()
        })
        .collect()
}

fn draw_series_line(
    renderer: &mut dyn Renderer,
    series: &Series,
    points: &[Point],
    width: f64,
    dashed: bool,
) {
    if points.len() < 2 {
        // Everything but at most one point was clipped away; there is no
        // segment to draw.
        return;
    }
    let style = StrokeStyle {
        brush: Brush::Solid(series.color),
        stroke_width: width,
    };
    renderer.draw_polyline(points, &style, dashed);
}
