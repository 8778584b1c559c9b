// Copyright 2026 the Skala Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Histogram orchestration: shared-grid binning, stacked bars and stacked
//! step silhouettes.

extern crate alloc;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::{Brush, Color};
use skala_core::{Hatching, Renderer, StrokeStyle};

use crate::axis::{AxisLayout, Margins};
use crate::bounds::AxisBounds;
use crate::error::{ChartError, ChartResult};
use crate::guides;
use crate::histogram::{BinnedSeries, HistogramBin, bin_series, round_ceil_pow10, round_floor_pow10};
use crate::step;

/// Fixed horizontal inset of the bin grid from the plot edges, in pixels.
const X_MARGIN: f64 = 5.0;
/// Fraction of the vertical extent reserved as headroom.
const TOP_MARGIN_FRACTION: f64 = 0.1;

/// How histogram series are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HistogramStyle {
    /// Filled bars, stacked series drawn on top of each other.
    #[default]
    Bars,
    /// Step outlines: each stacked layer's visible silhouette boundary.
    Step,
}

#[derive(Clone, Debug)]
struct SampleSet {
    /// Sorted sample data.
    data: Vec<f64>,
    label: String,
    color: Color,
}

/// A histogram over one base sample set plus stacked sets.
#[derive(Clone, Debug)]
pub struct HistogramChart {
    sets: Vec<SampleSet>,
    bins: usize,
    normalized: bool,
    style: HistogramStyle,
    grid: bool,
    stroke_width: f64,
}

/// Derived layout for one histogram render pass.
///
/// Everything here is recomputed from the sample sets on every pass; two
/// passes over the same chart produce identical layouts and identical draw
/// streams.
#[derive(Clone, Debug)]
pub struct HistogramChartLayout {
    /// Axis layout over the rounded sample range and the stacked maximum
    /// frequency.
    pub axis: AxisLayout,
    /// Width of one bin in pixels.
    pub bin_width: f64,
    /// The base series' bins.
    pub bins: Vec<HistogramBin>,
    /// Bins of each stacked series, on the same grid.
    pub stack_bins: Vec<Vec<HistogramBin>>,
}

impl HistogramChart {
    /// Creates a histogram with the given bin count.
    pub fn new(bins: usize) -> ChartResult<Self> {
        if bins == 0 {
            return Err(ChartError::ZeroBins);
        }
        Ok(Self {
            sets: Vec::new(),
            bins,
            normalized: false,
            style: HistogramStyle::Bars,
            grid: false,
            stroke_width: 2.0,
        })
    }

    /// Normalizes frequencies to densities (divide by `n × bin width`).
    pub fn with_normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    /// Sets the render style.
    pub fn with_style(mut self, style: HistogramStyle) -> Self {
        self.style = style;
        self
    }

    /// Enables or disables gridlines.
    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the stroke width used for step outlines.
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Adds a sample set; the first call supplies the base series, later
    /// calls stack on top of it. Non-finite samples are dropped.
    pub fn add_series(&mut self, data: &[f64], label: impl Into<String>, color: Color) {
        let mut sorted: Vec<f64> = data.iter().copied().filter(|d| d.is_finite()).collect();
        if sorted.len() < data.len() {
            let dropped = data.len() - sorted.len();
            tracing::warn!(dropped, "dropped non-finite samples from histogram series");
        }
        sorted.sort_unstable_by(f64::total_cmp);
        let data = sorted;
        self.sets.push(SampleSet {
            data,
            label: label.into(),
            color,
        });
    }

    /// Label/color pairs for an external legend renderer, base series
    /// first.
    pub fn legend_labels(&self) -> Vec<(&str, Color)> {
        self.sets
            .iter()
            .map(|s| (s.label.as_str(), s.color))
            .collect()
    }

    /// Computes the layout for a plot area of `size`.
    pub fn layout(&self, size: Size) -> ChartResult<HistogramChartLayout> {
        let (layout, _) = self.layout_binned(size)?;
        Ok(layout)
    }

    fn layout_binned(&self, size: Size) -> ChartResult<(HistogramChartLayout, Vec<BinnedSeries>)> {
        let base = self.sets.first().ok_or(ChartError::NoData)?;
        if base.data.is_empty() {
            return Err(ChartError::NoData);
        }

        // Bin bounds: the union of every set's sample range, rounded
        // outward to nice power-of-ten boundaries.
        let mut min_x = f64::MAX;
        let mut max_x = f64::MIN;
        for set in &self.sets {
            let Some((&first, &last)) = set.data.first().zip(set.data.last()) else {
                continue;
            };
            min_x = min_x.min(round_floor_pow10(first));
            max_x = max_x.max(round_ceil_pow10(last));
        }
        let interval = (max_x - min_x) / self.bins as f64;

        let binned: Vec<BinnedSeries> = self
            .sets
            .iter()
            .map(|set| bin_series(&set.data, min_x, max_x, self.bins, self.normalized))
            .collect();

        // The y maximum covers the tallest stacked column, not just the
        // tallest single series.
        let mut max_y = binned[0].max_frequency;
        for i in 0..self.bins {
            let column: f64 = binned.iter().map(|b| b.frequencies[i]).sum();
            max_y = max_y.max(column);
        }

        let axis = AxisLayout::new(
            AxisBounds {
                x: (min_x, max_x),
                y: (0.0, max_y),
            },
            size,
            Margins {
                x: (X_MARGIN, X_MARGIN),
                y: (0.0, size.height * TOP_MARGIN_FRACTION),
            },
        );
        let bin_width = interval / axis.scale_x;

        let to_bins = |b: &BinnedSeries| -> Vec<HistogramBin> {
            b.frequencies
                .iter()
                .enumerate()
                .map(|(i, &frequency)| HistogramBin {
                    frequency,
                    range_start: min_x + interval * i as f64,
                    range_end: min_x + interval * (i + 1) as f64,
                })
                .collect()
        };

        let layout = HistogramChartLayout {
            axis,
            bin_width,
            bins: to_bins(&binned[0]),
            stack_bins: binned[1..].iter().map(to_bins).collect(),
        };
        Ok((layout, binned))
    }

    /// Lays out and draws the chart into `renderer`.
    pub fn render(&self, size: Size, renderer: &mut dyn Renderer) -> ChartResult<()> {
        let (layout, binned) = self.layout_binned(size)?;
        let axis = &layout.axis;

        guides::draw_x_guides(renderer, &axis.x_ticks, size, self.grid);
        guides::draw_y_guides(renderer, &axis.y_ticks, size, self.grid, false);

        let x_start = axis.to_pixel(Point::new(axis.bounds.x.0, 0.0)).x;

        match self.style {
            HistogramStyle::Bars => {
                for i in 0..self.bins {
                    let x0 = x_start + layout.bin_width * i as f64;
                    let mut current = axis.origin.y;
                    for (set, b) in self.sets.iter().zip(&binned) {
                        let height = b.frequencies[i] / axis.scale_y;
                        if height > 0.0 {
                            renderer.fill_rect(
                                Rect::new(x0, current, x0 + layout.bin_width, current + height),
                                &Brush::Solid(set.color),
                                Hatching::None,
                            );
                        }
                        current += height;
                    }
                }
            }
            HistogramStyle::Step => {
                // Cumulative pixel-height layers, zero-padded one slot past
                // each end of the bin grid so every silhouette closes back
                // down to the baseline.
                let mut layers: Vec<Vec<f64>> = vec![vec![axis.origin.y; self.bins + 2]];
                for b in &binned {
                    let mut next = layers.last().expect("baseline layer").clone();
                    for (slot, &f) in next[1..].iter_mut().zip(&b.frequencies) {
                        *slot += f / axis.scale_y;
                    }
                    layers.push(next);
                }
                let xs: Vec<f64> = (0..=self.bins)
                    .map(|i| x_start + layout.bin_width * i as f64)
                    .collect();

                for (series, line) in step::layer_outlines(&layers, &xs) {
                    let style = StrokeStyle {
                        brush: Brush::Solid(self.sets[series].color),
                        stroke_width: self.stroke_width,
                    };
                    renderer.draw_polyline(&line, &style, false);
                }
            }
        }

        renderer.finish();
        Ok(())
    }
}
