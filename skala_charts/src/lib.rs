// Copyright 2026 the Skala Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data-to-pixel chart layout engine.
//!
//! This crate turns abstract numeric series into pixel-space geometry and
//! drives a [`skala_core::Renderer`] with one ordered sequence of draw calls
//! per render pass:
//! - **Bounds** ([`AxisBounds`]) cover all series assigned to an axis.
//! - **Axis layout** ([`AxisLayout`]) owns scale factors, origin placement
//!   (including zero snapping) and tick generation, and maps data values to
//!   pixels.
//! - **Chart orchestrators** ([`LineChart`], [`BarChart`], [`HistogramChart`],
//!   [`ScatterChart`]) compose bounds, axis layout and per-chart geometry
//!   (stacking, binning, step silhouettes, markers) into a render pass.
//!
//! Layout is a pure, single-shot computation: every derived structure is
//! rebuilt from the series on each pass, never patched incrementally. Each
//! chart exposes its `layout` result separately from `render`, so the
//! numbers can be asserted on without any rasterizer.

#![no_std]

extern crate alloc;

mod axis;
mod bar_chart;
mod bounds;
#[cfg(test)]
mod chart_tests;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod guides;
mod histogram;
mod histogram_chart;
mod line_chart;
mod marker;
mod scatter_chart;
mod series;
mod stack;
mod step;
mod ticks;

pub use axis::{AxisLayout, Margins};
pub use bar_chart::{BarChart, BarChartLayout, BarOrientation, BarSeries};
pub use bounds::AxisBounds;
pub use error::{ChartError, ChartResult};
pub use histogram::{HistogramBin, round_ceil_pow10, round_floor_pow10};
pub use histogram_chart::{HistogramChart, HistogramChartLayout, HistogramStyle};
pub use line_chart::{AxisSide, LineChart, LineChartLayout};
pub use marker::{MarkerGeometry, MarkerShape, rotate_point};
pub use scatter_chart::{ScatterChart, ScatterChartLayout};
pub use series::{Series, default_series_colors};
pub use stack::StackFrame;
pub use ticks::{MAX_DIV, TickSet};
