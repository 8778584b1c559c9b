// Copyright 2026 the Skala Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis layout: scale factors, origin placement and tick sets for one
//! axis pair (x plus one y direction).

use kurbo::{Point, Size};

use crate::bounds::AxisBounds;
use crate::error::ChartResult;
use crate::series::Series;
use crate::ticks::TickSet;

/// Degenerate (single-value) ranges are clamped to this before a scale is
/// derived, so a one-point series cannot divide by zero.
const MIN_RANGE: f64 = 1e-12;

/// Pixel margins applied at each end of the two axis directions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    /// `(leading, trailing)` inset in pixels along x (left, right).
    pub x: (f64, f64),
    /// `(leading, trailing)` inset in pixels along y (bottom, top).
    pub y: (f64, f64),
}

impl Margins {
    /// No margins.
    pub const ZERO: Self = Self {
        x: (0.0, 0.0),
        y: (0.0, 0.0),
    };

    /// Symmetric margins as fractions of the pixel extents.
    pub fn fraction(size: Size, fx: f64, fy: f64) -> Self {
        Self {
            x: (size.width * fx, size.width * fx),
            y: (size.height * fy, size.height * fy),
        }
    }
}

/// Derived per-render layout for one axis pair.
///
/// Pixel space is y-up with `(0, 0)` at the bottom-left of the plot area.
/// `scale_x`/`scale_y` are data units per pixel; `origin` is the pixel
/// location of the data anchor `origin_value`. Constructed fresh per render
/// and treated as read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    /// Plot area size in pixels.
    pub size: Size,
    /// The margins this layout was built with.
    pub margins: Margins,
    /// The data bounds this layout was built with.
    pub bounds: AxisBounds,
    /// Data units per pixel along x.
    pub scale_x: f64,
    /// Data units per pixel along y.
    pub scale_y: f64,
    /// Pixel location of `origin_value`.
    pub origin: Point,
    /// Data-space anchor; zero when the range straddles zero, otherwise the
    /// bound nearest the plot edge the data grows away from.
    pub origin_value: Point,
    /// Ticks along x.
    pub x_ticks: TickSet,
    /// Ticks along y.
    pub y_ticks: TickSet,
}

impl AxisLayout {
    /// Builds a layout for the given bounds, plot size and margins.
    pub fn new(bounds: AxisBounds, size: Size, margins: Margins) -> Self {
        let (scale_x, origin_x, origin_value_x) =
            place_axis(bounds.x.0, bounds.x.1, size.width, margins.x.0, margins.x.1);
        let (scale_y, origin_y, origin_value_y) =
            place_axis(bounds.y.0, bounds.y.1, size.height, margins.y.0, margins.y.1);

        let x_ticks = TickSet::generate(
            bounds.x.0,
            bounds.x.1,
            origin_x,
            origin_value_x,
            scale_x,
            size.width,
        );
        let y_ticks = TickSet::generate(
            bounds.y.0,
            bounds.y.1,
            origin_y,
            origin_value_y,
            scale_y,
            size.height,
        );

        Self {
            size,
            margins,
            bounds,
            scale_x,
            scale_y,
            origin: Point::new(origin_x, origin_y),
            origin_value: Point::new(origin_value_x, origin_value_y),
            x_ticks,
            y_ticks,
        }
    }

    /// Builds a layout covering the merged bounds of `series`.
    pub fn of_series(series: &[Series], size: Size, margins: Margins) -> ChartResult<Self> {
        Ok(Self::new(AxisBounds::of_series(series)?, size, margins))
    }

    /// Unions the two layouts' x bounds and rebuilds both over the merged
    /// range, so their vertical ticks align while each keeps its own y
    /// scale and origin.
    pub fn merge_x_axis(primary: Self, secondary: Self) -> (Self, Self) {
        let merged = primary.bounds.union_x(secondary.bounds);
        let a = Self::new(
            AxisBounds {
                x: merged.x,
                y: primary.bounds.y,
            },
            primary.size,
            primary.margins,
        );
        let b = Self::new(
            AxisBounds {
                x: merged.x,
                y: secondary.bounds.y,
            },
            secondary.size,
            secondary.margins,
        );
        (a, b)
    }

    /// Maps a data value to a pixel position.
    pub fn to_pixel(&self, value: Point) -> Point {
        Point::new(
            (value.x - self.origin_value.x) / self.scale_x + self.origin.x,
            (value.y - self.origin_value.y) / self.scale_y + self.origin.y,
        )
    }

    /// Inverse of [`AxisLayout::to_pixel`].
    pub fn to_data(&self, pixel: Point) -> Point {
        Point::new(
            (pixel.x - self.origin.x) * self.scale_x + self.origin_value.x,
            (pixel.y - self.origin.y) * self.scale_y + self.origin_value.y,
        )
    }

    /// Whether a pixel position lies within the plot area.
    pub fn contains_pixel(&self, pixel: Point) -> bool {
        pixel.x >= 0.0
            && pixel.x <= self.size.width
            && pixel.y >= 0.0
            && pixel.y <= self.size.height
    }
}

/// Places one axis direction: returns `(scale, origin_px, origin_value)`.
///
/// - both bounds `>= 0`: origin at the leading margin edge, anchored at the
///   lower bound;
/// - both bounds `< 0`: origin at the trailing (far) edge, anchored at the
///   upper bound;
/// - range straddles zero: origin placed proportionally, anchored at zero.
///
/// Afterwards, if data value zero maps onto the visible extent, the origin
/// is snapped to that exact pixel so the zero line and the origin cannot
/// drift apart by a margin-rounding offset.
fn place_axis(lower: f64, upper: f64, extent: f64, lead: f64, trail: f64) -> (f64, f64, f64) {
    let span = (extent - lead - trail).max(1.0);
    let range = (upper - lower).max(MIN_RANGE);
    let scale = range / span;

    let (origin_px, origin_value) = if lower >= 0.0 {
        (lead, lower)
    } else if upper < 0.0 {
        (extent - trail, upper)
    } else {
        (lead + (-lower) / scale, 0.0)
    };

    let zero_px = origin_px + (0.0 - origin_value) / scale;
    if (0.0..=extent).contains(&zero_px) {
        (scale, zero_px, 0.0)
    } else {
        (scale, origin_px, origin_value)
    }
}
