// Copyright 2026 the Skala Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The abstract renderer driven by one chart layout pass.

use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use crate::style::{Hatching, TextAnchor};

/// A paint + width pair for stroked geometry (series lines, tick stems, grids).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// The primitive draw interface a chart render pass emits into.
///
/// Coordinates are pixels in a y-up space: `(0, 0)` is the bottom-left corner
/// of the plot area and y grows upward. Axis tick labels and stems may land at
/// small negative coordinates (in the margin strip outside the plot); backends
/// that rasterize y-down flip at the edge.
///
/// Contract for callers: a polyline needs at least 2 points and a polygon at
/// least 3. Passing fewer is a programmer error upstream (not bad user data),
/// and implementations are entitled to panic on it.
///
/// A renderer is used by one chart at a time; [`Renderer::finish`] marks the
/// end of the pass and is the point where an accumulating backend flushes or
/// encodes its output.
pub trait Renderer {
    /// Fills an axis-aligned rectangle, optionally hatched.
    fn fill_rect(&mut self, rect: Rect, brush: &Brush, hatch: Hatching);

    /// Strokes the outline of an axis-aligned rectangle.
    fn stroke_rect(&mut self, rect: Rect, style: &StrokeStyle);

    /// Draws a single line segment.
    fn draw_line(&mut self, p0: Point, p1: Point, style: &StrokeStyle, dashed: bool);

    /// Draws a connected polyline through `points` (at least 2).
    fn draw_polyline(&mut self, points: &[Point], style: &StrokeStyle, dashed: bool);

    /// Fills a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, brush: &Brush);

    /// Fills a triangle.
    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, brush: &Brush);

    /// Fills a closed polygon through `points` (at least 3).
    fn fill_polygon(&mut self, points: &[Point], brush: &Brush);

    /// Draws `text` at `pos`, rotated by `angle` degrees counterclockwise.
    ///
    /// `anchor` positions the text horizontally relative to `pos`. Exact font
    /// metrics are backend business; the engine only picks anchor points.
    fn draw_text(
        &mut self,
        text: &str,
        pos: Point,
        font_size: f64,
        angle: f64,
        brush: &Brush,
        anchor: TextAnchor,
    );

    /// Ends the render pass. Accumulating backends flush/encode here.
    fn finish(&mut self) {}
}
