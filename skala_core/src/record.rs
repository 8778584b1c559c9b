// Copyright 2026 the Skala Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A renderer that records draw calls instead of rasterizing them.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Brush;

use crate::render::{Renderer, StrokeStyle};
use crate::style::{Hatching, TextAnchor};

/// One recorded draw call.
///
/// Commands compare by value, so two renders of identical inputs produce
/// equal command lists. Tests lean on this for regression checks.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// A filled rectangle.
    FillRect {
        /// Rectangle in pixel space.
        rect: Rect,
        /// Fill paint.
        brush: Brush,
        /// Hatch pattern.
        hatch: Hatching,
    },
    /// A stroked rectangle outline.
    StrokeRect {
        /// Rectangle in pixel space.
        rect: Rect,
        /// Stroke paint.
        brush: Brush,
        /// Stroke width in pixels.
        width: f64,
    },
    /// A single line segment.
    Line {
        /// Segment start.
        p0: Point,
        /// Segment end.
        p1: Point,
        /// Stroke paint.
        brush: Brush,
        /// Stroke width in pixels.
        width: f64,
        /// Whether the segment is dashed.
        dashed: bool,
    },
    /// A connected polyline.
    Polyline {
        /// Vertices, at least 2.
        points: Vec<Point>,
        /// Stroke paint.
        brush: Brush,
        /// Stroke width in pixels.
        width: f64,
        /// Whether the line is dashed.
        dashed: bool,
    },
    /// A filled circle.
    Circle {
        /// Center in pixel space.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Fill paint.
        brush: Brush,
    },
    /// A filled triangle.
    Triangle {
        /// First vertex.
        a: Point,
        /// Second vertex.
        b: Point,
        /// Third vertex.
        c: Point,
        /// Fill paint.
        brush: Brush,
    },
    /// A filled closed polygon.
    Polygon {
        /// Vertices, at least 3.
        points: Vec<Point>,
        /// Fill paint.
        brush: Brush,
    },
    /// A text run.
    Text {
        /// The text content.
        text: String,
        /// Anchor position in pixel space.
        pos: Point,
        /// Font size in pixels.
        font_size: f64,
        /// Rotation in degrees counterclockwise.
        angle: f64,
        /// Fill paint.
        brush: Brush,
        /// Horizontal anchoring.
        anchor: TextAnchor,
    },
    /// End of the render pass.
    Finish,
}

/// A [`Renderer`] that accumulates [`DrawCommand`]s.
///
/// This is the "explicit sink" form of an accumulating backend: the caller
/// owns it, passes it into one render pass, and reads the command list back
/// out afterwards. It also enforces the polyline/polygon arity contract with
/// hard asserts, so engine bugs surface here rather than as corrupt output.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the commands recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Consumes the recorder and returns the command list.
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl Renderer for RecordingRenderer {
    fn fill_rect(&mut self, rect: Rect, brush: &Brush, hatch: Hatching) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            brush: brush.clone(),
            hatch,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, style: &StrokeStyle) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            brush: style.brush.clone(),
            width: style.stroke_width,
        });
    }

    fn draw_line(&mut self, p0: Point, p1: Point, style: &StrokeStyle, dashed: bool) {
        self.commands.push(DrawCommand::Line {
            p0,
            p1,
            brush: style.brush.clone(),
            width: style.stroke_width,
            dashed,
        });
    }

    fn draw_polyline(&mut self, points: &[Point], style: &StrokeStyle, dashed: bool) {
        assert!(
            points.len() >= 2,
            "polyline needs at least 2 points, got {}",
            points.len()
        );
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            brush: style.brush.clone(),
            width: style.stroke_width,
            dashed,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, brush: &Brush) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            brush: brush.clone(),
        });
    }

    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, brush: &Brush) {
        self.commands.push(DrawCommand::Triangle {
            a,
            b,
            c,
            brush: brush.clone(),
        });
    }

    fn fill_polygon(&mut self, points: &[Point], brush: &Brush) {
        assert!(
            points.len() >= 3,
            "polygon needs at least 3 points, got {}",
            points.len()
        );
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            brush: brush.clone(),
        });
    }

    fn draw_text(
        &mut self,
        text: &str,
        pos: Point,
        font_size: f64,
        angle: f64,
        brush: &Brush,
        anchor: TextAnchor,
    ) {
        self.commands.push(DrawCommand::Text {
            text: String::from(text),
            pos,
            font_size,
            angle,
            brush: brush.clone(),
            anchor,
        });
    }

    fn finish(&mut self) {
        self.commands.push(DrawCommand::Finish);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use kurbo::Point;
    use peniko::Brush;
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn identical_passes_record_identical_commands() {
        let brush = Brush::Solid(css::CORNFLOWER_BLUE);
        let mut a = RecordingRenderer::new();
        let mut b = RecordingRenderer::new();
        for r in [&mut a, &mut b] {
            r.fill_circle(Point::new(1.0, 2.0), 3.0, &brush);
            r.draw_polyline(
                &[Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
                &StrokeStyle::default(),
                false,
            );
            r.finish();
        }
        assert_eq!(a.commands(), b.commands());
        assert_eq!(a.commands().last(), Some(&DrawCommand::Finish));
    }

    #[test]
    #[should_panic(expected = "polyline needs at least 2 points")]
    fn degenerate_polyline_panics() {
        let mut r = RecordingRenderer::new();
        r.draw_polyline(&[Point::new(0.0, 0.0)], &StrokeStyle::default(), false);
    }

    #[test]
    #[should_panic(expected = "polygon needs at least 3 points")]
    fn degenerate_polygon_panics() {
        let mut r = RecordingRenderer::new();
        let pts = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        r.fill_polygon(&pts, &Brush::Solid(css::BLACK));
    }
}
