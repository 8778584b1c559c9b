// Copyright 2026 the Skala Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scatter marker shapes.
//!
//! Regular-polygon markers are generated by seeding one vertex directly
//! above the center at a shape-specific radius and rotating it about the
//! center `sides - 1` more times. The star alternates an outer and an inner
//! seed offset by 36 degrees.

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Marker glyph shapes for scatter points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    /// A filled circle.
    #[default]
    Circle,
    /// An axis-aligned square.
    Square,
    /// An upward-pointing equilateral triangle.
    Triangle,
    /// A square rotated 45 degrees.
    Diamond,
    /// A regular hexagon.
    Hexagon,
    /// A regular pentagon.
    Pentagon,
    /// A five-pointed star.
    Star,
}

/// Geometry for one marker instance, ready for a renderer primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkerGeometry {
    /// A circle at `center` with the given radius.
    Circle {
        /// Marker center.
        center: Point,
        /// Radius in pixels.
        radius: f64,
    },
    /// An axis-aligned rectangle.
    Rect(Rect),
    /// A triangle.
    Triangle(Point, Point, Point),
    /// An ordered closed-polygon vertex list.
    Polygon(SmallVec<[Point; 10]>),
}

impl MarkerShape {
    /// Returns the geometry for this shape centered at `center`; `size` is
    /// the overall glyph diameter/side length.
    pub fn geometry(self, center: Point, size: f64) -> MarkerGeometry {
        let half = size * 0.5;
        match self {
            Self::Circle => MarkerGeometry::Circle {
                center,
                radius: half,
            },
            Self::Square => {
                MarkerGeometry::Rect(Rect::from_center_size(center, Size::new(size, size)))
            }
            Self::Triangle => {
                let r = size / SQRT_3;
                MarkerGeometry::Triangle(
                    Point::new(center.x, center.y + r),
                    Point::new(center.x + r * SQRT_3 * 0.5, center.y - r * 0.5),
                    Point::new(center.x - r * SQRT_3 * 0.5, center.y - r * 0.5),
                )
            }
            Self::Diamond => {
                let corners = [
                    Point::new(center.x - half, center.y + half),
                    Point::new(center.x + half, center.y + half),
                    Point::new(center.x + half, center.y - half),
                    Point::new(center.x - half, center.y - half),
                ];
                MarkerGeometry::Polygon(
                    corners
                        .iter()
                        .map(|&c| rotate_point(c, center, 45.0))
                        .collect(),
                )
            }
            Self::Hexagon => MarkerGeometry::Polygon(rotated_ring(center, half, 6, 60.0)),
            Self::Pentagon => MarkerGeometry::Polygon(rotated_ring(center, half, 5, 72.0)),
            Self::Star => {
                let mut outer = Point::new(center.x, center.y + half);
                let mut inner = rotate_point(Point::new(center.x, center.y + half * 0.5), center, 36.0);
                let mut points = SmallVec::new();
                points.push(outer);
                points.push(inner);
                for _ in 1..5 {
                    outer = rotate_point(outer, center, 72.0);
                    inner = rotate_point(inner, center, 72.0);
                    points.push(outer);
                    points.push(inner);
                }
                MarkerGeometry::Polygon(points)
            }
        }
    }
}

fn rotated_ring(center: Point, radius: f64, sides: usize, step_degrees: f64) -> SmallVec<[Point; 10]> {
    let mut vertex = Point::new(center.x, center.y + radius);
    let mut points = SmallVec::new();
    points.push(vertex);
    for _ in 1..sides {
        vertex = rotate_point(vertex, center, step_degrees);
        points.push(vertex);
    }
    points
}

/// Rotates `point` about `center` by `angle_degrees` counterclockwise.
pub fn rotate_point(point: Point, center: Point, angle_degrees: f64) -> Point {
    let angle = angle_degrees * (core::f64::consts::PI / 180.0);
    let s = angle.sin();
    let c = angle.cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point::new(center.x + dx * c - dy * s, center.y + dx * s + dy * c)
}
