// Copyright 2026 the Skala Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick, label and gridline emission shared by the chart orchestrators.
//!
//! Positioning here is deliberately simple fixed-offset arithmetic; real
//! text metrics are a renderer concern.

use kurbo::{Point, Size};
use peniko::Brush;
use peniko::color::palette::css;
use skala_core::{Renderer, StrokeStyle, TextAnchor};

use crate::ticks::TickSet;

/// Length of a tick stem outside the plot edge.
pub(crate) const TICK_LEN: f64 = 6.0;
/// Gap between a tick stem and its label.
pub(crate) const LABEL_GAP: f64 = 4.0;
/// Font size for tick labels.
pub(crate) const LABEL_FONT_SIZE: f64 = 12.0;

pub(crate) fn rule_style() -> StrokeStyle {
    StrokeStyle::solid(css::BLACK, 1.0)
}

pub(crate) fn grid_style() -> StrokeStyle {
    StrokeStyle {
        brush: Brush::Solid(css::BLACK.with_alpha(40.0 / 255.0)),
        stroke_width: 1.0,
    }
}

/// Emits stems and labels for ticks along the bottom edge, plus vertical
/// gridlines when `grid` is set.
pub(crate) fn draw_x_guides(r: &mut dyn Renderer, ticks: &TickSet, size: Size, grid: bool) {
    let rule = rule_style();
    if grid {
        let style = grid_style();
        for &x in &ticks.positions {
            r.draw_line(
                Point::new(x, 0.0),
                Point::new(x, size.height),
                &style,
                false,
            );
        }
    }
    let label_y = -(TICK_LEN + LABEL_GAP + LABEL_FONT_SIZE);
    for (i, &x) in ticks.positions.iter().enumerate() {
        r.draw_line(Point::new(x, 0.0), Point::new(x, -TICK_LEN), &rule, false);
        r.draw_text(
            &ticks.labels[i],
            Point::new(x, label_y),
            LABEL_FONT_SIZE,
            0.0,
            &rule.brush,
            TextAnchor::Middle,
        );
    }
}

/// Emits stems and labels for ticks along the left edge (or the right edge
/// when `trailing` is set, as used by a secondary y axis), plus horizontal
/// gridlines when `grid` is set.
pub(crate) fn draw_y_guides(
    r: &mut dyn Renderer,
    ticks: &TickSet,
    size: Size,
    grid: bool,
    trailing: bool,
) {
    let rule = rule_style();
    if grid {
        let style = grid_style();
        for &y in &ticks.positions {
            r.draw_line(Point::new(0.0, y), Point::new(size.width, y), &style, false);
        }
    }
    for (i, &y) in ticks.positions.iter().enumerate() {
        if trailing {
            r.draw_line(
                Point::new(size.width, y),
                Point::new(size.width + TICK_LEN, y),
                &rule,
                false,
            );
            r.draw_text(
                &ticks.labels[i],
                Point::new(size.width + TICK_LEN + LABEL_GAP, y),
                LABEL_FONT_SIZE,
                0.0,
                &rule.brush,
                TextAnchor::Start,
            );
        } else {
            r.draw_line(Point::new(0.0, y), Point::new(-TICK_LEN, y), &rule, false);
            r.draw_text(
                &ticks.labels[i],
                Point::new(-(TICK_LEN + LABEL_GAP), y),
                LABEL_FONT_SIZE,
                0.0,
                &rule.brush,
                TextAnchor::End,
            );
        }
    }
}
