// Copyright 2026 the Skala Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Silhouette outlines for step histograms.
//!
//! Stacked step series render as abutting cumulative silhouettes rather
//! than filled bars. Layers are walked back-to-front (topmost cumulative
//! first); for each adjacent layer pair, the boundary-merge policy below
//! decides which vertices of the farther layer are visible at each bin
//! boundary and where the polyline has to break because the nearer layer
//! occludes it. The order is load-bearing: processing front-to-back
//! produces wrong occlusion.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

/// Computes the visible outline polylines between adjacent stacked layers.
///
/// `layers[0]` is the zero baseline and `layers[k]` the cumulative heights
/// of series `0..k`, each padded with a zero entry at both ends, so
/// `layers[k].len() == xs.len() + 1` where `xs` holds the bin-boundary x
/// positions. Heights and `xs` are both in pixels.
///
/// Returns `(series_index, polyline)` pairs in draw order (farthest series
/// first). Runs shorter than two points carry no visible segment and are
/// dropped.
pub(crate) fn layer_outlines(layers: &[Vec<f64>], xs: &[f64]) -> Vec<(usize, Vec<Point>)> {
    for layer in layers {
        debug_assert_eq!(layer.len(), xs.len() + 1, "layer not padded to boundaries");
    }

    let mut out = Vec::new();

    for k in (1..layers.len()).rev() {
        let back = &layers[k];
        let front = &layers[k - 1];
        let series = k - 1;

        let mut line: Vec<Point> = Vec::new();
        let mut flush = |line: &mut Vec<Point>| {
            if line.len() >= 2 {
                out.push((series, core::mem::take(line)));
            } else {
                line.clear();
            }
        };

        for (i, &x) in xs.iter().enumerate() {
            let back_left = back[i];
            let back_right = back[i + 1];
            let front_left = front[i];
            let front_right = front[i + 1];

            let c1 = back_left > front_left;
            let c2 = back_right > front_right;
            let c3 = back_left > front_right;
            let c4 = back_right > front_left;

            if c1 || (c3 && c4) {
                line.push(Point::new(x, back_left));
            }
            if c1 && !c4 {
                line.push(Point::new(x, front_left));
            }
            if c1 && (!c3 || !c4) {
                flush(&mut line);
            }
            if c2 && !c3 {
                line.push(Point::new(x, front_right));
            }
            if c2 || (c3 && c4) {
                line.push(Point::new(x, back_right));
            }
            if !c2 && c3 && c4 {
                flush(&mut line);
            }
        }

        flush(&mut line);
    }

    out
}
