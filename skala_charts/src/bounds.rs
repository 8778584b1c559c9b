// Copyright 2026 the Skala Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric bounds over one or more series.

use crate::error::{ChartError, ChartResult};
use crate::series::Series;

/// The tightest inclusive `(min, max)` ranges covering a set of series.
///
/// Invariant: `lower <= upper` on both axes. A single point produces a
/// degenerate range (`lower == upper`); scale derivation downstream
/// special-cases that rather than dividing by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    /// `(min, max)` over all x values.
    pub x: (f64, f64),
    /// `(min, max)` over all y values.
    pub y: (f64, f64),
}

impl AxisBounds {
    /// Scans every point of every series once and returns the merged bounds.
    ///
    /// Empty input (no series, or only empty series) is rejected with
    /// [`ChartError::NoData`]. Series constructors filter non-finite values,
    /// so the scan only orders finite numbers.
    pub fn of_series(series: &[Series]) -> ChartResult<Self> {
        let mut bounds: Option<Self> = None;
        for s in series {
            for p in &s.points {
                match &mut bounds {
                    None => {
                        bounds = Some(Self {
                            x: (p.x, p.x),
                            y: (p.y, p.y),
                        });
                    }
                    Some(b) => {
                        b.x.0 = b.x.0.min(p.x);
                        b.x.1 = b.x.1.max(p.x);
                        b.y.0 = b.y.0.min(p.y);
                        b.y.1 = b.y.1.max(p.y);
                    }
                }
            }
        }
        bounds.ok_or(ChartError::NoData)
    }

    /// Returns these bounds with the x range replaced by the union of both
    /// arguments' x ranges.
    ///
    /// Used by the dual-axis merge: both axes are rebuilt over the unioned x
    /// range so their vertical gridlines align, while each keeps its own y
    /// range.
    pub fn union_x(self, other: Self) -> Self {
        Self {
            x: (self.x.0.min(other.x.0), self.x.1.max(other.x.1)),
            y: self.y,
        }
    }

    /// Width of the x range in data units.
    pub fn x_range(&self) -> f64 {
        self.x.1 - self.x.0
    }

    /// Height of the y range in data units.
    pub fn y_range(&self) -> f64 {
        self.y.1 - self.y.0
    }
}
