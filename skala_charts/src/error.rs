// Copyright 2026 the Skala Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for chart layout.
//!
//! Only unrecoverable configuration problems become errors. Recoverable
//! data-shape problems (a stacked series whose point count does not match
//! the base series) are absorbed locally with a `tracing` diagnostic, and
//! geometric contract violations (degenerate polylines/polygons) panic in
//! the renderer, since they indicate an engine bug rather than bad input.

use thiserror::Error;

/// Errors that can occur while laying out a chart.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartError {
    /// No series, or no points in any series, were supplied.
    ///
    /// Bounds over an empty set are rejected rather than defaulted to a zero
    /// range, which would otherwise feed a division by zero into the scale
    /// computation.
    #[error("no data: at least one series with at least one point is required")]
    NoData,

    /// Two collections that must align by index have different lengths.
    #[error("length mismatch: expected {expected} values, got {found}")]
    LengthMismatch {
        /// The required length.
        expected: usize,
        /// The length actually supplied.
        found: usize,
    },

    /// A histogram was configured with zero bins.
    #[error("bin count must be at least 1")]
    ZeroBins,
}

/// Result alias for chart layout operations.
pub type ChartResult<T> = Result<T, ChartError>;
