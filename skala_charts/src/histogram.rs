// Copyright 2026 the Skala Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Histogram binning.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// One histogram bin.
///
/// Bins are implicitly indexed `0..bins`; `frequency` is a raw count, or a
/// density when the chart is normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistogramBin {
    /// Count (or normalized density) of samples in the bin.
    pub frequency: f64,
    /// Inclusive lower edge of the bin.
    pub range_start: f64,
    /// Upper edge of the bin (exclusive except for the last bin).
    pub range_end: f64,
}

/// Rounds `v` down to the nearest multiple of the power of ten just below
/// its magnitude (`73 -> 70`, `0.62 -> 0.6`, `-3.2 -> -4`). Zero stays zero.
pub fn round_floor_pow10(v: f64) -> f64 {
    if v == 0.0 {
        return 0.0;
    }
    let magnitude = 10_f64.powi(pow10_exponent(v));
    (v / magnitude).floor() * magnitude
}

/// Rounds `v` up to the nearest multiple of the power of ten just below its
/// magnitude (`73 -> 80`, `0.62 -> 0.7`, `-3.2 -> -3`). Zero stays zero.
pub fn round_ceil_pow10(v: f64) -> f64 {
    if v == 0.0 {
        return 0.0;
    }
    let magnitude = 10_f64.powi(pow10_exponent(v));
    (v / magnitude).ceil() * magnitude
}

fn pow10_exponent(v: f64) -> i32 {
    let e = v.abs().log10().floor();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "f64 magnitudes keep the exponent far inside i32"
    )]
    {
        e as i32
    }
}

/// Per-series binning result over a shared bin grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct BinnedSeries {
    /// Frequency per bin, index-aligned with the grid.
    pub frequencies: Vec<f64>,
    /// Largest single-bin frequency in this series.
    pub max_frequency: f64,
}

/// Partitions `data` into `bins` equal-width bins over `[start, end)`.
///
/// Each bin counts samples with `bin_start <= d < bin_end`; the final bin
/// also accepts its upper edge, so a sample sitting exactly on the rounded
/// maximum is not lost (bin mass always sums to the sample count).
///
/// If `normalized`, every frequency (and the running maximum) is divided by
/// `samples × bin_interval`, turning counts into densities.
pub(crate) fn bin_series(data: &[f64], start: f64, end: f64, bins: usize, normalized: bool) -> BinnedSeries {
    let interval = (end - start) / bins as f64;
    let mut frequencies = vec![0.0_f64; bins];

    if interval > 0.0 {
        for &d in data {
            if d < start || d > end {
                continue;
            }
            #[allow(
                clippy::cast_possible_truncation,
                reason = "clamped to the bin range before the cast"
            )]
            let index = (((d - start) / interval).floor()).clamp(0.0, (bins - 1) as f64) as usize;
            frequencies[index] += 1.0;
        }
    } else {
        // Degenerate grid: every in-range sample lands in the first bin.
        frequencies[0] = data.iter().filter(|&&d| d == start).count() as f64;
    }

    let mut max_frequency = frequencies.iter().fold(0.0_f64, |a, &b| a.max(b));

    if normalized && interval > 0.0 && !data.is_empty() {
        let factor = data.len() as f64 * interval;
        for f in &mut frequencies {
            *f /= factor;
        }
        max_frequency /= factor;
    }

    BinnedSeries {
        frequencies,
        max_frequency,
    }
}
