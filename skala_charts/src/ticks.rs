// Copyright 2026 the Skala Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Nice number" tick increment selection and tick generation.
//!
//! The selector picks a pixel increment and a label rounding precision from
//! the data range and the available pixel extent, then ticks are generated
//! by striding outward from the axis origin pixel in both directions. The
//! heuristic is deliberately reproduced digit-for-digit from the reference
//! behavior; see the boundary tests at powers of ten below.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Hard cap on the number of tick divisions along one axis.
pub const MAX_DIV: f64 = 50.0;

/// A chosen tick increment: pixel stride plus label rounding precision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Increment {
    /// Stride between ticks in pixels.
    pub px: f64,
    /// Number of decimal places used when rounding tick labels.
    pub precision: usize,
}

/// Ordered tick pixel positions with parallel label strings.
///
/// Positions are generated origin-outward ascending, then origin-inward
/// descending; the combined list is intentionally not globally sorted
/// (rendering does not care; tests sort before comparing).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickSet {
    /// Tick positions along the axis, in pixels.
    pub positions: Vec<f64>,
    /// Label text for each position.
    pub labels: Vec<String>,
}

impl TickSet {
    /// Number of ticks.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the set contains no ticks.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Generates ticks for one axis direction.
    ///
    /// `lower`/`upper` are the data bounds, `origin_px` the pixel of the
    /// data anchor `origin_value`, `scale` the data units per pixel, and
    /// `extent_px` the available pixels. Degenerate inputs (zero range, or
    /// an increment that collapses to zero) produce a single tick at the
    /// origin rather than looping.
    pub(crate) fn generate(
        lower: f64,
        upper: f64,
        origin_px: f64,
        origin_value: f64,
        scale: f64,
        extent_px: f64,
    ) -> Self {
        let inc = pick_increment(lower, upper, extent_px, scale);
        let mut out = Self::default();

        if !inc.px.is_finite() || inc.px <= 0.0 {
            let pos = origin_px.clamp(0.0, extent_px);
            out.push(pos, origin_value, inc.precision);
            return out;
        }

        let label_value =
            |pos: f64| -> f64 { origin_value + scale * (pos - origin_px) };

        // MAX_DIV bounds the total tick count even when the capped stride
        // divides the extent exactly.
        #[allow(clippy::cast_possible_truncation, reason = "MAX_DIV is a small constant")]
        let cap = MAX_DIV as usize;

        let mut pos = origin_px;
        while pos <= extent_px && out.len() < cap {
            if pos + inc.px < 0.0 || pos < 0.0 {
                pos += inc.px;
                continue;
            }
            out.push(pos, label_value(pos), inc.precision);
            pos += inc.px;
        }

        pos = origin_px - inc.px;
        while pos > 0.0 && out.len() < cap {
            if pos > extent_px {
                pos -= inc.px;
                continue;
            }
            out.push(pos, label_value(pos), inc.precision);
            pos -= inc.px;
        }

        out
    }

    fn push(&mut self, pos: f64, value: f64, precision: usize) {
        self.positions.push(pos);
        self.labels.push(format_label(value, precision));
    }
}

/// Picks a tick increment and label precision for one axis direction.
///
/// Branches, in order:
/// 1. `1.0 <= range <= 2.0`: increment `0.5/range` data units, precision
///    from the power-of-ten normalization count.
/// 2. `range < 1.0`: increment `range/10`, precision likewise.
/// 3. otherwise: a power-of-ten base unit chosen from the digit counts of
///    the bounds, capped so the implied tick count never exceeds
///    [`MAX_DIV`]; precision defaults to 1.
pub(crate) fn pick_increment(lower: f64, upper: f64, extent_px: f64, scale: f64) -> Increment {
    let range = upper - lower;
    if !range.is_finite() || range <= 0.0 || !scale.is_finite() || scale <= 0.0 {
        return Increment {
            px: 0.0,
            precision: 1,
        };
    }

    if (1.0..=2.0).contains(&range) {
        let inc = 0.5 * (1.0 / range);
        return Increment {
            px: inc / scale,
            precision: pow10_precision(inc),
        };
    }
    if range < 1.0 {
        let inc = range / 10.0;
        return Increment {
            px: inc / scale,
            precision: pow10_precision(inc),
        };
    }

    let n_digits = digit_count(upper).max(digit_count(lower));
    let base_unit = if n_digits > 1 && upper <= 10_f64.powi(n_digits - 1) {
        10_f64.powi(n_digits - 2)
    } else if n_digits > 1 {
        10_f64.powi(n_digits - 1)
    } else {
        1.0
    };

    let mut px = base_unit / scale;
    let implied = extent_px / px;
    if implied > MAX_DIV {
        px = implied * px / MAX_DIV;
    }
    Increment { px, precision: 1 }
}

/// Counts the multiplications by ten needed to bring `|inc|` to at least 1,
/// and derives the label precision from it.
fn pow10_precision(inc: f64) -> usize {
    let mut scaled = inc.abs();
    let mut c = 0_usize;
    while scaled < 1.0 && c < 64 {
        scaled *= 10.0;
        c += 1;
    }
    c + 1
}

/// Number of decimal digits in the truncated integer part.
fn digit_count(v: f64) -> i32 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "truncation toward zero is the definition of this digit count"
    )]
    let mut x = v as i64;
    let mut count = 0;
    while x != 0 {
        x /= 10;
        count += 1;
    }
    count
}

fn format_label(value: f64, precision: usize) -> String {
    let mut factor = 1.0;
    for _ in 0..precision {
        factor *= 10.0;
    }
    let mut v = (value * factor).round() / factor;
    if v == 0.0 {
        // Avoids "-0.0" when a tick rounds to zero from below.
        v = 0.0;
    }
    alloc::format!("{v:.precision$}")
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    fn sorted(ticks: &TickSet) -> Vec<f64> {
        let mut v = ticks.positions.clone();
        v.sort_by(f64::total_cmp);
        v
    }

    #[test]
    fn common_range_uses_power_of_ten_units() {
        // Range 0..100 over 600px, no margins: scale = 1/6 data per px.
        let scale = 100.0 / 600.0;
        let inc = pick_increment(0.0, 100.0, 600.0, scale);
        // 3 digits, 100 <= 10^2, so the base unit is 10 data units = 60px.
        assert!((inc.px - 60.0).abs() < 1e-9);
        assert_eq!(inc.precision, 1);

        let ticks = TickSet::generate(0.0, 100.0, 0.0, 0.0, scale, 600.0);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks.labels[0], "0.0");
        assert_eq!(ticks.labels[10], "100.0");
    }

    #[test]
    fn small_range_derives_extra_precision() {
        // Range 1.5: increment 0.5/1.5 = 0.333..., one power of ten brings
        // it over 1, so labels round to 2 decimals.
        let scale = 1.5 / 300.0;
        let inc = pick_increment(0.0, 1.5, 300.0, scale);
        assert_eq!(inc.precision, 2);
        assert!((inc.px - (0.5 / 1.5) / scale).abs() < 1e-9);
    }

    #[test]
    fn sub_unit_range_divides_by_ten() {
        let scale = 0.4 / 200.0;
        let inc = pick_increment(0.1, 0.5, 200.0, scale);
        // increment 0.04 data units; two multiplications by ten reach 4.0.
        assert_eq!(inc.precision, 3);
        assert!((inc.px - 0.04 / scale).abs() < 1e-9);
    }

    #[test]
    fn tick_count_never_exceeds_max_div() {
        for (lower, upper, extent) in [
            (0.0, 100.0, 10_000.0),
            (0.0, 9999.0, 5_000.0),
            (-3000.0, 7000.0, 8_000.0),
            (0.0, 3.0, 4_000.0),
            // Mixed-sign range whose implied count (~91) trips the cap.
            (-9000.0, 99.0, 5_000.0),
        ] {
            let scale = (upper - lower) / extent;
            let ticks = TickSet::generate(lower, upper, 0.0, lower, scale, extent);
            assert!(
                ticks.len() as f64 <= MAX_DIV,
                "{} ticks for {lower}..{upper} over {extent}px",
                ticks.len()
            );
        }
    }

    #[test]
    fn sorted_ticks_are_evenly_spaced() {
        let scale = 100.0 / 640.0;
        let inc = pick_increment(0.0, 100.0, 640.0, scale);
        let ticks = TickSet::generate(0.0, 100.0, 32.0, 5.0, scale, 640.0);
        let sorted = sorted(&ticks);
        assert!(sorted.len() >= 2);
        for pair in sorted.windows(2) {
            assert!(
                (pair[1] - pair[0] - inc.px).abs() < 1e-6,
                "uneven spacing {} vs {}",
                pair[1] - pair[0],
                inc.px
            );
        }
    }

    #[test]
    fn degenerate_range_yields_single_tick_at_bound() {
        let ticks = TickSet::generate(5.0, 5.0, 10.0, 5.0, 0.0, 300.0);
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks.positions[0], 10.0);
        assert_eq!(ticks.labels[0], "5.0");
    }

    #[test]
    fn digit_count_truncates_toward_zero() {
        assert_eq!(digit_count(0.5), 0);
        assert_eq!(digit_count(9.99), 1);
        assert_eq!(digit_count(10.0), 2);
        assert_eq!(digit_count(-70.0), 2);
        assert_eq!(digit_count(100.0), 3);
    }

    #[test]
    fn power_of_ten_boundaries_pick_the_documented_unit() {
        // upper exactly 10^(nDigits-1) stays on the smaller unit.
        let scale = 10.0 / 500.0;
        let inc = pick_increment(0.0, 10.0, 500.0, scale);
        // digits(10) = 2 and 10 <= 10^1, so base unit 10^0 = 1 data unit.
        assert!((inc.px - 1.0 / scale).abs() < 1e-9);

        // Just past the boundary the unit jumps a decade.
        let scale = 11.0 / 500.0;
        let inc = pick_increment(0.0, 11.0, 500.0, scale);
        assert!((inc.px - 10.0 / scale).abs() < 1e-9);
    }

    #[test]
    fn labels_round_to_selected_precision() {
        assert_eq!(format_label(70.0, 1), "70.0");
        assert_eq!(format_label(0.333_333, 2), "0.33");
        assert_eq!(format_label(-0.000_01, 1), "0.0");
    }
}
