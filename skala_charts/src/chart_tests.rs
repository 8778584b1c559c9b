// Copyright 2026 the Skala Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use kurbo::{Point, Size};

use crate::{AxisSide, HistogramChart, LineChart, Series};

use peniko::color::palette::css;
use skala_core::RecordingRenderer;

const SIZE: Size = Size::new(1000.0, 660.0);

fn xy(x: [f64; 4], y: [f64; 4]) -> Series {
    Series::new(
        x.iter().zip(&y).map(|(&x, &y)| Point::new(x, y)),
        "series",
    )
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn all_positive_y_keeps_the_origin_on_the_bottom_margin_edge() {
    let mut chart = LineChart::new();
    chart.add_series(
        xy([0.0, 1.0, 2.0, 3.0], [70.0, 80.0, 95.0, 100.0]),
        AxisSide::Primary,
    );
    let layout = chart.layout(SIZE).unwrap();

    let bottom_margin = SIZE.height * 0.05;
    assert!(close(layout.primary.origin.y, bottom_margin));
    // The anchor is the data minimum, not zero: all-positive data does not
    // get dragged down to a zero baseline.
    assert!(close(layout.primary.origin_value.y, 70.0));
}

#[test]
fn all_negative_y_anchors_at_the_least_negative_bound_on_the_top_edge() {
    let mut chart = LineChart::new();
    chart.add_series(
        xy([0.0, 1.0, 2.0, 3.0], [-70.0, -80.0, -95.0, -100.0]),
        AxisSide::Primary,
    );
    let layout = chart.layout(SIZE).unwrap();

    let top_edge = SIZE.height - SIZE.height * 0.05;
    assert!(close(layout.primary.origin.y, top_edge));
    assert!(close(layout.primary.origin_value.y, -70.0));
}

#[test]
fn secondary_axis_shares_merged_x_but_keeps_its_own_y_scale() {
    let mut chart = LineChart::new();
    chart.add_series(
        xy([0.0, 1.0, 2.0, 3.0], [70.0, 80.0, 95.0, 100.0]),
        AxisSide::Primary,
    );
    chart.add_series(
        xy([0.0, 1.0, 2.0, 3.0], [-800.0, -900.0, -800.0, -1000.0]),
        AxisSide::Secondary,
    );
    let layout = chart.layout(SIZE).unwrap();
    let secondary = layout.secondary.expect("secondary axis");

    assert_eq!(layout.primary.bounds.x, secondary.bounds.x);
    assert!(close(layout.primary.scale_x, secondary.scale_x));
    assert!(close(layout.primary.origin.x, secondary.origin.x));
    assert!(!close(layout.primary.scale_y, secondary.scale_y));

    // A shared x value lands on the same pixel column on both axes.
    let px_primary = layout.primary.to_pixel(Point::new(2.0, 0.0)).x;
    let px_secondary = secondary.to_pixel(Point::new(2.0, 0.0)).x;
    assert!(close(px_primary, px_secondary));
}

#[test]
fn straddling_range_maps_zero_exactly_onto_the_origin() {
    let mut chart = LineChart::new();
    chart.add_series(
        xy([0.0, 1.0, 2.0, 3.0], [-40.0, 10.0, 25.0, 60.0]),
        AxisSide::Primary,
    );
    let layout = chart.layout(SIZE).unwrap();
    let zero = layout.primary.to_pixel(Point::new(0.0, 0.0));
    assert!(close(zero.y, layout.primary.origin.y));
    assert!(close(layout.primary.origin_value.y, 0.0));
}

#[test]
fn separately_built_identical_histograms_render_identically() {
    let build = || {
        let mut chart = HistogramChart::new(10).unwrap();
        chart.add_series(&[5.0], "a", css::LIGHT_BLUE);
        chart.add_series(&[6.0], "b", css::ORANGE);
        chart
    };
    let mut first = RecordingRenderer::new();
    build().render(SIZE, &mut first).unwrap();
    let mut second = RecordingRenderer::new();
    build().render(SIZE, &mut second).unwrap();
    assert_eq!(first.commands(), second.commands());
}

#[test]
fn legend_labels_follow_registration_order() {
    let mut chart = HistogramChart::new(4).unwrap();
    chart.add_series(&[1.0, 2.0], "base", css::LIGHT_BLUE);
    chart.add_series(&[1.5], "stacked", css::ORANGE);
    let labels = chart.legend_labels();
    assert_eq!(labels[0], ("base", css::LIGHT_BLUE));
    assert_eq!(labels[1], ("stacked", css::ORANGE));

    let mut chart = LineChart::new();
    chart.add_series(xy([0.0, 1.0, 2.0, 3.0], [1.0, 2.0, 3.0, 4.0]), AxisSide::Secondary);
    chart.add_series(xy([0.0, 1.0, 2.0, 3.0], [1.0, 2.0, 3.0, 4.0]), AxisSide::Primary);
    // Primary-axis series lead regardless of insertion order.
    assert_eq!(chart.legend_labels().len(), 2);
}

#[test]
fn tick_positions_stay_inside_the_canvas() {
    let mut chart = LineChart::new();
    chart.add_series(
        xy([0.0, 1.0, 2.0, 3.0], [-40.0, 10.0, 25.0, 60.0]),
        AxisSide::Primary,
    );
    let layout = chart.layout(SIZE).unwrap();
    assert!(!layout.primary.x_ticks.is_empty());
    assert!(!layout.primary.y_ticks.is_empty());
    for &x in &layout.primary.x_ticks.positions {
        assert!((0.0..=SIZE.width).contains(&x));
    }
    for &y in &layout.primary.y_ticks.positions {
        assert!((0.0..=SIZE.height).contains(&y));
    }
}
