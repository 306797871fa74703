// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over bar and histogram series.

use chart_core::{histogram, Chart, Series};

#[test]
fn autoscale_bars_uses_category_slots() {
    let mut chart = Chart::new();
    chart.add_series(Series::bars(vec![("work".into(), 4.0), ("promotion".into(), 1.0)]));

    chart.autoscale_axes(0.05);

    // Two slots centred on 0 and 1
    assert!((chart.x_axis.min + 0.5).abs() < 1e-9);
    assert!((chart.x_axis.max - 1.5).abs() < 1e-9);

    // Bars grow from zero with headroom above the tallest
    assert_eq!(chart.y_axis.min, 0.0);
    assert!((chart.y_axis.max - 4.2).abs() < 1e-9);
}

#[test]
fn autoscale_histogram_pads_bin_range() {
    let mut chart = Chart::new();
    chart.add_series(Series::histogram(histogram(&[150.0, 230.0, 540.0, 1200.0, 180.0], 10)));

    chart.autoscale_axes(0.05);

    // X spans 150..1200 plus 5% of 1050 each side
    assert!((chart.x_axis.min - 97.5).abs() < 1e-9);
    assert!((chart.x_axis.max - 1252.5).abs() < 1e-9);
    assert!(chart.y_axis.max >= 3.0);
}

#[test]
fn autoscale_empty_chart_falls_back_to_unit_view() {
    let mut chart = Chart::new();
    chart.autoscale_axes(0.05);
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 1.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 1.0));
}
