// File: crates/email-eda/tests/charts.rs
// Purpose: Figure structure for the sample dataset, degenerate inputs, and an end-to-end PNG render.

use chart_core::{RenderOptions, SeriesType};
use email_eda::charts::{build_figure, present, HISTOGRAM_BINS};
use email_eda::{Columns, Dataset};

#[test]
fn figure_has_three_panels_in_order() {
    let fig = build_figure(&Dataset::sample().unwrap());
    assert_eq!((fig.width_in, fig.height_in), (12.0, 4.0));
    let titles: Vec<&str> = fig.panels.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Emails by Category", "Emails by Sender", "Email Size Distribution"]);
    assert_eq!(fig.panels[2].x_axis.label, "Size (KB)");
    assert_eq!(fig.panels[0].x_axis.tick_rotation, 45.0);
    assert_eq!(fig.panels[1].x_axis.tick_rotation, 45.0);
}

#[test]
fn category_panel_bars() {
    let fig = build_figure(&Dataset::sample().unwrap());
    let panel = &fig.panels[0];
    assert_eq!(panel.category_labels(), vec!["work", "promotion"]);
    let s = &panel.series[0];
    assert_eq!(s.series_type, SeriesType::Bar);
    assert_eq!(s.categories.iter().map(|(_, v)| *v).collect::<Vec<_>>(), vec![4.0, 1.0]);
    assert_eq!(s.total(), 5.0);
}

#[test]
fn sender_panel_bars() {
    let fig = build_figure(&Dataset::sample().unwrap());
    let s = &fig.panels[1].series[0];
    assert_eq!(s.categories[0], ("boss@company.com".to_string(), 2.0));
    assert!(s.categories[1..].iter().all(|(_, v)| *v == 1.0));
    assert_eq!(s.total(), 5.0);
}

#[test]
fn size_histogram_panel() {
    let fig = build_figure(&Dataset::sample().unwrap());
    let s = &fig.panels[2].series[0];
    assert_eq!(s.series_type, SeriesType::Histogram);
    assert!(s.outline);
    assert_eq!(s.bins.len(), HISTOGRAM_BINS);
    assert_eq!(s.bins[0].lo, 150.0);
    assert_eq!(s.bins[HISTOGRAM_BINS - 1].hi, 1200.0);
    assert_eq!(s.total(), 5.0);
}

#[test]
fn figure_is_deterministic() {
    let ds = Dataset::sample().unwrap();
    let (a, b) = (build_figure(&ds), build_figure(&ds));
    assert_eq!(a.panels.len(), b.panels.len());
    for (pa, pb) in a.panels.iter().zip(&b.panels) {
        assert_eq!(pa.title, pb.title);
        assert_eq!(pa.series, pb.series);
        assert_eq!(pa.x_axis, pb.x_axis);
        assert_eq!(pa.y_axis, pb.y_axis);
    }
}

#[test]
fn empty_dataset_builds_a_figure() {
    let fig = build_figure(&Dataset::from_columns(Columns::default()).unwrap());
    assert_eq!(fig.panels.len(), 3);
    assert!(fig.panels[0].series[0].is_empty());
    assert_eq!(fig.panels[2].series[0].total(), 0.0);
}

#[test]
fn present_writes_png_of_figure_size() {
    let fig = build_figure(&Dataset::sample().unwrap());
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let out = std::path::PathBuf::from("target/test_out/email_eda.png");

    present(&fig, &opts, &out).expect("present figure");
    let img = image::open(&out).expect("decode written png").to_rgba8();
    assert_eq!(img.dimensions(), (1200, 400));
}
