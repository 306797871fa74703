// File: crates/email-eda/src/charts.rs
// Summary: Builds the three-panel figure (category bars, sender bars, size histogram) and presents it as a PNG.

use std::path::Path;

use chart_core::types::{FIGURE_HEIGHT_IN, FIGURE_WIDTH_IN};
use chart_core::{histogram, Axis, Chart, Figure, RenderError, RenderOptions, Series};

use crate::dataset::Dataset;
use crate::report::Summary;

pub const HISTOGRAM_BINS: usize = 10;
/// Tick label slant on the count panels, degrees.
pub const LABEL_ROTATION: f32 = 45.0;
/// Headroom above the tallest bar, as a fraction of it.
const MARGIN: f64 = 0.05;

/// Bar panel with one bar per `(label, count)` in the given order.
pub fn count_chart(title: &str, counts: &[(String, usize)]) -> Chart {
    let mut chart = Chart::new().with_title(title);
    chart.x_axis = Axis::default_x().with_tick_rotation(LABEL_ROTATION);
    chart.add_series(Series::from_counts(counts));
    chart.autoscale_axes(MARGIN);
    chart
}

pub fn category_chart(summary: &Summary) -> Chart {
    count_chart("Emails by Category", &summary.by_category)
}

pub fn sender_chart(summary: &Summary) -> Chart {
    count_chart("Emails by Sender", &summary.by_sender)
}

pub fn size_histogram(dataset: &Dataset) -> Chart {
    let sizes = dataset.records().iter().map(|r| r.size_kb as f64).collect::<Vec<_>>();
    let mut chart = Chart::new().with_title("Email Size Distribution");
    chart.x_axis = Axis::new("Size (KB)", 0.0, 1.0);
    chart.add_series(Series::histogram(histogram(&sizes, HISTOGRAM_BINS)).with_outline(true));
    chart.autoscale_axes(MARGIN);
    chart
}

/// The 12×4 figure with the three panels left to right.
pub fn build_figure(dataset: &Dataset) -> Figure {
    let summary = Summary::compute(dataset);
    let mut figure = Figure::new(FIGURE_WIDTH_IN, FIGURE_HEIGHT_IN);
    figure.add_panel(category_chart(&summary));
    figure.add_panel(sender_chart(&summary));
    figure.add_panel(size_histogram(dataset));
    figure
}

/// Render `figure` and write it to `out`.
pub fn present(figure: &Figure, opts: &RenderOptions, out: &Path) -> Result<(), RenderError> {
    let (w, h) = figure.pixel_size(opts.dpi);
    log::info!("rendering {} panels at {}x{} px ({} theme)", figure.panels.len(), w, h, opts.theme.name);
    figure.render_to_png(opts, out)?;
    log::info!("figure written to {}", out.display());
    Ok(())
}
