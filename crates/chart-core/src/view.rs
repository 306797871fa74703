// File: crates/chart-core/src/view.rs
// View state: data ranges derived from a panel's series, used to autoscale its axes.

use crate::Chart;
use crate::series::SeriesType;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Fit the chart's series. Bars grow from zero, so `y_min` stays at 0 and only
    /// the top receives `margin` (a fraction of the tallest bar) as headroom.
    /// Histograms get the same fraction of the bin range on each side of X.
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_max = 0.0f64;
        for s in &chart.series {
            match s.series_type {
                SeriesType::Bar => {
                    if s.categories.is_empty() { continue; }
                    // one slot per category centred on its index
                    x_min = x_min.min(-0.5);
                    x_max = x_max.max(s.categories.len() as f64 - 0.5);
                }
                SeriesType::Histogram => {
                    let (Some(first), Some(last)) = (s.bins.first(), s.bins.last()) else { continue };
                    let pad = (last.hi - first.lo) * margin.max(0.0);
                    x_min = x_min.min(first.lo - pad);
                    x_max = x_max.max(last.hi + pad);
                }
            }
            y_max = y_max.max(s.max_value());
        }
        if !x_min.is_finite() || !x_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if y_max < 1e-9 { y_max = 1.0; }
        Self { x_min, x_max, y_min: 0.0, y_max: y_max * (1.0 + margin.max(0.0)) }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}
