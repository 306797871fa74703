// File: crates/chart-core/src/series.rs
// Summary: Series model for categorical bars and binned histograms.

use crate::aggregate::Bin;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Bar,        // one bar per category label, evenly spaced on X
    Histogram,  // contiguous bars spanning each bin's [lo, hi)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub series_type: SeriesType,
    pub categories: Vec<(String, f64)>, // used by Bar
    pub bins: Vec<Bin>,                 // used by Histogram
    /// Stroke bar edges with the theme's edge color.
    pub outline: bool,
    /// Bar width as a fraction of one category slot (Bar only).
    pub bar_width: f32,
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self { series_type, categories: Vec::new(), bins: Vec::new(), outline: false, bar_width: 0.5 }
    }

    pub fn bars(data: Vec<(String, f64)>) -> Self {
        Self { categories: data, ..Self::new(SeriesType::Bar) }
    }

    /// Bars from `(label, count)` pairs, keeping their order.
    pub fn from_counts(counts: &[(String, usize)]) -> Self {
        Self::bars(counts.iter().map(|(k, n)| (k.clone(), *n as f64)).collect())
    }

    pub fn histogram(bins: Vec<Bin>) -> Self {
        Self { bins, ..Self::new(SeriesType::Histogram) }
    }

    pub fn with_outline(mut self, outline: bool) -> Self {
        self.outline = outline;
        self
    }

    pub fn len(&self) -> usize {
        match self.series_type {
            SeriesType::Bar => self.categories.len(),
            SeriesType::Histogram => self.bins.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Sum of bar heights.
    pub fn total(&self) -> f64 {
        match self.series_type {
            SeriesType::Bar => self.categories.iter().map(|(_, v)| *v).sum(),
            SeriesType::Histogram => self.bins.iter().map(|b| b.count as f64).sum(),
        }
    }

    /// Tallest bar, or 0.0 when empty.
    pub fn max_value(&self) -> f64 {
        let it: Box<dyn Iterator<Item = f64> + '_> = match self.series_type {
            SeriesType::Bar => Box::new(self.categories.iter().map(|(_, v)| *v)),
            SeriesType::Histogram => Box::new(self.bins.iter().map(|b| b.count as f64)),
        };
        it.fold(0.0, f64::max)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(k, _)| k.as_str())
    }
}
