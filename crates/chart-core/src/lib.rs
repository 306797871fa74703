// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for figure construction and rendering.

pub mod aggregate;
pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod error;

pub use aggregate::{histogram, value_counts, Bin};
pub use chart::{Chart, Figure, RenderOptions};
pub use series::{Series, SeriesType};
pub use axis::Axis;
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
pub use error::RenderError;
