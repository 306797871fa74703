// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure size, DPI, panel paddings).

/// Default figure width in logical units (inches).
pub const FIGURE_WIDTH_IN: f32 = 12.0;
/// Default figure height in logical units (inches).
pub const FIGURE_HEIGHT_IN: f32 = 4.0;
/// Pixels per logical unit used when no DPI is configured.
pub const DEFAULT_DPI: f32 = 100.0;

/// Panel margins around the plot area, in pixels at 100 DPI.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Scale every side by `factor`, rounding to whole pixels.
    pub fn scaled(&self, factor: f32) -> Self {
        let s = |v: u32| ((v as f32) * factor.max(0.0)).round() as u32;
        Self::new(s(self.left), s(self.right), s(self.top), s(self.bottom))
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(44, 14, 12, 24)
    }
}
