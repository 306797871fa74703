// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges, and tick label rotation.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Tick label rotation in degrees, counter-clockwise.
    pub tick_rotation: f32,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, tick_rotation: 0.0 }
    }

    pub fn default_x() -> Self {
        Self::new("", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("", 0.0, 1.0)
    }

    pub fn with_tick_rotation(mut self, degrees: f32) -> Self {
        self.tick_rotation = degrees;
        self
    }

    pub fn span(&self) -> f64 { self.max - self.min }
}
