// File: crates/chart-core/src/scale.rs
// Summary: Linear value-to-pixel transform shared by the X and Y axes of a panel.

/// Maps `[vmin, vmax]` onto `[start_px, end_px]`.
/// For a Y axis pass the bottom pixel as `start_px` so larger values sit higher.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(start_px: f32, end_px: f32, vmin: f64, mut vmax: f64) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { start_px, end_px, vmin, vmax }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.start_px + ((v - self.vmin) / span) as f32 * (self.end_px - self.start_px)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = (self.vmax - self.vmin).max(1e-12);
        let extent = self.end_px - self.start_px;
        if extent.abs() < f32::EPSILON { return self.vmin; }
        self.vmin + ((px - self.start_px) / extent) as f64 * span
    }

    /// Pixel length of `dv` value units.
    #[inline]
    pub fn extent_px(&self, dv: f64) -> f32 {
        (self.to_px(self.vmin + dv) - self.start_px).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn y_scale_is_inverted() {
        let s = LinearScale::new(300.0, 20.0, 0.0, 4.0);
        assert_eq!(s.to_px(0.0), 300.0);
        assert_eq!(s.to_px(4.0), 20.0);
        assert!((s.from_px(160.0) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_domain_widens() {
        let s = LinearScale::new(0.0, 100.0, 5.0, 5.0);
        assert_eq!(s.vmax, 6.0);
        assert!((s.extent_px(0.5) - 50.0).abs() < 1e-4);
    }
}
