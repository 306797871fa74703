// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and panel layout.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Shrink by `insets`, never collapsing below one pixel in either direction.
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left as i32;
        let top = self.top + insets.top as i32;
        let right = (self.right - insets.right as i32).max(left + 1);
        let bottom = (self.bottom - insets.bottom as i32).max(top + 1);
        Self { left, top, right, bottom }
    }

    /// True when the two rectangles share any interior area.
    pub const fn overlaps(&self, other: &RectI32) -> bool {
        self.left < other.right && other.left < self.right && self.top < other.bottom && other.top < self.bottom
    }
}

/// Split `total` into `n` side-by-side columns; the last column absorbs the remainder.
pub fn split_columns(total: RectI32, n: usize) -> Vec<RectI32> {
    if n == 0 { return Vec::new(); }
    let w = total.width() / n as i32;
    (0..n)
        .map(|i| {
            let left = total.left + w * i as i32;
            let right = if i + 1 == n { total.right } else { left + w };
            RectI32::from_ltrb(left, total.top, right, total.bottom)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_columns_tiles_without_overlap() {
        let cols = split_columns(RectI32::from_ltwh(0, 0, 1201, 400), 3);
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[0].left, 0);
        assert_eq!(cols[2].right, 1201);
        for pair in cols.windows(2) {
            assert_eq!(pair[0].right, pair[1].left);
            assert!(!pair[0].overlaps(&pair[1]));
        }
    }

    #[test]
    fn inset_keeps_positive_area() {
        let r = RectI32::from_ltwh(0, 0, 10, 10).inset(&Insets::new(8, 8, 8, 8));
        assert!(r.width() >= 1);
        assert!(r.height() >= 1);
    }
}
