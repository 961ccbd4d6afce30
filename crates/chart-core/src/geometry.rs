// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

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

    /// Plot area of a `width` x `height` surface after removing `insets`.
    /// Degenerate sizes collapse to a 1px rect instead of inverting.
    pub fn plot_area(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as i32;
        let top = insets.top as i32;
        let right = (width - insets.right as i32).max(left + 1);
        let bottom = (height - insets.bottom as i32).max(top + 1);
        Self { left, top, right, bottom }
    }

    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_area_removes_insets() {
        let r = RectI32::plot_area(1000, 600, &Insets::new(100, 20, 40, 60));
        assert_eq!(r, RectI32::from_ltrb(100, 40, 980, 540));
        assert_eq!(r.width(), 880);
        assert_eq!(r.height(), 500);
    }

    #[test]
    fn plot_area_never_inverts() {
        let r = RectI32::plot_area(50, 50, &Insets::new(100, 20, 40, 60));
        assert!(r.width() >= 1);
        assert!(r.height() >= 1);
    }
}
