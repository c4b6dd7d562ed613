// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

use crate::axis::Axis;
use crate::geometry::RectI32;

/// Maps a data range onto a pixel span. `to_px(min) == start_px`.
/// Y scales pass `start_px = bottom`, `end_px = top` so values grow upward.
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

    /// Horizontal scale over the plot rect for `axis`.
    pub fn horizontal(area: &RectI32, axis: &Axis) -> Self {
        Self::new(area.left as f32, area.right as f32, axis.min, axis.max)
    }

    /// Vertical scale over the plot rect for `axis` (min at the bottom).
    pub fn vertical(area: &RectI32, axis: &Axis) -> Self {
        Self::new(area.bottom as f32, area.top as f32, axis.min, axis.max)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.start_px + t as f32 * (self.end_px - self.start_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_scale_grows_upward() {
        let area = RectI32::from_ltrb(0, 0, 100, 100);
        let s = LinearScale::vertical(&area, &Axis::new("y", 0.0, 10.0));
        assert_eq!(s.to_px(0.0), 100.0);
        assert_eq!(s.to_px(10.0), 0.0);
        assert_eq!(s.to_px(5.0), 50.0);
    }

    #[test]
    fn degenerate_range_is_widened() {
        let s = LinearScale::new(0.0, 10.0, 3.0, 3.0);
        assert_eq!(s.vmax, 4.0);
        assert_eq!(s.to_px(3.0), 0.0);
    }
}
