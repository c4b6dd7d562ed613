// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, resolution, paddings).

/// Default surface width in pixels (8 in at `DPI`).
pub const WIDTH: i32 = 800;
/// Default surface height in pixels (5 in at `DPI`).
pub const HEIGHT: i32 = 500;
/// Pixels per display unit (inch) when converting a figure size.
pub const DPI: f32 = 100.0;

/// Convert a figure size in inches to a pixel size at `DPI`.
/// Each side is clamped to at least 64 px so the plot rect never collapses.
pub fn figure_size_to_pixels(width_in: f32, height_in: f32) -> (i32, i32) {
    let px = |v: f32| ((v * DPI).round() as i32).max(64);
    (px(width_in), px(height_in))
}

/// Screen margins, in pixels.
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
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Room for y tick labels + rotated y label on the left, title on top,
    /// x tick labels + x label at the bottom.
    fn default() -> Self {
        Self::new(84, 24, 44, 60)
    }
}
