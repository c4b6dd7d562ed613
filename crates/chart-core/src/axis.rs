// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges and data-driven autoscale.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 1.0)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Fit the range to `[lo, hi]` padded by `margin` (fraction of the span) on both sides.
    /// A zero-width range is widened to +/-0.5 (or +/-5% of the value) around it.
    pub fn fit(&mut self, lo: f64, hi: f64, margin: f64) {
        let (mut lo, mut hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        if (hi - lo).abs() < 1e-12 {
            let pad = if lo.abs() > 1e-12 { lo.abs() * 0.05 } else { 0.5 };
            lo -= pad;
            hi += pad;
        }
        let m = (hi - lo) * margin.max(0.0);
        self.min = lo - m;
        self.max = hi + m;
    }
}
