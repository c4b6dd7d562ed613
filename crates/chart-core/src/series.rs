// File: crates/chart-core/src/series.rs
// Summary: Line series model: ordered (x, y) points plus label and style.

use crate::error::{ChartError, Result};
use crate::style::SeriesStyle;

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
    pub style: SeriesStyle,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), data_xy: Vec::new(), style: SeriesStyle::default() }
    }

    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data, style: SeriesStyle::default() }
    }

    /// Zip index-aligned x and y sequences, keeping their order.
    /// Fails when the sequences differ in length.
    pub fn from_columns(label: impl Into<String>, xs: &[f64], ys: &[f64]) -> Result<Self> {
        let label = label.into();
        if xs.len() != ys.len() {
            return Err(ChartError::ShapeMismatch { series: label, x_len: xs.len(), y_len: ys.len() });
        }
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Ok(Self::with_data(label, data))
    }

    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }
    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// (min, max) of x and y, or `None` for an empty series.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let (&(x0, y0), rest) = self.data_xy.split_first()?;
        let mut xb = (x0, x0);
        let mut yb = (y0, y0);
        for &(x, y) in rest {
            xb = (xb.0.min(x), xb.1.max(x));
            yb = (yb.0.min(y), yb.1.max(y));
        }
        Some((xb, yb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_columns_keeps_order() {
        let s = Series::from_columns("d", &[8.0, 2.0, 4.0], &[6.9, 1.5, 3.1]).unwrap();
        assert_eq!(s.data_xy, vec![(8.0, 6.9), (2.0, 1.5), (4.0, 3.1)]);
        assert_eq!(s.bounds(), Some(((2.0, 8.0), (1.5, 6.9))));
    }

    #[test]
    fn from_columns_rejects_mismatch() {
        let err = Series::from_columns("d", &[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, ChartError::ShapeMismatch { x_len: 2, y_len: 1, .. }));
    }

    #[test]
    fn empty_series_has_no_bounds() {
        assert!(Series::new("e").bounds().is_none());
    }
}
