// File: crates/bench-plot/src/config.rs
// Summary: Rendering configuration shared by all series of a chart, loadable from JSON.

use chart_core::{parse_color, Color, LineStyle, Marker};
use serde::{Deserialize, Deserializer};
use std::path::Path;

use crate::error::{PlotError, Result};

/// Recognized rendering options. Every field is optional in JSON; missing fields
/// keep their defaults (circle markers, solid line, grid on, 8x5 in).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    #[serde(deserialize_with = "de_marker")]
    pub marker: Marker,
    #[serde(deserialize_with = "de_line_style")]
    pub line_style: LineStyle,
    /// `None` uses the default color cycle.
    #[serde(deserialize_with = "de_color")]
    pub color: Option<Color>,
    /// (width, height) in inches.
    pub figure_size: (f32, f32),
    pub show_grid: bool,
    /// `None` leaves the choice to the chart type.
    pub show_interactively: Option<bool>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            marker: Marker::Circle,
            line_style: LineStyle::Solid,
            color: None,
            figure_size: (8.0, 5.0),
            show_grid: true,
            show_interactively: None,
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).map_err(|e| PlotError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PlotError::Io { path: path.to_path_buf(), source })?;
        Self::from_json_str(&text).map_err(|e| match e {
            PlotError::Config(msg) => PlotError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    pub fn shows_interactively(&self) -> bool {
        self.show_interactively.unwrap_or(false)
    }

    pub fn validate(&self) -> Result<()> {
        let (w, h) = self.figure_size;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(PlotError::Config(format!("figure_size must be positive, got ({w}, {h})")));
        }
        Ok(())
    }
}

fn de_marker<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Marker, D::Error> {
    let s = String::deserialize(d)?;
    s.parse().map_err(serde::de::Error::custom)
}

fn de_line_style<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<LineStyle, D::Error> {
    let s = String::deserialize(d)?;
    s.parse().map_err(serde::de::Error::custom)
}

fn de_color<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<Color>, D::Error> {
    let s = Option::<String>::deserialize(d)?;
    s.map(|s| parse_color(&s).map_err(serde::de::Error::custom)).transpose()
}
