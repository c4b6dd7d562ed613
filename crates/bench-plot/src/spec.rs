// File: crates/bench-plot/src/spec.rs
// Summary: ChartSpec: which columns become which series, labels, output path and render config.

use chart_core::{Color, LineStyle, Marker, SeriesStyle};
use std::path::{Path, PathBuf};

use crate::config::RenderConfig;

/// One y-sequence: the column it comes from plus optional per-series overrides
/// of the chart-wide `RenderConfig` style.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSpec {
    pub column: String,
    pub label: String,
    pub marker: Option<Marker>,
    pub line_style: Option<LineStyle>,
    pub color: Option<Color>,
}

impl SeriesSpec {
    pub fn new(column: impl Into<String>) -> Self {
        let column = column.into();
        Self { label: column.clone(), column, marker: None, line_style: None, color: None }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self { self.label = label.into(); self }
    pub fn marker(mut self, marker: Marker) -> Self { self.marker = Some(marker); self }
    pub fn line_style(mut self, line_style: LineStyle) -> Self { self.line_style = Some(line_style); self }
    pub fn color(mut self, color: Color) -> Self { self.color = Some(color); self }

    /// Series overrides win over the chart config.
    pub fn style(&self, config: &RenderConfig) -> SeriesStyle {
        SeriesStyle {
            marker: self.marker.unwrap_or(config.marker),
            line_style: self.line_style.unwrap_or(config.line_style),
            color: self.color.or(config.color),
            ..SeriesStyle::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_column: String,
    pub series: Vec<SeriesSpec>,
    pub output: PathBuf,
    pub config: RenderConfig,
}

impl ChartSpec {
    pub fn builder(x_column: impl Into<String>) -> ChartSpecBuilder {
        ChartSpecBuilder::new(x_column)
    }

    pub fn output(&self) -> &Path { &self.output }
}

/// Builder for `ChartSpec`. Labels default to empty; output defaults to `chart.png`.
#[derive(Clone, Debug)]
pub struct ChartSpecBuilder {
    spec: ChartSpec,
}

impl ChartSpecBuilder {
    pub fn new(x_column: impl Into<String>) -> Self {
        Self {
            spec: ChartSpec {
                title: String::new(),
                x_label: String::new(),
                y_label: String::new(),
                x_column: x_column.into(),
                series: Vec::new(),
                output: PathBuf::from("chart.png"),
                config: RenderConfig::default(),
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self { self.spec.title = title.into(); self }
    pub fn x_label(mut self, label: impl Into<String>) -> Self { self.spec.x_label = label.into(); self }
    pub fn y_label(mut self, label: impl Into<String>) -> Self { self.spec.y_label = label.into(); self }
    pub fn series(mut self, series: SeriesSpec) -> Self { self.spec.series.push(series); self }
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self { self.spec.output = output.into(); self }
    pub fn config(mut self, config: RenderConfig) -> Self { self.spec.config = config; self }

    pub fn build(self) -> ChartSpec { self.spec }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_fields() {
        let spec = ChartSpec::builder("participants")
            .title("T")
            .x_label("X")
            .y_label("Y")
            .series(SeriesSpec::new("duration_seconds"))
            .output("out.png")
            .build();
        assert_eq!(spec.x_column, "participants");
        assert_eq!(spec.series[0].label, "duration_seconds");
        assert_eq!(spec.output(), Path::new("out.png"));
        assert!(!spec.config.shows_interactively());
    }

    #[test]
    fn series_overrides_config_style() {
        let config = RenderConfig { line_style: LineStyle::Dotted, ..RenderConfig::default() };
        let blue = Color::from_argb(255, 0, 0, 255);
        let style = SeriesSpec::new("y").marker(Marker::Cross).color(blue).style(&config);
        assert_eq!(style.marker, Marker::Cross);
        assert_eq!(style.line_style, LineStyle::Dotted);
        assert_eq!(style.color, Some(blue));
    }
}
