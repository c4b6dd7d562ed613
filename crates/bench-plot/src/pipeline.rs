// File: crates/bench-plot/src/pipeline.rs
// Summary: Generic "read table -> sequences -> render" pipeline parameterized by schema and ChartSpec.

use chart_core::{figure_size_to_pixels, Axis, Chart, ChartError, ImageFormat, RenderOptions, Series};
use std::path::{Path, PathBuf};

use crate::error::{PlotError, Result};
use crate::spec::ChartSpec;
use crate::table::{read_table, Table, TableSchema};

/// Axis padding around the data, as a fraction of the data span.
pub const AXIS_MARGIN: f64 = 0.05;

/// Outcome of a successful run.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotReport {
    pub output: PathBuf,
    pub format: ImageFormat,
    /// Points drawn per series; equal to the number of data rows read.
    pub points: usize,
    pub series: usize,
}

#[derive(Clone, Debug)]
pub struct Pipeline {
    schema: TableSchema,
    spec: ChartSpec,
}

impl Pipeline {
    /// Fails when the spec refers to a column the schema does not require, or has no series.
    pub fn new(schema: TableSchema, spec: ChartSpec) -> Result<Self> {
        if spec.series.is_empty() {
            return Err(PlotError::Config("chart spec has no y series".into()));
        }
        let columns = std::iter::once(&spec.x_column).chain(spec.series.iter().map(|s| &s.column));
        for column in columns {
            if schema.get(column).is_none() {
                return Err(PlotError::Config(format!("column {column:?} is plotted but not in the table schema")));
            }
        }
        spec.config.validate()?;
        Ok(Self { schema, spec })
    }

    pub fn schema(&self) -> &TableSchema { &self.schema }
    pub fn spec(&self) -> &ChartSpec { &self.spec }

    /// Read `input`, render, persist to the spec's output path, optionally show.
    pub fn run(&self, input: impl AsRef<Path>) -> Result<PlotReport> {
        self.run_with(input, |_| {})
    }

    /// As `run`, calling `on_saved` once the image is on disk and before any window opens.
    pub fn run_with(&self, input: impl AsRef<Path>, on_saved: impl FnOnce(&PlotReport)) -> Result<PlotReport> {
        let table = read_table(input, &self.schema)?;
        self.render_table(&table, on_saved)
    }

    pub fn render_table(&self, table: &Table, on_saved: impl FnOnce(&PlotReport)) -> Result<PlotReport> {
        let chart = self.build_chart(table)?;
        render(&self.spec, chart, on_saved)
    }

    /// Chart for `table` with axes fitted to the data.
    pub fn build_chart(&self, table: &Table) -> Result<Chart> {
        let xs = column_f64(table, &self.spec.x_column)?;
        let ys = self
            .spec
            .series
            .iter()
            .map(|s| column_f64(table, &s.column))
            .collect::<Result<Vec<_>>>()?;
        chart_from_sequences(&self.spec, &xs, &ys)
    }
}

fn column_f64(table: &Table, name: &str) -> Result<Vec<f64>> {
    table
        .column(name)
        .map(|c| c.to_f64())
        .ok_or_else(|| PlotError::Config(format!("column {name:?} was not read from {}", table.source_name())))
}

/// Build a chart from an x-sequence and one y-sequence per `spec.series` entry.
/// Empty sequences and length mismatches are rejected before anything is drawn.
pub fn chart_from_sequences(spec: &ChartSpec, xs: &[f64], ys: &[Vec<f64>]) -> Result<Chart> {
    if ys.len() != spec.series.len() {
        return Err(PlotError::Config(format!("{} y sequences for {} configured series", ys.len(), spec.series.len())));
    }
    let mut chart = Chart::new().with_title(spec.title.clone());
    chart.x_axis = Axis::default_x().with_label(spec.x_label.clone());
    chart.y_axis = Axis::default_y().with_label(spec.y_label.clone());
    for (series_spec, y) in spec.series.iter().zip(ys) {
        if xs.is_empty() || y.is_empty() {
            return Err(ChartError::EmptySeries { series: series_spec.label.clone() }.into());
        }
        let series = Series::from_columns(series_spec.label.clone(), xs, y)?.with_style(series_spec.style(&spec.config));
        chart.add_series(series);
    }
    chart.autoscale_axes(AXIS_MARGIN);
    Ok(chart)
}

/// Surface size, grid and labels for `spec`.
pub fn render_options(spec: &ChartSpec) -> RenderOptions {
    let (w, h) = spec.config.figure_size;
    let (width, height) = figure_size_to_pixels(w, h);
    RenderOptions { width, height, show_grid: spec.config.show_grid, ..RenderOptions::default() }
}

/// Write `chart` to `spec.output` and show it when configured. The chart is
/// consumed and dropped once the image is written and any window closed.
pub fn render(spec: &ChartSpec, chart: Chart, on_saved: impl FnOnce(&PlotReport)) -> Result<PlotReport> {
    chart.validate()?;
    let opts = render_options(spec);
    let format = chart.render_to_file(&opts, &spec.output)?;
    let points = chart.series.first().map_or(0, Series::len);
    let report = PlotReport {
        output: spec.output.clone(),
        format,
        points,
        series: chart.series.len(),
    };
    on_saved(&report);
    if spec.config.shows_interactively() {
        crate::display::show(&chart, &opts, &spec.title)?;
    }
    Ok(report)
}
