// File: crates/bench-plot/src/lib.rs
// Summary: Benchmark CSV -> line chart pipeline: record reader, chart spec, presets and display.

pub mod table;
pub mod config;
pub mod spec;
pub mod pipeline;
pub mod presets;
pub mod display;
pub mod cli;
pub mod error;

pub use table::{read_table, read_table_from_reader, BenchmarkRecord, Column, ColumnKind, ColumnSpec, Table, TableSchema, Value};
pub use config::RenderConfig;
pub use spec::{ChartSpec, ChartSpecBuilder, SeriesSpec};
pub use pipeline::{chart_from_sequences, render, Pipeline, PlotReport};
pub use error::{PlotError, Result};
