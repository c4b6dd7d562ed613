// File: crates/bench-plot/src/presets.rs
// Summary: The two benchmark chart types: CRS ceremony duration and sequencer throughput.

use chart_core::parse_color;
use std::path::PathBuf;

use crate::config::RenderConfig;
use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::spec::{ChartSpec, SeriesSpec};
use crate::table::TableSchema;

pub const CEREMONY_INPUT: &str = "crs_bench_results.csv";
pub const CEREMONY_OUTPUT: &str = "crs_bench_results.png";
pub const THROUGHPUT_INPUT: &str = "sequencer_throughput.csv";
pub const THROUGHPUT_OUTPUT: &str = "sequencer_throughput.png";

pub fn ceremony_schema() -> TableSchema {
    TableSchema::new().integer("participants").float("duration_seconds")
}

/// `throughput_tps` is plotted as read; it is not recomputed from the other columns.
pub fn throughput_schema() -> TableSchema {
    TableSchema::new()
        .integer("transactions")
        .float("duration_seconds")
        .float("throughput_tps")
}

/// Ceremony duration vs. participant count.
pub fn ceremony_duration(output: impl Into<PathBuf>, config: RenderConfig) -> Result<Pipeline> {
    let spec = ChartSpec::builder("participants")
        .title("CRS Ceremony Performance")
        .x_label("Number of Participants")
        .y_label("Ceremony Duration (seconds)")
        .series(SeriesSpec::new("duration_seconds").label("Ceremony duration"))
        .output(output)
        .config(config)
        .build();
    Pipeline::new(ceremony_schema(), spec)
}

/// Throughput vs. transaction count, drawn in blue unless `config` picks a color,
/// and shown in a window after saving unless `config` turns that off.
pub fn sequencer_throughput(output: impl Into<PathBuf>, mut config: RenderConfig) -> Result<Pipeline> {
    if config.color.is_none() {
        config.color = parse_color("b").ok();
    }
    config.show_interactively.get_or_insert(true);
    let spec = ChartSpec::builder("transactions")
        .title("Sequencer Throughput Benchmark")
        .x_label("Number of Transactions")
        .y_label("Throughput (tx/sec)")
        .series(SeriesSpec::new("throughput_tps").label("Throughput"))
        .output(output)
        .config(config)
        .build();
    Pipeline::new(throughput_schema(), spec)
}
