// File: crates/bench-plot/src/bin/plot_crs_bench.rs
// Summary: Plot CRS ceremony duration vs. participant count from a benchmark CSV.

use bench_plot::cli::{self, CommonArgs};
use bench_plot::presets;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Usage: plot-crs-bench [CSV_FILE] [OUTPUT_IMAGE]
#[derive(Parser, Debug)]
#[command(name = "plot-crs-bench", version, about = "Plot CRS ceremony duration vs. participants")]
struct Cli {
    /// Input CSV with `participants` and `duration_seconds` columns.
    #[arg(value_name = "CSV_FILE", default_value = presets::CEREMONY_INPUT)]
    input: PathBuf,

    /// Output image; format follows the extension (png, jpg).
    #[arg(value_name = "OUTPUT_IMAGE", default_value = presets::CEREMONY_OUTPUT)]
    output: PathBuf,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    cli::init_logging(args.common.level());

    let result = args
        .common
        .render_config()
        .and_then(|config| presets::ceremony_duration(&args.output, config))
        .and_then(|pipeline| pipeline.run_with(&args.input, cli::announce));
    cli::finish(result)
}
