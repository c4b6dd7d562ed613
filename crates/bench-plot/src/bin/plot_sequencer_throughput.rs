// File: crates/bench-plot/src/bin/plot_sequencer_throughput.rs
// Summary: Plot sequencer throughput vs. transaction count, save it, then show it in a window.

use bench_plot::cli::{self, CommonArgs};
use bench_plot::presets;
use clap::Parser;
use std::process::ExitCode;

/// Reads `sequencer_throughput.csv` and writes `sequencer_throughput.png` in the working directory.
#[derive(Parser, Debug)]
#[command(name = "plot-sequencer-throughput", version, about = "Plot sequencer throughput vs. transactions")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    cli::init_logging(args.common.level());

    let result = args
        .common
        .render_config()
        .and_then(|config| presets::sequencer_throughput(presets::THROUGHPUT_OUTPUT, config))
        .and_then(|pipeline| pipeline.run_with(presets::THROUGHPUT_INPUT, cli::announce));
    cli::finish(result)
}
