// File: crates/bench-plot/src/cli.rs
// Summary: Shared binary plumbing: logger setup, config loading, exit status and messages.

use clap::Args;
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::RenderConfig;
use crate::error::{PlotError, Result};
use crate::pipeline::PlotReport;

/// Options common to both tools.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// JSON file with rendering options (marker, line_style, color, figure_size, show_grid, show_interactively).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CommonArgs {
    pub fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn render_config(&self) -> Result<RenderConfig> {
        match &self.config {
            Some(path) => RenderConfig::from_json_file(path),
            None => Ok(RenderConfig::default()),
        }
    }
}

/// Initialise stderr logging at `level`. The environment is not consulted.
pub fn init_logging(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Confirmation printed once the image is written.
pub fn announce(report: &PlotReport) {
    println!("Graph saved to {}", report.output.display());
}

/// Map the outcome to the process exit status, printing failures to stderr.
pub fn finish(result: Result<PlotReport>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

pub fn report_error(e: &PlotError) {
    log::debug!("{e:?}");
    eprintln!("error: {}: {e}", e.category());
}
