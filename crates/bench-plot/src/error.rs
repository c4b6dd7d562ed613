// File: crates/bench-plot/src/error.rs
// Summary: Pipeline error taxonomy and its user-facing categories.

use chart_core::ChartError;
use std::path::PathBuf;
use thiserror::Error;

use crate::table::ColumnKind;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {source_name}: {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("{source_name}: required column {column:?} is missing from the header")]
    MissingColumn { source_name: String, column: String },

    #[error("{source_name}: row {row} (line {line}), column {column:?}: {value:?} is not a valid {expected}")]
    Parse {
        source_name: String,
        row: usize,
        line: u64,
        column: String,
        value: String,
        expected: ColumnKind,
    },

    #[error("{source_name}: row {row} (line {line}) has no value for column {column:?}")]
    MissingField { source_name: String, row: usize, line: u64, column: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("cannot show chart window: {0}")]
    Display(String),
}

impl PlotError {
    /// Short category name printed before the message on failure.
    pub fn category(&self) -> &'static str {
        match self {
            PlotError::Io { .. } => "I/O error",
            PlotError::Csv { .. } | PlotError::Parse { .. } | PlotError::MissingField { .. } => "parse error",
            PlotError::MissingColumn { .. } => "schema error",
            PlotError::Config(_) => "configuration error",
            PlotError::Chart(ChartError::ShapeMismatch { .. }) => "shape error",
            PlotError::Chart(ChartError::Io { .. }) => "I/O error",
            PlotError::Chart(_) => "rendering error",
            PlotError::Display(_) => "display error",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;
