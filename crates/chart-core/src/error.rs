// File: crates/chart-core/src/error.rs
// Summary: Rendering error taxonomy.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("chart has no points to draw (series {series:?} is empty)")]
    EmptySeries { series: String },

    #[error("shape mismatch in series {series:?}: {x_len} x values vs {y_len} y values")]
    ShapeMismatch { series: String, x_len: usize, y_len: usize },

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encoding {0} failed")]
    Encode(&'static str),

    #[error("unsupported image format {extension:?} for {}", .path.display())]
    UnsupportedFormat { extension: String, path: PathBuf },

    #[error("writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ChartError>;
