// File: crates/chart-core/src/format.rs
// Summary: Output raster formats and extension-based inference.

use crate::error::{ChartError, Result};
use skia_safe as skia;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Infer from the file extension (case-insensitive). No extension means PNG.
    pub fn from_path(path: &Path) -> Result<Self> {
        let Some(ext) = path.extension() else { return Ok(ImageFormat::Png) };
        let ext = ext.to_string_lossy().to_ascii_lowercase();
        match ext.as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            _ => Err(ChartError::UnsupportedFormat { extension: ext, path: path.to_path_buf() }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
        }
    }

    pub(crate) fn skia(&self) -> skia::EncodedImageFormat {
        match self {
            ImageFormat::Png => skia::EncodedImageFormat::PNG,
            ImageFormat::Jpeg => skia::EncodedImageFormat::JPEG,
        }
    }
}
