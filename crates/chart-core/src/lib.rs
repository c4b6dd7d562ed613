// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;
pub mod style;
pub mod format;
pub mod output;
pub mod error;

pub use chart::{Chart, RenderOptions};
pub use series::Series;
pub use axis::Axis;
pub use theme::Theme;
pub use text::TextShaper;
pub use style::{parse_color, LineStyle, Marker, SeriesStyle, StyleParseError};
pub use format::ImageFormat;
pub use error::ChartError;
pub use types::figure_size_to_pixels;

/// Re-exported so callers can name colors without depending on skia-safe directly.
pub use skia_safe::Color;
