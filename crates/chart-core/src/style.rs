// File: crates/chart-core/src/style.rs
// Summary: Per-series styling: point markers, connecting-line patterns and colors.
// Notes:
// - Short codes follow the usual plotting conventions ("o", "--", "b", "C0") so
//   configs written for other tools carry over unchanged.

use skia_safe as skia;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    Circle,
    Square,
    Triangle,
    Diamond,
    Cross,
    Plus,
    Point,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
    None,
}

impl LineStyle {
    /// Dash intervals (on, off, ...) in multiples of the stroke width; empty for solid.
    pub fn dash_pattern(&self) -> &'static [f32] {
        match self {
            LineStyle::Solid | LineStyle::None => &[],
            LineStyle::Dashed => &[3.7, 1.6],
            LineStyle::Dotted => &[1.0, 1.65],
            LineStyle::DashDot => &[6.4, 1.6, 1.0, 1.6],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleParseError {
    pub what: &'static str,
    pub input: String,
}

impl fmt::Display for StyleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized {} {:?}", self.what, self.input)
    }
}

impl std::error::Error for StyleParseError {}

impl FromStr for Marker {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "o" | "circle" => Marker::Circle,
            "s" | "square" => Marker::Square,
            "^" | "triangle" => Marker::Triangle,
            "D" | "d" | "diamond" => Marker::Diamond,
            "x" | "cross" => Marker::Cross,
            "+" | "plus" => Marker::Plus,
            "." | "point" => Marker::Point,
            "" | "none" | "None" => Marker::None,
            other => return Err(StyleParseError { what: "marker", input: other.to_string() }),
        })
    }
}

impl FromStr for LineStyle {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "-" | "solid" => LineStyle::Solid,
            "--" | "dashed" => LineStyle::Dashed,
            ":" | "dotted" => LineStyle::Dotted,
            "-." | "dashdot" => LineStyle::DashDot,
            "" | "none" | "None" => LineStyle::None,
            other => return Err(StyleParseError { what: "line style", input: other.to_string() }),
        })
    }
}

/// Default color cycle (C0..C9).
pub const PALETTE: [(u8, u8, u8); 10] = [
    (0x1f, 0x77, 0xb4),
    (0xff, 0x7f, 0x0e),
    (0x2c, 0xa0, 0x2c),
    (0xd6, 0x27, 0x28),
    (0x94, 0x67, 0xbd),
    (0x8c, 0x56, 0x4b),
    (0xe3, 0x77, 0xc2),
    (0x7f, 0x7f, 0x7f),
    (0xbc, 0xbd, 0x22),
    (0x17, 0xbe, 0xcf),
];

/// Color for the `index`-th series when none is configured.
pub fn cycle_color(index: usize) -> skia::Color {
    let (r, g, b) = PALETTE[index % PALETTE.len()];
    skia::Color::from_argb(255, r, g, b)
}

/// Parse a color spec: single-letter codes, common names, `#rrggbb` / `#rrggbbaa`, or `C0`..`C9`.
pub fn parse_color(s: &str) -> Result<skia::Color, StyleParseError> {
    let s = s.trim();
    let err = || StyleParseError { what: "color", input: s.to_string() };
    let rgb = |r: u8, g: u8, b: u8| Ok(skia::Color::from_argb(255, r, g, b));
    match s {
        "b" | "blue" => return rgb(0, 0, 255),
        "g" | "green" => return rgb(0, 128, 0),
        "r" | "red" => return rgb(255, 0, 0),
        "c" | "cyan" => return rgb(0, 191, 191),
        "m" | "magenta" => return rgb(191, 0, 191),
        "y" | "yellow" => return rgb(191, 191, 0),
        "k" | "black" => return rgb(0, 0, 0),
        "w" | "white" => return rgb(255, 255, 255),
        "orange" => return rgb(255, 165, 0),
        "purple" => return rgb(128, 0, 128),
        "gray" | "grey" => return rgb(128, 128, 128),
        _ => {}
    }
    if let Some(idx) = s.strip_prefix('C') {
        let i: usize = idx.parse().map_err(|_| err())?;
        return if i < PALETTE.len() { Ok(cycle_color(i)) } else { Err(err()) };
    }
    if let Some(hex) = s.strip_prefix('#') {
        let byte = |i: usize| hex.get(i..i + 2).and_then(|h| u8::from_str_radix(h, 16).ok());
        return match hex.len() {
            6 => match (byte(0), byte(2), byte(4)) {
                (Some(r), Some(g), Some(b)) => rgb(r, g, b),
                _ => Err(err()),
            },
            8 => match (byte(0), byte(2), byte(4), byte(6)) {
                (Some(r), Some(g), Some(b), Some(a)) => Ok(skia::Color::from_argb(a, r, g, b)),
                _ => Err(err()),
            },
            _ => Err(err()),
        };
    }
    Err(err())
}

/// How one series is drawn. `color: None` picks from the cycle by series index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    pub marker: Marker,
    pub line_style: LineStyle,
    pub color: Option<skia::Color>,
    pub line_width: f32,
    pub marker_size: f32,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            marker: Marker::Circle,
            line_style: LineStyle::Solid,
            color: None,
            line_width: 2.0,
            marker_size: 8.0,
        }
    }
}

impl SeriesStyle {
    pub fn with_marker(mut self, marker: Marker) -> Self { self.marker = marker; self }
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self { self.line_style = line_style; self }
    pub fn with_color(mut self, color: skia::Color) -> Self { self.color = Some(color); self }

    pub fn resolved_color(&self, index: usize) -> skia::Color {
        self.color.unwrap_or_else(|| cycle_color(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_codes() {
        assert_eq!("o".parse::<Marker>().unwrap(), Marker::Circle);
        assert_eq!("--".parse::<LineStyle>().unwrap(), LineStyle::Dashed);
        assert_eq!("-.".parse::<LineStyle>().unwrap(), LineStyle::DashDot);
        assert!("*?".parse::<Marker>().is_err());
    }

    #[test]
    fn parses_colors() {
        assert_eq!(parse_color("b").unwrap(), skia::Color::from_argb(255, 0, 0, 255));
        assert_eq!(parse_color("#102030").unwrap(), skia::Color::from_argb(255, 0x10, 0x20, 0x30));
        assert_eq!(parse_color("C1").unwrap(), cycle_color(1));
        assert!(parse_color("C12").is_err());
        assert!(parse_color("#12").is_err());
        assert!(parse_color("chartreuse-ish").is_err());
    }

    #[test]
    fn default_style() {
        let s = SeriesStyle::default();
        assert_eq!(s.marker, Marker::Circle);
        assert_eq!(s.line_style, LineStyle::Solid);
        assert_eq!(s.resolved_color(0), cycle_color(0));
        assert!(LineStyle::Solid.dash_pattern().is_empty());
    }
}
