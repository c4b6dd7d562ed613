// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless raster rendering pipeline using Skia CPU surfaces.

use skia_safe as skia;
use std::path::Path;

use crate::error::{ChartError, Result};
use crate::format::ImageFormat;
use crate::geometry::RectI32;
use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::style::{LineStyle, Marker};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::Axis;

const TITLE_SIZE: f32 = 16.0;
const LABEL_SIZE: f32 = 13.0;
const TICK_SIZE: f32 = 11.0;
const TICK_LEN: f32 = 4.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title, axis labels, tick labels and legend text. Off for pixel snapshots.
    pub draw_labels: bool,
    pub show_grid: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            show_grid: true,
        }
    }
}

/// One figure. Each render call owns its surface, so a `Chart` can be rendered any
/// number of times (and from a long-lived process) without shared drawing state.
#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }

    /// Fit both axes to the data, padded by `margin` (fraction of span).
    /// Leaves the axes untouched when there is no data.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let mut bounds: Option<((f64, f64), (f64, f64))> = None;
        for (xb, yb) in self.series.iter().filter_map(Series::bounds) {
            bounds = Some(match bounds {
                None => (xb, yb),
                Some((x, y)) => ((x.0.min(xb.0), x.1.max(xb.1)), (y.0.min(yb.0), y.1.max(yb.1))),
            });
        }
        if let Some(((x0, x1), (y0, y1))) = bounds {
            self.x_axis.fit(x0, x1, margin);
            self.y_axis.fit(y0, y1, margin);
        }
    }

    /// Check the chart is drawable: at least one series, no empty series, and all
    /// series index-aligned with the first one.
    pub fn validate(&self) -> Result<()> {
        let Some(first) = self.series.first() else {
            return Err(ChartError::EmptySeries { series: String::from("<none>") });
        };
        for s in &self.series {
            if s.is_empty() {
                return Err(ChartError::EmptySeries { series: s.label.clone() });
            }
            if s.len() != first.len() {
                return Err(ChartError::ShapeMismatch { series: s.label.clone(), x_len: first.len(), y_len: s.len() });
            }
        }
        Ok(())
    }

    /// Render onto a fresh CPU raster surface. The surface is dropped by the caller.
    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        self.validate()?;
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        self.draw(surface.canvas(), opts);
        Ok(surface)
    }

    /// Render to an encoded image in memory.
    pub fn render_encoded(&self, opts: &RenderOptions, format: ImageFormat) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(format.skia())
            .ok_or(ChartError::Encode(format.name()))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.render_encoded(opts, ImageFormat::Png)
    }

    /// Render to unpremultiplied RGBA8 pixels: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width.max(1) as u32, opts.height.max(1) as u32);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Encode("RGBA8"));
        }
        Ok((pixels, w, h, stride))
    }

    /// Render to `path`, inferring the format from its extension. The file is replaced
    /// atomically; on any error nothing is written at `path`.
    pub fn render_to_file(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<ImageFormat> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path)?;
        let bytes = self.render_encoded(opts, format)?;
        crate::output::write_atomic(path, &bytes)?;
        log::info!("rendered {} points as {} to {}", self.point_count(), format.name(), path.display());
        Ok(format)
    }

    /// Render a PNG at `output_png_path` regardless of its extension.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        crate::output::write_atomic(output_png_path.as_ref(), &bytes)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let area = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        let sx = LinearScale::horizontal(&area, &self.x_axis);
        let sy = LinearScale::vertical(&area, &self.y_axis);
        let x_target = (area.width() / 100).clamp(2, 10) as usize;
        let y_target = (area.height() / 60).clamp(2, 10) as usize;
        let x_ticks = nice_ticks(self.x_axis.min, self.x_axis.max, x_target);
        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, y_target);
        let x_step = nice_step(self.x_axis.min, self.x_axis.max, x_target);
        let y_step = nice_step(self.y_axis.min, self.y_axis.max, y_target);

        let mut bg = skia::Paint::default();
        bg.set_color(theme.plot_background);
        canvas.draw_rect(to_rect(&area), &bg);

        if opts.show_grid {
            draw_grid(canvas, &area, &sx, &sy, &x_ticks, &y_ticks, theme);
        }

        // Series, clipped to the plot rect
        canvas.save();
        canvas.clip_rect(to_rect(&area), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, &sx, &sy, s, i);
        }
        canvas.restore();

        draw_axes(canvas, &area, &sx, &sy, &x_ticks, &y_ticks, theme);

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_tick_labels(canvas, &shaper, &area, &sx, &sy, (x_ticks.as_slice(), x_step), (y_ticks.as_slice(), y_step), theme);
            draw_titles(canvas, &shaper, opts, &area, &self.title, &self.x_axis, &self.y_axis);
            if self.series.len() > 1 {
                draw_legend(canvas, &shaper, &area, &self.series, theme);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_rect(r: &RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_grid(
    canvas: &skia::Canvas,
    area: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let paint = stroke_paint(theme.grid, 0.8);
    let (l, t, r, b) = (area.left as f32, area.top as f32, area.right as f32, area.bottom as f32);

    // verticals
    for &x in x_ticks {
        let px = sx.to_px(x);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    // horizontals
    for &y in y_ticks {
        let py = sy.to_px(y);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    area: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let frame = stroke_paint(theme.axis_line, 1.0);
    canvas.draw_rect(to_rect(area), &frame);

    let tick = stroke_paint(theme.tick, 1.0);
    let (l, b) = (area.left as f32, area.bottom as f32);
    for &x in x_ticks {
        let px = sx.to_px(x);
        canvas.draw_line((px, b), (px, b + TICK_LEN), &tick);
    }
    for &y in y_ticks {
        let py = sy.to_px(y);
        canvas.draw_line((l - TICK_LEN, py), (l, py), &tick);
    }
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    area: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    (x_ticks, x_step): (&[f64], f64),
    (y_ticks, y_step): (&[f64], f64),
    theme: &Theme,
) {
    let b = area.bottom as f32;
    let l = area.left as f32;
    for &x in x_ticks {
        let label = format_tick(x, x_step);
        shaper.draw_centered(canvas, &label, sx.to_px(x), b + TICK_LEN + TICK_SIZE + 3.0, TICK_SIZE, theme.axis_label, false);
    }
    for &y in y_ticks {
        let label = format_tick(y, y_step);
        shaper.draw_right(canvas, &label, l - TICK_LEN - 3.0, sy.to_px(y) + TICK_SIZE * 0.35, TICK_SIZE, theme.axis_label, false);
    }
}

fn draw_titles(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    opts: &RenderOptions,
    area: &RectI32,
    title: &str,
    x_axis: &Axis,
    y_axis: &Axis,
) {
    let color = opts.theme.axis_label;
    if !title.is_empty() {
        shaper.draw_centered(canvas, title, area.center_x(), area.top as f32 - 12.0, TITLE_SIZE, color, false);
    }
    if !x_axis.label.is_empty() {
        let y = (opts.height as f32 - 12.0).max(area.bottom as f32 + 2.0 * LABEL_SIZE);
        shaper.draw_centered(canvas, &x_axis.label, area.center_x(), y, LABEL_SIZE, color, false);
    }
    if !y_axis.label.is_empty() {
        shaper.draw_vertical(canvas, &y_axis.label, 16.0, area.center_y(), LABEL_SIZE, color);
    }
}

// Dashed/dotted patterns are scaled by the stroke width.
fn line_paint(series: &Series, color: skia::Color) -> skia::Paint {
    let style = &series.style;
    let mut stroke = stroke_paint(color, style.line_width);
    let pattern = style.line_style.dash_pattern();
    if !pattern.is_empty() {
        let intervals: Vec<f32> = pattern.iter().map(|v| v * style.line_width).collect();
        stroke.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
    }
    stroke
}

fn draw_line_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series, index: usize) {
    let data = &series.data_xy;
    let color = series.style.resolved_color(index);

    if data.len() >= 2 && series.style.line_style != LineStyle::None {
        let mut path = skia::Path::new();
        let (x0, y0) = data[0];
        path.move_to((sx.to_px(x0), sy.to_px(y0)));
        for &(x, y) in data.iter().skip(1) {
            path.line_to((sx.to_px(x), sy.to_px(y)));
        }
        canvas.draw_path(&path, &line_paint(series, color));
    }

    if series.style.marker != Marker::None {
        for &(x, y) in data {
            draw_marker(canvas, series.style.marker, (sx.to_px(x), sy.to_px(y)), series.style.marker_size, color);
        }
    }
}

fn draw_marker(canvas: &skia::Canvas, marker: Marker, (x, y): (f32, f32), size: f32, color: skia::Color) {
    let r = size * 0.5;
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);

    match marker {
        Marker::Circle => {
            canvas.draw_circle((x, y), r, &fill);
        }
        Marker::Point => {
            canvas.draw_circle((x, y), (r * 0.5).max(1.0), &fill);
        }
        Marker::Square => {
            canvas.draw_rect(skia::Rect::from_xywh(x - r, y - r, size, size), &fill);
        }
        Marker::Triangle | Marker::Diamond => {
            let mut path = skia::Path::new();
            if marker == Marker::Triangle {
                path.move_to((x, y - r));
                path.line_to((x + r, y + r));
                path.line_to((x - r, y + r));
            } else {
                path.move_to((x, y - r));
                path.line_to((x + r, y));
                path.line_to((x, y + r));
                path.line_to((x - r, y));
            }
            path.close();
            canvas.draw_path(&path, &fill);
        }
        Marker::Cross => {
            let stroke = stroke_paint(color, 1.5);
            canvas.draw_line((x - r, y - r), (x + r, y + r), &stroke);
            canvas.draw_line((x - r, y + r), (x + r, y - r), &stroke);
        }
        Marker::Plus => {
            let stroke = stroke_paint(color, 1.5);
            canvas.draw_line((x - r, y), (x + r, y), &stroke);
            canvas.draw_line((x, y - r), (x, y + r), &stroke);
        }
        Marker::None => {}
    }
}

fn draw_legend(canvas: &skia::Canvas, shaper: &TextShaper, area: &RectI32, series: &[Series], theme: &Theme) {
    let row_h = LABEL_SIZE + 8.0;
    let sample_w = 28.0;
    let text_w = series
        .iter()
        .map(|s| shaper.measure_width(&s.label, LABEL_SIZE, false))
        .fold(0.0f32, f32::max);
    let box_w = sample_w + text_w + 24.0;
    let box_h = row_h * series.len() as f32 + 8.0;
    let right = area.right as f32 - 8.0;
    let top = area.top as f32 + 8.0;
    let rect = skia::Rect::from_ltrb(right - box_w, top, right, top + box_h);

    let mut bg = skia::Paint::default();
    bg.set_color(theme.legend_background);
    canvas.draw_rect(rect, &bg);
    canvas.draw_rect(rect, &stroke_paint(theme.grid, 1.0));

    for (i, s) in series.iter().enumerate() {
        let color = s.style.resolved_color(i);
        let cy = top + 4.0 + row_h * (i as f32 + 0.5);
        let x0 = rect.left + 8.0;
        if s.style.line_style != LineStyle::None {
            canvas.draw_line((x0, cy), (x0 + sample_w, cy), &line_paint(s, color));
        }
        if s.style.marker != Marker::None {
            draw_marker(canvas, s.style.marker, (x0 + sample_w * 0.5, cy), s.style.marker_size, color);
        }
        shaper.draw_left(canvas, &s.label, x0 + sample_w + 8.0, cy + LABEL_SIZE * 0.35, LABEL_SIZE, theme.axis_label, false);
    }
}
