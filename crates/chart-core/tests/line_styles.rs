// File: crates/chart-core/tests/line_styles.rs
// Purpose: Pixel checks for dash patterns, marker-only series and the legend.

use chart_core::geometry::RectI32;
use chart_core::scale::LinearScale;
use chart_core::{Axis, Chart, Color, LineStyle, Marker, RenderOptions, Series, SeriesStyle};

const WHITE: [u8; 3] = [255, 255, 255];
const RED: [u8; 3] = [255, 0, 0];
const BLUE: [u8; 3] = [0, 0, 255];

struct Frame {
    px: Vec<u8>,
    stride: usize,
    area: RectI32,
    sx: LinearScale,
    sy: LinearScale,
}

impl Frame {
    fn rgb(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.stride + x * 4;
        [self.px[i], self.px[i + 1], self.px[i + 2]]
    }

    /// Pixel that contains the data point `(x, y)`.
    fn at(&self, x: f64, y: f64) -> [u8; 3] {
        self.rgb(self.sx.to_px(x) as usize, self.sy.to_px(y) as usize)
    }

    fn count(&self, rgb: [u8; 3], cols: std::ops::Range<usize>, rows: std::ops::Range<usize>) -> usize {
        rows.flat_map(|y| cols.clone().map(move |x| (x, y))).filter(|&(x, y)| self.rgb(x, y) == rgb).count()
    }
}

fn red(marker: Marker, line_style: LineStyle) -> SeriesStyle {
    SeriesStyle::default()
        .with_marker(marker)
        .with_line_style(line_style)
        .with_color(Color::from_argb(255, 255, 0, 0))
}

// x in [0, 4], y in [-1, 1]: y = 0 lands on a whole pixel row in the default layout
fn render(series: Vec<Series>, draw_labels: bool) -> Frame {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("", 0.0, 4.0);
    chart.y_axis = Axis::new("", -1.0, 1.0);
    for s in series {
        chart.add_series(s);
    }
    let opts = RenderOptions { draw_labels, show_grid: false, ..RenderOptions::default() };
    let (px, _, _, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    let area = RectI32::plot_area(opts.width, opts.height, &opts.insets);
    let sx = LinearScale::horizontal(&area, &chart.x_axis);
    let sy = LinearScale::vertical(&area, &chart.y_axis);
    Frame { px, stride, area, sx, sy }
}

fn horizontal(style: SeriesStyle) -> Frame {
    render(vec![Series::with_data("h", vec![(0.0, 0.0), (4.0, 0.0)]).with_style(style)], false)
}

#[test]
fn solid_line_is_unbroken() {
    let f = horizontal(red(Marker::None, LineStyle::Solid));
    let row = f.sy.to_px(0.0) as usize;
    let cols = (f.area.left + 4) as usize..(f.area.right - 4) as usize;
    assert_eq!(f.count(RED, cols.clone(), row..row + 1), cols.len());
}

#[test]
fn dashed_and_dotted_lines_leave_gaps() {
    for style in [LineStyle::Dashed, LineStyle::Dotted, LineStyle::DashDot] {
        let f = horizontal(red(Marker::None, style));
        let row = f.sy.to_px(0.0) as usize;
        let cols = (f.area.left + 4) as usize..(f.area.right - 4) as usize;
        let inked = f.count(RED, cols.clone(), row..row + 1);
        let gaps = f.count(WHITE, cols.clone(), row..row + 1);
        assert!(inked > 20, "{style:?}: {inked} line pixels");
        assert!(gaps > 20, "{style:?}: {gaps} gap pixels");
    }
}

#[test]
fn markers_only_leave_background_between_points() {
    let pts = vec![(1.0, 0.0), (3.0, 0.0)];
    let f = render(vec![Series::with_data("m", pts.clone()).with_style(red(Marker::Diamond, LineStyle::None))], false);
    assert_eq!(f.at(1.0, 0.0), RED);
    assert_eq!(f.at(3.0, 0.0), RED);
    assert_eq!(f.at(2.0, 0.0), WHITE);

    let joined = render(vec![Series::with_data("m", pts).with_style(red(Marker::Diamond, LineStyle::Solid))], false);
    assert_eq!(joined.at(2.0, 0.0), RED);
}

#[test]
fn legend_only_for_several_series() {
    let blue = Color::from_argb(255, 0, 0, 255);
    // data stays in the lower part of the plot; the legend sits top right
    let a = || Series::with_data("a", vec![(0.0, -0.8), (4.0, -0.8)]).with_style(red(Marker::Circle, LineStyle::Solid));
    let b = Series::with_data("b", vec![(0.0, -0.6), (4.0, -0.6)]).with_style(SeriesStyle::default().with_color(blue));

    let two = render(vec![a(), b], true);
    let cols = two.area.center_x() as usize..two.area.right as usize;
    let rows = two.area.top as usize..two.area.top as usize + 80;
    assert!(two.count(RED, cols.clone(), rows.clone()) > 0, "first legend sample");
    assert!(two.count(BLUE, cols.clone(), rows.clone()) > 0, "second legend sample");

    let one = render(vec![a()], true);
    assert_eq!(one.count(RED, cols, rows), 0);
}
