// File: crates/bench-plot/tests/pipeline.rs
// Purpose: End-to-end runs of the CSV -> chart pipeline against scratch directories.

use bench_plot::presets::{ceremony_duration, sequencer_throughput};
use bench_plot::{ChartSpec, Pipeline, PlotError, RenderConfig, SeriesSpec, TableSchema};
use std::path::Path;

fn write(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).expect("write csv");
    path
}

fn headless() -> RenderConfig {
    RenderConfig { show_interactively: Some(false), ..RenderConfig::default() }
}

#[test]
fn example_scenario_renders_three_points() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "crs.csv", "participants,duration_seconds\n2,1.5\n4,3.1\n8,6.9\n");
    let output = dir.path().join("crs.png");

    let pipeline = ceremony_duration(&output, headless()).unwrap();
    let table = bench_plot::read_table(&input, pipeline.schema()).unwrap();
    let chart = pipeline.build_chart(&table).unwrap();
    assert_eq!(chart.series[0].data_xy, vec![(2.0, 1.5), (4.0, 3.1), (8.0, 6.9)]);

    let mut announced = None;
    let report = pipeline.run_with(&input, |r| announced = Some(r.output.clone())).unwrap();
    assert_eq!(report.points, 3);
    assert_eq!(report.series, 1);
    assert_eq!(announced.as_deref(), Some(output.as_path()));

    let img = image::open(&output).expect("decode output");
    assert_eq!((img.width(), img.height()), (800, 500));
}

#[test]
fn header_only_input_creates_no_image() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "empty.csv", "participants,duration_seconds\n");
    let output = dir.path().join("empty.png");

    let err = ceremony_duration(&output, headless()).unwrap().run(&input).unwrap_err();
    assert_eq!(err.category(), "rendering error");
    assert!(!output.exists());
}

#[test]
fn header_only_input_leaves_previous_image_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("chart.png");
    std::fs::write(&output, b"previous").unwrap();
    let input = write(dir.path(), "empty.csv", "participants,duration_seconds\n");

    assert!(ceremony_duration(&output, headless()).unwrap().run(&input).is_err());
    assert_eq!(std::fs::read(&output).unwrap(), b"previous");
}

#[test]
fn missing_column_is_schema_error_and_no_chart() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "bad.csv", "participants,seconds\n2,1.5\n");
    let output = dir.path().join("bad.png");

    let err = ceremony_duration(&output, headless()).unwrap().run(&input).unwrap_err();
    assert!(matches!(err, PlotError::MissingColumn { ref column, .. } if column == "duration_seconds"));
    assert_eq!(err.category(), "schema error");
    assert!(!output.exists());
}

#[test]
fn non_numeric_cell_is_parse_error_with_row() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "bad.csv", "participants,duration_seconds\n2,1.5\n4,abc\n");
    let output = dir.path().join("bad.png");

    let err = ceremony_duration(&output, headless()).unwrap().run(&input).unwrap_err();
    match &err {
        PlotError::Parse { row, column, value, .. } => {
            assert_eq!(*row, 2);
            assert_eq!(column, "duration_seconds");
            assert_eq!(value, "abc");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(err.to_string().contains("row 2"));
    assert!(!output.exists());
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ceremony_duration(dir.path().join("o.png"), headless())
        .unwrap()
        .run(dir.path().join("nope.csv"))
        .unwrap_err();
    assert!(matches!(err, PlotError::Io { .. }));
    assert_eq!(err.category(), "I/O error");
}

#[test]
fn unwritable_output_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "crs.csv", "participants,duration_seconds\n2,1.5\n");
    // parent "directory" is a regular file
    let blocker = write(dir.path(), "blocker", "");
    let err = ceremony_duration(blocker.join("out.png"), headless()).unwrap().run(&input).unwrap_err();
    assert_eq!(err.category(), "I/O error");
}

#[test]
fn rerun_overwrites_with_identical_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "crs.csv", "participants,duration_seconds\n2,1.5\n4,3.1\n8,6.9\n16,14.2\n");
    let output = dir.path().join("crs.png");
    let pipeline = ceremony_duration(&output, headless()).unwrap();

    pipeline.run(&input).unwrap();
    let first = image::open(&output).unwrap().to_rgba8();
    pipeline.run(&input).unwrap();
    let second = image::open(&output).unwrap().to_rgba8();
    assert_eq!(first.as_raw(), second.as_raw());

    let leftovers: Vec<_> = std::fs::read_dir(dir.path()).unwrap().map(|e| e.unwrap().file_name()).collect();
    assert_eq!(leftovers.len(), 2, "only input and output remain: {leftovers:?}");
}

#[test]
fn cardinality_and_order_follow_input_rows() {
    let dir = tempfile::tempdir().unwrap();
    let mut text = String::from("duration_seconds,participants\n");
    let xs: Vec<i64> = vec![64, 2, 32, 4, 16, 8, 8];
    for (i, x) in xs.iter().enumerate() {
        text.push_str(&format!("{}.25,{x}\n", i));
    }
    let input = write(dir.path(), "unsorted.csv", &text);
    let pipeline = ceremony_duration(dir.path().join("u.png"), headless()).unwrap();

    let table = bench_plot::read_table(&input, pipeline.schema()).unwrap();
    let chart = pipeline.build_chart(&table).unwrap();
    let got: Vec<f64> = chart.series[0].data_xy.iter().map(|p| p.0).collect();
    assert_eq!(got, xs.iter().map(|&x| x as f64).collect::<Vec<_>>());
    assert_eq!(pipeline.run(&input).unwrap().points, xs.len());
}

#[test]
fn throughput_chart_plots_tps_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    // tps deliberately inconsistent with transactions / duration
    let input = write(
        dir.path(),
        "tput.csv",
        "transactions,duration_seconds,throughput_tps\n100,0.5,123.0\n1000,2.0,456.0\n",
    );
    let output = dir.path().join("tput.jpg");
    let pipeline = sequencer_throughput(&output, headless()).unwrap();
    assert!(!pipeline.spec().config.shows_interactively());

    let table = bench_plot::read_table(&input, pipeline.schema()).unwrap();
    assert_eq!(pipeline.build_chart(&table).unwrap().series[0].data_xy, vec![(100.0, 123.0), (1000.0, 456.0)]);

    let report = pipeline.run(&input).unwrap();
    assert_eq!(report.format, chart_core::ImageFormat::Jpeg);
    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(&[0xFF, 0xD8]));
}

#[test]
fn throughput_requires_all_three_columns() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "tput.csv", "transactions,throughput_tps\n100,200.0\n");
    let err = sequencer_throughput(dir.path().join("t.png"), headless()).unwrap().run(&input).unwrap_err();
    assert!(matches!(err, PlotError::MissingColumn { ref column, .. } if column == "duration_seconds"));
}

#[test]
fn two_series_from_one_table() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "multi.csv", "n,a,b\n1,1.0,2.0\n2,2.0,3.5\n3,2.5,5.0\n");
    let output = dir.path().join("multi.png");
    let schema = TableSchema::new().integer("n").float("a").float("b");
    let spec = ChartSpec::builder("n")
        .title("two")
        .series(SeriesSpec::new("a"))
        .series(SeriesSpec::new("b").label("second"))
        .output(&output)
        .config(headless())
        .build();

    let report = Pipeline::new(schema, spec).unwrap().run(&input).unwrap();
    assert_eq!(report.series, 2);
    assert_eq!(report.points, 3);
    assert!(output.exists());
}

#[test]
fn config_file_changes_figure_size() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write(dir.path(), "render.json", r#"{"figure_size": [6, 3], "marker": "s", "line_style": "--", "show_grid": false}"#);
    let input = write(dir.path(), "crs.csv", "participants,duration_seconds\n2,1.5\n4,3.1\n");
    let output = dir.path().join("small.png");

    let config = RenderConfig::from_json_file(&cfg).unwrap();
    ceremony_duration(&output, config).unwrap().run(&input).unwrap();
    let img = image::open(&output).unwrap();
    assert_eq!((img.width(), img.height()), (600, 300));
}
