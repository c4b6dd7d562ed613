// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over several series, keeping supplied point order.

use chart_core::{Chart, Series};

#[test]
fn autoscale_multiple_series() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("a", vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.add_series(Series::with_data("b", vec![(3.0, 6.0), (2.0, -1.0)]));

    chart.autoscale_axes(0.05);

    assert!(chart.x_axis.min < 0.0 && chart.x_axis.min > -0.5);
    assert!(chart.x_axis.max > 5.0 && chart.x_axis.max < 5.5);
    assert!(chart.y_axis.min < -1.0);
    assert!(chart.y_axis.max > 6.0);

    // autoscale never reorders data
    assert_eq!(chart.series[1].data_xy, vec![(3.0, 6.0), (2.0, -1.0)]);
}

#[test]
fn autoscale_single_point() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("one", vec![(4.0, 2.0)]));
    chart.autoscale_axes(0.05);
    assert!(chart.x_axis.min < 4.0 && chart.x_axis.max > 4.0);
    assert!(chart.y_axis.min < 2.0 && chart.y_axis.max > 2.0);
}
