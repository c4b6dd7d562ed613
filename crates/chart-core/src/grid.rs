// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Step from the 1-2-5 family such that `[min, max]` holds about `target` ticks.
pub fn nice_step(min: f64, max: f64, target: usize) -> f64 {
    let span = (max - min).abs();
    if span <= f64::EPSILON || target == 0 { return 1.0; }
    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 2.5 { 2.5 } else if norm <= 5.0 { 5.0 } else { 10.0 };
    nice * mag
}

/// Tick positions at multiples of `nice_step` that fall inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let step = nice_step(lo, hi, target);
    let first = (lo / step).ceil();
    let last = (hi / step).floor();
    if !first.is_finite() || !last.is_finite() || last < first { return vec![lo, hi]; }
    let n = (last - first) as usize + 1;
    // divide by an integral reciprocal where possible: 3.0 / 10.0 == 0.3, 3.0 * 0.1 != 0.3
    let inv = 1.0 / step;
    let exact_inv = step < 1.0 && (inv - inv.round()).abs() < 1e-9;
    (0..n)
        .map(|i| {
            let k = first + i as f64;
            let v = if exact_inv { k / inv.round() } else { k * step };
            if v == 0.0 { 0.0 } else { v }
        })
        .collect()
}

/// Format a tick value with just enough decimals to tell steps of `step` apart.
pub fn format_tick(v: f64, step: f64) -> String {
    let mut decimals = 0usize;
    if step > 0.0 && step.is_finite() {
        while decimals < 8 {
            let scaled = step * 10f64.powi(decimals as i32);
            if (scaled - scaled.round()).abs() < 1e-6 * scaled.abs().max(1.0) { break; }
            decimals += 1;
        }
    }
    format!("{:.*}", decimals, v)
}
