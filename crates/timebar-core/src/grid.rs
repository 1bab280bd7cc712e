// File: crates/timebar-core/src/grid.rs
// Summary: Tick layout helpers ("nice" 1/2/5 x 10^k steps).

/// Step between ticks covering `[start, stop]` with roughly `count` intervals.
/// Always 1, 2 or 5 times a power of ten; `None` for an empty or invalid span.
pub fn tick_step(start: f64, stop: f64, count: usize) -> Option<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() || stop <= start {
        return None;
    }
    let raw = (stop - start) / count as f64;
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    Some(factor * 10f64.powf(power))
}

/// Tick values inside `[start, stop]` at a nice step.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let Some(step) = tick_step(start, stop, count) else {
        return if start.is_finite() && start == stop { vec![start] } else { Vec::new() };
    };
    // Integer multiples (or divisions, for sub-unit steps) avoid accumulated drift.
    if step >= 1.0 {
        let (first, last) = ((start / step).ceil() as i64, (stop / step).floor() as i64);
        (first..=last).map(|i| i as f64 * step).collect()
    } else {
        let inv = (1.0 / step).round();
        let (first, last) = ((start * inv).ceil() as i64, (stop * inv).floor() as i64);
        (first..=last).map(|i| i as f64 / inv).collect()
    }
}

/// Decimal places needed to print values spaced `step` apart.
pub fn step_precision(step: f64) -> usize {
    if !(step > 0.0) || step >= 1.0 {
        0
    } else {
        // Epsilon keeps exact powers of ten (0.1, 0.01) from rounding up a digit.
        (-step.log10() - 1e-9).ceil().max(0.0) as usize
    }
}
