// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers (even spacing, 1-2-5 "nice" steps, tick text).

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round `span / target` up to the next 1, 2, 5 multiple of a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span / target.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.5 { 1.0 } else if norm <= 3.0 { 2.0 } else if norm <= 7.0 { 5.0 } else { 10.0 };
    nice * mag
}

/// Tick positions at a nice step covering `[min, max]`, roughly `target` of them.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max < min { return Vec::new(); }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() * step;
    let mut out = Vec::new();
    let mut v = first;
    while v <= max + step * 1e-9 && out.len() < 64 {
        out.push(v);
        v = first + step * out.len() as f64;
    }
    out
}

/// Format a tick value with just enough decimals for `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 || step <= 0.0 { 0 } else { (-step.log10().floor()) as usize };
    let s = format!("{:.*}", decimals, value);
    // avoid "-0"
    if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') { s.trim_start_matches('-').to_string() } else { s }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_count_ticks() {
        assert_eq!(nice_ticks(0.0, 4.2, 5), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn size_axis_ticks() {
        let t = nice_ticks(97.5, 1252.5, 5);
        assert_eq!(t.first().copied(), Some(200.0));
        assert_eq!(t.last().copied(), Some(1200.0));
    }

    #[test]
    fn ticks_for_inverted_range_are_empty() {
        assert!(nice_ticks(2.0, 1.0, 5).is_empty());
    }

    #[test]
    fn tick_text() {
        assert_eq!(format_tick(3.0, 1.0), "3");
        assert_eq!(format_tick(0.25, 0.05), "0.25");
        assert_eq!(format_tick(-0.0, 1.0), "0");
    }
}
