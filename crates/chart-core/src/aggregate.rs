// File: crates/chart-core/src/aggregate.rs
// Summary: Aggregation utilities feeding the bar and histogram series (value counts; equal-width binning).

use std::collections::HashMap;

use crate::grid::linspace;

/// One histogram bucket covering `[lo, hi)`; the last bucket of a set is closed on the right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

impl Bin {
    pub fn width(&self) -> f64 { self.hi - self.lo }
}

/// Count occurrences of each distinct value (exact match).
/// Ordered by descending count; ties keep first-encountered order.
pub fn value_counts<I, S>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for v in values {
        let v = v.as_ref();
        match index.get(v) {
            Some(&i) => out[i].1 += 1,
            None => {
                index.insert(v.to_string(), out.len());
                out.push((v.to_string(), 1));
            }
        }
    }
    // sort_by is stable, which is what keeps the tie order
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Bucket `values` into `bins` equal-width bins spanning their min..max.
///
/// A single distinct value widens to `[v - 0.5, v + 0.5]`; no finite values gives `[0, 1]`
/// with all-zero counts. Non-finite inputs are ignored.
pub fn histogram(values: &[f64], bins: usize) -> Vec<Bin> {
    if bins == 0 { return Vec::new(); }

    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (mut lo, mut hi) = finite.clone().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() || !hi.is_finite() {
        lo = 0.0;
        hi = 1.0;
    } else if hi - lo == 0.0 {
        lo -= 0.5;
        hi += 0.5;
    }

    let edges = linspace(lo, hi, bins + 1);
    let mut out: Vec<Bin> = edges.windows(2).map(|w| Bin { lo: w[0], hi: w[1], count: 0 }).collect();

    let width = (hi - lo) / bins as f64;
    let last = bins - 1;
    for v in finite {
        let mut i = (((v - lo) / width).floor().max(0.0) as usize).min(last);
        // float rounding can land one bucket off the computed edges
        if i > 0 && v < edges[i] { i -= 1; }
        if i < last && v >= edges[i + 1] { i += 1; }
        out[i].count += 1;
    }
    log::trace!("histogram: {} values into {} bins over [{}, {}]", values.len(), bins, lo, hi);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_descending_with_stable_ties() {
        let vc = value_counts(["b", "a", "b", "c", "a", "d"]);
        assert_eq!(
            vc,
            vec![("b".to_string(), 2), ("a".to_string(), 2), ("c".to_string(), 1), ("d".to_string(), 1)]
        );
    }

    #[test]
    fn max_value_lands_in_last_bin() {
        let h = histogram(&[0.0, 10.0], 10);
        assert_eq!(h.len(), 10);
        assert_eq!(h[0].count, 1);
        assert_eq!(h[9].count, 1);
        assert_eq!(h[9].hi, 10.0);
    }

    #[test]
    fn zero_bins_is_empty() {
        assert!(histogram(&[1.0, 2.0], 0).is_empty());
    }
}
