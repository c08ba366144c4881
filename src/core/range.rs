//! Fixed-point decimal ranges for tick labels and raster lines.
//!
//! Repeatedly adding `0.1` to an `f64` drifts after a handful of steps, so a
//! range is computed on an integer grid of [`DECIMAL_SCALE`] units and only
//! divided back into a float when a value is yielded.

use std::iter::FusedIterator;

use crate::core::constants::DECIMAL_SCALE;

/// Scaled values closer than this to a grid point are taken as that point.
const SNAP: f64 = 1e-9;

/// Scale `v` onto the decimal grid, truncating toward zero.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn to_fixed(v: f64) -> i64 {
    let scaled = v * DECIMAL_SCALE;
    let nearest = scaled.round();
    if (scaled - nearest).abs() < SNAP {
        nearest as i64
    } else {
        scaled.trunc() as i64
    }
}

/// Half-open range `start, start + step, …` strictly before `stop`.
///
/// A zero step, or a step pointing away from `stop`, yields nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecimalRange {
    next: i64,
    stop: i64,
    step: i64,
}

impl DecimalRange {
    #[must_use]
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        Self {
            next: to_fixed(start),
            stop: to_fixed(stop),
            step: to_fixed(step),
        }
    }

    /// Bounds saturate at the ends of `i64`, so the span is taken unsigned.
    #[inline]
    fn remaining(&self) -> usize {
        let span = match self.step.signum() {
            1 if self.next < self.stop => self.stop.abs_diff(self.next),
            -1 if self.next > self.stop => self.next.abs_diff(self.stop),
            _ => return 0,
        };
        let n = (span - 1) / self.step.unsigned_abs() + 1;
        usize::try_from(n).unwrap_or(usize::MAX)
    }
}

impl Iterator for DecimalRange {
    type Item = f64;

    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> Option<f64> {
        if self.remaining() == 0 {
            return None;
        }
        let v = self.next;
        self.next = self.next.saturating_add(self.step);
        Some(v as f64 / DECIMAL_SCALE)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for DecimalRange {}
impl FusedIterator for DecimalRange {}

/// Shorthand for [`DecimalRange::new`].
#[inline]
#[must_use]
pub fn decimal_range(start: f64, stop: f64, step: f64) -> DecimalRange {
    DecimalRange::new(start, stop, step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tenths_do_not_drift() {
        let v: Vec<f64> = decimal_range(0.0, 1.0, 0.1).collect();
        assert_eq!(
            v,
            vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9]
        );
    }

    #[test]
    fn stop_is_excluded() {
        let v: Vec<f64> = decimal_range(0.0, 30.0, 5.0).collect();
        assert_eq!(v, vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0]);
    }

    #[test]
    fn descending_with_negative_step() {
        let v: Vec<f64> = decimal_range(0.0, -40.0, -10.0).collect();
        assert_eq!(v, vec![0.0, -10.0, -20.0, -30.0]);
    }

    #[test]
    fn degenerate_steps_are_empty() {
        assert_eq!(decimal_range(0.0, 10.0, 0.0).count(), 0);
        assert_eq!(decimal_range(0.0, 10.0, -1.0).count(), 0);
        assert_eq!(decimal_range(0.0, -10.0, 1.0).count(), 0);
        assert_eq!(decimal_range(5.0, 5.0, 1.0).count(), 0);
        // finer than the grid rounds down to a zero step
        assert_eq!(decimal_range(0.0, 1.0, 0.001).count(), 0);
    }

    #[test]
    fn representation_error_snaps_to_grid() {
        // 0.29 * 100 is 28.999999999999996 in binary floating point
        let v: Vec<f64> = decimal_range(0.0, 0.6, 0.29).collect();
        assert_eq!(v, vec![0.0, 0.29, 0.58]);
    }

    #[test]
    fn finer_precision_truncates() {
        let v: Vec<f64> = decimal_range(0.125, 0.5, 0.125).collect();
        assert_eq!(v, vec![0.12, 0.24, 0.36, 0.48]);
    }

    #[test]
    fn end_cap_range_reaches_max() {
        // horizontal axes extend the stop by one step
        let v: Vec<f64> = decimal_range(0.0, 0.5 + 0.1, 0.1).collect();
        assert_eq!(v.len(), 6);
        assert_eq!(v.last().copied(), Some(0.5));
    }

    #[test]
    fn len_matches_count() {
        let r = decimal_range(-3.0, 7.5, 0.25);
        assert_eq!(r.len(), r.clone().count());
    }

    #[test]
    fn unbounded_stop_does_not_overflow() {
        let v: Vec<f64> = decimal_range(0.0, f64::NEG_INFINITY, -1.0).take(3).collect();
        assert_eq!(v, vec![0.0, -1.0, -2.0]);
        let v: Vec<f64> = decimal_range(0.0, f64::INFINITY, 1.0).take(2).collect();
        assert_eq!(v, vec![0.0, 1.0]);
    }

    #[test]
    fn saturated_step_yields_one_value() {
        // both the stop and the step saturate at i64::MIN
        let r = decimal_range(0.0, -1.1e18, -1e17);
        assert_eq!(r.len(), 1);
        assert_eq!(r.collect::<Vec<_>>(), vec![0.0]);
        assert!(decimal_range(f64::INFINITY, f64::NEG_INFINITY, -1.0).len() > 1_000_000);
    }

    proptest! {
        #[test]
        fn values_stay_before_stop(start in -500i64..500, span in 0i64..2000, step in 1i64..300) {
            let start = start as f64 / 100.0;
            let stop = start + span as f64 / 100.0;
            let step = step as f64 / 100.0;
            let v: Vec<f64> = decimal_range(start, stop, step).collect();
            for w in v.windows(2) {
                prop_assert!(w[1] > w[0]);
            }
            for x in &v {
                prop_assert!(*x < stop + 1e-9);
            }
            let neg: Vec<f64> = decimal_range(-start, -stop, -step).collect();
            prop_assert_eq!(neg.len(), v.len());
        }
    }
}
