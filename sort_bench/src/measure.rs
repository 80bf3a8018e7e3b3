//! This module implements functionality for measuring and comparing the duration of some task.

use std::cmp;
use std::time::{Duration, Instant};

use serde::Serialize;

/// Measures the wall-clock time it takes to execute the function `test_fn`.
#[inline(never)]
pub fn measure_duration<R>(test_fn: impl FnOnce() -> R) -> (Duration, R) {
    let start = Instant::now();
    let ret = test_fn();
    let elapsed = start.elapsed();

    (elapsed, ret)
}

/// Condensed view of several samples of the same measurement.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    #[serde(rename = "median_secs", serialize_with = "as_secs")]
    pub median: Duration,
    /// Ratio between the samples one decile above and below the median, 1.0 means no noise.
    pub spread: f64,
}

impl Summary {
    /// Analyzes multiple measurement samples and returns the median and the spread around it.
    ///
    /// Panics with fewer than 3 samples.
    pub fn analyze(durations: &mut [Duration]) -> Self {
        let len = durations.len();

        if len < 3 {
            panic!("Needs at least 3 samples");
        }

        durations.sort_unstable();

        let mid = len / 2;
        let offset = cmp::min(cmp::max((len as f64 / 10.0).round() as usize, 1), len - mid - 1);

        let upper = durations[mid + offset].as_secs_f64();
        let lower = durations[mid - offset].as_secs_f64();
        let spread = if lower > 0.0 { upper / lower } else { 1.0 };

        Self {
            median: durations[mid],
            spread,
        }
    }
}

fn as_secs<S: serde::Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_and_spread() {
        let mut samples = [5, 1, 4, 2, 3].map(Duration::from_millis);
        let summary = Summary::analyze(&mut samples);

        assert_eq!(summary.median, Duration::from_millis(3));
        // One sample around the median: 4ms / 2ms.
        assert!((summary.spread - 2.0).abs() < 1e-9);
    }

    #[test]
    fn all_zero_samples() {
        let mut samples = [Duration::ZERO; 3];
        let summary = Summary::analyze(&mut samples);

        assert_eq!(summary.median, Duration::ZERO);
        assert_eq!(summary.spread, 1.0);
    }

    #[test]
    #[should_panic(expected = "at least 3")]
    fn too_few_samples() {
        Summary::analyze(&mut [Duration::from_secs(1); 2]);
    }

    #[test]
    fn measures_the_closure() {
        let (elapsed, ret) = measure_duration(|| {
            std::thread::sleep(Duration::from_millis(5));
            7
        });

        assert_eq!(ret, 7);
        assert!(elapsed >= Duration::from_millis(5));
    }
}
