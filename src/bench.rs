//! Times a single sort run over one container type.

use std::time::{Duration, Instant};

use crate::merge_sort;
use crate::sequence::{self, Sequence};

/// Outcome of sorting one container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkResult<T> {
    pub label: String,
    pub len: usize,
    pub elapsed: Duration,
    pub sorted: Vec<T>,
}

impl<T> BenchmarkResult<T> {
    /// Elapsed time with sub-microsecond precision.
    pub fn elapsed_micros(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000_000.0
    }
}

/// Measures the wall time it takes to execute `test_fn`, using the monotonic clock.
#[inline(never)]
pub fn measure_duration(mut test_fn: impl FnMut()) -> Duration {
    let start = Instant::now();

    test_fn();

    start.elapsed()
}

/// Loads `values` into a fresh `S` and times sorting it completely.
///
/// Loading happens before the clock starts, only the sort itself is measured.
pub fn run_benchmark<S: Sequence>(values: &[S::Item], cutover: usize) -> BenchmarkResult<S::Item> {
    let mut container: S = sequence::load(values);

    let elapsed = measure_duration(|| merge_sort::sort_with_cutover(&mut container, cutover));

    let result = BenchmarkResult {
        label: S::name(),
        len: container.len(),
        elapsed,
        sorted: container.to_vec(),
    };

    log::info!(
        "sorted {} elements with {} in {:?}",
        result.len,
        result.label,
        result.elapsed
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;

    #[test]
    fn result_carries_label_and_len() {
        let values = [4, 2, 2, 9, 0];

        let vec_result = run_benchmark::<Vec<i32>>(&values, 10);
        let deque_result = run_benchmark::<VecDeque<i32>>(&values, 10);

        assert_eq!(vec_result.label, "Vec");
        assert_eq!(deque_result.label, "VecDeque");
        assert_eq!(vec_result.len, 5);
        assert_eq!(deque_result.len, 5);
        assert_eq!(vec_result.sorted, [0, 2, 2, 4, 9]);
        assert_eq!(vec_result.sorted, deque_result.sorted);
    }

    #[test]
    fn micros_conversion() {
        let result = BenchmarkResult::<i32> {
            label: "Vec".into(),
            len: 0,
            elapsed: Duration::from_nanos(12_345),
            sorted: Vec::new(),
        };

        assert!((result.elapsed_micros() - 12.345).abs() < 1e-9);
    }
}
