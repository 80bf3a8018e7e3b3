use std::ops::Range;

use log::debug;

use crate::config::{self, Parallelism};
use crate::fork::{ForkStats, Forker};
use crate::merge::merge_all;
use crate::merge_sort::sequential;

pub struct SortImpl;

impl sort_test_tools::Sort for SortImpl {
    fn name() -> String {
        "merge_sort_bounded".into()
    }

    fn is_stable() -> bool {
        true
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone + Send + Sync,
    {
        let parallelism = match config::shared_config() {
            Ok(shared) => shared.parallelism,
            Err(err) => panic!("{err}"),
        };

        let sorted = config::install(|| sort(arr, parallelism));
        crate::move_back(arr, sorted);
    }
}

/// Splits `v` into `parallelism` contiguous chunks, sorts each chunk with the sequential merge sort
/// in its own task and folds the sorted chunks together left to right.
///
/// The task count is `parallelism` no matter how long `v` is.
pub fn sort<T>(v: &[T], parallelism: Parallelism) -> Vec<T>
where
    T: Ord + Clone + Send + Sync,
{
    sort_with_stats(v, parallelism).0
}

pub fn sort_with_stats<T>(v: &[T], parallelism: Parallelism) -> (Vec<T>, ForkStats)
where
    T: Ord + Clone + Send + Sync,
{
    if v.len() <= 1 {
        return (v.to_vec(), ForkStats::default());
    }

    let bounds = chunk_bounds(v.len(), parallelism);
    debug!(
        "merge_sort_bounded: len {} split into {} chunks of up to {}",
        v.len(),
        bounds.len(),
        bounds.first().map_or(0, |chunk| chunk.len())
    );

    let chunks = bounds.into_iter().map(|range| &v[range]).collect();

    let forker = Forker::new();
    let sorted_chunks = forker.dispatch_each(chunks, sequential::sort);
    let stats = forker.stats();

    (merge_all(sorted_chunks), stats)
}

/// Index ranges of the chunks `sort` dispatches for an input of `len` elements.
///
/// Always exactly `parallelism` ranges, each `ceil(len / parallelism)` long except for the tail.
/// With more chunks than elements the trailing ranges are empty.
pub fn chunk_bounds(len: usize, parallelism: Parallelism) -> Vec<Range<usize>> {
    let chunk_count = parallelism.get();
    let chunk_len = len.div_ceil(chunk_count);

    (0..chunk_count)
        .map(|i| {
            let start = (i * chunk_len).min(len);
            let end = ((i + 1) * chunk_len).min(len);
            start..end
        })
        .collect()
}
