use log::debug;

use crate::config;
use crate::fork::{ForkStats, Forker};
use crate::partition::lomuto;

pub struct SortImpl;

impl sort_test_tools::Sort for SortImpl {
    fn name() -> String {
        "quicksort_selective".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone + Send + Sync,
    {
        config::install(|| sort(arr));
    }
}

/// In-place quicksort that hands only the left side of each partition to a new task and sorts the
/// right side itself.
///
/// The pivot is always the last element, already sorted input therefore recurses `len` levels deep
/// and spawns `len - 1` tasks.
pub fn sort<T: Ord + Send>(v: &mut [T]) {
    sort_with_stats(v);
}

/// Sorts `v[low..=high]` in place, leaving the rest of `v` alone. `low >= high` is a no-op.
///
/// Panics if `low < high` and `high` is out of bounds.
pub fn sort_range<T: Ord + Send>(v: &mut [T], low: usize, high: usize) {
    if low >= high {
        return;
    }

    assert!(
        high < v.len(),
        "sort range {low}..={high} out of bounds for slice of len {}",
        v.len()
    );

    sort_with_stats(&mut v[low..=high]);
}

pub fn sort_with_stats<T: Ord + Send>(v: &mut [T]) -> ForkStats {
    let len = v.len();

    let forker = Forker::new();
    sort_rec(v, &forker);
    let stats = forker.stats();

    debug!("quicksort_selective: len {len} {stats:?}");

    stats
}

fn sort_rec<T: Ord + Send>(v: &mut [T], forker: &Forker) {
    if v.len() <= 1 {
        return;
    }

    let p = lomuto(v, 0, v.len() - 1);

    // The pivot stays in place, the two tasks get the disjoint slices on either side of it.
    let (left, rest) = v.split_at_mut(p);
    let right = &mut rest[1..];

    forker.fork_left(|| sort_rec(left, forker), || sort_rec(right, forker));
}
