use log::debug;

use crate::fork::{ForkStats, Forker};
use crate::merge::merge;

sort_impl!("merge_sort_unbounded");

/// Merge sort that sorts both halves of every split as separate tasks.
///
/// There is no size cutoff, every split down to single elements pays for two tasks and two
/// handoffs. Expect `2 * (len - 1)` tasks.
pub fn sort<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone + Send + Sync,
{
    sort_with_stats(v).0
}

pub fn sort_with_stats<T>(v: &[T]) -> (Vec<T>, ForkStats)
where
    T: Ord + Clone + Send + Sync,
{
    let forker = Forker::new();
    let sorted = sort_rec(v, &forker);
    let stats = forker.stats();

    debug!("merge_sort_unbounded: len {} {stats:?}", v.len());

    (sorted, stats)
}

fn sort_rec<T>(v: &[T], forker: &Forker) -> Vec<T>
where
    T: Ord + Clone + Send + Sync,
{
    if v.len() <= 1 {
        return v.to_vec();
    }

    let (left, right) = v.split_at(v.len() / 2);
    let (left, right) = forker.join(|| sort_rec(left, forker), || sort_rec(right, forker));

    merge(left, right)
}
