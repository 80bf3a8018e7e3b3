use log::debug;

use crate::fork::{ForkStats, Forker};
use crate::partition::{three_way, ThreeWay};

sort_impl!("quicksort_unbounded");

/// Three-way quicksort that sorts the `less` and `greater` buckets of every partition as two
/// separate tasks.
///
/// Like the unbounded merge sort there is no cutoff, each partitioning step spawns two tasks even
/// if both buckets are empty.
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

    debug!("quicksort_unbounded: len {} {stats:?}", v.len());

    (sorted, stats)
}

fn sort_rec<T>(v: &[T], forker: &Forker) -> Vec<T>
where
    T: Ord + Clone + Send + Sync,
{
    if v.len() <= 1 {
        return v.to_vec();
    }

    let ThreeWay {
        less,
        mut equal,
        greater,
    } = three_way(v);

    let (mut sorted, mut sorted_greater) =
        forker.join(|| sort_rec(&less, forker), || sort_rec(&greater, forker));

    sorted.append(&mut equal);
    sorted.append(&mut sorted_greater);

    sorted
}
