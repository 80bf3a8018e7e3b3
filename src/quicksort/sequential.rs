use crate::partition::{three_way, ThreeWay};

sort_impl!("quicksort_sequential");

/// Recursive three-way quicksort that buckets into new vectors instead of swapping in place.
pub fn sort<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    if v.len() <= 1 {
        return v.to_vec();
    }

    let ThreeWay {
        less,
        mut equal,
        greater,
    } = three_way(v);

    let mut sorted = sort(&less);
    sorted.append(&mut equal);
    sorted.append(&mut sort(&greater));

    sorted
}
