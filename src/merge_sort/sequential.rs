use crate::merge::merge;

sort_impl!("merge_sort_sequential");

/// Classic recursive top-down merge sort, `v` is left untouched.
pub fn sort<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    if v.len() <= 1 {
        return v.to_vec();
    }

    let mid = v.len() / 2;
    let left = sort(&v[..mid]);
    let right = sort(&v[mid..]);

    merge(left, right)
}
