//! Partition primitives used by the quicksorts.

/// Result of [`three_way`]. Together the three buckets hold every input element exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThreeWay<T> {
    pub less: Vec<T>,
    pub equal: Vec<T>,
    pub greater: Vec<T>,
}

/// Buckets `v` by comparison with its middle element, relative order inside a bucket is kept.
///
/// Panics if `v` is empty.
pub fn three_way<T: Ord + Clone>(v: &[T]) -> ThreeWay<T> {
    assert!(!v.is_empty(), "three_way partition of an empty slice");

    let pivot = &v[v.len() / 2];
    let mut buckets = ThreeWay {
        less: Vec::new(),
        equal: Vec::new(),
        greater: Vec::new(),
    };

    for elem in v {
        let bucket = match elem.cmp(pivot) {
            std::cmp::Ordering::Less => &mut buckets.less,
            std::cmp::Ordering::Equal => &mut buckets.equal,
            std::cmp::Ordering::Greater => &mut buckets.greater,
        };
        bucket.push(elem.clone());
    }

    buckets
}

/// Lomuto partition of `v[low..=high]` around `v[high]`, returns the final pivot position `p`.
///
/// Afterwards everything in `v[low..p]` is less than the pivot and everything in `v[p + 1..=high]`
/// is not. Elements outside `low..=high` are never touched.
///
/// Panics if `low > high` or `high` is out of bounds.
pub fn lomuto<T: Ord>(v: &mut [T], low: usize, high: usize) -> usize {
    assert!(
        low <= high && high < v.len(),
        "partition range {low}..={high} invalid for slice of len {}",
        v.len()
    );

    low + lomuto_slice(&mut v[low..=high])
}

/// [`lomuto`] over a whole non-empty slice, the pivot is the last element.
fn lomuto_slice<T: Ord>(v: &mut [T]) -> usize {
    let (pivot, rest) = match v.split_last_mut() {
        Some(split) => split,
        None => panic!("lomuto partition of an empty slice"),
    };

    let mut boundary = 0;
    for i in 0..rest.len() {
        if rest[i] < *pivot {
            rest.swap(boundary, i);
            boundary += 1;
        }
    }

    v.swap(boundary, v.len() - 1);

    boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_partitioned(v: &[i32], low: usize, high: usize, p: usize) {
        let pivot = v[p];
        assert!((low..=high).contains(&p));
        assert!(v[low..p].iter().all(|x| *x < pivot), "{v:?} p: {p}");
        assert!(v[p + 1..=high].iter().all(|x| *x >= pivot), "{v:?} p: {p}");
    }

    #[test]
    fn three_way_middle_pivot() {
        let parts = three_way(&[5, 1, 9, 5, 3, 8, 5]);

        // Pivot is v[3] == 5.
        assert_eq!(parts.less, [1, 3]);
        assert_eq!(parts.equal, [5, 5, 5]);
        assert_eq!(parts.greater, [9, 8]);
    }

    #[test]
    fn three_way_single() {
        let parts = three_way(&[42]);
        assert!(parts.less.is_empty() && parts.greater.is_empty());
        assert_eq!(parts.equal, [42]);
    }

    #[test]
    fn three_way_without_default() {
        // No `Default` impl.
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
        struct Id(u16);

        let parts = three_way(&[Id(4), Id(1), Id(2), Id(9), Id(2)]);

        // Pivot is v[2] == Id(2).
        assert_eq!(parts.less, [Id(1)]);
        assert_eq!(parts.equal, [Id(2), Id(2)]);
        assert_eq!(parts.greater, [Id(4), Id(9)]);
    }

    #[test]
    #[should_panic]
    fn three_way_empty() {
        three_way::<i32>(&[]);
    }

    #[test]
    fn lomuto_whole() {
        let mut v = [7, 2, 9, 1, 5];
        let p = lomuto(&mut v, 0, 4);

        assert_eq!(p, 2);
        assert_eq!(v[p], 5);
        assert_partitioned(&v, 0, 4, p);
    }

    #[test]
    fn lomuto_sorted_input_keeps_pivot_last() {
        let mut v = [1, 2, 3, 4, 5, 6];
        let p = lomuto(&mut v, 0, 5);

        assert_eq!(p, 5);
        assert_eq!(v, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn lomuto_equal_elements_go_right() {
        let mut v = [4, 4, 4, 4];
        assert_eq!(lomuto(&mut v, 0, 3), 0);
    }

    #[test]
    fn lomuto_sub_range_only() {
        let mut v = [100, 9, 3, 7, 1, 5, -100];
        let p = lomuto(&mut v, 1, 5);

        assert_eq!(v[0], 100);
        assert_eq!(v[6], -100);
        assert_partitioned(&v, 1, 5, p);

        // Single element range.
        assert_eq!(lomuto(&mut v, 3, 3), 3);
    }

    #[test]
    #[should_panic(expected = "invalid")]
    fn lomuto_high_out_of_bounds() {
        lomuto(&mut [1, 2, 3], 0, 3);
    }

    #[test]
    #[should_panic(expected = "invalid")]
    fn lomuto_low_above_high() {
        lomuto(&mut [1, 2, 3], 2, 1);
    }
}
