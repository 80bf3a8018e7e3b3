/// Merges two non-decreasing runs into one, taking ownership of both.
///
/// On equal elements the one from `left` is emitted first. If either input isn't sorted the
/// output is some permutation of both inputs, but unspecified otherwise.
pub fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // Only a strictly smaller right element may overtake the left one.
        let next = if r < l { right.next() } else { left.next() };
        result.extend(next);
    }

    result.extend(left);
    result.extend(right);

    result
}

/// Folds already sorted runs into one, left to right with repeated pairwise [`merge`].
pub fn merge_all<T: Ord>(runs: Vec<Vec<T>>) -> Vec<T> {
    let mut runs = runs.into_iter();

    let Some(first) = runs.next() else {
        return Vec::new();
    };

    runs.fold(first, merge)
}
