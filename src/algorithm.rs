use std::fmt;
use std::str::FromStr;

use crate::config::Parallelism;
use crate::error::UnknownAlgorithm;
use crate::fork::ForkStats;
use crate::merge_sort;
use crate::quicksort;

/// The six strategies, in the order the comparison harness runs them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    MergeSortSequential,
    MergeSortUnbounded,
    MergeSortBounded,
    QuicksortSequential,
    QuicksortUnbounded,
    QuicksortSelective,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::MergeSortSequential,
        Algorithm::MergeSortUnbounded,
        Algorithm::MergeSortBounded,
        Algorithm::QuicksortSequential,
        Algorithm::QuicksortUnbounded,
        Algorithm::QuicksortSelective,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::MergeSortSequential => "merge_sort_sequential",
            Algorithm::MergeSortUnbounded => "merge_sort_unbounded",
            Algorithm::MergeSortBounded => "merge_sort_bounded",
            Algorithm::QuicksortSequential => "quicksort_sequential",
            Algorithm::QuicksortUnbounded => "quicksort_unbounded",
            Algorithm::QuicksortSelective => "quicksort_selective",
        }
    }

    pub fn is_concurrent(self) -> bool {
        !matches!(
            self,
            Algorithm::MergeSortSequential | Algorithm::QuicksortSequential
        )
    }

    /// Sorts a copy of `v`. `parallelism` is only read by the bounded merge sort.
    ///
    /// Runs on the current rayon pool, use [`rayon::ThreadPool::install`] to pick another one.
    pub fn run<T>(self, v: &[T], parallelism: Parallelism) -> (Vec<T>, ForkStats)
    where
        T: Ord + Clone + Send + Sync,
    {
        match self {
            Algorithm::MergeSortSequential => {
                (merge_sort::sequential::sort(v), ForkStats::default())
            }
            Algorithm::MergeSortUnbounded => merge_sort::unbounded::sort_with_stats(v),
            Algorithm::MergeSortBounded => merge_sort::bounded::sort_with_stats(v, parallelism),
            Algorithm::QuicksortSequential => (quicksort::sequential::sort(v), ForkStats::default()),
            Algorithm::QuicksortUnbounded => quicksort::unbounded::sort_with_stats(v),
            Algorithm::QuicksortSelective => {
                let mut sorted = v.to_vec();
                let stats = quicksort::selective::sort_with_stats(&mut sorted);
                (sorted, stats)
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.name() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.name().parse::<Algorithm>(), Ok(algo));
        }

        let err = "bogosort".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, UnknownAlgorithm("bogosort".into()));

        let err: Box<dyn std::error::Error> = Box::new(err);
        assert!(err.to_string().starts_with("unknown algorithm 'bogosort'"));
        assert!(err.to_string().contains("quicksort_selective"));
    }

    #[test]
    fn small_scenarios() {
        let p = Parallelism::new(4).unwrap();

        for algo in Algorithm::ALL {
            assert_eq!(algo.run::<i32>(&[], p).0, Vec::<i32>::new(), "{algo}");
            assert_eq!(algo.run(&[5], p).0, [5], "{algo}");
            assert_eq!(algo.run(&[3, 1, 2], p).0, [1, 2, 3], "{algo}");
            assert_eq!(algo.run(&[4, 4, 4, 4], p).0, [4, 4, 4, 4], "{algo}");
            assert_eq!(
                algo.run(&[9, 8, 7, 6, 5, 4, 3, 2, 1], p).0,
                [1, 2, 3, 4, 5, 6, 7, 8, 9],
                "{algo}"
            );
        }
    }

    #[test]
    fn sequential_ones_spawn_nothing() {
        let input = (0..300).rev().collect::<Vec<u32>>();
        let p = Parallelism::new(2).unwrap();

        for algo in Algorithm::ALL {
            let (_, stats) = algo.run(&input, p);
            assert_eq!(stats.tasks_spawned == 0, !algo.is_concurrent(), "{algo}");
        }
    }
}
