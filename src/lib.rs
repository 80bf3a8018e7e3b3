//! Sequential and concurrent divide-and-conquer sorts, kept side by side so the cost of different
//! task spawning strategies can be compared.
//!
//! Value-producing sorts take `&[T]` and return a new `Vec<T>`. The only in-place concurrent sort
//! is [`quicksort::selective`], which hands disjoint sub-slices to its tasks.

// Adapts a value-producing `sort(&[T]) -> Vec<T>` to the in-place `Sort` interface used by the
// test suite and the benchmarks.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn is_stable() -> bool {
                true
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone + Send + Sync,
            {
                let sorted = crate::config::install(|| sort(arr));
                crate::move_back(arr, sorted);
            }
        }
    };
}

pub mod algorithm;
pub mod config;
pub mod error;
pub mod fork;
pub mod merge;
pub mod merge_sort;
pub mod partition;
pub mod quicksort;

pub use algorithm::Algorithm;
pub use config::{Parallelism, SortConfig};
pub use error::{ConfigError, UnknownAlgorithm};
pub use fork::ForkStats;

fn move_back<T>(dst: &mut [T], sorted: Vec<T>) {
    assert_eq!(dst.len(), sorted.len());

    for (slot, val) in dst.iter_mut().zip(sorted) {
        *slot = val;
    }
}
