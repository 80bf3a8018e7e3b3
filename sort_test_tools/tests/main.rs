use sort_test_tools::instantiate_sort_tests;
use sort_test_tools::Sort;

struct SortImpl {}

impl Sort for SortImpl {
    fn name() -> String {
        "rust_std_stable".into()
    }

    fn is_stable() -> bool {
        true
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone + Send + Sync,
    {
        arr.sort();
    }
}

instantiate_sort_tests!(SortImpl);

// Sorts are allowed to give up on inconsistent orderings by panicking, as long as no element is
// lost or duplicated.
mod bails_out_on_first_comparison {
    use sort_test_tools::Sort;

    struct SortImpl;

    impl Sort for SortImpl {
        fn name() -> String {
            "bails_out_on_first_comparison".into()
        }

        fn sort<T>(arr: &mut [T])
        where
            T: Ord + Clone + Send + Sync,
        {
            if arr.len() >= 2 {
                if arr[1] < arr[0] {
                    arr.swap(0, 1);
                }
                panic!("inconsistent ordering");
            }
        }
    }

    #[test]
    fn violate_ord_retain_original_set() {
        sort_test_tools::tests::violate_ord_retain_original_set::<SortImpl>();
    }
}
