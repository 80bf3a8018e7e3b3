// The shared suite, once per strategy.

mod merge_sort_sequential {
    sort_test_tools::instantiate_sort_tests!(dnc_sort::merge_sort::sequential::SortImpl);
}

mod merge_sort_unbounded {
    sort_test_tools::instantiate_sort_tests!(dnc_sort::merge_sort::unbounded::SortImpl);
}

mod merge_sort_bounded {
    sort_test_tools::instantiate_sort_tests!(dnc_sort::merge_sort::bounded::SortImpl);
}

mod quicksort_sequential {
    sort_test_tools::instantiate_sort_tests!(dnc_sort::quicksort::sequential::SortImpl);
}

mod quicksort_unbounded {
    sort_test_tools::instantiate_sort_tests!(dnc_sort::quicksort::unbounded::SortImpl);
}

mod quicksort_selective {
    sort_test_tools::instantiate_sort_tests!(dnc_sort::quicksort::selective::SortImpl);
}
