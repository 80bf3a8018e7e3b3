/// Uniform in-place interface over the sorts under test.
///
/// Value-producing sorts implement it by sorting into a new vector and moving the result back.
pub trait Sort {
    fn name() -> String;

    /// Whether equal elements keep their relative order. Only checked if true.
    fn is_stable() -> bool {
        false
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone + Send + Sync;
}

pub mod patterns;
