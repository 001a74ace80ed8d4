use std::cmp::Ordering;

pub mod patterns;

#[doc(hidden)]
pub use paste;

/// An allocating sort under test. The input is left untouched and the result is returned.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &[T]) -> Vec<T>
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &[T], compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}
