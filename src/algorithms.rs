//! The sorting algorithm implementations

pub mod heapsort;
pub mod insertionsort;
pub mod introsort;
pub mod mergesort;
pub mod merging;
pub mod quicksort;
pub mod stepping;
pub mod timsort;

/// A whole-slice comparison sort
pub trait Sort {
    /// Whether equal elements keep their relative input order
    const IS_STABLE: bool;

    /// Sort `slice` into non-decreasing order
    ///
    /// # Errors
    ///
    /// Returns a [`SortError`] before any element has been moved. A slice that
    /// came back `Err` is still the caller's original permutation.
    fn sort<T: Ord>(slice: &mut [T]) -> Result<(), SortError>;
}

/// The ways a sort can fail instead of mutating its input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// Timsort was configured with a zero run size
    #[error("run size must be at least 1, got {run_size}")]
    InvalidRunSize { run_size: usize },
    /// The merge buffer for `elements` elements could not be reserved
    #[error("failed to reserve a merge buffer for {elements} elements")]
    BufferTooLarge {
        elements: usize,
        #[source]
        source: std::collections::TryReserveError,
    },
}
