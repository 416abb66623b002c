//! The simplified timsort implementation

use super::SortError;
use super::insertionsort::insertion_sort;
use super::merging::{self, BufGuard};

/// The default `RUN_SIZE` to use
pub const DEFAULT_RUN_SIZE: usize = 32;

/// The timsort [`super::Sort`], with the run size fixed at compile time
pub struct TimSort<const RUN_SIZE: usize = DEFAULT_RUN_SIZE>;

impl<const RUN_SIZE: usize> super::Sort for TimSort<RUN_SIZE> {
    const IS_STABLE: bool = true;

    fn sort<T: Ord>(slice: &mut [T]) -> Result<(), SortError> {
        timsort(slice, RUN_SIZE)
    }
}

/// Timsort `slice` with the given run size
///
/// The slice is cut into consecutive runs of `run_size` elements (the last
/// one may be shorter), every run is insertion sorted on its own, and
/// adjacent run pairs are then merged with doubling width until one run
/// covers the whole slice. `run_size = 1` degenerates to a plain bottom-up
/// mergesort, `run_size >= slice.len()` to a plain insertion sort.
///
/// # Errors
///
/// [`SortError::InvalidRunSize`] if `run_size` is zero and
/// [`SortError::BufferTooLarge`] if the merge buffer cannot be reserved,
/// both before any element has been moved.
pub fn timsort<T: Ord>(slice: &mut [T], run_size: usize) -> Result<(), SortError> {
    if run_size == 0 {
        return Err(SortError::InvalidRunSize { run_size });
    }

    if slice.len() < 2 {
        return Ok(());
    }

    if run_size >= slice.len() {
        insertion_sort(slice);
        return Ok(());
    }

    let mut buffer = <Vec<T> as BufGuard<T>>::try_with_capacity(slice.len())?;

    // Sort every run independently
    for run in slice.chunks_mut(run_size) {
        insertion_sort(run);
    }

    // Merge adjacent run pairs, doubling the merge width each pass. A pass
    // leaves the trailing run alone when it has no right-hand partner.
    let mut width = run_size;
    while width < slice.len() {
        let mut start = 0;

        while start < slice.len() - width {
            let end = std::cmp::min(start + 2 * width, slice.len());
            merging::merge(&mut slice[start..end], width, buffer.as_uninit_slice_mut());

            start += 2 * width;
        }

        width *= 2;
    }

    Ok(())
}
