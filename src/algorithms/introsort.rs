//! The introsort implementation

use super::heapsort::heapsort;
use super::insertionsort::insertion_sort;
use super::quicksort::partition;

/// Ranges shorter than this are insertion sorted instead of partitioned
const INSERTION_THRESHOLD: usize = 16;

/// The introsort [`super::Sort`]
pub struct IntroSort;

impl super::Sort for IntroSort {
    const IS_STABLE: bool = false;

    fn sort<T: Ord>(slice: &mut [T]) -> Result<(), super::SortError> {
        if slice.len() < 2 {
            return Ok(());
        }

        introsort(slice, depth_limit(slice.len()));
        Ok(())
    }
}

/// The partitioning budget `2 * log2(n)` rounded down, computed as `log2(n^2)`
fn depth_limit(n: usize) -> usize {
    ((n as u128) * (n as u128)).ilog2() as usize
}

/// The actual introsort implementation
///
/// Every range takes exactly one of three branches: short ranges go to
/// insertion sort, an exhausted budget goes to heapsort, everything else is
/// partitioned around a median-of-three pivot and both sides are sorted with
/// one level less budget. Iterating into the larger side keeps the stack
/// depth itself logarithmic.
fn introsort<T: Ord>(mut slice: &mut [T], mut depth_limit: usize) {
    loop {
        if slice.len() < INSERTION_THRESHOLD {
            insertion_sort(slice);
            return;
        }

        if depth_limit == 0 {
            heapsort(slice);
            return;
        }
        depth_limit -= 1;

        move_median_to_last(slice);
        let pivot = partition(slice);

        let (left, rest) = slice.split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            introsort(left, depth_limit);
            slice = right;
        } else {
            introsort(right, depth_limit);
            slice = left;
        }
    }
}

/// Swap the median of the first, middle and last element into the last
/// position, where [`partition`] expects its pivot
///
/// The sample indices are sorted by the elements they point at, stably, so
/// equal samples keep index order and the choice is deterministic.
fn move_median_to_last<T: Ord>(slice: &mut [T]) {
    let last = slice.len() - 1;
    let samples = &mut [0, slice.len() / 2, last];
    samples.sort_by_key(|index| &slice[*index]);
    slice.swap(samples[1], last);
}
