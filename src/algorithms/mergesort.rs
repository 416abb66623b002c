//! The mergesort implementation

use std::mem::MaybeUninit;

use super::merging::{self, BufGuard};

/// The top-down mergesort [`super::Sort`]
pub struct MergeSort;

impl super::Sort for MergeSort {
    const IS_STABLE: bool = true;

    fn sort<T: Ord>(slice: &mut [T]) -> Result<(), super::SortError> {
        if slice.len() < 2 {
            return Ok(());
        }

        // One buffer big enough to merge the complete slice, shared by all levels
        let mut buffer = <Vec<T> as BufGuard<T>>::try_with_capacity(slice.len())?;
        mergesort(slice, buffer.as_uninit_slice_mut());

        Ok(())
    }
}

/// The actual top-down mergesort implementation, sorts `slice`
///
/// Splits at the middle, sorts both halves recursively and merges them. The
/// recursion depth stays logarithmic because every level halves the range.
fn mergesort<T: Ord>(slice: &mut [T], buffer: &mut [MaybeUninit<T>]) {
    if slice.len() < 2 {
        return;
    }

    let middle = slice.len() / 2;

    let (left, right) = slice.split_at_mut(middle);
    mergesort(left, buffer);
    mergesort(right, buffer);

    merging::merge(slice, middle, buffer);
}
