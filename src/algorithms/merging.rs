//! The stable two-way merge step shared by mergesort and timsort

use std::mem::MaybeUninit;
use std::ops::Range;
use std::ptr;

/// Modeled after [`std::slice::sort::stable::BufGuard<T>`]
pub trait BufGuard<T>: Sized {
    /// Creates a new buffer that holds at least `capacity` memory
    ///
    /// # Errors
    ///
    /// [`super::SortError::BufferTooLarge`] when the reservation fails
    fn try_with_capacity(capacity: usize) -> Result<Self, super::SortError>;
    /// Returns mutable access to uninitialized memory owned by the buffer
    fn as_uninit_slice_mut(&mut self) -> &mut [MaybeUninit<T>];
}

#[allow(dead_code)]
pub static ALLOC_COUNTER: crate::data::GlobalCounter = crate::data::GlobalCounter::new();
#[allow(dead_code)]
pub static MERGE_COUNTER: crate::data::GlobalCounter = crate::data::GlobalCounter::new();

impl<T> BufGuard<T> for Vec<T> {
    fn try_with_capacity(capacity: usize) -> Result<Self, super::SortError> {
        #[cfg(feature = "counters")]
        ALLOC_COUNTER.increase(capacity as u64);

        let mut buffer = Vec::new();
        buffer
            .try_reserve(capacity)
            .map_err(|source| super::SortError::BufferTooLarge {
                elements: capacity,
                source,
            })?;

        Ok(buffer)
    }

    fn as_uninit_slice_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self.spare_capacity_mut()
    }
}

/// Merge the two sorted runs `slice[..middle]` and `slice[middle..]` using `buffer`
///
/// The whole slice is copied into `buffer` and the two runs are interleaved
/// back by comparison. Ties prefer the left run, which keeps the merge stable.
/// `buffer` has to have at least the same size as `slice`.
pub fn merge<T: Ord>(slice: &mut [T], middle: usize, buffer: &mut [MaybeUninit<T>]) {
    assert!(
        middle <= slice.len(),
        "Split point needs to be in bounds"
    );
    assert!(
        buffer.len() >= slice.len(),
        "Buffer needs to have at least the size of slice"
    );

    if middle == 0 || middle == slice.len() {
        return;
    }

    #[cfg(feature = "counters")]
    MERGE_COUNTER.increase(slice.len() as u64);

    // SAFETY: Every element of slice is copied into buffer exactly once and
    // copied back out exactly once. While elements live in the buffer, hole
    // owns them: its Drop copies the unconsumed remainders of both runs back
    // behind the already merged prefix. A comparison that panics therefore
    // unwinds with slice holding each element exactly once, and the buffer
    // copies are abandoned as plain bytes.
    unsafe {
        let buf = buffer.as_mut_ptr() as *mut T;
        ptr::copy_nonoverlapping(slice.as_ptr(), buf, slice.len());

        let mut hole = MergeHole {
            left: buf..buf.add(middle),
            right: buf.add(middle)..buf.add(slice.len()),
            output: slice.as_mut_ptr(),
        };

        while !hole.left.is_empty() && !hole.right.is_empty() {
            let source = if *hole.right.start < *hole.left.start {
                advance(&mut hole.right.start)
            } else {
                advance(&mut hole.left.start)
            };

            ptr::copy_nonoverlapping(source, advance(&mut hole.output), 1);
        }

        // Dropping hole copies the leftover run behind the merged prefix
    }
}

/// Returns the current pointer and steps it one element forward
unsafe fn advance<T>(pointer: &mut *mut T) -> *mut T {
    let current = *pointer;
    // SAFETY: callers only advance within one allocation, at most one past its end
    *pointer = unsafe { current.add(1) };
    current
}

/// The in-progress state of a merge
///
/// `left` and `right` are the unconsumed run remainders inside the buffer,
/// `output` the next write position in the merged slice. On drop both
/// remainders are copied to `output`, left run first, so the slice ends up
/// holding every element exactly once no matter where the merge stopped.
struct MergeHole<T> {
    left: Range<*mut T>,
    right: Range<*mut T>,
    output: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: left and right are disjoint initialized buffer ranges and
        // output has room for exactly their combined length
        unsafe {
            let left_len = self.left.end.offset_from_unsigned(self.left.start);
            ptr::copy_nonoverlapping(self.left.start, self.output, left_len);

            let right_len = self.right.end.offset_from_unsigned(self.right.start);
            ptr::copy_nonoverlapping(self.right.start, self.output.add(left_len), right_len);
        }
    }
}
