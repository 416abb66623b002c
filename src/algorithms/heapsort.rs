//! The heapsort implementation

/// The heapsort [`super::Sort`]
pub struct HeapSort;

impl super::Sort for HeapSort {
    const IS_STABLE: bool = false;

    fn sort<T: Ord>(slice: &mut [T]) -> Result<(), super::SortError> {
        heapsort(slice);
        Ok(())
    }
}

/// Heapsort the given slice
pub(crate) fn heapsort<T: Ord>(slice: &mut [T]) {
    if slice.len() < 2 {
        return;
    }

    // Build the max-heap by sifting every internal node, last parent first
    for root in (0..slice.len() / 2).rev() {
        sift_down(slice, root);
    }

    // Swap the maximum behind the shrinking heap and restore the invariant
    for end in (1..slice.len()).rev() {
        slice.swap(0, end);
        sift_down(&mut slice[..end], 0);
    }
}

/// Sift `heap[root]` down until neither child is larger
///
/// Iterative instead of recursive, one level per loop round. Children of
/// `root` sit at `2 * root + 1` and `2 * root + 2`.
fn sift_down<T: Ord>(heap: &mut [T], mut root: usize) {
    loop {
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        let mut largest = root;
        if left < heap.len() && heap[left] > heap[largest] {
            largest = left;
        }
        if right < heap.len() && heap[right] > heap[largest] {
            largest = right;
        }

        if largest == root {
            return;
        }

        heap.swap(root, largest);
        root = largest;
    }
}
