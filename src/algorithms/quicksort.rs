//! The quicksort implementation

/// The quicksort [`super::Sort`]
pub struct QuickSort;

impl super::Sort for QuickSort {
    const IS_STABLE: bool = false;

    fn sort<T: Ord>(slice: &mut [T]) -> Result<(), super::SortError> {
        quicksort(slice);
        Ok(())
    }
}

/// Quicksort the given slice
///
/// Recurses into the smaller partition and loops on the larger one, which
/// bounds the stack depth by log2 of the slice length. Degenerate pivots
/// still cost quadratic time, they just cannot exhaust the stack.
pub fn quicksort<T: Ord>(mut slice: &mut [T]) {
    while slice.len() > 1 {
        let pivot = partition(slice);

        let (left, rest) = slice.split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quicksort(left);
            slice = right;
        } else {
            quicksort(right);
            slice = left;
        }
    }
}

/// Lomuto partition of a non-empty slice around its last element
///
/// Scans left to right and swaps every element strictly less than the pivot
/// behind the boundary, then swaps the pivot onto the boundary. Afterwards
/// `slice[..boundary]` is strictly less than the pivot and
/// `slice[boundary + 1..]` is greater or equal. Returns the pivot position.
pub(crate) fn partition<T: Ord>(slice: &mut [T]) -> usize {
    let pivot = slice.len() - 1;
    let mut boundary = 0;

    for scan in 0..pivot {
        if slice[scan] < slice[pivot] {
            slice.swap(boundary, scan);
            boundary += 1;
        }
    }

    slice.swap(boundary, pivot);
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNS: usize = 100;
    const TEST_SIZE: usize = 10_000;

    #[test]
    fn empty() {
        crate::test::test_empty::<QuickSort>();
    }

    #[test]
    fn single() {
        crate::test::test_single::<QuickSort>();
    }

    #[test]
    fn random() {
        crate::test::test_random_sorted::<RUNS, TEST_SIZE, QuickSort>();
    }

    #[test]
    fn already_sorted() {
        crate::test::test_already_sorted_unchanged::<TEST_SIZE, QuickSort>();
    }

    #[test]
    fn partition_splits_around_pivot() {
        let mut values = [7, 2, 9, 4, 1, 8, 5];
        let pivot = partition(&mut values);

        assert_eq!(values[pivot], 5);
        assert!(values[..pivot].iter().all(|value| *value < 5));
        assert!(values[pivot + 1..].iter().all(|value| *value >= 5));
    }

    #[test]
    fn partition_with_duplicate_pivot_values() {
        // Equal-to-pivot elements land right of the boundary
        let mut values = [3, 3, 3, 3];
        let pivot = partition(&mut values);

        assert_eq!(pivot, 0);
        assert_eq!(values, [3, 3, 3, 3]);
    }

    #[test]
    fn descending_stays_correct_despite_quadratic_cost() {
        const SIZE: usize = 512;

        // Reverse sorted input drives the last-element pivot into its worst
        // case. The sort has to survive it with a quadratic comparison count
        // and a correct result instead of overflowing the stack.
        let mut values: Box<[_]> =
            crate::test::CountingOrdered::map_iter((0..SIZE).rev()).collect();

        crate::test::reset_comparisons();
        quicksort(&mut values);
        let comparisons = crate::test::comparisons();

        assert!(values.is_sorted());
        assert!(
            comparisons >= (SIZE * SIZE / 4) as u64,
            "Expected quadratic comparison count, got {comparisons}"
        );
    }

    #[test]
    fn rotated_ascending_worst_case() {
        // 1..n followed by 0, the classic bad case for a last-element pivot
        let mut values: Vec<u32> = (1..1000).chain(0..1).collect();
        quicksort(&mut values);
        assert!(values.is_sorted());
    }
}
