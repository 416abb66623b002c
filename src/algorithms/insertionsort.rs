//! The insertion sort implementation

/// The insertion [`super::Sort`]
pub struct InsertionSort;

impl super::Sort for InsertionSort {
    const IS_STABLE: bool = true;

    fn sort<T: Ord>(slice: &mut [T]) -> Result<(), super::SortError> {
        insertion_sort(slice);
        Ok(())
    }
}

/// Sort `slice` using insertion sort
///
/// Each element is inserted into the sorted prefix in front of it by scanning
/// for its position and rotating the strictly greater tail one step right.
/// Equal elements stop the scan, so earlier ones stay in front. An already
/// sorted slice costs one comparison per element and no moves.
pub fn insertion_sort<T: Ord>(slice: &mut [T]) {
    for i in 1..slice.len() {
        let mut gap = i;
        while gap > 0 && slice[gap - 1] > slice[i] {
            gap -= 1;
        }

        if gap != i {
            slice[gap..=i].rotate_right(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNS: usize = 100;
    const TEST_SIZE: usize = 1000;

    #[test]
    fn empty() {
        crate::test::test_empty::<InsertionSort>();
    }

    #[test]
    fn single() {
        crate::test::test_single::<InsertionSort>();
    }

    #[test]
    fn small_example() {
        let mut values = [5, 3, 1, 4, 2];
        insertion_sort(&mut values);
        assert_eq!(values, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn random() {
        crate::test::test_random_sorted::<RUNS, TEST_SIZE, InsertionSort>();
    }

    #[test]
    fn random_stable() {
        crate::test::test_random_stable_sorted::<RUNS, TEST_SIZE, InsertionSort>();
    }

    #[test]
    fn already_sorted() {
        crate::test::test_already_sorted_unchanged::<TEST_SIZE, InsertionSort>();
    }

    #[test]
    fn linear_on_sorted_input() {
        let mut values: Box<[_]> = crate::test::CountingOrdered::map_iter(0..TEST_SIZE).collect();

        crate::test::reset_comparisons();
        insertion_sort(&mut values);

        assert_eq!(
            crate::test::comparisons(),
            TEST_SIZE as u64 - 1,
            "Sorted input should cost exactly one comparison per element"
        );
    }

    #[test]
    fn descending() {
        let mut values: Vec<u32> = (0..500).rev().collect();
        insertion_sort(&mut values);
        assert!(values.is_sorted());
    }
}
