use std::sync::atomic::{AtomicU64, Ordering};
use std::{fmt, marker::PhantomData};

use rand::{distr::Distribution, rngs::StdRng, seq::SliceRandom as _};

/// A trait for generalizing sorting data creation
pub trait Data<T: Sized + Ord + fmt::Debug> {
    /// Initialize a vector of the given size
    fn initialize(size: usize, rng: &mut StdRng) -> Vec<T>;
}

/// A uniform data distribution set
#[derive(Debug)]
pub struct UniformData<T>(PhantomData<T>);

/// A shuffled permutation of `0..size`
#[derive(Debug)]
pub struct PermutationData<T>(PhantomData<T>);

/// Already sorted values `0..size`
#[derive(Debug)]
pub struct AscendingData<T>(PhantomData<T>);

/// Reverse sorted values, the insertion sort worst case
#[derive(Debug)]
pub struct DescendingData<T>(PhantomData<T>);

/// `1..size` followed by `0`, ascending data rotated by one element and the
/// classic worst case for a last-element quicksort pivot
#[derive(Debug)]
pub struct RotatedData<T>(PhantomData<T>);

/// Zipf distributed values, heavy on duplicates of the small ranks
#[derive(Debug)]
pub struct ZipfData<T>(PhantomData<T>);

macro_rules! impl_for_integers {
    ($($type:ty),*) => {
        $(
            impl_for_integers!(@single $type);
        )*
    };
    (@single $type:ty) => {
        impl Data<$type> for UniformData<$type> {
            fn initialize(size: usize, rng: &mut StdRng) -> Vec<$type> {
                rand::distr::Uniform::new(<$type>::MIN, <$type>::MAX)
                    .unwrap()
                    .sample_iter(rng)
                    .take(size)
                    .collect()
            }
        }

        impl Data<$type> for PermutationData<$type> {
            fn initialize(size: usize, rng: &mut StdRng) -> Vec<$type> {
                let mut values: Vec<$type> = (0..size).map(|value| value as $type).collect();
                values.shuffle(rng);
                values
            }
        }

        impl Data<$type> for AscendingData<$type> {
            fn initialize(size: usize, _rng: &mut StdRng) -> Vec<$type> {
                (0..size).map(|value| value as $type).collect()
            }
        }

        impl Data<$type> for DescendingData<$type> {
            fn initialize(size: usize, _rng: &mut StdRng) -> Vec<$type> {
                (0..size).rev().map(|value| value as $type).collect()
            }
        }

        impl Data<$type> for RotatedData<$type> {
            fn initialize(size: usize, _rng: &mut StdRng) -> Vec<$type> {
                (1..size).chain(0..1).map(|value| value as $type).collect()
            }
        }

        impl Data<$type> for ZipfData<$type> {
            fn initialize(size: usize, rng: &mut StdRng) -> Vec<$type> {
                rand_distr::Zipf::new(size.max(1) as f64, 1.0)
                    .unwrap()
                    .sample_iter(rng)
                    .take(size)
                    .map(|value| value as $type)
                    .collect()
            }
        }
    }
}

// Implement the Data trait for the benchmarked integer types
impl_for_integers!(u32, u64);

/// A global cost counter, written to behind the `counters` feature
#[derive(Debug)]
pub struct GlobalCounter(AtomicU64);

#[allow(dead_code)]
impl GlobalCounter {
    /// Create a counter starting at zero
    pub const fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Add `amount` to the counter
    pub fn increase(&self, amount: u64) {
        self.0.fetch_add(amount, Ordering::Relaxed);
    }

    /// The current counter value
    pub fn value(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng as _;

    const TEST_SIZE: usize = 1000;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(crate::test::TEST_SEED)
    }

    #[test]
    fn permutation_contains_every_value_once() {
        let mut values = <PermutationData<u64> as Data<u64>>::initialize(TEST_SIZE, &mut rng());
        values.sort();
        assert_eq!(values, (0..TEST_SIZE as u64).collect::<Vec<_>>());
    }

    #[test]
    fn ascending_is_sorted() {
        let values = <AscendingData<u64> as Data<u64>>::initialize(TEST_SIZE, &mut rng());
        assert_eq!(values, (0..TEST_SIZE as u64).collect::<Vec<_>>());
    }

    #[test]
    fn descending_is_reversed() {
        let values = <DescendingData<u64> as Data<u64>>::initialize(TEST_SIZE, &mut rng());
        assert!(values.iter().rev().copied().eq(0..TEST_SIZE as u64));
    }

    #[test]
    fn rotated_moves_the_minimum_to_the_back() {
        let values = <RotatedData<u64> as Data<u64>>::initialize(TEST_SIZE, &mut rng());
        assert_eq!(values[0], 1);
        assert_eq!(values[TEST_SIZE - 1], 0);
        assert!(values[..TEST_SIZE - 1].is_sorted());
    }

    #[test]
    fn zipf_values_stay_in_range() {
        let values = <ZipfData<u64> as Data<u64>>::initialize(TEST_SIZE, &mut rng());
        assert_eq!(values.len(), TEST_SIZE);
        assert!(values.iter().all(|value| (1..=TEST_SIZE as u64).contains(value)));
    }

    #[test]
    fn empty_sizes_yield_empty_vectors() {
        for values in [
            <UniformData<u32> as Data<u32>>::initialize(0, &mut rng()),
            <PermutationData<u32> as Data<u32>>::initialize(0, &mut rng()),
            <ZipfData<u32> as Data<u32>>::initialize(0, &mut rng()),
        ] {
            assert!(values.is_empty());
        }
    }
}
