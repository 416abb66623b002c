//! Command line input handling

use crate::algorithms::{self, Sort as _, SortError};

/// Command line arguments
#[derive(clap::Parser)]
#[command(
    author,
    version,
    about,
    subcommand_value_name = "sort",
    subcommand_help_heading = "Sorts",
    disable_help_subcommand = true
)]
pub struct Args {
    /// The sorting algorithm to run
    #[command(subcommand)]
    pub algorithm: Algorithm,
    /// The number of runs to measure
    #[arg(short, long, default_value_t = 100)]
    pub runs: usize,
    /// The size of the slices to sort
    #[arg(short, long, default_value_t = 100_000)]
    pub size: usize,
    /// The data distribution to sort
    #[arg(short, long, default_value_t = DataType::PermutationU64)]
    pub data: DataType,
    /// Seed for the rng
    #[arg(long)]
    pub seed: Option<u64>,
    /// The output file to write the samples to
    #[arg(long)]
    pub output: Option<std::path::PathBuf>,
}

/// The closed set of sorting algorithms the driver can dispatch to
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::Subcommand)]
pub enum Algorithm {
    /// Insertionsort
    Insertionsort,
    /// Top-down mergesort
    Mergesort,
    /// Quicksort with a last-element Lomuto partition
    Quicksort,
    /// Heapsort
    Heapsort,
    /// Timsort with insertion sorted runs and bottom-up merging
    Timsort {
        /// The length of the insertion sorted runs
        #[arg(long, default_value_t = algorithms::timsort::DEFAULT_RUN_SIZE)]
        run_size: usize,
    },
    /// Introsort, quicksort falling back to insertion sort and heapsort
    Introsort,
}

impl Algorithm {
    /// Run this algorithm on `slice`
    ///
    /// # Errors
    ///
    /// Forwards the [`SortError`] of the dispatched sort, leaving `slice` in
    /// its input order.
    pub fn sort<T: Ord>(self, slice: &mut [T]) -> Result<(), SortError> {
        match self {
            Algorithm::Insertionsort => algorithms::insertionsort::InsertionSort::sort(slice),
            Algorithm::Mergesort => algorithms::mergesort::MergeSort::sort(slice),
            Algorithm::Quicksort => algorithms::quicksort::QuickSort::sort(slice),
            Algorithm::Heapsort => algorithms::heapsort::HeapSort::sort(slice),
            Algorithm::Timsort { run_size } => algorithms::timsort::timsort(slice, run_size),
            Algorithm::Introsort => algorithms::introsort::IntroSort::sort(slice),
        }
    }

    /// Return whether the sort is stable
    pub fn is_stable(self) -> bool {
        match self {
            Algorithm::Insertionsort => algorithms::insertionsort::InsertionSort::IS_STABLE,
            Algorithm::Mergesort => algorithms::mergesort::MergeSort::IS_STABLE,
            Algorithm::Quicksort => algorithms::quicksort::QuickSort::IS_STABLE,
            Algorithm::Heapsort => algorithms::heapsort::HeapSort::IS_STABLE,
            Algorithm::Timsort { .. } => {
                <algorithms::timsort::TimSort as algorithms::Sort>::IS_STABLE
            }
            Algorithm::Introsort => algorithms::introsort::IntroSort::IS_STABLE,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Algorithm::Insertionsort => "insertionsort",
            Algorithm::Mergesort => "mergesort",
            Algorithm::Quicksort => "quicksort",
            Algorithm::Heapsort => "heapsort",
            Algorithm::Timsort { .. } => "timsort",
            Algorithm::Introsort => "introsort",
        })
    }
}

/// Available data distributions for sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DataType {
    PermutationU64,
    UniformU64,
    AscendingU64,
    DescendingU64,
    RotatedU64,
    ZipfU64,
    PermutationU32,
    UniformU32,
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(clap::ValueEnum::to_possible_value(self).unwrap().get_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser as _;

    #[test]
    fn every_algorithm_dispatches() {
        let algorithms = [
            Algorithm::Insertionsort,
            Algorithm::Mergesort,
            Algorithm::Quicksort,
            Algorithm::Heapsort,
            Algorithm::Timsort { run_size: 32 },
            Algorithm::Introsort,
        ];

        for algorithm in algorithms {
            let mut values = [5, 3, 1, 4, 2];
            algorithm.sort(&mut values).unwrap();
            assert_eq!(values, [1, 2, 3, 4, 5], "{algorithm} failed");
        }
    }

    #[test]
    fn stability_flags() {
        assert!(Algorithm::Insertionsort.is_stable());
        assert!(Algorithm::Mergesort.is_stable());
        assert!(Algorithm::Timsort { run_size: 32 }.is_stable());
        assert!(!Algorithm::Quicksort.is_stable());
        assert!(!Algorithm::Heapsort.is_stable());
        assert!(!Algorithm::Introsort.is_stable());
    }

    #[test]
    fn timsort_run_size_is_parsed() {
        let args = Args::parse_from(["sortbench", "timsort", "--run-size", "64"]);
        assert_eq!(args.algorithm, Algorithm::Timsort { run_size: 64 });

        let args = Args::parse_from(["sortbench", "timsort"]);
        assert_eq!(
            args.algorithm,
            Algorithm::Timsort {
                run_size: algorithms::timsort::DEFAULT_RUN_SIZE
            }
        );
    }

    #[test]
    fn defaults_are_applied() {
        let args = Args::parse_from(["sortbench", "quicksort"]);
        assert_eq!(args.runs, 100);
        assert_eq!(args.size, 100_000);
        assert_eq!(args.data, DataType::PermutationU64);
        assert_eq!(args.seed, None);
        assert_eq!(args.output, None);
    }

    #[test]
    fn output_flag_is_parsed() {
        let args = Args::parse_from(["sortbench", "--output", "samples.csv", "quicksort"]);
        assert_eq!(args.output, Some(std::path::PathBuf::from("samples.csv")));
    }

    #[test]
    fn zero_run_size_reaches_the_sort_as_an_error() {
        let args = Args::parse_from(["sortbench", "timsort", "--run-size", "0"]);

        let mut values = [2, 1];
        let result = args.algorithm.sort(&mut values);

        assert_eq!(result, Err(SortError::InvalidRunSize { run_size: 0 }));
        assert_eq!(values, [2, 1]);
    }
}
