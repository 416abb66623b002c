use clap::Parser as _;
use rand::SeedableRng as _;

use sortbench::algorithms::SortError;
use sortbench::cli::{Algorithm, Args, DataType};
use sortbench::{data, report};

/// Program entry point
fn main() {
    if let Err(error) = run(Args::parse()) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

/// Driver level failures
#[derive(Debug, thiserror::Error)]
enum DriverError {
    #[error(transparent)]
    Sort(#[from] SortError),
    #[error("failed to write samples: {0}")]
    Output(#[from] std::io::Error),
}

/// Run the experiment described by the command line arguments
fn run(args: Args) -> Result<(), DriverError> {
    let Args {
        algorithm,
        runs,
        size,
        data,
        seed,
        output,
    } = args;

    println!(
        "Running measurements for {algorithm} (stable: {stable})",
        stable = algorithm.is_stable(),
    );
    println!("Runs: {runs}, Slice size: {size}, Data distribution: {data}");

    // Create rng
    let mut rng = match seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => {
            println!("No seed provided, generating one using system rng");
            rand::rngs::StdRng::from_os_rng()
        }
    };

    let (samples, stats) = match data {
        DataType::PermutationU64 => {
            perform_experiment::<u64, data::PermutationData<u64>>(algorithm, runs, size, &mut rng)
        }
        DataType::UniformU64 => {
            perform_experiment::<u64, data::UniformData<u64>>(algorithm, runs, size, &mut rng)
        }
        DataType::AscendingU64 => {
            perform_experiment::<u64, data::AscendingData<u64>>(algorithm, runs, size, &mut rng)
        }
        DataType::DescendingU64 => {
            perform_experiment::<u64, data::DescendingData<u64>>(algorithm, runs, size, &mut rng)
        }
        DataType::RotatedU64 => {
            perform_experiment::<u64, data::RotatedData<u64>>(algorithm, runs, size, &mut rng)
        }
        DataType::ZipfU64 => {
            perform_experiment::<u64, data::ZipfData<u64>>(algorithm, runs, size, &mut rng)
        }
        DataType::PermutationU32 => {
            perform_experiment::<u32, data::PermutationData<u32>>(algorithm, runs, size, &mut rng)
        }
        DataType::UniformU32 => {
            perform_experiment::<u32, data::UniformData<u32>>(algorithm, runs, size, &mut rng)
        }
    }?;

    println!("Stats [ms]: {stats:?}");

    #[cfg(feature = "counters")]
    println!(
        "Merged elements: {merged}, reserved buffer elements: {reserved}",
        merged = sortbench::algorithms::merging::MERGE_COUNTER.value(),
        reserved = sortbench::algorithms::merging::ALLOC_COUNTER.value(),
    );

    if let Some(path) = output {
        report::write_samples(&path, &algorithm.to_string(), &data.to_string(), size, &samples)?;
        println!(
            "Wrote {count} samples to {path}",
            count = samples.len(),
            path = path.display()
        );
    }

    Ok(())
}

/// Perform a time sampling experiment on the given sorting algorithm
///
/// - runs: The number of samples to measure
/// - size: The size of the slices to sort
/// - rng: The rng used for sampling the data
fn perform_experiment<T: Ord + std::fmt::Debug, D: data::Data<T>>(
    algorithm: Algorithm,
    runs: usize,
    size: usize,
    rng: &mut rand::rngs::StdRng,
) -> Result<(Vec<std::time::Duration>, rolling_stats::Stats<f64>), SortError> {
    let mut samples = Vec::with_capacity(runs);
    let mut stats: rolling_stats::Stats<f64> = rolling_stats::Stats::new();

    let bar = indicatif::ProgressBar::new(runs as u64);

    for run in 0..=runs {
        let mut data = D::initialize(size, rng);

        let now = std::time::Instant::now();
        algorithm.sort(std::hint::black_box(&mut data))?;
        let elapsed = now.elapsed();

        // Validated outside the timed region, in release builds too
        assert!(
            data.is_sorted(),
            "{algorithm} produced an unsorted result on run {run}"
        );

        // Skip the first sample as warmup
        if run != 0 {
            samples.push(elapsed);
            stats.update(elapsed.as_secs_f64() * 1_000.0);

            bar.inc(1);
        }
    }

    bar.finish();

    Ok((samples, stats))
}
