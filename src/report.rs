//! CSV output of measured samples

use std::io::{self, BufWriter, Write as _};
use std::path::Path;
use std::time::Duration;

/// Write one row per measured run to `path`, header line first
///
/// Columns are `algorithm,data,size,run,duration_ns` with runs numbered from
/// zero in measurement order. An existing file is truncated.
pub fn write_samples(
    path: &Path,
    algorithm: &str,
    data: &str,
    size: usize,
    samples: &[Duration],
) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "algorithm,data,size,run,duration_ns")?;
    for (run, duration) in samples.iter().enumerate() {
        writeln!(
            writer,
            "{algorithm},{data},{size},{run},{nanos}",
            nanos = duration.as_nanos()
        )?;
    }

    writer.flush()
}
