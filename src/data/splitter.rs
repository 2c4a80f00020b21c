// ============================================================
// Layer 4 — Line Splitter
// ============================================================
// Distributes lines across the train / eval / cv outputs.
//
// For every line, in input order:
//   1. draw r uniformly from [0, 1)
//   2. pick the bucket with SplitConfig::classify(r)
//   3. append the line, unchanged, to that bucket's sink
//
// One draw per line, nothing buffered, nothing reordered:
//   - each line lands in exactly one output
//   - lines keep their relative order inside each output
//   - the same seed and input always give the same split
//
// Any read or write error stops the split immediately.
// Whatever was already written stays where it is.
//
// Reference: rand crate documentation (Rng::gen)

use std::io;
use std::path::Path;

use rand::Rng;

use crate::domain::{
    error::{SplitError, SplitResult},
    split_config::SplitConfig,
    split_report::SplitReport,
    traits::LineSink,
};

/// Split `lines` across the three buckets of `sink`.
///
/// # Arguments
/// * `lines`  - Raw lines in input order (see `LineStream`)
/// * `source` - Input path, used only to label read errors
/// * `config` - Validated proportions
/// * `rng`    - Random source; one `f64` is drawn per line
/// * `sink`   - Destination for each bucket
///
/// # Returns
/// Line and byte counts per bucket
pub fn split_lines<I, R, S>(
    lines:  I,
    source: &Path,
    config: &SplitConfig,
    rng:    &mut R,
    sink:   &mut S,
) -> SplitResult<SplitReport>
where
    I: IntoIterator<Item = io::Result<Vec<u8>>>,
    R: Rng + ?Sized,
    S: LineSink + ?Sized,
{
    let mut report = SplitReport::default();

    for line in lines {
        let line = line.map_err(|e| SplitError::io("read input", source, e))?;

        // gen::<f64>() is uniform over [0, 1)
        let r: f64   = rng.gen();
        let bucket   = config.classify(r);

        sink.write_line(bucket, &line)?;
        report.record(bucket, line.len());
    }

    tracing::debug!(
        "Split {} lines: {} train, {} eval, {} cv",
        report.total_lines(),
        report.train.lines,
        report.eval.lines,
        report.cv.lines,
    );

    Ok(report)
}
