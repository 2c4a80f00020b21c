// ============================================================
// Layer 6 — Output Sinks
// ============================================================
// Owns the three output files for one split run.
//
//   - Each file is created, or truncated if it already exists,
//     as soon as OutputSinks::create succeeds. An empty input
//     therefore still leaves three zero-byte files behind.
//   - Writes go through a BufWriter per file.
//   - `finish` flushes all three and reports the first failure.
//     If the run aborts early, dropping the sinks still flushes
//     what was buffered (best effort, errors ignored).
//
// Reference: Rust Book §12 (I/O and File Handling)
//            std::io::BufWriter

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::domain::{
    bucket::Bucket,
    error::{SplitError, SplitResult},
    traits::LineSink,
};

struct Sink {
    path:   PathBuf,
    writer: BufWriter<File>,
}

/// The train, eval and cv output files.
pub struct OutputSinks {
    sinks: [Sink; 3],
}

impl OutputSinks {
    /// Create (or truncate) the three output files, in train,
    /// eval, cv order. Stops at the first file that cannot be
    /// created.
    pub fn create(train: &Path, eval: &Path, cv: &Path) -> SplitResult<Self> {
        Ok(Self {
            sinks: [open_sink(train)?, open_sink(eval)?, open_sink(cv)?],
        })
    }

    /// Flush every output. Consumes the sinks so nothing can be
    /// written after a successful finish.
    pub fn finish(mut self) -> SplitResult<()> {
        for sink in self.sinks.iter_mut() {
            sink.writer
                .flush()
                .map_err(|e| SplitError::io("flush output", &sink.path, e))?;
        }
        Ok(())
    }
}

impl LineSink for OutputSinks {
    fn write_line(&mut self, bucket: Bucket, line: &[u8]) -> SplitResult<()> {
        let sink = &mut self.sinks[bucket.index()];
        sink.writer
            .write_all(line)
            .map_err(|e| SplitError::io("write output", &sink.path, e))
    }
}

fn open_sink(path: &Path) -> SplitResult<Sink> {
    let file = File::create(path).map_err(|e| SplitError::io("create output", path, e))?;
    tracing::debug!("Opened output '{}'", path.display());
    Ok(Sink {
        path:   path.to_path_buf(),
        writer: BufWriter::new(file),
    })
}
