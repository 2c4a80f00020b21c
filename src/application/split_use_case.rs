// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Runs one split from start to finish:
//
//   Step 1: Validate proportions      (Layer 3 - domain)
//   Step 2: Open the input            (Layer 4 - data)
//   Step 3: Create the three outputs  (Layer 6 - infra)
//   Step 4: Distribute the lines      (Layer 4 - data)
//   Step 5: Flush the outputs         (Layer 6 - infra)
//
// The proportions are checked before any file is opened, so a
// bad configuration never creates or truncates an output.
// After that, the first I/O error ends the run; files already
// written are left as they are.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use std::{
    fs::File,
    io::BufReader,
    path::PathBuf,
};

use crate::data::{line_stream::LineStream, splitter::split_lines};
use crate::domain::{
    error::{SplitError, SplitResult},
    split_config::SplitConfig,
    split_report::SplitReport,
};
use crate::infra::{
    output_sinks::OutputSinks,
    report_store::{save_report, RunRecord},
};

/// Seed used when none is given, so repeated runs are reproducible
pub const DEFAULT_SEED: u64 = 42;

// ─── Split Job ────────────────────────────────────────────────────────────────
// Everything needed for one run, as handed over by the CLI.
// Proportions are still raw here; SplitUseCase validates them.
#[derive(Debug, Clone)]
pub struct SplitJob {
    pub input:      PathBuf,
    pub train_pct:  f64,
    pub eval_pct:   f64,
    pub cv_pct:     f64,
    pub train_file: PathBuf,
    pub eval_file:  PathBuf,
    pub cv_file:    PathBuf,
    pub seed:       u64,
}

// ─── SplitUseCase ─────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    job:    SplitJob,
    config: SplitConfig,
}

impl SplitUseCase {
    /// Validate the job's proportions. Fails with a configuration
    /// error before touching the filesystem.
    pub fn new(job: SplitJob) -> SplitResult<Self> {
        let config = SplitConfig::new(job.train_pct, job.eval_pct, job.cv_pct)?;

        tracing::info!(
            "Splitting '{}' with train={} eval={} cv={} (seed {})",
            job.input.display(),
            config.train(),
            config.eval(),
            config.cv(),
            job.seed,
        );

        Ok(Self { job, config })
    }

    /// Run the split and return per-bucket counts.
    pub fn execute(&self) -> SplitResult<SplitReport> {
        let job = &self.job;

        // ── Step 2: Open the input ────────────────────────────────────────────
        let file = File::open(&job.input)
            .map_err(|e| SplitError::io("open input", &job.input, e))?;
        let lines = LineStream::new(BufReader::new(file));

        // ── Step 3: Create / truncate outputs ─────────────────────────────────
        let mut sinks = OutputSinks::create(&job.train_file, &job.eval_file, &job.cv_file)?;

        // ── Step 4: Distribute lines ──────────────────────────────────────────
        // A fresh generator per run keeps the split a pure function
        // of (input, proportions, seed)
        let mut rng = StdRng::seed_from_u64(job.seed);
        let report  = split_lines(lines, &job.input, &self.config, &mut rng, &mut sinks)?;

        // ── Step 5: Flush ─────────────────────────────────────────────────────
        sinks.finish()?;

        tracing::info!(
            "Wrote {} lines ({} bytes): {} train, {} eval, {} cv",
            report.total_lines(),
            report.total_bytes(),
            report.train.lines,
            report.eval.lines,
            report.cv.lines,
        );

        Ok(report)
    }

    /// Persist a JSON summary of a finished run to `path`.
    pub fn save_report(&self, path: &std::path::Path, report: &SplitReport) -> Result<()> {
        let record = RunRecord {
            input:       &self.job.input,
            seed:        self.job.seed,
            proportions: &self.config,
            counts:      report,
        };
        save_report(path, &record)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::Path};

    fn job_in(dir: &Path, input: &[u8], pcts: (f64, f64, f64)) -> SplitJob {
        let input_path = dir.join("input.txt");
        fs::write(&input_path, input).unwrap();
        SplitJob {
            input:      input_path,
            train_pct:  pcts.0,
            eval_pct:   pcts.1,
            cv_pct:     pcts.2,
            train_file: dir.join("train.txt"),
            eval_file:  dir.join("eval.txt"),
            cv_file:    dir.join("cv.txt"),
            seed:       DEFAULT_SEED,
        }
    }

    fn read_outputs(job: &SplitJob) -> [Vec<u8>; 3] {
        [
            fs::read(&job.train_file).unwrap(),
            fs::read(&job.eval_file).unwrap(),
            fs::read(&job.cv_file).unwrap(),
        ]
    }

    #[test]
    fn test_partition_is_complete() {
        let dir   = tempfile::tempdir().unwrap();
        let input: String = (0..250).map(|i| format!("sample {i}\n")).collect();
        let job   = job_in(dir.path(), input.as_bytes(), (0.6, 0.3, 0.1));

        let report = SplitUseCase::new(job.clone()).unwrap().execute().unwrap();
        assert_eq!(report.total_lines(), 250);

        let outputs = read_outputs(&job);
        let total: usize = outputs.iter().map(|o| o.iter().filter(|&&b| b == b'\n').count()).sum();
        assert_eq!(total, 250);
        assert_eq!(outputs.iter().map(|o| o.len()).sum::<usize>(), input.len());
    }

    #[test]
    fn test_degenerate_split_sends_everything_to_train() {
        let dir   = tempfile::tempdir().unwrap();
        let input = b"one\ntwo\nthree\nfour\nfive\n";
        let job   = job_in(dir.path(), input, (1.0, 0.0, 0.0));

        SplitUseCase::new(job.clone()).unwrap().execute().unwrap();

        let [train, eval, cv] = read_outputs(&job);
        assert_eq!(train, input.to_vec());
        assert!(eval.is_empty());
        assert!(cv.is_empty());
    }

    #[test]
    fn test_empty_input_creates_three_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        let job = job_in(dir.path(), b"", (0.8, 0.1, 0.1));

        let report = SplitUseCase::new(job.clone()).unwrap().execute().unwrap();
        assert_eq!(report.total_lines(), 0);

        for path in [&job.train_file, &job.eval_file, &job.cv_file] {
            assert_eq!(fs::metadata(path).unwrap().len(), 0);
        }
    }

    #[test]
    fn test_same_seed_gives_identical_outputs() {
        let dir   = tempfile::tempdir().unwrap();
        let input: String = (0..400).map(|i| format!("row,{i}\r\n")).collect();
        let job   = job_in(dir.path(), input.as_bytes(), (0.5, 0.25, 0.25));

        SplitUseCase::new(job.clone()).unwrap().execute().unwrap();
        let first = read_outputs(&job);

        SplitUseCase::new(job.clone()).unwrap().execute().unwrap();
        let second = read_outputs(&job);

        assert_eq!(first, second);
    }

    #[test]
    fn test_bad_sum_touches_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let job = job_in(dir.path(), b"a\n", (0.5, 0.3, 0.21));

        let err = SplitUseCase::new(job.clone()).err().unwrap();
        assert!(err.is_configuration());
        assert!(!job.train_file.exists());
        assert!(!job.eval_file.exists());
        assert!(!job.cv_file.exists());
    }

    #[test]
    fn test_sum_within_tolerance_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let job = job_in(dir.path(), b"a\nb\n", (0.5, 0.3, 0.1999995));

        let report = SplitUseCase::new(job).unwrap().execute().unwrap();
        assert_eq!(report.total_lines(), 2);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_full_output_device_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut job = job_in(dir.path(), b"one\ntwo\nthree\n", (1.0, 0.0, 0.0));
        job.train_file = PathBuf::from("/dev/full");

        let err = SplitUseCase::new(job).unwrap().execute().unwrap_err();
        match err {
            SplitError::Io { op, path, .. } => {
                assert_eq!(op, "flush output");
                assert_eq!(path, PathBuf::from("/dev/full"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_input_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut job = job_in(dir.path(), b"", (0.8, 0.1, 0.1));
        job.input = dir.path().join("does_not_exist.txt");

        let err = SplitUseCase::new(job.clone()).unwrap().execute().unwrap_err();
        assert!(matches!(err, SplitError::Io { op: "open input", .. }));
        // Input is opened before outputs are created
        assert!(!job.train_file.exists());
    }

    #[test]
    fn test_report_written_next_to_outputs() {
        let dir  = tempfile::tempdir().unwrap();
        let job  = job_in(dir.path(), b"x\ny\nz\n", (0.8, 0.1, 0.1));
        let path = dir.path().join("split.json");

        let use_case = SplitUseCase::new(job).unwrap();
        let report   = use_case.execute().unwrap();
        use_case.save_report(&path, &report).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["seed"], 42);
        let lines = ["train", "eval", "cv"]
            .iter()
            .map(|b| value["counts"][b]["lines"].as_u64().unwrap())
            .sum::<u64>();
        assert_eq!(lines, 3);
    }
}
