// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// Seven positional arguments, in this order:
//
//   line-split <input> <train_pct> <eval_pct> <cv_pct> \
//              <train_file> <eval_file> <cv_file>
//
// plus optional flags for the seed, a JSON report and a
// printed summary.

use clap::Args;
use std::path::PathBuf;

use crate::application::split_use_case::{SplitJob, DEFAULT_SEED};

/// All arguments for a split run
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Input filename (local filesystem)
    pub input: PathBuf,

    /// Train split: (0-1) proportion
    pub train_pct: f64,

    /// Evaluation split: (0-1) proportion
    pub eval_pct: f64,

    /// Cross validation split: (0-1) proportion
    pub cv_pct: f64,

    /// Output file for the train split
    pub train_file: PathBuf,

    /// Output file for the evaluation split
    pub eval_file: PathBuf,

    /// Output file for the cross validation split
    pub cv_file: PathBuf,

    /// Seed for the random generator; the same seed and input
    /// always produce the same split
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Also write a JSON summary of the split to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Print per-output line counts when done
    #[arg(long)]
    pub summary: bool,
}

/// Convert CLI SplitArgs into the application-layer SplitJob.
/// The application layer never sees clap types.
impl From<&SplitArgs> for SplitJob {
    fn from(a: &SplitArgs) -> Self {
        SplitJob {
            input:      a.input.clone(),
            train_pct:  a.train_pct,
            eval_pct:   a.eval_pct,
            cv_pct:     a.cv_pct,
            train_file: a.train_file.clone(),
            eval_file:  a.eval_file.clone(),
            cv_file:    a.cv_file.clone(),
            seed:       a.seed,
        }
    }
}
