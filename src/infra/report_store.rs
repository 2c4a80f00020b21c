// ============================================================
// Layer 6 — Report Store
// ============================================================
// Writes a summary of a finished split as pretty-printed JSON,
// so a dataset directory records how it was produced:
//
//   {
//     "input": "corpus.txt",
//     "seed": 42,
//     "proportions": { "train": 0.8, "eval": 0.1, "cv": 0.1 },
//     "counts": {
//       "train": { "lines": 8012, "bytes": 412345 },
//       ...
//     }
//   }
//
// Reference: serde_json documentation

use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::Path};

use crate::domain::{split_config::SplitConfig, split_report::SplitReport};

/// Everything recorded about one split run
#[derive(Debug, Serialize)]
pub struct RunRecord<'a> {
    pub input:       &'a Path,
    pub seed:        u64,
    pub proportions: &'a SplitConfig,
    pub counts:      &'a SplitReport,
}

/// Serialise `record` to `path`, replacing any existing file.
pub fn save_report(path: &Path, record: &RunRecord<'_>) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;

    fs::write(path, json)
        .with_context(|| format!("Cannot write split report to '{}'", path.display()))?;

    tracing::debug!("Saved split report to '{}'", path.display());
    Ok(())
}
