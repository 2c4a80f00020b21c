// ============================================================
// Layer 3 — Errors
// ============================================================
// Two kinds of failure:
//   - configuration: bad proportions, raised before any file
//     is opened
//   - I/O: the input or an output could not be read, created,
//     written or flushed; carries the path and the operation

use std::path::PathBuf;
use thiserror::Error;

/// Result type for split operations.
pub type SplitResult<T> = Result<T, SplitError>;

/// Errors that can occur while validating or running a split.
#[derive(Debug, Error)]
pub enum SplitError {
    /// A single proportion is outside [0, 1] or not a number.
    #[error("invalid {name} proportion {value}: must be a number in [0, 1]")]
    InvalidProportion {
        /// Which proportion ("train", "eval" or "cv").
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The three proportions do not add up to 1.0.
    #[error("split proportions must sum to 1.0 (within {tolerance:e}), got {sum}")]
    ProportionSum {
        /// Actual sum of the three proportions.
        sum: f64,
        /// Allowed absolute deviation from 1.0.
        tolerance: f64,
    },

    /// Reading the input or writing an output failed.
    #[error("failed to {op} '{}'", .path.display())]
    Io {
        /// What was being attempted, e.g. "open input".
        op: &'static str,
        /// File the operation was acting on.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl SplitError {
    /// Wrap an I/O error with the operation and path it came from.
    pub fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { op, path: path.into(), source }
    }

    /// True for proportion errors, which are raised before any file is touched.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidProportion { .. } | Self::ProportionSum { .. })
    }
}
