// ============================================================
// Layer 3 — Split Configuration
// ============================================================
// The three proportions that decide where each line goes.
//
// A SplitConfig can only be built through `SplitConfig::new`,
// so holding one means the proportions have already been
// checked:
//   - every proportion is a finite number in [0, 1]
//   - |train + eval + cv - 1.0| < SUM_TOLERANCE
//
// Validation happens once, before any file is opened.
//
// Reference: Rust Book §5 (Structs), §9 (Recoverable Errors)

use serde::Serialize;

use crate::domain::bucket::Bucket;
use crate::domain::error::{SplitError, SplitResult};

/// Allowed absolute deviation of the proportion sum from 1.0
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Validated train / eval / cv proportions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitConfig {
    train: f64,
    eval:  f64,
    cv:    f64,
}

impl SplitConfig {
    /// Validate and build a config from three fractions.
    pub fn new(train: f64, eval: f64, cv: f64) -> SplitResult<Self> {
        check_range("train", train)?;
        check_range("eval",  eval)?;
        check_range("cv",    cv)?;

        let sum = train + eval + cv;
        if (sum - 1.0).abs() >= SUM_TOLERANCE {
            return Err(SplitError::ProportionSum { sum, tolerance: SUM_TOLERANCE });
        }

        Ok(Self { train, eval, cv })
    }

    pub fn train(&self) -> f64 {
        self.train
    }

    pub fn eval(&self) -> f64 {
        self.eval
    }

    pub fn cv(&self) -> f64 {
        self.cv
    }

    /// Map a uniform draw `r` in [0, 1) to its bucket.
    ///
    /// The intervals [0, train), [train, train + eval) and
    /// [train + eval, 1) cover [0, 1) without overlap, so every
    /// draw lands in exactly one bucket. Anything at or above
    /// train + eval goes to cv, which also absorbs the rounding
    /// slack allowed by SUM_TOLERANCE.
    pub fn classify(&self, r: f64) -> Bucket {
        if r < self.train {
            Bucket::Train
        } else if r < self.train + self.eval {
            Bucket::Eval
        } else {
            Bucket::Cv
        }
    }
}

fn check_range(name: &'static str, value: f64) -> SplitResult<()> {
    // NaN fails the contains() check as well
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SplitError::InvalidProportion { name, value })
    }
}
