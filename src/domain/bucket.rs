// ============================================================
// Layer 3 — Bucket
// ============================================================
// The three destinations a line can be assigned to.
//
// A bucket is chosen by comparing one uniform draw r in [0, 1)
// against the cumulative proportions of a SplitConfig:
//
//   0 ──── train ────┬──── eval ────┬──── cv ──── 1
//                  train        train+eval
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use std::fmt;

/// One of the three split outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// Training data
    Train,
    /// Evaluation data
    Eval,
    /// Cross-validation data
    Cv,
}

impl Bucket {
    /// All buckets in output order (train, eval, cv).
    pub const ALL: [Bucket; 3] = [Bucket::Train, Bucket::Eval, Bucket::Cv];

    /// Position of this bucket in `ALL` and in any `[T; 3]`
    /// indexed by bucket.
    pub fn index(self) -> usize {
        match self {
            Bucket::Train => 0,
            Bucket::Eval  => 1,
            Bucket::Cv    => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Bucket::Train => "train",
            Bucket::Eval  => "eval",
            Bucket::Cv    => "cv",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
