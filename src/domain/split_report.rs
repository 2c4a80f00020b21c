// ============================================================
// Layer 3 — Split Report
// ============================================================
// Per-bucket tallies collected while lines are distributed.
// Serialisable so it can be written out as JSON next to the
// split files (see infra::report_store).

use serde::Serialize;

use crate::domain::bucket::Bucket;

/// Counts for one output bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketTally {
    pub lines: u64,
    pub bytes: u64,
}

/// Outcome of a completed split.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    pub train: BucketTally,
    pub eval:  BucketTally,
    pub cv:    BucketTally,
}

impl SplitReport {
    /// Record one line of `len` bytes written to `bucket`.
    pub fn record(&mut self, bucket: Bucket, len: usize) {
        let tally = self.tally_mut(bucket);
        tally.lines += 1;
        tally.bytes += len as u64;
    }

    pub fn tally(&self, bucket: Bucket) -> BucketTally {
        match bucket {
            Bucket::Train => self.train,
            Bucket::Eval  => self.eval,
            Bucket::Cv    => self.cv,
        }
    }

    fn tally_mut(&mut self, bucket: Bucket) -> &mut BucketTally {
        match bucket {
            Bucket::Train => &mut self.train,
            Bucket::Eval  => &mut self.eval,
            Bucket::Cv    => &mut self.cv,
        }
    }

    /// Total number of lines across all three buckets
    pub fn total_lines(&self) -> u64 {
        self.train.lines + self.eval.lines + self.cv.lines
    }

    pub fn total_bytes(&self) -> u64 {
        self.train.bytes + self.eval.bytes + self.cv.bytes
    }
}
