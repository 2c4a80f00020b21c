// ============================================================
// Layer 3 — Core Traits
// ============================================================
// The splitter only needs "somewhere to put a line for a given
// bucket". Programming against this trait lets the same loop
// write to real files (infra::output_sinks::OutputSinks) or to
// in-memory buffers in tests.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::bucket::Bucket;
use crate::domain::error::SplitResult;

// ─── LineSink ─────────────────────────────────────────────────────────────────
/// A set of three append-only destinations, one per bucket.
pub trait LineSink {
    /// Append `line` verbatim to the destination for `bucket`.
    fn write_line(&mut self, bucket: Bucket, line: &[u8]) -> SplitResult<()>;
}

/// In-memory sink: index 0 = train, 1 = eval, 2 = cv
impl LineSink for [Vec<u8>; 3] {
    fn write_line(&mut self, bucket: Bucket, line: &[u8]) -> SplitResult<()> {
        self[bucket.index()].extend_from_slice(line);
        Ok(())
    }
}
