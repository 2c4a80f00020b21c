// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
//   output_sinks.rs — the three buffered output files
//   report_store.rs — optional JSON summary of a run

/// Train / eval / cv output files
pub mod output_sinks;

/// JSON split report writer
pub mod report_store;
