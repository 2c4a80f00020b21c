// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// The flow for one run:
//
//   input file
//       │
//       ▼
//   LineStream     → raw lines, terminators included
//       │
//       ▼
//   split_lines    → one random draw per line, bucket chosen
//       │
//       ▼
//   LineSink       → train / eval / cv outputs
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Lazy byte-exact line reader
pub mod line_stream;

/// Assigns each line to train, eval or cv
pub mod splitter;
