// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types describing a split, with no file I/O:
// what the proportions are, which bucket a draw maps to,
// what was counted, and what can go wrong.
//
// Everything here is unit-testable without touching disk.

// The three output destinations
pub mod bucket;

// Validated train / eval / cv proportions
pub mod split_config;

// Per-bucket line and byte counts
pub mod split_report;

// Typed errors (configuration vs I/O)
pub mod error;

// Abstractions the data layer writes through
pub mod traits;
