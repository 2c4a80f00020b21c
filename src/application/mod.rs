// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the other layers to carry out a split.
//
// Rules for this layer:
//   - No argument parsing or printing (that's Layer 1)
//   - No line handling logic (that's Layer 4)
//   - No direct file writes beyond opening the input
//     (outputs belong to Layer 6)
//   - Only workflow coordination

// The split workflow
pub mod split_use_case;
