//! Common type aliases used throughout the engine.

/// Search depth in plies.
pub type Depth = u32;

/// Evaluation or search score.
pub type Score = i32;
