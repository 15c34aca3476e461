//! Crate-wide constants.
//!
//! Centralizes default timings and thresholds so the config layer,
//! the engine and the tests agree on the same values.

// ============================================================================
// Gesture Timing
// ============================================================================

/// Default double-tap disambiguation window in seconds
pub const DEFAULT_TAP_WINDOW: f32 = 0.25;

/// Default distance in screen pixels before a press becomes a drag
pub const DEFAULT_DRAG_THRESHOLD: f32 = 10.0;

// ============================================================================
// Settle Animation
// ============================================================================

/// Default settle animation duration in seconds
pub const DEFAULT_SETTLE_DURATION: f32 = 0.1;

// ============================================================================
// World Space
// ============================================================================

/// Default maximum depth drift from the drag-plane depth while dragging
pub const DEFAULT_MAX_DEPTH_OFFSET: f32 = 1.0;

/// Below this, a ray is considered parallel to a plane
pub const PARALLEL_EPSILON: f32 = 1e-6;

// ============================================================================
// Profiling
// ============================================================================

/// Warn when a single drag update takes longer than this (milliseconds)
pub const SLOW_DRAG_UPDATE_MS: f64 = 4.0;
