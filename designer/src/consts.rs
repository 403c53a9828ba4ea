//! Shared constants for the designer crate.

// ── Drag and drop ───────────────────────────────────────────────

/// Drop-target id of the page canvas itself. Dropping here places a widget at the root.
pub const CANVAS_DROP_ID: &str = "canvas";

/// Prefix of palette item ids (`w-button`, `w-section`, ...). Persisted widgets use numeric ids.
pub const PALETTE_PREFIX: &str = "w-";

/// Pointer travel in CSS pixels before a pointer-down becomes a drag.
pub const DRAG_ACTIVATION_DISTANCE_PX: f64 = 8.0;

// ── Canvas ──────────────────────────────────────────────────────

/// Placeholder shown on an empty canvas in edit mode.
pub const EMPTY_CANVAS_HINT: &str = "Drag Section or Widgets";

/// Placeholder shown inside an empty section or column in edit mode.
pub const EMPTY_CONTAINER_HINT: &str = "Drop widgets here";
