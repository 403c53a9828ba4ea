//! Drag and drop: gesture state machine and drop planning.
//!
//! DESIGN
//! ======
//! A drag starts as [`DragPhase::Pending`] on pointer-down and only becomes
//! [`DragPhase::Dragging`] once the pointer has travelled
//! [`DRAG_ACTIVATION_DISTANCE_PX`]. Releasing before that is a click, so
//! selecting a widget never moves it by accident.
//!
//! Drop handling is split from the gesture: [`plan_drop`] is a pure function
//! of the tree, the dragged source and the hovered target that either
//! describes the model change or explains why the drop is refused. The
//! caller decides whether to apply it optimistically or wait for the backend.
//!
//! ERROR HANDLING
//! ==============
//! Every refusal is a [`DropRejection`]. Rejected drops leave the model
//! untouched; the host only logs them.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::consts::{CANVAS_DROP_ID, DRAG_ACTIVATION_DISTANCE_PX, PALETTE_PREFIX};
use crate::schema;
use crate::tree::WidgetTree;
use crate::widget::{Widget, WidgetId, WidgetKind, WidgetPatch};

/// Pointer position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// What is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    /// A palette item; dropping creates a new widget.
    Palette(WidgetKind),
    /// A widget already on the canvas; dropping reparents it.
    Existing(WidgetId),
}

impl DragSource {
    /// Parse a draggable's DOM id: `w-` prefixed palette ids or numeric widget ids.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        if id.starts_with(PALETTE_PREFIX) {
            return WidgetKind::from_palette_id(id).map(Self::Palette);
        }
        match id.parse() {
            Ok(n) => Some(Self::Existing(n)),
            Err(_) => None,
        }
    }
}

/// Where a drag was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// The page canvas; the widget lands at the root.
    Canvas,
    Widget(WidgetId),
}

impl DropTarget {
    /// Parse a droppable's DOM id: [`CANVAS_DROP_ID`] or a numeric widget id.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        if id == CANVAS_DROP_ID {
            return Some(Self::Canvas);
        }
        match id.parse() {
            Ok(n) => Some(Self::Widget(n)),
            Err(_) => None,
        }
    }

    /// Parent id a dropped widget receives.
    #[must_use]
    pub fn parent_id(self) -> Option<WidgetId> {
        match self {
            Self::Canvas => None,
            Self::Widget(id) => Some(id),
        }
    }
}

/// Why a drop was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropRejection {
    #[error("drops are disabled in preview mode")]
    NotEditing,
    #[error("no drag in progress")]
    NotDragging,
    #[error("dropped outside any target")]
    NoTarget,
    #[error("widget {0} cannot hold children")]
    NotAContainer(WidgetId),
    #[error("drop target {0} is not on this page")]
    UnknownTarget(WidgetId),
    #[error("dragged widget {0} is not on this page")]
    UnknownSource(WidgetId),
    #[error("cannot move widget {moved} inside itself (target {target})")]
    Cycle { moved: WidgetId, target: WidgetId },
}

// =============================================================
// Gesture state machine
// =============================================================

/// Current state of the drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Pointer is down on a draggable but has not moved far enough.
    Pending { source: DragSource, origin: Point },
    /// Drag is active.
    Dragging { source: DragSource, origin: Point, current: Point },
}

/// Tracks one drag gesture from pointer-down to release.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    phase: DragPhase,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Source of the active drag, if the gesture has been activated.
    #[must_use]
    pub fn active_source(&self) -> Option<DragSource> {
        match self.phase {
            DragPhase::Dragging { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Pointer-down on a draggable. Replaces any gesture in progress.
    pub fn press(&mut self, source: DragSource, at: Point) {
        self.phase = DragPhase::Pending { source, origin: at };
    }

    /// Pointer move. Returns `true` on the move that activates the drag.
    pub fn move_to(&mut self, at: Point) -> bool {
        match &mut self.phase {
            DragPhase::Idle => false,
            DragPhase::Pending { source, origin } => {
                let (source, origin) = (*source, *origin);
                if origin.distance(at) < DRAG_ACTIVATION_DISTANCE_PX {
                    return false;
                }
                self.phase = DragPhase::Dragging { source, origin, current: at };
                true
            }
            DragPhase::Dragging { current, .. } => {
                *current = at;
                false
            }
        }
    }

    /// Pointer-up. Returns the dragged source if the drag was active; a
    /// release while still pending is a click and returns `None`.
    pub fn release(&mut self) -> Option<DragSource> {
        let source = self.active_source();
        self.phase = DragPhase::Idle;
        source
    }

    /// Abandon the gesture without dropping.
    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
    }
}

// =============================================================
// Drop planning
// =============================================================

/// Model change a valid drop produces.
#[derive(Debug, Clone, PartialEq)]
pub enum DropPlan {
    /// Unsaved widget to submit to the backend.
    Create(Widget),
    /// Reparent an existing widget.
    Move { id: WidgetId, patch: WidgetPatch },
}

/// Decide what dropping `source` on `target` does to `tree`.
///
/// The new sibling rank is the number of widgets currently under the target,
/// which places the widget last among its new siblings.
///
/// # Errors
///
/// Returns a [`DropRejection`] when there is no target, the target is not on
/// the page or cannot hold children, the dragged widget is unknown, or the
/// move would put a widget inside itself or one of its descendants.
pub fn plan_drop(
    tree: &WidgetTree,
    source: DragSource,
    target: Option<DropTarget>,
) -> Result<DropPlan, DropRejection> {
    let target = target.ok_or(DropRejection::NoTarget)?;
    let parent_id = target.parent_id();
    if let Some(tid) = parent_id {
        let parent = tree.get(tid).ok_or(DropRejection::UnknownTarget(tid))?;
        if !parent.kind.is_container() {
            return Err(DropRejection::NotAContainer(tid));
        }
    }
    let order = i64::try_from(tree.sibling_count(parent_id)).unwrap_or(i64::MAX);

    match source {
        DragSource::Palette(kind) => Ok(DropPlan::Create(Widget {
            id: None,
            kind,
            label: kind.default_label(),
            parent_id,
            order,
            properties: schema::default_properties(kind),
        })),
        DragSource::Existing(id) => {
            if !tree.contains(id) {
                return Err(DropRejection::UnknownSource(id));
            }
            if let Some(tid) = parent_id {
                if tree.is_descendant(tid, id) {
                    return Err(DropRejection::Cycle { moved: id, target: tid });
                }
            }
            Ok(DropPlan::Move {
                id,
                patch: WidgetPatch { parent_id: Some(parent_id), order: Some(order), ..Default::default() },
            })
        }
    }
}
