//! Designer façade: tree, selection, render mode and drag gesture in one
//! testable value.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser host forwards pointer events and panel edits to
//! [`DesignerCore`] and receives [`Action`]s describing what must be sent to
//! the backend. The core never performs I/O. Creation is the only mutation
//! that waits for the backend: the host submits [`Action::Create`] and feeds
//! the persisted widget back through [`DesignerCore::confirm_created`].
//! Reparenting and property edits are applied to the model immediately and
//! the host syncs them in the background without rollback.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wire::WidgetRecord;

use crate::drag::{self, DragController, DragPhase, DragSource, DropPlan, DropRejection, DropTarget, Point};
use crate::panel::{self, PanelModel};
use crate::render::{self, CanvasView, RenderMode};
use crate::schema::PropertyError;
use crate::tree::{TreeError, WidgetTree};
use crate::widget::{RecordError, Widget, WidgetId, WidgetPatch};

/// Backend work requested by the core.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    /// Persist a new widget and report it back via `confirm_created`.
    Create(Widget),
    /// Upsert the widget's current state.
    Sync(Widget),
    /// Delete the widget, then reload the page's widgets.
    Delete(WidgetId),
}

/// All designer state that does not depend on the browser.
#[derive(Debug, Clone, Default)]
pub struct DesignerCore {
    pub tree: WidgetTree,
    selected: Option<WidgetId>,
    mode: RenderMode,
    drag: DragController,
    /// Set when a release ended an active drag. The browser follows such a
    /// release with a click that must not change the selection.
    after_drag: bool,
}

impl DesignerCore {
    #[must_use]
    pub fn new(mode: RenderMode) -> Self {
        Self { mode, ..Self::default() }
    }

    // --- Data inputs ---

    /// Replace the page's widgets with backend records. Records of unknown
    /// type are skipped and returned so the host can log them.
    pub fn load(&mut self, records: Vec<WidgetRecord>) -> Vec<RecordError> {
        let mut skipped = Vec::new();
        let mut widgets = Vec::with_capacity(records.len());
        for record in records {
            match Widget::from_record(record) {
                Ok(widget) => widgets.push(widget),
                Err(e) => skipped.push(e),
            }
        }
        self.tree.load(widgets);
        if self.selected.is_some_and(|id| !self.tree.contains(id)) {
            self.selected = None;
        }
        skipped
    }

    /// Insert the backend's copy of a created widget and select it.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingId`] if the backend did not assign an id.
    pub fn confirm_created(&mut self, widget: Widget) -> Result<(), TreeError> {
        let id = widget.id;
        self.tree.insert(widget)?;
        if self.mode.is_edit() {
            self.selected = id;
        }
        Ok(())
    }

    // --- Mode / selection ---

    #[must_use]
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Switch modes. Entering preview drops the selection and any gesture.
    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
        if !mode.is_edit() {
            self.selected = None;
            self.drag.cancel();
        }
    }

    /// Select a widget. Ignored in preview mode and for unknown ids.
    pub fn select(&mut self, id: WidgetId) {
        if self.mode.is_edit() && self.tree.contains(id) {
            self.selected = Some(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Click on widget `id`. Ignored when it trails a completed drag.
    pub fn click_widget(&mut self, id: WidgetId) {
        if !std::mem::take(&mut self.after_drag) {
            self.select(id);
        }
    }

    /// Click on empty canvas. Ignored when it trails a completed drag.
    pub fn click_canvas(&mut self) {
        if !std::mem::take(&mut self.after_drag) {
            self.clear_selection();
        }
    }

    #[must_use]
    pub fn selection(&self) -> Option<WidgetId> {
        self.selected
    }

    #[must_use]
    pub fn selected_widget(&self) -> Option<&Widget> {
        self.selected.and_then(|id| self.tree.get(id))
    }

    /// Properties panel for the selection, if any.
    #[must_use]
    pub fn panel(&self) -> Option<PanelModel> {
        self.selected_widget().and_then(panel::panel_for)
    }

    // --- Drag and drop ---

    /// Any pointer-down starts a fresh gesture, so a click that never
    /// followed an earlier drag is not swallowed later.
    pub fn pointer_down(&mut self) {
        self.after_drag = false;
    }

    /// Pointer-down on a draggable. Ignored in preview mode.
    pub fn begin_drag(&mut self, source: DragSource, at: Point) {
        self.after_drag = false;
        if self.mode.is_edit() {
            self.drag.press(source, at);
        }
    }

    /// Pointer move. Returns `true` when the drag activates.
    pub fn drag_move(&mut self, at: Point) -> bool {
        self.drag.move_to(at)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Pointer-up over `target`.
    ///
    /// A release before the drag activated is a click and yields
    /// [`Action::None`]. Dropping a palette item yields [`Action::Create`]
    /// without touching the model; moving a widget updates the model and
    /// yields [`Action::Sync`].
    ///
    /// # Errors
    ///
    /// Returns [`DropRejection::NotEditing`] in preview mode,
    /// [`DropRejection::NotDragging`] when no gesture was started, and any
    /// rejection from [`drag::plan_drop`]. The model is unchanged on error.
    pub fn end_drag(&mut self, target: Option<DropTarget>) -> Result<Action, DropRejection> {
        if !self.mode.is_edit() {
            self.drag.cancel();
            return Err(DropRejection::NotEditing);
        }
        let was_idle = self.drag.phase() == DragPhase::Idle;
        self.after_drag = self.drag.is_dragging();
        let Some(source) = self.drag.release() else {
            return if was_idle { Err(DropRejection::NotDragging) } else { Ok(Action::None) };
        };
        match drag::plan_drop(&self.tree, source, target)? {
            DropPlan::Create(widget) => Ok(Action::Create(widget)),
            DropPlan::Move { id, patch } => Ok(self.apply(id, &patch)),
        }
    }

    // --- Properties panel ---

    /// Set one property of widget `id`. Unknown ids yield [`Action::None`].
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the kind does not declare `name` or the
    /// value fails validation; the model is unchanged.
    pub fn edit_property(&mut self, id: WidgetId, name: &str, value: &str) -> Result<Action, PropertyError> {
        let Some(widget) = self.tree.get(id) else {
            return Ok(Action::None);
        };
        let patch = panel::apply_edit(widget, name, value)?;
        Ok(self.apply(id, &patch))
    }

    /// Rename widget `id`. Unknown ids yield [`Action::None`].
    pub fn edit_label(&mut self, id: WidgetId, label: &str) -> Action {
        self.apply(id, &panel::rename(label))
    }

    /// Ask the host to delete widget `id`. The model is left as is; the host
    /// reloads the page's widgets once the backend confirms.
    #[must_use]
    pub fn request_delete(&self, id: WidgetId) -> Action {
        if self.tree.contains(id) { Action::Delete(id) } else { Action::None }
    }

    fn apply(&mut self, id: WidgetId, patch: &WidgetPatch) -> Action {
        if !self.tree.update(id, patch) {
            return Action::None;
        }
        self.tree.get(id).cloned().map_or(Action::None, Action::Sync)
    }

    // --- Output ---

    #[must_use]
    pub fn render(&self) -> CanvasView {
        render::render(&self.tree, self.selected, self.mode)
    }
}
