//! Widget tree model: an arena of persisted widgets plus a children index.
//!
//! DESIGN
//! ======
//! Widgets live in a flat map keyed by backend id. The parent → children
//! relation is kept as a second map from `Option<WidgetId>` (where `None` is
//! the canvas root) to a sibling list sorted by `(order, insertion sequence)`.
//! Every mutation that can move a widget updates that index in place, so
//! [`WidgetTree::roots`] and [`WidgetTree::children`] never scan the arena.
//!
//! The tree does not enforce acyclicity; [`WidgetTree::is_descendant`] lets
//! the drop planner reject moves that would create a cycle before they reach
//! the model.
//!
//! ERROR HANDLING
//! ==============
//! Only widgets with a backend id can live here, so [`WidgetTree::insert`]
//! rejects unsaved widgets. Updates and removals of unknown ids are no-ops
//! reported through their return values.

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;

use std::collections::HashMap;

use crate::widget::{Widget, WidgetId, WidgetPatch};

/// Error inserting a widget into the tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("widget has no id; only persisted widgets can be inserted")]
    MissingId,
}

#[derive(Debug, Clone)]
struct Entry {
    widget: Widget,
    seq: u64,
}

/// All widgets of one page.
#[derive(Debug, Clone, Default)]
pub struct WidgetTree {
    entries: HashMap<WidgetId, Entry>,
    children: HashMap<Option<WidgetId>, Vec<WidgetId>>,
    next_seq: u64,
}

impl WidgetTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole widget set. Collection order breaks `order` ties.
    /// Widgets without an id are skipped.
    pub fn load(&mut self, widgets: impl IntoIterator<Item = Widget>) {
        self.entries.clear();
        self.children.clear();
        self.next_seq = 0;
        for widget in widgets {
            if let Some(id) = widget.id {
                self.place(id, widget);
            }
        }
    }

    /// Insert a persisted widget, replacing any widget with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingId`] when `widget.id` is `None`.
    pub fn insert(&mut self, widget: Widget) -> Result<(), TreeError> {
        let id = widget.id.ok_or(TreeError::MissingId)?;
        self.place(id, widget);
        Ok(())
    }

    fn place(&mut self, id: WidgetId, widget: Widget) {
        let seq = match self.entries.remove(&id) {
            Some(old) => {
                self.unlink(id, old.widget.parent_id);
                old.seq
            }
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                seq
            }
        };
        let parent = widget.parent_id;
        self.entries.insert(id, Entry { widget, seq });
        self.link(id, parent);
    }

    /// Apply `patch` to the widget `id`. Returns `false` if it does not exist.
    pub fn update(&mut self, id: WidgetId, patch: &WidgetPatch) -> bool {
        let Some(entry) = self.entries.get_mut(&id) else {
            return false;
        };
        let old_parent = entry.widget.parent_id;
        let old_order = entry.widget.order;
        patch.apply_to(&mut entry.widget);
        let new_parent = entry.widget.parent_id;
        if new_parent != old_parent || entry.widget.order != old_order {
            self.unlink(id, old_parent);
            self.link(id, new_parent);
        }
        true
    }

    /// Remove the widget `id`. Its children keep pointing at the removed id
    /// and drop out of the rendered forest until the page is reloaded.
    pub fn remove(&mut self, id: WidgetId) -> Option<Widget> {
        let entry = self.entries.remove(&id)?;
        self.unlink(id, entry.widget.parent_id);
        Some(entry.widget)
    }

    #[must_use]
    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.entries.get(&id).map(|e| &e.widget)
    }

    #[must_use]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Widgets with no parent, in sibling order.
    #[must_use]
    pub fn roots(&self) -> Vec<&Widget> {
        self.siblings(None)
    }

    /// Direct children of `id`, in sibling order.
    #[must_use]
    pub fn children(&self, id: WidgetId) -> Vec<&Widget> {
        self.siblings(Some(id))
    }

    /// Number of widgets directly under `parent` (`None` for the root).
    #[must_use]
    pub fn sibling_count(&self, parent: Option<WidgetId>) -> usize {
        self.children.get(&parent).map_or(0, Vec::len)
    }

    /// Whether `candidate` is `ancestor` itself or lies anywhere beneath it.
    #[must_use]
    pub fn is_descendant(&self, candidate: WidgetId, ancestor: WidgetId) -> bool {
        let mut cursor = Some(candidate);
        let mut steps = 0;
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            // Bounded walk; loaded data may already contain a cycle.
            steps += 1;
            if steps > self.entries.len() {
                return false;
            }
            cursor = self.get(id).and_then(|w| w.parent_id);
        }
        false
    }

    /// All widgets in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Widget> {
        self.entries.values().map(|e| &e.widget)
    }

    fn siblings(&self, parent: Option<WidgetId>) -> Vec<&Widget> {
        self.children
            .get(&parent)
            .map(|ids| ids.iter().filter_map(|id| self.get(*id)).collect())
            .unwrap_or_default()
    }

    fn sort_key(&self, id: WidgetId) -> (i64, u64) {
        self.entries.get(&id).map_or((i64::MAX, u64::MAX), |e| (e.widget.order, e.seq))
    }

    fn link(&mut self, id: WidgetId, parent: Option<WidgetId>) {
        let key = self.sort_key(id);
        let mut list = self.children.remove(&parent).unwrap_or_default();
        let at = list.partition_point(|other| self.sort_key(*other) < key);
        list.insert(at, id);
        self.children.insert(parent, list);
    }

    fn unlink(&mut self, id: WidgetId, parent: Option<WidgetId>) {
        if let Some(list) = self.children.get_mut(&parent) {
            list.retain(|other| *other != id);
            if list.is_empty() {
                self.children.remove(&parent);
            }
        }
    }
}
