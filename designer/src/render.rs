//! Canvas renderer: widget tree → plain visual tree.
//!
//! DESIGN
//! ======
//! Rendering is a depth-first walk from the roots that produces a
//! [`CanvasView`] of [`VisualNode`]s. The output is plain data with
//! `PartialEq`, so the host can compare successive renders and identical
//! input always yields an identical view. The host maps nodes to DOM; no
//! browser types appear here.
//!
//! Only container kinds recurse. Edit mode adds the designer affordances
//! (headers, type badges, drop-zone flags, selection, empty-state hints);
//! preview mode drops all of them and enables form controls.
//!
//! Loaded data is not guaranteed acyclic, so the walk tracks visited ids and
//! never emits a widget twice.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::collections::HashSet;

use crate::consts::{EMPTY_CANVAS_HINT, EMPTY_CONTAINER_HINT};
use crate::style::{self, StyleBag};
use crate::tree::WidgetTree;
use crate::widget::{Widget, WidgetId, WidgetKind};

/// Whether the canvas is being designed or previewed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    Edit,
    Preview,
}

impl RenderMode {
    #[must_use]
    pub fn is_edit(self) -> bool {
        self == Self::Edit
    }
}

/// Rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasView {
    pub mode: RenderMode,
    pub nodes: Vec<VisualNode>,
    /// Hint shown on an empty canvas in edit mode.
    pub placeholder: Option<&'static str>,
}

/// One rendered widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualNode {
    pub id: WidgetId,
    pub kind: WidgetKind,
    /// Highlighted as the current selection. Always `false` in preview.
    pub selected: bool,
    /// Type badge (palette id) shown above leaf widgets in edit mode.
    pub badge: Option<&'static str>,
    /// Accepts drops. Only containers in edit mode.
    pub drop_zone: bool,
    /// Inline CSS of the widget's outer box.
    pub style: String,
    pub body: Body,
}

/// Kind-specific content of a [`VisualNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Container {
        /// Label row shown in edit mode.
        header: Option<String>,
        /// Inner layout CSS (responsive layouts only).
        layout: Option<String>,
        children: Vec<VisualNode>,
        /// Hint shown in an empty section or column in edit mode.
        placeholder: Option<&'static str>,
    },
    Button {
        text: String,
        style: String,
    },
    Input {
        placeholder: String,
        style: String,
        enabled: bool,
    },
    Label {
        text: String,
        style: String,
    },
    Table {
        title: String,
        header_style: String,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

// =============================================================
// Entry point
// =============================================================

/// Render every widget reachable from the roots of `tree`.
#[must_use]
pub fn render(tree: &WidgetTree, selected: Option<WidgetId>, mode: RenderMode) -> CanvasView {
    let mut walker = Walker { tree, selected, mode, visited: HashSet::new() };
    let nodes: Vec<VisualNode> = tree.roots().into_iter().filter_map(|w| walker.node(w)).collect();
    let placeholder = (nodes.is_empty() && mode.is_edit()).then_some(EMPTY_CANVAS_HINT);
    CanvasView { mode, nodes, placeholder }
}

struct Walker<'a> {
    tree: &'a WidgetTree,
    selected: Option<WidgetId>,
    mode: RenderMode,
    visited: HashSet<WidgetId>,
}

impl Walker<'_> {
    fn node(&mut self, widget: &Widget) -> Option<VisualNode> {
        let id = widget.id?;
        if !self.visited.insert(id) {
            return None;
        }
        let edit = self.mode.is_edit();
        let bag = style::resolve(widget);
        let (style, body) = match widget.kind {
            WidgetKind::Section => (bag.to_css(), self.container(widget, None, true)),
            WidgetKind::Column => (column_css(&bag), self.container(widget, None, true)),
            WidgetKind::ResponsiveLayout => {
                let layout = style::layout_style(&bag);
                (bag.to_css(), self.container(widget, Some(layout), false))
            }
            WidgetKind::Grid => (grid_css(&bag), self.container(widget, None, false)),
            WidgetKind::Button => (bag.to_css(), button(widget, &bag)),
            WidgetKind::Input => (bag.to_css(), input(widget, &bag, !edit)),
            WidgetKind::Label => (bag.to_css(), label(widget, &bag)),
            WidgetKind::Table => (bag.to_css(), table(widget, &bag)),
        };
        Some(VisualNode {
            id,
            kind: widget.kind,
            selected: edit && self.selected == Some(id),
            badge: (edit && !widget.kind.is_container()).then(|| widget.kind.palette_id()),
            drop_zone: edit && widget.kind.is_container(),
            style,
            body,
        })
    }

    fn container(&mut self, widget: &Widget, layout: Option<String>, hint_when_empty: bool) -> Body {
        let edit = self.mode.is_edit();
        let children: Vec<VisualNode> = match widget.id {
            Some(id) => {
                let tree = self.tree;
                tree.children(id).into_iter().filter_map(|c| self.node(c)).collect()
            }
            None => Vec::new(),
        };
        let header = match widget.kind {
            WidgetKind::Grid => None,
            _ if edit => Some(non_empty(&widget.label, widget.kind.display_name())),
            _ => None,
        };
        let placeholder = (edit && hint_when_empty && children.is_empty()).then_some(EMPTY_CONTAINER_HINT);
        Body::Container { header, layout, children, placeholder }
    }
}

// =============================================================
// Per-kind output
// =============================================================

fn column_css(bag: &StyleBag) -> String {
    let background = bag.background_color.as_deref().unwrap_or("transparent");
    let padding = bag.padding.as_deref().unwrap_or("8px");
    format!("background-color: {background}; padding: {padding}; width: 100%")
}

fn grid_css(bag: &StyleBag) -> String {
    match &bag.border_color {
        Some(color) => format!("border: 1px dashed {color}"),
        None => "border: 1px dashed".to_owned(),
    }
}

fn button(widget: &Widget, bag: &StyleBag) -> Body {
    let background = bag.background_color.as_deref().unwrap_or("#000000");
    let color = bag.text_color.as_deref().unwrap_or("#ffffff");
    Body::Button {
        text: widget.label.clone(),
        style: format!("background-color: {background}; color: {color}"),
    }
}

fn input(widget: &Widget, bag: &StyleBag, enabled: bool) -> Body {
    let background = bag.background_color.as_deref().unwrap_or("#1a1a1a");
    let color = bag.text_color.as_deref().unwrap_or("#ffffff");
    let border = bag.border_color.as_deref().unwrap_or("#333333");
    Body::Input {
        placeholder: widget.label.clone(),
        style: format!("background-color: {background}; color: {color}; border-color: {border}"),
        enabled,
    }
}

fn label(widget: &Widget, bag: &StyleBag) -> Body {
    let mut style = format!("font-size: {}", bag.font_size.as_deref().unwrap_or("14px"));
    if let Some(color) = &bag.text_color {
        style.push_str(&format!("; color: {color}"));
    }
    if let Some(weight) = &bag.font_weight {
        style.push_str(&format!("; font-weight: {weight}"));
    }
    Body::Label { text: non_empty(&widget.label, "Label"), style }
}

fn table(widget: &Widget, bag: &StyleBag) -> Body {
    let header_style = bag
        .header_background_color
        .as_ref()
        .map(|c| format!("background-color: {c}"))
        .unwrap_or_default();
    Body::Table {
        title: widget.label.clone(),
        header_style,
        columns: vec!["Column 1".to_owned(), "Column 2".to_owned()],
        rows: vec![vec!["Data".to_owned(), "Data".to_owned()]],
    }
}

fn non_empty(value: &str, fallback: &str) -> String {
    if value.is_empty() { fallback.to_owned() } else { value.to_owned() }
}
