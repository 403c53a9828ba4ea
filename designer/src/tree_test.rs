use super::*;
use crate::widget::{PropertyList, WidgetKind};

fn w(id: WidgetId, kind: WidgetKind, parent: Option<WidgetId>, order: i64) -> Widget {
    Widget {
        id: Some(id),
        kind,
        label: format!("w{id}"),
        parent_id: parent,
        order,
        properties: PropertyList::new(),
    }
}

fn ids(widgets: &[&Widget]) -> Vec<WidgetId> {
    widgets.iter().filter_map(|w| w.id).collect()
}

fn sample() -> WidgetTree {
    let mut tree = WidgetTree::new();
    tree.load(vec![
        w(1, WidgetKind::Section, None, 0),
        w(2, WidgetKind::Section, None, 1),
        w(3, WidgetKind::Button, Some(1), 0),
        w(4, WidgetKind::Column, Some(1), 1),
        w(5, WidgetKind::Label, Some(4), 0),
    ]);
    tree
}

// =============================================================
// roots / children
// =============================================================

#[test]
fn roots_are_exactly_the_parentless_widgets() {
    let tree = sample();
    assert_eq!(ids(&tree.roots()), vec![1, 2]);
    assert_eq!(ids(&tree.roots()), ids(&tree.roots()));
}

#[test]
fn children_are_direct_only_and_exclude_self() {
    let tree = sample();
    assert_eq!(ids(&tree.children(1)), vec![3, 4]);
    assert_eq!(ids(&tree.children(4)), vec![5]);
    assert!(tree.children(3).is_empty());
    assert!(tree.children(99).is_empty());
}

#[test]
fn siblings_sort_by_order_ascending() {
    let mut tree = WidgetTree::new();
    tree.load(vec![
        w(10, WidgetKind::Button, Some(1), 2),
        w(11, WidgetKind::Button, Some(1), 1),
        w(12, WidgetKind::Button, Some(1), 0),
    ]);
    assert_eq!(ids(&tree.children(1)), vec![12, 11, 10]);
}

#[test]
fn equal_orders_keep_collection_order() {
    let mut tree = WidgetTree::new();
    tree.load(vec![
        w(7, WidgetKind::Label, None, 0),
        w(3, WidgetKind::Label, None, 0),
        w(5, WidgetKind::Label, None, 0),
    ]);
    assert_eq!(ids(&tree.roots()), vec![7, 3, 5]);
}

#[test]
fn orders_need_not_be_contiguous() {
    let mut tree = WidgetTree::new();
    tree.load(vec![w(1, WidgetKind::Label, None, 40), w(2, WidgetKind::Label, None, -3)]);
    assert_eq!(ids(&tree.roots()), vec![2, 1]);
}

// =============================================================
// insert / update / remove
// =============================================================

#[test]
fn insert_rejects_unsaved_widget() {
    let mut tree = WidgetTree::new();
    let mut unsaved = w(1, WidgetKind::Button, None, 0);
    unsaved.id = None;
    assert_eq!(tree.insert(unsaved), Err(TreeError::MissingId));
    assert!(tree.is_empty());
}

#[test]
fn insert_replaces_same_id_and_reindexes() {
    let mut tree = sample();
    tree.insert(w(3, WidgetKind::Button, Some(2), 0)).expect("has id");
    assert_eq!(tree.len(), 5);
    assert_eq!(ids(&tree.children(1)), vec![4]);
    assert_eq!(ids(&tree.children(2)), vec![3]);
}

#[test]
fn update_moves_between_parents() {
    let mut tree = sample();
    let patch = WidgetPatch { parent_id: Some(Some(2)), order: Some(0), ..Default::default() };
    assert!(tree.update(3, &patch));
    assert_eq!(ids(&tree.children(1)), vec![4]);
    assert_eq!(ids(&tree.children(2)), vec![3]);
    assert_eq!(tree.get(3).and_then(|w| w.parent_id), Some(2));
}

#[test]
fn update_reorders_within_parent() {
    let mut tree = sample();
    let patch = WidgetPatch { order: Some(9), ..Default::default() };
    assert!(tree.update(3, &patch));
    assert_eq!(ids(&tree.children(1)), vec![4, 3]);
}

#[test]
fn update_missing_is_noop() {
    let mut tree = sample();
    let patch = WidgetPatch { label: Some("x".to_owned()), ..Default::default() };
    assert!(!tree.update(42, &patch));
    assert_eq!(tree.len(), 5);
}

#[test]
fn remove_does_not_cascade() {
    let mut tree = sample();
    let removed = tree.remove(4).expect("present");
    assert_eq!(removed.id, Some(4));
    assert!(tree.contains(5));
    assert_eq!(ids(&tree.children(1)), vec![3]);
    assert!(tree.remove(4).is_none());
}

#[test]
fn load_replaces_everything() {
    let mut tree = sample();
    tree.load(vec![w(8, WidgetKind::Grid, None, 0)]);
    assert_eq!(tree.len(), 1);
    assert_eq!(ids(&tree.roots()), vec![8]);
    assert!(tree.children(1).is_empty());
}

// =============================================================
// Queries
// =============================================================

#[test]
fn sibling_count_covers_root_and_containers() {
    let tree = sample();
    assert_eq!(tree.sibling_count(None), 2);
    assert_eq!(tree.sibling_count(Some(1)), 2);
    assert_eq!(tree.sibling_count(Some(2)), 0);
}

#[test]
fn is_descendant_walks_ancestors() {
    let tree = sample();
    assert!(tree.is_descendant(5, 1));
    assert!(tree.is_descendant(5, 5));
    assert!(!tree.is_descendant(1, 5));
    assert!(!tree.is_descendant(2, 1));
}

#[test]
fn is_descendant_terminates_on_cyclic_data() {
    let mut tree = WidgetTree::new();
    tree.load(vec![w(1, WidgetKind::Section, Some(2), 0), w(2, WidgetKind::Section, Some(1), 0)]);
    assert!(!tree.is_descendant(1, 3));
    assert!(tree.roots().is_empty());
}
