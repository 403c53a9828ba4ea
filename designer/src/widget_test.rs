use super::*;

fn record(kind: &str) -> WidgetRecord {
    WidgetRecord {
        id: Some(5),
        page_id: 2,
        kind: kind.to_owned(),
        label: "Hero".to_owned(),
        x: 0.0,
        y: 0.0,
        parent_id: Some(1),
        widget_order: 3,
        properties: vec![
            PropertyRecord { property_name: "padding".to_owned(), property_value: "16".to_owned() },
            PropertyRecord { property_name: "padding".to_owned(), property_value: "24".to_owned() },
        ],
    }
}

// =============================================================
// WidgetKind
// =============================================================

#[test]
fn palette_ids_round_trip_for_every_kind() {
    for kind in WidgetKind::ALL {
        assert_eq!(WidgetKind::from_palette_id(kind.palette_id()), Some(kind));
    }
    assert_eq!(WidgetKind::from_palette_id("w-carousel"), None);
    assert_eq!(WidgetKind::from_palette_id("section"), None);
}

#[test]
fn only_layout_kinds_are_containers() {
    let containers: Vec<_> = WidgetKind::ALL.into_iter().filter(|k| k.is_container()).collect();
    assert_eq!(
        containers,
        vec![WidgetKind::Section, WidgetKind::ResponsiveLayout, WidgetKind::Grid, WidgetKind::Column]
    );
}

#[test]
fn default_label_upper_cases_type_name() {
    assert_eq!(WidgetKind::Button.default_label(), "BUTTON");
    assert_eq!(WidgetKind::ResponsiveLayout.default_label(), "RESPONSIVELAYOUT");
    assert_eq!(WidgetKind::ResponsiveLayout.display_name(), "Responsive Layout");
}

// =============================================================
// PropertyList
// =============================================================

#[test]
fn set_replaces_existing_and_appends_new() {
    let mut props = PropertyList::new();
    props.set("backgroundColor", "#000000");
    props.set("padding", "8");
    props.set("backgroundColor", "#112233");
    assert_eq!(props.len(), 2);
    assert_eq!(props.get("backgroundColor"), Some("#112233"));
    let names: Vec<_> = props.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["backgroundColor", "padding"]);
}

#[test]
fn get_missing_is_none() {
    assert_eq!(PropertyList::new().get("padding"), None);
    assert!(PropertyList::new().is_empty());
}

// =============================================================
// Wire conversion
// =============================================================

#[test]
fn from_record_maps_fields_and_dedupes_properties() {
    let widget = Widget::from_record(record("w-section")).expect("known kind");
    assert_eq!(widget.id, Some(5));
    assert_eq!(widget.kind, WidgetKind::Section);
    assert_eq!(widget.parent_id, Some(1));
    assert_eq!(widget.order, 3);
    assert_eq!(widget.properties.len(), 1);
    assert_eq!(widget.properties.get("padding"), Some("24"));
}

#[test]
fn from_record_rejects_unknown_kind() {
    let err = Widget::from_record(record("w-carousel")).expect_err("unknown kind");
    assert_eq!(err, RecordError::UnknownKind("w-carousel".to_owned()));
}

#[test]
fn to_record_carries_page_and_palette_id() {
    let widget = Widget::from_record(record("w-column")).expect("known kind");
    let out = widget.to_record(9);
    assert_eq!(out.page_id, 9);
    assert_eq!(out.kind, "w-column");
    assert_eq!(out.widget_order, 3);
    assert_eq!(out.properties.len(), 1);
    assert_eq!(out.x, 0.0);
}

// =============================================================
// WidgetPatch
// =============================================================

#[test]
fn patch_applies_only_present_fields() {
    let mut widget = Widget::from_record(record("w-label")).expect("known kind");
    WidgetPatch { label: Some("Title".to_owned()), ..Default::default() }.apply_to(&mut widget);
    assert_eq!(widget.label, "Title");
    assert_eq!(widget.parent_id, Some(1));

    WidgetPatch { parent_id: Some(None), order: Some(0), ..Default::default() }.apply_to(&mut widget);
    assert_eq!(widget.parent_id, None);
    assert_eq!(widget.order, 0);
    assert_eq!(widget.label, "Title");
}

#[test]
fn kind_serializes_kebab_case() {
    let json = serde_json::to_string(&WidgetKind::ResponsiveLayout).expect("serialize");
    assert_eq!(json, "\"responsive-layout\"");
    let back: WidgetKind = serde_json::from_str("\"column\"").expect("deserialize");
    assert_eq!(back, WidgetKind::Column);
}
