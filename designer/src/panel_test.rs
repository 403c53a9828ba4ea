use super::*;
use crate::schema::InputKind;
use crate::widget::PropertyList;

fn button(props: &[(&str, &str)]) -> Widget {
    Widget {
        id: Some(4),
        kind: WidgetKind::Button,
        label: "BUTTON".to_owned(),
        parent_id: None,
        order: 0,
        properties: props.iter().map(|(n, v)| ((*n).to_owned(), (*v).to_owned())).collect(),
    }
}

#[test]
fn fields_follow_schema_and_prefer_stored_values() {
    let fields = fields_for(&button(&[("backgroundColor", "#112233")]));
    let names: Vec<_> = fields.iter().map(|f| f.definition.name).collect();
    assert_eq!(names, vec!["backgroundColor", "textColor", "fontSize", "padding", "borderRadius"]);
    assert_eq!(fields[0].value, "#112233");
    assert!(!fields[0].is_default);
    assert_eq!(fields[1].value, "#ffffff");
    assert!(fields[1].is_default);
    assert_eq!(fields[0].definition.input, InputKind::Color);
}

#[test]
fn empty_stored_value_shows_default() {
    let fields = fields_for(&button(&[("fontSize", "")]));
    assert_eq!(fields[2].value, "14");
    assert!(fields[2].is_default);
}

#[test]
fn panel_requires_a_persisted_widget() {
    let mut widget = button(&[]);
    assert_eq!(panel_for(&widget).map(|p| p.id), Some(4));
    widget.id = None;
    assert!(panel_for(&widget).is_none());
}

#[test]
fn grid_panel_has_no_fields() {
    let grid = Widget {
        id: Some(1),
        kind: WidgetKind::Grid,
        label: "GRID".to_owned(),
        parent_id: None,
        order: 0,
        properties: PropertyList::new(),
    };
    assert!(panel_for(&grid).map(|p| p.fields).unwrap_or_default().is_empty());
}

#[test]
fn edit_replaces_existing_property_in_place() {
    let widget = button(&[("padding", "8"), ("backgroundColor", "#000000")]);
    let patch = apply_edit(&widget, "padding", "12").expect("valid edit");
    let props = patch.properties.expect("properties patched");
    let pairs: Vec<_> = props.iter().map(|p| (p.name.as_str(), p.value.as_str())).collect();
    assert_eq!(pairs, vec![("padding", "12"), ("backgroundColor", "#000000")]);
    assert_eq!(patch.label, None);
    assert_eq!(patch.parent_id, None);
}

#[test]
fn edit_appends_missing_property() {
    let widget = button(&[]);
    let patch = apply_edit(&widget, "textColor", "#abc").expect("valid edit");
    assert_eq!(patch.properties.and_then(|p| p.get("textColor").map(str::to_owned)), Some("#abc".to_owned()));
}

#[test]
fn edit_rejects_invalid_values() {
    let widget = button(&[]);
    assert_eq!(
        apply_edit(&widget, "backgroundColor", "red"),
        Err(PropertyError::InvalidColor { value: "red".to_owned() })
    );
    assert_eq!(
        apply_edit(&widget, "fontWeight", "bold"),
        Err(PropertyError::UnknownProperty { kind: "Button", name: "fontWeight".to_owned() })
    );
}

#[test]
fn rename_only_touches_label() {
    let patch = rename("Submit");
    assert_eq!(patch.label.as_deref(), Some("Submit"));
    assert!(patch.properties.is_none());
    assert!(patch.order.is_none());
}
