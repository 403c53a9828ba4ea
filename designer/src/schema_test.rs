use super::*;

#[test]
fn button_schema_is_ordered_with_documented_defaults() {
    let names: Vec<_> = schema_for(WidgetKind::Button).iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["backgroundColor", "textColor", "fontSize", "padding", "borderRadius"]);
    assert_eq!(default_value(WidgetKind::Button, "backgroundColor"), Some("#000000"));
    assert_eq!(default_value(WidgetKind::Button, "textColor"), Some("#ffffff"));
}

#[test]
fn grid_has_no_editable_properties() {
    assert!(schema_for(WidgetKind::Grid).is_empty());
    assert!(default_properties(WidgetKind::Grid).is_empty());
}

#[test]
fn unknown_wire_type_fails_open() {
    assert!(schema_for_type("w-carousel").is_empty());
    assert_eq!(schema_for_type("w-column").len(), 3);
}

#[test]
fn default_properties_follow_schema_order() {
    let props = default_properties(WidgetKind::ResponsiveLayout);
    let pairs: Vec<_> = props.iter().map(|p| (p.name.as_str(), p.value.as_str())).collect();
    assert_eq!(
        pairs,
        vec![("layoutType", "grid"), ("columns", "3"), ("gap", "16"), ("backgroundColor", "transparent")]
    );
}

#[test]
fn definition_lookup_is_per_kind() {
    assert!(definition(WidgetKind::Label, "fontWeight").is_some());
    assert!(definition(WidgetKind::Button, "fontWeight").is_none());
}

#[test]
fn color_validation_accepts_hex_and_transparent() {
    let def = definition(WidgetKind::Section, "backgroundColor").expect("declared");
    assert!(validate(def, "#fff").is_ok());
    assert!(validate(def, "#A1b2C3").is_ok());
    assert!(validate(def, "transparent").is_ok());
    assert_eq!(
        validate(def, "#12"),
        Err(PropertyError::InvalidColor { value: "#12".to_owned() })
    );
    assert!(validate(def, "blue").is_err());
    assert!(validate(def, "#ggg").is_err());
}

#[test]
fn select_validation_checks_options() {
    let def = definition(WidgetKind::Label, "fontWeight").expect("declared");
    assert!(validate(def, "bold").is_ok());
    let err = validate(def, "heavy").expect_err("not an option");
    assert_eq!(err.to_string(), "`heavy` is not one of: normal, bold, lighter");
}

#[test]
fn text_validation_is_free_form() {
    let def = definition(WidgetKind::Input, "placeholder").expect("declared");
    assert!(validate(def, "").is_ok());
    assert!(validate(def, "anything at all").is_ok());
}
