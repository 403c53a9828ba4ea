use super::*;
use crate::widget::WidgetKind;

fn widget(kind: WidgetKind, props: &[(&str, &str)]) -> Widget {
    Widget {
        id: Some(1),
        kind,
        label: kind.default_label(),
        parent_id: None,
        order: 0,
        properties: props.iter().map(|(n, v)| ((*n).to_owned(), (*v).to_owned())).collect(),
    }
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_copies_only_stored_properties() {
    let bag = resolve(&widget(WidgetKind::Button, &[]));
    assert_eq!(bag, StyleBag::default());
}

#[test]
fn resolve_ignores_unrecognized_names() {
    let bag = resolve(&widget(WidgetKind::Input, &[("placeholder", "Email"), ("zIndex", "4")]));
    assert_eq!(bag, StyleBag::default());
}

#[test]
fn resolve_suffixes_pixel_properties() {
    let bag = resolve(&widget(
        WidgetKind::Section,
        &[("padding", "16"), ("borderRadius", "2.5"), ("backgroundColor", "#101010")],
    ));
    assert_eq!(bag.padding.as_deref(), Some("16px"));
    assert_eq!(bag.border_radius.as_deref(), Some("2.5px"));
    assert_eq!(bag.background_color.as_deref(), Some("#101010"));
}

#[test]
fn values_with_units_pass_through() {
    assert_eq!(with_px("1rem"), "1rem");
    assert_eq!(with_px(" 12 "), "12px");
}

// =============================================================
// resolve_effective
// =============================================================

#[test]
fn button_without_properties_gets_schema_colors() {
    let bag = resolve_effective(&widget(WidgetKind::Button, &[]));
    assert_eq!(bag.background_color.as_deref(), Some("#000000"));
    assert_eq!(bag.text_color.as_deref(), Some("#ffffff"));
    assert_eq!(bag.font_size.as_deref(), Some("14px"));
}

#[test]
fn explicit_value_wins_over_default() {
    let bag = resolve_effective(&widget(WidgetKind::Button, &[("backgroundColor", "#112233")]));
    assert_eq!(bag.background_color.as_deref(), Some("#112233"));
    assert_eq!(bag.text_color.as_deref(), Some("#ffffff"));
}

#[test]
fn effective_grid_has_nothing_to_fill() {
    assert_eq!(resolve_effective(&widget(WidgetKind::Grid, &[])), StyleBag::default());
}

// =============================================================
// to_css / layout_style
// =============================================================

#[test]
fn css_lists_box_declarations_in_fixed_order() {
    let bag = resolve(&widget(
        WidgetKind::Input,
        &[("borderColor", "#333333"), ("textColor", "#ffffff"), ("backgroundColor", "#1a1a1a")],
    ));
    assert_eq!(bag.to_css(), "background-color: #1a1a1a; color: #ffffff; border: 1px solid #333333");
}

#[test]
fn layout_without_stored_type_wraps() {
    let css = layout_style(&StyleBag::default());
    assert_eq!(css, "display: flex; flex-wrap: wrap; gap: 16px");
}

#[test]
fn grid_layout_defaults_to_three_columns() {
    let bag = resolve(&widget(WidgetKind::ResponsiveLayout, &[("layoutType", "grid")]));
    assert_eq!(layout_style(&bag), "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px");
}

#[test]
fn layout_uses_stored_columns_and_gap() {
    let bag = resolve(&widget(
        WidgetKind::ResponsiveLayout,
        &[("layoutType", "grid"), ("columns", "4"), ("gap", "8")],
    ));
    assert_eq!(layout_style(&bag), "display: grid; grid-template-columns: repeat(4, 1fr); gap: 8px");
}

#[test]
fn layout_clamps_and_recovers_column_counts() {
    let wide = resolve(&widget(WidgetKind::ResponsiveLayout, &[("layoutType", "grid"), ("columns", "40")]));
    assert!(layout_style(&wide).contains("repeat(12, 1fr)"));
    let junk = resolve(&widget(WidgetKind::ResponsiveLayout, &[("layoutType", "grid"), ("columns", "many")]));
    assert!(layout_style(&junk).contains("repeat(3, 1fr)"));
}

#[test]
fn fluid_layout_wraps() {
    let bag = resolve(&widget(WidgetKind::ResponsiveLayout, &[("layoutType", "fluid")]));
    assert_eq!(layout_style(&bag), "display: flex; flex-wrap: wrap; gap: 16px");
}

#[test]
fn recognized_names_all_map_to_a_slot() {
    let mut bag = StyleBag::default();
    for name in RECOGNIZED {
        assert!(bag.slot(name).is_some(), "{name} has no slot");
    }
}
