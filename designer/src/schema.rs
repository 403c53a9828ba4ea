//! Property schema registry: which properties each widget kind exposes.
//!
//! The registry is static data. The properties panel renders one field per
//! definition, new widgets are seeded with the defaults, and edits are
//! validated against the definition's input kind before they reach the model.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use crate::widget::{PropertyList, WidgetKind};

/// Input control used to edit a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Color,
    Select,
}

/// One editable property of a widget kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDefinition {
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    pub default: &'static str,
    /// Allowed values for [`InputKind::Select`]; empty otherwise.
    pub options: &'static [&'static str],
}

/// Error returned when a property edit does not fit its definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    #[error("{kind} has no property `{name}`")]
    UnknownProperty { kind: &'static str, name: String },
    #[error("`{value}` is not a color")]
    InvalidColor { value: String },
    #[error("`{value}` is not one of: {allowed}")]
    InvalidOption { value: String, allowed: String },
}

const fn text(name: &'static str, label: &'static str, default: &'static str) -> PropertyDefinition {
    PropertyDefinition { name, label, input: InputKind::Text, default, options: &[] }
}

const fn color(name: &'static str, label: &'static str, default: &'static str) -> PropertyDefinition {
    PropertyDefinition { name, label, input: InputKind::Color, default, options: &[] }
}

const fn select(
    name: &'static str,
    label: &'static str,
    default: &'static str,
    options: &'static [&'static str],
) -> PropertyDefinition {
    PropertyDefinition { name, label, input: InputKind::Select, default, options }
}

const SECTION: &[PropertyDefinition] = &[
    color("backgroundColor", "Background Color", "#ffffff"),
    text("padding", "Padding", "16"),
    text("borderRadius", "Border Radius", "8"),
];

const BUTTON: &[PropertyDefinition] = &[
    color("backgroundColor", "Background Color", "#000000"),
    color("textColor", "Text Color", "#ffffff"),
    text("fontSize", "Font Size", "14"),
    text("padding", "Padding", "8"),
    text("borderRadius", "Border Radius", "4"),
];

const INPUT: &[PropertyDefinition] = &[
    text("placeholder", "Placeholder", "Enter text..."),
    color("backgroundColor", "Background Color", "#ffffff"),
    color("textColor", "Text Color", "#000000"),
    text("fontSize", "Font Size", "14"),
    text("padding", "Padding", "8"),
    color("borderColor", "Border Color", "#cccccc"),
];

const LABEL: &[PropertyDefinition] = &[
    text("label", "Text Content", "Label"),
    text("fontSize", "Font Size", "14"),
    color("textColor", "Text Color", "#000000"),
    select("fontWeight", "Font Weight", "normal", &["normal", "bold", "lighter"]),
];

const TABLE: &[PropertyDefinition] = &[
    color("headerBackgroundColor", "Header Background", "#f0f0f0"),
    text("rowHeight", "Row Height", "32"),
    color("borderColor", "Border Color", "#cccccc"),
];

const RESPONSIVE_LAYOUT: &[PropertyDefinition] = &[
    select("layoutType", "Layout Type", "grid", &["grid", "fluid"]),
    text("columns", "Grid Columns (1-12)", "3"),
    text("gap", "Gap (px)", "16"),
    color("backgroundColor", "Background Color", "transparent"),
];

const COLUMN: &[PropertyDefinition] = &[
    text("width", "Width", "100"),
    color("backgroundColor", "Background Color", "#ffffff"),
    text("padding", "Padding", "8"),
];

/// Ordered property definitions for `kind`.
#[must_use]
pub fn schema_for(kind: WidgetKind) -> &'static [PropertyDefinition] {
    match kind {
        WidgetKind::Section => SECTION,
        WidgetKind::Button => BUTTON,
        WidgetKind::Input => INPUT,
        WidgetKind::Label => LABEL,
        WidgetKind::Table => TABLE,
        WidgetKind::ResponsiveLayout => RESPONSIVE_LAYOUT,
        WidgetKind::Column => COLUMN,
        WidgetKind::Grid => &[],
    }
}

/// Definitions for a raw wire type. Unknown types have no editable properties.
#[must_use]
pub fn schema_for_type(palette_id: &str) -> &'static [PropertyDefinition] {
    WidgetKind::from_palette_id(palette_id).map_or(&[], schema_for)
}

/// The definition of `name` on `kind`, if declared.
#[must_use]
pub fn definition(kind: WidgetKind, name: &str) -> Option<&'static PropertyDefinition> {
    schema_for(kind).iter().find(|d| d.name == name)
}

/// Default value of `name` on `kind`, if declared.
#[must_use]
pub fn default_value(kind: WidgetKind, name: &str) -> Option<&'static str> {
    definition(kind, name).map(|d| d.default)
}

/// Property list seeded with every default of `kind`, in schema order.
#[must_use]
pub fn default_properties(kind: WidgetKind) -> PropertyList {
    schema_for(kind)
        .iter()
        .map(|d| (d.name.to_owned(), d.default.to_owned()))
        .collect()
}

/// Check `value` against `def`.
///
/// # Errors
///
/// Returns [`PropertyError::InvalidColor`] for a color that is neither `#rgb`,
/// `#rrggbb` nor `transparent`, and [`PropertyError::InvalidOption`] for a
/// select value outside its option set. Text values always pass.
pub fn validate(def: &PropertyDefinition, value: &str) -> Result<(), PropertyError> {
    match def.input {
        InputKind::Text => Ok(()),
        InputKind::Color => {
            if is_color(value) {
                Ok(())
            } else {
                Err(PropertyError::InvalidColor { value: value.to_owned() })
            }
        }
        InputKind::Select => {
            if def.options.contains(&value) {
                Ok(())
            } else {
                Err(PropertyError::InvalidOption { value: value.to_owned(), allowed: def.options.join(", ") })
            }
        }
    }
}

fn is_color(value: &str) -> bool {
    if value == "transparent" {
        return true;
    }
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}
