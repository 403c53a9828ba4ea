//! Properties panel model: the fields shown for the selected widget and the
//! patches produced by editing them.
//!
//! The panel is schema driven. Each [`PropertyDefinition`] of the widget's
//! kind becomes one [`PanelField`] pre-filled with the stored value, or the
//! default when nothing (or an empty string) is stored. Editing a field
//! merges a single name/value pair into the widget's property list.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::schema::{self, PropertyDefinition, PropertyError};
use crate::widget::{Widget, WidgetId, WidgetKind, WidgetPatch};

/// One editable row of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelField {
    pub definition: &'static PropertyDefinition,
    /// Value to show in the control.
    pub value: String,
    /// `true` when `value` comes from the schema default.
    pub is_default: bool,
}

/// Everything the panel renders for one widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelModel {
    pub id: WidgetId,
    pub kind: WidgetKind,
    pub label: String,
    pub fields: Vec<PanelField>,
}

/// Build the panel for `widget`. Unsaved widgets have no panel.
#[must_use]
pub fn panel_for(widget: &Widget) -> Option<PanelModel> {
    Some(PanelModel {
        id: widget.id?,
        kind: widget.kind,
        label: widget.label.clone(),
        fields: fields_for(widget),
    })
}

/// One field per schema definition, in schema order.
#[must_use]
pub fn fields_for(widget: &Widget) -> Vec<PanelField> {
    schema::schema_for(widget.kind)
        .iter()
        .map(|definition| match widget.properties.get(definition.name) {
            Some(stored) if !stored.is_empty() => {
                PanelField { definition, value: stored.to_owned(), is_default: false }
            }
            _ => PanelField { definition, value: definition.default.to_owned(), is_default: true },
        })
        .collect()
}

/// Patch that sets property `name` to `value`, keeping every other property.
///
/// # Errors
///
/// Returns [`PropertyError::UnknownProperty`] when the widget's kind does not
/// declare `name`, or the validation error of its definition.
pub fn apply_edit(widget: &Widget, name: &str, value: &str) -> Result<WidgetPatch, PropertyError> {
    let definition = schema::definition(widget.kind, name).ok_or_else(|| PropertyError::UnknownProperty {
        kind: widget.kind.display_name(),
        name: name.to_owned(),
    })?;
    schema::validate(definition, value)?;
    let mut properties = widget.properties.clone();
    properties.set(name, value);
    Ok(WidgetPatch { properties: Some(properties), ..Default::default() })
}

/// Patch that renames a widget.
#[must_use]
pub fn rename(label: &str) -> WidgetPatch {
    WidgetPatch { label: Some(label.to_owned()), ..Default::default() }
}
