//! Widget model: kinds, property lists, sparse patches and wire conversion.
//!
//! A page is a flat set of [`Widget`]s forming a forest through `parent_id`
//! back-references. Data flows into this layer from the backend as
//! [`wire::WidgetRecord`]s and from the drag/drop controller and properties
//! panel as patches.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use serde::{Deserialize, Serialize};
use wire::{PropertyRecord, WidgetRecord};

use crate::consts::PALETTE_PREFIX;

/// Backend-assigned widget identifier.
pub type WidgetId = i64;

/// Error converting a wire record into a [`Widget`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The record's `type` is not one of the known palette ids.
    #[error("unknown widget type: {0}")]
    UnknownKind(String),
}

/// The closed set of widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    Section,
    Table,
    Input,
    Button,
    Label,
    ResponsiveLayout,
    Grid,
    Column,
}

impl WidgetKind {
    /// All kinds in palette order.
    pub const ALL: [Self; 8] = [
        Self::Section,
        Self::Table,
        Self::Input,
        Self::Button,
        Self::Label,
        Self::ResponsiveLayout,
        Self::Grid,
        Self::Column,
    ];

    /// Palette / wire identifier, e.g. `"w-responsivelayout"`.
    #[must_use]
    pub fn palette_id(self) -> &'static str {
        match self {
            Self::Section => "w-section",
            Self::Table => "w-table",
            Self::Input => "w-input",
            Self::Button => "w-button",
            Self::Label => "w-label",
            Self::ResponsiveLayout => "w-responsivelayout",
            Self::Grid => "w-grid",
            Self::Column => "w-column",
        }
    }

    /// Parse a palette / wire identifier.
    #[must_use]
    pub fn from_palette_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.palette_id() == id)
    }

    /// Human-readable name for the palette.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Section => "Section",
            Self::Table => "Table",
            Self::Input => "Input",
            Self::Button => "Button",
            Self::Label => "Label",
            Self::ResponsiveLayout => "Responsive Layout",
            Self::Grid => "Grid",
            Self::Column => "Column",
        }
    }

    /// Whether widgets of this kind may hold children.
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(self, Self::Section | Self::ResponsiveLayout | Self::Grid | Self::Column)
    }

    /// Label given to a freshly dropped widget: the palette id without its
    /// prefix, upper-cased (`w-button` → `BUTTON`).
    #[must_use]
    pub fn default_label(self) -> String {
        let id = self.palette_id();
        id.strip_prefix(PALETTE_PREFIX).unwrap_or(id).to_uppercase()
    }
}

/// A single stored property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

/// Ordered property list with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyList(Vec<Property>);

impl PropertyList {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Stored value for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|p| p.name == name).map(|p| p.value.as_str())
    }

    /// Replace the value of an existing entry, or append a new one.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.value = value,
            None => self.0.push(Property { name: name.to_owned(), value }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for PropertyList {
    /// Later duplicates of a name overwrite earlier ones in place.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut list = Self::new();
        for (name, value) in iter {
            list.set(&name, value);
        }
        list
    }
}

/// A widget on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    /// Backend id; `None` until the backend has persisted the widget.
    pub id: Option<WidgetId>,
    pub kind: WidgetKind,
    pub label: String,
    /// Containing widget; `None` places the widget at the canvas root.
    pub parent_id: Option<WidgetId>,
    /// Rank among siblings; only relative order matters.
    pub order: i64,
    pub properties: PropertyList,
}

impl Widget {
    /// Convert a backend record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::UnknownKind`] when the record's type is not a known palette id.
    pub fn from_record(record: WidgetRecord) -> Result<Self, RecordError> {
        let kind = WidgetKind::from_palette_id(&record.kind).ok_or(RecordError::UnknownKind(record.kind))?;
        Ok(Self {
            id: record.id,
            kind,
            label: record.label,
            parent_id: record.parent_id,
            order: record.widget_order,
            properties: record
                .properties
                .into_iter()
                .map(|p| (p.property_name, p.property_value))
                .collect(),
        })
    }

    /// Build the record sent to `POST /api/widgets/sync`.
    #[must_use]
    pub fn to_record(&self, page_id: i64) -> WidgetRecord {
        WidgetRecord {
            id: self.id,
            page_id,
            kind: self.kind.palette_id().to_owned(),
            label: self.label.clone(),
            x: 0.0,
            y: 0.0,
            parent_id: self.parent_id,
            widget_order: self.order,
            properties: self
                .properties
                .iter()
                .map(|p| PropertyRecord { property_name: p.name.clone(), property_value: p.value.clone() })
                .collect(),
        }
    }
}

/// Sparse update for a widget. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetPatch {
    pub label: Option<String>,
    /// `Some(None)` moves the widget to the root.
    pub parent_id: Option<Option<WidgetId>>,
    pub order: Option<i64>,
    /// Replaces the whole property list.
    pub properties: Option<PropertyList>,
}

impl WidgetPatch {
    /// Apply this patch to `widget` in place.
    pub fn apply_to(&self, widget: &mut Widget) {
        if let Some(label) = &self.label {
            widget.label.clone_from(label);
        }
        if let Some(parent_id) = self.parent_id {
            widget.parent_id = parent_id;
        }
        if let Some(order) = self.order {
            widget.order = order;
        }
        if let Some(properties) = &self.properties {
            widget.properties.clone_from(properties);
        }
    }
}
