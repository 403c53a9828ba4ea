//! Style resolution: widget properties → a flat style bag.
//!
//! DESIGN
//! ======
//! Resolution is a pure function of the widget. [`resolve`] copies only what is
//! stored, so an unset property contributes nothing and the renderer applies
//! its own per-type fallback. [`resolve_effective`] first fills every
//! recognized property the widget's schema declares from its default, which
//! is what the properties panel shows as the "current" value.
//!
//! Pixel-valued properties (`fontSize`, `padding`, `borderRadius`, `gap`) gain
//! a `px` suffix when the stored value is a bare number. Other values pass
//! through verbatim.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::schema;
use crate::widget::{PropertyList, Widget};

/// Property names the resolver understands. Anything else is ignored.
pub const RECOGNIZED: &[&str] = &[
    "backgroundColor",
    "textColor",
    "fontSize",
    "padding",
    "borderRadius",
    "borderColor",
    "headerBackgroundColor",
    "layoutType",
    "columns",
    "gap",
    "fontWeight",
];

const PIXEL_PROPERTIES: &[&str] = &["fontSize", "padding", "borderRadius", "gap"];

/// Default column count of a responsive layout in grid mode.
pub const DEFAULT_GRID_COLUMNS: u32 = 3;
const MAX_GRID_COLUMNS: u32 = 12;
const DEFAULT_GAP: &str = "16px";

/// Derived presentation attributes of one widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleBag {
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub padding: Option<String>,
    pub border_radius: Option<String>,
    pub border_color: Option<String>,
    pub header_background_color: Option<String>,
    pub layout_type: Option<String>,
    pub columns: Option<String>,
    pub gap: Option<String>,
}

impl StyleBag {
    fn slot(&mut self, name: &str) -> Option<&mut Option<String>> {
        let slot = match name {
            "backgroundColor" => &mut self.background_color,
            "textColor" => &mut self.text_color,
            "fontSize" => &mut self.font_size,
            "fontWeight" => &mut self.font_weight,
            "padding" => &mut self.padding,
            "borderRadius" => &mut self.border_radius,
            "borderColor" => &mut self.border_color,
            "headerBackgroundColor" => &mut self.header_background_color,
            "layoutType" => &mut self.layout_type,
            "columns" => &mut self.columns,
            "gap" => &mut self.gap,
            _ => return None,
        };
        Some(slot)
    }

    /// Inline CSS for the widget's own box. Header, layout and table-specific
    /// attributes are not included; see [`layout_style`].
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        let mut push = |prop: &str, value: Option<&str>| {
            if let Some(v) = value {
                decls.push(format!("{prop}: {v}"));
            }
        };
        push("background-color", self.background_color.as_deref());
        push("color", self.text_color.as_deref());
        push("font-size", self.font_size.as_deref());
        push("font-weight", self.font_weight.as_deref());
        push("padding", self.padding.as_deref());
        push("border-radius", self.border_radius.as_deref());
        if let Some(color) = &self.border_color {
            decls.push(format!("border: 1px solid {color}"));
        }
        decls.join("; ")
    }
}

/// Copy every stored, recognized property of `widget` into a style bag.
#[must_use]
pub fn resolve(widget: &Widget) -> StyleBag {
    resolve_properties(&widget.properties)
}

/// Like [`resolve`], but recognized properties the schema declares for the
/// widget's kind fall back to their defaults when unset.
#[must_use]
pub fn resolve_effective(widget: &Widget) -> StyleBag {
    let mut merged = schema::default_properties(widget.kind);
    for prop in widget.properties.iter() {
        merged.set(&prop.name, prop.value.clone());
    }
    resolve_properties(&merged)
}

fn resolve_properties(properties: &PropertyList) -> StyleBag {
    let mut bag = StyleBag::default();
    for prop in properties.iter() {
        let Some(slot) = bag.slot(&prop.name) else {
            continue;
        };
        *slot = Some(if PIXEL_PROPERTIES.contains(&prop.name.as_str()) {
            with_px(&prop.value)
        } else {
            prop.value.clone()
        });
    }
    bag
}

/// Append `px` to bare numbers; leave anything with a unit alone.
#[must_use]
pub fn with_px(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.parse::<f64>().is_ok() {
        format!("{trimmed}px")
    } else {
        trimmed.to_owned()
    }
}

/// Inner box CSS of a responsive layout: a `columns`-wide grid when the
/// stored `layoutType` is `grid`, otherwise a wrapping flex row.
///
/// Pass the stored bag from [`resolve`]; a layout saved without `layoutType`
/// renders as flex. Unparseable column counts fall back to
/// [`DEFAULT_GRID_COLUMNS`]; counts outside 1..=12 are clamped.
#[must_use]
pub fn layout_style(bag: &StyleBag) -> String {
    let gap = bag.gap.as_deref().unwrap_or(DEFAULT_GAP);
    if bag.layout_type.as_deref() != Some("grid") {
        return format!("display: flex; flex-wrap: wrap; gap: {gap}");
    }
    let columns = match bag.columns.as_deref().map(|c| c.trim().parse::<u32>()) {
        Some(Ok(c)) => c.clamp(1, MAX_GRID_COLUMNS),
        _ => DEFAULT_GRID_COLUMNS,
    };
    format!("display: grid; grid-template-columns: repeat({columns}, 1fr); gap: {gap}")
}
