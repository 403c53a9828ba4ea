//! Designer route state: which page is open, in which mode, and the core
//! designer model for it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The designer page reads `?id=<page>&mode=design` from the URL. Anything
//! other than `mode=design` opens the page in preview. The widget model and
//! all editing rules live in [`designer::engine::DesignerCore`]; this state
//! only adds what the browser host needs around it.

#[cfg(test)]
#[path = "designer_test.rs"]
mod designer_test;

use designer::engine::DesignerCore;
use designer::render::RenderMode;
use wire::Page;

/// Canvas background when the page has none stored.
pub const DEFAULT_CANVAS_BACKGROUND: &str = "#1e1e1e";

#[derive(Clone, Debug, Default)]
pub struct DesignerState {
    pub page_id: Option<i64>,
    pub page_name: String,
    pub background: String,
    pub loading: bool,
    pub core: DesignerCore,
}

impl DesignerState {
    /// Fresh state for the route's query parameters.
    pub fn for_query(id: Option<&str>, mode: Option<&str>) -> Self {
        Self {
            page_id: page_id_from_query(id),
            background: DEFAULT_CANVAS_BACKGROUND.to_owned(),
            core: DesignerCore::new(mode_from_query(mode)),
            ..Self::default()
        }
    }

    /// Apply page metadata fetched from the backend.
    pub fn apply_page(&mut self, page: &Page) {
        self.page_name.clone_from(&page.name);
        self.background = canvas_background(page);
    }
}

/// `mode=design` edits; anything else previews.
pub fn mode_from_query(mode: Option<&str>) -> RenderMode {
    if mode == Some("design") { RenderMode::Edit } else { RenderMode::Preview }
}

pub fn page_id_from_query(id: Option<&str>) -> Option<i64> {
    match id.map(|raw| raw.trim().parse::<i64>()) {
        Some(Ok(id)) => Some(id),
        _ => None,
    }
}

pub fn canvas_background(page: &Page) -> String {
    match page.background_color.as_deref().map(str::trim) {
        Some(color) if !color.is_empty() => color.to_owned(),
        _ => DEFAULT_CANVAS_BACKGROUND.to_owned(),
    }
}
