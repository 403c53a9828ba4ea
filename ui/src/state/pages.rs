//! Page-list state for the builder home and pages manager.

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

use designer::render::RenderMode;
use wire::{NewPage, Page};

/// Background assigned to pages created from the manager.
pub const DEFAULT_PAGE_BACKGROUND: &str = "#0a0a0a";

/// Shown when a create form is submitted with a blank name.
pub const EMPTY_NAME_MESSAGE: &str = "Please enter a name";

#[derive(Clone, Debug, Default)]
pub struct PagesState {
    pub items: Vec<Page>,
    pub loading: bool,
    pub create_pending: bool,
    pub error: Option<String>,
}

impl PagesState {
    /// Drop a page locally after the backend confirmed its deletion.
    pub fn remove(&mut self, id: i64) {
        self.items.retain(|p| p.id != id);
    }
}

/// Validate the create form. `background` is `None` for the builder-home
/// dialog, which leaves the backend default in place.
///
/// # Errors
///
/// Returns [`EMPTY_NAME_MESSAGE`] when `name` is blank.
pub fn new_page(name: &str, background: Option<&str>) -> Result<NewPage, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EMPTY_NAME_MESSAGE);
    }
    Ok(NewPage { name: name.to_owned(), background_color: background.map(str::to_owned) })
}

/// Route opening page `id` in the designer.
pub fn designer_href(id: i64, mode: RenderMode) -> String {
    match mode {
        RenderMode::Edit => format!("/designer?id={id}&mode=design"),
        RenderMode::Preview => format!("/designer?id={id}"),
    }
}
