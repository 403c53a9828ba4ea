pub mod canvas_view;
pub mod navbar;
pub mod palette;
pub mod properties_panel;
pub mod toast;
