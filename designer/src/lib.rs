//! Widget composition engine for the page designer.
//!
//! This crate is pure logic with no browser dependencies, so it compiles both
//! into the WASM client and into native test binaries. It owns the widget
//! forest of one page, the per-type property schema, style derivation, the
//! canvas render tree and the drag/drop gesture. The host UI is responsible
//! only for wiring DOM events to [`engine::DesignerCore`], drawing the
//! returned [`render::CanvasView`], and persisting the resulting
//! [`engine::Action`]s to the backend.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable façade combining tree, selection, mode and drag |
//! | [`widget`] | Widget types, property lists and wire conversion |
//! | [`schema`] | Property schema registry and value validation |
//! | [`style`] | Property → style bag resolution |
//! | [`tree`] | Arena of widgets with a parent → children index |
//! | [`render`] | Recursive canvas render tree |
//! | [`drag`] | Drag gesture state machine and drop planning |
//! | [`panel`] | Properties panel field model and edit merging |
//! | [`consts`] | Shared constants (sentinel ids, thresholds) |

pub mod consts;
pub mod drag;
pub mod engine;
pub mod panel;
pub mod render;
pub mod schema;
pub mod style;
pub mod tree;
pub mod widget;
