//! Pointer-event glue between the DOM and the designer's drag controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every droppable element carries a `data-drop-id` attribute holding the
//! canvas id or a widget id. On release the element under the pointer is
//! resolved to its nearest droppable ancestor and parsed into a
//! [`DropTarget`].

use designer::drag::{DropTarget, Point};

/// Attribute naming a droppable element.
pub const DROP_ID_ATTR: &str = "data-drop-id";

/// Viewport position of a pointer event.
pub fn client_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Drop target under `point`, if any.
#[allow(clippy::cast_possible_truncation)]
pub fn drop_target_at(point: Point) -> Option<DropTarget> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()?.document()?;
        let element = document.element_from_point(point.x as f32, point.y as f32)?;
        let zone = element.closest(&format!("[{DROP_ID_ATTR}]")).ok().flatten()?;
        DropTarget::parse(&zone.get_attribute(DROP_ID_ATTR)?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = point;
        None
    }
}
