//! Widget palette shown beside the canvas in design mode.

use leptos::prelude::*;

use designer::drag::{DragSource, Point};
use designer::widget::WidgetKind;

use crate::util::pointer::client_point;

/// One draggable entry per widget kind. Pressing an entry starts a palette
/// drag through `on_press`.
#[component]
pub fn Palette(on_press: Callback<(DragSource, Point)>) -> impl IntoView {
    let items = WidgetKind::ALL
        .into_iter()
        .map(|kind| {
            view! {
                <div
                    class="palette__item"
                    id=kind.palette_id()
                    on:pointerdown=move |ev: leptos::ev::PointerEvent| {
                        ev.prevent_default();
                        on_press.run((DragSource::Palette(kind), client_point(&ev)));
                    }
                >
                    {kind.display_name()}
                </div>
            }
        })
        .collect_view();

    view! {
        <aside class="palette">
            <h2 class="palette__title">"Components"</h2>
            {items}
        </aside>
    }
}
