//! DOM rendering of the designer's visual tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`designer::render`] turns the widget tree into plain [`VisualNode`]s;
//! this module maps them one-to-one onto elements. In edit mode every widget
//! element carries `data-drop-id` so a release over it resolves to that
//! widget (see `util::pointer`), and pressing it starts a move gesture.

use leptos::prelude::*;

use designer::consts::{CANVAS_DROP_ID, PALETTE_PREFIX};
use designer::drag::{DragSource, Point};
use designer::render::{Body, CanvasView, VisualNode};
use designer::widget::WidgetId;

use crate::util::pointer::client_point;

/// Callbacks raised by the rendered canvas.
#[derive(Clone, Copy)]
pub struct CanvasHandlers {
    /// A widget was clicked.
    pub on_select: Callback<WidgetId>,
    /// The bare canvas was clicked.
    pub on_clear: Callback<()>,
    /// A widget was pressed in edit mode.
    pub on_press: Callback<(DragSource, Point)>,
}

#[component]
pub fn CanvasSurface(canvas: Memo<CanvasView>, background: Signal<String>, handlers: CanvasHandlers) -> impl IntoView {
    view! {
        <section
            class="canvas"
            data-drop-id=CANVAS_DROP_ID
            style=move || format!("background-color: {}", background.get())
            on:click=move |_| handlers.on_clear.run(())
        >
            {move || {
                let canvas = canvas.get();
                let edit = canvas.mode.is_edit();
                let placeholder = canvas.placeholder.map(|hint| view! { <p class="canvas__placeholder">{hint}</p> });
                let nodes = canvas.nodes.into_iter().map(|node| node_view(node, edit, handlers)).collect_view();
                view! {
                    {placeholder}
                    {nodes}
                }
            }}
        </section>
    }
}

fn node_view(node: VisualNode, edit: bool, handlers: CanvasHandlers) -> AnyView {
    let VisualNode { id, kind, selected, badge, drop_zone, style, body } = node;

    let mut class = format!("widget widget--{}", kind.palette_id().trim_start_matches(PALETTE_PREFIX));
    if selected {
        class.push_str(" widget--selected");
    }
    if drop_zone {
        class.push_str(" widget--drop-zone");
    }
    let drop_id = edit.then(|| id.to_string());

    view! {
        <div
            class=class
            style=style
            data-drop-id=drop_id
            on:click=move |ev| {
                ev.stop_propagation();
                handlers.on_select.run(id);
            }
            on:pointerdown=move |ev: leptos::ev::PointerEvent| {
                if edit {
                    ev.stop_propagation();
                    handlers.on_press.run((DragSource::Existing(id), client_point(&ev)));
                }
            }
        >
            {badge.map(|b| view! { <span class="widget__badge">{b}</span> })}
            {body_view(body, edit, handlers)}
        </div>
    }
    .into_any()
}

fn body_view(body: Body, edit: bool, handlers: CanvasHandlers) -> AnyView {
    match body {
        Body::Container { header, layout, children, placeholder } => {
            let children = children.into_iter().map(|child| node_view(child, edit, handlers)).collect_view();
            view! {
                {header.map(|h| view! { <div class="widget__header">{h}</div> })}
                <div class="widget__content" style=layout>
                    {children}
                    {placeholder.map(|p| view! { <p class="widget__placeholder">{p}</p> })}
                </div>
            }
            .into_any()
        }
        Body::Button { text, style } => view! {
            <button class="widget__button" type="button" style=style>
                {text}
            </button>
        }
        .into_any(),
        Body::Input { placeholder, style, enabled } => view! {
            <input class="widget__input" type="text" style=style placeholder=placeholder disabled=!enabled/>
        }
        .into_any(),
        Body::Label { text, style } => view! { <span class="widget__label" style=style>{text}</span> }.into_any(),
        Body::Table { title, header_style, columns, rows } => {
            let head = columns.into_iter().map(|c| view! { <th>{c}</th> }).collect_view();
            let rows = rows
                .into_iter()
                .map(|row| {
                    let cells = row.into_iter().map(|c| view! { <td>{c}</td> }).collect_view();
                    view! { <tr>{cells}</tr> }
                })
                .collect_view();
            view! {
                <div class="widget__table">
                    <div class="widget__table-title" style=header_style.clone()>{title}</div>
                    <table>
                        <thead style=header_style>
                            <tr>{head}</tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            }
            .into_any()
        }
    }
}
