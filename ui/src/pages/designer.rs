//! Designer route: palette, canvas and properties panel for one page.
//!
//! SYSTEM CONTEXT
//! ==============
//! All editing rules live in [`designer::engine::DesignerCore`]. This page
//! forwards pointer events and panel edits to it and turns the returned
//! [`Action`]s into backend calls:
//! - `Create`: sync the new widget, then insert the backend's copy.
//! - `Sync`: fire-and-forget upsert; the model already holds the change.
//! - `Delete`: delete, then reload every widget of the page.
//!
//! ERROR HANDLING
//! ==============
//! Backend failures become error toasts. Rejected drops are logged only; the
//! model is untouched in that case.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use designer::drag::{DragSource, Point};
use designer::engine::Action;
use designer::render::RenderMode;
use designer::widget::WidgetId;

use crate::components::canvas_view::{CanvasHandlers, CanvasSurface};
use crate::components::palette::Palette;
use crate::components::properties_panel::{PropertiesPanel, PropertyEdit};
use crate::components::toast::notify;
use crate::state::auth::AuthState;
use crate::state::designer::DesignerState;
use crate::state::pages::designer_href;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::install_unauth_redirect;
use crate::util::pointer::{client_point, drop_target_at};

/// Fetch page metadata and widgets for `page_id`.
fn load_page(page_id: i64, state: RwSignal<DesignerState>, toast: RwSignal<ToastState>) {
    state.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::get_page(page_id).await {
            Ok(page) => state.update(|s| s.apply_page(&page)),
            Err(e) => leptos::logging::warn!("page {page_id} metadata failed: {e}"),
        }
        reload_widgets(page_id, state, toast).await;
        state.update(|s| s.loading = false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page_id, toast);
    }
}

#[cfg(feature = "hydrate")]
async fn reload_widgets(page_id: i64, state: RwSignal<DesignerState>, toast: RwSignal<ToastState>) {
    match crate::net::api::list_widgets(page_id).await {
        Ok(records) => {
            let skipped = state.try_update(|s| s.core.load(records)).unwrap_or_default();
            for err in skipped {
                leptos::logging::warn!("skipping widget: {err}");
            }
        }
        Err(e) => {
            leptos::logging::warn!("widget list failed: {e}");
            notify(toast, ToastKind::Error, e.to_string());
        }
    }
}

/// Carry out backend work requested by the core.
fn dispatch(action: Action, state: RwSignal<DesignerState>, toast: RwSignal<ToastState>) {
    #[cfg(feature = "hydrate")]
    {
        use designer::widget::Widget;

        let Some(page_id) = state.with_untracked(|s| s.page_id) else {
            return;
        };
        match action {
            Action::None => {}
            Action::Create(widget) => {
                let record = widget.to_record(page_id);
                leptos::task::spawn_local(async move {
                    let saved = match crate::net::api::sync_widget(&record).await {
                        Ok(saved) => saved,
                        Err(e) => {
                            leptos::logging::warn!("widget create failed: {e}");
                            return notify(toast, ToastKind::Error, e.to_string());
                        }
                    };
                    let widget = match Widget::from_record(saved) {
                        Ok(widget) => widget,
                        Err(e) => {
                            leptos::logging::warn!("created widget rejected: {e}");
                            return notify(toast, ToastKind::Error, e.to_string());
                        }
                    };
                    if let Some(Err(e)) = state.try_update(|s| s.core.confirm_created(widget)) {
                        leptos::logging::warn!("created widget rejected: {e}");
                        notify(toast, ToastKind::Error, e.to_string());
                    }
                });
            }
            Action::Sync(widget) => {
                let record = widget.to_record(page_id);
                leptos::task::spawn_local(async move {
                    if let Err(e) = crate::net::api::sync_widget(&record).await {
                        leptos::logging::warn!("widget sync failed: {e}");
                        notify(toast, ToastKind::Error, e.to_string());
                    }
                });
            }
            Action::Delete(id) => {
                leptos::task::spawn_local(async move {
                    match crate::net::api::delete_widget(id).await {
                        Ok(()) => reload_widgets(page_id, state, toast).await,
                        Err(e) => {
                            leptos::logging::warn!("widget delete failed: {e}");
                            notify(toast, ToastKind::Error, e.to_string());
                        }
                    }
                });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (action, state, toast);
    }
}

#[component]
pub fn DesignerPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, use_navigate());
    let query = use_query_map();

    let state = RwSignal::new(DesignerState::default());
    // Source of the pointer gesture in progress, and where the pointer is.
    let pressed = RwSignal::new(None::<DragSource>);
    let ghost_at = RwSignal::new(None::<Point>);

    Effect::new(move || {
        if !auth.get().is_logged_in() {
            return;
        }
        let next = query.with(|q| DesignerState::for_query(q.get("id").as_deref(), q.get("mode").as_deref()));
        let page_id = next.page_id;
        state.set(next);
        match page_id {
            Some(page_id) => load_page(page_id, state, toast),
            None => notify(toast, ToastKind::Error, "No page selected"),
        }
    });

    let canvas = Memo::new(move |_| state.with(|s| s.core.render()));
    let panel = Memo::new(move |_| state.with(|s| s.core.panel()));
    let mode = Memo::new(move |_| state.with(|s| s.core.mode()));
    let background = Signal::derive(move || state.with(|s| s.background.clone()));

    let on_press = Callback::new(move |(source, at): (DragSource, Point)| {
        state.update(|s| s.core.begin_drag(source, at));
        pressed.set(Some(source));
    });
    let handlers = CanvasHandlers {
        on_select: Callback::new(move |id: WidgetId| state.update(|s| s.core.click_widget(id))),
        on_clear: Callback::new(move |()| state.update(|s| s.core.click_canvas())),
        on_press,
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if pressed.get_untracked().is_none() {
            return;
        }
        let at = client_point(&ev);
        let dragging = state.try_update(|s| {
            s.core.drag_move(at);
            s.core.is_dragging()
        });
        if dragging == Some(true) {
            ghost_at.set(Some(at));
        }
    };

    let on_pointer_up = move |ev: leptos::ev::PointerEvent| {
        if pressed.get_untracked().is_none() {
            return;
        }
        pressed.set(None);
        ghost_at.set(None);
        let target = drop_target_at(client_point(&ev));
        match state.try_update(|s| s.core.end_drag(target)) {
            Some(Ok(action)) => dispatch(action, state, toast),
            Some(Err(rejection)) => leptos::logging::log!("drop rejected: {rejection}"),
            None => {}
        }
    };

    let on_property = Callback::new(move |(id, name, value): PropertyEdit| {
        match state.try_update(|s| s.core.edit_property(id, name, &value)) {
            Some(Ok(action)) => dispatch(action, state, toast),
            Some(Err(e)) => notify(toast, ToastKind::Error, e.to_string()),
            None => {}
        }
    });
    let on_label = Callback::new(move |(id, label): (WidgetId, String)| {
        if let Some(action) = state.try_update(|s| s.core.edit_label(id, &label)) {
            dispatch(action, state, toast);
        }
    });
    let on_close = Callback::new(move |()| state.update(|s| s.core.clear_selection()));
    let on_delete = Callback::new(move |id: WidgetId| {
        let action = state.with_untracked(|s| s.core.request_delete(id));
        dispatch(action, state, toast);
    });

    let ghost_label = move || {
        let source = pressed.get()?;
        let at = ghost_at.get()?;
        let label = match source {
            DragSource::Palette(kind) => kind.display_name().to_owned(),
            DragSource::Existing(id) => state.with(|s| s.core.tree.get(id).map(|w| w.label.clone())).unwrap_or_default(),
        };
        Some(view! {
            <div class="drag-ghost" style=format!("left: {}px; top: {}px", at.x, at.y)>
                {label}
            </div>
        })
    };

    let mode_toggle = move || {
        let page_id = state.with(|s| s.page_id)?;
        let (href, text) = match mode.get() {
            RenderMode::Edit => (designer_href(page_id, RenderMode::Preview), "Preview"),
            RenderMode::Preview => (designer_href(page_id, RenderMode::Edit), "Design"),
        };
        Some(view! { <a class="designer__mode" href=href>{text}</a> })
    };

    view! {
        <div
            class=move || if ghost_at.get().is_some() { "designer designer--dragging" } else { "designer" }
            on:pointerdown=move |_| state.update(|s| s.core.pointer_down())
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
        >
            <header class="designer__bar">
                <a class="designer__back" href="/builder/pages">"Pages"</a>
                <h1 class="designer__title">{move || state.with(|s| s.page_name.clone())}</h1>
                <Show when=move || state.with(|s| s.loading)>
                    <span class="designer__loading">"Loading..."</span>
                </Show>
                {mode_toggle}
            </header>
            <div class="designer__body">
                <Show when=move || mode.get().is_edit()>
                    <Palette on_press=on_press/>
                </Show>
                <CanvasSurface canvas=canvas background=background handlers=handlers/>
                <Show when=move || mode.get().is_edit()>
                    <PropertiesPanel
                        panel=panel
                        on_label=on_label
                        on_property=on_property
                        on_delete=on_delete
                        on_close=on_close
                    />
                </Show>
            </div>
            {ghost_label}
        </div>
    }
}
