//! Pages manager: list, create, delete and open pages.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use designer::render::RenderMode;

use crate::components::toast::notify;
use crate::state::auth::AuthState;
use crate::state::pages::{self, DEFAULT_PAGE_BACKGROUND, PagesState};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::install_unauth_redirect;
use crate::util::browser;

const DELETE_CONFIRM: &str = "Are you sure? This will delete all widgets on this page.";

fn load_pages(state: RwSignal<PagesState>, toast: RwSignal<ToastState>) {
    state.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_pages().await {
            Ok(items) => state.update(|s| {
                s.items = items;
                s.error = None;
            }),
            Err(e) => {
                leptos::logging::warn!("page list failed: {e}");
                notify(toast, ToastKind::Error, "Server error");
                state.update(|s| s.error = Some(e.to_string()));
            }
        }
        state.update(|s| s.loading = false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toast;
    }
}

#[component]
pub fn PagesManagerPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, use_navigate());

    let state = RwSignal::new(PagesState::default());
    let name = RwSignal::new(String::new());

    Effect::new(move || {
        if auth.get().is_logged_in() {
            load_pages(state, toast);
        }
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked().create_pending {
            return;
        }
        let new_page = match pages::new_page(&name.get(), Some(DEFAULT_PAGE_BACKGROUND)) {
            Ok(page) => page,
            Err(message) => {
                notify(toast, ToastKind::Error, message);
                return;
            }
        };
        state.update(|s| s.create_pending = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_page(&new_page).await {
                Ok(()) => {
                    name.set(String::new());
                    notify(toast, ToastKind::Success, "Created!");
                    load_pages(state, toast);
                }
                Err(e) => {
                    leptos::logging::warn!("page create failed: {e}");
                    notify(toast, ToastKind::Error, e.to_string());
                }
            }
            state.update(|s| s.create_pending = false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = new_page;
        }
    };

    let on_delete = move |id: i64| {
        if !browser::confirm(DELETE_CONFIRM) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_page(id).await {
                Ok(()) => {
                    state.update(|s| s.remove(id));
                    notify(toast, ToastKind::Success, "Page deleted successfully");
                }
                Err(e) => {
                    leptos::logging::warn!("page delete failed: {e}");
                    let message = if e.status().is_some() { "Failed to delete page" } else { "Server error" };
                    notify(toast, ToastKind::Error, message);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    let rows = move || {
        state
            .get()
            .items
            .into_iter()
            .map(|page| {
                let id = page.id;
                let swatch = format!("background-color: {}", page.background_color.as_deref().unwrap_or(DEFAULT_PAGE_BACKGROUND));
                view! {
                    <li class="pages-list__item">
                        <span class="pages-list__swatch" style=swatch></span>
                        <span class="pages-list__name">{page.name}</span>
                        <a class="pages-list__action" href=pages::designer_href(id, RenderMode::Edit)>"Design"</a>
                        <a class="pages-list__action" href=pages::designer_href(id, RenderMode::Preview)>"Preview"</a>
                        <button class="pages-list__action pages-list__action--danger" on:click=move |_| on_delete(id)>
                            "Delete"
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="pages-manager">
            <h1 class="pages-manager__title">"Pages"</h1>
            <form class="pages-manager__create" on:submit=on_create>
                <input
                    class="pages-manager__input"
                    type="text"
                    placeholder="Page Name (e.g., Dashboard)"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <button type="submit" class="pages-manager__button" disabled=move || state.get().create_pending>
                    "Create"
                </button>
            </form>
            <Show
                when=move || !state.get().items.is_empty()
                fallback=move || {
                    view! {
                        <p class="pages-manager__empty">
                            {move || {
                                let snapshot = state.get();
                                if snapshot.loading {
                                    "Loading pages..."
                                } else if snapshot.error.is_some() {
                                    "Could not load pages."
                                } else {
                                    "No pages found. Start by creating one above."
                                }
                            }}
                        </p>
                    }
                }
            >
                <ul class="pages-list">{rows}</ul>
            </Show>
        </div>
    }
}
