//! Builder home: entry points for pages and data sources.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. "Create Page" opens an inline dialog that
//! creates a page with the backend's default background and then opens the
//! pages manager; "Create Data source" goes to the data modeler.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::toast::notify;
use crate::state::auth::AuthState;
use crate::state::pages;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::{install_pending_redirect, install_unauth_redirect};

#[component]
pub fn BuilderPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());
    let redirect = RwSignal::new(None::<String>);
    install_pending_redirect(redirect, navigate);

    let show_create = RwSignal::new(false);
    let page_name = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let open_dialog = move |_| {
        page_name.set(String::new());
        show_create.set(true);
    };
    let close_dialog = move |_| show_create.set(false);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        let new_page = match pages::new_page(&page_name.get(), None) {
            Ok(page) => page,
            Err(message) => {
                notify(toast, ToastKind::Error, message);
                return;
            }
        };
        if !auth.get_untracked().is_logged_in() {
            notify(toast, ToastKind::Error, "No session found. Please log in again.");
            return;
        }
        pending.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_page(&new_page).await {
                Ok(()) => {
                    notify(toast, ToastKind::Success, "Page created successfully!");
                    show_create.set(false);
                    redirect.set(Some("/builder/pages".to_owned()));
                }
                Err(e) => {
                    leptos::logging::warn!("page create failed: {e}");
                    notify(toast, ToastKind::Error, e.to_string());
                }
            }
            pending.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (new_page, redirect);
        }
    };

    view! {
        <div class="builder-home">
            <h1 class="builder-home__title">"What do you want to build?"</h1>
            <div class="builder-home__actions">
                <button class="builder-home__action" on:click=open_dialog>
                    "Create Page"
                </button>
                <a class="builder-home__action" href="/builder/datasource">
                    "Create Data source"
                </a>
                <button class="builder-home__action" disabled>
                    "Create Dataset"
                </button>
            </div>
            <a class="builder-home__link" href="/builder/pages">"Manage pages"</a>

            <Show when=move || show_create.get()>
                <div class="dialog-backdrop">
                    <form class="dialog" on:submit=on_create>
                        <h2>"Create page"</h2>
                        <p class="dialog__subtitle">"Enter the name for your page you want to create."</p>
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Enter page name..."
                            prop:value=move || page_name.get()
                            on:input=move |ev| page_name.set(event_target_value(&ev))
                        />
                        <div class="dialog__actions">
                            <button type="button" class="dialog__button" on:click=close_dialog>
                                "Cancel"
                            </button>
                            <button type="submit" class="dialog__button dialog__button--primary" disabled=move || pending.get()>
                                {move || if pending.get() { "Connecting..." } else { "Create" }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}
