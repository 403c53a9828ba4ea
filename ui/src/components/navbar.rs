//! Top navigation bar reflecting the session state.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::session;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        session::clear_token();
        auth.update(AuthState::sign_out);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"CORE.LOGIC"</a>
            <div class="navbar__links">
                <a href="/">"Home"</a>
                <a href="/builder">"Builder"</a>
            </div>
            <div class="navbar__session">
                <Show
                    when=move || auth.get().is_logged_in()
                    fallback=|| view! { <a href="/login" class="navbar__button">"Login"</a> }
                >
                    <a href="/builder/pages" class="navbar__link">"Pages"</a>
                    <button class="navbar__button" on:click=on_logout>"Logout"</button>
                </Show>
            </div>
        </nav>
    }
}
