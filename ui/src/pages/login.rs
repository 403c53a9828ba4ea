//! Login page: email + password exchanged for a session token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
#[cfg(any(test, feature = "hydrate"))]
use wire::ApiError;

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth::install_pending_redirect;

/// Delay between the success toast and leaving the page.
#[cfg(feature = "hydrate")]
const REDIRECT_DELAY_MS: u32 = 1000;

/// User-facing text for a failed sign-in.
#[cfg(any(test, feature = "hydrate"))]
fn sign_in_failure_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Status { .. } => "Invalid email or password.",
        _ => "Server connection failed.",
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let redirect = RwSignal::new(None::<String>);
    install_pending_redirect(redirect, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::components::toast::notify;
            use crate::state::toast::ToastKind;

            let email_value = email.get().trim().to_owned();
            let password_value = password.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_in(&email_value, &password_value).await {
                    Ok(resp) => {
                        crate::util::session::save_token(&resp.jwt);
                        auth.update(|a| a.sign_in(resp.jwt));
                        notify(toast, ToastKind::Success, "Login successful!");
                        gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        redirect.set(Some("/".to_owned()));
                    }
                    Err(e) => {
                        leptos::logging::warn!("sign-in failed: {e}");
                        notify(toast, ToastKind::Error, sign_in_failure_message(&e));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, toast);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to continue building"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        required
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        required
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Authenticating..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "New to the platform? "
                    <a href="/register">"Create account"</a>
                </p>
            </div>
        </div>
    }
}
