//! Registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wire::SignUpRequest;

use crate::components::toast::notify;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::install_pending_redirect;

#[cfg(feature = "hydrate")]
const REDIRECT_DELAY_MS: u32 = 3000;

#[cfg(feature = "hydrate")]
const SIGN_UP_SUCCESS: &str = "Signup Success. Please check your email to activate your account.";
#[cfg(feature = "hydrate")]
const SIGN_UP_FAILURE: &str = "Signup failed. Please check your details.";

/// Build the sign-up payload, trimming names and email.
fn sign_up_request(first_name: &str, last_name: &str, email: &str, password: &str) -> Result<SignUpRequest, &'static str> {
    let (first_name, last_name, email) = (first_name.trim(), last_name.trim(), email.trim());
    if first_name.is_empty() || last_name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Please fill in all fields");
    }
    Ok(SignUpRequest {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let redirect = RwSignal::new(None::<String>);
    install_pending_redirect(redirect, use_navigate());

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match sign_up_request(&first_name.get(), &last_name.get(), &email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                notify(toast, ToastKind::Error, message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_up(&request).await {
                Ok(()) => {
                    notify(toast, ToastKind::Success, SIGN_UP_SUCCESS);
                    gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    redirect.set(Some("/login".to_owned()));
                }
                Err(e) => {
                    leptos::logging::warn!("sign-up failed: {e}");
                    notify(toast, ToastKind::Error, SIGN_UP_FAILURE);
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    let field = move |placeholder: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="auth-input"
                type=kind
                required
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-form__row">
                        {field("First name", "text", first_name)}
                        {field("Last name", "text", last_name)}
                    </div>
                    {field("Email", "email", email)}
                    {field("Password", "password", password)}
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
