//! Shared auth and navigation helpers for route components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every builder route applies the same unauthenticated redirect behavior.
//! Async handlers cannot hold the router's navigate function, so they write
//! a destination into a signal and an effect installed here performs the
//! navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Redirect to `/login` whenever auth has loaded and no token is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.get().needs_login() {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Navigate to whatever path is written into `target`, then clear it.
pub fn install_pending_redirect<F>(target: RwSignal<Option<String>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
}
