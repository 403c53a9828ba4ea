//! Toast host and the helper pages use to raise notifications.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Show `message` and schedule its dismissal.
pub fn notify(toast: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let Some(id) = toast.try_update(|t| t.push(kind, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_DURATION_MS).await;
        toast.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Fixed-position slot rendering the current toast, if any.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    move || {
        toast.get().current.map(|t| {
            view! {
                <div class=t.kind.class() role="status">
                    {t.message}
                </div>
            }
        })
    }
}
