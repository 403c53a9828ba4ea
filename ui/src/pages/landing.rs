//! Public landing route.

use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <h1 class="landing__title">"Core Logic Builder"</h1>
            <p class="landing__subtitle">"Model your data, then design pages on top of it."</p>
            <a href="/builder" class="landing__cta">"Go to Build Dashboard"</a>
        </div>
    }
}
