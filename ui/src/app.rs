//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::NavBar;
use crate::components::toast::ToastHost;
use crate::pages::{
    builder::BuilderPage, data_modeler::DataModelerPage, designer::DesignerPage, landing::LandingPage,
    login::LoginPage, pages_manager::PagesManagerPage, register::RegisterPage,
};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth and toast contexts and sets up client-side
/// routing. The session token only exists in the browser, so auth stays in
/// its loading state during SSR and is resolved once hydrated.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toast = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toast);

    Effect::new(move || {
        auth.set(AuthState::resolved(crate::util::session::load_token()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/lcnc.css"/>
        <Title text="Core Logic Builder"/>

        <Router>
            <NavBar/>
            <ToastHost/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("builder") view=BuilderPage/>
                    <Route path=(StaticSegment("builder"), StaticSegment("pages")) view=PagesManagerPage/>
                    <Route path=(StaticSegment("builder"), StaticSegment("datasource")) view=DataModelerPage/>
                    <Route path=StaticSegment("designer") view=DesignerPage/>
                </Routes>
            </main>
        </Router>
    }
}
