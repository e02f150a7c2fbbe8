//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config;
use crate::pages::auth::AuthPage;

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
/// Provides the page config as context and routes both `/` and `/login` to
/// the auth page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(config::load());

    view! {
        <Stylesheet id="leptos" href="/pkg/auth-portal.css"/>
        <Title text="Sign In"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AuthPage/>
                <Route path=StaticSegment("login") view=AuthPage/>
            </Routes>
        </Router>
    }
}
