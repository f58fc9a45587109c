//! Root application component with routing and the auth context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{A, Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::routes::{View, canonical_redirect};
use crate::state::auth::AuthState;

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

/// Rendered for any path the router does not match. A non-canonical
/// spelling of a table path (e.g. `/login/`) is replaced with the canonical
/// one instead.
#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    Effect::new(move |_| {
        if let Some(target) = canonical_redirect(&location.pathname.get()) {
            let search = location.search.get();
            let query = search.trim_start_matches('?');
            let href = if query.is_empty() { target.to_owned() } else { format!("{target}?{query}") };
            navigate(&href, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Title text="Not found"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Page not found."</h1>
                <A href=View::Home.path()>"Go home"</A>
            </div>
        </div>
    }
}

/// Root application component.
///
/// Provides the auth context and maps each route-table entry to its page, so
/// exactly one page is mounted for any matched path.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.update(|s| s.resolve(user));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title formatter=|text: String| format!("{text} · Portal")/>

        <Router>
            <Routes fallback=NotFound>
                <Route path=StaticSegment(View::Login.segment()) view=LoginPage/>
                <Route path=StaticSegment(View::Register.segment()) view=RegisterPage/>
                <Route path=StaticSegment(View::Home.segment()) view=HomePage/>
            </Routes>
        </Router>
    }
}
