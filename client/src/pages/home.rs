//! Home page for signed-in users.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Anonymous visitors are sent to
//! `/login` once the session lookup has finished.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::net::types::User;
use crate::routes::View;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("Welcome, {}", user.name),
        None => "Welcome".to_owned(),
    }
}

/// First character of the display name, uppercased, for the avatar badge.
fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_owned())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let signing_out = RwSignal::new(false);

    let on_logout = move |_: leptos::ev::MouseEvent| {
        if signing_out.get() {
            return;
        }
        signing_out.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            log::info!("signed out");
            auth.update(AuthState::clear);
            signing_out.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            auth.update(AuthState::clear);
            signing_out.set(false);
        }
    };

    view! {
        <Title text=View::Home.title()/>
        <div class="home-page" data-view=View::Home.name()>
            <Show
                when=move || auth.get().is_signed_in()
                fallback=move || view! { <p class="home-page__loading">"Loading..."</p> }
            >
                <header class="home-header">
                    <span
                        class="home-avatar"
                        style:background-color=move || {
                            auth.get().user.map(|u| u.color).unwrap_or_default()
                        }
                    >
                        {move || auth.get().user.map(|u| initial(&u.name)).unwrap_or_default()}
                    </span>
                    <h1>{move || greeting(auth.get().user.as_ref())}</h1>
                </header>
                <p class="home-email">
                    {move || auth.get().user.map(|u| u.email).unwrap_or_default()}
                </p>
                <button
                    class="auth-button"
                    type="button"
                    on:click=on_logout
                    disabled=move || signing_out.get()
                >
                    "Sign out"
                </button>
            </Show>
        </div>
    }
}
