//! Login page: email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_card::AuthCard;
use crate::routes::View;
use crate::state::auth::AuthState;
use crate::util::auth::install_authed_redirect;

const MISSING_FIELDS: &str = "Enter your email and password.";

/// Trim the email and require both fields. The password is passed through
/// untouched since leading/trailing spaces are significant.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_authed_redirect(auth, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(user) => {
                        log::info!("signed in as {}", user.email);
                        auth.update(|s| s.resolve(Some(user)));
                        password.set(String::new());
                        info.set(String::new());
                        navigate(View::Home.path(), leptos_router::NavigateOptions::default());
                    }
                    Err(e) => info.set(format!("Sign-in failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, &navigate);
            busy.set(false);
        }
    };

    view! {
        <AuthCard title="Portal" view=View::Login message=info>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-input"
                    type="email"
                    name="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    name="password"
                    autocomplete="current-password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Sign In"
                </button>
            </form>
            <p class="auth-card__footer">
                "No account yet? "
                <a href=View::Register.path()>"Create one"</a>
            </p>
        </AuthCard>
    }
}
