//! Registration page: create an account and sign in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_card::AuthCard;
use crate::routes::View;
use crate::state::auth::AuthState;
use crate::util::auth::install_authed_redirect;

const MIN_PASSWORD_LEN: usize = 8;
const MAX_PASSWORD_LEN: usize = 128;

/// Validated registration form values.
#[derive(Debug, PartialEq, Eq)]
struct RegisterInput {
    name: String,
    email: String,
    password: String,
}

fn looks_like_email(email: &str) -> bool {
    let mut parts = email.split('@');
    matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty()
    )
}

fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterInput, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in every field.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    let password_len = password.chars().count();
    if password_len < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password_len > MAX_PASSWORD_LEN {
        return Err("Password must be at most 128 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(RegisterInput { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_authed_redirect(auth, navigate.clone());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_register_input(&name.get(), &email.get(), &password.get(), &confirm.get()) {
            Ok(input) => input,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&input.name, &input.email, &input.password).await {
                    Ok(user) => {
                        log::info!("registered {}", user.email);
                        auth.update(|s| s.resolve(Some(user)));
                        password.set(String::new());
                        confirm.set(String::new());
                        info.set(String::new());
                        navigate(View::Home.path(), leptos_router::NavigateOptions::default());
                    }
                    Err(e) => info.set(format!("Registration failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input, &navigate);
            busy.set(false);
        }
    };

    view! {
        <AuthCard title="Portal" view=View::Register message=info>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-input"
                    type="text"
                    name="name"
                    autocomplete="name"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
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
                    autocomplete="new-password"
                    placeholder="Password (8+ characters)"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    name="confirm"
                    autocomplete="new-password"
                    placeholder="Confirm password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Create Account"
                </button>
            </form>
            <p class="auth-card__footer">
                "Already registered? "
                <a href=View::Login.path()>"Sign in"</a>
            </p>
        </AuthCard>
    }
}
