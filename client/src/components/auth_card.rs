//! Card frame shared by the login and registration pages.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::View;

/// Centered card with a heading, body, and an optional status line. The
/// view's title is both the subtitle and the document title.
#[component]
pub fn AuthCard(
    title: &'static str,
    view: View,
    /// Status or error text; hidden while empty.
    #[prop(into)]
    message: Signal<String>,
    children: Children,
) -> impl IntoView {
    let subtitle = view.title();
    view! {
        <Title text=subtitle/>
        <div class="auth-page" data-view=view.name()>
            <div class="auth-card">
                <h1>{title}</h1>
                <p class="auth-card__subtitle">{subtitle}</p>
                {children()}
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-message" role="status">{move || message.get()}</p>
                </Show>
            </div>
        </div>
    }
}
