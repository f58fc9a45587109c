//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON auth API and stitches it with Leptos SSR
//! rendering under a single Axum router. The three views of the client's
//! route table (`/`, `/login`, `/register`) are rendered by Leptos; compiled
//! assets are served from `/pkg`. The fallback resolves the path against the
//! route table: `/login/` and friends get a 308 to the canonical path, and
//! anything else is a 404.

pub mod auth;

use std::path::PathBuf;

use axum::Router;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes used by the hydrated client.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application: API routes + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "leptos routes registered");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = site_root_path.join(leptos_options.site_pkg_dir.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback(fallback)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn fallback(uri: Uri) -> Response {
    match client::routes::canonical_redirect(uri.path()) {
        Some(target) => {
            let location = match uri.query() {
                Some(query) => format!("{target}?{query}"),
                None => target.to_owned(),
            };
            tracing::debug!(from = %uri.path(), to = %location, "redirecting to canonical path");
            Redirect::permanent(&location).into_response()
        }
        None => (StatusCode::NOT_FOUND, "Page not found.").into_response(),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
