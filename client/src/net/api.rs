//! REST API helpers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth failures
//! surface as page messages without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiErrorBody;
#[cfg(feature = "hydrate")]
use super::types::{LoginRequest, RegisterRequest};

#[cfg(any(test, feature = "hydrate"))]
const ME_ENDPOINT: &str = "/api/auth/me";
#[cfg(any(test, feature = "hydrate"))]
const LOGIN_ENDPOINT: &str = "/api/auth/login";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_ENDPOINT: &str = "/api/auth/register";
#[cfg(any(test, feature = "hydrate"))]
const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// Pick the user-facing message for a failed request: the server's
/// `{"error": ...}` text when present, otherwise `"<action> failed: <status>"`.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(action: &str, status: u16, body: Option<&str>) -> String {
    body.and_then(|raw| serde_json::from_str::<ApiErrorBody>(raw).ok())
        .map(|parsed| parsed.error)
        .filter(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| format!("{action} failed: {status}"))
}

#[cfg(feature = "hydrate")]
async fn user_or_error(resp: gloo_net::http::Response, action: &str) -> Result<User, String> {
    if !resp.ok() {
        let body = resp.text().await.ok();
        return Err(failure_message(action, resp.status(), body.as_deref()));
    }
    resp.json::<User>().await.map_err(|e| e.to_string())
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ME_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email + password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the server's error message (or a status summary) when the
/// credentials are rejected, the request is rate limited, or the call fails.
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        user_or_error(resp, "login").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/register`. The server signs the
/// new user in on success.
///
/// # Errors
///
/// Returns the server's error message (or a status summary) when validation
/// fails, the email is taken, or the call fails.
pub async fn register(name: &str, email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = RegisterRequest { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        user_or_error(resp, "register").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await;
    }
}
