//! Auth routes: register, login, logout, and current-user lookup.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::error::ApiError;
use crate::services::account::{self, Credentials, NewAccount};
use crate::services::session::{self, SessionUser};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

fn session_cookie(token: String, secure: bool, ttl_hours: i32) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::hours(i64::from(ttl_hours)))
        .build()
}

fn cleared_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(ApiError::not_signed_in());
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await?
            .ok_or_else(ApiError::not_signed_in)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct RegisterBody {
    name: String,
    email: String,
    password: String,
}

#[derive(Deserialize)]
pub struct LoginBody {
    email: String,
    password: String,
}

/// `POST /api/auth/register` — create the account, start a session, return the user.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<RegisterBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = json_body(payload)?;
    let new_account = NewAccount::parse(&body.name, &body.email, &body.password)?;

    let user = account::register(&state.pool, new_account).await?;
    let token = session::create_session(&state.pool, user.id, state.config.session_ttl_hours).await?;
    tracing::info!(user_id = %user.id, "user registered");

    let jar = jar.add(session_cookie(token, state.config.cookie_secure, state.config.session_ttl_hours));
    Ok((StatusCode::CREATED, jar, Json(user)))
}

/// `POST /api/auth/login` — check credentials, start a session, return the user.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = json_body(payload)?;
    let credentials = Credentials::parse(&body.email, &body.password)?;
    let key = credentials.email.clone();

    if let Err(limited) = state.login_limiter.check_and_record(&key) {
        tracing::warn!(retry_after_secs = limited.retry_after_secs, "sign-in rate limited");
        return Err(limited.into());
    }

    let user = match account::authenticate(&state.pool, credentials).await {
        Ok(user) => user,
        Err(account::AccountError::InvalidCredentials) => {
            tracing::info!("sign-in rejected: invalid credentials");
            return Err(account::AccountError::InvalidCredentials.into());
        }
        Err(e) => return Err(e.into()),
    };
    state.login_limiter.reset(&key);

    let token = session::create_session(&state.pool, user.id, state.config.session_ttl_hours).await?;
    tracing::info!(user_id = %user.id, "user signed in");

    let jar = jar.add(session_cookie(token, state.config.cookie_secure, state.config.session_ttl_hours));
    Ok((jar, Json(user)))
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, user_id = %auth.user.id, "session delete failed");
    } else {
        tracing::info!(user_id = %auth.user.id, "user signed out");
    }

    let jar = CookieJar::new().add(cleared_cookie(state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
