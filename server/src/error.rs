//! HTTP error type shared by the API handlers.
//!
//! Every failure leaves the server as a status code plus a JSON body of the
//! form `{"error": "<message>"}`. Internal errors are logged here and reach
//! the client only as a generic message.

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};

use crate::rate_limit::RateLimitError;
use crate::services::account::AccountError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    TooManyRequests(RateLimitError),
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn not_signed_in() -> Self {
        Self::Unauthorized("not signed in".to_owned())
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::InvalidName | AccountError::InvalidEmail | AccountError::InvalidPassword => {
                Self::BadRequest(err.to_string())
            }
            AccountError::EmailTaken => Self::Conflict(err.to_string()),
            AccountError::InvalidCredentials => Self::Unauthorized(err.to_string()),
            AccountError::Db(e) => e.into(),
            AccountError::Hashing(e) => {
                tracing::error!(error = %e, "password hashing task failed");
                Self::Internal
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "database error");
        Self::Internal
    }
}

impl From<RateLimitError> for ApiError {
    fn from(err: RateLimitError) -> Self {
        Self::TooManyRequests(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        let mut response = (status, body).into_response();
        if let Self::TooManyRequests(limit) = &self {
            if let Ok(value) = HeaderValue::from_str(&limit.retry_after_secs.to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
        }
        response
    }
}
