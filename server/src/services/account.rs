//! Account registration and password sign-in.
//!
//! Input is validated and normalized before any database access, so
//! malformed requests are rejected without a round-trip. Unknown emails and
//! wrong passwords produce the same `InvalidCredentials` error, and both
//! paths pay for one password verification.

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;

use std::sync::OnceLock;

use rand::seq::IndexedRandom;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::password;
use super::session::SessionUser;

const MAX_NAME_CHARS: usize = 64;
pub const MIN_PASSWORD_CHARS: usize = 8;
const MAX_PASSWORD_CHARS: usize = 128;

const USER_COLORS: &[&str] = &["#4CAF50", "#2196F3", "#FF9800", "#9C27B0", "#E91E63", "#009688", "#795548", "#3F51B5"];

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("name must be 1-64 characters")]
    InvalidName,
    #[error("invalid email")]
    InvalidEmail,
    #[error("password must be 8-128 characters")]
    InvalidPassword,
    #[error("email already registered")]
    EmailTaken,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("password hashing failed: {0}")]
    Hashing(String),
}

/// Validated registration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let mut parts = normalized.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => Some(normalized),
        _ => None,
    }
}

#[must_use]
pub fn normalize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    if len == 0 || len > MAX_NAME_CHARS {
        return None;
    }
    Some(trimmed.to_owned())
}

#[must_use]
pub fn password_is_acceptable(password: &str) -> bool {
    let len = password.chars().count();
    (MIN_PASSWORD_CHARS..=MAX_PASSWORD_CHARS).contains(&len)
}

impl NewAccount {
    /// Validate and normalize raw registration fields.
    ///
    /// # Errors
    ///
    /// Returns the first failing field's error.
    pub fn parse(name: &str, email: &str, password: &str) -> Result<Self, AccountError> {
        let name = normalize_name(name).ok_or(AccountError::InvalidName)?;
        let email = normalize_email(email).ok_or(AccountError::InvalidEmail)?;
        if !password_is_acceptable(password) {
            return Err(AccountError::InvalidPassword);
        }
        Ok(Self { name, email, password: password.to_owned() })
    }
}

/// Validated sign-in input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Normalize the email and require a non-empty password. Length limits are
    /// not enforced here so accounts stay reachable if the policy changes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmail` or `InvalidPassword` for malformed input.
    pub fn parse(email: &str, password: &str) -> Result<Self, AccountError> {
        let email = normalize_email(email).ok_or(AccountError::InvalidEmail)?;
        if password.is_empty() || password.chars().count() > MAX_PASSWORD_CHARS {
            return Err(AccountError::InvalidPassword);
        }
        Ok(Self { email, password: password.to_owned() })
    }
}

fn pick_color() -> &'static str {
    USER_COLORS.choose(&mut rand::rng()).copied().unwrap_or("#4CAF50")
}

/// Hash verified against when the email is unknown, so both failure paths
/// cost the same.
static DUMMY_HASH: OnceLock<String> = OnceLock::new();

fn dummy_hash() -> &'static str {
    DUMMY_HASH.get_or_init(|| password::hash_password("not-a-real-password", password::DEFAULT_ITERATIONS))
}

/// Build the dummy hash up front so the first unknown-email login does not
/// pay for it. Blocking; call from `spawn_blocking`.
pub fn prime_dummy_hash() {
    dummy_hash();
}

async fn hash_blocking(password: String) -> Result<String, AccountError> {
    tokio::task::spawn_blocking(move || password::hash_password(&password, password::DEFAULT_ITERATIONS))
        .await
        .map_err(|e| AccountError::Hashing(e.to_string()))
}

async fn verify_blocking(password: String, stored: Option<String>) -> Result<bool, AccountError> {
    tokio::task::spawn_blocking(move || {
        let stored = match stored.as_deref() {
            Some(hash) => hash,
            None => dummy_hash(),
        };
        password::verify_password(&password, stored)
    })
    .await
    .map_err(|e| AccountError::Hashing(e.to_string()))
}

/// Insert a new user. Fails with `EmailTaken` if the email already exists.
pub async fn register(pool: &PgPool, account: NewAccount) -> Result<SessionUser, AccountError> {
    let password_hash = hash_blocking(account.password).await?;

    let row = sqlx::query(
        r"INSERT INTO users (id, name, email, password_hash, color)
          VALUES ($1, $2, $3, $4, $5)
          ON CONFLICT (email) DO NOTHING
          RETURNING id, name, email, color",
    )
    .bind(Uuid::new_v4())
    .bind(&account.name)
    .bind(&account.email)
    .bind(password_hash)
    .bind(pick_color())
    .fetch_optional(pool)
    .await?;

    let row = row.ok_or(AccountError::EmailTaken)?;
    Ok(SessionUser {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        color: row.get("color"),
    })
}

/// Check credentials and return the matching user.
pub async fn authenticate(pool: &PgPool, credentials: Credentials) -> Result<SessionUser, AccountError> {
    let row = sqlx::query("SELECT id, name, email, color, password_hash FROM users WHERE email = $1")
        .bind(&credentials.email)
        .fetch_optional(pool)
        .await?;

    let stored = row.as_ref().map(|r| r.get::<String, _>("password_hash"));
    let verified = verify_blocking(credentials.password, stored).await?;

    match row {
        Some(r) if verified => Ok(SessionUser {
            id: r.get("id"),
            name: r.get("name"),
            email: r.get("email"),
            color: r.get("color"),
        }),
        _ => Err(AccountError::InvalidCredentials),
    }
}
