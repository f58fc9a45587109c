use super::*;

#[test]
fn validation_errors_map_to_bad_request() {
    for err in [AccountError::InvalidName, AccountError::InvalidEmail, AccountError::InvalidPassword] {
        assert_eq!(ApiError::from(err).status(), StatusCode::BAD_REQUEST);
    }
}

#[test]
fn email_taken_maps_to_conflict() {
    let api = ApiError::from(AccountError::EmailTaken);
    assert_eq!(api.status(), StatusCode::CONFLICT);
    assert_eq!(api.to_string(), "email already registered");
}

#[test]
fn invalid_credentials_maps_to_unauthorized() {
    let api = ApiError::from(AccountError::InvalidCredentials);
    assert_eq!(api.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(api.to_string(), "invalid email or password");
}

#[test]
fn database_errors_are_hidden() {
    let api = ApiError::from(AccountError::Db(sqlx::Error::RowNotFound));
    assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(api.to_string(), "internal server error");
}

#[test]
fn rate_limit_response_sets_retry_after() {
    let response = ApiError::from(RateLimitError { retry_after_secs: 30 }).into_response();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.headers().get(header::RETRY_AFTER).unwrap(), "30");
}

#[tokio::test]
async fn response_body_is_json_error() {
    let response = ApiError::BadRequest("bad input".to_owned()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({ "error": "bad input" }));
}
