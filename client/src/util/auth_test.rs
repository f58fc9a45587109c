use super::*;
use crate::net::types::User;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        color: "#123456".to_owned(),
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_authed(&state));
}

#[test]
fn should_not_redirect_unauth_when_user_exists() {
    let state = AuthState { user: Some(user()), loading: false };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_redirect_authed_when_user_exists() {
    let state = AuthState { user: Some(user()), loading: false };
    assert!(should_redirect_authed(&state));
}

#[test]
fn guards_are_mutually_exclusive() {
    for state in [
        AuthState { user: None, loading: false },
        AuthState { user: Some(user()), loading: false },
        AuthState { user: None, loading: true },
    ] {
        assert!(!(should_redirect_unauth(&state) && should_redirect_authed(&state)));
    }
}
