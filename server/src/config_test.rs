use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  yes  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "FALSE", "Off"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// Config::from_lookup
// =============================================================================

#[test]
fn defaults_apply_when_only_database_url_set() {
    let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/portal")])).unwrap();
    assert_eq!(config.database_url, "postgres://localhost/portal");
    assert_eq!(config.port, 3000);
    assert_eq!(config.db_max_connections, 5);
    assert_eq!(config.session_ttl_hours, 720);
    assert!(!config.cookie_secure);
    assert_eq!(config.login_rate_limit, 5);
    assert_eq!(config.login_rate_window, Duration::from_secs(300));
}

#[test]
fn overrides_are_parsed() {
    let config = Config::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db/portal"),
        ("PORT", "8080"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("SESSION_TTL_HOURS", "2"),
        ("COOKIE_SECURE", "yes"),
        ("LOGIN_RATE_LIMIT", "3"),
        ("LOGIN_RATE_WINDOW_SECS", "60"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.db_max_connections, 12);
    assert_eq!(config.session_ttl_hours, 2);
    assert!(config.cookie_secure);
    assert_eq!(config.login_rate_limit, 3);
    assert_eq!(config.login_rate_window, Duration::from_secs(60));
}

#[test]
fn missing_database_url_is_error() {
    let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    assert!(err.to_string().contains("DATABASE_URL"));
}

#[test]
fn blank_database_url_is_error() {
    let err = Config::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
}

#[test]
fn invalid_port_is_error() {
    let err = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x"), ("PORT", "99999")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn invalid_cookie_secure_is_error() {
    let err =
        Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x"), ("COOKIE_SECURE", "maybe")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "COOKIE_SECURE", .. }));
}

#[test]
fn non_positive_session_ttl_is_error() {
    let err =
        Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x"), ("SESSION_TTL_HOURS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "SESSION_TTL_HOURS", .. }));
}
