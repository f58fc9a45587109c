use super::*;

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_email_accepts_basic_address() {
    assert_eq!(normalize_email("  USER@Example.com "), Some("user@example.com".to_owned()));
}

#[test]
fn normalize_email_rejects_invalid_values() {
    assert_eq!(normalize_email(""), None);
    assert_eq!(normalize_email("user"), None);
    assert_eq!(normalize_email("@example.com"), None);
    assert_eq!(normalize_email("user@"), None);
    assert_eq!(normalize_email("a@b@c"), None);
}

// =============================================================================
// normalize_name
// =============================================================================

#[test]
fn normalize_name_trims() {
    assert_eq!(normalize_name("  Ada Lovelace "), Some("Ada Lovelace".to_owned()));
}

#[test]
fn normalize_name_rejects_blank_and_overlong() {
    assert_eq!(normalize_name("   "), None);
    assert_eq!(normalize_name(&"x".repeat(65)), None);
    assert!(normalize_name(&"x".repeat(64)).is_some());
}

// =============================================================================
// password policy
// =============================================================================

#[test]
fn password_length_bounds() {
    assert!(!password_is_acceptable("1234567"));
    assert!(password_is_acceptable("12345678"));
    assert!(password_is_acceptable(&"p".repeat(128)));
    assert!(!password_is_acceptable(&"p".repeat(129)));
}

#[test]
fn password_length_counts_chars() {
    assert!(!password_is_acceptable("ééééééé"));
    assert!(password_is_acceptable("éééééééé"));
}

// =============================================================================
// NewAccount::parse / Credentials::parse
// =============================================================================

#[test]
fn new_account_parse_normalizes_fields() {
    let account = NewAccount::parse(" Ada ", " ADA@Example.com", "analytical").unwrap();
    assert_eq!(
        account,
        NewAccount { name: "Ada".into(), email: "ada@example.com".into(), password: "analytical".into() }
    );
}

#[test]
fn new_account_parse_reports_first_bad_field() {
    assert!(matches!(NewAccount::parse("", "bad", "short"), Err(AccountError::InvalidName)));
    assert!(matches!(NewAccount::parse("Ada", "bad", "short"), Err(AccountError::InvalidEmail)));
    assert!(matches!(NewAccount::parse("Ada", "a@b.com", "short"), Err(AccountError::InvalidPassword)));
}

#[test]
fn credentials_parse_accepts_short_existing_passwords() {
    let creds = Credentials::parse("A@B.com", "pw").unwrap();
    assert_eq!(creds.email, "a@b.com");
    assert_eq!(creds.password, "pw");
}

#[test]
fn credentials_parse_rejects_empty_password() {
    assert!(matches!(Credentials::parse("a@b.com", ""), Err(AccountError::InvalidPassword)));
}

#[test]
fn credentials_parse_rejects_bad_email() {
    assert!(matches!(Credentials::parse("nobody", "password"), Err(AccountError::InvalidEmail)));
}

// =============================================================================
// helpers
// =============================================================================

#[test]
fn pick_color_comes_from_palette() {
    for _ in 0..20 {
        assert!(USER_COLORS.contains(&pick_color()));
    }
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(AccountError::InvalidCredentials.to_string(), "invalid email or password");
    assert_eq!(AccountError::EmailTaken.to_string(), "email already registered");
}

#[tokio::test]
async fn verify_blocking_unknown_user_is_false() {
    let verified = verify_blocking("whatever1".to_owned(), None).await.unwrap();
    assert!(!verified);
}

#[tokio::test]
async fn verify_blocking_matches_stored_hash() {
    let stored = password::hash_password("analytical", 8);
    assert!(verify_blocking("analytical".to_owned(), Some(stored.clone())).await.unwrap());
    assert!(!verify_blocking("analytica1".to_owned(), Some(stored)).await.unwrap());
}

#[tokio::test]
async fn verify_blocking_unknown_user_still_runs_a_full_verify() {
    let stored = password::hash_password("analytical", 10);
    assert!(!verify_blocking("analytical".to_owned(), None).await.unwrap());
    assert!(verify_blocking("analytical".to_owned(), Some(stored)).await.unwrap());
}

#[test]
fn prime_dummy_hash_initializes_the_shared_hash() {
    prime_dummy_hash();
    let primed = DUMMY_HASH.get().expect("dummy hash should be built");
    assert!(primed.starts_with("sha256$"));
    assert!(!password::verify_password("anything", primed));
}
