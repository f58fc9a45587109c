use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionUser
// =============================================================================

#[test]
fn session_user_serializes_without_secrets() {
    let user = SessionUser {
        id: Uuid::nil(),
        name: "alice".into(),
        email: "alice@example.com".into(),
        color: "#4CAF50".into(),
    };
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["name"], "alice");
    assert_eq!(value["email"], "alice@example.com");
    assert_eq!(value["id"], "00000000-0000-0000-0000-000000000000");
    assert!(value.get("password_hash").is_none());
    assert_eq!(value.as_object().map(serde_json::Map::len), Some(4));
}

// =============================================================================
// Live database (opt-in)
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;

    async fn pool() -> PgPool {
        let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL required for live-db-tests");
        crate::db::init_pool(&url, 2).await.expect("pool")
    }

    async fn insert_user(pool: &PgPool) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO users (id, name, email, password_hash) VALUES ($1, 'live', $2, 'x')")
            .bind(id)
            .bind(format!("{id}@example.com"))
            .execute(pool)
            .await
            .unwrap();
        id
    }

    #[tokio::test]
    async fn create_validate_delete_round_trip() {
        let pool = pool().await;
        let user_id = insert_user(&pool).await;

        let token = create_session(&pool, user_id, 1).await.unwrap();
        let user = validate_session(&pool, &token).await.unwrap().unwrap();
        assert_eq!(user.id, user_id);

        delete_session(&pool, &token).await.unwrap();
        assert!(validate_session(&pool, &token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn expired_sessions_do_not_validate_and_are_purged() {
        let pool = pool().await;
        let user_id = insert_user(&pool).await;
        let token = generate_token();
        sqlx::query("INSERT INTO sessions (token, user_id, expires_at) VALUES ($1, $2, now() - interval '1 minute')")
            .bind(&token)
            .bind(user_id)
            .execute(&pool)
            .await
            .unwrap();

        assert!(validate_session(&pool, &token).await.unwrap().is_none());
        assert!(purge_expired_sessions(&pool).await.unwrap() >= 1);
    }
}
