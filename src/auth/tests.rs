//! Auth Module Tests
//!
//! Validates credential handling and token issuance.
//!
//! ## Test Scopes
//! - **Passwords**: bcrypt hash and verify behavior.
//! - **Tokens**: Claim round-trips, signature and expiry rejection.
//! - **Handlers**: Register/login flows against an in-memory store.
//!
//! *Note: The bearer middleware is exercised through the token tests; the
//! surrounding request plumbing is axum's.*

#[cfg(test)]
mod tests {
    use crate::auth::handlers::{handle_login, handle_register};
    use crate::auth::password::{hash_password, verify_password};
    use crate::auth::token::TokenKeys;
    use crate::auth::types::{Claims, LoginRequest, RegisterRequest, Role, User};
    use crate::error::ApiError;
    use crate::storage::{Store, Stored};
    use axum::{Extension, Json};
    use chrono::Utc;
    use std::sync::Arc;

    fn stored_user(id: &str, role: Role) -> Stored<User> {
        Stored {
            id: id.to_string(),
            doc: User {
                name: "Test User".to_string(),
                email: "test@example.com".to_string(),
                mobile: None,
                password_hash: "hash".to_string(),
                role,
                created_at: Utc::now(),
            },
        }
    }

    fn register_request(email: &str, role: Option<Role>) -> RegisterRequest {
        RegisterRequest {
            name: "Admin".to_string(),
            email: email.to_string(),
            password: "hunter2".to_string(),
            role,
        }
    }

    // ============================================================
    // PASSWORD TESTS
    // ============================================================

    #[test]
    fn test_password_hash_and_verify() {
        let hash = hash_password("correct horse").unwrap();

        assert_ne!(hash, "correct horse", "Hash must not be the plain text");
        assert!(verify_password("correct horse", &hash).unwrap());
    }

    #[test]
    fn test_password_verify_rejects_wrong_password() {
        let hash = hash_password("correct horse").unwrap();
        assert!(!verify_password("battery staple", &hash).unwrap());
    }

    // ============================================================
    // TOKEN TESTS
    // ============================================================

    #[test]
    fn test_token_round_trips_claims() {
        let keys = TokenKeys::new("secret");
        let user = stored_user("user-1", Role::Agent);

        let token = keys.issue(&user).unwrap();
        let claims = keys.verify(&token).unwrap();

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.role, Role::Agent);
        assert_eq!(claims.name, "Test User");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_token_rejects_wrong_secret() {
        let keys = TokenKeys::new("secret");
        let other = TokenKeys::new("different secret");

        let token = keys.issue(&stored_user("user-1", Role::Admin)).unwrap();

        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_token_rejects_expired() {
        let keys = TokenKeys::new("secret");

        // Forge a token that expired an hour ago, well past validation leeway
        let claims = Claims {
            sub: "user-1".to_string(),
            role: Role::Admin,
            name: "Test User".to_string(),
            exp: Utc::now().timestamp() - 3600,
        };
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn test_token_rejects_garbage() {
        let keys = TokenKeys::new("secret");
        assert!(keys.verify("not-a-token").is_err());
    }

    // ============================================================
    // REGISTER HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_register_defaults_to_admin_role() {
        let store = Arc::new(Store::new());
        let keys = Arc::new(TokenKeys::new("secret"));

        let (status, Json(response)) = handle_register(
            Extension(store.clone()),
            Extension(keys.clone()),
            Json(register_request("admin@example.com", None)),
        )
        .await
        .unwrap();

        assert_eq!(status, axum::http::StatusCode::CREATED);

        let claims = keys.verify(&response.token).unwrap();
        assert_eq!(claims.role, Role::Admin);

        let user = store
            .users()
            .find_one(|u| u.email == "admin@example.com")
            .unwrap()
            .unwrap();
        assert_eq!(user.doc.role, Role::Admin);
        assert_ne!(user.doc.password_hash, "hunter2");
    }

    #[tokio::test]
    async fn test_register_honors_explicit_role() {
        let store = Arc::new(Store::new());
        let keys = Arc::new(TokenKeys::new("secret"));

        handle_register(
            Extension(store.clone()),
            Extension(keys),
            Json(register_request("agent@example.com", Some(Role::Agent))),
        )
        .await
        .unwrap();

        let user = store
            .users()
            .find_one(|u| u.email == "agent@example.com")
            .unwrap()
            .unwrap();
        assert_eq!(user.doc.role, Role::Agent);
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let store = Arc::new(Store::new());
        let keys = Arc::new(TokenKeys::new("secret"));

        handle_register(
            Extension(store.clone()),
            Extension(keys.clone()),
            Json(register_request("admin@example.com", None)),
        )
        .await
        .unwrap();

        let result = handle_register(
            Extension(store.clone()),
            Extension(keys),
            Json(register_request("admin@example.com", None)),
        )
        .await;

        assert!(matches!(result, Err(ApiError::UserAlreadyExists)));
        assert_eq!(store.users().count(), 1);
    }

    // ============================================================
    // LOGIN HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_login_returns_token_and_profile() {
        let store = Arc::new(Store::new());
        let keys = Arc::new(TokenKeys::new("secret"));

        handle_register(
            Extension(store.clone()),
            Extension(keys.clone()),
            Json(register_request("admin@example.com", None)),
        )
        .await
        .unwrap();

        let Json(response) = handle_login(
            Extension(store),
            Extension(keys.clone()),
            Json(LoginRequest {
                email: "admin@example.com".to_string(),
                password: "hunter2".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.user.email, "admin@example.com");
        assert_eq!(response.user.role, Role::Admin);
        assert!(keys.verify(&response.token).is_ok());
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let store = Arc::new(Store::new());
        let keys = Arc::new(TokenKeys::new("secret"));

        handle_register(
            Extension(store.clone()),
            Extension(keys.clone()),
            Json(register_request("admin@example.com", None)),
        )
        .await
        .unwrap();

        let result = handle_login(
            Extension(store),
            Extension(keys),
            Json(LoginRequest {
                email: "admin@example.com".to_string(),
                password: "wrong".to_string(),
            }),
        )
        .await;

        assert!(matches!(result, Err(ApiError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_rejects_unknown_email() {
        let store = Arc::new(Store::new());
        let keys = Arc::new(TokenKeys::new("secret"));

        let result = handle_login(
            Extension(store),
            Extension(keys),
            Json(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "hunter2".to_string(),
            }),
        )
        .await;

        // Unknown email and wrong password must be indistinguishable
        assert!(matches!(result, Err(ApiError::InvalidCredentials)));
    }
}
