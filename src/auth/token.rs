use super::types::{Claims, User};
use crate::storage::Stored;

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};

/// How long an issued token stays valid.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Signing material derived once from the configured secret and shared
/// across handlers as `Arc<TokenKeys>`.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a signed token carrying the user's id, role, and display name.
    pub fn issue(&self, user: &Stored<User>) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: user.id.clone(),
            role: user.doc.role,
            name: user.doc.name.clone(),
            exp: (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };
        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verifies signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims)
    }
}
