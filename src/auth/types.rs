//! Authentication Data Types
//!
//! Defines the persisted user document, the claims carried by bearer tokens,
//! and the request/response DTOs of the auth endpoints.

use crate::storage::Stored;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role tag restricting what a user may do.
///
/// Administrators manage agents and uploads; agents only receive distributed
/// leads and read their own task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Agent,
}

/// A principal stored in the `users` collection.
///
/// Covers both administrators and agents; the `role` field decides which.
/// The password is kept only as a bcrypt hash and never leaves the store;
/// API responses use [`UserProfile`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Password-free view of a user, safe to return to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub role: Role,
}

impl UserProfile {
    pub fn from_stored(user: &Stored<User>) -> Self {
        Self {
            id: user.id.clone(),
            name: user.doc.name.clone(),
            email: user.doc.email.clone(),
            mobile: user.doc.mobile.clone(),
            role: user.doc.role,
        }
    }
}

/// Claims embedded in every issued bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id the token was issued for.
    pub sub: String,
    pub role: Role,
    pub name: String,
    /// Expiry as a unix timestamp; tokens live for 24 hours.
    pub exp: i64,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub msg: String,
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub msg: String,
    pub token: String,
    pub user: UserProfile,
}
