use super::password::{hash_password, verify_password};
use super::token::TokenKeys;
use super::types::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, Role, User, UserProfile,
};
use crate::error::ApiError;
use crate::storage::{Store, StoreError};

use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::Utc;
use std::sync::Arc;

pub async fn handle_register(
    Extension(store): Extension<Arc<Store>>,
    Extension(keys): Extension<Arc<TokenKeys>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let user = User {
        name: req.name,
        email: req.email,
        mobile: None,
        password_hash: hash_password(&req.password)?,
        // First registration bootstraps the administrator account.
        role: req.role.unwrap_or(Role::Admin),
        created_at: Utc::now(),
    };

    let created = store
        .users()
        .insert_unique_by(user, "email", |u| &u.email)
        .map_err(|err| match err {
            StoreError::DuplicateKey { .. } => ApiError::UserAlreadyExists,
            other => ApiError::Store(other),
        })?;

    let token = keys.issue(&created).map_err(ApiError::TokenIssue)?;
    tracing::info!("Registered user {} ({:?})", created.doc.email, created.doc.role);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            msg: "User registered successfully".to_string(),
            token,
        }),
    ))
}

pub async fn handle_login(
    Extension(store): Extension<Arc<Store>>,
    Extension(keys): Extension<Arc<TokenKeys>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    // Unknown email and wrong password answer identically.
    let user = store
        .users()
        .find_one(|u| u.email == req.email)?
        .ok_or(ApiError::InvalidCredentials)?;

    if !verify_password(&req.password, &user.doc.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    let token = keys.issue(&user).map_err(ApiError::TokenIssue)?;
    tracing::info!("User {} logged in", user.doc.email);

    Ok(Json(LoginResponse {
        msg: "Login successful".to_string(),
        token,
        user: UserProfile::from_stored(&user),
    }))
}
