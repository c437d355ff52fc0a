use super::token::TokenKeys;
use super::types::Role;
use crate::error::ApiError;
use crate::storage::Store;

use axum::extract::{Extension, Request};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

/// The verified caller, attached to the request by [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Rejects the request unless it carries a valid bearer token for a user
/// that still exists in the store. On success the caller is attached as an
/// [`AuthUser`] request extension for downstream handlers.
pub async fn require_auth(
    Extension(store): Extension<Arc<Store>>,
    Extension(keys): Extension<Arc<TokenKeys>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(ApiError::MissingToken)?;

    let claims = keys.verify(token).map_err(|err| {
        tracing::warn!("Rejected bearer token: {}", err);
        ApiError::InvalidToken
    })?;

    let user = store.users().get(&claims.sub).ok_or(ApiError::UnknownUser)?;

    request.extensions_mut().insert(AuthUser {
        id: user.id,
        name: user.doc.name,
        email: user.doc.email,
        role: user.doc.role,
    });

    Ok(next.run(request).await)
}

/// Restricts a route to administrators. Must be layered inside
/// [`require_auth`] so the caller is already attached.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    match request.extensions().get::<AuthUser>() {
        Some(user) if user.role == Role::Admin => Ok(next.run(request).await),
        _ => Err(ApiError::AdminOnly),
    }
}
