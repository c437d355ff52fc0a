//! Application Error Type
//!
//! Every handler and middleware returns [`ApiError`] on failure; its
//! `IntoResponse` impl maps each kind to an HTTP status and a `{ "msg": ... }`
//! JSON body. Server-side failures are logged before they are answered.

use crate::distribution::{DistributeError, ParseError};
use crate::storage::StoreError;

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not authorized, no token")]
    MissingToken,
    #[error("Not authorized, token failed")]
    InvalidToken,
    #[error("User not found")]
    UnknownUser,
    #[error("Access denied. Admins only.")]
    AdminOnly,
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Agent with this email already exists")]
    DuplicateAgentEmail,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("No file uploaded")]
    MissingFile,
    #[error("Invalid upload: {0}")]
    Multipart(#[from] MultipartError),
    #[error(transparent)]
    Distribute(#[from] DistributeError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Password hashing failed: {0}")]
    Password(#[from] bcrypt::BcryptError),
    #[error("Token issuing failed: {0}")]
    TokenIssue(jsonwebtoken::errors::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    msg: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingToken | Self::InvalidToken | Self::UnknownUser => {
                StatusCode::UNAUTHORIZED
            }
            Self::AdminOnly => StatusCode::FORBIDDEN,
            Self::UserAlreadyExists
            | Self::DuplicateAgentEmail
            | Self::InvalidCredentials
            | Self::MissingFile
            | Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::Distribute(err) => match err {
                DistributeError::Parse(ParseError::UnsupportedFormat(_)) => {
                    StatusCode::BAD_REQUEST
                }
                DistributeError::Parse(_) => StatusCode::UNPROCESSABLE_ENTITY,
                DistributeError::NoAgentsAvailable => StatusCode::BAD_REQUEST,
                DistributeError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                DistributeError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Store(StoreError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Store(StoreError::DuplicateKey { .. }) => StatusCode::BAD_REQUEST,
            Self::Password(_) | Self::TokenIssue(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }

        (
            status,
            Json(ErrorBody {
                msg: self.to_string(),
            }),
        )
            .into_response()
    }
}
