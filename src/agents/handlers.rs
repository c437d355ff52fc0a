use super::types::{AddAgentRequest, AddAgentResponse};
use crate::auth::password::hash_password;
use crate::auth::types::{Role, User, UserProfile};
use crate::error::ApiError;
use crate::storage::{Store, StoreError};

use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::Utc;
use std::sync::Arc;

pub async fn handle_add_agent(
    Extension(store): Extension<Arc<Store>>,
    Json(req): Json<AddAgentRequest>,
) -> Result<(StatusCode, Json<AddAgentResponse>), ApiError> {
    let agent = User {
        name: req.name,
        email: req.email,
        mobile: req.mobile,
        password_hash: hash_password(&req.password)?,
        role: Role::Agent,
        created_at: Utc::now(),
    };

    let created = store
        .users()
        .insert_unique_by(agent, "email", |u| &u.email)
        .map_err(|err| match err {
            StoreError::DuplicateKey { .. } => ApiError::DuplicateAgentEmail,
            other => ApiError::Store(other),
        })?;

    tracing::info!("Added agent {}", created.doc.email);

    Ok((
        StatusCode::CREATED,
        Json(AddAgentResponse {
            msg: "Agent added successfully".to_string(),
            agent: UserProfile::from_stored(&created),
        }),
    ))
}

pub async fn handle_list_agents(
    Extension(store): Extension<Arc<Store>>,
) -> Result<Json<Vec<UserProfile>>, ApiError> {
    let agents = store.users().find(|u| u.role == Role::Agent)?;
    Ok(Json(agents.iter().map(UserProfile::from_stored).collect()))
}
