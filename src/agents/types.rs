use crate::auth::types::UserProfile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AddAgentRequest {
    pub name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AddAgentResponse {
    pub msg: String,
    pub agent: UserProfile,
}
