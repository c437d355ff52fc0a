use super::pipeline::distribute_leads;
use super::types::UploadResponse;
use crate::error::ApiError;
use crate::storage::Store;

use axum::extract::Multipart;
use axum::{Extension, Json};
use std::sync::Arc;

/// Accepts a multipart form with a single `file` field and runs the
/// distribution pipeline on it.
pub async fn handle_upload(
    Extension(store): Extension<Arc<Store>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or("upload").to_string();
            let bytes = field.bytes().await?;
            upload = Some((file_name, bytes.to_vec()));
            break;
        }
    }

    let (file_name, bytes) = upload.ok_or(ApiError::MissingFile)?;

    let report = distribute_leads(&store, &file_name, &bytes).map_err(|err| {
        tracing::error!("Upload of `{}` failed: {}", file_name, err);
        ApiError::Distribute(err)
    })?;

    Ok(Json(UploadResponse {
        msg: "Tasks distributed successfully".to_string(),
        created: report.created,
        tasks: report.tasks,
    }))
}
