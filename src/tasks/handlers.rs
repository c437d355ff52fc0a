use super::types::{TaskRecord, TaskView};
use crate::error::ApiError;
use crate::storage::{Store, Stored};

use axum::extract::Path;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_list_tasks(
    Extension(store): Extension<Arc<Store>>,
) -> Result<Json<Vec<TaskView>>, ApiError> {
    let tasks = store.tasks().find_all()?;
    Ok(Json(populate(&store, &tasks)))
}

pub async fn handle_agent_tasks(
    Extension(store): Extension<Arc<Store>>,
    Path(agent_id): Path<String>,
) -> Result<Json<Vec<TaskView>>, ApiError> {
    let tasks = store.tasks().find(|t| t.assigned_agent == agent_id)?;
    Ok(Json(populate(&store, &tasks)))
}

/// Resolves each task's agent reference to name and email for display.
fn populate(store: &Store, tasks: &[Stored<TaskRecord>]) -> Vec<TaskView> {
    tasks
        .iter()
        .map(|task| {
            let agent = store.users().get(&task.doc.assigned_agent);
            TaskView::from_parts(task, agent.as_ref())
        })
        .collect()
}
