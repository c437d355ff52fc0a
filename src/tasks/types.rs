//! Task Data Types
//!
//! The persisted assignment record and the populated view returned to
//! clients.

use crate::auth::types::User;
use crate::storage::Stored;
use serde::{Deserialize, Serialize};

/// A lead assigned to one agent, as stored in the `tasks` collection.
///
/// `first_name` and `phone` are empty strings when the uploaded row lacked
/// the column; `notes` stays absent. `assigned_agent` always references an
/// existing agent, since tasks are only ever built from a non-empty roster
/// snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub first_name: String,
    pub phone: String,
    pub notes: Option<String>,
    pub assigned_agent: String,
}

/// Contact details of the assigned agent, embedded in [`TaskView`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRef {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl AgentRef {
    pub fn from_stored(agent: &Stored<User>) -> Self {
        Self {
            id: agent.id.clone(),
            name: agent.doc.name.clone(),
            email: agent.doc.email.clone(),
        }
    }
}

/// A task with its store id and the assigned agent resolved for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskView {
    pub id: String,
    pub first_name: String,
    pub phone: String,
    pub notes: Option<String>,
    pub assigned_agent: Option<AgentRef>,
}

impl TaskView {
    pub fn from_parts(task: &Stored<TaskRecord>, agent: Option<&Stored<User>>) -> Self {
        Self {
            id: task.id.clone(),
            first_name: task.doc.first_name.clone(),
            phone: task.doc.phone.clone(),
            notes: task.doc.notes.clone(),
            assigned_agent: agent.map(AgentRef::from_stored),
        }
    }
}
