//! Upload Pipeline
//!
//! The linear extract → roster → assign → persist → report sequence run once
//! per upload request. No stage is retried and no partial progress survives a
//! failure: the batch insert is all-or-nothing, so the caller either gets the
//! full created task list or an error.

use super::DistributeError;
use super::assigner::assign_round_robin;
use super::extractor::extract_rows;
use super::roster::agent_roster;
use super::types::DistributionReport;
use crate::storage::Store;
use crate::tasks::types::TaskView;

/// Distributes one uploaded file's leads across the current agent roster.
pub fn distribute_leads(
    store: &Store,
    file_name: &str,
    bytes: &[u8],
) -> Result<DistributionReport, DistributeError> {
    let rows = extract_rows(file_name, bytes)?;
    let roster = agent_roster(store)?;

    tracing::info!(
        "Distributing {} leads from `{}` across {} agents",
        rows.len(),
        file_name,
        roster.len()
    );

    let batch = assign_round_robin(rows, &roster);
    let created = store
        .tasks()
        .insert_many(batch)
        .map_err(DistributeError::Persistence)?;

    let tasks = created
        .iter()
        .map(|task| TaskView::from_parts(task, roster.find(&task.doc.assigned_agent)))
        .collect::<Vec<_>>();

    Ok(DistributionReport {
        created: tasks.len(),
        tasks,
    })
}
