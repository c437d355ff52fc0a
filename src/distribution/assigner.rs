//! Round-Robin Assigner
//!
//! Maps each extracted row, in file order, to an agent from the roster
//! snapshot: row `i` goes to roster position `i mod M`. The assignment is a
//! pure function of row index and snapshot. No rotating cursor is persisted,
//! so every upload starts counting at zero and repeated uploads are
//! independent. With `N` rows and `M` agents each agent receives either
//! `⌈N/M⌉` or `⌊N/M⌋` tasks.

use super::roster::RosterSnapshot;
use super::types::LeadRow;
use crate::tasks::types::TaskRecord;

/// Produces one assignment per row. An empty row list yields an empty batch.
pub fn assign_round_robin(rows: Vec<LeadRow>, roster: &RosterSnapshot) -> Vec<TaskRecord> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| TaskRecord {
            first_name: row.first_name.unwrap_or_default(),
            phone: row.phone.unwrap_or_default(),
            notes: row.notes,
            assigned_agent: roster.assignee(index).id.clone(),
        })
        .collect()
}
