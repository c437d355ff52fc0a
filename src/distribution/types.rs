//! Distribution Data Types
//!
//! The typed row produced by the extractor and the DTOs returned by the
//! upload endpoint.

use crate::tasks::types::TaskView;
use serde::{Deserialize, Serialize};

/// One parsed spreadsheet row.
///
/// Columns absent from the sheet, or empty in this row, are `None`; the
/// assigner turns missing values into empty task fields. No validation
/// happens at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRow {
    pub first_name: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

/// What the pipeline hands back to the caller: how many tasks were created
/// and the created records with their store ids and assigned agents.
#[derive(Debug)]
pub struct DistributionReport {
    pub created: usize,
    pub tasks: Vec<TaskView>,
}

/// Response body of the upload endpoint.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub msg: String,
    pub created: usize,
    pub tasks: Vec<TaskView>,
}
