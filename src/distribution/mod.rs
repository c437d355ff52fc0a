//! Distribution Module
//!
//! The lead intake pipeline, invoked once per upload request.
//!
//! ## Workflow
//! 1. **Extract**: Parse the uploaded spreadsheet into ordered lead rows.
//! 2. **Roster**: Snapshot the agent list once; an empty roster aborts the
//!    request before any task is constructed.
//! 3. **Assign**: Map row `i` to roster agent `i mod M`, round-robin.
//! 4. **Persist**: Write every assignment as a single all-or-nothing batch.
//! 5. **Report**: Return the created count and the agent-populated task list.
//!
//! The pipeline is strictly sequential with no state carried between
//! invocations; failure at any stage aborts the whole request and nothing is
//! retried.

pub mod assigner;
pub mod extractor;
pub mod handlers;
pub mod pipeline;
pub mod roster;
pub mod types;


pub use extractor::ParseError;

use crate::storage::StoreError;
use thiserror::Error;

/// Failure taxonomy of the upload pipeline.
#[derive(Debug, Error)]
pub enum DistributeError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("No agents available")]
    NoAgentsAvailable,
    #[error("Agent roster unavailable: {0}")]
    StoreUnavailable(#[source] StoreError),
    #[error("Failed to persist tasks: {0}")]
    Persistence(#[source] StoreError),
}
