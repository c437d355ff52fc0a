//! Agent Roster Provider
//!
//! Fetches the agents an upload will distribute over. The roster is read
//! once per upload and held fixed for the whole round-robin computation;
//! concurrent uploads each take their own snapshot.

use super::DistributeError;
use crate::auth::types::{Role, User};
use crate::storage::{Store, Stored};

/// The ordered, non-empty agent list one upload distributes over.
///
/// Construction fails on an empty agent list, so the assigner can never run
/// against a zero-agent roster.
pub struct RosterSnapshot {
    agents: Vec<Stored<User>>,
}

impl RosterSnapshot {
    pub fn new(agents: Vec<Stored<User>>) -> Result<Self, DistributeError> {
        if agents.is_empty() {
            return Err(DistributeError::NoAgentsAvailable);
        }
        Ok(Self { agents })
    }

    /// The agent that receives the record at `index`: roster position
    /// `index mod M`.
    pub fn assignee(&self, index: usize) -> &Stored<User> {
        &self.agents[index % self.agents.len()]
    }

    pub fn find(&self, agent_id: &str) -> Option<&Stored<User>> {
        self.agents.iter().find(|agent| agent.id == agent_id)
    }

    pub fn agents(&self) -> &[Stored<User>] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

/// Snapshots all agents in the store's natural retrieval order.
pub fn agent_roster(store: &Store) -> Result<RosterSnapshot, DistributeError> {
    let agents = store
        .users()
        .find(|user| user.role == Role::Agent)
        .map_err(DistributeError::StoreUnavailable)?;

    RosterSnapshot::new(agents)
}
