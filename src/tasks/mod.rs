//! Tasks Module
//!
//! Read-only access to persisted assignments. A task binds one uploaded lead
//! to one agent; tasks are created exclusively by the distribution pipeline
//! as a batch and are never mutated or deleted afterwards. This module only
//! lists them, globally or filtered by agent, with the assigned agent's name
//! and email embedded for display.

pub mod handlers;
pub mod types;
