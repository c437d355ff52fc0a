//! Lead Distribution Service Library
//!
//! This library crate defines the core modules of the lead distribution backend.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of five loosely coupled subsystems:
//!
//! - **`auth`**: Credential handling and request gating. Stores bcrypt password
//!   hashes, issues and verifies signed bearer tokens, and provides the
//!   middleware that attaches the calling user to each protected request.
//! - **`agents`**: The administrative surface for managing agent principals,
//!   the only users eligible to receive distributed leads.
//! - **`distribution`**: The lead intake pipeline. Parses an uploaded
//!   spreadsheet into ordered rows, snapshots the agent roster, assigns rows
//!   round-robin, and persists the resulting tasks as one batch.
//! - **`tasks`**: Read-only access to persisted assignments, globally or
//!   filtered by agent, with agent contact details embedded for display.
//! - **`storage`**: The state layer. An in-process document store with
//!   store-assigned ids, insertion-ordered retrieval, and an all-or-nothing
//!   batch insert.

pub mod agents;
pub mod auth;
pub mod distribution;
pub mod error;
pub mod storage;
pub mod tasks;
