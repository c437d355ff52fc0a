//! Authentication Module
//!
//! Credential storage and request gating for the whole API surface.
//!
//! ## Workflow
//! 1. **Register**: An account is created with a bcrypt password hash and a
//!    signed bearer token is returned. The first registration is expected to
//!    be the administrator, so the role defaults to `admin`.
//! 2. **Login**: Credentials are checked against the stored hash; a fresh
//!    token and a password-free profile are returned.
//! 3. **Gate**: `require_auth` verifies the bearer token and attaches the
//!    calling user to the request; `require_admin` additionally restricts
//!    the route to administrators.

pub mod handlers;
pub mod middleware;
pub mod password;
pub mod token;
pub mod types;

#[cfg(test)]
mod tests;
