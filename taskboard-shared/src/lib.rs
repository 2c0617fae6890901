//! # Taskboard Shared Library
//!
//! This crate contains the domain core of the taskboard service: data models,
//! credential handling, validation rules, and the service flows that the HTTP
//! layer (`taskboard-api`) drives.
//!
//! ## Module Organization
//!
//! - `models`: Database models (users, tasks) and their queries
//! - `auth`: Password hashing and bearer token issuance/verification
//! - `validation`: Pure input validation rules
//! - `services`: Signup/login and task access orchestration
//! - `db`: Connection pool and migration runner
//! - `error`: Domain error type shared by all flows

pub mod auth;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod validation;

pub use error::Error;

/// Current version of the taskboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
